use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, HttpResponse,
};
use futures::future::LocalBoxFuture;
use tracing::{event, Level};

use crate::settings::ApiKeySettings;

/// Lets a request through only when the configured header carries exactly the configured key.
/// Anything else gets an empty response with the configured rejection status.
pub struct RequireApiKey {
    settings: Rc<ApiKeySettings>,
}

impl RequireApiKey {
    pub fn new(settings: ApiKeySettings) -> Self {
        Self {
            settings: Rc::new(settings),
        }
    }
}

impl<S: 'static, B> Transform<S, ServiceRequest> for RequireApiKey
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireApiKeyMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireApiKeyMiddleware {
            service,
            settings: self.settings.clone(),
        }))
    }
}

pub struct RequireApiKeyMiddleware<S> {
    service: S,
    settings: Rc<ApiKeySettings>,
}

impl<S> RequireApiKeyMiddleware<S> {
    fn is_authorized(&self, req: &ServiceRequest) -> bool {
        req.headers()
            .get(self.settings.header_name.as_str())
            .is_some_and(|value| value.as_bytes() == self.settings.key.as_bytes())
    }

    fn rejection_status(&self) -> StatusCode {
        StatusCode::from_u16(self.settings.rejection_code).unwrap_or(StatusCode::UNAUTHORIZED)
    }
}

impl<S, B> Service<ServiceRequest> for RequireApiKeyMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.is_authorized(&req) {
            event!(
                target: "backend",
                Level::WARN,
                method = %req.method(),
                path = req.path(),
                "Rejected a request without a valid api key."
            );
            let status = self.rejection_status();
            let (req, _) = req.into_parts();
            let res = HttpResponse::new(status).map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(req, res)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
