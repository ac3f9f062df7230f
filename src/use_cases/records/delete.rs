use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db_adapters::RecordMutation,
    use_cases::{error_500, UseCaseError},
};

#[derive(Deserialize, Debug, Default)]
pub struct DeleteRequest {
    pub ids: Option<Vec<String>>,
    pub permanent: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub struct DeleteParams {
    pub ids: Vec<Uuid>,
    pub permanent: bool,
}

impl TryFrom<DeleteRequest> for DeleteParams {
    type Error = UseCaseError;

    fn try_from(request: DeleteRequest) -> Result<Self, Self::Error> {
        let invalid =
            || UseCaseError::BadRequest("the delete request was empty or invalid".to_string());
        let ids = request
            .ids
            .unwrap_or_default()
            .iter()
            .map(|id| Uuid::parse_str(id.trim()).map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            ids,
            permanent: request.permanent.unwrap_or(false),
        })
    }
}

/// Record types without a deleted flag are always erased.
pub async fn delete_records<A: RecordMutation>(
    request: DeleteRequest,
    adapter: A,
) -> Result<String, UseCaseError> {
    let params = DeleteParams::try_from(request)?;

    if params.permanent || !A::SOFT_DELETABLE {
        adapter.delete_many(params.ids).await.map_err(error_500)?;
        Ok(format!(
            "the specified {} were PERMANENTLY deleted from this database",
            A::PLURAL
        ))
    } else {
        adapter
            .soft_delete_many(params.ids)
            .await
            .map_err(error_500)?;
        Ok(format!(
            "the specified {} were deleted from this database",
            A::PLURAL
        ))
    }
}
