use sea_orm::Set;
use uuid::Uuid;

use crate::entities::time_off_request;

pub fn time_off_request() -> time_off_request::ActiveModel {
    time_off_request::ActiveModel {
        id: Set(Uuid::now_v7()),
        schema_version: Set(time_off_request::SCHEMA_VERSION),
        start_date: Set("2024-06-01".to_string()),
        end_date: Set("2024-06-03".to_string()),
        name: Set("alice".to_string()),
        details: Set(None),
        status: Set(time_off_request::DEFAULT_STATUS.to_string()),
        deleted: Set(false),
    }
}

pub trait TimeOffRequestFactory {
    fn dates(self, start_date: &str, end_date: &str) -> time_off_request::ActiveModel;
    fn name(self, name: &str) -> time_off_request::ActiveModel;
    fn details(self, details: Option<&str>) -> time_off_request::ActiveModel;
    fn deleted(self, deleted: bool) -> time_off_request::ActiveModel;
}

impl TimeOffRequestFactory for time_off_request::ActiveModel {
    fn dates(mut self, start_date: &str, end_date: &str) -> time_off_request::ActiveModel {
        self.start_date = Set(start_date.to_string());
        self.end_date = Set(end_date.to_string());
        self
    }

    fn name(mut self, name: &str) -> time_off_request::ActiveModel {
        self.name = Set(name.to_string());
        self
    }

    fn details(mut self, details: Option<&str>) -> time_off_request::ActiveModel {
        self.details = Set(details.map(str::to_string));
        self
    }

    fn deleted(mut self, deleted: bool) -> time_off_request::ActiveModel {
        self.deleted = Set(deleted);
        self
    }
}
