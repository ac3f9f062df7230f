use sea_orm::Set;
use uuid::Uuid;

use crate::entities::tag;

pub fn tag() -> tag::ActiveModel {
    tag::ActiveModel {
        id: Set(Uuid::now_v7()),
        schema_version: Set(tag::SCHEMA_VERSION),
        name: Set("regular".to_string()),
        color: Set("green".to_string()),
    }
}

pub trait TagFactory {
    fn name(self, name: &str) -> tag::ActiveModel;
    fn color(self, color: &str) -> tag::ActiveModel;
}

impl TagFactory for tag::ActiveModel {
    fn name(mut self, name: &str) -> tag::ActiveModel {
        self.name = Set(name.to_string());
        self
    }

    fn color(mut self, color: &str) -> tag::ActiveModel {
        self.color = Set(color.to_string());
        self
    }
}
