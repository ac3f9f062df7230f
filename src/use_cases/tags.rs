use serde::Deserialize;

use crate::db_adapters::{
    tag_adapter::{NewTag, TagFilters, TagPatch},
    FieldPatch,
};

use super::{
    non_empty, parse_id,
    records::{CreateParams, SearchParams, UpdateParams},
    required_text, target_id, UseCaseError,
};

#[derive(Deserialize, Debug, Default)]
pub struct TagSearchQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl TryFrom<TagSearchQuery> for SearchParams<TagFilters> {
    type Error = UseCaseError;

    fn try_from(query: TagSearchQuery) -> Result<Self, Self::Error> {
        if let Some(id) = non_empty(query.id) {
            return parse_id(&id).map(SearchParams::ById);
        }
        Ok(SearchParams::Filtered(TagFilters {
            name: non_empty(query.name),
            color: non_empty(query.color),
        }))
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TagCreateRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    pub ignore_duplicates: Option<bool>,
}

impl TryFrom<TagCreateRequest> for CreateParams<NewTag> {
    type Error = UseCaseError;

    fn try_from(request: TagCreateRequest) -> Result<Self, Self::Error> {
        Ok(CreateParams {
            record: NewTag {
                name: required_text(request.name, "name")?,
                color: required_text(request.color, "color")?,
            },
            ignore_duplicates: request.ignore_duplicates.unwrap_or(false),
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct TagUpdateRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub color: FieldPatch<String>,
}

impl TryFrom<TagUpdateRequest> for UpdateParams<TagPatch> {
    type Error = UseCaseError;

    fn try_from(request: TagUpdateRequest) -> Result<Self, Self::Error> {
        Ok(UpdateParams {
            id: target_id(request.id, "tag")?,
            patch: TagPatch {
                name: request.name.trimmed(),
                color: request.color.trimmed(),
            },
        })
    }
}
