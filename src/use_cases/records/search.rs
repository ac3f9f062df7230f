use tracing::{event, Level};
use uuid::Uuid;

use crate::{
    db_adapters::RecordQuery,
    use_cases::{error_500, UseCaseError},
};

pub enum SearchParams<F> {
    /// Every other parameter is ignored once an id is given.
    ById(Uuid),
    Filtered(F),
}

#[derive(Debug, PartialEq)]
pub enum SearchOutcome<R> {
    Found { records: Vec<R>, message: String },
    NotFound { message: String },
}

pub async fn search_records<A, Q>(
    query: Q,
    adapter: A,
) -> Result<SearchOutcome<A::Record>, UseCaseError>
where
    A: RecordQuery,
    Q: TryInto<SearchParams<A::Filters>, Error = UseCaseError>,
{
    match query.try_into()? {
        SearchParams::ById(id) => match adapter.get_by_id(id).await.map_err(error_500)? {
            Some(record) => Ok(SearchOutcome::Found {
                records: vec![record],
                message: format!("found a {} with this id {}", A::NAME, id),
            }),
            None => Ok(SearchOutcome::NotFound {
                message: format!("unable to find a {} with this id {}", A::NAME, id),
            }),
        },
        SearchParams::Filtered(filters) => {
            let condition = A::search_condition(&filters);
            if condition.is_empty() {
                let records = adapter.get_all().await.map_err(error_500)?;
                return Ok(SearchOutcome::Found {
                    records,
                    message: format!("no search query provided, returning all {}", A::PLURAL),
                });
            }

            let records = adapter.filter(condition).get_all().await.map_err(error_500)?;
            event!(Level::DEBUG, count = records.len(), "searched {}", A::PLURAL);
            if records.is_empty() {
                Ok(SearchOutcome::NotFound {
                    message: format!("unable to find any {} with this search query", A::PLURAL),
                })
            } else {
                Ok(SearchOutcome::Found {
                    records,
                    message: "found results matching search query".to_string(),
                })
            }
        }
    }
}
