use tracing::{event, Level};

use crate::{
    db_adapters::{RecordMutation, RecordQuery},
    use_cases::{error_500, UseCaseError},
};

pub struct CreateParams<N> {
    pub record: N,
    /// Skips duplicate detection entirely.
    pub ignore_duplicates: bool,
}

#[derive(Debug, PartialEq)]
pub enum CreateOutcome<N, R> {
    Created(R),
    /// Nothing was persisted.
    FoundDuplicates {
        candidate: N,
        existing: Vec<R>,
        message: String,
    },
}

pub async fn create_record<A, Q>(
    request: Q,
    adapter: A,
) -> Result<CreateOutcome<A::NewRecord, A::Record>, UseCaseError>
where
    A: RecordQuery + RecordMutation + Clone,
    Q: TryInto<CreateParams<A::NewRecord>, Error = UseCaseError>,
{
    let params = request.try_into()?;

    if !params.ignore_duplicates {
        let existing = adapter
            .clone()
            .filter(A::duplicate_condition(&params.record))
            .get_all()
            .await
            .map_err(error_500)?;
        if !existing.is_empty() {
            event!(
                Level::INFO,
                count = existing.len(),
                "refused to create a {} with existing duplicates",
                A::NAME
            );
            return Ok(CreateOutcome::FoundDuplicates {
                candidate: params.record,
                existing,
                message: A::DUPLICATE_MESSAGE.to_string(),
            });
        }
    }

    adapter
        .create(params.record)
        .await
        .map(CreateOutcome::Created)
        .map_err(error_500)
}
