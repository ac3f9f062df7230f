use uuid::Uuid;

use crate::{
    db_adapters::RecordMutation,
    use_cases::{error_500, UseCaseError},
};

pub struct UpdateParams<P> {
    pub id: Uuid,
    pub patch: P,
}

/// Never runs duplicate detection. Unknown ids are acknowledged without touching anything.
pub async fn update_record<A, Q>(request: Q, adapter: A) -> Result<String, UseCaseError>
where
    A: RecordMutation,
    Q: TryInto<UpdateParams<A::Patch>, Error = UseCaseError>,
{
    let params = request.try_into()?;
    let rows_affected = adapter
        .partial_update(params.id, params.patch)
        .await
        .map_err(error_500)?;

    Ok(match rows_affected {
        0 => format!("no {} was changed by this update request", A::NAME),
        _ => format!("the specified {} was updated", A::NAME),
    })
}
