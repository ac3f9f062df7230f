//! Search, create, update and delete, written once for every record type.
mod create;
mod delete;
mod search;
mod update;

pub use create::{create_record, CreateOutcome, CreateParams};
pub use delete::{delete_records, DeleteParams, DeleteRequest};
pub use search::{search_records, SearchOutcome, SearchParams};
pub use update::{update_record, UpdateParams};
