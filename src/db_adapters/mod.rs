mod field_patch;
pub mod reservation_adapter;
pub mod tag_adapter;
pub mod time_off_request_adapter;

use std::future::Future;

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, Condition, DbErr, Value,
};
use serde::Serialize;
use uuid::Uuid;

pub use field_patch::FieldPatch;

/// Per record type knowledge shared by the query and mutation sides.
pub trait RecordAdapter {
    type Record: Serialize;
    type Filters;
    type NewRecord: Serialize;
    type Patch;

    /// Labels used in response messages.
    const NAME: &'static str;
    const PLURAL: &'static str;
    const DUPLICATE_MESSAGE: &'static str;
    /// Whether records carry a `deleted` flag. Types without one are only ever erased.
    const SOFT_DELETABLE: bool;

    /// Predicate selecting the records a search asks for.
    /// An empty condition means "every record".
    fn search_condition(filters: &Self::Filters) -> Condition;

    /// Predicate selecting active records equivalent to `record`.
    fn duplicate_condition(record: &Self::NewRecord) -> Condition;
}

pub trait RecordQuery: RecordAdapter + Sized {
    fn filter(self, condition: Condition) -> Self;
    fn get_all(self) -> impl Future<Output = Result<Vec<Self::Record>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Self::Record>, DbErr>>;
}

pub trait RecordMutation: RecordAdapter + Sized {
    fn create(self, record: Self::NewRecord) -> impl Future<Output = Result<Self::Record, DbErr>>;
    /// Returns the number of rows touched.
    fn partial_update(
        self,
        id: Uuid,
        patch: Self::Patch,
    ) -> impl Future<Output = Result<u64, DbErr>>;
    fn delete_many(self, ids: Vec<Uuid>) -> impl Future<Output = Result<u64, DbErr>>;
    fn soft_delete_many(self, ids: Vec<Uuid>) -> impl Future<Output = Result<u64, DbErr>>;
}

/// Exact match on the start bound, or an inclusive range once the end bound is known too.
#[derive(Debug, Clone, PartialEq)]
pub enum ExactOrRange<T> {
    Exact(T),
    Range(T, T),
}

impl<T> ExactOrRange<T> {
    /// An end bound without a start bound is ignored.
    pub fn from_bounds(start: Option<T>, end: Option<T>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::Range(start, end)),
            (Some(start), None) => Some(Self::Exact(start)),
            (None, _) => None,
        }
    }
}

impl<T: Into<Value>> ExactOrRange<T> {
    pub fn condition(self, column: impl ColumnTrait) -> SimpleExpr {
        match self {
            Self::Exact(value) => column.eq(value),
            Self::Range(start, end) => column.between(start, end),
        }
    }
}

/// `LOWER(column) LIKE '%needle%'`, with `%` and `_` in the needle matched literally.
pub(crate) fn contains_ignore_case(column: impl ColumnTrait, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
