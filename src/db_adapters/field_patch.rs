use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Deserializer};

/// The state of one field in a sparse update payload.
///
/// Deserialized with `#[serde(default)]`: an absent key stays `Unchanged`,
/// an explicit `null` becomes `Clear`, anything else is `Set`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch<T> {
    Unchanged,
    Set(T),
    Clear,
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldPatch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}

impl<T> FieldPatch<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldPatch<U> {
        match self {
            Self::Unchanged => FieldPatch::Unchanged,
            Self::Set(value) => FieldPatch::Set(f(value)),
            Self::Clear => FieldPatch::Clear,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<FieldPatch<U>, E> {
        Ok(match self {
            Self::Unchanged => FieldPatch::Unchanged,
            Self::Set(value) => FieldPatch::Set(f(value)?),
            Self::Clear => FieldPatch::Clear,
        })
    }

    /// Turns a clear into `Unchanged`.
    pub fn ignore_clear(self) -> Self {
        match self {
            Self::Clear => Self::Unchanged,
            other => other,
        }
    }

    /// For columns that cannot be removed: a clear leaves the stored value alone.
    pub fn into_required_value(self) -> ActiveValue<T>
    where
        T: Into<Value>,
    {
        match self {
            Self::Set(value) => ActiveValue::Set(value),
            Self::Unchanged | Self::Clear => ActiveValue::NotSet,
        }
    }

    /// For nullable columns: a clear removes the stored value.
    pub fn into_nullable_value(self) -> ActiveValue<Option<T>>
    where
        Option<T>: Into<Value>,
    {
        match self {
            Self::Set(value) => ActiveValue::Set(Some(value)),
            Self::Clear => ActiveValue::Set(None),
            Self::Unchanged => ActiveValue::NotSet,
        }
    }
}

impl FieldPatch<String> {
    /// Trims text; a value that is empty afterwards counts as a clear.
    pub fn trimmed(self) -> Self {
        match self {
            Self::Set(value) => match value.trim() {
                "" => Self::Clear,
                trimmed => Self::Set(trimmed.to_string()),
            },
            other => other,
        }
    }
}
