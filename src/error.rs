use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    FieldNotFound(String),
    FieldNotComparable {
        field: String,
        kind: &'static str,
    },
    LockPoisoned(&'static str),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::FieldNotFound(field) => {
                write!(f, "no field named {:?} on the record type", field)
            }
            SortError::FieldNotComparable { field, kind } => write!(
                f,
                "field {:?} has no natural ordering ({} values cannot be sorted)",
                field, kind
            ),
            SortError::LockPoisoned(operation) => {
                write!(f, "ordering cache lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for SortError {}
