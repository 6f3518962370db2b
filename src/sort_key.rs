use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::error::SortError;

/// The orderable image of a single record field.
///
/// Records are reflected through their serde representation, so a field's
/// value arrives here as a `serde_json::Value` and is narrowed to one of the
/// scalar kinds below. Arrays and nested objects carry no natural ordering
/// and are rejected with `FieldNotComparable`.
#[derive(Clone, Debug)]
pub enum SortKey {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

/// Extract the sort key for `field` from a record.
///
/// The record is serialized once and the named field is looked up on the
/// resulting object. A record that does not serialize to an object (for
/// example a newtype over a scalar) has no addressable fields, so the lookup
/// fails the same way a missing name does.
pub fn sort_key_of<T: Serialize>(record: &T, field: &str) -> Result<SortKey, SortError> {
    let value = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(_) => return Err(SortError::FieldNotFound(field.to_string())),
    };

    let fields = match value {
        Value::Object(fields) => fields,
        _ => return Err(SortError::FieldNotFound(field.to_string())),
    };

    match fields.get(field) {
        Some(value) => SortKey::from_value(value, field),
        None => Err(SortError::FieldNotFound(field.to_string())),
    }
}

impl SortKey {
    fn from_value(value: &Value, field: &str) -> Result<SortKey, SortError> {
        match value {
            Value::Null => Ok(SortKey::Null),
            Value::Bool(value) => Ok(SortKey::Bool(*value)),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(SortKey::Int(int))
                } else if let Some(uint) = number.as_u64() {
                    Ok(SortKey::UInt(uint))
                } else {
                    Ok(SortKey::Float(number.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(text) => Ok(SortKey::Text(text.clone())),
            Value::Array(_) => Err(SortError::FieldNotComparable {
                field: field.to_string(),
                kind: "array",
            }),
            Value::Object(_) => Err(SortError::FieldNotComparable {
                field: field.to_string(),
                kind: "object",
            }),
        }
    }

    // Keys of different kinds order by kind so the comparator stays total.
    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Bool(_) => 1,
            SortKey::Int(_) | SortKey::UInt(_) | SortKey::Float(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (UInt(a), UInt(b)) => a.cmp(b),
            (Int(a), UInt(b)) => {
                if *a < 0 {
                    Ordering::Less
                } else {
                    (*a as u64).cmp(b)
                }
            }
            (UInt(a), Int(b)) => {
                if *b < 0 {
                    Ordering::Greater
                } else {
                    a.cmp(&(*b as u64))
                }
            }
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (UInt(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), UInt(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
