use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert!(SortDirection::default().is_ascending());
    }

    #[test]
    fn toggled() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn serialize_deserialize() {
        let serialized = serde_json::to_string(&SortDirection::Descending).unwrap();
        assert_eq!(serialized, "\"descending\"");
        let deserialized: SortDirection = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, SortDirection::Descending);
    }
}
