use crate::direction::SortDirection;

/// Tracks which field the collection is currently sorted by and in which
/// direction. The pair starts empty and ascending.
///
/// Peeking the next direction (`next_direction`) is separate from committing
/// it (`set`) so a failed sort can leave the state exactly as it was.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    field: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The direction a sort on `field` would use: the opposite of the
    /// last-used direction when `field` is already active, ascending when
    /// switching to a different field or when nothing is active yet.
    pub fn next_direction(&self, field: &str) -> SortDirection {
        match self.field.as_deref() {
            Some(active) if active == field => self.direction.toggled(),
            _ => SortDirection::Ascending,
        }
    }

    pub fn set(&mut self, field: &str, direction: SortDirection) {
        self.field = Some(field.to_string());
        self.direction = direction;
    }

    pub fn clear(&mut self) {
        self.field = None;
        self.direction = SortDirection::Ascending;
    }
}
