//! ID generation for the in-memory stores.

/// Hands out monotonically increasing IDs, rendered as decimal strings.
///
/// IDs are never reused, even if records are removed from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a sequence whose first ID is "1".
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a sequence that will not hand out any of `existing_ids`.
    ///
    /// IDs that are not decimal integers cannot collide with generated IDs
    /// and are ignored.
    pub fn after<'a>(existing_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing_ids
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self { next: last + 1 }
    }

    /// Take the next ID from the sequence.
    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
