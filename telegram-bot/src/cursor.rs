//! Offset cursor for `getUpdates`: the next `update_id` the host wants to see.

/// High-water mark over processed updates. Never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCursor {
    next: i64,
    /// Highest id advanced past. `next` saturates at `i64::MAX`, this does not.
    last_seen: Option<i64>,
}

impl UpdateCursor {
    /// Starts at `offset`; 0 means "from the beginning".
    pub fn new(offset: i64) -> Self {
        Self {
            next: offset,
            last_seen: None,
        }
    }

    /// Value to pass as `offset` to the next `getUpdates`.
    pub fn position(&self) -> i64 {
        self.next
    }

    /// False for updates already behind the cursor; those must not be dispatched again.
    pub fn accepts(&self, update_id: i64) -> bool {
        update_id >= self.next && self.last_seen.map_or(true, |last| update_id > last)
    }

    /// Moves to `max(position, update_id + 1)`.
    pub fn advance(&mut self, update_id: i64) {
        self.next = self.next.max(update_id.saturating_add(1));
        self.last_seen = Some(self.last_seen.map_or(update_id, |last| last.max(update_id)));
    }
}
