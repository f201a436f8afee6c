//! Small helpers: count formatting and a ticket-based debouncer.

/// Format a count with thousands separators (`12345` -> `12,345`).
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Keeps only the most recent value pushed during a quiet period.
///
/// Each [`push`](Self::push) returns a ticket; the caller schedules a timer
/// carrying that ticket. When the timer fires, [`fire`](Self::fire) yields the
/// pending value only if no newer push has happened since. Stale timers are
/// harmless no-ops, so none of them need cancelling.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    /// Create an empty debouncer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value, returning its ticket.
    pub fn push(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Take the pending value if `ticket` is the latest.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Whether a value is waiting.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
