//! Two-phase value used to batch several mutations into one host update.

/// A committed value with an optional staged replacement.
///
/// Reads through [`Deferred::get`] see the staged value when there is one,
/// so a sequence of layout passes can build on each other before anything
/// is pushed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred<T> {
    committed: T,
    pending: Option<T>,
}

impl<T: Copy> Deferred<T> {
    pub fn new(value: T) -> Self {
        Self {
            committed: value,
            pending: None,
        }
    }

    /// Pending value if staged, otherwise the committed one.
    pub fn get(&self) -> T {
        self.pending.unwrap_or(self.committed)
    }

    pub fn committed(&self) -> T {
        self.committed
    }

    pub fn stage(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Promote the staged value. Returns the value it replaced, or `None`
    /// when nothing was staged.
    pub fn apply(&mut self) -> Option<T> {
        let next = self.pending.take()?;
        Some(std::mem::replace(&mut self.committed, next))
    }
}
