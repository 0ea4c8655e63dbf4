//! Node evaluation result.

/// Result of ticking a node once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Maps a predicate outcome onto a status.
    #[inline]
    pub fn from_bool(passed: bool) -> Self {
        if passed { Status::Success } else { Status::Failure }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Swaps `Success` and `Failure`.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}
