//! Resolution state of a provider query

/// Snapshot of one provider query
///
/// Every derivation treats each variant as ordinary input; an `Error` is a
/// value to render, not a reason to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Query disabled or not yet issued (e.g. no wallet connected)
    Idle,

    /// Request in flight
    Loading,

    /// Resolved with a value
    Success(T),

    /// Resolved with a failure
    Error(String),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    /// The resolved value, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Whether the query resolved successfully
    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    /// Whether the query resolved with a failure
    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    /// Map the resolved value, keeping the state otherwise
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> QueryState<U> {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Success(value) => QueryState::Success(f(value)),
            QueryState::Error(message) => QueryState::Error(message),
        }
    }

    /// Short label for logs and output
    pub fn label(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::Loading => "loading",
            QueryState::Success(_) => "success",
            QueryState::Error(_) => "error",
        }
    }
}
