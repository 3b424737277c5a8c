use std::rc::Rc;

use crate::models::error::AppError;

/// Observable result of an asynchronous fetch.
///
/// Tracks the loading flag, the most recent error, and the last
/// successfully loaded value. A failed fetch keeps the previous value, so
/// the screen retains its last good display state.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    loading: bool,
    error: Option<String>,
    data: Option<Rc<T>>,
}

impl<T> FetchState<T> {
    /// State before any fetch has been issued.
    pub fn idle() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }

    /// State for a fetch that has just been issued: loading set, the error
    /// flag cleared, previous data kept.
    pub fn begin(&self) -> Self {
        Self {
            loading: true,
            error: None,
            data: self.data.clone(),
        }
    }

    /// State after the fetch settled. A success replaces the data; a
    /// failure records the error and keeps the previous data.
    pub fn resolve(&self, result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self {
                loading: false,
                error: None,
                data: Some(Rc::new(value)),
            },
            Err(e) => Self {
                loading: false,
                error: Some(e.to_string()),
                data: self.data.clone(),
            },
        }
    }

    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message of the most recent failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The last successfully loaded value.
    pub fn data(&self) -> Option<&Rc<T>> {
        self.data.as_ref()
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}
