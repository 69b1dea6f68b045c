//! Planner and store failures.

use std::fmt;

#[derive(Debug)]
pub enum PlannerError {
    /// The upload has no readable header or cannot be decoded.
    Format(String),
    /// No valid coordinates were left to route.
    EmptyInput,
}

impl PlannerError {
    pub fn format(message: impl Into<String>) -> Self {
        PlannerError::Format(message.into())
    }

    /// Both kinds are caused by the uploaded data, never by the planner.
    pub fn is_client_error(&self) -> bool {
        match self {
            PlannerError::Format(_) | PlannerError::EmptyInput => true,
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Format(message) => write!(f, "invalid format: {}", message),
            PlannerError::EmptyInput => write!(f, "no valid coordinates to route"),
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        PlannerError::Format(err.to_string())
    }
}

/// Route persistence failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(u64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "route {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}
