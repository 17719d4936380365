//! Error types for search and planning.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by the A* search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The wall-clock budget ran out before a goal state was popped.
    #[error("search exceeded its time budget of {0:?}")]
    Timeout(Duration),

    /// The open queue drained without reaching a goal state.
    #[error("no path to a goal state")]
    NoPath,
}

/// Errors raised by the planner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Search(#[from] SearchError),

    /// No primitive action maps one path state onto the next. Cannot occur
    /// for paths produced by the state graph itself, but defended against.
    #[error("no primitive action connects adjacent plan states")]
    Reconstruction,
}
