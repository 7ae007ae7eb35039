//! Error types for rejected player actions and failed content calls

use thiserror::Error;

use super::types::Stage;

/// Why an action was rejected. State is never touched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("action not available in stage {actual:?} (needs {expected:?})")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("team is not fully staffed")]
    IncompleteTeam,

    #[error("project needs 1-3 distinct themes and at least one platform")]
    InvalidProjectConfig,

    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("no candidate at index {0}")]
    NoSuchCandidate(usize),

    #[error("no decision event is pending")]
    NoPendingEvent,

    #[error("a decision event must be resolved first")]
    EventPending,

    #[error("event has no option {0}")]
    InvalidOption(usize),

    #[error("development is only {0:.1}% complete")]
    DevelopmentIncomplete(f64),

    #[error("development is already finished")]
    DevelopmentFinished,

    #[error("final assets are still being generated")]
    AssetsPending,

    #[error("price must be positive, got {0}")]
    InvalidPrice(i64),

    #[error("sales settlement has not reached month 12")]
    SettlementIncomplete,

    #[error("sales settlement already finished")]
    SettlementFinished,
}

/// Why the content provider could not deliver. Always recovered with a fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content provider unavailable")]
    Unavailable,

    #[error("content request timed out")]
    Timeout,

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("provider error: {0}")]
    Provider(String),
}

pub type ActionResult<T> = std::result::Result<T, ActionError>;
