use thiserror::Error;

use crate::dao::base::DaoError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("No access to this invitation")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Content validation failed")]
    Validation(Vec<String>),
    #[error("No draft to publish")]
    NoDraft,
    #[error("Cannot {action} an invitation that is {from}")]
    InvalidTransition {
        action: &'static str,
        from: &'static str,
    },
    #[error("Only draft invitations can be deleted")]
    NotDeletable,
    #[error("Invitation was modified concurrently")]
    Conflict,
    #[error("Could not generate a unique public id after {attempts} attempts")]
    PublicIdExhausted { attempts: u32 },
    #[error("Storage error: {0}")]
    Storage(#[from] DaoError),
}

impl ServiceError {
    /// Stable machine-readable reason surfaced to API callers.
    pub fn reason(&self) -> &'static str {
        match self {
            ServiceError::Unauthorized => "unauthorized",
            ServiceError::Forbidden => "forbidden",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Validation(_) => "validation_failed",
            ServiceError::NoDraft => "no_draft",
            ServiceError::InvalidTransition { .. } => "invalid_transition",
            ServiceError::NotDeletable => "not_deletable",
            ServiceError::Conflict => "conflict",
            ServiceError::PublicIdExhausted { .. } => "public_id_exhausted",
            ServiceError::Storage(_) => "storage",
        }
    }

    /// Whether retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::PublicIdExhausted { .. } | ServiceError::Conflict | ServiceError::Storage(_)
        )
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
