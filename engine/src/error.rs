use shared::models::{DocumentKind, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Document is empty")]
    EmptyDocument,

    #[error("{kind} is incomplete: {found} of {expected} digits")]
    IncompleteDocument {
        kind: DocumentKind,
        found: usize,
        expected: usize,
    },

    #[error("{kind} check digits do not match")]
    InvalidDocument { kind: DocumentKind },

    #[error("Too many digits for a CPF/CNPJ: {found}")]
    TooManyDigits { found: usize },

    #[error("No amount found in input")]
    EmptyAmount,
}

impl EngineError {
    /// Field-level code for document errors. Amount errors have no code:
    /// an empty monetary field is "no amount", which is the caller's call.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            EngineError::EmptyDocument => Some(ErrorCode::Required),
            EngineError::IncompleteDocument { kind: DocumentKind::Cnpj, .. } => {
                Some(ErrorCode::CnpjIncomplete)
            }
            EngineError::IncompleteDocument { .. } => Some(ErrorCode::CpfIncomplete),
            EngineError::InvalidDocument { kind: DocumentKind::Cnpj } => Some(ErrorCode::CnpjInvalid),
            EngineError::InvalidDocument { .. } => Some(ErrorCode::CpfInvalid),
            EngineError::TooManyDigits { .. } => Some(ErrorCode::CnpjInvalid),
            EngineError::EmptyAmount => None,
        }
    }
}
