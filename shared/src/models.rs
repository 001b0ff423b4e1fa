use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical digit count of a CPF.
pub const CPF_LEN: usize = 11;
/// Canonical digit count of a CNPJ.
pub const CNPJ_LEN: usize = 14;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
    Undetermined,
}

impl DocumentKind {
    /// Kind implied by a digit count: up to 11 digits is a CPF candidate,
    /// anything longer a CNPJ candidate.
    pub fn for_len(len: usize) -> Self {
        match len {
            0 => DocumentKind::Undetermined,
            1..=CPF_LEN => DocumentKind::Cpf,
            _ => DocumentKind::Cnpj,
        }
    }

    pub fn canonical_len(&self) -> Option<usize> {
        match self {
            DocumentKind::Cpf => Some(CPF_LEN),
            DocumentKind::Cnpj => Some(CNPJ_LEN),
            DocumentKind::Undetermined => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
            DocumentKind::Undetermined => "CPF/CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A taxpayer document reduced to its digits. The kind is always derived
/// from the digit count, never stored, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    digits: String,
}

// Wire shape of `Document`; deserialized input is re-normalized by `from_digits`.
#[derive(Deserialize)]
struct RawDocument {
    digits: String,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Document::from_digits(&raw.digits)
    }
}

impl Document {
    /// Wraps a digit string. Non-digit characters are dropped and the
    /// stream is clamped to the CNPJ length.
    pub fn from_digits(raw: &str) -> Self {
        let digits = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CNPJ_LEN)
            .collect();
        Self { digits }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::for_len(self.digits.len())
    }

    /// True once the digit count reaches the canonical length for its kind.
    /// Only complete documents are worth a checksum evaluation.
    pub fn is_complete(&self) -> bool {
        self.kind().canonical_len() == Some(self.digits.len())
    }
}

/// Field-level validation outcome handed back to the UI. Serialized as the
/// snake_case code; `message()` carries the pt-BR text shown to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    CpfIncomplete,
    CpfInvalid,
    CnpjIncomplete,
    CnpjInvalid,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::CpfIncomplete => "cpf_incomplete",
            ErrorCode::CpfInvalid => "cpf_invalid",
            ErrorCode::CnpjIncomplete => "cnpj_incomplete",
            ErrorCode::CnpjInvalid => "cnpj_invalid",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Required => "Documento é obrigatório",
            ErrorCode::CpfIncomplete => "CPF incompleto",
            ErrorCode::CpfInvalid => "CPF inválido",
            ErrorCode::CnpjIncomplete => "CNPJ incompleto",
            ErrorCode::CnpjInvalid => "CNPJ inválido",
        }
    }

    /// Document kind the error talks about, if any.
    pub fn kind(&self) -> Option<DocumentKind> {
        match self {
            ErrorCode::Required => None,
            ErrorCode::CpfIncomplete | ErrorCode::CpfInvalid => Some(DocumentKind::Cpf),
            ErrorCode::CnpjIncomplete | ErrorCode::CnpjInvalid => Some(DocumentKind::Cnpj),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed amount in cents. The only representation that is propagated;
/// display strings are always derived from it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MonetaryAmount(pub i64);

impl MonetaryAmount {
    pub const ZERO: MonetaryAmount = MonetaryAmount(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for MonetaryAmount {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}
