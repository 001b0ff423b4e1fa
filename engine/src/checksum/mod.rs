// CPF/CNPJ check-digit validation
pub mod cnpj;
pub mod cpf;

pub use cnpj::Cnpj;
pub use cpf::Cpf;

use crate::error::EngineError;
use crate::format::mask::only_digits;
use shared::models::{Document, DocumentKind, ErrorCode, CNPJ_LEN, CPF_LEN};

// Common trait for the mod-11 document schemes
pub trait DocumentScheme: Send + Sync {
    fn kind(&self) -> DocumentKind;
    fn canonical_len(&self) -> usize;
    /// Weights over the base digits, producing the first check digit.
    fn first_weights(&self) -> &'static [u32];
    /// Weights over the base digits plus the first check digit.
    fn second_weights(&self) -> &'static [u32];
}

/// Mod-11 check digit: remainders 0 and 1 map to 0, anything else to 11 - r.
pub fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Both check digits for a base of `canonical_len - 2` digits.
/// Returns `None` when `base` has the wrong digit count.
pub fn compute_check_digits(scheme: &dyn DocumentScheme, base: &str) -> Option<(u32, u32)> {
    let mut digits = to_digit_values(base);
    if digits.len() != scheme.canonical_len() - 2 {
        return None;
    }
    let first = check_digit(&digits, scheme.first_weights());
    digits.push(first);
    let second = check_digit(&digits, scheme.second_weights());
    Some((first, second))
}

/// Length check, repeated-digit exclusion and both check digits.
pub fn validate_with(scheme: &dyn DocumentScheme, text: &str) -> bool {
    let digits = to_digit_values(text);
    let len = scheme.canonical_len();
    if digits.len() != len {
        return false;
    }
    // "000.000.000-00" and friends pass the arithmetic but are never issued
    if is_repeated(&digits) {
        return false;
    }
    let first = check_digit(&digits[..len - 2], scheme.first_weights());
    if first != digits[len - 2] {
        return false;
    }
    check_digit(&digits[..len - 1], scheme.second_weights()) == digits[len - 1]
}

fn to_digit_values(text: &str) -> Vec<u32> {
    text.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

pub fn is_valid_cpf(text: &str) -> bool {
    validate_with(&Cpf, text)
}

pub fn is_valid_cnpj(text: &str) -> bool {
    validate_with(&Cnpj, text)
}

/// Document kind implied by the digit count of `text`.
pub fn detect_kind(text: &str) -> DocumentKind {
    DocumentKind::for_len(only_digits(text).len())
}

/// Length/checksum classification of a CPF-or-CNPJ input.
///
/// Empty input yields `None`: whether an empty field is an error is decided
/// by the caller (see `validate_document_field`). More than 14 digits can
/// never be a valid document and reports as an invalid CNPJ.
pub fn get_cpf_cnpj_error(text: &str) -> Option<ErrorCode> {
    let digits = only_digits(text);
    match digits.len() {
        0 => None,
        1..=10 => Some(ErrorCode::CpfIncomplete),
        CPF_LEN if is_valid_cpf(&digits) => None,
        CPF_LEN => Some(ErrorCode::CpfInvalid),
        12 | 13 => Some(ErrorCode::CnpjIncomplete),
        CNPJ_LEN if is_valid_cnpj(&digits) => None,
        _ => Some(ErrorCode::CnpjInvalid),
    }
}

/// `get_cpf_cnpj_error` plus the field's required policy.
pub fn validate_document_field(text: &str, required: bool) -> Option<ErrorCode> {
    if required && only_digits(text).is_empty() {
        return Some(ErrorCode::Required);
    }
    get_cpf_cnpj_error(text)
}

/// Strict parse into a complete, checksum-valid `Document`.
pub fn parse_document(text: &str) -> Result<Document, EngineError> {
    let digits = only_digits(text);
    let kind = DocumentKind::for_len(digits.len());
    let result = match (kind, kind.canonical_len()) {
        (_, None) => Err(EngineError::EmptyDocument),
        _ if digits.len() > CNPJ_LEN => Err(EngineError::TooManyDigits { found: digits.len() }),
        (kind, Some(expected)) if digits.len() < expected => Err(EngineError::IncompleteDocument {
            kind,
            found: digits.len(),
            expected,
        }),
        (DocumentKind::Cpf, _) if !is_valid_cpf(&digits) => Err(EngineError::InvalidDocument { kind }),
        (DocumentKind::Cnpj, _) if !is_valid_cnpj(&digits) => Err(EngineError::InvalidDocument { kind }),
        _ => Ok(Document::from_digits(&digits)),
    };

    if let Err(ref err) = result {
        // Never log the digits themselves
        tracing::debug!(kind = %kind, len = digits.len(), error = %err, "Document rejected");
    }
    result
}

/// Masked representation of a document ("529.982.247-25").
pub fn format_document(document: &Document) -> String {
    crate::format::mask::mask_for_kind(document.digits(), document.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CPFS: [&str; 3] = ["52998224725", "11144477735", "529.982.247-25"];
    const VALID_CNPJS: [&str; 3] = ["11222333000181", "11444777000161", "11.222.333/0001-81"];

    #[test]
    fn test_check_digit_remainder_rule() {
        // sum 22 -> remainder 0 -> 0; sum 12 -> remainder 1 -> 0; sum 13 -> 2 -> 9
        assert_eq!(check_digit(&[2, 0], &[11, 1]), 0);
        assert_eq!(check_digit(&[1, 1], &[11, 1]), 0);
        assert_eq!(check_digit(&[1, 2], &[11, 1]), 9);
    }

    #[test]
    fn test_compute_check_digits() {
        assert_eq!(compute_check_digits(&Cpf, "529982247"), Some((2, 5)));
        assert_eq!(compute_check_digits(&Cnpj, "112223330001"), Some((8, 1)));
        assert_eq!(compute_check_digits(&Cpf, "52998224"), None);
    }

    #[test]
    fn test_get_error_by_length() {
        assert_eq!(get_cpf_cnpj_error(""), None);
        assert_eq!(get_cpf_cnpj_error("529.982"), Some(ErrorCode::CpfIncomplete));
        assert_eq!(get_cpf_cnpj_error("5299822472"), Some(ErrorCode::CpfIncomplete));
        assert_eq!(get_cpf_cnpj_error("52998224725"), None);
        assert_eq!(get_cpf_cnpj_error("52998224726"), Some(ErrorCode::CpfInvalid));
        assert_eq!(get_cpf_cnpj_error("11111111111"), Some(ErrorCode::CpfInvalid));
        assert_eq!(get_cpf_cnpj_error("112223330001"), Some(ErrorCode::CnpjIncomplete));
        assert_eq!(get_cpf_cnpj_error("1122233300018"), Some(ErrorCode::CnpjIncomplete));
        assert_eq!(get_cpf_cnpj_error("11.222.333/0001-81"), None);
        assert_eq!(get_cpf_cnpj_error("11222333000182"), Some(ErrorCode::CnpjInvalid));
        assert_eq!(get_cpf_cnpj_error("112223330001810"), Some(ErrorCode::CnpjInvalid));
    }

    #[test]
    fn test_error_agrees_with_validators() {
        let mut samples: Vec<String> = VALID_CPFS
            .iter()
            .chain(VALID_CNPJS.iter())
            .map(|s| s.to_string())
            .collect();
        samples.extend(["52998224726", "11222333000180", "00000000000", "99999999999999"].map(String::from));
        samples.extend(["1", "123456789012", "garbage", "529.982.247-25 (home)"].map(String::from));

        for text in &samples {
            let digits = only_digits(text);
            let valid = (digits.len() == CPF_LEN && is_valid_cpf(text))
                || (digits.len() == CNPJ_LEN && is_valid_cnpj(text));
            if digits.is_empty() {
                assert_eq!(get_cpf_cnpj_error(text), None);
            } else {
                assert_eq!(get_cpf_cnpj_error(text).is_none(), valid, "mismatch for {text:?}");
            }
        }
    }

    fn assert_error_agrees(text: &str) {
        let digits = only_digits(text);
        let valid = (digits.len() == CPF_LEN && is_valid_cpf(text))
            || (digits.len() == CNPJ_LEN && is_valid_cnpj(text));
        assert_eq!(get_cpf_cnpj_error(text).is_none(), valid, "mismatch for {text:?}");
    }

    #[test]
    fn test_error_agrees_on_every_single_digit_change() {
        let cases: [(&dyn DocumentScheme, &str); 6] = [
            (&Cpf, "529982247"),
            (&Cpf, "111444777"),
            (&Cpf, "000000001"),
            (&Cnpj, "112223330001"),
            (&Cnpj, "114447770001"),
            (&Cnpj, "987654320150"),
        ];
        for (scheme, base) in cases {
            let (first, second) = compute_check_digits(scheme, base).unwrap();
            assert_ne!(first, 0, "{base}");
            let complete = format!("{base}{first}{second}");
            assert!(validate_with(scheme, &complete), "{complete} should validate");
            assert_eq!(get_cpf_cnpj_error(&complete), None);

            for pos in 0..complete.len() {
                for replacement in '0'..='9' {
                    let mut corrupted: Vec<char> = complete.chars().collect();
                    if corrupted[pos] == replacement {
                        continue;
                    }
                    corrupted[pos] = replacement;
                    let corrupted: String = corrupted.into_iter().collect();
                    assert_error_agrees(&corrupted);
                    // every base here has a non-zero first check digit, so
                    // any single substitution moves it and is caught
                    assert!(get_cpf_cnpj_error(&corrupted).is_some(), "{corrupted} slipped through");
                }
            }
        }
    }

    #[test]
    fn test_required_policy() {
        assert_eq!(validate_document_field("", true), Some(ErrorCode::Required));
        assert_eq!(validate_document_field("  ./-", true), Some(ErrorCode::Required));
        assert_eq!(validate_document_field("", false), None);
        assert_eq!(validate_document_field("529", false), Some(ErrorCode::CpfIncomplete));
        assert_eq!(validate_document_field("52998224725", true), None);
    }

    #[test]
    fn test_detect_kind() {
        assert_eq!(detect_kind(""), DocumentKind::Undetermined);
        assert_eq!(detect_kind("529.982.247-25"), DocumentKind::Cpf);
        assert_eq!(detect_kind("11.222.333/0001"), DocumentKind::Cnpj);
    }

    #[test]
    fn test_parse_document() {
        let doc = parse_document("529.982.247-25").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);
        assert_eq!(format_document(&doc), "529.982.247-25");

        let doc = parse_document("11222333000181").unwrap();
        assert_eq!(format_document(&doc), "11.222.333/0001-81");

        assert_eq!(parse_document("").unwrap_err(), EngineError::EmptyDocument);
        assert_eq!(
            parse_document("1122233300").unwrap_err(),
            EngineError::IncompleteDocument { kind: DocumentKind::Cpf, found: 10, expected: 11 }
        );
        assert_eq!(
            parse_document("1122233300018").unwrap_err(),
            EngineError::IncompleteDocument { kind: DocumentKind::Cnpj, found: 13, expected: 14 }
        );
        assert_eq!(
            parse_document("11111111111").unwrap_err(),
            EngineError::InvalidDocument { kind: DocumentKind::Cpf }
        );
        assert_eq!(
            parse_document("112223330001811").unwrap_err(),
            EngineError::TooManyDigits { found: 15 }
        );
    }
}
