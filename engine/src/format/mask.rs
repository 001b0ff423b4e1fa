// Progressive punctuation masks for CPF/CNPJ fields.
//
// Masks are always re-derived from the digits, so the punctuation never
// becomes data: onlyDigits(mask(d)) == d for any d within the template.
use shared::models::{DocumentKind, CNPJ_LEN, CPF_LEN};

/// Fixed literals inserted into a digit stream. `(n, c)` means "emit `c`
/// after digit n", and only once a further digit follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskTemplate {
    pub separators: &'static [(usize, char)],
    pub max_digits: usize,
}

/// `XXX.XXX.XXX-XX`
pub const CPF_TEMPLATE: MaskTemplate = MaskTemplate {
    separators: &[(3, '.'), (6, '.'), (9, '-')],
    max_digits: CPF_LEN,
};

/// `XX.XXX.XXX/XXXX-XX`
pub const CNPJ_TEMPLATE: MaskTemplate = MaskTemplate {
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
    max_digits: CNPJ_LEN,
};

/// Strips every character that is not an ASCII digit.
pub fn only_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Inserts the template's literals into `digits`, truncated to `max_digits`.
/// Idempotent: masking the output again yields the same string.
pub fn apply_mask(digits: &str, template: &MaskTemplate) -> String {
    let mut out = String::with_capacity(template.max_digits + template.separators.len());
    for (idx, digit) in digits
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(template.max_digits)
        .enumerate()
    {
        if let Some((_, sep)) = template.separators.iter().find(|(pos, _)| *pos == idx) {
            out.push(*sep);
        }
        out.push(digit);
    }
    out
}

pub fn mask_cpf(text: &str) -> String {
    apply_mask(&only_digits(text), &CPF_TEMPLATE)
}

pub fn mask_cnpj(text: &str) -> String {
    apply_mask(&only_digits(text), &CNPJ_TEMPLATE)
}

/// CPF template while the stream fits a CPF, CNPJ template past that.
pub fn mask_cpf_cnpj(text: &str) -> String {
    let digits = only_digits(text);
    if digits.len() <= CPF_LEN {
        apply_mask(&digits, &CPF_TEMPLATE)
    } else {
        apply_mask(&digits, &CNPJ_TEMPLATE)
    }
}

pub fn mask_for_kind(text: &str, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Cpf => mask_cpf(text),
        DocumentKind::Cnpj => mask_cnpj(text),
        DocumentKind::Undetermined => mask_cpf_cnpj(text),
    }
}
