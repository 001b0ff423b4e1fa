// Engine library root
// Pure, synchronous building blocks for document and currency inputs:
// masking, CPF/CNPJ check digits and BRL amounts. No I/O, no shared state.

pub mod checksum;
pub mod error;
pub mod format;

pub use checksum::{
    detect_kind, get_cpf_cnpj_error, is_valid_cnpj, is_valid_cpf, parse_document,
    validate_document_field,
};
pub use error::EngineError;
pub use format::mask::{mask_cnpj, mask_cpf, mask_cpf_cnpj, only_digits};
pub use format::money::{cents_from_keystrokes, format_brl, parse_brl};
