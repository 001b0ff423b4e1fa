// CPF: 9 base digits + 2 check digits
use super::DocumentScheme;
use shared::models::{DocumentKind, CPF_LEN};

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

pub struct Cpf;

impl DocumentScheme for Cpf {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cpf
    }

    fn canonical_len(&self) -> usize {
        CPF_LEN
    }

    fn first_weights(&self) -> &'static [u32] {
        &FIRST_WEIGHTS
    }

    fn second_weights(&self) -> &'static [u32] {
        &SECOND_WEIGHTS
    }
}
