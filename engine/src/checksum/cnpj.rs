// CNPJ: 8 root digits + 4 branch digits + 2 check digits
use super::DocumentScheme;
use shared::models::{DocumentKind, CNPJ_LEN};

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

pub struct Cnpj;

impl DocumentScheme for Cnpj {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn canonical_len(&self) -> usize {
        CNPJ_LEN
    }

    fn first_weights(&self) -> &'static [u32] {
        &FIRST_WEIGHTS
    }

    fn second_weights(&self) -> &'static [u32] {
        &SECOND_WEIGHTS
    }
}
