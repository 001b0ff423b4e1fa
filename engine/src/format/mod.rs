// Display-side formatting: punctuation masks for documents and BRL amounts.
pub mod mask;
pub mod money;
