// Data models shared by the engine and the field controllers.
// Everything in here is plain data: the engine crate owns the arithmetic.

pub mod models;

pub use models::{Document, DocumentKind, ErrorCode, MonetaryAmount};
