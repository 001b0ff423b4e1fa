// Field controllers for document and currency inputs.
//
// The host UI owns one controller per input and feeds it focus/blur/change/
// paste events; controllers only call into the pure engine functions.

pub mod config;
pub mod state;

pub use config::FieldConfig;
pub use state::document_field::{DocumentField, DocumentMode};
pub use state::money_field::MoneyField;
pub use state::{FieldEvent, InputController};
