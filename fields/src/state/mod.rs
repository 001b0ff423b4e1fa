// Controller records for input fields.
// Each field instance owns its state; nothing here is shared across fields.
pub mod document_field;
pub mod money_field;

/// UI events a field reacts to. `Change` carries the full new input text,
/// `Paste` the pasted text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    Change(String),
    Paste(String),
}

impl FieldEvent {
    /// Event name for logs. The payload is user data and stays out of them.
    pub fn name(&self) -> &'static str {
        match self {
            FieldEvent::Focus => "focus",
            FieldEvent::Blur => "blur",
            FieldEvent::Change(_) => "change",
            FieldEvent::Paste(_) => "paste",
        }
    }
}

// Common trait so hosts can drive heterogeneous fields uniformly
pub trait InputController {
    fn apply(&mut self, event: FieldEvent);
    /// Text the input should currently show.
    fn display(&self) -> String;
    fn is_editing(&self) -> bool;
}
