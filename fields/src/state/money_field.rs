// Monetary input controller.
//
// While focused the field works like a keypad: every change re-reads the
// typed digits as cents. Pastes and programmatic values go through the full
// BRL parser instead. Display text is derived from `cents` except while
// editing, when `display_override` holds the symbol-less text being typed.
use super::{FieldEvent, InputController};
use engine::format::money::{
    cents_from_keystrokes, format_brl, format_brl_opt, is_negative_entry, keystroke_within_limit,
    parse_brl,
};
use serde::{Deserialize, Serialize};
use shared::models::MonetaryAmount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyField {
    pub cents: Option<i64>,
    pub is_editing: bool,
    pub display_override: Option<String>,
    pub include_symbol: bool,
    pub placeholder: String,
}

impl Default for MoneyField {
    fn default() -> Self {
        Self {
            cents: None,
            is_editing: false,
            display_override: None,
            include_symbol: true,
            placeholder: String::new(),
        }
    }
}

impl MoneyField {
    pub fn new(include_symbol: bool, placeholder: &str) -> Self {
        Self {
            include_symbol,
            placeholder: placeholder.to_string(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, cents: Option<i64>) -> Self {
        self.set_value(cents);
        self
    }

    pub fn value(&self) -> Option<i64> {
        self.cents
    }

    pub fn amount(&self) -> Option<MonetaryAmount> {
        self.cents.map(MonetaryAmount::from_cents)
    }

    /// Programmatic assignment, e.g. syncing from a form model.
    pub fn set_value(&mut self, cents: Option<i64>) {
        self.cents = cents;
        self.display_override = self.is_editing.then(|| editing_text(cents));
    }

    pub fn clear(&mut self) {
        self.set_value(None);
    }
}

fn editing_text(cents: Option<i64>) -> String {
    cents.map(|c| format_brl(c, false)).unwrap_or_default()
}

// A '-' typed before any non-zero digit has no amount to carry it yet, so the
// sign stays in the text until the next keystroke picks it up.
fn keypad_text(cents: Option<i64>, negative: bool) -> String {
    match cents {
        None if negative => "-".to_string(),
        Some(0) if negative => format!("-{}", format_brl(0, false)),
        _ => editing_text(cents),
    }
}

impl InputController for MoneyField {
    fn apply(&mut self, event: FieldEvent) {
        let event_name = event.name();
        match event {
            FieldEvent::Focus => {
                self.is_editing = true;
                self.display_override = Some(editing_text(self.cents));
            }
            FieldEvent::Blur => {
                self.is_editing = false;
                self.display_override = None;
            }
            FieldEvent::Change(text) => {
                self.is_editing = true;
                if keystroke_within_limit(self.cents, &text) {
                    self.cents = cents_from_keystrokes(&text);
                }
                self.display_override = Some(keypad_text(self.cents, is_negative_entry(&text)));
            }
            FieldEvent::Paste(text) => {
                self.cents = parse_brl(&text);
                self.display_override = self.is_editing.then(|| editing_text(self.cents));
            }
        }
        tracing::trace!(
            event = event_name,
            has_value = self.cents.is_some(),
            is_editing = self.is_editing,
            "Money field transition"
        );
    }

    fn display(&self) -> String {
        match &self.display_override {
            Some(text) => text.clone(),
            None => format_brl_opt(self.cents, self.include_symbol, &self.placeholder),
        }
    }

    fn is_editing(&self) -> bool {
        self.is_editing
    }
}
