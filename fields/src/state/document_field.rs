// CPF/CNPJ input controller.
use super::{FieldEvent, InputController};
use engine::checksum::{get_cpf_cnpj_error, is_valid_cnpj, is_valid_cpf, parse_document};
use engine::format::mask::{mask_for_kind, only_digits};
use serde::{Deserialize, Serialize};
use shared::models::{Document, DocumentKind, ErrorCode, CNPJ_LEN, CPF_LEN};

/// Which documents a field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentMode {
    Cpf,
    Cnpj,
    #[default]
    CpfOrCnpj,
}

impl DocumentMode {
    pub fn max_digits(&self) -> usize {
        match self {
            DocumentMode::Cpf => CPF_LEN,
            DocumentMode::Cnpj | DocumentMode::CpfOrCnpj => CNPJ_LEN,
        }
    }

    /// Mask selection: a fixed kind, or `Undetermined` to pick by length.
    fn mask_kind(&self) -> DocumentKind {
        match self {
            DocumentMode::Cpf => DocumentKind::Cpf,
            DocumentMode::Cnpj => DocumentKind::Cnpj,
            DocumentMode::CpfOrCnpj => DocumentKind::Undetermined,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentField {
    pub digits: String,
    pub is_editing: bool,
    pub display_override: Option<String>,
    pub mode: DocumentMode,
    pub required: bool,
    /// Set on the first blur; errors stay hidden until then.
    pub touched: bool,
}

impl DocumentField {
    pub fn new(mode: DocumentMode, required: bool) -> Self {
        Self {
            digits: String::new(),
            is_editing: false,
            display_override: None,
            mode,
            required,
            touched: false,
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn kind(&self) -> DocumentKind {
        match self.mode {
            DocumentMode::Cpf if !self.digits.is_empty() => DocumentKind::Cpf,
            DocumentMode::Cnpj if !self.digits.is_empty() => DocumentKind::Cnpj,
            _ => DocumentKind::for_len(self.digits.len()),
        }
    }

    /// Programmatic assignment. Accepts masked or raw text.
    pub fn set_value(&mut self, text: &str) {
        self.ingest(text);
    }

    fn ingest(&mut self, text: &str) {
        self.digits = only_digits(text)
            .chars()
            .take(self.mode.max_digits())
            .collect();
        self.display_override = self.is_editing.then(|| self.masked());
    }

    fn masked(&self) -> String {
        mask_for_kind(&self.digits, self.mode.mask_kind())
    }

    /// Current error, required policy included, regardless of `touched`.
    pub fn error(&self) -> Option<ErrorCode> {
        if self.digits.is_empty() {
            return self.required.then_some(ErrorCode::Required);
        }
        match self.mode {
            DocumentMode::CpfOrCnpj => get_cpf_cnpj_error(&self.digits),
            DocumentMode::Cpf if self.digits.len() < CPF_LEN => Some(ErrorCode::CpfIncomplete),
            DocumentMode::Cpf => (!is_valid_cpf(&self.digits)).then_some(ErrorCode::CpfInvalid),
            DocumentMode::Cnpj if self.digits.len() < CNPJ_LEN => Some(ErrorCode::CnpjIncomplete),
            DocumentMode::Cnpj => (!is_valid_cnpj(&self.digits)).then_some(ErrorCode::CnpjInvalid),
        }
    }

    /// Error to show next to the input: only once the user has left the field.
    pub fn visible_error(&self) -> Option<ErrorCode> {
        if self.touched && !self.is_editing {
            self.error()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error().is_none()
    }

    /// The validated document, if the field currently holds one.
    pub fn document(&self) -> Option<Document> {
        if self.error().is_some() {
            return None;
        }
        parse_document(&self.digits).ok()
    }
}

impl InputController for DocumentField {
    fn apply(&mut self, event: FieldEvent) {
        let event_name = event.name();
        match event {
            FieldEvent::Focus => {
                self.is_editing = true;
                self.display_override = Some(self.masked());
            }
            FieldEvent::Blur => {
                self.is_editing = false;
                self.touched = true;
                self.display_override = None;
            }
            FieldEvent::Change(text) => {
                self.is_editing = true;
                self.ingest(&text);
            }
            FieldEvent::Paste(text) => self.ingest(&text),
        }
        tracing::trace!(
            event = event_name,
            len = self.digits.len(),
            kind = %self.kind(),
            is_editing = self.is_editing,
            "Document field transition"
        );
    }

    fn display(&self) -> String {
        match &self.display_override {
            Some(text) => text.clone(),
            None => self.masked(),
        }
    }

    fn is_editing(&self) -> bool {
        self.is_editing
    }
}
