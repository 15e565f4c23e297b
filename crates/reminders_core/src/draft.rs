use shared::protocol::Intent;

/// In-progress text of the add-reminder form.
///
/// The form stays open until `confirm` hands back a usable title; a blank
/// draft never turns into an add request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReminderDraft {
    text: String,
}

impl AddReminderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_str(&mut self, input: &str) {
        self.text.push_str(input);
    }

    pub fn can_confirm(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Takes the drafted title, clearing the form. Returns `None` and keeps
    /// the text when there is nothing to save.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.can_confirm() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }

    pub fn confirm_intent(&mut self) -> Option<Intent> {
        self.confirm().map(|title| Intent::RequestAdd { title })
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
