//! Onboarding dialog that captures the display name.
//!
//! The dialog is open at startup. Its single field is bound directly to the
//! captured name, so dismissing keeps whatever was typed and submitting accepts
//! any value, including an empty one.

/// Open flag plus the name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingDialog {
    open: bool,
    name: String,
}

impl Default for OnboardingDialog {
    fn default() -> Self {
        Self {
            open: true,
            name: String::new(),
        }
    }
}

impl OnboardingDialog {
    /// Whether the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Captured display name (possibly empty).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a typed character to the name field.
    pub fn push(&mut self, c: char) {
        self.name.push(c);
    }

    /// Deletes the last character of the name field.
    pub fn pop(&mut self) {
        self.name.pop();
    }

    /// Closes the dialog, accepting the field as typed.
    pub fn submit(&mut self) {
        tracing::debug!(name_len = self.name.len(), "onboarding dialog submitted");
        self.open = false;
    }

    /// Closes the dialog through the generic close affordance.
    pub fn dismiss(&mut self) {
        tracing::debug!("onboarding dialog dismissed");
        self.open = false;
    }
}
