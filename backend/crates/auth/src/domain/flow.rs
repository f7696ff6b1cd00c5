//! Sign-Up Wizard State Machine
//!
//! The sign-up form is a two-step wizard: collect credentials, then
//! verify an emailed code. The phase is an enum-tagged state with
//! per-state data so illegal combinations (verifying with no pending
//! sign-up, a code draft outside the verification step) cannot be
//! represented. Transitions are explicit functions; the drafts are
//! transient and discarded on every transition.

use crate::domain::provider::SignUpId;

/// Maximum verification code length (emailed one-time code)
pub const MAX_CODE_LENGTH: usize = 6;

/// Transient credential form state. Consumed by the credential-step
/// submit; handed back inside `Collecting` when the step fails so the
/// form stays filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Whether the password field is rendered readable. Form-local
    /// presentation toggle, never submitted.
    pub reveal_password: bool,
}

impl CredentialDraft {
    pub fn toggle_reveal(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    /// All three submitted fields present
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Draft of the emailed verification code, only constructible inside
/// the verification step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeDraft {
    code: String,
}

impl CodeDraft {
    /// Replace the draft, keeping at most [`MAX_CODE_LENGTH`] characters.
    pub fn set(&mut self, input: &str) {
        self.code = input.chars().take(MAX_CODE_LENGTH).collect();
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Pending sign-up record issued by the provider once the credential
/// step succeeded. Carrying it is what authorizes a verification
/// attempt; the gateway itself stores nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSignUp {
    pub sign_up_id: SignUpId,
    /// Address the code was dispatched to, shown on the verify step
    pub email: String,
}

/// Wizard phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpPhase {
    /// Credential step
    Collecting(CredentialDraft),
    /// Awaiting the emailed code for a provider-held pending account
    VerificationPending {
        pending: PendingSignUp,
        code: CodeDraft,
    },
}

impl SignUpPhase {
    /// Fresh wizard, empty credential form
    pub fn new() -> Self {
        SignUpPhase::Collecting(CredentialDraft::default())
    }

    /// Credential step succeeded: move to verification. The credential
    /// draft is discarded and a fresh code draft is created.
    pub fn begin_verification(self, pending: PendingSignUp) -> Self {
        SignUpPhase::VerificationPending {
            pending,
            code: CodeDraft::default(),
        }
    }

    /// User-triggered "back to signup": discard the code draft and the
    /// pending record reference, return to an empty credential form.
    pub fn back_to_collecting(self) -> Self {
        SignUpPhase::new()
    }
}

impl Default for SignUpPhase {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a full name on the first whitespace into (first, last).
///
/// A name with no space yields an empty surname, accepted as-is.
pub fn split_full_name(full_name: &str) -> (&str, &str) {
    match full_name.split_once(char::is_whitespace) {
        Some((first, last)) => (first, last),
        None => (full_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> PendingSignUp {
        PendingSignUp {
            sign_up_id: SignUpId::from("sua_123"),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_wizard_transitions() {
        let phase = SignUpPhase::new();
        assert!(matches!(phase, SignUpPhase::Collecting(_)));

        let phase = phase.begin_verification(pending());
        match &phase {
            SignUpPhase::VerificationPending { pending, code } => {
                assert_eq!(pending.email, "ada@example.com");
                assert!(code.is_empty());
            }
            other => panic!("unexpected phase: {other:?}"),
        }

        // Back-navigation discards the code draft and the pending record
        let phase = phase.back_to_collecting();
        assert_eq!(phase, SignUpPhase::new());
    }

    #[test]
    fn test_credential_draft_lifecycle() {
        let mut draft = CredentialDraft::default();
        assert!(!draft.is_complete());

        draft.full_name = "Ada Lovelace".to_string();
        draft.email = "ada@example.com".to_string();
        draft.password = "correct horse".to_string();
        assert!(draft.is_complete());

        assert!(!draft.reveal_password);
        draft.toggle_reveal();
        assert!(draft.reveal_password);
        draft.toggle_reveal();
        assert!(!draft.reveal_password);
    }

    #[test]
    fn test_code_draft_length_bound() {
        let mut code = CodeDraft::default();
        code.set("123456789");
        assert_eq!(code.as_str(), "123456");

        code.set("42");
        assert_eq!(code.as_str(), "42");
    }

    #[test]
    fn test_split_full_name() {
        assert_eq!(split_full_name("Ada Lovelace"), ("Ada", "Lovelace"));
        // Split on the first whitespace only
        assert_eq!(split_full_name("Ada Lovelace King"), ("Ada", "Lovelace King"));
        // Single-word name yields an empty surname
        assert_eq!(split_full_name("Ada"), ("Ada", ""));
        assert_eq!(split_full_name(""), ("", ""));
    }
}
