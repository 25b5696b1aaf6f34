//! Error types for the portal core.

use super::i18n::Language;

/// Failures of the credential forms. All of them are shown inline next to
/// the form and never end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("an account with this email already exists")]
    EmailExists,

    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("name, email and password are required")]
    MissingFields,

    #[error("invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    pub fn localized(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::EmailExists, Language::Ko) => "이미 존재하는 이메일입니다.",
            (Self::EmailExists, Language::En) => "Email already exists",
            (Self::PasswordMismatch, Language::Ko) => "비밀번호가 일치하지 않습니다.",
            (Self::PasswordMismatch, Language::En) => "Passwords do not match",
            (Self::MissingFields, Language::Ko) => "모든 필드를 입력해주세요.",
            (Self::MissingFields, Language::En) => "Please fill in all fields",
            (Self::InvalidCredentials, Language::Ko) => "이메일 또는 비밀번호가 올바르지 않습니다.",
            (Self::InvalidCredentials, Language::En) => "Invalid email or password",
        }
    }
}

/// Errors raised by the key-value storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the storage file failed.
    #[error("storage io failed at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded.
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),

    /// A persisted value exists but does not decode. Callers recover with a
    /// default value.
    #[error("persisted value under '{key}' is corrupt: {reason}")]
    PersistedStateCorrupt { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_auth_error_has_both_translations() {
        for err in [
            AuthError::EmailExists,
            AuthError::PasswordMismatch,
            AuthError::MissingFields,
            AuthError::InvalidCredentials,
        ] {
            assert!(!err.localized(Language::Ko).is_empty());
            assert!(!err.localized(Language::En).is_empty());
            assert_ne!(err.localized(Language::Ko), err.localized(Language::En));
        }
    }
}
