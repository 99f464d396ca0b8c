//! Field-level validation for the credential form.
//!
//! Validation is synchronous and pure: given the current [`Mode`] and the
//! raw field values it produces a per-field verdict without touching the
//! network or the session. The orchestrator refuses to dispatch while any
//! field is invalid; the host surfaces the verdict inline next to the
//! fields, not through the notification sink.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Which of the two operations the form performs.
///
/// Toggled explicitly by the user, never inferred from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Authenticate,
    Register,
}

/// Raw field values for one submission attempt.
///
/// Created fresh per attempt and discarded afterwards. Empty strings stand
/// for fields the user left blank.
#[derive(Debug, Clone)]
pub struct FormInputs {
    /// Account email address.
    pub username: String,
    /// Profile name for registration; ignored when authenticating.
    pub profile_name: String,
    pub password: SecretString,
    /// Fixed uuid for registration; empty asks the server to generate one.
    pub requested_uuid: String,
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort,
    TooLong,
    Format,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "required"),
            FieldError::TooShort => write!(f, "too short"),
            FieldError::TooLong => write!(f, "too long"),
            FieldError::Format => write!(f, "invalid format"),
        }
    }
}

/// Per-field verdict for one submission attempt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<FieldError>,
    pub profile_name: Option<FieldError>,
    pub password: Option<FieldError>,
    pub requested_uuid: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.profile_name.is_none()
            && self.password.is_none()
            && self.requested_uuid.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("username", self.username),
            ("profile name", self.profile_name),
            ("password", self.password),
            ("uuid", self.requested_uuid),
        ];
        let mut first = true;
        for (name, error) in fields {
            if let Some(error) = error {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{name}: {error}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Basic email format check, same shape the server applies.
fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

/// Letters, digits or underscore only; length is checked separately.
fn valid_profile_name_charset(name: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9_]+$").is_ok_and(|regex| regex.is_match(name))
}

/// Canonical hyphenated uuid with version nibble 1-5 and RFC variant.
fn valid_uuid(uuid: &str) -> bool {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .is_ok_and(|regex| regex.is_match(uuid))
}

/// Validate one submission attempt against the current mode.
///
/// The profile name is only checked in register mode; the requested uuid
/// is checked in both modes whenever it is non-empty, and an empty uuid
/// always passes since the server assigns one.
#[must_use]
pub fn validate(mode: Mode, inputs: &FormInputs) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if inputs.username.is_empty() {
        errors.username = Some(FieldError::Required);
    } else if !valid_email(&inputs.username) {
        errors.username = Some(FieldError::Format);
    }

    if mode == Mode::Register {
        let name_len = inputs.profile_name.chars().count();
        if inputs.profile_name.is_empty() {
            errors.profile_name = Some(FieldError::Required);
        } else if name_len < 2 {
            errors.profile_name = Some(FieldError::TooShort);
        } else if name_len > 16 {
            errors.profile_name = Some(FieldError::TooLong);
        } else if !valid_profile_name_charset(&inputs.profile_name) {
            errors.profile_name = Some(FieldError::Format);
        }
    }

    let password_len = inputs.password.expose_secret().chars().count();
    if password_len == 0 {
        errors.password = Some(FieldError::Required);
    } else if password_len < 6 {
        errors.password = Some(FieldError::TooShort);
    } else if password_len > 128 {
        errors.password = Some(FieldError::TooLong);
    }

    if !inputs.requested_uuid.is_empty() && !valid_uuid(&inputs.requested_uuid) {
        errors.requested_uuid = Some(FieldError::Format);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(username: &str, profile_name: &str, password: &str, uuid: &str) -> FormInputs {
        FormInputs {
            username: username.to_string(),
            profile_name: profile_name.to_string(),
            password: SecretString::from(password.to_string()),
            requested_uuid: uuid.to_string(),
        }
    }

    #[test]
    fn valid_authenticate_inputs_pass() {
        let errors = validate(Mode::Authenticate, &inputs("steve@example.com", "", "hunter2", ""));
        assert!(errors.is_empty());
    }

    #[test]
    fn valid_register_inputs_pass() {
        let errors = validate(
            Mode::Register,
            &inputs("steve@example.com", "Steve_01", "hunter2", ""),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn username_must_look_like_an_email() {
        for bad in ["", "steve", "steve@", "@example.com", "steve@example", "a b@c.d"] {
            let errors = validate(Mode::Authenticate, &inputs(bad, "", "hunter2", ""));
            assert!(errors.username.is_some(), "expected failure for {bad:?}");
        }
        for good in ["steve@example.com", "a.b+c@sub.example.org"] {
            let errors = validate(Mode::Authenticate, &inputs(good, "", "hunter2", ""));
            assert!(errors.username.is_none(), "expected pass for {good:?}");
        }
    }

    #[test]
    fn profile_name_length_bounds() {
        let errors = validate(Mode::Register, &inputs("a@b.c", "", "hunter2", ""));
        assert_eq!(errors.profile_name, Some(FieldError::Required));

        let errors = validate(Mode::Register, &inputs("a@b.c", "x", "hunter2", ""));
        assert_eq!(errors.profile_name, Some(FieldError::TooShort));

        let errors = validate(Mode::Register, &inputs("a@b.c", &"x".repeat(17), "hunter2", ""));
        assert_eq!(errors.profile_name, Some(FieldError::TooLong));

        let errors = validate(Mode::Register, &inputs("a@b.c", &"x".repeat(16), "hunter2", ""));
        assert!(errors.profile_name.is_none());
    }

    #[test]
    fn profile_name_charset_is_word_characters_only() {
        for bad in ["st eve", "st-eve", "stève", "steve!"] {
            let errors = validate(Mode::Register, &inputs("a@b.c", bad, "hunter2", ""));
            assert_eq!(errors.profile_name, Some(FieldError::Format), "for {bad:?}");
        }
        let errors = validate(Mode::Register, &inputs("a@b.c", "St_3ve", "hunter2", ""));
        assert!(errors.profile_name.is_none());
    }

    #[test]
    fn profile_name_ignored_when_authenticating() {
        let errors = validate(Mode::Authenticate, &inputs("a@b.c", "st eve!!", "hunter2", ""));
        assert!(errors.profile_name.is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn password_length_bounds() {
        let errors = validate(Mode::Authenticate, &inputs("a@b.c", "", "", ""));
        assert_eq!(errors.password, Some(FieldError::Required));

        let errors = validate(Mode::Authenticate, &inputs("a@b.c", "", "12345", ""));
        assert_eq!(errors.password, Some(FieldError::TooShort));

        let errors = validate(Mode::Authenticate, &inputs("a@b.c", "", &"x".repeat(129), ""));
        assert_eq!(errors.password, Some(FieldError::TooLong));

        let errors = validate(Mode::Authenticate, &inputs("a@b.c", "", &"x".repeat(128), ""));
        assert!(errors.password.is_none());
    }

    #[test]
    fn empty_uuid_always_passes() {
        let errors = validate(Mode::Register, &inputs("a@b.c", "Steve", "hunter2", ""));
        assert!(errors.requested_uuid.is_none());
    }

    #[test]
    fn uuid_must_match_canonical_pattern() {
        for bad in [
            "not-a-uuid",
            "11111111222233334444555555555555",
            // version nibble 0 and 6 are out of range
            "11111111-2222-0333-8444-555555555555",
            "11111111-2222-6333-8444-555555555555",
            // variant nibble must be 8, 9, a or b
            "11111111-2222-3333-0444-555555555555",
            "11111111-2222-3333-c444-555555555555",
            "11111111-2222-3333-8444-55555555555",
        ] {
            let errors = validate(Mode::Register, &inputs("a@b.c", "Steve", "hunter2", bad));
            assert_eq!(errors.requested_uuid, Some(FieldError::Format), "for {bad:?}");
        }

        for good in [
            "11111111-2222-3333-8444-555555555555",
            "AAAAAAAA-BBBB-4CCC-9DDD-EEEEEEEEEEEE",
            "aaaaaaaa-bbbb-5ccc-Addd-eeeeeeeeeeee",
        ] {
            let errors = validate(Mode::Register, &inputs("a@b.c", "Steve", "hunter2", good));
            assert!(errors.requested_uuid.is_none(), "for {good:?}");
        }
    }

    #[test]
    fn field_errors_display_lists_failed_fields() {
        let errors = validate(Mode::Register, &inputs("", "", "", ""));
        let rendered = errors.to_string();
        assert!(rendered.contains("username: required"));
        assert!(rendered.contains("profile name: required"));
        assert!(rendered.contains("password: required"));
    }
}
