//! Form-mode state machine and submission orchestration for a
//! Yggdrasil-style identity service.
//!
//! The crate covers the logic behind a two-mode credential form: field
//! validation, mode-specific payload construction, a single outstanding
//! request, response classification, and the session transition on a
//! successful login. Presentation (layout, labels, styling) belongs to the
//! host application; the host plugs in a [`notify::NotificationSink`] for
//! transient status messages and owns the [`session::SessionState`] cell.

pub mod cli;
pub mod client;
pub mod form;
pub mod messages;
pub mod notify;
pub mod session;
pub mod submit;

pub use client::{ClientError, IdentityClient};
pub use form::{FieldError, FieldErrors, FormInputs, Mode};
pub use notify::{NotificationSink, Severity};
pub use session::SessionState;
pub use submit::{LoginForm, SubmitOutcome};
