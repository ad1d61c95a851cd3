//! # Form State Types

/// Which credential form is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

impl FormMode {
    /// The other mode. Applying this twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Signup,
            FormMode::Signup => FormMode::Login,
        }
    }
}

/// Auth form state.
///
/// Typed fields persist across mode toggles. `pending` is true from submit
/// until the outstanding request settles; the handlers use it as a
/// single-flight guard, not just a rendering hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub pending: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: FormMode::Login,
            email: String::new(),
            password: String::new(),
            full_name: String::new(),
            pending: false,
        }
    }
}
