//! View controller for the auth panel.
//!
//! Each view owns only the fields it submits, so switching views never
//! carries a half-typed password or token into another form. The one
//! deliberate carry-over is the reset token handed from `Forgot` to `Reset`.

use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::auth::{
    auth_error_message, reset_token, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::constants::{
    ACCOUNT_CREATED, AUTHENTICATE_ENDPOINT, FIELDS_MISSING, FORGOT_FAILED,
    FORGOT_PASSWORD_ENDPOINT, INVALID_EMAIL, LOGIN_FAILED, NETWORK_ERROR, PASSWORD_RESET_DONE,
    REGISTER_ENDPOINT, REGISTER_FAILED, RESET_FAILED, RESET_PASSWORD_ENDPOINT,
    RESET_REQUEST_ACCEPTED, RESET_TOKEN_ISSUED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Signup,
    Forgot,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthView {
    Login { email: String, password: String },
    Signup { name: String, email: String, password: String },
    Forgot { email: String },
    Reset { token: String, new_password: String },
}

impl AuthView {
    pub fn blank(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Login => Self::Login {
                email: String::new(),
                password: String::new(),
            },
            ViewKind::Signup => Self::Signup {
                name: String::new(),
                email: String::new(),
                password: String::new(),
            },
            ViewKind::Forgot => Self::Forgot {
                email: String::new(),
            },
            ViewKind::Reset => Self::Reset {
                token: String::new(),
                new_password: String::new(),
            },
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Login { .. } => ViewKind::Login,
            Self::Signup { .. } => ViewKind::Signup,
            Self::Forgot { .. } => ViewKind::Forgot,
            Self::Reset { .. } => ViewKind::Reset,
        }
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match (self, field) {
            (Self::Login { email, .. }, Field::Email)
            | (Self::Signup { email, .. }, Field::Email)
            | (Self::Forgot { email }, Field::Email) => email,
            (Self::Login { password, .. }, Field::Password)
            | (Self::Signup { password, .. }, Field::Password) => password,
            (Self::Signup { name, .. }, Field::Name) => name,
            (Self::Reset { token, .. }, Field::Token) => token,
            (Self::Reset { new_password, .. }, Field::NewPassword) => new_password,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match (self, field) {
            (Self::Login { email, .. }, Field::Email)
            | (Self::Signup { email, .. }, Field::Email)
            | (Self::Forgot { email }, Field::Email) => Some(email),
            (Self::Login { password, .. }, Field::Password)
            | (Self::Signup { password, .. }, Field::Password) => Some(password),
            (Self::Signup { name, .. }, Field::Name) => Some(name),
            (Self::Reset { token, .. }, Field::Token) => Some(token),
            (Self::Reset { new_password, .. }, Field::NewPassword) => Some(new_password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    Token,
    NewPassword,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    None,
    Message(String),
    Error(String),
}

/// A request ready to be posted to its relay.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Login(LoginRequest),
    Signup(RegisterRequest),
    Forgot(ForgotPasswordRequest),
    Reset(ResetPasswordRequest),
}

impl Submission {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Login(_) => ViewKind::Login,
            Self::Signup(_) => ViewKind::Signup,
            Self::Forgot(_) => ViewKind::Forgot,
            Self::Reset(_) => ViewKind::Reset,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Login(_) => AUTHENTICATE_ENDPOINT,
            Self::Signup(_) => REGISTER_ENDPOINT,
            Self::Forgot(_) => FORGOT_PASSWORD_ENDPOINT,
            Self::Reset(_) => RESET_PASSWORD_ENDPOINT,
        }
    }

    pub fn fallback_error(&self) -> &'static str {
        match self {
            Self::Login(_) => LOGIN_FAILED,
            Self::Signup(_) => REGISTER_FAILED,
            Self::Forgot(_) => FORGOT_FAILED,
            Self::Reset(_) => RESET_FAILED,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Login(r) => r.validate(),
            Self::Signup(r) => r.validate(),
            Self::Forgot(r) => r.validate(),
            Self::Reset(r) => r.validate(),
        }
    }

    pub fn body(&self) -> Value {
        let value = match self {
            Self::Login(r) => serde_json::to_value(r),
            Self::Signup(r) => serde_json::to_value(r),
            Self::Forgot(r) => serde_json::to_value(r),
            Self::Reset(r) => serde_json::to_value(r),
        };
        value.unwrap_or(Value::Null)
    }
}

/// How a relay call ended, as seen by the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx with the parsed body (empty object when unparsable).
    Accepted(Value),
    /// Non-success status with whatever body came back.
    Rejected(Option<Value>),
    /// The call itself failed.
    NetworkFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    None,
    /// Login succeeded: fire the authenticated callback and close the panel.
    Authenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthFlow {
    view: AuthView,
    loading: bool,
    feedback: Feedback,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self {
            view: AuthView::blank(ViewKind::Login),
            loading: false,
            feedback: Feedback::None,
        }
    }

    pub fn view(&self) -> &AuthView {
        &self.view
    }

    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn switch_to(&mut self, kind: ViewKind) {
        self.feedback = Feedback::None;
        self.view = AuthView::blank(kind);
    }

    /// Returns false when the current view has no such field.
    pub fn update(&mut self, field: Field, value: String) -> bool {
        match self.view.field_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Starts a submission for the current view. Returns `None` while
    /// another one is still in flight, or when a field is blank or the email
    /// is malformed (the reason lands in the feedback).
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.loading {
            return None;
        }

        self.feedback = Feedback::None;

        let submission = match &self.view {
            AuthView::Login { email, password } => Submission::Login(LoginRequest {
                email: email.clone(),
                password: password.clone(),
            }),
            AuthView::Signup {
                name,
                email,
                password,
            } => Submission::Signup(RegisterRequest {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
            }),
            AuthView::Forgot { email } => Submission::Forgot(ForgotPasswordRequest {
                email: email.clone(),
            }),
            AuthView::Reset {
                token,
                new_password,
            } => Submission::Reset(ResetPasswordRequest {
                token: token.clone(),
                new_password: new_password.clone(),
            }),
        };

        if let Err(errors) = submission.validate() {
            let message = if errors.field_errors().contains_key("email") {
                INVALID_EMAIL
            } else {
                FIELDS_MISSING
            };
            self.feedback = Feedback::Error(message.to_string());
            return None;
        }

        self.loading = true;
        Some(submission)
    }

    /// Applies the result of `submission`. If the user switched views while
    /// the call was in flight, only the loading flag is cleared.
    pub fn finish(&mut self, submission: &Submission, outcome: SubmitOutcome) -> FlowEffect {
        self.loading = false;

        if submission.kind() != self.view.kind() {
            log::debug!(
                "dropping {:?} result, panel moved to {:?}",
                submission.kind(),
                self.view.kind()
            );
            return FlowEffect::None;
        }

        let body = match outcome {
            SubmitOutcome::Accepted(body) => body,
            SubmitOutcome::Rejected(body) => {
                self.feedback = Feedback::Error(auth_error_message(
                    body.as_ref(),
                    submission.fallback_error(),
                ));
                return FlowEffect::None;
            }
            SubmitOutcome::NetworkFailure => {
                self.feedback = Feedback::Error(NETWORK_ERROR.to_string());
                return FlowEffect::None;
            }
        };

        match submission {
            Submission::Login(_) => FlowEffect::Authenticated,
            Submission::Signup(_) => {
                self.view = AuthView::blank(ViewKind::Login);
                self.feedback = Feedback::Message(ACCOUNT_CREATED.to_string());
                FlowEffect::None
            }
            Submission::Forgot(_) => {
                match reset_token(&body) {
                    Some(token) => {
                        self.view = AuthView::Reset {
                            token: token.to_string(),
                            new_password: String::new(),
                        };
                        self.feedback = Feedback::Message(RESET_TOKEN_ISSUED.to_string());
                    }
                    None => {
                        self.feedback = Feedback::Message(RESET_REQUEST_ACCEPTED.to_string());
                    }
                }
                FlowEffect::None
            }
            Submission::Reset(_) => {
                self.view = AuthView::blank(ViewKind::Login);
                self.feedback = Feedback::Message(PASSWORD_RESET_DONE.to_string());
                FlowEffect::None
            }
        }
    }
}
