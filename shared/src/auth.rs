use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::validation::validate_email;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 1))]
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCheckResponse {
    pub authenticated: bool,
}

/// Reads a non-empty `resetToken` string out of a forgot-password reply.
pub fn reset_token(body: &Value) -> Option<&str> {
    body.get("resetToken")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}

/// Picks the human-readable `message` out of an auth relay reply, falling
/// back to the per-endpoint text when there is none.
pub fn auth_error_message(body: Option<&Value>, fallback: &str) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reset_request_uses_camel_case() {
        let request = ResetPasswordRequest {
            token: "abc".to_string(),
            new_password: "hunter22".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "token": "abc", "newPassword": "hunter22" }));
    }

    #[test]
    fn test_form_validation() {
        let login = LoginRequest {
            email: "me@site.dev".to_string(),
            password: "pw".to_string(),
        };
        assert!(login.validate().is_ok());

        let bad_email = LoginRequest {
            email: "me@site".to_string(),
            password: "pw".to_string(),
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let reset = ResetPasswordRequest {
            token: String::new(),
            new_password: "pw".to_string(),
        };
        assert!(reset.validate().is_err());
    }

    #[test]
    fn test_reset_token_extraction() {
        assert_eq!(reset_token(&json!({ "resetToken": "tok" })), Some("tok"));
        assert_eq!(reset_token(&json!({ "resetToken": "" })), None);
        assert_eq!(reset_token(&json!({ "resetToken": 42 })), None);
        assert_eq!(reset_token(&json!({})), None);
    }

    #[test]
    fn test_auth_error_message_fallback() {
        let body = json!({ "message": "Email taken" });
        assert_eq!(auth_error_message(Some(&body), "Registration failed."), "Email taken");
        assert_eq!(auth_error_message(Some(&json!({ "message": "" })), "Reset failed."), "Reset failed.");
        assert_eq!(auth_error_message(None, "Request failed."), "Request failed.");
    }
}
