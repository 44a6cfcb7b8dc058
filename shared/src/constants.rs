use std::time::Duration;

pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8080/api/auth";
pub const DEFAULT_DONATIONS_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CURRENCY: &str = "inr";
pub const DEFAULT_CHECKOUT_ENDPOINT: &str = "/api/donations/checkout";

pub const AUTHENTICATE_ENDPOINT: &str = "/api/authenticate";
pub const CHECK_AUTH_ENDPOINT: &str = "/api/check-auth";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const FORGOT_PASSWORD_ENDPOINT: &str = "/api/auth/forgot-password";
pub const RESET_PASSWORD_ENDPOINT: &str = "/api/auth/reset-password";
pub const LEADERBOARD_ENDPOINT: &str = "/api/donations/leaderboard";

/// Marker appended to static donation links so the payment page can tell
/// where the donor came from.
pub const DONATION_SOURCE: &str = "donate";

pub const LEADERBOARD_DEFAULT_LIMIT: u32 = 6;
pub const LEADERBOARD_MIN_LIMIT: u32 = 1;
pub const LEADERBOARD_MAX_LIMIT: u32 = 50;

pub const SESSION_POLL_INTERVAL: Duration = Duration::from_secs(30);
pub const RESULT_REDIRECT_DELAY: Duration = Duration::from_secs(5);

pub const INVALID_JSON_PAYLOAD: &str = "Invalid JSON payload.";
pub const NETWORK_ERROR: &str = "Network error.";
pub const UPSTREAM_UNAVAILABLE: &str = "Upstream unavailable.";

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const FIELDS_MISSING: &str = "Please fill in every field.";

pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required.";
pub const REGISTER_FIELDS_REQUIRED: &str = "Name, email, and password are required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const RESET_FIELDS_REQUIRED: &str = "Token and new password are required.";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number.";

pub const LOGIN_FAILED: &str = "Authentication failed.";
pub const REGISTER_FAILED: &str = "Registration failed.";
pub const FORGOT_FAILED: &str = "Request failed.";
pub const RESET_FAILED: &str = "Reset failed.";
pub const LOGOUT_FAILED: &str = "Logout failed.";
pub const CHECKOUT_FAILED: &str = "Checkout failed.";
pub const CHECKOUT_LINK_MISSING: &str = "Checkout link missing.";
pub const CHECKOUT_BAD_RESPONSE: &str = "Invalid response from backend.";
pub const LEADERBOARD_FAILED: &str = "Leaderboard request failed.";

pub const ACCOUNT_CREATED: &str = "Account created. Please sign in.";
pub const RESET_TOKEN_ISSUED: &str = "Token generated. Paste it below to reset.";
pub const RESET_REQUEST_ACCEPTED: &str = "If that email exists, a reset token was generated.";
pub const PASSWORD_RESET_DONE: &str = "Password reset. Please sign in.";

pub const DONATION_AMOUNT_INVALID: &str = "Pick a positive amount so the pixels can breathe.";
pub const DONATION_EMAIL_INVALID: &str = "Add a valid email so the receipt knows where to land.";
pub const CHECKOUT_RETRY: &str = "Checkout refused to cooperate. Please try again.";
pub const LEADERBOARD_LOAD_FAILED: &str = "Failed to load leaderboard.";
