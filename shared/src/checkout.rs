//! Donation checkout planning.
//!
//! Validation happens before any navigation or network call. A configured
//! static donation link wins over the checkout relay.

use serde_json::Value;

use crate::constants::{
    CHECKOUT_RETRY, DEFAULT_CHECKOUT_ENDPOINT, DEFAULT_CURRENCY, DONATION_AMOUNT_INVALID,
    DONATION_EMAIL_INVALID, DONATION_SOURCE,
};
use crate::donations::DonationRequest;
use crate::validation::{to_minor_units, validate_donation_amount, validate_email};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSettings {
    pub donation_link: String,
    pub endpoint: String,
    pub currency: String,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            donation_link: String::new(),
            endpoint: DEFAULT_CHECKOUT_ENDPOINT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CheckoutSettings {
    /// Builds settings from optional build-time values, applying the
    /// fallbacks for anything unset or blank.
    pub fn from_options(
        donation_link: Option<&str>,
        endpoint: Option<&str>,
        currency: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            donation_link: pick(donation_link, defaults.donation_link),
            endpoint: pick(endpoint, defaults.endpoint),
            currency: pick(currency, defaults.currency),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutPlan {
    /// Navigate straight to the static payment link.
    Redirect(String),
    /// Ask the relay for a checkout URL first.
    Relay {
        endpoint: String,
        request: DonationRequest,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    InvalidAmount,
    InvalidEmail,
    AlreadyPending,
}

impl CheckoutError {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidAmount => Some(DONATION_AMOUNT_INVALID),
            Self::InvalidEmail => Some(DONATION_EMAIL_INVALID),
            Self::AlreadyPending => None,
        }
    }
}

pub fn plan_checkout(
    settings: &CheckoutSettings,
    amount: f64,
    email: &str,
    origin: &str,
) -> Result<CheckoutPlan, CheckoutError> {
    if validate_donation_amount(amount).is_err() {
        return Err(CheckoutError::InvalidAmount);
    }
    if validate_email(email).is_err() {
        return Err(CheckoutError::InvalidEmail);
    }

    let minor = to_minor_units(amount);
    let link = settings.donation_link.trim();

    if !link.is_empty() {
        let minor = minor.to_string();
        let url = with_query_params(
            &resolve_against(link, origin),
            &[
                ("amount", minor.as_str()),
                ("email", email),
                ("source", DONATION_SOURCE),
            ],
        );
        return Ok(CheckoutPlan::Redirect(url));
    }

    Ok(CheckoutPlan::Relay {
        endpoint: settings.endpoint.clone(),
        request: DonationRequest {
            amount: minor,
            currency: settings.currency.clone(),
            email: email.to_string(),
        },
    })
}

/// Reads the checkout URL out of a relay reply. Any failure collapses to
/// `None`; the caller shows the generic retry message.
pub fn checkout_url_from_reply(success: bool, body: Option<&Value>) -> Option<String> {
    if !success {
        return None;
    }
    body.and_then(|b| b.get("checkoutUrl"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn resolve_against(link: &str, origin: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if link.starts_with('/') {
        format!("{}{}", origin, link)
    } else {
        format!("{}/{}", origin, link)
    }
}

/// Sets query parameters on `url`, replacing existing ones with the same
/// name and keeping any fragment at the end.
pub fn with_query_params(url: &str, params: &[(&str, &str)]) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };
    let (base, query) = match without_fragment.split_once('?') {
        Some((base, query)) => (base, query),
        None => (without_fragment, ""),
    };

    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let name = pair.split('=').next().unwrap_or_default();
            !params.iter().any(|(key, _)| *key == name)
        })
        .map(str::to_string)
        .collect();

    pairs.extend(
        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value))),
    );

    let mut out = format!("{}?{}", base, pairs.join("&"));
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Tracks the one checkout that may be pending and the message shown under
/// the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutState {
    pending: Option<f64>,
    error: Option<String>,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_amount(&self) -> Option<f64> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn start(
        &mut self,
        settings: &CheckoutSettings,
        amount: f64,
        email: &str,
        origin: &str,
    ) -> Result<CheckoutPlan, CheckoutError> {
        if self.pending.is_some() {
            return Err(CheckoutError::AlreadyPending);
        }

        match plan_checkout(settings, amount, email, origin) {
            Ok(plan) => {
                self.error = None;
                self.pending = Some(amount);
                Ok(plan)
            }
            Err(err) => {
                self.error = err.message().map(str::to_string);
                Err(err)
            }
        }
    }

    /// Settles the pending checkout. `Some(url)` means navigate there.
    pub fn finish(&mut self, checkout_url: Option<String>) -> Option<String> {
        self.pending = None;
        if checkout_url.is_none() {
            self.error = Some(CHECKOUT_RETRY.to_string());
        }
        checkout_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGIN: &str = "https://site.dev";

    #[test]
    fn test_amount_converted_to_minor_units() {
        let plan = plan_checkout(&CheckoutSettings::default(), 15.5, "me@site.dev", ORIGIN).unwrap();
        assert_eq!(
            plan,
            CheckoutPlan::Relay {
                endpoint: "/api/donations/checkout".to_string(),
                request: DonationRequest {
                    amount: 1550,
                    currency: "inr".to_string(),
                    email: "me@site.dev".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_invalid_amounts_blocked() {
        let settings = CheckoutSettings::default();
        for amount in [0.0, -5.0, f64::NAN] {
            assert_eq!(
                plan_checkout(&settings, amount, "me@site.dev", ORIGIN),
                Err(CheckoutError::InvalidAmount)
            );
        }
    }

    #[test]
    fn test_invalid_email_blocked() {
        let settings = CheckoutSettings::default();
        assert_eq!(
            plan_checkout(&settings, 3.0, "not-an-email", ORIGIN),
            Err(CheckoutError::InvalidEmail)
        );
        assert_eq!(
            plan_checkout(&settings, 3.0, "", ORIGIN),
            Err(CheckoutError::InvalidEmail)
        );
    }

    #[test]
    fn test_static_link_redirects_with_params() {
        let settings = CheckoutSettings::from_options(
            Some(" https://pay.example.com/b/abc?prefilled=1 "),
            None,
            None,
        );
        let plan = plan_checkout(&settings, 7.0, "a+b@site.dev", ORIGIN).unwrap();
        assert_eq!(
            plan,
            CheckoutPlan::Redirect(
                "https://pay.example.com/b/abc?prefilled=1&amount=700&email=a%2Bb%40site.dev&source=donate"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_relative_link_resolves_against_origin() {
        let settings = CheckoutSettings::from_options(Some("/pay?amount=1"), None, None);
        let plan = plan_checkout(&settings, 3.0, "me@site.dev", ORIGIN).unwrap();
        assert_eq!(
            plan,
            CheckoutPlan::Redirect(
                "https://site.dev/pay?amount=300&email=me%40site.dev&source=donate".to_string()
            )
        );
    }

    #[test]
    fn test_settings_fallbacks() {
        let settings = CheckoutSettings::from_options(None, Some(""), Some("usd"));
        assert_eq!(settings.donation_link, "");
        assert_eq!(settings.endpoint, "/api/donations/checkout");
        assert_eq!(settings.currency, "usd");
    }

    #[test]
    fn test_checkout_url_extraction() {
        let body = json!({ "checkoutUrl": "https://checkout.example/s/1" });
        assert_eq!(
            checkout_url_from_reply(true, Some(&body)),
            Some("https://checkout.example/s/1".to_string())
        );
        assert_eq!(checkout_url_from_reply(false, Some(&body)), None);
        assert_eq!(checkout_url_from_reply(true, Some(&json!({}))), None);
        assert_eq!(checkout_url_from_reply(true, None), None);
    }

    #[test]
    fn test_single_pending_checkout() {
        let settings = CheckoutSettings::default();
        let mut state = CheckoutState::new();

        assert!(state.start(&settings, 12.0, "me@site.dev", ORIGIN).is_ok());
        assert_eq!(state.pending_amount(), Some(12.0));
        assert_eq!(
            state.start(&settings, 3.0, "me@site.dev", ORIGIN),
            Err(CheckoutError::AlreadyPending)
        );

        let url = state.finish(Some("https://checkout.example".to_string()));
        assert_eq!(url.as_deref(), Some("https://checkout.example"));
        assert!(!state.is_pending());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failed_checkout_shows_retry_message() {
        let settings = CheckoutSettings::default();
        let mut state = CheckoutState::new();
        state.start(&settings, 12.0, "me@site.dev", ORIGIN).unwrap();

        assert_eq!(state.finish(None), None);
        assert_eq!(
            state.error(),
            Some("Checkout refused to cooperate. Please try again.")
        );
    }

    #[test]
    fn test_validation_error_is_field_specific() {
        let settings = CheckoutSettings::default();
        let mut state = CheckoutState::new();
        let _ = state.start(&settings, -5.0, "me@site.dev", ORIGIN);
        assert_eq!(
            state.error(),
            Some("Pick a positive amount so the pixels can breathe.")
        );
        assert!(!state.is_pending());

        let _ = state.start(&settings, 5.0, "bad", ORIGIN);
        assert_eq!(
            state.error(),
            Some("Add a valid email so the receipt knows where to land.")
        );
    }
}
