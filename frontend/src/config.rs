use shared::checkout::CheckoutSettings;
use web_sys::window;

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    "http://127.0.0.1:3000".to_string()
}

/// Resolves a relay path (`/api/...`) against the API base. Absolute URLs
/// are left alone.
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}

pub fn current_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(get_api_base_url)
}

/// Checkout settings baked in at build time.
pub fn checkout_settings() -> CheckoutSettings {
    CheckoutSettings::from_options(
        option_env!("NEXT_PUBLIC_STRIPE_DONATION_LINK"),
        option_env!("NEXT_PUBLIC_STRIPE_CHECKOUT_ENDPOINT"),
        option_env!("NEXT_PUBLIC_DONATION_CURRENCY"),
    )
}

pub fn navigate_to(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().assign(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}
