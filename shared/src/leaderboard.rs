//! Display rules for the donation leaderboard.

use serde_json::Value;

use crate::donations::{group_indian, LeaderboardEntry};

pub const AVATAR_COLORS: [&str; 6] = [
    "#ffd166", "#ef476f", "#06d6a0", "#118ab2", "#8338ec", "#ff7a00",
];

const ANONYMOUS_LABEL: &str = "Anonymous donor";
const ANONYMOUS_EMAIL: &str = "mystery human";

/// One rendered leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorRow {
    pub key: String,
    pub label: String,
    pub display_email: String,
    pub initial: String,
    pub color: &'static str,
    pub amount: String,
}

impl From<&LeaderboardEntry> for DonorRow {
    fn from(entry: &LeaderboardEntry) -> Self {
        let label = entry
            .email
            .clone()
            .unwrap_or_else(|| ANONYMOUS_LABEL.to_string());
        let display_email = entry
            .email
            .as_deref()
            .map(mask_email)
            .unwrap_or_else(|| ANONYMOUS_EMAIL.to_string());
        let color_key = entry.email.as_deref().unwrap_or("anonymous");
        let initial = entry
            .email
            .as_deref()
            .and_then(|e| e.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "A".to_string());

        Self {
            key: format!("{}-{}", entry.created_at, label),
            label,
            display_email,
            initial,
            color: avatar_color(color_key),
            amount: format_amount(entry.amount, &entry.currency),
        }
    }
}

/// Accepts whatever the relay returned. Anything but an array renders as
/// an empty board, and malformed entries are dropped.
pub fn entries_from_body(body: Value) -> Vec<LeaderboardEntry> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// The relay answered 2xx but the body was not JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreadableBody;

impl std::fmt::Display for UnreadableBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "leaderboard body is not JSON")
    }
}

/// Entries from a successful reply. `None` means the body did not parse,
/// which is a failure; valid JSON that is not an array is an empty board.
pub fn entries_from_reply(body: Option<Value>) -> Result<Vec<LeaderboardEntry>, UnreadableBody> {
    body.map(entries_from_body).ok_or(UnreadableBody)
}

pub fn mask_email(email: &str) -> String {
    let mut parts = email.split('@');
    let name = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) if !domain.is_empty() => domain,
        _ => return email.to_string(),
    };

    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= 2 {
        let first: String = chars.first().map(|c| c.to_string()).unwrap_or_default();
        return format!("{}*@{}", first, domain);
    }

    let prefix: String = chars[..2].iter().collect();
    format!("{}***@{}", prefix, domain)
}

pub fn hash_string(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0u32, |hash, unit| (hash * 31 + unit as u32) % 100_000)
}

pub fn avatar_color(key: &str) -> &'static str {
    AVATAR_COLORS[hash_string(key) as usize % AVATAR_COLORS.len()]
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Formats a minor-unit amount with two decimals. Only the four currencies
/// in `currency_symbol` get a symbol; anything else prints the upper-cased
/// code after the number, still with two decimals.
pub fn format_amount(amount: i64, currency: &str) -> String {
    let code = currency.to_uppercase();
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let whole = group_indian(&(abs / 100).to_string());
    let fraction = abs % 100;

    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}.{:02}", sign, symbol, whole, fraction),
        None => format!("{}{}.{:02} {}", sign, whole, fraction, code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(email: Option<&str>, amount: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            email: email.map(str::to_string),
            amount,
            currency: "inr".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jaykrown@example.com"), "ja***@example.com");
        assert_eq!(mask_email("ab@example.com"), "a*@example.com");
        assert_eq!(mask_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1550, "inr"), "₹15.50");
        assert_eq!(format_amount(12345600, "INR"), "₹1,23,456.00");
        assert_eq!(format_amount(700, "usd"), "$7.00");
        assert_eq!(format_amount(250, "xyz"), "2.50 XYZ");
    }

    #[test]
    fn test_avatar_color_is_stable() {
        let first = avatar_color("donor@example.com");
        assert_eq!(first, avatar_color("donor@example.com"));
        assert!(AVATAR_COLORS.contains(&first));
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
    }

    #[test]
    fn test_anonymous_row() {
        let row = DonorRow::from(&entry(None, 300));
        assert_eq!(row.label, "Anonymous donor");
        assert_eq!(row.display_email, "mystery human");
        assert_eq!(row.initial, "A");
        assert_eq!(row.color, avatar_color("anonymous"));
        assert_eq!(row.amount, "₹3.00");
    }

    #[test]
    fn test_named_row() {
        let row = DonorRow::from(&entry(Some("zoe@site.dev"), 2500));
        assert_eq!(row.label, "zoe@site.dev");
        assert_eq!(row.display_email, "zo***@site.dev");
        assert_eq!(row.initial, "Z");
        assert_eq!(row.key, "2024-01-01T00:00:00Z-zoe@site.dev");
    }

    #[test]
    fn test_non_array_body_is_empty() {
        assert!(entries_from_body(json!({ "entries": [] })).is_empty());
        let entries = entries_from_body(json!([
            { "email": "a@b.co", "amount": 100, "currency": "inr", "createdAt": "t" },
            { "bogus": true }
        ]));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_unparsable_reply_is_an_error() {
        assert_eq!(entries_from_reply(None), Err(UnreadableBody));
    }

    #[test]
    fn test_reply_with_non_array_json_is_empty() {
        assert_eq!(entries_from_reply(Some(json!({ "error": "nope" }))), Ok(Vec::new()));
        assert_eq!(entries_from_reply(Some(json!(null))), Ok(Vec::new()));
    }

    #[test]
    fn test_reply_with_array_yields_entries() {
        let entries = entries_from_reply(Some(json!([
            { "email": "a@b.co", "amount": 100, "currency": "inr", "createdAt": "t" }
        ])))
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email.as_deref(), Some("a@b.co"));
    }

    #[test]
    fn test_unknown_currency_falls_back_to_code() {
        assert_eq!(format_amount(-250, "xyz"), "-2.50 XYZ");
        assert_eq!(format_amount(5, "jpy"), "0.05 JPY");
    }
}
