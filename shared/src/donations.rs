use rand::Rng;
use serde::{Deserialize, Serialize};

/// Payload sent to the checkout relay. `amount` is in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    pub amount: i64,
    pub currency: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub email: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationTier {
    pub amount: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

pub const DONATION_TIERS: [DonationTier; 4] = [
    DonationTier {
        amount: 3,
        title: "Adopt a pixel",
        description: "Keeps one pixel hydrated for a whole day.",
        badge: "Tiny hero",
    },
    DonationTier {
        amount: 7,
        title: "Refill the caffeine",
        description: "Turns bug reports into bug apologies.",
        badge: "Caffeinated",
    },
    DonationTier {
        amount: 12,
        title: "Boost the chaos",
        description: "Unlocks one extra feature and two extra tangents.",
        badge: "Plot twist",
    },
    DonationTier {
        amount: 25,
        title: "Launch the rocket",
        description: "Funds a full sprint of shipping and celebration.",
        badge: "Main character",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perk {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PERKS: [Perk; 3] = [
    Perk {
        title: "The Hall of Mild Fame",
        description: "Your name appears in my heart. Also maybe in the code comments.",
    },
    Perk {
        title: "Bug squashing morale",
        description: "Each donation scares one bug into behaving.",
    },
    Perk {
        title: "Positive chaos energy",
        description: "A small spark that keeps experiments playful.",
    },
];

const FAKE_TOTAL_MIN: u32 = 65_000;
const FAKE_TOTAL_MAX: u32 = 180_000;

/// Decorative running total shown on the donate page. It is not backed by
/// any data.
pub fn fake_total<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(FAKE_TOTAL_MIN..=FAKE_TOTAL_MAX)
}

/// Groups digits the Indian way: last three, then pairs (`1,23,456`).
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn format_inr_whole(value: u32) -> String {
    format!("₹{}", group_indian(&value.to_string()))
}
