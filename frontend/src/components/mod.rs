pub mod auth;
pub mod donate_form;
pub mod donation_leaderboard;
pub mod fake_total;
pub mod header;

pub use auth::*;
pub use donate_form::DonateForm;
pub use donation_leaderboard::DonationLeaderboard;
pub use fake_total::FakeTotal;
pub use header::Header;
