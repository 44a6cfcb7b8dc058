pub mod auth;
pub mod auth_flow;
pub mod checkout;
pub mod constants;
pub mod donations;
pub mod leaderboard;
pub mod session;
pub mod validation;
