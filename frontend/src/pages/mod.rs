pub mod donate;
pub mod donate_result;
pub mod home;
pub mod not_found;
