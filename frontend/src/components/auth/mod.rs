pub mod logout_button;
pub mod panel;

pub use logout_button::LogoutButton;
pub use panel::AuthPanel;
