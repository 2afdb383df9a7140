//! The four application pages.

pub mod dashboard;
pub mod login;
pub mod settings;
pub mod users;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use settings::SettingsPage;
pub use users::UsersPage;
