//! App-level actions emitted by pages and global shortcuts.

use crate::app::router::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    /// Successful sign-in with the entered email
    SignedIn(String),
    Logout,
    ToggleTheme,
    SetDarkMode(bool),
    Quit,
    None,
}
