//! Portal-style overlays: dialogs, confirmation and the side drawer.
//!
//! Overlays render above page content at the frame root. The dialog stack
//! owns the focus trap: while any dialog is open, every key press goes to
//! the top-most dialog and nowhere else.

pub mod confirm;
pub mod dialog;
pub mod drawer;

pub use confirm::ConfirmDialog;
pub use dialog::{Dialog, DialogId, DialogResponse, DialogStack};
pub use drawer::{Drawer, DrawerEvent};
