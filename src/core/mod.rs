//! Core building blocks shared by the component set.
//!
//! # Module Components
//!
//! - [`component`] - Base component trait and lifecycle hooks
//! - [`debounce`] - Timer-based input coalescing
//! - [`event_handler`] - Terminal event pump for the application loop
//! - [`layout`] - Layout calculations and overlay positioning
//!
//! Components implement the [`Component`] trait, receive key events from the
//! host loop and emit typed events back to their parent. Timers (debounce
//! windows, toast lifetimes, spinner frames) advance on the application tick.

pub mod component;
pub mod debounce;
pub mod event_handler;
pub mod layout;

pub use component::Component;
pub use debounce::Debouncer;
pub use event_handler::{EventHandler, EventType};
pub use layout::LayoutManager;
