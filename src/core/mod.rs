//! Kiosk model: application state, device binding, recording and the
//! owner-only operations.

pub mod admin;
pub mod attendance;
pub mod binding;
pub mod kiosk;

pub use binding::BindingState;
pub use kiosk::Kiosk;
