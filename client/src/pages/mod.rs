//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns a constant dataset and the callbacks for its buttons, and
//! delegates rendering to `components`. Callbacks only log for now.

pub mod group;
pub mod inventory;
pub mod login;
pub mod planning;
pub mod project;
