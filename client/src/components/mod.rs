//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless: they render whatever data and callbacks the
//! page hands them and read nothing from context except the router.

pub mod button;
pub mod listing_page;
pub mod nav_menu;
pub mod table;
pub mod table_header;
