//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Pages own their data; this module only defines the shapes that data takes
//! on its way into the table components.

pub mod dataset;
