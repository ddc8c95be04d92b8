//! Page generation modules
//!
//! Page modules assemble shared components from the components module into
//! complete HTML documents.

pub mod document;
