//! Reusable HTML components for page generation
//!
//! Maud component functions for the document page: the layout wrapper,
//! the navigation sidebar and the repository header.

pub mod layout;
pub mod metadata;
pub mod sidebar;
