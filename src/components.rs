//! Reusable HTML components for page generation
//!
//! Maud component functions used by the preview page. Components handle
//! the document shell and the submission header so page modules only
//! compose them.

pub mod layout;
pub mod metadata;
