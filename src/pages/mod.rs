//! Routed pages.

mod landing;
mod project_detail;

pub use landing::Landing;
pub use project_detail::ProjectDetail;
