//! Studio theme: fixed profile sidebar, inner scroll container with the
//! content sections, light/dark toggle.

mod footer;
mod page;
mod sections;
mod sidebar;

pub use page::StudioPage;
