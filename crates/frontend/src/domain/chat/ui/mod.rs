//! Chat widget (MVVM)
//!
//! - model.rs: POST /api/chat
//! - view_model.rs: ChatWidgetVm with RwSignals around `ChatController`
//! - view.rs: floating ChatWidget component

mod model;
mod view;
mod view_model;

pub use view::ChatWidget;
pub use view_model::ChatWidgetVm;
