pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod icons;
pub mod scroll;
pub mod theme;
pub mod timers;
