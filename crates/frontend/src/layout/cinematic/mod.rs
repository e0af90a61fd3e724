//! Cinematic theme: full-page sticky sections driven by window scroll.

mod about;
mod contact;
mod cursor;
mod experience;
mod hero;
mod nav;
mod page;
mod projects;
mod stack;

pub use page::CinematicPage;
