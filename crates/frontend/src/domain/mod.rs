pub mod bonsai;
pub mod chat;
pub mod clock;
pub mod contact;
pub mod github;
pub mod loader;
pub mod pet;
pub mod weather;
