pub mod chat;
pub mod contact;
pub mod github;
pub mod portfolio;
pub mod stack;
pub mod weather;
