pub mod cinematic;
pub mod studio;
