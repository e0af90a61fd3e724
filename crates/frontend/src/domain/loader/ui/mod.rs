mod boot_screen;
mod cinematic_loader;

pub use boot_screen::BootScreen;
pub use cinematic_loader::CinematicLoader;
