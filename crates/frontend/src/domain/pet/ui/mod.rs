mod view;

pub use view::VirtualPet;
