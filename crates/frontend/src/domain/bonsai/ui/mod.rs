mod view;

pub use view::BonsaiCanvas;
