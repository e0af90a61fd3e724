mod view;

pub use view::BerlinClock;
