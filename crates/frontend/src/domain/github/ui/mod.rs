mod model;
mod view;

pub use view::GithubCard;
