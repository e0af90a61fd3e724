pub mod reveal_card;
pub mod scroll_reveal;
