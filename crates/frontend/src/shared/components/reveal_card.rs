//! RevealCard: a Thaw [`Card`] that fades up when it first renders.
//!
//! ```text
//! <RevealCard delay_ms=0>   // card 1
//! <RevealCard delay_ms=80>  // card 2
//! <RevealCard delay_ms=160> // card 3
//! ```
//!
//! The keyframes (`card-appear`) live in `style/main.css`.

use leptos::prelude::*;
use thaw::Card;

/// Stagger step between neighbouring cards in a grid.
pub const STAGGER_MS: u32 = 80;

fn appear_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.4s ease-out {}ms both;", delay_ms)
}

#[component]
pub fn RevealCard(
    /// Animation delay, for stagger effects.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style={appear_style(delay_ms)}>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style_is_only_the_staggered_animation() {
        assert_eq!(appear_style(0), "animation: card-appear 0.4s ease-out 0ms both;");
        let third = appear_style(2 * STAGGER_MS);
        assert!(third.contains(" 160ms "));
        assert_eq!(third.matches(';').count(), 1);
    }
}
