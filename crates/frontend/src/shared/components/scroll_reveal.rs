use contracts::motion::Reveal;
use leptos::prelude::*;

/// Wraps `children` in a div whose inline style follows `reveal` at the
/// given scroll progress.
#[component]
pub fn ScrollReveal(
    #[prop(into)] progress: Signal<f64>,
    reveal: Reveal,
    /// Position in a staggered group.
    #[prop(optional)]
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = move || reveal.style(progress.get(), index);

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
