use crate::shared::scroll::use_section_progress;
use contracts::domain::portfolio::{
    ABOUT_LAYERS, ABOUT_LAYER_BACKGROUNDS, ABOUT_LAYER_COPY, ABOUT_SECTION_VH, BIO_WORDS,
};
use contracts::motion::{Channel, Reveal};
use leptos::prelude::*;

/// Length of the depth line path, in SVG units.
const DEPTH_PATH_LENGTH: f64 = 600.0;

/// 700vh dig through five depth layers with a sticky viewport.
#[component]
pub fn AboutDig() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let progress = use_section_progress(section_ref);
    let reading = Memo::new(move |_| ABOUT_LAYERS.read(progress.get()));

    // words arrive one by one across the surface layer
    let word_reveal = Reveal::fade_up(12.0)
        .stagger(0.8 / BIO_WORDS.len() as f64)
        .span(0.2);
    let panel_reveal = Reveal::fade_up(40.0).channel(Channel::Scale, 0.96, 1.0);
    let depth_line = Reveal::draw_path(DEPTH_PATH_LENGTH);

    view! {
        <section
            id="about"
            class="cine-about"
            node_ref=section_ref
            style={format!("height: {}vh;", ABOUT_SECTION_VH)}
        >
            <div
                class="cine-sticky"
                style=move || format!("background: {};", ABOUT_LAYER_BACKGROUNDS[reading.get().index])
            >
                <div class="depth-meter" aria-hidden="true">
                    <svg width="8" height="600" viewBox="0 0 8 600">
                        <path
                            d="M4 0 V600"
                            class="depth-line"
                            stroke-dasharray={DEPTH_PATH_LENGTH.to_string()}
                            style=move || depth_line.style(progress.get(), 0)
                        />
                    </svg>
                    <span class="depth-label">
                        {move || reading.get().name.unwrap_or_default()}
                    </span>
                    <span class="depth-value">
                        {move || format!("{:.0}%", progress.get() * 100.0)}
                    </span>
                </div>

                <div class="about-layers">
                    {ABOUT_LAYER_COPY
                        .iter()
                        .enumerate()
                        .map(|(index, copy)| {
                            let panel_reveal = panel_reveal.clone();
                            let word_reveal = word_reveal.clone();
                            let visible = move || reading.get().index == index;
                            let local = move || ABOUT_LAYERS.local(progress.get(), index);
                            view! {
                                <article
                                    class=move || if visible() { "about-layer current" } else { "about-layer" }
                                    aria-hidden=move || (!visible()).to_string()
                                    style=move || {
                                        if visible() {
                                            panel_reveal.style((local() * 3.0).min(1.0), 0)
                                        } else {
                                            "opacity: 0;".to_string()
                                        }
                                    }
                                >
                                    <h2 class="layer-name">{ABOUT_LAYERS.name(index).unwrap_or_default()}</h2>
                                    {if index == 0 {
                                        view! {
                                            <p class="bio-words">
                                                {BIO_WORDS
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(i, word)| {
                                                        let word_reveal = word_reveal.clone();
                                                        view! {
                                                            <span
                                                                class="bio-word"
                                                                style=move || word_reveal.style(local(), i)
                                                            >
                                                                {*word}
                                                                " "
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </p>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <p class="layer-copy">{*copy}</p> }.into_any()
                                    }}
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
