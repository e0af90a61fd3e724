use crate::shared::scroll::{scroll_window_to, section_offset_for, use_section_progress};
use contracts::domain::portfolio::{
    PROJECTS_HINT_UNTIL, PROJECTS_SECTION_VH, SCENES, SCENE_BEATS, SCENE_SCHEDULE,
};
use contracts::motion::Reveal;
use leptos::prelude::*;

/// Five full-screen scenes, four captioned beats each.
#[component]
pub fn ProjectScenes() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let progress = use_section_progress(section_ref);
    let scene = Memo::new(move |_| SCENE_SCHEDULE.read(progress.get()));

    let title_reveal = Reveal::fade_up(60.0);

    let jump_to = move |index: usize| {
        let Some((start, _)) = SCENE_SCHEDULE.bounds(index) else {
            return;
        };
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        if let Some(top) = section_offset_for(&section, start) {
            scroll_window_to(top);
        }
    };

    view! {
        <section
            id="projects"
            class="cine-projects"
            node_ref=section_ref
            style={format!("height: {}vh;", PROJECTS_SECTION_VH)}
        >
            <div class="cine-sticky">
                <p
                    class="scroll-hint"
                    style={move || if progress.get() > PROJECTS_HINT_UNTIL { "opacity: 0;" } else { "opacity: 1;" }}
                >
                    "Scroll to explore"
                </p>

                {move || {
                    let reading = scene.get();
                    let current = &SCENES[reading.index];
                    let beat = SCENE_BEATS[reading.index].read(reading.local);
                    let intro = (reading.local * 4.0).min(1.0);
                    view! {
                        <article class="scene" data-scene={reading.index.to_string()}>
                            <span class="scene-number">{current.number}</span>
                            <h2 class="scene-title" style={title_reveal.style(intro, 0)}>{current.title}</h2>
                            <p class="scene-subtitle">{current.subtitle}</p>
                            <p class="scene-caption">
                                {current.beat_captions.get(beat.index).copied().unwrap_or_default()}
                            </p>
                            <div class="scene-beats" aria-hidden="true">
                                {(0..current.beat_captions.len())
                                    .map(|i| {
                                        view! {
                                            <span class={if i <= beat.index { "scene-beat lit" } else { "scene-beat" }}></span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </article>
                    }
                }}

                <nav class="scene-dots" aria-label="Scenes">
                    {SCENES
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            view! {
                                <button
                                    class=move || if scene.get().index == i { "scene-dot active" } else { "scene-dot" }
                                    aria-label=s.title
                                    on:click=move |_| jump_to(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </section>
    }
}
