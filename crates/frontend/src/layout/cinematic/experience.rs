use crate::shared::scroll::use_section_progress;
use contracts::domain::portfolio::{
    EDUCATION, EXPERIENCE_SECTION_VH, MISSIONS, MISSION_PORTION, MISSION_SCHEDULE,
};
use contracts::motion::phase::{beat_progress, split_at};
use contracts::motion::Reveal;
use leptos::prelude::*;

/// 1200vh sticky section: missions in the first 75%, education in the rest.
#[component]
pub fn ExperienceMissions() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let progress = use_section_progress(section_ref);

    let parts = Memo::new(move |_| split_at(progress.get(), MISSION_PORTION));
    let mission = Memo::new(move |_| MISSION_SCHEDULE.read(parts.get().0));
    let in_education = move || progress.get() > MISSION_PORTION;

    let beat_reveal = Reveal::fade_up(24.0);
    let degree_reveal = Reveal::fade_up(40.0).stagger(0.25).span(0.4);

    view! {
        <section
            id="experience"
            class="cine-experience"
            node_ref=section_ref
            style={format!("height: {}vh;", EXPERIENCE_SECTION_VH)}
        >
            <div class="cine-sticky">
                <h2 class="cine-heading">"Experience"</h2>
                <ol class="mission-dots" aria-hidden="true">
                    {(0..MISSIONS.len())
                        .map(|i| {
                            view! {
                                <li class=move || {
                                    if !in_education() && mission.get().index == i {
                                        "mission-dot active"
                                    } else {
                                        "mission-dot"
                                    }
                                }></li>
                            }
                        })
                        .collect_view()}
                </ol>

                <Show
                    when=move || !in_education()
                    fallback=move || {
                        let degree_reveal = degree_reveal.clone();
                        view! {
                            <div class="education">
                                <h3 class="education-title">"Education"</h3>
                                {EDUCATION
                                    .iter()
                                    .enumerate()
                                    .map(|(i, degree)| {
                                        let degree_reveal = degree_reveal.clone();
                                        view! {
                                            <article
                                                class="degree"
                                                style=move || degree_reveal.style(parts.get().1, i)
                                            >
                                                <h4>{degree.degree}</h4>
                                                <p>{degree.school}</p>
                                                <span class="degree-period">{degree.period}</span>
                                            </article>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    }
                >
                    {
                        let beat_reveal = beat_reveal.clone();
                        move || {
                            let reading = mission.get();
                            let current = &MISSIONS[reading.index];
                            let beats = beat_progress(reading.local, current.beats.len());
                            view! {
                                <article class="mission">
                                    <header class="mission-header">
                                        <span class="mission-code">{current.code}</span>
                                        <h3 class="mission-company">{current.company}</h3>
                                        <p class="mission-role">{current.role}</p>
                                        <span class="mission-period">{current.period}</span>
                                    </header>
                                    <ul class="mission-beats">
                                        {current
                                            .beats
                                            .iter()
                                            .zip(beats)
                                            .map(|(line, p)| {
                                                view! {
                                                    <li class="mission-beat" style={beat_reveal.style(p, 0)}>
                                                        {*line}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </article>
                            }
                        }
                    }
                </Show>
            </div>
        </section>
    }
}
