use crate::shared::timers::{now_ms, use_interval};
use contracts::motion::pet::{Pet, PetMood};
use leptos::ev;
use leptos::prelude::*;

const TICK_MS: u32 = 200;

fn mood_class(mood: PetMood) -> &'static str {
    match mood {
        PetMood::Idle => "pet idle",
        PetMood::Watching => "pet watching",
        PetMood::Dizzy => "pet dizzy",
        PetMood::Sleeping => "pet sleeping",
        PetMood::Happy => "pet happy",
    }
}

/// Little blob in the corner that follows the cursor, naps, gets dizzy on
/// fast scrolling and purrs when clicked.
#[component]
pub fn VirtualPet() -> impl IntoView {
    let pet = RwSignal::new(Pet::new());
    let pointer = RwSignal::new((0.0_f64, 0.0_f64));
    let body_ref = NodeRef::<leptos::svg::Svg>::new();

    let on_move = window_event_listener(ev::mousemove, move |e: ev::MouseEvent| {
        pointer.set((e.client_x() as f64, e.client_y() as f64));
        pet.update(|p| p.on_mouse_move(now_ms()));
    });
    let on_wheel = window_event_listener(ev::wheel, move |e: ev::WheelEvent| {
        pet.update(|p| p.on_wheel(e.delta_y(), now_ms()));
    });
    on_cleanup(move || {
        on_move.remove();
        on_wheel.remove();
    });

    use_interval(TICK_MS, move || {
        pet.maybe_update(|p| p.tick(now_ms()));
    });

    let eyes = move || {
        let center = body_ref
            .get()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)
            })
            .unwrap_or_default();
        pet.with(|p| p.eye_offset(center, pointer.get()))
    };

    view! {
        <div class=move || mood_class(pet.with(|p| p.mood())) on:click=move |_| pet.update(|p| p.on_click(now_ms()))>
            {move || pet.with(|p| p.mood().bubble()).map(|text| view! { <span class="pet-bubble">{text}</span> })}
            <svg node_ref=body_ref width="64" height="64" viewBox="0 0 64 64" aria-label="Virtual pet">
                <ellipse class="pet-body" cx="32" cy="38" rx="24" ry="20" />
                {move || {
                    let (dx, dy) = eyes();
                    let sleeping = pet.with(|p| p.mood() == PetMood::Sleeping);
                    if sleeping {
                        view! {
                            <g class="pet-eyes closed">
                                <path d="M18 34 q4 3 8 0" />
                                <path d="M38 34 q4 3 8 0" />
                            </g>
                        }.into_any()
                    } else {
                        view! {
                            <g class="pet-eyes">
                                <circle cx="22" cy="34" r="5" fill="white" />
                                <circle cx="42" cy="34" r="5" fill="white" />
                                <circle cx={format!("{:.2}", 22.0 + dx)} cy={format!("{:.2}", 34.0 + dy)} r="2.2" />
                                <circle cx={format!("{:.2}", 42.0 + dx)} cy={format!("{:.2}", 34.0 + dy)} r="2.2" />
                            </g>
                        }.into_any()
                    }
                }}
            </svg>
        </div>
    }
}
