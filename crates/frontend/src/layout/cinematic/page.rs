use super::about::AboutDig;
use super::contact::ContactFinale;
use super::cursor::CustomCursor;
use super::experience::ExperienceMissions;
use super::hero::Hero;
use super::nav::CinematicNav;
use super::projects::ProjectScenes;
use super::stack::StackDesktop;
use crate::domain::chat::ui::ChatWidget;
use crate::domain::loader::ui::CinematicLoader;
use crate::shared::scroll::use_page_progress;
use leptos::prelude::*;

#[component]
pub fn CinematicPage() -> impl IntoView {
    let loaded = RwSignal::new(false);
    let page_progress = use_page_progress();

    view! {
        <div class="cinematic">
            <Show when=move || !loaded.get()>
                <CinematicLoader on_done=Callback::new(move |_| loaded.set(true)) />
            </Show>

            <div
                class="cine-progress"
                style=move || format!("transform: scaleX({:.4});", page_progress.get())
            ></div>

            <CinematicNav />
            <Hero />
            <AboutDig />
            <StackDesktop />
            <ExperienceMissions />
            <ProjectScenes />
            <ContactFinale />
            <ChatWidget />
            <CustomCursor />
        </div>
    }
}
