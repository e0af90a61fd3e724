use super::footer::Footer;
use super::sections::{
    AboutSection, CertificationsSection, ContactSection, ExperienceSection, HiringSection,
    ProjectsSection, SkillsSection,
};
use super::sidebar::Sidebar;
use crate::domain::chat::ui::ChatWidget;
use crate::domain::loader::ui::BootScreen;
use crate::domain::pet::ui::VirtualPet;
use crate::shared::scroll::{
    container_anchors, container_overflows, document_anchors, use_container_progress,
    viewport_height, window_scroll_y,
};
use contracts::domain::portfolio::STUDIO_NAV;
use contracts::motion::scroll_spy::{active_section, spy_line};
use leptos::prelude::*;

#[component]
pub fn StudioPage() -> impl IntoView {
    let booted = RwSignal::new(false);
    let active = RwSignal::new(STUDIO_NAV[0].anchor.to_string());
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let scheduler = use_container_progress(container_ref, move || {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let ids: Vec<&str> = STUDIO_NAV.iter().map(|l| l.anchor).collect();
        // narrow screens scroll the window, not the container
        let (anchors, line) = if container_overflows(&container) {
            (
                container_anchors(&ids),
                spy_line(container.scroll_top() as f64, container.client_height() as f64),
            )
        } else {
            (
                document_anchors(&ids),
                spy_line(window_scroll_y(), viewport_height().unwrap_or(0.0)),
            )
        };
        if let Some(id) = active_section(&anchors, line) {
            if active.with_untracked(|current| current != id) {
                active.set(id.to_string());
            }
        }
    });
    let progress = scheduler.progress();

    view! {
        <div class="studio">
            <Show when=move || !booted.get()>
                <BootScreen on_done=Callback::new(move |_| booted.set(true)) />
            </Show>

            <div
                class="studio-progress"
                style=move || format!("transform: scaleX({:.4});", progress.get())
            ></div>

            <div class="studio-layout">
                <Sidebar active=active progress=progress />

                <div
                    class="studio-scroll"
                    node_ref=container_ref
                    on:scroll=move |_| scheduler.schedule()
                >
                    <main class="studio-main">
                        <AboutSection />
                        <SkillsSection />
                        <ProjectsSection />
                        <ExperienceSection />
                        <CertificationsSection />
                        <HiringSection />
                        <ContactSection />
                    </main>
                    <Footer />
                </div>
            </div>

            <ChatWidget />
            <VirtualPet />
        </div>
    }
}
