use crate::domain::contact::ui::ContactForm;
use crate::shared::components::scroll_reveal::ScrollReveal;
use crate::shared::icons::icon;
use crate::shared::scroll::use_entrance_progress;
use contracts::domain::portfolio::{PROFILE, SOCIALS};
use contracts::motion::Reveal;
use leptos::prelude::*;

#[component]
pub fn ContactFinale() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    // last section: fully scrolled, progress bottoms out near h / (h + vh)
    let progress = use_entrance_progress(section_ref);
    let reveal = Reveal::fade_up(50.0).stagger(0.06).span(0.2);

    view! {
        <section id="contact" class="cine-contact" node_ref=section_ref>
            <ScrollReveal progress=progress reveal=reveal.clone() index=0 class="contact-intro">
                <h2 class="cine-heading">"Let's build something"</h2>
                <a class="contact-email" href={format!("mailto:{}", PROFILE.email)}>
                    {PROFILE.email}
                </a>
            </ScrollReveal>
            <ScrollReveal progress=progress reveal=reveal.clone() index=1 class="contact-form-wrap">
                <ContactForm />
            </ScrollReveal>
            <ScrollReveal progress=progress reveal=reveal index=2 class="contact-socials">
                {SOCIALS
                    .iter()
                    .map(|s| {
                        view! {
                            <a href=s.url target="_blank" rel="noopener noreferrer" aria-label=s.platform>
                                {icon(s.icon)}
                            </a>
                        }
                    })
                    .collect_view()}
            </ScrollReveal>
        </section>
    }
}
