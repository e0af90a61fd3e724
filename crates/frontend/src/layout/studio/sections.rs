use crate::domain::contact::ui::ContactForm;
use crate::domain::github::ui::GithubCard;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::reveal_card::{RevealCard, STAGGER_MS};
use crate::shared::icons::icon;
use contracts::domain::portfolio::{
    skill_categories, Certification, CERTIFICATIONS, EXPERIENCE, HIRING_HEADLINE,
    HIRING_OFFERINGS, PROFILE, PROJECTS, SKILLS, SOCIALS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const COPIED_RESET_MS: u32 = 2000;

#[component]
fn SectionHeader(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <header class="section-header">
            <span class="section-number">{number}</span>
            <h2>{title}</h2>
        </header>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="studio-section">
            <SectionHeader number="01" title="About" />
            <div class="about-grid">
                <p class="about-bio">{PROFILE.bio}</p>
                <GithubCard username=PROFILE.github_username />
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="studio-section">
            <SectionHeader number="02" title="Toolbox" />
            {skill_categories()
                .into_iter()
                .map(|category| {
                    view! {
                        <div class="skill-group">
                            <h3>{category}</h3>
                            <div class="skill-grid">
                                {SKILLS
                                    .iter()
                                    .filter(|s| s.category == category)
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <RevealCard class="skill-card" delay_ms={i as u32 * STAGGER_MS}>
                                                <div class="skill-name">{skill.name}</div>
                                                <div class="skill-desc">{skill.description}</div>
                                            </RevealCard>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="studio-section">
            <SectionHeader number="03" title="Projects" />
            <div class="project-list">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <RevealCard class="project-card" delay_ms={i as u32 * STAGGER_MS}>
                                <a href=project.link class="project-title">
                                    {project.title}
                                    {icon("arrow-up-right")}
                                </a>
                                <p>{project.description}</p>
                                <div class="tag-row">
                                    {project.tech.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
                                </div>
                            </RevealCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="studio-section">
            <SectionHeader number="04" title="Experience" />
            <ol class="timeline">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <li class="timeline-item">
                                <div class="timeline-period">{job.period}</div>
                                <div>
                                    <h3>{job.role}</h3>
                                    <div class="timeline-company">{job.company}</div>
                                    <p>{job.description}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification, index: usize) -> impl IntoView {
    let copied = RwSignal::new(false);

    let copy_id = move |_| {
        let Some(id) = cert.verification_id else {
            return;
        };
        copy_to_clipboard_with_callback(id, move || {
            copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(COPIED_RESET_MS).await;
                copied.set(false);
            });
        });
    };

    view! {
        <RevealCard class="cert-card" delay_ms={index as u32 * STAGGER_MS}>
            <div class="cert-icon">{icon("award")}</div>
            <div class="cert-body">
                <h3>
                    {match cert.link {
                        Some(link) => view! {
                            <a href=link target="_blank" rel="noopener noreferrer">{cert.name}</a>
                        }.into_any(),
                        None => view! { <span>{cert.name}</span> }.into_any(),
                    }}
                </h3>
                <div class="cert-meta">{cert.issuer} " · " {cert.date}</div>
                {cert.verification_id.map(|id| view! {
                    <button class="cert-id" title="Copy verification ID" on:click=copy_id>
                        <code>{id}</code>
                        {move || if copied.get() { icon("check") } else { icon("copy") }}
                        <span class="cert-id-status">{move || if copied.get() { "Copied!" } else { "" }}</span>
                    </button>
                })}
            </div>
        </RevealCard>
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class="studio-section">
            <SectionHeader number="05" title="Certifications" />
            <div class="cert-grid">
                {CERTIFICATIONS
                    .iter()
                    .enumerate()
                    .map(|(index, cert)| view! { <CertificationCard cert=cert index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HiringSection() -> impl IntoView {
    view! {
        <section id="hiring" class="studio-section">
            <SectionHeader number="06" title=HIRING_HEADLINE />
            <div class="hiring-grid">
                {HIRING_OFFERINGS
                    .iter()
                    .enumerate()
                    .map(|(i, offer)| {
                        view! {
                            <RevealCard class="hiring-card" delay_ms={i as u32 * STAGGER_MS}>
                                <h3>{offer.title}</h3>
                                <p>{offer.description}</p>
                            </RevealCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="studio-section">
            <SectionHeader number="07" title="Contact" />
            <div class="contact-grid">
                <div>
                    <p class="contact-lead">
                        "Have a pipeline that needs taming or a model that needs shipping? Drop a line."
                    </p>
                    <div class="contact-links">
                        {SOCIALS
                            .iter()
                            .map(|s| view! {
                                <a href=s.url target="_blank" rel="noopener noreferrer" class="contact-link">
                                    {icon(s.icon)}
                                    <span>{s.platform}</span>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}
