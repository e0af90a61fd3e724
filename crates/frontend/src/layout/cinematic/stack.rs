use crate::domain::clock::ui::BerlinClock;
use crate::shared::scroll::use_section_progress;
use crate::shared::timers::{now_ms, use_interval};
use contracts::domain::stack::{
    cpu_percent, cube_faces, revealed, DesktopFrame, DesktopWindow, BOOT_LINES, CLOUD_LINKS,
    CLOUD_SERVICES, CPU_HOT_PERCENT, CPU_SAMPLE_MS, DB_CONNECTIONS, EASTER_EGG_DELAY_MS,
    EASTER_EGG_MESSAGE, LANGUAGE_CHIPS, ML_LABELS, PROCESSES, STACK_SECTION_VH, TERMINAL_LINES,
    TOOLS_TICKER,
};
use contracts::motion::{Channel, Reveal};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Boots a fake OS, then opens one window per skill area while the
/// visitor scrolls through a 700vh section.
#[component]
pub fn StackDesktop() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let progress = use_section_progress(section_ref);
    let frame = Memo::new(move |_| DesktopFrame::at(progress.get()));

    let egg = RwSignal::new(false);
    // bumped on every enter/leave; a pending timer only fires for its own ticket
    let hover_ticket = RwSignal::new(0_u32);
    let on_enter = move |_| {
        if egg.get_untracked() {
            return;
        }
        hover_ticket.update(|t| *t = t.wrapping_add(1));
        let ticket = hover_ticket.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(EASTER_EGG_DELAY_MS).await;
            if hover_ticket.try_get_untracked() == Some(ticket) {
                egg.set(true);
            }
        });
    };
    let on_leave = move |_| hover_ticket.update(|t| *t = t.wrapping_add(1));

    view! {
        <section
            id="stack"
            class="cine-stack"
            node_ref=section_ref
            style={format!("height: {}vh;", STACK_SECTION_VH)}
        >
            <div class="cine-sticky desk" on:mouseenter=on_enter on:mouseleave=on_leave>
                <svg
                    class="desk-wallpaper"
                    viewBox="0 0 1000 600"
                    preserveAspectRatio="none"
                    aria-hidden="true"
                    style=move || format!("opacity: {:.3};", frame.get().wallpaper_opacity())
                >
                    <path d="M0 400 Q100 380 200 390 Q300 350 400 370 Q500 310 600 350 Q700 330 800 360 Q900 340 1000 350" />
                    <path class="faint" d="M0 420 Q100 410 200 425 Q300 400 400 410 Q500 390 600 405 Q700 395 800 400 Q900 385 1000 395" />
                </svg>

                <p class="desk-label">"Tech Stack"</p>

                <div class=move || if frame.get().booting() { "tool-band" } else { "tool-band on" }>
                    <div class="tool-track">
                        {(0..4)
                            .flat_map(|_| TOOLS_TICKER.iter())
                            .map(|&(name, glyph)| {
                                view! {
                                    <span class="tool">
                                        <span class="tool-icon">{glyph}</span>
                                        {name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <BootLog frame=frame />

                <div class=move || if frame.get().booting() { "desk-windows" } else { "desk-windows on" }>
                    <OsWindow frame=frame window=DesktopWindow::Terminal>
                        <TerminalBody frame=frame />
                    </OsWindow>
                    <OsWindow frame=frame window=DesktopWindow::Processes>
                        <ProcessList frame=frame />
                    </OsWindow>
                    <OsWindow frame=frame window=DesktopWindow::MlStudio>
                        <MlViewport frame=frame />
                    </OsWindow>
                    <OsWindow frame=frame window=DesktopWindow::Cloud>
                        <CloudMap frame=frame />
                    </OsWindow>
                    <OsWindow frame=frame window=DesktopWindow::Databases>
                        <DbList frame=frame />
                    </OsWindow>

                    <div class="desk-taskbar">
                        {DesktopWindow::ALL
                            .iter()
                            .map(|&w| {
                                view! {
                                    <span
                                        class=move || if frame.get().active() == w { "task active" } else { "task" }
                                        title={w.taskbar_label()}
                                    >
                                        <span class="task-icon">{w.taskbar_icon()}</span>
                                        {w.taskbar_label()}
                                    </span>
                                }
                            })
                            .collect_view()}
                        <BerlinClock />
                    </div>
                </div>

                <Show when=move || egg.get()>
                    <div class="desk-toast" role="status">
                        <span class="toast-icon">"☁️"</span>
                        <p>{EASTER_EGG_MESSAGE}</p>
                        <button class="toast-close" aria-label="Dismiss" on:click=move |_| egg.set(false)>
                            "×"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn BootLog(frame: Memo<DesktopFrame>) -> impl IntoView {
    view! {
        <div class=move || if frame.get().booting() { "desk-boot" } else { "desk-boot done" }>
            <div class="desk-boot-log">
                {BOOT_LINES
                    .iter()
                    .enumerate()
                    .map(|(i, &line)| {
                        let class = if line.starts_with('━') { "desk-boot-line rule" } else { "desk-boot-line" };
                        view! {
                            <div
                                class=class
                                style=move || if frame.get().boot_line_visible(i) { "opacity: 1;" } else { "opacity: 0;" }
                            >
                                {line}
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="desk-boot-bar">
                    <div
                        class="desk-boot-fill"
                        style=move || format!("width: {:.1}%;", frame.get().boot_bar_percent())
                    ></div>
                </div>
                <p class="desk-boot-percent">
                    {move || format!("{}%", frame.get().boot_bar_percent().round() as u32)}
                </p>
            </div>
        </div>
    }
}

/// Window chrome. Scales and fades in over the first part of its own span.
#[component]
fn OsWindow(frame: Memo<DesktopFrame>, window: DesktopWindow, children: Children) -> impl IntoView {
    let reveal = Reveal::fade_up(20.0).channel(Channel::Scale, 0.85, 1.0).span(0.35);
    let class = move || {
        let f = frame.get();
        let mut class = format!("os-window os-window-{}", window.index());
        if f.active() == window {
            class.push_str(" active");
        }
        if !f.is_open(window) {
            class.push_str(" closed");
        }
        class
    };

    view! {
        <div class=class>
            <div class="os-frame" style=move || reveal.style(frame.get().local(window), 0)>
                <div class="os-titlebar">
                    <span class="os-light red"></span>
                    <span class="os-light amber"></span>
                    <span class="os-light green"></span>
                    <span class="os-title">{window.title()}</span>
                </div>
                <div class="os-body">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn TerminalBody(frame: Memo<DesktopFrame>) -> impl IntoView {
    move || {
        let f = frame.get();
        let shown = f.terminal_lines();
        let local = f.local(DesktopWindow::Terminal);
        view! {
            <div class="term">
                {TERMINAL_LINES
                    .iter()
                    .take(shown)
                    .map(|&(text, kind)| view! { <div class={kind.class()}>{text}</div> })
                    .collect_view()}
                {(shown == TERMINAL_LINES.len())
                    .then(|| view! { <div class="term-command term-cursor">"$ _"</div> })}
                <div class="os-chips">
                    {LANGUAGE_CHIPS
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| revealed(local, *i, 0.8, 0.03))
                        .map(|(_, &name)| view! { <span class="os-chip">{name}</span> })
                        .collect_view()}
                </div>
            </div>
        }
    }
}

#[component]
fn ProcessList(frame: Memo<DesktopFrame>) -> impl IntoView {
    let now = RwSignal::new(now_ms());
    use_interval(CPU_SAMPLE_MS, move || {
        if frame.get_untracked().is_open(DesktopWindow::Processes) {
            now.set(now_ms());
        }
    });

    move || {
        let local = frame.get().local(DesktopWindow::Processes);
        let t = now.get();
        view! {
            <div class="proc-list">
                {PROCESSES
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| revealed(local, *i, 0.0, 0.12))
                    .map(|(i, p)| {
                        let cpu = cpu_percent(p.cpu, i, t);
                        let bar = if cpu > CPU_HOT_PERCENT { "cpu-bar hot" } else { "cpu-bar" };
                        view! {
                            <div class="proc-row">
                                <span class="proc-name">{p.name}</span>
                                <span class="proc-note">{p.note}</span>
                                <div class="cpu-track">
                                    <div class=bar style={format!("width: {:.0}%;", cpu.min(100.0))}></div>
                                </div>
                                <span class="proc-status">{p.status}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    }
}

#[component]
fn MlViewport(frame: Memo<DesktopFrame>) -> impl IntoView {
    move || {
        let local = frame.get().local(DesktopWindow::MlStudio);
        let (back, front) = cube_faces(local);
        view! {
            <div class="ml-view">
                <svg class="ml-cube" viewBox="0 0 200 160" aria-hidden="true">
                    <polygon class="cube-back" points=back />
                    <polygon class="cube-front" points=front />
                    <line class="cube-edge" x1="60" y1="20" x2="80" y2="45" />
                    <line class="cube-edge" x1="140" y1="20" x2="160" y2="45" />
                    <line class="cube-edge" x1="140" y1="100" x2="160" y2="135" />
                    <line class="cube-edge" x1="60" y1="100" x2="80" y2="135" />
                    {(local > 0.3)
                        .then(|| {
                            let opacity = format!("opacity: {:.3};", local);
                            (0..3)
                                .map(|i| {
                                    let x = (80 + i * 27).to_string();
                                    let y = (45 + i * 30).to_string();
                                    view! {
                                        <g class="cube-grid" style={opacity.clone()}>
                                            <line x1={x.clone()} y1="45" x2=x y2="135" />
                                            <line x1="80" y1={y.clone()} x2="160" y2=y />
                                        </g>
                                    }
                                })
                                .collect_view()
                        })}
                </svg>
                <p class="ml-converged" style={if local > 0.7 { "opacity: 1;" } else { "opacity: 0;" }}>
                    "MAE 0.099% — Converged"
                </p>
                <div class="os-chips">
                    {ML_LABELS
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| revealed(local, *i, 0.5, 0.08))
                        .map(|(_, &name)| view! { <span class="os-chip">{name}</span> })
                        .collect_view()}
                </div>
            </div>
        }
    }
}

#[component]
fn CloudMap(frame: Memo<DesktopFrame>) -> impl IntoView {
    move || {
        let local = frame.get().local(DesktopWindow::Cloud);
        view! {
            <div class="cloud-map">
                {(local > 0.5)
                    .then(|| {
                        view! {
                            <svg class="cloud-links" aria-hidden="true">
                                {CLOUD_LINKS
                                    .iter()
                                    .map(|&(a, b)| {
                                        let (from, to) = (&CLOUD_SERVICES[a], &CLOUD_SERVICES[b]);
                                        view! {
                                            <line
                                                x1={format!("{}%", from.x)}
                                                y1={format!("{}%", from.y)}
                                                x2={format!("{}%", to.x)}
                                                y2={format!("{}%", to.y)}
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </svg>
                        }
                    })}
                {CLOUD_SERVICES
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| revealed(local, *i, 0.0, 0.14))
                    .map(|(_, s)| {
                        view! {
                            <div
                                class="cloud-node"
                                style={format!("left: {}%; top: {}%; border-color: {};", s.x, s.y, s.color)}
                            >
                                <span class="cloud-icon">{s.icon}</span>
                                <span class="cloud-name">{s.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {(local > 0.6).then(|| view! { <p class="cloud-status">"● All services operational"</p> })}
        }
    }
}

#[component]
fn DbList(frame: Memo<DesktopFrame>) -> impl IntoView {
    move || {
        let local = frame.get().local(DesktopWindow::Databases);
        view! {
            <ul class="db-list">
                {DB_CONNECTIONS
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| revealed(local, *i, 0.0, 0.12))
                    .map(|(_, db)| {
                        view! {
                            <li class="db-row">
                                <span class="db-dot" style={format!("background: {};", db.color)}></span>
                                <span class="db-name">{db.name}</span>
                                <span class="db-ping">{db.ping}</span>
                                <span class="db-status">{db.status}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    }
}
