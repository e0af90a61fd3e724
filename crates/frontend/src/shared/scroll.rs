//! DOM side of the scroll pipeline: event wiring, per-frame measurement and
//! smooth scrolling helpers. The math lives in `contracts::motion`.

use contracts::motion::scroll_spy::SectionAnchor;
use contracts::motion::{ScrollMetrics, ScrollSequencer};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

type Measure = Rc<dyn Fn() -> Option<ScrollMetrics>>;
type FrameHook = Rc<dyn Fn()>;

/// Turns scroll events into at most one measurement per animation frame and
/// publishes the result as a signal.
#[derive(Clone)]
pub struct FrameScheduler {
    sequencer: Rc<ScrollSequencer>,
    measure: Measure,
    on_frame: Option<FrameHook>,
    progress: RwSignal<f64>,
}

impl FrameScheduler {
    pub fn new(measure: impl Fn() -> Option<ScrollMetrics> + 'static) -> Self {
        Self {
            sequencer: Rc::new(ScrollSequencer::new()),
            measure: Rc::new(measure),
            on_frame: None,
            progress: RwSignal::new(0.0),
        }
    }

    /// Extra work to run in the same frame as each measurement.
    pub fn with_frame_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_frame = Some(Rc::new(hook));
        self
    }

    pub fn progress(&self) -> Signal<f64> {
        self.progress.read_only().into()
    }

    /// Scroll event entry point.
    pub fn schedule(&self) {
        if !self.sequencer.request_frame() {
            return;
        }
        let this = self.clone();
        request_animation_frame(move || {
            let p = this.sequencer.on_frame((this.measure)());
            this.progress.set(p.value());
            if let Some(hook) = &this.on_frame {
                hook();
            }
        });
    }

    /// Synchronous read for mount and resize.
    pub fn measure_now(&self) {
        if let Some(metrics) = (self.measure)() {
            let p = self.sequencer.measure(&metrics);
            self.progress.set(p.value());
        }
        if let Some(hook) = &self.on_frame {
            hook();
        }
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Measure once after mount, again on resize, and on every window scroll.
fn drive_from_window(scheduler: FrameScheduler) {
    Effect::new({
        let scheduler = scheduler.clone();
        move |_| scheduler.measure_now()
    });

    let on_scroll = {
        let scheduler = scheduler.clone();
        window_event_listener(ev::scroll, move |_| scheduler.schedule())
    };
    let on_resize = window_event_listener(ev::resize, move |_| scheduler.measure_now());

    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
}

/// Progress through a tall section whose content is sticky.
pub fn use_section_progress(section: NodeRef<html::Section>) -> Signal<f64> {
    let scheduler = FrameScheduler::new(move || {
        let el = section.get_untracked()?;
        let rect = el.get_bounding_client_rect();
        Some(ScrollMetrics::from_section(
            rect.top(),
            el.offset_height() as f64,
            viewport_height()?,
        ))
    });
    let progress = scheduler.progress();
    drive_from_window(scheduler);
    progress
}

/// Progress of an ordinary section from entering the viewport to leaving it.
pub fn use_entrance_progress(section: NodeRef<html::Section>) -> Signal<f64> {
    let scheduler = FrameScheduler::new(move || {
        let el = section.get_untracked()?;
        let rect = el.get_bounding_client_rect();
        Some(ScrollMetrics::from_entrance(
            rect.top(),
            el.offset_height() as f64,
            viewport_height()?,
        ))
    });
    let progress = scheduler.progress();
    drive_from_window(scheduler);
    progress
}

fn page_metrics() -> Option<ScrollMetrics> {
    let document = web_sys::window()?.document()?;
    let root = document.document_element()?;
    Some(ScrollMetrics::new(
        window_scroll_y(),
        root.scroll_height() as f64,
        viewport_height()?,
    ))
}

/// Progress through the whole document.
pub fn use_page_progress() -> Signal<f64> {
    let scheduler = FrameScheduler::new(page_metrics);
    let progress = scheduler.progress();
    drive_from_window(scheduler);
    progress
}

fn container_metrics(el: &web_sys::Element) -> ScrollMetrics {
    ScrollMetrics::new(
        el.scroll_top() as f64,
        el.scroll_height() as f64,
        el.client_height() as f64,
    )
}

/// Whether `el` scrolls by itself rather than growing with its content.
pub fn container_overflows(el: &web_sys::Element) -> bool {
    container_metrics(el).scrollable().is_some()
}

/// Scheduler for an inner scroll container. The caller forwards the
/// container's `scroll` events to [`FrameScheduler::schedule`].
///
/// When the container does not overflow (narrow layouts let it grow), the
/// window scroll is measured instead, so window scroll events are wired too.
pub fn use_container_progress(
    container: NodeRef<html::Div>,
    on_frame: impl Fn() + 'static,
) -> FrameScheduler {
    let scheduler = FrameScheduler::new(move || {
        let el = container.get_untracked()?;
        let own = container_metrics(&el);
        Some(page_metrics().map_or(own, |page| own.or_scrollable(page)))
    })
    .with_frame_hook(on_frame);

    drive_from_window(scheduler.clone());
    scheduler
}

/// Smoothly bring the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("scroll target #{} not found", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll the window to an absolute offset.
pub fn scroll_window_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Window offset at which `section` reaches `progress`.
pub fn section_offset_for(section: &web_sys::HtmlElement, progress: f64) -> Option<f64> {
    let rect = section.get_bounding_client_rect();
    let section_top = rect.top() + window_scroll_y();
    let metrics = ScrollMetrics::new(0.0, section.offset_height() as f64, viewport_height()?);
    Some(section_top + metrics.offset_for(progress))
}

fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Section tops relative to their offset parent (the scroll container).
pub fn container_anchors(ids: &[&str]) -> Vec<SectionAnchor> {
    ids.iter()
        .filter_map(|id| element_by_id(id).map(|el| SectionAnchor::new(*id, el.offset_top() as f64)))
        .collect()
}

/// Section tops in document coordinates.
pub fn document_anchors(ids: &[&str]) -> Vec<SectionAnchor> {
    let scroll_y = window_scroll_y();
    ids.iter()
        .filter_map(|id| {
            element_by_id(id)
                .map(|el| SectionAnchor::new(*id, el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}
