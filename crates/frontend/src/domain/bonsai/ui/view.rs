use contracts::motion::bonsai::{grow, BonsaiFrame, TreeOrigin};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_SIZE: u32 = 400;
const BRANCH_RGB: &str = "120, 86, 60";
const BLOSSOM_COLOR: &str = "rgba(244, 143, 177, 0.85)";

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn paint(ctx: &CanvasRenderingContext2d, frame: &BonsaiFrame) {
    let size = CANVAS_SIZE as f64;
    ctx.clear_rect(0.0, 0.0, size, size);
    ctx.set_line_cap("round");

    for branch in &frame.branches {
        ctx.begin_path();
        ctx.set_stroke_style_str(&format!("rgba({}, {:.3})", BRANCH_RGB, branch.alpha));
        ctx.set_line_width(branch.width);
        ctx.move_to(branch.x1, branch.y1);
        ctx.line_to(branch.x2, branch.y2);
        ctx.stroke();
    }

    ctx.set_fill_style_str(BLOSSOM_COLOR);
    for blossom in &frame.blossoms {
        ctx.begin_path();
        if ctx
            .arc(blossom.x, blossom.y, blossom.radius, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }
}

/// Fractal tree that grows with `progress` (0 stump, 1 in bloom).
#[component]
pub fn BonsaiCanvas(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move |_| {
        let p = progress.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            log::warn!("2d canvas context unavailable");
            return;
        };
        paint(&ctx, &grow(p, TreeOrigin::default()));
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="bonsai-canvas"
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            aria-hidden="true"
        ></canvas>
    }
}
