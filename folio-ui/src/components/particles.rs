//! Canvas backgrounds: the interactive particle field and the confetti layer.

use crate::animation::FrameLoop;
use crate::browser::{random_seed, viewport_size};
use folio_core::particles::{
    ConfettiBurst, PUSH_QUANTITY, ParticleField, ParticleVariant, Shape,
};
use leptos::ev;
use leptos::html::Canvas;
use leptos::prelude::*;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Match the drawing buffer to the element's CSS size.
fn fit(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.client_width().max(1);
    let height = canvas.client_height().max(1);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (f64::from(width), f64::from(height))
}

fn draw_field(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);
    let particles = field.particles();

    if let Some(style) = field.preset().link {
        ctx.set_stroke_style_str(style.color);
        ctx.set_line_width(style.width);
        for link in field.links() {
            let (Some(a), Some(b)) = (particles.get(link.a), particles.get(link.b)) else {
                continue;
            };
            ctx.set_global_alpha(link.opacity);
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.stroke();
        }
    }

    ctx.set_global_alpha(field.preset().opacity);
    for p in particles {
        ctx.set_fill_style_str(p.color);
        ctx.begin_path();
        match p.shape {
            Shape::Circle => {
                let _ = ctx.arc(p.x, p.y, p.radius, 0.0, TAU);
            }
            Shape::Triangle => {
                let r = p.radius * 1.4;
                ctx.move_to(p.x, p.y - r);
                ctx.line_to(p.x + r * 0.866, p.y + r * 0.5);
                ctx.line_to(p.x - r * 0.866, p.y + r * 0.5);
                ctx.close_path();
            }
        }
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

/// Full-bleed animated particle background for one section.
///
/// Clicking adds particles; hovering pushes nearby ones away.
#[component]
pub fn ParticleBackground(#[prop(optional)] variant: ParticleVariant) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let (width, height) = fit(&canvas);
        field.set_value(Some(ParticleField::new(variant, width, height, random_seed())));
        tracing::debug!(variant = variant.canvas_id(), width, height, "particle field ready");

        let Some(ctx) = context_2d(&canvas) else {
            tracing::warn!("2d canvas context unavailable");
            return;
        };
        FrameLoop::start(move |frames| {
            field
                .try_update_value(|field| {
                    if let Some(field) = field {
                        field.step(frames);
                        draw_field(&ctx, field);
                    }
                })
                .is_some()
        });
    });

    let resize = window_event_listener(ev::resize, move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (width, height) = fit(&canvas);
        field.update_value(|field| {
            if let Some(field) = field {
                field.resize(width, height);
            }
        });
    });
    on_cleanup(move || resize.remove());

    let on_click = move |ev: ev::MouseEvent| {
        let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        field.update_value(|field| {
            if let Some(field) = field {
                field.push(x, y, PUSH_QUANTITY);
            }
        });
    };
    let on_hover = move |ev: ev::MouseEvent| {
        let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        field.update_value(|field| {
            if let Some(field) = field {
                field.repel(x, y);
            }
        });
    };

    view! {
        <canvas
            node_ref=canvas_ref
            id=variant.canvas_id()
            class="particle-canvas"
            aria-hidden="true"
            on:click=on_click
            on:mousemove=on_hover
        ></canvas>
    }
}

/// Fixed overlay that fires a [`ConfettiBurst`] each time `bursts` changes.
#[component]
pub fn Confetti(#[prop(into)] bursts: Signal<u32>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        if bursts.get() == 0 {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (width, height) = viewport_size();
        canvas.set_width(width.max(1.0) as u32);
        canvas.set_height(height.max(1.0) as u32);
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };

        let mut burst = ConfettiBurst::new(width, height, random_seed());
        FrameLoop::start(move |frames| {
            burst.step(frames);
            ctx.clear_rect(0.0, 0.0, width, height);
            if burst.is_finished() {
                return false;
            }
            for piece in burst.pieces().iter().filter(|p| p.life > 0.0) {
                ctx.set_global_alpha(piece.life);
                ctx.set_fill_style_str(piece.color);
                ctx.save();
                let _ = ctx.translate(piece.x, piece.y);
                let _ = ctx.rotate(piece.tilt);
                ctx.fill_rect(-piece.size / 2.0, -piece.size / 4.0, piece.size, piece.size / 2.0);
                ctx.restore();
            }
            ctx.set_global_alpha(1.0);
            true
        });
    });

    view! { <canvas node_ref=canvas_ref class="confetti-canvas" aria-hidden="true"></canvas> }
}
