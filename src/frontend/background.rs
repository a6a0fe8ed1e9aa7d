use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::dom::{on_window, viewport_size};
use super::hooks::use_theme;
use crate::particles::{ParticleField, Sprite, SpriteStyle};
use crate::theme::Theme;

const FALLBACK_FRAME_MS: u32 = 16;

// Held only so dropping it cancels the pending callback.
#[allow(dead_code)]
enum NextFrame {
    Animation(AnimationFrame),
    Timeout(Timeout),
}

// Owns the pending frame, so dropping the scene cancels the loop.
struct Scene {
    ctx: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    animation_frames: bool,
    next: RefCell<Option<NextFrame>>,
}

impl Scene {
    fn step(&self) {
        let mut field = self.field.borrow_mut();
        paint(&self.ctx, &field);
        field.advance();
    }
}

fn schedule(scene: &Rc<Scene>) {
    let weak = Rc::downgrade(scene);
    let next = if scene.animation_frames {
        NextFrame::Animation(request_animation_frame(move |_| run_frame(weak)))
    } else {
        NextFrame::Timeout(Timeout::new(FALLBACK_FRAME_MS, move || run_frame(weak)))
    };
    *scene.next.borrow_mut() = Some(next);
}

fn run_frame(scene: Weak<Scene>) {
    if let Some(scene) = scene.upgrade() {
        scene.step();
        schedule(&scene);
    }
}

fn has_animation_frames() -> bool {
    window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("requestAnimationFrame")).unwrap_or(false))
        .unwrap_or(false)
}

struct Renderer {
    _scene: Rc<Scene>,
    _resize: Option<EventListener>,
}

impl Renderer {
    fn start(canvas: HtmlCanvasElement, theme: Theme) -> Option<Self> {
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            warn!("background: 2d canvas context unavailable, skipping animation");
            return None;
        };

        let (width, height) = viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let field = ParticleField::new(theme, width, height, fastrand::Rng::with_seed(seed));
        debug!("background: generated {} sprites for {} theme", field.sprites().len(), theme.as_str());

        let scene = Rc::new(Scene {
            ctx,
            field: RefCell::new(field),
            animation_frames: has_animation_frames(),
            next: RefCell::new(None),
        });

        let resize = {
            let scene = Rc::downgrade(&scene);
            on_window("resize", move |_| {
                let Some(scene) = scene.upgrade() else {
                    return;
                };
                let (width, height) = viewport_size();
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                scene.field.borrow_mut().resize(width, height);
            })
        };

        schedule(&scene);

        Some(Self {
            _scene: scene,
            _resize: resize,
        })
    }
}

fn paint(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);

    let style = field.style();
    for sprite in field.sprites() {
        draw_sprite(ctx, style, sprite);
    }
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, style: &SpriteStyle, sprite: &Sprite) {
    let Sprite { x, y, radius, .. } = *sprite;

    ctx.save();
    ctx.set_filter(&format!("blur({}px)", sprite.blur));

    if let Ok(body) =
        ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
    {
        let _ = body.add_color_stop(0.0, &style.core.to_string());
        let _ = body.add_color_stop(style.color_stop as f32, &sprite.color.to_string());
        let _ = body.add_color_stop(1.0, &style.rim.to_string());

        ctx.set_fill_style_canvas_gradient(&body);
        ctx.set_global_alpha(sprite.opacity);
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, TAU);
        ctx.fill();
    }

    ctx.set_filter("none");
    let (hx, hy, hr) = sprite.highlight();
    let (gx, gy) = (x - radius * 0.4, y - radius * 0.4);
    if let Ok(highlight) = ctx.create_radial_gradient(gx, gy, 0.0, gx, gy, hr) {
        let _ = highlight.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", style.highlight_alpha));
        let _ = highlight.add_color_stop(1.0, "rgba(255, 255, 255, 0)");

        ctx.set_fill_style_canvas_gradient(&highlight);
        ctx.begin_path();
        let _ = ctx.arc(hx, hy, hr, 0.0, TAU);
        ctx.fill();
    }

    ctx.restore();
}

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let theme = use_theme();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        // A theme change tears the old loop down and starts a fresh field.
        use_effect_with(theme, move |theme| {
            let renderer = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| Renderer::start(canvas, *theme));
            move || drop(renderer)
        });
    }

    let style = format!("background: {};", SpriteStyle::for_theme(theme).background);

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" style={style} aria-hidden="true" />
    }
}
