use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::dom::{on_window, scroll_to_anchor};
use super::hooks::{use_mounted, use_theme};
use crate::content::{
    Typewriter, HERO_SOCIALS, OWNER, PROFILE_FALLBACK, PROFILE_IMAGE, RESUME_DOWNLOAD_NAME,
    RESUME_PATH, TYPEWRITER_TICK_MS,
};
use crate::motion::{Motion, Stagger, HERO};
use crate::navigation::Anchor;
use crate::theme::Theme;

const SOCIALS: Stagger = Stagger::new(1.0, 0.1);
const SOCIAL_RISE: Motion = Motion::rise(20.0, 0.5);
const CURSOR_RADIUS: i32 = 8;
const STAR_COUNT: usize = 50;
const SHAPE_COUNT: usize = 8;

impl Reducible for Typewriter {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.tick();
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
struct Decoration {
    left: f64,
    top: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

fn scatter(rng: &mut fastrand::Rng, count: usize, size: (f64, f64), duration: (f64, f64)) -> Vec<Decoration> {
    (0..count)
        .map(|_| Decoration {
            left: rng.f64() * 100.0,
            top: rng.f64() * 100.0,
            size: size.0 + rng.f64() * (size.1 - size.0),
            duration: duration.0 + rng.f64() * (duration.1 - duration.0),
            delay: rng.f64() * 2.0,
        })
        .collect()
}

/// Stars and outlined shapes drawn behind the hero in the light theme only.
#[function_component(LightBackdrop)]
fn light_backdrop() -> Html {
    let decorations = use_memo((), |_| {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = fastrand::Rng::with_seed(seed);
        let stars = scatter(&mut rng, STAR_COUNT, (4.0, 4.0), (2.0, 5.0));
        let shapes = scatter(&mut rng, SHAPE_COUNT, (20.0, 60.0), (8.0, 12.0));
        (stars, shapes)
    });
    let (stars, shapes) = &*decorations;

    let place = |d: &Decoration| {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            d.left, d.top, d.size, d.size, d.duration, d.delay
        )
    };

    html! {
        <div class="hero-backdrop" aria-hidden="true">
            { for stars.iter().map(|star| html! { <div class="hero-star" style={place(star)} /> }) }
            { for shapes.iter().map(|shape| html! { <div class="hero-shape" style={place(shape)} /> }) }
            <div class="hero-lines" />
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let theme = use_theme();
    let mounted = use_mounted();
    let writer = use_reducer(Typewriter::default);
    let cursor = use_state_eq(|| (0, 0));
    let profile_failed = use_state_eq(|| false);

    {
        let dispatcher = writer.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(TYPEWRITER_TICK_MS, move || dispatcher.dispatch(()));
            move || drop(interval)
        });
    }

    {
        let cursor = cursor.clone();
        use_effect_with((), move |_| {
            let listener = on_window("mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    cursor.set((event.client_x(), event.client_y()));
                }
            });
            move || drop(listener)
        });
    }

    let learn_more = Callback::from(|_: MouseEvent| scroll_to_anchor(Anchor::About));
    let on_profile_error = {
        let profile_failed = profile_failed.clone();
        Callback::from(move |_: Event| {
            debug!("hero: profile image unavailable, using fallback");
            profile_failed.set(true);
        })
    };

    let item = |index: usize| HERO.item_style(mounted, index);
    let profile_src = if *profile_failed {
        PROFILE_FALLBACK
    } else {
        PROFILE_IMAGE
    };
    let (cursor_x, cursor_y) = *cursor;
    let cursor_style = format!(
        "left: {}px; top: {}px;",
        cursor_x - CURSOR_RADIUS,
        cursor_y - CURSOR_RADIUS
    );

    html! {
        <section id={Anchor::Home.id()} class="hero">
            if theme == Theme::Light {
                <LightBackdrop />
            }

            <div class="section-container hero-body" style={HERO.container_style(mounted)}>
                <div class="hero-row">
                    <div class="hero-copy">
                        <h1 class="hero-heading" style={item(0)}>
                            <span class="gradient-text">{"Hello, I'm"}</span>
                            <br />
                            <span class="hero-typed" aria-label={OWNER}>
                                {writer.text()}
                                <span class="hero-caret" aria-hidden="true">{"|"}</span>
                            </span>
                        </h1>

                        <p class="hero-lead" style={item(1)}>
                            {"I craft digital experiences that blend creativity with functionality. \
                              Passionate about building innovative solutions that make a difference."}
                        </p>

                        <div class="hero-actions" style={item(2)}>
                            <a class="button button-primary" href={RESUME_PATH} download={RESUME_DOWNLOAD_NAME}>
                                <span aria-hidden="true">{"⬇"}</span>
                                <span>{"Download Resume"}</span>
                                <span class="button-arrow" aria-hidden="true">{"→"}</span>
                            </a>
                            <button type="button" class="button button-outline" onclick={learn_more.clone()}>
                                <span>{"Learn More"}</span>
                                <span aria-hidden="true">{"⌄"}</span>
                            </button>
                        </div>

                        <div class="hero-socials" style={item(3)}>
                            { for HERO_SOCIALS.iter().enumerate().map(|(index, social)| {
                                let new_tab = social.opens_new_tab();
                                html! {
                                    <a
                                        key={social.label}
                                        class="social-icon"
                                        href={social.href}
                                        aria-label={social.label}
                                        target={if new_tab { "_blank" } else { "_self" }}
                                        rel={new_tab.then_some("noopener noreferrer")}
                                        style={SOCIAL_RISE.style(mounted, SOCIALS.delay(index))}
                                    >
                                        {social.label}
                                    </a>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="hero-portrait" style={item(4)}>
                        <img src={profile_src} alt={OWNER} onerror={on_profile_error} />
                    </div>
                </div>

                <div class="hero-scroll" style={item(5)}>
                    <button type="button" class="hero-scroll-button" aria-label="Scroll to About" onclick={learn_more}>
                        {"⌄"}
                    </button>
                </div>
            </div>

            <div class="cursor-follower" style={cursor_style} aria-hidden="true" />
        </section>
    }
}
