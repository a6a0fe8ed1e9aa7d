use yew::prelude::*;

use super::dom::{on_window, scroll_offset, scroll_to_anchor};
use super::hooks::use_mounted;
use crate::content::OWNER;
use crate::motion::{Motion, Stagger};
use crate::navigation::{Anchor, NavMenu, ScrollTracker, NAV_ITEMS};

const DESKTOP_ITEMS: Stagger = Stagger::new(0.4, 0.1);
const MOBILE_ITEMS: Stagger = Stagger::new(0.0, 0.1);
const ITEM_DROP: Motion = Motion::rise(-20.0, 0.5);
const MENU_SLIDE: Motion = Motion::slide(-20.0, 0.3);

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll = use_state_eq(|| ScrollTracker::from_offset(scroll_offset()));
    let menu = use_state_eq(NavMenu::default);
    let mounted = use_mounted();

    {
        let scroll = scroll.clone();
        use_effect_with((), move |_| {
            let mut tracker = *scroll;
            let listener = on_window("scroll", move |_| {
                if tracker.update(scroll_offset()) {
                    scroll.set(tracker);
                }
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let menu = menu.clone();
        Callback::from(move |anchor: Anchor| {
            scroll_to_anchor(anchor);
            menu.set((*menu).after_navigate());
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let bar_style = format!(
        "transform: translateY({}px); transition: transform 0.5s ease-out;",
        if mounted { 0 } else { -100 }
    );
    let brand_style = Motion::slide(-20.0, 0.5).style(mounted, 0.2);
    let links_style = Motion::slide(20.0, 0.5).style(mounted, 0.3);

    let nav_button = |anchor: Anchor, style: String, class: &'static str| {
        let navigate = navigate.clone();
        html! {
            <button
                key={anchor.id()}
                type="button"
                class={class}
                style={style}
                onclick={Callback::from(move |_: MouseEvent| navigate.emit(anchor))}
            >
                {anchor.label()}
            </button>
        }
    };

    html! {
        <nav
            class={classes!("navbar", scroll.is_scrolled().then_some("is-scrolled"))}
            style={bar_style}
        >
            <div class="section-container navbar-row">
                <div class="navbar-brand" style={brand_style}>{OWNER}</div>

                <div class="navbar-links" style={links_style}>
                    { for NAV_ITEMS.iter().enumerate().map(|(index, anchor)| {
                        nav_button(*anchor, ITEM_DROP.style(mounted, DESKTOP_ITEMS.delay(index)), "nav-link")
                    }) }
                </div>

                <button
                    type="button"
                    class="navbar-toggle"
                    aria-label={if menu.is_open() { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu.is_open().to_string()}
                    onclick={on_toggle_menu}
                >
                    {if menu.is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            if menu.is_open() {
                <div class="navbar-menu">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, anchor)| {
                        nav_button(*anchor, MENU_SLIDE.style(true, MOBILE_ITEMS.delay(index)), "nav-menu-link")
                    }) }
                </div>
            }
        </nav>
    }
}
