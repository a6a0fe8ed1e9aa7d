use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::request_animation_frame;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{on_window, viewport_size};
use crate::reveal::{Rect, VisibilityOptions, VisibilityTracker};
use crate::theme::{Theme, ThemeStore};

/// Current theme from the nearest [`ThemeStore`] context, re-rendering the
/// caller whenever the store changes.
#[hook]
pub fn use_theme() -> Theme {
    let store = use_context::<ThemeStore>().unwrap_or_default();
    let theme = use_state_eq(|| store.current());

    {
        let theme = theme.clone();
        use_effect_with(store, move |store| {
            theme.set(store.current());
            let subscription = store.subscribe(move |next| theme.set(next));
            move || drop(subscription)
        });
    }

    *theme
}

/// Attach the returned ref to a section; the flag turns on once enough of it
/// scrolls into view.
#[hook]
pub fn use_reveal(options: VisibilityOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with(options, move |options| {
            let tracker = Rc::new(RefCell::new(VisibilityTracker::new(*options)));

            let check: Rc<dyn Fn()> = Rc::new(move || {
                let Some(element) = node.cast::<Element>() else {
                    return;
                };
                let bounds = element.get_bounding_client_rect();
                let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
                let (width, height) = viewport_size();

                let mut tracker = tracker.borrow_mut();
                if tracker.observe_rect(rect, width, height) {
                    visible.set(tracker.is_visible());
                }
            });

            check();
            let on_scroll = {
                let check = check.clone();
                on_window("scroll", move |_| check())
            };
            let on_resize = on_window("resize", move |_| check());

            move || {
                drop(on_scroll);
                drop(on_resize);
            }
        });
    }

    (node, *visible)
}

/// False on the first paint and true from the next animation frame, so
/// mount-time transitions have a hidden state to start from.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            let frame = request_animation_frame(move |_| mounted.set(true));
            move || drop(frame)
        });
    }

    *mounted
}
