use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

type Listener = Rc<dyn Fn(Theme)>;

struct ThemeInner {
    theme: Theme,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<RefCell<ThemeInner>>,
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ThemeInner {
                theme,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> Theme {
        self.inner.borrow().theme
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    // Setting the current value again is a no-op.
    pub fn set(&self, theme: Theme) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.theme == theme {
                return;
            }
            inner.theme = theme;
            inner.listeners.iter().map(|(_, listener)| listener.clone()).collect()
        };

        // Listeners run without the borrow held so they may read the store.
        for listener in listeners {
            listener(theme);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<ThemeInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
