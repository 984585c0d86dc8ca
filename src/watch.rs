//! Ambient theme flag with change notifications.
//!
//! The flag ("light theme active") is owned by the embedding context, not
//! by the viewer. A [`ThemeWatch`] snapshots it synchronously, then keeps
//! its [`ThemeMode`] current through a subscription; dropping the watch
//! (or its [`Subscription`]) deterministically stops the updates. With no
//! ambient context at all, [`ThemeWatch::fixed`] pins a mode; the default
//! is dark.

use std::cell::{Cell, RefCell};
use std::env;
use std::rc::{Rc, Weak};

use crate::theme::ThemeMode;

type Callback = Rc<dyn Fn(bool)>;

struct FlagState {
    light: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
}

/// Externally-owned "light theme active" flag.
///
/// A cheap handle over shared state: clone it to hand the same flag to
/// several parties. Single-threaded by design.
#[derive(Clone)]
pub struct ThemeFlag {
    state: Rc<FlagState>,
}

impl ThemeFlag {
    #[must_use]
    pub fn new(light: bool) -> Self {
        ThemeFlag {
            state: Rc::new(FlagState {
                light: Cell::new(light),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.state.light.get()
    }

    /// Flip the flag; subscribers run only when the value actually changed.
    pub fn set_light(&self, light: bool) {
        if self.state.light.get() == light {
            return;
        }
        self.state.light.set(light);
        // snapshot so a callback may subscribe or drop subscriptions mid-notify
        let callbacks: Vec<Callback> = self
            .state
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(light);
        }
    }

    /// Register a callback for changes; dropping the returned
    /// [`Subscription`] removes it.
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Live subscription count (mostly useful to assert teardown).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }
}

/// Scoped registration on a [`ThemeFlag`]; unsubscribes on drop.
///
/// Holds only a weak reference, so the flag may die first.
pub struct Subscription {
    state: Weak<FlagState>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Current [`ThemeMode`], kept in sync with a [`ThemeFlag`].
pub struct ThemeWatch {
    mode: Rc<Cell<ThemeMode>>,
    _sub: Option<Subscription>,
}

impl ThemeWatch {
    /// Read the flag now and follow its changes until dropped.
    #[must_use]
    pub fn attach(flag: &ThemeFlag) -> Self {
        let mode = Rc::new(Cell::new(ThemeMode::from_light(flag.is_light())));
        let cell = Rc::clone(&mode);
        let sub = flag.subscribe(move |light| cell.set(ThemeMode::from_light(light)));
        ThemeWatch {
            mode,
            _sub: Some(sub),
        }
    }

    /// A watch with no ambient context: the mode never changes.
    #[must_use]
    pub fn fixed(mode: ThemeMode) -> Self {
        ThemeWatch {
            mode: Rc::new(Cell::new(mode)),
            _sub: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }
}

impl Default for ThemeWatch {
    fn default() -> Self {
        ThemeWatch::fixed(ThemeMode::Dark)
    }
}

/// Probe the environment for a light/dark hint: `CPV_THEME` wins, then the
/// `COLORFGBG` terminal convention. `None` when neither says anything.
#[must_use]
pub fn ambient_light() -> Option<bool> {
    if let Ok(v) = env::var("CPV_THEME")
        && let Some(light) = theme_hint(&v)
    {
        return Some(light);
    }
    if let Ok(v) = env::var("COLORFGBG") {
        return Some(light_background(&v));
    }
    None
}

pub(crate) fn theme_hint(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "light" => Some(true),
        "dark" => Some(false),
        _ => None,
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background color
/// 7 or 15 means a light terminal.
pub(crate) fn light_background(value: &str) -> bool {
    matches!(value.rsplit(';').next(), Some("7") | Some("15"))
}
