// SPDX-License-Identifier: MPL-2.0
//! Observable holder of the active locale.
//!
//! [`LocaleStore`] is a cheap handle: clones share the same cell and the
//! same subscriber list. Everything runs on the UI thread, so the state
//! lives in `Rc`/`Cell`/`RefCell` rather than behind a lock.
//!
//! Notifications are synchronous. When [`LocaleStore::set`] returns, every
//! live subscriber has already seen the new locale.
//!
//! The store keeps only weak references to callbacks; each [`Subscription`]
//! owns its callback. Dropping the handle releases the callback outside any
//! borrow of the subscriber list, and a fan-out in progress skips it.

use super::Locale;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn(Locale)>;
type WeakCallback = Weak<dyn Fn(Locale)>;

struct Inner {
    current: Cell<Locale>,
    subscribers: RefCell<Vec<(u64, WeakCallback)>>,
    next_id: Cell<u64>,
}

/// Shared, observable current locale.
#[derive(Clone)]
pub struct LocaleStore {
    inner: Rc<Inner>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Locale::DEFAULT)
    }
}

impl LocaleStore {
    #[must_use]
    pub fn new(initial: Locale) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: Cell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Returns the active locale.
    #[must_use]
    pub fn get(&self) -> Locale {
        self.inner.current.get()
    }

    /// Replaces the active locale and notifies subscribers.
    ///
    /// Setting the locale that is already active does nothing and fires no
    /// notification. Returns `true` if the locale changed.
    pub fn set(&self, locale: Locale) -> bool {
        let previous = self.inner.current.get();
        if previous == locale {
            return false;
        }

        self.inner.current.set(locale);
        tracing::debug!(from = %previous, to = %locale, "locale changed");

        // Snapshot so callbacks may subscribe, unsubscribe or set again.
        // Subscribers added during this round are not part of it.
        let callbacks: Vec<WeakCallback> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Weak::clone(callback))
            .collect();

        for callback in callbacks {
            // A nested `set` may already have moved on; stale fan-out stops here.
            if self.inner.current.get() != locale {
                break;
            }
            // Released earlier in this round.
            let Some(callback) = callback.upgrade() else {
                continue;
            };
            callback(locale);
        }

        true
    }

    /// Sets the locale from a raw code, coercing unknown codes to the default.
    pub fn set_code(&self, code: &str) -> bool {
        let locale = Locale::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "unrecognized locale code, using default");
            Locale::DEFAULT
        });
        self.set(locale)
    }

    /// Registers `callback` to run after every locale change.
    ///
    /// Notifications stop when the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(Locale) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let callback: Callback = Rc::new(callback);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::downgrade(&callback)));

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
            _callback: callback,
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .borrow()
            .iter()
            .filter(|(_, callback)| callback.strong_count() > 0)
            .count()
    }
}

/// Handle to a registered subscriber. Dropping it unsubscribes.
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
    /// Sole strong reference to the callback.
    _callback: Callback,
}

impl Subscription {
    /// Stops notifications now instead of at drop time.
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            // Only the weak entry goes here; the callback itself is dropped
            // with `_callback`, after this borrow ends. If the list is busy the
            // dead entry is skipped by `set` and pruned by the next drop.
            if let Ok(mut subscribers) = inner.subscribers.try_borrow_mut() {
                subscribers
                    .retain(|(id, callback)| *id != self.id && callback.strong_count() > 0);
            }
        }
    }
}
