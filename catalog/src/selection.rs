//! Active theme/locale selection shared across the view tree.
//!
//! [`SelectionContext`] is a cheap, cloneable handle. Every clone sees the same
//! selection, so the UI hands one clone to each component that renders themed
//! or translated text instead of reaching for a global.

use crate::error::CatalogResult;
use crate::locale::{LocaleCode, LocaleMeta, LocaleRegistry};
use crate::theme::{ThemeBundle, ThemeId, ThemeRegistry};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// The pair of choices every view depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSelection {
    pub theme: ThemeId,
    pub locale: LocaleCode,
}

/// Delivered to observers after a selection actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Theme {
        previous: ThemeId,
        current: ThemeId,
    },
    Locale {
        previous: LocaleCode,
        current: LocaleCode,
    },
}

/// Receives [`SelectionChange`] notifications.
///
/// Called on the thread that performed the switch, after the selection lock
/// has been released, so observers may read the context freely.
pub trait SelectionObserver: Send + Sync {
    fn selection_changed(&self, change: SelectionChange);
}

impl<F> SelectionObserver for F
where
    F: Fn(SelectionChange) + Send + Sync,
{
    fn selection_changed(&self, change: SelectionChange) {
        self(change)
    }
}

/// Handle returned by [`SelectionContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ObserverList = Vec<(SubscriptionId, Arc<dyn SelectionObserver>)>;

#[derive(Clone)]
pub struct SelectionContext {
    themes: Arc<ThemeRegistry>,
    locales: Arc<LocaleRegistry>,
    active: Arc<RwLock<ActiveSelection>>,
    observers: Arc<Mutex<ObserverList>>,
    next_id: Arc<AtomicU64>,
}

impl fmt::Debug for SelectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionContext")
            .field("active", &self.snapshot())
            .field("observers", &self.lock_observers().len())
            .finish()
    }
}

impl SelectionContext {
    /// Context over the embedded registries, starting at their defaults.
    pub fn builtin() -> CatalogResult<Self> {
        Ok(Self::new(ThemeRegistry::builtin()?, LocaleRegistry::builtin()?))
    }

    pub fn new(themes: ThemeRegistry, locales: LocaleRegistry) -> Self {
        let initial = ActiveSelection {
            theme: themes.default_id(),
            locale: LocaleCode::DEFAULT,
        };
        Self::with_initial(themes, locales, initial)
    }

    pub fn with_initial(
        themes: ThemeRegistry,
        locales: LocaleRegistry,
        initial: ActiveSelection,
    ) -> Self {
        Self {
            themes: Arc::new(themes),
            locales: Arc::new(locales),
            active: Arc::new(RwLock::new(initial)),
            observers: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    /// Copy of the current selection.
    pub fn snapshot(&self) -> ActiveSelection {
        match self.active.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn active_bundle(&self) -> &ThemeBundle {
        self.themes.get(self.snapshot().theme)
    }

    pub fn list_bundles(&self) -> impl Iterator<Item = (ThemeId, &ThemeBundle)> {
        self.themes.list()
    }

    pub fn select_bundle(&self, id: ThemeId) {
        let previous = self.swap(|active| std::mem::replace(&mut active.theme, id));
        if previous != id {
            log::info!("Theme switched from '{previous}' to '{id}'");
            self.notify(SelectionChange::Theme {
                previous,
                current: id,
            });
        }
    }

    /// Switch by string key. Unknown keys leave the selection untouched.
    pub fn select_bundle_key(&self, key: &str) -> bool {
        match ThemeId::parse(key) {
            Some(id) => {
                self.select_bundle(id);
                true
            }
            None => {
                log::warn!("Ignoring unknown theme '{key}'");
                false
            }
        }
    }

    pub fn active_locale(&self) -> LocaleCode {
        self.snapshot().locale
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.locales.translate(self.active_locale(), key)
    }

    pub fn select_locale(&self, code: LocaleCode) {
        let previous = self.swap(|active| std::mem::replace(&mut active.locale, code));
        if previous != code {
            log::info!("Locale switched from '{previous}' to '{code}'");
            self.notify(SelectionChange::Locale {
                previous,
                current: code,
            });
        }
    }

    /// Switch by string code. Unknown codes leave the selection untouched.
    pub fn select_locale_key(&self, key: &str) -> bool {
        match LocaleCode::parse(key) {
            Some(code) => {
                self.select_locale(code);
                true
            }
            None => {
                log::warn!("Ignoring unknown locale '{key}'");
                false
            }
        }
    }

    pub fn list_locales(&self) -> impl Iterator<Item = &LocaleMeta> {
        self.locales.list()
    }

    pub fn subscribe(&self, observer: impl SelectionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_observers().push((id, Arc::new(observer)));
        log::debug!("Selection observer {id:?} subscribed");
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.lock_observers();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        before != observers.len()
    }

    fn swap<T>(&self, apply: impl FnOnce(&mut ActiveSelection) -> T) -> T {
        let mut guard = match self.active.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        apply(&mut guard)
    }

    fn lock_observers(&self) -> MutexGuard<'_, ObserverList> {
        match self.observers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn notify(&self, change: SelectionChange) {
        // Observers may subscribe or switch again, so never call them under the lock.
        let observers: Vec<Arc<dyn SelectionObserver>> = self
            .lock_observers()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer.selection_changed(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn context() -> SelectionContext {
        SelectionContext::builtin().unwrap()
    }

    #[test]
    fn test_starts_at_defaults() {
        let selection = context();

        assert_eq!(selection.snapshot(), ActiveSelection::default());
        assert_eq!(selection.active_bundle().id, ThemeId::Indian);
        assert_eq!(selection.active_locale(), LocaleCode::En);
    }

    #[test]
    fn test_clones_share_state() {
        let selection = context();
        let other = selection.clone();

        other.select_bundle(ThemeId::Island);
        assert_eq!(selection.active_bundle().id, ThemeId::Island);
    }

    #[test]
    fn test_unknown_keys_are_no_ops() {
        let selection = context();
        selection.select_bundle(ThemeId::African);
        selection.select_locale(LocaleCode::Zh);

        assert!(!selection.select_bundle_key("nordic"));
        assert!(!selection.select_locale_key("es"));
        assert_eq!(
            selection.snapshot(),
            ActiveSelection {
                theme: ThemeId::African,
                locale: LocaleCode::Zh,
            }
        );
    }

    #[test]
    fn test_observers_only_see_real_changes() {
        let selection = context();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        selection.subscribe(move |change| sink.lock().unwrap().push(change));

        selection.select_bundle(ThemeId::Indian);
        selection.select_bundle(ThemeId::Asian);
        selection.select_bundle(ThemeId::Asian);
        selection.select_locale(LocaleCode::Hi);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                SelectionChange::Theme {
                    previous: ThemeId::Indian,
                    current: ThemeId::Asian,
                },
                SelectionChange::Locale {
                    previous: LocaleCode::En,
                    current: LocaleCode::Hi,
                },
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let selection = context();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = selection.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        selection.select_locale(LocaleCode::Zh);
        assert!(selection.unsubscribe(id));
        assert!(!selection.unsubscribe(id));
        selection.select_locale(LocaleCode::En);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observer_can_read_context_during_notification() {
        let selection = context();
        let reader = selection.clone();
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        selection.subscribe(move |_| {
            *sink.lock().unwrap() = reader.translate("welcome").to_string();
        });

        selection.select_locale(LocaleCode::Zh);
        assert_eq!(*seen.lock().unwrap(), "欢迎参加我们的婚礼");
    }
}
