// ModusKit - app/theme_state.rs
//
// Theme store: the single source of truth for the active theme family and
// light/dark mode.
//
// Precedence at startup:
//   persisted preference > OS colour-scheme preference > built-in default.
//
// The OS preference keeps steering `mode` only while nothing has been
// chosen explicitly. The first explicit setter call ends that for good, and
// an OS event that arrives while a persisted value exists is ignored too.
//
// Persistence is best-effort. Store failures are logged and swallowed; the
// in-memory theme stays authoritative and is still applied.

use crate::core::model::{RootAttributes, ThemeConfig, ThemeFamily, ThemeMode};
use crate::core::observer::{SubscriptionId, Subscribers};
use crate::platform::store::PreferenceStore;
use crate::util::constants::{MODE_ATTRIBUTE, THEME_ATTRIBUTE, THEME_STORAGE_KEY};

/// Theme family + mode, persisted through a `PreferenceStore` and
/// mirrored onto the presentation root attributes.
pub struct ThemeState {
    config: ThemeConfig,
    default_family: ThemeFamily,
    attributes: RootAttributes,
    store: Box<dyn PreferenceStore>,
    subscribers: Subscribers<ThemeConfig>,
    initialized: bool,
    following_system: bool,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("config", &self.config)
            .field("initialized", &self.initialized)
            .field("following_system", &self.following_system)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Create a store with the built-in default family (`modus-classic`).
    ///
    /// Nothing is read from `store` until `initialize` runs.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_default_family(store, ThemeFamily::default())
    }

    /// Create a store whose fallback family comes from configuration.
    pub fn with_default_family(store: Box<dyn PreferenceStore>, family: ThemeFamily) -> Self {
        let mut state = Self {
            config: ThemeConfig::new(family, ThemeMode::Light),
            default_family: family,
            attributes: RootAttributes::default(),
            store,
            subscribers: Subscribers::new(),
            initialized: false,
            following_system: false,
        };
        state.apply();
        state
    }

    // ===== Lifecycle =====

    /// Resolve the starting theme. Runs once; later calls are ignored.
    ///
    /// `system_prefers_dark` is the OS colour-scheme reading at startup,
    /// `None` when the platform does not report one.
    pub fn initialize(&mut self, system_prefers_dark: Option<bool>) {
        if self.initialized {
            tracing::debug!("Theme store already initialised; ignoring");
            return;
        }
        self.initialized = true;

        let next = match self.load_persisted() {
            Some(config) => {
                tracing::info!(theme = %config.full_theme_name(), "Restored persisted theme");
                config
            }
            None => {
                self.following_system = true;
                let mode = ThemeMode::from_prefers_dark(system_prefers_dark.unwrap_or(false));
                tracing::info!(
                    system_prefers_dark = ?system_prefers_dark,
                    mode = %mode,
                    "No persisted theme; following system colour scheme"
                );
                ThemeConfig::new(self.default_family, mode)
            }
        };

        self.commit(next, false);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// True while the OS colour-scheme preference still drives `mode`.
    pub fn is_following_system(&self) -> bool {
        self.following_system
    }

    // ===== Queries =====

    /// Current `{family, mode}` snapshot.
    pub fn theme_config(&self) -> ThemeConfig {
        self.config
    }

    /// `<family>-<mode>` for the current theme.
    pub fn full_theme_name(&self) -> String {
        self.config.full_theme_name()
    }

    /// Attributes last written to the presentation root.
    pub fn attributes(&self) -> &RootAttributes {
        &self.attributes
    }

    /// The backing preference store.
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    // ===== Explicit mutations =====

    /// Set the family, and the mode when given. Applies and persists.
    pub fn set_theme(&mut self, family: ThemeFamily, mode: Option<ThemeMode>) {
        let next = ThemeConfig::new(family, mode.unwrap_or(self.config.mode));
        self.stop_following_system();
        self.commit(next, true);
    }

    /// Change only the mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.set_theme(self.config.family, Some(mode));
    }

    /// Change only the family.
    pub fn set_theme_name(&mut self, family: ThemeFamily) {
        self.set_theme(family, None);
    }

    /// Flip light <-> dark.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.config.mode.flipped());
    }

    /// Forget the persisted preference. The running theme is unchanged;
    /// the next `initialize` falls back to the OS preference.
    pub fn reset_preference(&mut self) {
        match self.store.remove(THEME_STORAGE_KEY) {
            Ok(()) => tracing::info!("Persisted theme preference cleared"),
            Err(e) => tracing::warn!(error = %e, "Failed to clear persisted theme preference"),
        }
    }

    // ===== OS preference =====

    /// React to a change of the OS colour-scheme preference.
    ///
    /// Only changes `mode` while following the system; never persists.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) {
        if !self.following_system {
            tracing::trace!(prefers_dark, "System colour scheme change ignored");
            return;
        }
        if self.has_persisted_preference() {
            tracing::debug!("Persisted theme found; no longer following system colour scheme");
            self.following_system = false;
            return;
        }

        let next = ThemeConfig::new(self.config.family, ThemeMode::from_prefers_dark(prefers_dark));
        tracing::debug!(mode = %next.mode, "Following system colour scheme");
        self.commit(next, false);
    }

    // ===== Observers =====

    /// Register a callback invoked with the new config after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&ThemeConfig) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ===== Internals =====

    fn commit(&mut self, next: ThemeConfig, persist: bool) {
        let changed = next != self.config;
        self.config = next;
        self.apply();
        if persist {
            self.persist();
        }
        if changed {
            self.subscribers.notify(&self.config);
        }
    }

    fn apply(&mut self) {
        self.attributes.set(THEME_ATTRIBUTE, self.config.full_theme_name());
        self.attributes.set(MODE_ATTRIBUTE, self.config.mode.id());
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialise theme preference");
                return;
            }
        };
        match self.store.set(THEME_STORAGE_KEY, &json) {
            Ok(()) => {
                tracing::debug!(theme = %self.config.full_theme_name(), "Theme preference saved")
            }
            Err(e) => tracing::warn!(
                error = %e,
                "Failed to persist theme preference; keeping in-memory theme"
            ),
        }
    }

    fn stop_following_system(&mut self) {
        if self.following_system {
            tracing::debug!("Explicit theme choice; no longer following system colour scheme");
            self.following_system = false;
        }
    }

    /// Persisted `{family, mode}`, or `None` when absent, unreadable, or malformed.
    fn load_persisted(&self) -> Option<ThemeConfig> {
        let raw = match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme preference; using defaults");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| {
                tracing::warn!(error = %e, "Persisted theme preference is malformed; ignoring");
            })
            .ok()
    }

    /// True only for a stored value that parses; unreadable or malformed
    /// data counts as absent, as in `initialize`.
    fn has_persisted_preference(&self) -> bool {
        self.store
            .get(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .is_some_and(|raw| serde_json::from_str::<ThemeConfig>(&raw).is_ok())
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::store::MemoryStore;
    use crate::util::error::StoreError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store whose reads and/or writes always fail.
    struct FailingStore {
        fail_reads: bool,
    }

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads {
                Err(StoreError::Unavailable {
                    reason: "storage disabled".to_string(),
                })
            } else {
                Ok(None)
            }
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                reason: "quota exceeded".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                reason: "storage disabled".to_string(),
            })
        }
    }

    fn fresh() -> ThemeState {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        state.initialize(None);
        state
    }

    fn persisted_json(state: &ThemeState) -> Option<String> {
        state.store().get(THEME_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_default_is_classic_light() {
        let state = fresh();
        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::ModusClassic, ThemeMode::Light)
        );
        assert_eq!(state.full_theme_name(), "modus-classic-light");
        assert!(state.is_following_system());
        assert_eq!(persisted_json(&state), None, "initialisation never persists");
    }

    #[test]
    fn test_explicit_set_persists_and_applies() {
        let mut state = fresh();
        state.set_theme(ThemeFamily::Connect, Some(ThemeMode::Dark));

        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::Connect, ThemeMode::Dark)
        );
        assert_eq!(state.full_theme_name(), "connect-dark");
        assert_eq!(
            state.attributes().get(THEME_ATTRIBUTE),
            Some("connect-dark")
        );
        assert_eq!(state.attributes().get(MODE_ATTRIBUTE), Some("dark"));
        assert_eq!(
            persisted_json(&state).as_deref(),
            Some(r#"{"family":"connect","mode":"dark"}"#)
        );
    }

    #[test]
    fn test_set_theme_without_mode_keeps_mode() {
        let mut state = fresh();
        state.set_mode(ThemeMode::Dark);
        state.set_theme(ThemeFamily::ModusModern, None);
        assert_eq!(state.full_theme_name(), "modus-modern-dark");
    }

    #[test]
    fn test_mode_setter_preserves_family() {
        let mut state = fresh();
        state.set_theme(ThemeFamily::ModusModern, Some(ThemeMode::Light));
        state.set_mode(ThemeMode::Dark);
        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::ModusModern, ThemeMode::Dark)
        );
    }

    #[test]
    fn test_family_setter_preserves_mode() {
        let mut state = fresh();
        state.set_theme(ThemeFamily::ModusClassic, Some(ThemeMode::Dark));
        state.set_theme_name(ThemeFamily::Connect);
        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::Connect, ThemeMode::Dark)
        );
    }

    #[test]
    fn test_toggle_mode_is_a_pure_flip() {
        let mut state = fresh();
        state.set_theme(ThemeFamily::Connect, Some(ThemeMode::Light));

        state.toggle_mode();
        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::Connect, ThemeMode::Dark)
        );
        state.toggle_mode();
        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::Connect, ThemeMode::Light)
        );
    }

    #[test]
    fn test_system_preference_drives_mode_before_explicit_choice() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        state.initialize(Some(false));
        assert_eq!(state.theme_config().mode, ThemeMode::Light);

        state.system_preference_changed(true);
        assert_eq!(state.theme_config().mode, ThemeMode::Dark);
        assert_eq!(state.full_theme_name(), "modus-classic-dark");
        assert_eq!(persisted_json(&state), None, "OS changes are not persisted");

        state.system_preference_changed(false);
        assert_eq!(state.theme_config().mode, ThemeMode::Light);
    }

    #[test]
    fn test_system_preference_ignored_after_explicit_choice() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        state.initialize(Some(false));
        state.set_theme(ThemeFamily::Connect, Some(ThemeMode::Dark));

        state.system_preference_changed(false);
        assert_eq!(state.theme_config().mode, ThemeMode::Dark);
        state.system_preference_changed(true);
        state.system_preference_changed(false);
        assert_eq!(
            state.theme_config(),
            ThemeConfig::new(ThemeFamily::Connect, ThemeMode::Dark)
        );
        assert!(!state.is_following_system());
    }

    #[test]
    fn test_initial_system_dark_sets_mode() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        state.initialize(Some(true));
        assert_eq!(state.full_theme_name(), "modus-classic-dark");
    }

    #[test]
    fn test_persisted_value_wins_over_system_preference() {
        let store = MemoryStore::with_entry(
            THEME_STORAGE_KEY,
            r#"{"family":"modus-modern","mode":"light"}"#,
        );
        let mut state = ThemeState::new(Box::new(store));
        state.initialize(Some(true));

        assert_eq!(state.full_theme_name(), "modus-modern-light");
        assert!(!state.is_following_system());

        state.system_preference_changed(true);
        assert_eq!(state.theme_config().mode, ThemeMode::Light);
    }

    #[test]
    fn test_system_event_ignored_when_value_appears_in_store() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        state.initialize(Some(false));
        assert!(state.is_following_system());

        // Simulate another writer persisting a preference behind our back.
        state
            .store
            .set(THEME_STORAGE_KEY, r#"{"family":"connect","mode":"light"}"#)
            .unwrap();

        state.system_preference_changed(true);
        assert_eq!(state.theme_config().mode, ThemeMode::Light);
        assert!(!state.is_following_system());
    }

    #[test]
    fn test_malformed_persisted_value_is_treated_as_absent() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "{not json");
        let mut state = ThemeState::new(Box::new(store));
        state.initialize(Some(true));

        assert_eq!(state.full_theme_name(), "modus-classic-dark");
        assert!(state.is_following_system());
    }

    #[test]
    fn test_malformed_persisted_value_keeps_following_system() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "{not json");
        let mut state = ThemeState::new(Box::new(store));
        state.initialize(Some(false));
        assert_eq!(state.theme_config().mode, ThemeMode::Light);

        state.system_preference_changed(true);
        assert_eq!(state.theme_config().mode, ThemeMode::Dark);
        assert!(state.is_following_system());

        state.system_preference_changed(false);
        assert_eq!(state.theme_config().mode, ThemeMode::Light);
    }

    #[test]
    fn test_unknown_family_in_store_is_treated_as_absent() {
        let store = MemoryStore::with_entry(
            THEME_STORAGE_KEY,
            r#"{"family":"solarized","mode":"dark"}"#,
        );
        let mut state = ThemeState::new(Box::new(store));
        state.initialize(None);
        assert_eq!(state.full_theme_name(), "modus-classic-light");
    }

    #[test]
    fn test_configured_default_family_used_without_preference() {
        let mut state =
            ThemeState::with_default_family(Box::new(MemoryStore::new()), ThemeFamily::Connect);
        state.initialize(Some(true));
        assert_eq!(state.full_theme_name(), "connect-dark");
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        state.initialize(Some(true));
        state.set_mode(ThemeMode::Light);
        state.initialize(Some(true));
        assert_eq!(state.theme_config().mode, ThemeMode::Light);
    }

    #[test]
    fn test_write_failure_still_updates_and_applies() {
        let mut state = ThemeState::new(Box::new(FailingStore { fail_reads: false }));
        state.initialize(None);

        state.set_theme(ThemeFamily::ModusModern, Some(ThemeMode::Dark));
        assert_eq!(state.full_theme_name(), "modus-modern-dark");
        assert_eq!(
            state.attributes().get(THEME_ATTRIBUTE),
            Some("modus-modern-dark")
        );

        state.toggle_mode();
        assert_eq!(state.full_theme_name(), "modus-modern-light");
    }

    #[test]
    fn test_read_failure_falls_back_to_system_preference() {
        let mut state = ThemeState::new(Box::new(FailingStore { fail_reads: true }));
        state.initialize(Some(true));
        assert_eq!(state.full_theme_name(), "modus-classic-dark");

        state.reset_preference();
        assert_eq!(state.full_theme_name(), "modus-classic-dark");
    }

    #[test]
    fn test_explicit_choice_stops_following_even_if_persist_fails() {
        let mut state = ThemeState::new(Box::new(FailingStore { fail_reads: false }));
        state.initialize(Some(false));
        state.set_mode(ThemeMode::Light);

        state.system_preference_changed(true);
        assert_eq!(state.theme_config().mode, ThemeMode::Light);
    }

    #[test]
    fn test_reset_preference_removes_persisted_value() {
        let mut state = fresh();
        state.set_theme(ThemeFamily::Connect, Some(ThemeMode::Dark));
        assert!(persisted_json(&state).is_some());

        state.reset_preference();
        assert_eq!(persisted_json(&state), None);
        assert_eq!(state.full_theme_name(), "connect-dark");
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = fresh();

        let sink = Rc::clone(&seen);
        let id = state.subscribe(move |config| sink.borrow_mut().push(config.full_theme_name()));

        state.set_mode(ThemeMode::Dark);
        state.set_mode(ThemeMode::Dark);
        state.set_theme_name(ThemeFamily::Connect);

        assert!(state.unsubscribe(id));
        state.toggle_mode();

        assert_eq!(
            *seen.borrow(),
            vec!["modus-classic-dark".to_string(), "connect-dark".to_string()]
        );
    }

    #[test]
    fn test_subscribers_see_system_driven_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = ThemeState::new(Box::new(MemoryStore::new()));
        let sink = Rc::clone(&seen);
        state.subscribe(move |config| sink.borrow_mut().push(config.mode));

        state.initialize(Some(true));
        state.system_preference_changed(false);

        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_attributes_defined_before_initialise() {
        let state = ThemeState::new(Box::new(MemoryStore::new()));
        assert_eq!(
            state.attributes().get(THEME_ATTRIBUTE),
            Some("modus-classic-light")
        );
        assert_eq!(state.attributes().get(MODE_ATTRIBUTE), Some("light"));
    }
}
