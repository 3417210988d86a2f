use contracts::domain::a101_shop_product::ProductOption;
use contracts::domain::a104_product_mapping::SourceOption;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::layout::tabs::TabKey;

/// Token identifying one tab activation. Loaders capture it before their
/// first `.await` and must present it back before committing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken(u64);

/// Pure navigation state: which tab is active and how many activations
/// have happened. Kept free of browser APIs so the transition rules are
/// testable on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: TabKey,
    epoch: u64,
}

impl TabState {
    pub fn new(initial: TabKey) -> Self {
        Self {
            active: initial,
            epoch: 0,
        }
    }

    pub fn active(&self) -> TabKey {
        self.active
    }

    /// Returns `true` if the active tab changed. Re-activating the current
    /// tab is a no-op and does not invalidate in-flight loads.
    pub fn activate(&mut self, key: TabKey) -> bool {
        if self.active == key {
            return false;
        }
        self.active = key;
        self.epoch += 1;
        true
    }

    pub fn token(&self) -> NavToken {
        NavToken(self.epoch)
    }

    /// A response is committed only if no navigation happened since its
    /// token was taken; stale responses are dropped.
    pub fn accepts(&self, token: NavToken) -> bool {
        token.0 == self.epoch
    }
}

/// App-wide store provided via context: tab navigation plus the option
/// lists that are fetched once per page life and reused by every dialog.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    tabs: RwSignal<TabState>,
    pub product_options: RwSignal<Option<Vec<ProductOption>>>,
    pub source_options: RwSignal<Option<Vec<SourceOption>>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabState::new(TabKey::DEFAULT)),
            product_options: RwSignal::new(None),
            source_options: RwSignal::new(None),
        }
    }

    /// Reactive read of the active tab.
    pub fn active(&self) -> TabKey {
        self.tabs.with(|state| state.active())
    }

    pub fn nav_token(&self) -> NavToken {
        self.tabs.with_untracked(|state| state.token())
    }

    pub fn accepts(&self, token: NavToken) -> bool {
        self.tabs.with_untracked(|state| state.accepts(token))
    }

    /// Switch tabs. `update_hash` is false when the change originates from
    /// the URL itself (initial load, hashchange) to avoid feedback loops.
    pub fn activate(&self, key: TabKey, update_hash: bool) {
        let mut changed = false;
        self.tabs.update(|state| changed = state.activate(key));
        if !changed {
            return;
        }
        log::debug!("tab activated: {}", key.as_str());
        if update_hash {
            if let Some(w) = window() {
                let _ = w.location().set_hash(key.as_str());
            }
        }
    }

    /// Read the initial tab from the URL hash and follow `hashchange`
    /// events so browser back/forward keeps working.
    pub fn init_hash_integration(&self) {
        let initial = window()
            .and_then(|w| w.location().hash().ok())
            .as_deref()
            .and_then(TabKey::from_hash);
        if let Some(key) = initial {
            self.activate(key, false);
        }

        let this = *self;
        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let key = window()
                .and_then(|w| w.location().hash().ok())
                .as_deref()
                .and_then(TabKey::from_hash)
                .unwrap_or(TabKey::DEFAULT);
            this.activate(key, false);
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                listener.as_ref().unchecked_ref(),
            );
            // page-lifetime listener
            listener.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_bumps_epoch_once_per_change() {
        let mut state = TabState::new(TabKey::Dashboard);
        assert!(state.activate(TabKey::Products));
        assert!(state.activate(TabKey::Competitors));
        assert_eq!(state.active(), TabKey::Competitors);

        // re-activating the current tab is a no-op
        let token = state.token();
        assert!(!state.activate(TabKey::Competitors));
        assert!(state.accepts(token));
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let mut state = TabState::new(TabKey::Dashboard);
        let token = state.token();
        assert!(state.accepts(token));

        state.activate(TabKey::Suppliers);
        assert!(!state.accepts(token));
        assert!(state.accepts(state.token()));
    }

    #[test]
    fn round_trip_back_to_first_tab_still_invalidates() {
        let mut state = TabState::new(TabKey::Dashboard);
        let token = state.token();
        state.activate(TabKey::Products);
        state.activate(TabKey::Dashboard);
        // same tab as when the token was taken, but two navigations later
        assert!(!state.accepts(token));
    }
}
