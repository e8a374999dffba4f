//! Reference-counted presentation flags on the document root.
//!
//! Every mounted overlay registers the class tokens it wants on the document root. A token is
//! written to the root when its first owner registers it and removed when its last owner lets go,
//! so stacked overlays compose instead of clobbering each other.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    fmt,
    rc::Rc,
};

use leptos::logging;
use overlay_host::{DocumentRoot, SurfaceId};

#[derive(Default)]
struct FlagState {
    counts: BTreeMap<&'static str, usize>,
    owners: HashMap<SurfaceId, Vec<&'static str>>,
}

#[derive(Clone)]
/// Process-owned registry of desired document-root class tokens.
pub struct PresentationFlags {
    document: Rc<dyn DocumentRoot>,
    state: Rc<RefCell<FlagState>>,
}

impl fmt::Debug for PresentationFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationFlags")
            .field("active", &self.active_tokens())
            .finish()
    }
}

impl PresentationFlags {
    /// Creates a registry writing through to `document`.
    pub fn new(document: Rc<dyn DocumentRoot>) -> Self {
        Self {
            document,
            state: Rc::new(RefCell::new(FlagState::default())),
        }
    }

    /// Replaces the token set desired by `owner`, reconciling the document root.
    pub fn register(&self, owner: SurfaceId, tokens: &[&'static str]) {
        let mut state = self.state.borrow_mut();
        let previous = state.owners.insert(owner, tokens.to_vec()).unwrap_or_default();

        for token in previous.iter().copied().filter(|token| !tokens.contains(token)) {
            let remaining = match state.counts.get_mut(token) {
                Some(count) => {
                    *count = count.saturating_sub(1);
                    *count
                }
                None => 0,
            };
            if remaining == 0 {
                state.counts.remove(token);
                if let Err(err) = self.document.remove_class(token) {
                    logging::warn!("overlay flag `{token}` removal failed: {err}");
                }
            }
        }

        for token in tokens.iter().copied().filter(|token| !previous.contains(token)) {
            let count = state.counts.entry(token).or_insert(0);
            *count += 1;
            if *count == 1 {
                if let Err(err) = self.document.add_class(token) {
                    logging::warn!("overlay flag `{token}` application failed: {err}");
                }
            }
        }
    }

    /// Drops every token held by `owner`.
    pub fn release(&self, owner: SurfaceId) {
        self.register(owner, &[]);
        self.state.borrow_mut().owners.remove(&owner);
    }

    /// Number of owners currently holding `token`.
    pub fn count(&self, token: &str) -> usize {
        self.state.borrow().counts.get(token).copied().unwrap_or(0)
    }

    /// Tokens held by at least one owner, sorted.
    pub fn active_tokens(&self) -> Vec<&'static str> {
        self.state.borrow().counts.keys().copied().collect()
    }
}
