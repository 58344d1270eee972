//! The state container: single owner of the live form state.
//!
//! All reads and writes go through a [`FormStore`] handle. Handles are
//! cheap clones of one shared inner, so consumers can be handed their own
//! copy of the write surface while the session keeps a single source of
//! truth.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::form::intent::FormIntent;
use crate::form::reducer::FormReducer;
use crate::form::state::{Country, PersonalDetails, Pricing, SKILL_MAX};
use crate::mvi::Reducer;

/// Shared form state container.
///
/// Cloning produces another handle to the same state; the handle identity
/// is stable for the life of the session. Consumers that only write keep a
/// clone and are never notified; consumers that read values call
/// [`FormStore::subscribe`] and receive a snapshot after every dispatch.
#[derive(Clone)]
pub struct FormStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<PersonalDetails>,
    subscribers: Mutex<Vec<Sender<PersonalDetails>>>,
}

impl FormStore {
    /// Create a store holding the documented defaults.
    pub fn new() -> Self {
        Self::with_initial(PersonalDetails::default())
    }

    /// Create a store starting from a prefilled state (e.g. from config).
    ///
    /// The skill value is clamped to [`SKILL_MAX`] on the way in so the
    /// store never holds an out-of-range slider position.
    pub fn with_initial(mut details: PersonalDetails) -> Self {
        details.skill = details.skill.min(SKILL_MAX);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(details),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Copy of the current state. Non-blocking for concurrent readers.
    pub fn snapshot(&self) -> PersonalDetails {
        self.inner.state.read().clone()
    }

    /// Register a value subscriber.
    ///
    /// The receiver gets one snapshot per dispatch, in dispatch order.
    /// Dropped receivers are pruned on the next notification.
    pub fn subscribe(&self) -> Receiver<PersonalDetails> {
        let (tx, rx) = mpsc::channel();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    /// Run one intent through the reducer and publish the result.
    ///
    /// The whole transition (reduce, replace, notify) happens under the
    /// state write lock, so dispatches never interleave.
    pub fn dispatch(&self, intent: FormIntent) {
        let mut guard = self.inner.state.write();
        debug!(?intent, "dispatch");
        let next = FormReducer::reduce(guard.clone(), intent);
        *guard = next.clone();
        self.notify(next);
    }

    fn notify(&self, snapshot: PersonalDetails) {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    // Convenience writers: the only write surface consumers should use.

    pub fn update_name(&self, name: impl Into<String>) {
        self.dispatch(FormIntent::UpdateName(name.into()));
    }

    pub fn update_email(&self, email: impl Into<String>) {
        self.dispatch(FormIntent::UpdateEmail(email.into()));
    }

    pub fn update_country(&self, country: Option<Country>) {
        self.dispatch(FormIntent::UpdateCountry(country));
    }

    pub fn update_mood(&self, mood: bool) {
        self.dispatch(FormIntent::UpdateMood(mood));
    }

    pub fn update_pricing(&self, pricing: Option<Pricing>) {
        self.dispatch(FormIntent::UpdatePricing(pricing));
    }

    /// Update the skill level, clamped to [`SKILL_MAX`].
    ///
    /// The reducer itself accepts any value; the clamp lives here at the
    /// write surface so the range constraint does not depend on the input
    /// control alone.
    pub fn update_skill(&self, skill: u8) {
        self.dispatch(FormIntent::UpdateSkill(skill.min(SKILL_MAX)));
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
