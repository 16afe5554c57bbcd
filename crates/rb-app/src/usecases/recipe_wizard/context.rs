use std::sync::Arc;

use rb_core::wizard::WizardState;
use tokio::sync::Mutex;

/// Shared wizard context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole dispatch (transition, actions, state update).
/// - `state`: held only for reads and the final write.
#[derive(Clone)]
pub struct WizardContext {
    state: Arc<Mutex<WizardState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Current state snapshot. Does not wait for an in-flight dispatch.
    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Replace the state. Callers must hold the dispatch lock.
    pub async fn set_state(&self, state: WizardState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardState::new())
    }
}
