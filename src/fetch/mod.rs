//! Three-state fetch lifecycle shared by both screen controllers.
//!
//! A [`FetchCell`] owns one [`FetchState`] and at most one in-flight request.
//! Every activation bumps an epoch; a response is applied only if its epoch is
//! still current and the cell is still mounted, so responses from superseded
//! activations or torn-down screens never reach the render surface.

use std::future::Future;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::error::FetchError;

/// Observable outcome of one activation.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Ready(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(outcome: Result<T, FetchError>) -> Self {
        match outcome {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

struct Activation<K> {
    epoch: u64,
    key: Option<K>,
    mounted: bool,
    task: Option<AbortHandle>,
}

struct Shared<K, T> {
    activation: Mutex<Activation<K>>,
    state: watch::Sender<FetchState<T>>,
}

impl<K, T> Shared<K, T> {
    /// Applies an outcome if `epoch` still names the live activation.
    fn settle(&self, epoch: u64, outcome: Result<T, FetchError>) -> bool {
        let mut activation = self.activation.lock();
        if !activation.mounted || activation.epoch != epoch {
            debug!(
                epoch,
                current = activation.epoch,
                "Discarding response from superseded activation"
            );
            return false;
        }

        activation.task = None;
        // written under the activation lock so a concurrent re-activation
        // can't interleave between the epoch check and the publish
        self.state.send_replace(outcome.into());
        true
    }
}

/// Epoch-guarded owner of one [`FetchState`].
///
/// `K` is what an activation is keyed on: `()` for a screen with a single
/// fetch, the item identifier for a screen whose fetch depends on it.
pub struct FetchCell<K, T> {
    shared: Arc<Shared<K, T>>,
}

impl<K, T> FetchCell<K, T>
where
    K: PartialEq + Clone + Send + 'static,
    T: Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (state, _) = watch::channel(FetchState::Pending);
        Self {
            shared: Arc::new(Shared {
                activation: Mutex::new(Activation {
                    epoch: 0,
                    key: None,
                    mounted: false,
                    task: None,
                }),
                state,
            }),
        }
    }

    /// Starts a fetch for `key` unless one for the same key is already live.
    ///
    /// Returns `true` when a request was issued. The state is `Pending` on
    /// return; the outcome is applied later from a spawned task, so this must
    /// be called from within a Tokio runtime.
    pub fn activate<F, Fut>(&self, key: K, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let mut activation = self.shared.activation.lock();
        if activation.mounted && activation.key.as_ref() == Some(&key) {
            return false;
        }

        if let Some(task) = activation.task.take() {
            task.abort();
        }
        activation.epoch += 1;
        activation.key = Some(key);
        activation.mounted = true;
        self.shared.state.send_replace(FetchState::Pending);

        let epoch = activation.epoch;
        let shared: Weak<Shared<K, T>> = Arc::downgrade(&self.shared);
        let request = fetch();
        let handle = tokio::spawn(async move {
            let outcome = request.await;
            if let Some(shared) = shared.upgrade() {
                shared.settle(epoch, outcome);
            }
        });
        activation.task = Some(handle.abort_handle());

        true
    }

    /// Tears the cell down. The in-flight request is aborted and any response
    /// still on its way is discarded; the last published state is left as is.
    pub fn deactivate(&self) {
        let mut activation = self.shared.activation.lock();
        if let Some(task) = activation.task.take() {
            task.abort();
        }
        activation.epoch += 1;
        activation.key = None;
        activation.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.activation.lock().mounted
    }

    /// Key of the live activation, if any.
    pub fn key(&self) -> Option<K> {
        self.shared.activation.lock().key.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.shared.state.subscribe()
    }

    /// Runs `f` against the current state without cloning the payload.
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        f(&self.shared.state.borrow())
    }
}

impl<K, T> FetchCell<K, T>
where
    K: PartialEq + Clone + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn state(&self) -> FetchState<T> {
        self.shared.state.borrow().clone()
    }

    /// Waits until the current activation leaves `Pending`.
    ///
    /// Never resolves while the request is outstanding, and stays pending if
    /// the cell is torn down first.
    pub async fn settled(&self) -> FetchState<T> {
        let mut rx = self.subscribe();
        match rx.wait_for(|state| !state.is_pending()).await {
            Ok(state) => state.clone(),
            // the sender lives as long as `self`
            Err(_) => FetchState::Pending,
        }
    }
}

impl<K, T> Default for FetchCell<K, T>
where
    K: PartialEq + Clone + Send + 'static,
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Drop for FetchCell<K, T> {
    fn drop(&mut self) {
        if let Some(task) = self.shared.activation.lock().task.take() {
            task.abort();
        }
    }
}
