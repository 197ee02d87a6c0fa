//! List controller - intent orchestration
//!
//! Turns UI intents (mount, submit, delete click, dismiss) into remote calls
//! and applies confirmed results to the list state. Writes are confirmed by
//! the remote side before local state changes.

use crate::{
    sink::{DiagnosticSink, TracingSink},
    state::{ListState, StatusMessage},
};
use roster_client::{ClientError, EntityApi, Operation};
use roster_core::{validate_draft, Draft, Entity, EntityId, ValidationErrors};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Controller behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Also set a failure status message when a remote call fails.
    ///
    /// Off by default: failures only reach the diagnostic sink.
    pub surface_remote_errors: bool,
}

/// Result of [`ListController::initialize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Sequence replaced with this many entities
    Loaded(usize),
    /// Remote call failed; state untouched
    Failed,
    /// Controller was disposed; nothing applied
    Discarded,
}

/// Result of [`ListController::submit_create`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Entity confirmed and appended; the UI should reset its inputs
    Created(Entity),
    /// Draft failed local validation; no request was sent
    Rejected(ValidationErrors),
    /// Remote call failed; state untouched
    Failed,
    /// Controller was disposed; nothing applied
    Discarded,
}

/// Result of [`ListController::delete_entity`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Remote side confirmed; entity removed if it was listed
    Deleted,
    /// Remote call failed; state untouched
    Failed,
    /// Controller was disposed; nothing applied
    Discarded,
}

struct Inner {
    api: Arc<dyn EntityApi>,
    sink: Arc<dyn DiagnosticSink>,
    options: ControllerOptions,
    state: watch::Sender<ListState>,
    field_errors: watch::Sender<ValidationErrors>,
    live: AtomicBool,
}

/// Owner of the list state for one form.
///
/// Cloning is cheap and every clone drives the same state, so intents can be
/// spawned as independent tasks. State is only ever changed inside short
/// synchronous sections after a remote call has completed; nothing is held
/// across an `.await`.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, UsersClient};
/// use roster_core::Draft;
/// use roster_state::{ControllerOptions, CreateOutcome, ListController};
/// use std::sync::Arc;
///
/// let api = Arc::new(UsersClient::new(ClientConfig::default())?);
/// let controller = ListController::new(api, ControllerOptions::default());
///
/// controller.initialize().await;
/// if let CreateOutcome::Created(user) =
///     controller.submit_create(&Draft::new("Bob", "bob@x.com", "bob")).await
/// {
///     println!("created {}", user.id);
/// }
/// ```
#[derive(Clone)]
pub struct ListController {
    inner: Arc<Inner>,
}

impl ListController {
    /// Create a controller that reports failures through [`TracingSink`]
    pub fn new(api: Arc<dyn EntityApi>, options: ControllerOptions) -> Self {
        Self::with_sink(api, Arc::new(TracingSink), options)
    }

    /// Create a controller with an explicit diagnostic sink
    pub fn with_sink(
        api: Arc<dyn EntityApi>,
        sink: Arc<dyn DiagnosticSink>,
        options: ControllerOptions,
    ) -> Self {
        let (state, _) = watch::channel(ListState::new());
        let (field_errors, _) = watch::channel(ValidationErrors::new());

        Self {
            inner: Arc::new(Inner {
                api,
                sink,
                options,
                state,
                field_errors,
                live: AtomicBool::new(true),
            }),
        }
    }

    // ===== Read access =====

    /// Copy of the current list state
    pub fn snapshot(&self) -> ListState {
        self.inner.state.borrow().clone()
    }

    /// Observe list state changes
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.inner.state.subscribe()
    }

    /// Field errors from the last rejected submit (empty after a valid one)
    pub fn field_errors(&self) -> ValidationErrors {
        self.inner.field_errors.borrow().clone()
    }

    /// Observe field error changes
    pub fn subscribe_field_errors(&self) -> watch::Receiver<ValidationErrors> {
        self.inner.field_errors.subscribe()
    }

    pub fn options(&self) -> ControllerOptions {
        self.inner.options
    }

    // ===== Lifecycle =====

    /// Whether the controller still accepts results
    pub fn is_live(&self) -> bool {
        self.inner.live.load(Ordering::Acquire)
    }

    /// Tear the controller down.
    ///
    /// Calls still in flight complete, but their results are dropped.
    pub fn dispose(&self) {
        if self.inner.live.swap(false, Ordering::AcqRel) {
            info!("List controller disposed");
        }
    }

    // ===== Intents =====

    /// Load the collection, replacing the current sequence.
    ///
    /// On failure the sequence is left as-is and the error goes to the sink.
    pub async fn initialize(&self) -> LoadOutcome {
        if !self.is_live() {
            return LoadOutcome::Discarded;
        }

        let result = self.inner.api.list_all().await;
        if !self.is_live() {
            debug!("Dropping list response that arrived after dispose");
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(entities) => {
                let mut dropped = 0;
                let mut count = 0;
                self.inner.state.send_modify(|state| {
                    dropped = state.replace_all(entities);
                    count = state.len();
                });

                if dropped > 0 {
                    warn!(dropped, "Remote list contained repeated ids; kept first occurrence");
                }
                info!(count, "Loaded users");
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                self.report(Operation::List, &err);
                LoadOutcome::Failed
            }
        }
    }

    /// Validate a draft and, if valid, create it remotely.
    ///
    /// Invalid drafts never reach the network: every violated field is
    /// returned and stored for [`field_errors`](Self::field_errors).
    pub async fn submit_create(&self, draft: &Draft) -> CreateOutcome {
        if !self.is_live() {
            return CreateOutcome::Discarded;
        }

        if let Err(errors) = validate_draft(draft) {
            debug!(fields = errors.len(), "Draft rejected by validation");
            self.inner.field_errors.send_replace(errors.clone());
            return CreateOutcome::Rejected(errors);
        }
        self.inner.field_errors.send_if_modified(|errors| {
            let changed = !errors.is_empty();
            *errors = ValidationErrors::new();
            changed
        });

        let result = self.inner.api.create(draft).await;
        if !self.is_live() {
            debug!("Dropping create response that arrived after dispose");
            return CreateOutcome::Discarded;
        }

        match result {
            Ok(entity) => {
                let mut appended = false;
                self.inner.state.send_modify(|state| {
                    appended = state.upsert(entity.clone());
                    state.set_status(StatusMessage::Created);
                });

                if !appended {
                    warn!(id = %entity.id, "Created user id already listed; replaced entry");
                }
                info!(id = %entity.id, username = %entity.username, "User created");
                CreateOutcome::Created(entity)
            }
            Err(err) => {
                self.report(Operation::Create, &err);
                CreateOutcome::Failed
            }
        }
    }

    /// Delete an entity remotely, then drop it from the sequence.
    ///
    /// Removing an id that is not listed is a no-op on the sequence, but the
    /// "deleted" status is still shown once the remote side confirms.
    pub async fn delete_entity(&self, id: &EntityId) -> DeleteOutcome {
        if !self.is_live() {
            return DeleteOutcome::Discarded;
        }

        let result = self.inner.api.delete(id).await;
        if !self.is_live() {
            debug!(id = %id, "Dropping delete response that arrived after dispose");
            return DeleteOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                let mut removed = false;
                self.inner.state.send_modify(|state| {
                    removed = state.remove(id).is_some();
                    state.set_status(StatusMessage::Deleted);
                });

                info!(id = %id, removed, "User deleted");
                DeleteOutcome::Deleted
            }
            Err(err) => {
                self.report(Operation::Delete, &err);
                DeleteOutcome::Failed
            }
        }
    }

    /// Clear the status message. Idempotent.
    pub fn dismiss_status(&self) {
        if !self.is_live() {
            return;
        }
        self.inner.state.send_if_modified(ListState::clear_status);
    }

    fn report(&self, operation: Operation, err: &ClientError) {
        self.inner.sink.record(operation, err);

        if self.inner.options.surface_remote_errors {
            self.inner
                .state
                .send_modify(|state| state.set_status(StatusMessage::Failed(operation)));
        }
    }
}
