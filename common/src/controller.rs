//! Submission gate for diagnosis requests.
//!
//! Collects the user's crop, image, location and language picks and
//! turns a detect action into at most one in-flight request against the
//! diagnosis service. The flow has a single suspension point: the
//! transport await inside [`SubmissionController::submit`].

use std::cell::RefCell;

use serde_json::Value;

use crate::error::{Error, MissingInput, Result};
use crate::types::{DetectRequest, ImageAttachment, RequestLifecycle, SelectionState};

/// Sends an assembled detect request to the diagnosis service.
///
/// Callers run on a single-threaded event loop, so the returned future
/// does not have to be `Send`.
#[allow(async_fn_in_trait)]
pub trait DetectTransport {
    async fn send(&self, request: &DetectRequest) -> Result<Value>;
}

/// Receives the user-facing events of the submission flow.
pub trait SubmissionObserver {
    /// A blocking advisory: validation gaps, rejected double submits and
    /// failed requests all end here.
    fn on_advisory(&self, message: &str);

    /// Lifecycle transitions, in the order they happen.
    fn on_lifecycle(&self, lifecycle: RequestLifecycle);

    /// A fresh diagnosis arrived from the service.
    fn on_diagnosis(&self, diagnosis: &Value);
}

/// Outcome of one [`SubmissionController::submit`] call. The error
/// detail rides along so the shell can log it; the user-facing advisory
/// has already been emitted by the time the outcome is returned.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The gate failed or a request was already in flight; nothing was
    /// sent and the lifecycle is unchanged.
    Rejected(Error),
    Succeeded,
    /// The dispatched request failed.
    Failed(Error),
}

struct Inner {
    selection: SelectionState,
    lifecycle: RequestLifecycle,
    diagnosis: Option<Value>,
}

impl Inner {
    /// Snapshots the selection into a request, or lists what is missing.
    fn snapshot(&self) -> Result<DetectRequest> {
        match (
            &self.selection.crop,
            &self.selection.image,
            &self.selection.region.state,
            &self.selection.region.district,
        ) {
            (Some(crop), Some(image), Some(state), Some(district)) => Ok(DetectRequest {
                image: image.clone(),
                crop: crop.clone(),
                state: state.clone(),
                district: district.clone(),
                language: self.selection.language.clone(),
            }),
            _ => {
                let mut missing = Vec::new();
                if self.selection.crop.is_none() {
                    missing.push(MissingInput::Crop);
                }
                if self.selection.image.is_none() {
                    missing.push(MissingInput::Image);
                }
                if self.selection.region.state.is_none() {
                    missing.push(MissingInput::State);
                }
                if self.selection.region.district.is_none() {
                    missing.push(MissingInput::District);
                }
                Err(Error::IncompleteSelection(missing))
            }
        }
    }

    /// Gate for a new submission. Leaves the lifecycle untouched unless
    /// the gate passes, in which case the request is captured and the
    /// attempt is Pending.
    fn begin(&mut self) -> Result<DetectRequest> {
        if self.lifecycle.is_pending() {
            return Err(Error::AlreadyPending);
        }
        let request = self.snapshot()?;
        self.lifecycle = RequestLifecycle::Pending;
        Ok(request)
    }
}

/// Owns the selection state, the request lifecycle and the last
/// diagnosis. Setters are plain assignments and stay callable while a
/// request is in flight; they only affect later submissions because the
/// payload is captured when the gate passes.
pub struct SubmissionController<T, O> {
    transport: T,
    observer: O,
    inner: RefCell<Inner>,
}

impl<T, O> SubmissionController<T, O>
where
    T: DetectTransport,
    O: SubmissionObserver,
{
    pub fn new(transport: T, observer: O) -> Self {
        Self {
            transport,
            observer,
            inner: RefCell::new(Inner {
                selection: SelectionState::default(),
                lifecycle: RequestLifecycle::Idle,
                diagnosis: None,
            }),
        }
    }

    /// An empty identifier counts as "nothing selected", matching the
    /// placeholder option the selector renders.
    pub fn set_crop(&self, crop: &str) {
        self.inner.borrow_mut().selection.crop =
            (!crop.is_empty()).then(|| crop.to_string());
    }

    pub fn set_image(&self, image: ImageAttachment) {
        self.inner.borrow_mut().selection.image = Some(image);
    }

    /// Called by the location collaborator once both levels are known.
    pub fn set_location(&self, state: &str, district: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.selection.region.state = (!state.is_empty()).then(|| state.to_string());
        inner.selection.region.district = (!district.is_empty()).then(|| district.to_string());
    }

    pub fn set_language(&self, code: &str) {
        if !code.is_empty() {
            self.inner.borrow_mut().selection.language = code.to_string();
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.inner.borrow().selection.clone()
    }

    pub fn lifecycle(&self) -> RequestLifecycle {
        self.inner.borrow().lifecycle
    }

    /// The last successful diagnosis, verbatim as the service sent it.
    pub fn diagnosis(&self) -> Option<Value> {
        self.inner.borrow().diagnosis.clone()
    }

    /// Runs one detect attempt end to end.
    ///
    /// Validates the current selection, snapshots it into a request and
    /// awaits the transport exactly once. A submit while another attempt
    /// is Pending is rejected without dispatching. On failure the
    /// previous diagnosis is kept.
    pub async fn submit(&self) -> SubmitOutcome {
        let gate = self.inner.borrow_mut().begin();
        let request = match gate {
            Ok(request) => {
                self.observer.on_lifecycle(RequestLifecycle::Pending);
                request
            }
            Err(err) => {
                self.observer.on_advisory(&err.to_string());
                return SubmitOutcome::Rejected(err);
            }
        };

        match self.transport.send(&request).await {
            Ok(diagnosis) => {
                {
                    let mut inner = self.inner.borrow_mut();
                    inner.lifecycle = RequestLifecycle::Succeeded;
                    inner.diagnosis = Some(diagnosis.clone());
                }
                self.observer.on_lifecycle(RequestLifecycle::Succeeded);
                self.observer.on_diagnosis(&diagnosis);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.inner.borrow_mut().lifecycle = RequestLifecycle::Failed;
                self.observer.on_lifecycle(RequestLifecycle::Failed);
                self.observer.on_advisory("Error processing image.");
                SubmitOutcome::Failed(err)
            }
        }
    }
}
