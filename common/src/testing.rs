//! Test doubles for the submission flow.
//!
//! A scripted transport that records every dispatched payload and an
//! observer that records the event stream, shared by the unit and
//! integration tests.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use serde_json::Value;

use crate::controller::{DetectTransport, SubmissionController, SubmissionObserver};
use crate::error::{Error, Result};
use crate::types::{DetectRequest, ImageAttachment, RequestLifecycle};

/// What the stub transport answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    NetworkDown,
}

impl Reply {
    fn materialize(&self) -> Result<Value> {
        match self {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(code) => Err(Error::ApiStatus(*code)),
            Reply::NetworkDown => Err(Error::Network("connection refused".to_string())),
        }
    }
}

/// Records every request and answers with the scripted reply. With
/// `stall` set it suspends once before answering, which opens the
/// in-flight window for tests that poll manually.
pub struct StubTransport {
    calls: Rc<RefCell<Vec<DetectRequest>>>,
    reply: Rc<RefCell<Reply>>,
    stall: bool,
}

impl StubTransport {
    pub fn new(reply: Reply, stall: bool) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            reply: Rc::new(RefCell::new(reply)),
            stall,
        }
    }

    /// Handle onto the recorded payloads, usable after the transport
    /// moved into a controller.
    pub fn calls(&self) -> Rc<RefCell<Vec<DetectRequest>>> {
        Rc::clone(&self.calls)
    }

    /// Handle for swapping the scripted reply between submissions.
    pub fn reply_handle(&self) -> Rc<RefCell<Reply>> {
        Rc::clone(&self.reply)
    }
}

impl DetectTransport for StubTransport {
    async fn send(&self, request: &DetectRequest) -> Result<Value> {
        self.calls.borrow_mut().push(request.clone());
        if self.stall {
            yield_once().await;
        }
        self.reply.borrow().materialize()
    }
}

/// Records advisories, lifecycle transitions and diagnoses.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub advisories: Rc<RefCell<Vec<String>>>,
    pub lifecycles: Rc<RefCell<Vec<RequestLifecycle>>>,
    pub diagnoses: Rc<RefCell<Vec<Value>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionObserver for RecordingObserver {
    fn on_advisory(&self, message: &str) {
        self.advisories.borrow_mut().push(message.to_string());
    }

    fn on_lifecycle(&self, lifecycle: RequestLifecycle) {
        self.lifecycles.borrow_mut().push(lifecycle);
    }

    fn on_diagnosis(&self, diagnosis: &Value) {
        self.diagnoses.borrow_mut().push(diagnosis.clone());
    }
}

/// A controller wired to a stub transport and recording observer,
/// returned together with handles onto the recorded calls and events.
pub fn controller_with(
    reply: Reply,
    stall: bool,
) -> (
    SubmissionController<StubTransport, RecordingObserver>,
    Rc<RefCell<Vec<DetectRequest>>>,
    RecordingObserver,
) {
    let transport = StubTransport::new(reply, stall);
    let calls = transport.calls();
    let observer = RecordingObserver::new();
    let controller = SubmissionController::new(transport, observer.clone());
    (controller, calls, observer)
}

/// A plausible attachment as the file reader would produce it.
pub fn attachment(file_name: &str) -> ImageAttachment {
    ImageAttachment {
        file_name: file_name.to_string(),
        data_url: "data:image/jpeg;base64,/9j/4AAQSkZJRg==".to_string(),
    }
}

fn yield_once() -> YieldOnce {
    YieldOnce { yielded: false }
}

struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
