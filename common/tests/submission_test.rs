//! Submission flow scenarios
//!
//! Multi-step flows across the public API: repeated submissions,
//! recovery after failures and the observer event stream.

use crop_doctor_common::testing::{
    attachment, controller_with, RecordingObserver, Reply, StubTransport,
};
use crop_doctor_common::{RequestLifecycle, SubmissionController, SubmitOutcome};
use futures::executor::block_on;
use serde_json::json;

/// Two sequential valid submissions are fully independent: identical
/// payloads, and the second result replaces the first.
#[test]
fn test_sequential_submissions_are_independent() {
    let (controller, calls, _) =
        controller_with(Reply::Json(json!({"disease": "early blight"})), false);
    controller.set_crop("tomato");
    controller.set_image(attachment("leaf.jpg"));
    controller.set_location("X", "Y");

    let first = block_on(controller.submit());
    assert!(matches!(first, SubmitOutcome::Succeeded));

    let second = block_on(controller.submit());
    assert!(matches!(second, SubmitOutcome::Succeeded));

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(
        controller.diagnosis(),
        Some(json!({"disease": "early blight"}))
    );
}

/// A later submission overwrites the stored diagnosis.
#[test]
fn test_new_diagnosis_replaces_old() {
    let transport = StubTransport::new(Reply::Json(json!({"disease": "blight"})), false);
    let reply = transport.reply_handle();
    let controller = SubmissionController::new(transport, RecordingObserver::new());
    controller.set_crop("potato");
    controller.set_image(attachment("tuber.jpg"));
    controller.set_location("X", "Y");

    block_on(controller.submit());
    assert_eq!(controller.diagnosis(), Some(json!({"disease": "blight"})));

    *reply.borrow_mut() = Reply::Json(json!({"disease": "scab"}));
    block_on(controller.submit());
    assert_eq!(controller.diagnosis(), Some(json!({"disease": "scab"})));
}

/// A Failed attempt re-enters Pending on the next valid submit, and a
/// subsequent success overwrites both lifecycle and diagnosis.
#[test]
fn test_failure_then_success_recovers() {
    let transport = StubTransport::new(Reply::Status(502), false);
    let calls = transport.calls();
    let reply = transport.reply_handle();
    let observer = RecordingObserver::new();
    let controller = SubmissionController::new(transport, observer.clone());
    controller.set_crop("rice");
    controller.set_image(attachment("paddy.jpg"));
    controller.set_location("Telangana", "Warangal");

    let outcome = block_on(controller.submit());
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(controller.lifecycle(), RequestLifecycle::Failed);
    assert_eq!(observer.advisories.borrow().len(), 1);

    *reply.borrow_mut() = Reply::Json(json!({"disease": "rice blast"}));
    let outcome = block_on(controller.submit());
    assert!(matches!(outcome, SubmitOutcome::Succeeded));
    assert_eq!(controller.lifecycle(), RequestLifecycle::Succeeded);
    assert_eq!(controller.diagnosis(), Some(json!({"disease": "rice blast"})));
    assert_eq!(calls.borrow().len(), 2);
}

/// The observer sees Pending before the settled state, and an advisory
/// accompanies every failure.
#[test]
fn test_observer_event_order() {
    let (controller, _, observer) = controller_with(Reply::Json(json!({"ok": true})), false);
    controller.set_crop("maize");
    controller.set_image(attachment("cob.jpg"));
    controller.set_location("Karnataka", "Mandya");

    block_on(controller.submit());

    let lifecycles = observer.lifecycles.borrow();
    assert_eq!(
        *lifecycles,
        vec![RequestLifecycle::Pending, RequestLifecycle::Succeeded]
    );
    assert_eq!(observer.diagnoses.borrow().len(), 1);
    assert!(observer.advisories.borrow().is_empty());
}

/// A rejected submit produces exactly one advisory and no lifecycle
/// noise.
#[test]
fn test_rejection_emits_single_advisory() {
    let (controller, _, observer) = controller_with(Reply::Json(json!({})), false);

    block_on(controller.submit());

    assert_eq!(observer.advisories.borrow().len(), 1);
    assert!(observer.lifecycles.borrow().is_empty());
    assert!(observer.diagnoses.borrow().is_empty());
}

/// Language picked before a submission rides along in its payload.
#[test]
fn test_language_change_applies_to_next_payload() {
    let (controller, calls, _) = controller_with(Reply::Json(json!({})), false);
    controller.set_crop("cotton");
    controller.set_image(attachment("boll.jpg"));
    controller.set_location("Maharashtra", "Nashik");

    block_on(controller.submit());
    controller.set_language("hi");
    block_on(controller.submit());

    let calls = calls.borrow();
    assert_eq!(calls[0].language, "en");
    assert_eq!(calls[1].language, "hi");
}
