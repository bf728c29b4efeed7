//! Crop Doctor Common Library
//!
//! Selection state, validation and request lifecycle shared by the
//! browser shell and the native test suite.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod testing;
pub mod types;

pub use catalog::{districts_for, CROPS, DEFAULT_LANGUAGE, LANGUAGES, STATES};
pub use controller::{DetectTransport, SubmissionController, SubmissionObserver, SubmitOutcome};
pub use error::{Error, MissingInput, Result};
pub use types::{
    DetectRequest, DiagnosisView, ImageAttachment, Region, RequestLifecycle, SelectionState,
};
