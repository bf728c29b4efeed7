//! Types shared across the submission flow:
//! - SelectionState: what the user has picked so far
//! - DetectRequest: the payload snapshot captured at dispatch
//! - RequestLifecycle: the in-flight status of a detect attempt
//! - DiagnosisView: lenient display view over the opaque service reply

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::DEFAULT_LANGUAGE;

/// Image picked by the user, held as the base64 data URL the file
/// reader produced. The data URL doubles as the preview source and the
/// binary payload source (decoded when the request is dispatched).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub data_url: String,
}

/// Two-level administrative location (state, then district).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub state: Option<String>,
    pub district: Option<String>,
}

/// Everything the user has picked so far. Only the controller's setters
/// mutate this; the language always carries a valid default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub crop: Option<String>,
    pub image: Option<ImageAttachment>,
    pub region: Region,
    pub language: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            crop: None,
            image: None,
            region: Region::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Payload snapshot for one dispatched detect request. Captured when the
/// gate passes; setter calls made afterwards never touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectRequest {
    pub image: ImageAttachment,
    pub crop: String,
    pub state: String,
    pub district: String,
    pub language: String,
}

/// Status of the current detect attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl RequestLifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestLifecycle::Idle => "idle",
            RequestLifecycle::Pending => "pending",
            RequestLifecycle::Succeeded => "succeeded",
            RequestLifecycle::Failed => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestLifecycle::Pending)
    }
}

/// Fields the UI knows how to highlight when the service returns them.
///
/// The raw reply is stored verbatim elsewhere; this is only a lenient
/// view for display. Unknown fields are ignored, missing fields default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosisView {
    pub disease: String,
    pub confidence: Option<f64>,
    pub description: String,
    pub remedies: Vec<String>,
}

impl DiagnosisView {
    /// Never fails: a reply the view cannot read yields the default.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// True when no displayable field was recognized.
    pub fn is_empty(&self) -> bool {
        self.disease.is_empty()
            && self.confidence.is_none()
            && self.description.is_empty()
            && self.remedies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selection_state_default_language() {
        let selection = SelectionState::default();
        assert_eq!(selection.language, "en");
        assert!(selection.crop.is_none());
        assert!(selection.image.is_none());
        assert!(selection.region.state.is_none());
        assert!(selection.region.district.is_none());
    }

    #[test]
    fn test_lifecycle_default_is_idle() {
        assert_eq!(RequestLifecycle::default(), RequestLifecycle::Idle);
    }

    #[test]
    fn test_lifecycle_as_str() {
        assert_eq!(RequestLifecycle::Idle.as_str(), "idle");
        assert_eq!(RequestLifecycle::Pending.as_str(), "pending");
        assert_eq!(RequestLifecycle::Succeeded.as_str(), "succeeded");
        assert_eq!(RequestLifecycle::Failed.as_str(), "failed");
    }

    #[test]
    fn test_lifecycle_is_pending() {
        assert!(RequestLifecycle::Pending.is_pending());
        assert!(!RequestLifecycle::Succeeded.is_pending());
    }

    #[test]
    fn test_diagnosis_view_full_reply() {
        let value = json!({
            "disease": "Late blight",
            "confidence": 0.93,
            "description": "Dark lesions on leaves and stems.",
            "remedies": ["Remove infected plants", "Apply fungicide"]
        });

        let view = DiagnosisView::from_value(&value);
        assert_eq!(view.disease, "Late blight");
        assert_eq!(view.confidence, Some(0.93));
        assert_eq!(view.remedies.len(), 2);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_diagnosis_view_partial_reply() {
        let value = json!({"disease": "blight"});

        let view = DiagnosisView::from_value(&value);
        assert_eq!(view.disease, "blight");
        assert_eq!(view.confidence, None);
        assert_eq!(view.description, "");
        assert!(view.remedies.is_empty());
        assert!(!view.is_empty());
    }

    #[test]
    fn test_diagnosis_view_unknown_shape() {
        // Service-defined shapes the view does not know stay displayable
        // through the raw fallback.
        let value = json!({"predictions": [{"label": "rust", "score": 0.4}]});

        let view = DiagnosisView::from_value(&value);
        assert!(view.is_empty());
    }

    #[test]
    fn test_diagnosis_view_non_object_reply() {
        let view = DiagnosisView::from_value(&json!("no diagnosis"));
        assert!(view.is_empty());
    }
}
