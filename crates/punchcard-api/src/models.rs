//! Wire types for the Punchcard REST API
//!
//! Domain types from `punchcard-core` serialize directly; this module holds
//! the request bodies and the success/error envelopes the server wraps them
//! in.

use punchcard_core::{ClockAction, Coordinates, Employee, TimeEntry};
use serde::{Deserialize, Serialize};

/// Body for PIN verification requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPinRequest<'a> {
    pub pin: &'a str,
    pub site_id: &'a str,
    pub action: ClockAction,
}

/// Envelope for PIN verification responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPinResponse {
    pub success: bool,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for clock registration requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRequest<'a> {
    pub pin: &'a str,
    pub site_id: &'a str,
    pub action: ClockAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Envelope for clock registration responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockResponse {
    pub success: bool,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub entry: Option<TimeEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decoded successful clock registration
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOutcome {
    pub employee: Employee,
    pub entry: TimeEntry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchcard_core::SiteId;

    #[test]
    fn test_verify_request_shape() {
        let body = VerifyPinRequest {
            pin: "1234",
            site_id: "site-9",
            action: ClockAction::In,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["pin"], "1234");
        assert_eq!(json["siteId"], "site-9");
        assert_eq!(json["action"], "clock-in");
    }

    #[test]
    fn test_clock_request_omits_missing_coordinates() {
        let body = ClockRequest {
            pin: "1234",
            site_id: "site-9",
            action: ClockAction::Out,
            coordinates: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("coordinates").is_none());
    }

    #[test]
    fn test_clock_response_decodes_denial() {
        let response: ClockResponse =
            serde_json::from_str(r#"{"success":false,"error":"Invalid PIN"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid PIN"));
        assert!(response.employee.is_none());
    }

    #[test]
    fn test_clock_response_decodes_entry() {
        let raw = r#"{
            "success": true,
            "employee": {"id": "e-4", "name": "Ana Silva"},
            "entry": {
                "employeeId": "e-4",
                "siteId": "site-9",
                "action": "clock-in",
                "at": "2026-08-04T14:05:00Z",
                "coordinates": {"latitude": 40.4, "longitude": -3.7}
            }
        }"#;
        let response: ClockResponse = serde_json::from_str(raw).unwrap();
        let entry = response.entry.unwrap();
        assert_eq!(entry.site_id, SiteId::new("site-9"));
        assert_eq!(entry.action, ClockAction::In);
        assert!(entry.coordinates.is_some());
    }
}
