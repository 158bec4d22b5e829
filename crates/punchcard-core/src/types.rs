//! Core type aliases and newtypes

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Site ID - identifies the location a clock action is scoped to
///
/// PINs are only meaningful within a site; the same four digits may belong
/// to different employees at different sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    /// Create a new SiteId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employee ID assigned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create a new EmployeeId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of a clock event
///
/// Selected from the employee's current clock status before the PIN prompt
/// opens, and fixed for the lifetime of one PIN session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockAction {
    /// Start of a shift
    #[serde(rename = "clock-in")]
    In,
    /// End of a shift
    #[serde(rename = "clock-out")]
    Out,
}

impl ClockAction {
    /// Wire value used by the REST API
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::In => "clock-in",
            ClockAction::Out => "clock-out",
        }
    }

    /// The action an employee performs next after this one succeeds
    pub fn toggled(&self) -> Self {
        match self {
            ClockAction::In => ClockAction::Out,
            ClockAction::Out => ClockAction::In,
        }
    }

    /// Human-readable label for menus and prompts
    pub fn label(&self) -> &'static str {
        match self {
            ClockAction::In => "Clock In",
            ClockAction::Out => "Clock Out",
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee identity returned by PIN verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// URL of the profile picture, if one has been uploaded
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// A latitude/longitude pair attached to clock events when available
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One recorded clock event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub employee_id: EmployeeId,
    pub site_id: SiteId,
    pub action: ClockAction,
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Inclusive date range a pay report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    /// Create a period; callers are expected to pass start <= end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days in the period, inclusive
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Per-employee totals within a pay report, as computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

impl ReportRow {
    /// Regular plus overtime hours
    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_action_wire_values() {
        assert_eq!(ClockAction::In.as_str(), "clock-in");
        assert_eq!(ClockAction::Out.as_str(), "clock-out");

        let json = serde_json::to_string(&ClockAction::In).unwrap();
        assert_eq!(json, "\"clock-in\"");
        let parsed: ClockAction = serde_json::from_str("\"clock-out\"").unwrap();
        assert_eq!(parsed, ClockAction::Out);
    }

    #[test]
    fn test_clock_action_toggle() {
        assert_eq!(ClockAction::In.toggled(), ClockAction::Out);
        assert_eq!(ClockAction::Out.toggled(), ClockAction::In);
        assert_eq!(ClockAction::In.toggled().toggled(), ClockAction::In);
    }

    #[test]
    fn test_pay_period_days() {
        let period = PayPeriod::new(
            NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
        );
        assert_eq!(period.days(), 14);
    }

    #[test]
    fn test_report_row_totals() {
        let row = ReportRow {
            employee_id: EmployeeId::new("e-17"),
            employee_name: "Dana Reyes".to_string(),
            regular_hours: 72.0,
            overtime_hours: 5.5,
        };
        assert_eq!(row.total_hours(), 77.5);
    }

    #[test]
    fn test_employee_deserializes_without_picture() {
        let employee: Employee =
            serde_json::from_str(r#"{"id":"e-1","name":"Sam Ortiz"}"#).unwrap();
        assert_eq!(employee.id.as_str(), "e-1");
        assert!(employee.picture_url.is_none());
    }
}
