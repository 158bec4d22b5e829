//! REST client for the Punchcard server
//!
//! Endpoint paths and body shapes follow the server's JSON API. Verification
//! denials and transport failures both come back as [`ApiError`]; callers in
//! the PIN flow treat them identically, so no retry logic lives here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use punchcard_core::{
    ClockAction, Coordinates, Employee, EmployeeId, PayPeriod, ReportRow, SiteId, TimeEntry,
};

use crate::error::{ApiError, Result};
use crate::models::{ClockOutcome, ClockRequest, ClockResponse, VerifyPinRequest, VerifyPinResponse};

/// Default per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Verifies employee PINs against a site
#[async_trait]
pub trait PinVerifier: Send + Sync {
    /// Check `pin` for a clock action at `site`, returning the employee it
    /// belongs to. Every error is a verification failure to the caller.
    async fn verify_pin(
        &self,
        pin: &str,
        site: &SiteId,
        action: ClockAction,
    ) -> Result<Employee>;
}

/// Registers clock events with the server
#[async_trait]
pub trait ClockService: Send + Sync {
    /// Register a clock event, with coordinates when a fix was available
    async fn perform_clock_action(
        &self,
        pin: &str,
        site: &SiteId,
        action: ClockAction,
        coordinates: Option<Coordinates>,
    ) -> Result<ClockOutcome>;
}

/// HTTP client for the Punchcard REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url` (scheme and host, no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an error, passing 2xx through
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            code: status.as_u16(),
            message,
        })
    }

    /// Fetch the pay report for `site` over `period`
    pub async fn pay_report(&self, site: &SiteId, period: PayPeriod) -> Result<Vec<ReportRow>> {
        let response = self
            .http
            .get(self.url("/api/reports/pay"))
            .query(&[
                ("siteId", site.as_str().to_owned()),
                ("start", period.start.to_string()),
                ("end", period.end.to_string()),
            ])
            .send()
            .await?;
        let rows = Self::check(response)
            .await?
            .json::<Vec<ReportRow>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(rows)
    }

    /// Fetch one employee's clock events over `period`
    pub async fn time_entries(
        &self,
        employee: &EmployeeId,
        period: PayPeriod,
    ) -> Result<Vec<TimeEntry>> {
        let response = self
            .http
            .get(self.url(&format!("/api/employees/{}/entries", employee)))
            .query(&[
                ("start", period.start.to_string()),
                ("end", period.end.to_string()),
            ])
            .send()
            .await?;
        Self::check(response)
            .await?
            .json::<Vec<TimeEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch an employee's profile
    pub async fn employee_profile(&self, employee: &EmployeeId) -> Result<Employee> {
        let response = self
            .http
            .get(self.url(&format!("/api/employees/{}", employee)))
            .send()
            .await?;
        Self::check(response)
            .await?
            .json::<Employee>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Upload a profile picture, returning the updated profile
    pub async fn upload_profile_picture(
        &self,
        employee: &EmployeeId,
        bytes: Vec<u8>,
        filename: String,
    ) -> Result<Employee> {
        let part = multipart::Part::bytes(bytes).file_name(filename);
        let form = multipart::Form::new().part("picture", part);
        let response = self
            .http
            .post(self.url(&format!("/api/employees/{}/picture", employee)))
            .multipart(form)
            .send()
            .await?;
        Self::check(response)
            .await?
            .json::<Employee>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Remove an employee's profile picture
    pub async fn delete_profile_picture(&self, employee: &EmployeeId) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/employees/{}/picture", employee)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl PinVerifier for ApiClient {
    async fn verify_pin(
        &self,
        pin: &str,
        site: &SiteId,
        action: ClockAction,
    ) -> Result<Employee> {
        let body = VerifyPinRequest {
            pin,
            site_id: site.as_str(),
            action,
        };
        let response = self
            .http
            .post(self.url("/api/clock/verify-pin"))
            .json(&body)
            .send()
            .await?;
        let envelope = Self::check(response)
            .await?
            .json::<VerifyPinResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        match (envelope.success, envelope.employee) {
            (true, Some(employee)) => Ok(employee),
            (true, None) => Err(ApiError::Decode(
                "verification succeeded without an employee".to_owned(),
            )),
            (false, _) => Err(ApiError::Denied(
                envelope.error.unwrap_or_else(|| "PIN rejected".to_owned()),
            )),
        }
    }
}

#[async_trait]
impl ClockService for ApiClient {
    async fn perform_clock_action(
        &self,
        pin: &str,
        site: &SiteId,
        action: ClockAction,
        coordinates: Option<Coordinates>,
    ) -> Result<ClockOutcome> {
        let body = ClockRequest {
            pin,
            site_id: site.as_str(),
            action,
            coordinates,
        };
        let response = self
            .http
            .post(self.url("/api/clock"))
            .json(&body)
            .send()
            .await?;
        let envelope = Self::check(response)
            .await?
            .json::<ClockResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Denied(
                envelope
                    .error
                    .unwrap_or_else(|| "clock action rejected".to_owned()),
            ));
        }
        match (envelope.employee, envelope.entry) {
            (Some(employee), Some(entry)) => Ok(ClockOutcome { employee, entry }),
            _ => Err(ApiError::Decode(
                "clock action succeeded without employee or entry".to_owned(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("https://clock.example.com/").unwrap();
        assert_eq!(
            client.url("/api/clock"),
            "https://clock.example.com/api/clock"
        );
    }

    #[test]
    fn test_url_joins_paths() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.url("/api/employees/e-4/picture"),
            "http://localhost:3000/api/employees/e-4/picture"
        );
    }
}
