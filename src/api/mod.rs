//! HTTP client facade for the HRMS Lite backend.
//!
//! One `reqwest` client, configured once at startup: base address from the
//! `API_BASE_URL` environment variable with a local fallback, and a JSON
//! content type on every request. Transport and HTTP errors propagate to the
//! caller unmodified; there is no retry, timeout or interceptor logic here.

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

/// Fallback when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable overriding the backend address, read once at startup.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAttendance {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Resolves the effective base address: override wins, else the local default.
pub fn resolve_base_url(override_value: Option<&str>) -> String {
    match override_value {
        Some(url) => url.to_string(),
        None => DEFAULT_BASE_URL.to_string(),
    }
}

/// Headers applied to every request issued through the facade.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Shared, pre-configured client. Cheap to clone; read-only after
/// construction, so any number of views may issue requests through it
/// concurrently. Injected via context rather than held as a global.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .default_headers(default_headers())
            .build()
            .expect("reqwest client construction");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Reads `API_BASE_URL` exactly once; later changes to the environment
    /// have no effect on an already-constructed client.
    pub fn from_env() -> Self {
        let override_value = std::env::var(BASE_URL_ENV).ok();
        let base_url = resolve_base_url(override_value.as_deref());
        tracing::debug!(%base_url, "api client configured");
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, reqwest::Error> {
        self.client
            .get(format!("{}/employees", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, reqwest::Error> {
        self.client
            .post(format!("{}/employees", self.base_url))
            .json(employee)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), reqwest::Error> {
        self.client
            .delete(format!("{}/employees/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn mark_attendance(&self, record: &NewAttendance) -> Result<(), reqwest::Error> {
        self.client
            .post(format!("{}/attendance", self.base_url))
            .json(record)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Records come back newest-first; an optional date narrows to one day.
    pub async fn employee_attendance(
        &self,
        employee_id: i64,
        on: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, reqwest::Error> {
        let mut request = self
            .client
            .get(format!("{}/attendance/{}", self.base_url, employee_id));
        if let Some(date) = on {
            request = request.query(&[("attendance_date", date.to_string())]);
        }
        request.send().await?.error_for_status()?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override_wins() {
        assert_eq!(
            resolve_base_url(Some("https://example.test/api")),
            "https://example.test/api"
        );
    }

    #[test]
    fn base_url_falls_back_to_local_default() {
        assert_eq!(resolve_base_url(None), "http://127.0.0.1:8000/api/v1");
    }

    #[test]
    fn from_env_honors_override() {
        std::env::set_var(BASE_URL_ENV, "https://example.test/api");
        let client = ApiClient::from_env();
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(client.base_url(), "https://example.test/api");
    }

    #[test]
    fn every_request_carries_json_content_type() {
        let headers = default_headers();
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn new_employee_matches_backend_schema() {
        let employee = NewEmployee {
            employee_id: "EMP-007".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.test".into(),
            department: "Engineering".into(),
        };
        let value = serde_json::to_value(&employee).expect("serialize");
        assert_eq!(value["employee_id"], "EMP-007");
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["email"], "ada@example.test");
        assert_eq!(value["department"], "Engineering");
    }

    #[test]
    fn attendance_payload_matches_backend_schema() {
        let record = NewAttendance {
            employee_id: 3,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["employee_id"], 3);
        assert_eq!(value["date"], "2025-03-01");
        assert_eq!(value["status"], "Present");
    }

    #[test]
    fn attendance_record_parses_backend_response() {
        let parsed: AttendanceRecord =
            serde_json::from_str(r#"{"date":"2025-03-02","status":"Absent"}"#).expect("parse");
        assert_eq!(parsed.status, AttendanceStatus::Absent);
        assert_eq!(parsed.date.to_string(), "2025-03-02");
    }
}
