use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::types::{AdvisoryClient, AdvisoryOpinion, AdvisorySnapshot};
use super::AdvisoryError;

/// Default wall-clock budget for one consultation. Triage must stay
/// usable offline, so the budget is short.
pub const DEFAULT_ADVISORY_TIMEOUT_SECS: u64 = 5;

/// Blocking HTTP client for a remote advisory endpoint.
pub struct HttpAdvisoryClient {
    endpoint: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpAdvisoryClient {
    /// Create a client posting snapshots to `endpoint`. The timeout is
    /// enforced by the underlying HTTP client, so a stalled service
    /// cannot hold triage hostage.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    pub fn with_default_timeout(endpoint: &str) -> Self {
        Self::new(endpoint, DEFAULT_ADVISORY_TIMEOUT_SECS)
    }
}

impl AdvisoryClient for HttpAdvisoryClient {
    fn consult(&self, snapshot: &AdvisorySnapshot) -> Result<AdvisoryOpinion, AdvisoryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(snapshot)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AdvisoryError::Unreachable(self.endpoint.clone())
                } else if e.is_timeout() {
                    AdvisoryError::Timeout(self.timeout_secs)
                } else {
                    AdvisoryError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdvisoryError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))
    }
}

/// Mock advisory client for testing. Returns a configured opinion or
/// fails as unreachable, and counts consultations.
pub struct MockAdvisoryClient {
    opinion: Option<AdvisoryOpinion>,
    calls: Arc<AtomicUsize>,
}

impl MockAdvisoryClient {
    pub fn returning(opinion: AdvisoryOpinion) -> Self {
        Self {
            opinion: Some(opinion),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            opinion: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared consultation counter, still readable after the mock
    /// moves into an engine.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Number of consultations made against this mock.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AdvisoryClient for MockAdvisoryClient {
    fn consult(&self, _snapshot: &AdvisorySnapshot) -> Result<AdvisoryOpinion, AdvisoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.opinion {
            Some(opinion) => Ok(opinion.clone()),
            None => Err(AdvisoryError::Unreachable("mock".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TriageLevel;

    fn opinion() -> AdvisoryOpinion {
        AdvisoryOpinion {
            triage_level: TriageLevel::Urgent,
            rationale: vec!["advisory rationale".to_string()],
            condition_hints: Vec::new(),
            actions: Vec::new(),
        }
    }

    #[test]
    fn http_client_trims_trailing_slash() {
        let client = HttpAdvisoryClient::new("https://advisory.example/triage/", 5);
        assert_eq!(client.endpoint, "https://advisory.example/triage");
        assert_eq!(client.timeout_secs, 5);
    }

    #[test]
    fn default_timeout_is_five_seconds() {
        let client = HttpAdvisoryClient::with_default_timeout("https://advisory.example");
        assert_eq!(client.timeout_secs, DEFAULT_ADVISORY_TIMEOUT_SECS);
        assert_eq!(DEFAULT_ADVISORY_TIMEOUT_SECS, 5);
    }

    #[test]
    fn mock_returns_configured_opinion() {
        let mock = MockAdvisoryClient::returning(opinion());
        let record_opinion = mock
            .consult(&snapshot_fixture())
            .unwrap();
        assert_eq!(record_opinion.triage_level, TriageLevel::Urgent);
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn mock_unavailable_fails_every_call() {
        let mock = MockAdvisoryClient::unavailable();
        assert!(mock.consult(&snapshot_fixture()).is_err());
        assert!(mock.consult(&snapshot_fixture()).is_err());
        assert_eq!(mock.calls(), 2);
    }

    fn snapshot_fixture() -> AdvisorySnapshot {
        use std::collections::HashMap;

        use crate::models::{BoundedValue, ClinicalDomain, IntakeRecord, Sex};

        let record = IntakeRecord {
            age: 40,
            sex: Sex::Other,
            domain: ClinicalDomain::Ncd,
            primary_symptom: "headache".into(),
            duration_days: None,
            bp_sys: Some(BoundedValue::exact(150.0)),
            bp_dia: None,
            glucose: None,
            weight: None,
            phq9: None,
            gad7: None,
            red_flag_answers: HashMap::new(),
        };
        AdvisorySnapshot::from_record(&record, TriageLevel::PrimaryCare)
    }
}
