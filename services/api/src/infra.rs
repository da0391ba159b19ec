use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use medbridge::workflows::licensure::{
    AlertError, AlertPublisher, Applicant, CaseId, CaseRecord, CaseRepository,
    CaseRepositoryError, CredentialExtractor, DocumentReference, ExtractionError,
    LicensureCaseStatus, PathwayAlert,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCaseRepository {
    records: Arc<Mutex<HashMap<CaseId, CaseRecord>>>,
}

impl CaseRepository for InMemoryCaseRepository {
    fn insert(&self, record: CaseRecord) -> Result<CaseRecord, CaseRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.case_id) {
            return Err(CaseRepositoryError::Conflict);
        }
        guard.insert(record.case_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: CaseRecord) -> Result<(), CaseRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.case_id) {
            guard.insert(record.case_id.clone(), record);
            Ok(())
        } else {
            Err(CaseRepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &CaseId) -> Result<Option<CaseRecord>, CaseRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn awaiting_evaluation(&self, limit: usize) -> Result<Vec<CaseRecord>, CaseRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == LicensureCaseStatus::Submitted)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAlertPublisher {
    events: Arc<Mutex<Vec<PathwayAlert>>>,
}

impl AlertPublisher for InMemoryAlertPublisher {
    fn publish(&self, alert: PathwayAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryAlertPublisher {
    pub(crate) fn events(&self) -> Vec<PathwayAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

/// Extraction stub for deployments without a document-analysis backend:
/// submissions must carry attested credentials.
pub(crate) struct UnconfiguredExtractor;

impl CredentialExtractor for UnconfiguredExtractor {
    fn extract(&self, document: &DocumentReference) -> Result<Applicant, ExtractionError> {
        Err(ExtractionError::Unavailable(format!(
            "document analysis is not configured for this deployment ('{}' left unprocessed)",
            document.file_name
        )))
    }
}
