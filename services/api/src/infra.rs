use metrics_exporter_prometheus::PrometheusHandle;
use pgpoint::config::StorageConfig;
use pgpoint::listings::{
    CatalogError, CatalogLoader, Lead, LeadRepository, PropertyFilter, PropertyRecord,
    PropertyStore, StoreError,
};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only property catalog held in memory, in file order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPropertyStore {
    records: Arc<Vec<PropertyRecord>>,
}

impl InMemoryPropertyStore {
    pub(crate) fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub(crate) fn from_catalog(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let records = CatalogLoader::from_path(path)?;
                info!(path = %path.display(), listings = records.len(), "property catalog loaded");
                Ok(Self::new(records))
            }
            None => {
                info!("no property catalog configured; serving an empty catalog");
                Ok(Self::default())
            }
        }
    }
}

impl PropertyStore for InMemoryPropertyStore {
    fn search(&self, filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<PropertyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|record| record.property.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<PropertyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|record| record.property.id.0 == id)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    leads: Arc<Mutex<Vec<Lead>>>,
}

impl InMemoryLeadRepository {
    #[cfg(test)]
    pub(crate) fn leads(&self) -> Vec<Lead> {
        self.leads
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, lead: Lead) -> Result<Lead, StoreError> {
        let mut guard = self
            .leads
            .lock()
            .map_err(|_| StoreError::Unavailable("lead store lock poisoned".to_string()))?;
        if guard.iter().any(|existing| existing.id == lead.id) {
            return Err(StoreError::Conflict);
        }
        guard.push(lead.clone());
        Ok(lead)
    }
}

/// Appends leads to a CSV file so owner tooling can pick them up.
pub(crate) struct CsvLeadRepository {
    writer: Mutex<csv::Writer<File>>,
}

#[derive(Serialize)]
struct LeadRow<'a> {
    id: String,
    name: &'a str,
    phone: &'a str,
    property_id: &'a str,
    status: &'static str,
    source: &'static str,
    created_at: String,
    updated_at: String,
}

impl<'a> From<&'a Lead> for LeadRow<'a> {
    fn from(lead: &'a Lead) -> Self {
        Self {
            id: lead.id.0.to_string(),
            name: &lead.name,
            phone: &lead.phone,
            property_id: &lead.property_id.0,
            status: lead.status.label(),
            source: lead.source.label(),
            created_at: lead.created_at.to_rfc3339(),
            updated_at: lead.updated_at.to_rfc3339(),
        }
    }
}

impl CsvLeadRepository {
    pub(crate) fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let needs_header = file.metadata()?.len() == 0;
        let writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        info!(path = %path.display(), "appending leads to CSV log");

        Ok(Self {
            writer: Mutex::new(writer),
        })
    }
}

impl LeadRepository for CsvLeadRepository {
    fn insert(&self, lead: Lead) -> Result<Lead, StoreError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| StoreError::Unavailable("lead log lock poisoned".to_string()))?;
        writer
            .serialize(LeadRow::from(&lead))
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        writer
            .flush()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(lead)
    }
}

/// Lead store selected from configuration.
pub(crate) enum LeadSink {
    Memory(InMemoryLeadRepository),
    Csv(CsvLeadRepository),
}

impl LeadSink {
    pub(crate) fn from_config(storage: &StorageConfig) -> std::io::Result<Self> {
        match storage.leads_path.as_deref() {
            Some(path) => CsvLeadRepository::open(path).map(Self::Csv),
            None => Ok(Self::Memory(InMemoryLeadRepository::default())),
        }
    }
}

impl LeadRepository for LeadSink {
    fn insert(&self, lead: Lead) -> Result<Lead, StoreError> {
        match self {
            LeadSink::Memory(repository) => repository.insert(lead),
            LeadSink::Csv(repository) => repository.insert(lead),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pgpoint::listings::{LeadId, LeadSource, LeadStatus, PropertyId, SearchParams};
    use std::path::PathBuf;

    fn lead(name: &str) -> Lead {
        let now = Utc::now();
        Lead {
            id: LeadId::generate(),
            name: name.to_string(),
            phone: "9812345678".to_string(),
            property_id: PropertyId("pg-1".to_string()),
            status: LeadStatus::New,
            source: LeadSource::Website,
            created_at: now,
            updated_at: now,
        }
    }

    fn scratch_file(label: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pgpoint-{label}-{}.csv",
            LeadId::generate().0
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn sample_catalog_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_catalog.json")
    }

    #[test]
    fn catalog_store_serves_sample_listings() {
        let store = InMemoryPropertyStore::from_catalog(Some(&sample_catalog_path()))
            .expect("sample catalog loads");

        let matches = store
            .search(&SearchParams::for_city("pune").filter())
            .expect("search succeeds");
        assert_eq!(matches.len(), 1);
        assert!(store
            .find_by_slug("draft-listing")
            .expect("lookup succeeds")
            .is_some());
    }

    #[test]
    fn missing_catalog_path_serves_nothing() {
        let store = InMemoryPropertyStore::from_catalog(None).expect("empty catalog");
        let matches = store
            .search(&SearchParams::default().filter())
            .expect("search succeeds");
        assert!(matches.is_empty());
    }

    #[test]
    fn memory_repository_keeps_every_lead() {
        let repository = InMemoryLeadRepository::default();
        repository.insert(lead("Asha")).expect("insert");
        repository.insert(lead("Asha")).expect("insert");
        assert_eq!(repository.leads().len(), 2);
    }

    #[test]
    fn csv_repository_writes_header_once() {
        let path = scratch_file("leads");

        {
            let repository = CsvLeadRepository::open(&path).expect("log opens");
            repository.insert(lead("Asha")).expect("insert");
        }
        {
            let repository = CsvLeadRepository::open(&path).expect("log reopens");
            repository.insert(lead("Ravi")).expect("insert");
        }

        let contents = std::fs::read_to_string(&path).expect("log readable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,phone,property_id,status,source"));
        assert!(lines[1].contains(",Asha,9812345678,pg-1,NEW,WEBSITE,"));
        assert!(lines[2].contains(",Ravi,"));

        let _ = std::fs::remove_file(&path);
    }
}
