//! Process-wide, read-only server state: the dataset and the config it was
//! loaded with. Installed once at startup, before the server accepts requests.

use std::panic::{catch_unwind, AssertUnwindSafe};

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::ServerFnError;
use once_cell::sync::OnceCell;

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::error::DatasetError;

static DATASET: OnceCell<Dataset> = OnceCell::new();
static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

/// Load the configured dataset and install it for the server functions.
///
/// Calling this twice keeps the first dataset and config; the second call does
/// not read its path.
pub fn bootstrap(config: DashboardConfig) -> Result<&'static Dataset, DatasetError> {
    if let Some(existing) = DATASET.get() {
        warn!(
            path = %config.data_path.display(),
            "Launch dataset already installed; ignoring bootstrap"
        );
        return Ok(existing);
    }
    let dataset = Dataset::load(&config.data_path)?;
    info!(
        path = %config.data_path.display(),
        records = dataset.len(),
        sites = ?dataset.sites(),
        "Launch dataset loaded"
    );
    let _ = CONFIG.set(config);
    Ok(install(dataset))
}

/// Install an already-built dataset (tests, embedders).
pub fn install(dataset: Dataset) -> &'static Dataset {
    DATASET.get_or_init(|| dataset)
}

pub fn dataset() -> Result<&'static Dataset, DatasetError> {
    DATASET.get().ok_or(DatasetError::NotLoaded)
}

pub fn config() -> DashboardConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Run a resolver against the installed dataset, turning a missing dataset
/// or a panic into a `ServerFnError` for the calling chart only.
pub(crate) fn with_dataset<T>(
    what: &str,
    resolve: impl FnOnce(&Dataset) -> T,
) -> Result<T, ServerFnError> {
    let dataset = dataset().map_err(|err| {
        warn!(request = what, "{err}");
        ServerFnError::new(err.to_string())
    })?;

    catch_unwind(AssertUnwindSafe(|| resolve(dataset))).map_err(|_| {
        warn!(request = what, "resolver panicked");
        ServerFnError::new(format!("Unable to compute {what}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn install_single_record() -> &'static Dataset {
        install(Dataset::from_records(vec![LaunchRecord::new(
            "A",
            100.0,
            Outcome::Success,
            "FT",
        )]))
    }

    #[test]
    fn guarded_resolver_reports_panics_as_errors() {
        install_single_record();

        let ok = with_dataset("record count", |dataset| dataset.len());
        assert_eq!(ok.unwrap(), 1);

        let failed: Result<(), _> = with_dataset("pie chart", |_| panic!("boom"));
        let message = failed.unwrap_err().to_string();
        assert!(message.contains("Unable to compute pie chart"));
    }

    #[test]
    fn second_bootstrap_keeps_the_installed_dataset() {
        let installed = install_single_record();
        let missing = DashboardConfig {
            data_path: "no/such/launches.csv".into(),
            ..DashboardConfig::default()
        };

        let kept = bootstrap(missing.clone()).expect("installed dataset is reused");
        assert!(std::ptr::eq(kept, installed));
        assert_eq!(kept.len(), 1);
        assert_ne!(config().data_path, missing.data_path);
    }
}
