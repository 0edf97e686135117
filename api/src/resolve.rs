//! The two chart resolvers plus the control-value types they consume.
//!
//! Both resolvers are pure: they borrow the dataset, build a fresh chart and
//! never touch shared state, so repeated calls with the same inputs always
//! yield the same chart.

use serde::{Deserialize, Serialize};

use crate::chart::{PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
use crate::dataset::{Dataset, LaunchRecord, Outcome};

/// Wire value of the "every site" selection.
pub const ALL_SITES: &str = "ALL";

pub const PIE_TITLE_ALL: &str = "Successful Landings";
pub const PIE_TITLE_SITE_PREFIX: &str = "Landing Outcome ";
pub const LABEL_FAILED: &str = "failed";
pub const LABEL_SUCCEED: &str = "succeed";

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a selector value: `"ALL"` means every site, anything else is
    /// taken as a site identifier verbatim.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

/// Inclusive payload interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Bounds are reordered if given backwards and clamped at zero.
    pub fn new(a: f64, b: f64) -> Self {
        let a = a.max(0.0);
        let b = b.max(0.0);
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

/// One entry of the site selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Selector options: the "all sites" entry followed by every distinct site in
/// the dataset, in first-seen order.
///
/// The CSV loader refuses a site named [`ALL_SITES`]; a hand-built dataset
/// carrying one still gets a single `ALL` option, the all-sites one.
pub fn site_options(dataset: &Dataset, all_label: &str) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: all_label.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(
        dataset
            .sites()
            .iter()
            .filter(|site| site.as_str() != ALL_SITES)
            .map(|site| SiteOption {
                label: site.clone(),
                value: site.clone(),
            }),
    )
    .collect()
}

pub fn pie_chart(dataset: &Dataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .iter()
                .map(|site| {
                    let successes = dataset
                        .filter(|record| record.launch_site == *site && record.is_success())
                        .count();
                    PieSlice {
                        label: site.clone(),
                        value: successes as u32,
                    }
                })
                .collect();

            PieChart {
                title: PIE_TITLE_ALL.to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let (mut failed, mut succeeded) = (0u32, 0u32);
            for record in dataset.filter(|record| site.matches(record)) {
                match record.outcome {
                    Outcome::Failure => failed += 1,
                    Outcome::Success => succeeded += 1,
                }
            }

            PieChart {
                title: format!("{PIE_TITLE_SITE_PREFIX}{name}"),
                slices: vec![
                    PieSlice {
                        label: LABEL_FAILED.to_string(),
                        value: failed,
                    },
                    PieSlice {
                        label: LABEL_SUCCEED.to_string(),
                        value: succeeded,
                    },
                ],
            }
        }
    }
}

pub fn scatter_chart(dataset: &Dataset, site: &SiteSelection, range: PayloadRange) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();

    let survivors = dataset
        .filter(move |record| range.contains(record.payload_mass_kg))
        .filter(|record| site.matches(record));

    for record in survivors {
        let point = ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome.class(),
            launch_site: record.launch_site.clone(),
        };

        match series
            .iter_mut()
            .find(|series| series.name == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for site {name}")
        }
    };

    ScatterChart {
        title,
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        series,
    }
}
