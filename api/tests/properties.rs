use std::collections::HashSet;

use api::resolve::{pie_chart, scatter_chart, site_options};
use api::{Dataset, DatasetError, LaunchRecord, Outcome, PayloadRange, SiteSelection, ALL_SITES};
use proptest::prelude::*;

// Includes the all-sites sentinel so hand-built datasets can collide with it.
const SITES: [&str; 7] = [
    "CCAFS LC-40",
    "CCAFS SLC-40",
    "KSC LC-39A",
    "VAFB SLC-4E",
    "Boca Chica",
    "Kwajalein",
    ALL_SITES,
];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn record() -> impl Strategy<Value = LaunchRecord> {
    (0..SITES.len(), 0.0f64..12_000.0, any::<bool>(), 0..BOOSTERS.len()).prop_map(
        |(site, payload, success, booster)| {
            let outcome = if success {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            LaunchRecord::new(SITES[site], payload.round(), outcome, BOOSTERS[booster])
        },
    )
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record(), 0..80).prop_map(Dataset::from_records)
}

fn to_csv(records: &[LaunchRecord]) -> String {
    let mut csv = String::from("Launch Site,class,Payload Mass (kg),Booster Version Category\n");
    for r in records {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            r.launch_site,
            r.outcome.class(),
            r.payload_mass_kg,
            r.booster_version_category
        ));
    }
    csv
}

fn selection() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        (0..SITES.len()).prop_map(|idx| SiteSelection::from_value(SITES[idx])),
    ]
}

proptest! {
    #[test]
    fn options_are_all_plus_distinct_sites(dataset in dataset()) {
        let options = site_options(&dataset, "All Sites");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();

        let unique: HashSet<&str> = values.iter().copied().collect();
        prop_assert_eq!(unique.len(), values.len());

        let mut expected: HashSet<&str> =
            dataset.records().iter().map(|r| r.launch_site.as_str()).collect();
        expected.insert("ALL");
        prop_assert_eq!(unique, expected);
        prop_assert_eq!(values[0], "ALL");
    }

    #[test]
    fn loader_rejects_the_sentinel_as_a_site(records in prop::collection::vec(record(), 0..40)) {
        let reserved_at = records.iter().position(|r| r.launch_site == ALL_SITES);
        match (Dataset::from_reader(to_csv(&records).as_bytes()), reserved_at) {
            (Err(DatasetError::ReservedSite { row, .. }), Some(idx)) => prop_assert_eq!(row, idx + 1),
            (Ok(loaded), None) => {
                prop_assert_eq!(loaded.len(), records.len());
                let options = site_options(&loaded, "All Sites");
                prop_assert_eq!(options.len(), loaded.sites().len() + 1);
            }
            (other, expected) => prop_assert!(false, "got {:?} for reserved row {:?}", other.map(|d| d.len()), expected),
        }
    }

    #[test]
    fn all_sites_pie_sums_to_total_successes(dataset in dataset()) {
        let chart = pie_chart(&dataset, &SiteSelection::All);
        prop_assert_eq!(chart.total() as usize, dataset.success_count());
    }

    #[test]
    fn site_pie_partitions_that_site(dataset in dataset(), idx in 0..SITES.len()) {
        let site = SITES[idx];
        prop_assume!(site != ALL_SITES);
        let chart = pie_chart(&dataset, &SiteSelection::from_value(site));

        let at_site: Vec<_> = dataset.filter(|r| r.launch_site == site).collect();
        let succeeded = at_site.iter().filter(|r| r.is_success()).count() as u32;
        let failed = at_site.len() as u32 - succeeded;

        prop_assert_eq!(chart.total() as usize, at_site.len());
        prop_assert_eq!(chart.value_of("succeed"), Some(succeeded));
        prop_assert_eq!(chart.value_of("failed"), Some(failed));
    }

    #[test]
    fn scatter_points_respect_both_filters(
        dataset in dataset(),
        site in selection(),
        a in 0.0f64..12_000.0,
        b in 0.0f64..12_000.0,
    ) {
        let range = PayloadRange::new(a, b);
        let chart = scatter_chart(&dataset, &site, range);

        for point in chart.points() {
            prop_assert!(range.low() <= point.payload_mass_kg);
            prop_assert!(point.payload_mass_kg <= range.high());
            if let SiteSelection::Site(name) = &site {
                prop_assert_eq!(&point.launch_site, name);
            }
        }

        let expected = dataset
            .filter(|r| range.contains(r.payload_mass_kg) && site.matches(r))
            .count();
        prop_assert_eq!(chart.point_count(), expected);
    }

    #[test]
    fn resolvers_are_idempotent(
        dataset in dataset(),
        site in selection(),
        a in 0.0f64..12_000.0,
        b in 0.0f64..12_000.0,
    ) {
        let range = PayloadRange::new(a, b);
        prop_assert_eq!(pie_chart(&dataset, &site), pie_chart(&dataset, &site));
        prop_assert_eq!(
            scatter_chart(&dataset, &site, range),
            scatter_chart(&dataset, &site, range)
        );
    }
}
