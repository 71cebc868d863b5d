use std::collections::BTreeMap;

use crate::chart::{PieSlice, PieSpec};
use crate::data::model::{LaunchDataset, Outcome, SiteSelector};
use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Outcome aggregator – pie chart query
// ---------------------------------------------------------------------------

/// Title of the all-sites success breakdown.
const ALL_SITES_TITLE: &str = "Total Success Launches By Site";

/// Aggregate launch outcomes into a pie description.
///
/// * `All`: one slice per site, counting that site's successful launches.
/// * Concrete site: one slice per outcome class present at that site
///   (success first), counting launches in that class.
///
/// A concrete site that does not appear in the dataset is a contract
/// violation and returns [`QueryError::UnknownSite`] instead of an empty
/// chart. Pure function of the dataset and the selector.
pub fn aggregate_outcomes(
    dataset: &LaunchDataset,
    site: &SiteSelector,
) -> Result<PieSpec, QueryError> {
    match site {
        SiteSelector::All => Ok(success_by_site(dataset)),
        SiteSelector::Site(site) => {
            if !dataset.contains_site(site) {
                return Err(QueryError::UnknownSite { site: site.clone() });
            }
            Ok(outcomes_for_site(dataset, site))
        }
    }
}

/// Successful launches grouped by site, one slice per site.
fn success_by_site(dataset: &LaunchDataset) -> PieSpec {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in dataset.records().iter().filter(|r| r.outcome.is_success()) {
        *counts.entry(rec.site.as_str()).or_insert(0) += 1;
    }

    PieSpec {
        title: ALL_SITES_TITLE.to_string(),
        slices: counts
            .into_iter()
            .map(|(site, value)| PieSlice {
                label: site.to_string(),
                value,
            })
            .collect(),
    }
}

/// Success/failure split for one site, one slice per outcome class present.
fn outcomes_for_site(dataset: &LaunchDataset, site: &str) -> PieSpec {
    let mut success = 0u64;
    let mut failure = 0u64;
    for rec in dataset.records().iter().filter(|r| r.site == site) {
        match rec.outcome {
            Outcome::Success => success += 1,
            Outcome::Failure => failure += 1,
        }
    }

    let slices = [(Outcome::Success, success), (Outcome::Failure, failure)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(outcome, value)| PieSlice {
            label: outcome.to_string(),
            value,
        })
        .collect();

    PieSpec {
        title: format!("Success and Failed Launches for Site: {site}"),
        slices,
    }
}
