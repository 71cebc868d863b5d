use crate::chart::{LegendEntry, ScatterPoint, ScatterSpec};
use crate::color::CategoryColors;
use crate::data::model::{
    LaunchDataset, SiteSelector, COL_BOOSTER_CATEGORY, COL_CLASS, COL_PAYLOAD_MASS,
};
use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Payload filter – scatter chart query
// ---------------------------------------------------------------------------

/// Select the records inside a payload-mass range and describe them as
/// scatter points (x = payload mass, y = outcome class, color = booster
/// category).
///
/// Range semantics, preserved from the reference dashboard:
/// * bounds are truncated toward zero to whole kilograms before comparison;
/// * the interval is **open**: a record whose mass equals `low` or `high`
///   exactly is excluded, even though the slider label reads inclusive.
///
/// Truncated bounds must satisfy `0 <= low <= high <= max payload`, else
/// [`QueryError::InvalidRange`]. A concrete site not present in the dataset
/// is [`QueryError::UnknownSite`]. Zero surviving records is a valid result,
/// not an error. Pure function of the dataset and its inputs.
pub fn filter_payload(
    dataset: &LaunchDataset,
    site: &SiteSelector,
    range: (f64, f64),
) -> Result<ScatterSpec, QueryError> {
    let low = range.0.trunc();
    let high = range.1.trunc();

    let (_, max_payload) = dataset.payload_bounds();
    // NaN bounds fail these comparisons and land here too.
    if !(0.0 <= low && low <= high && high <= max_payload) {
        return Err(QueryError::InvalidRange {
            low,
            high,
            max: max_payload,
        });
    }

    if let SiteSelector::Site(site) = site {
        if !dataset.contains_site(site) {
            return Err(QueryError::UnknownSite { site: site.clone() });
        }
    }

    // Dataset-wide mapping so a category keeps its color (and its legend
    // entry) no matter what the current filters let through.
    let colors = CategoryColors::new(dataset.categories());

    let points = dataset
        .records()
        .iter()
        .filter(|rec| match site {
            SiteSelector::All => true,
            SiteSelector::Site(s) => &rec.site == s,
        })
        .filter(|rec| rec.payload_mass > low && rec.payload_mass < high)
        .map(|rec| ScatterPoint {
            x: rec.payload_mass,
            y: rec.outcome.class(),
            category: rec.booster_category.clone(),
            color: colors.color_for(&rec.booster_category),
        })
        .collect();

    Ok(ScatterSpec {
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        color_label: COL_BOOSTER_CATEGORY.to_string(),
        points,
        legend: colors
            .legend_entries()
            .into_iter()
            .map(|(label, color)| LegendEntry { label, color })
            .collect(),
    })
}
