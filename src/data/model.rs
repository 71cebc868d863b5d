use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Source-table column names
// ---------------------------------------------------------------------------

// The canonical headers of the launch-record table. Loaders locate columns
// by these names; the scatter description reuses them as channel labels.
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Outcome – the binary success flag of a launch attempt
// ---------------------------------------------------------------------------

/// Launch outcome, the `class` column of the source table (success = 1,
/// failure = 0). A closed enum so loaders can't admit any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` cell. Only 0 and 1 are launch outcomes.
    pub fn from_class(class: i64) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class value (0 or 1), the scatter chart's y coordinate.
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    /// Displays as the class value ("0" / "1"), which is also the pie slice
    /// label for the per-site success/failure breakdown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single historical launch attempt (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier (pad/complex code, e.g. "CCAFS LC-40").
    pub site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass: f64,
    /// Success/failure flag.
    pub outcome: Outcome,
    /// Booster version category label (e.g. "FT", "v1.1").
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// SiteSelector – dropdown value: one site or the ALL wildcard
// ---------------------------------------------------------------------------

/// Wire value of the wildcard dropdown option.
pub const ALL_SITES: &str = "ALL";

/// Site filter for the two chart queries: every site, or one concrete site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelector {
    All,
    Site(String),
}

impl SiteSelector {
    /// Parse a dropdown wire value. Exactly `"ALL"` selects the wildcard;
    /// anything else names a concrete site (validated against the dataset
    /// by the queries, not here).
    pub fn from_value(value: &str) -> SiteSelector {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    /// The wire value this selector round-trips to.
    pub fn value(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full launch-record table with pre-computed indices.
///
/// Constructed once (at startup by the loader, or from synthetic records in
/// tests), then only ever read through `&LaunchDataset`. Fields are private
/// so the table genuinely cannot change for the lifetime of the process,
/// which also makes unsynchronized shared reads safe.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records, in file order.
    records: Vec<LaunchRecord>,
    /// Sorted distinct site identifiers; source of the dropdown options.
    sites: BTreeSet<String>,
    /// Sorted distinct booster version categories; source of the scatter
    /// color mapping.
    categories: BTreeSet<String>,
    /// Smallest payload mass in the dataset (0 when empty).
    payload_min: f64,
    /// Largest payload mass in the dataset (0 when empty).
    payload_max: f64,
}

impl LaunchDataset {
    /// Build the dataset indices from loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for rec in &records {
            sites.insert(rec.site.clone());
            categories.insert(rec.booster_category.clone());
            payload_min = payload_min.min(rec.payload_mass);
            payload_max = payload_max.max(rec.payload_mass);
        }
        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            categories,
            payload_min,
            payload_max,
        }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Sorted distinct site identifiers.
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    /// Sorted distinct booster version categories.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Whether a concrete site identifier appears in the dataset.
    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.contains(site)
    }

    /// (min, max) payload mass over the whole dataset; (0, 0) when empty.
    /// The slider's default thumb positions and the valid range domain.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, outcome: Outcome, cat: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: payload,
            outcome,
            booster_category: cat.to_string(),
        }
    }

    #[test]
    fn indices_are_sorted_and_distinct() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 3000.0, Outcome::Success, "FT"),
            record("CCAFS LC-40", 500.0, Outcome::Failure, "v1.0"),
            record("CCAFS LC-40", 2500.0, Outcome::Success, "FT"),
        ]);

        let sites: Vec<&str> = ds.sites().iter().map(String::as_str).collect();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A"]);

        let cats: Vec<&str> = ds.categories().iter().map(String::as_str).collect();
        assert_eq!(cats, vec!["FT", "v1.0"]);

        assert_eq!(ds.len(), 3);
        assert!(ds.contains_site("KSC LC-39A"));
        assert!(!ds.contains_site("VAFB SLC-4E"));
    }

    #[test]
    fn payload_bounds_span_the_records() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Success, "v1.0"),
            record("A", 9600.0, Outcome::Failure, "FT"),
            record("B", 4000.0, Outcome::Success, "FT"),
        ]);
        assert_eq!(ds.payload_bounds(), (500.0, 9600.0));
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), (0.0, 0.0));
        assert!(ds.sites().is_empty());
    }

    #[test]
    fn outcome_round_trips_class_values() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
        assert_eq!(Outcome::Success.to_string(), "1");
        assert_eq!(Outcome::Failure.to_string(), "0");
    }

    #[test]
    fn site_selector_parses_the_wildcard_exactly() {
        assert_eq!(SiteSelector::from_value("ALL"), SiteSelector::All);
        // Only the exact wire value is the wildcard.
        assert_eq!(
            SiteSelector::from_value("all"),
            SiteSelector::Site("all".to_string())
        );
        let site = SiteSelector::from_value("VAFB SLC-4E");
        assert_eq!(site.value(), "VAFB SLC-4E");
        assert_eq!(SiteSelector::All.to_string(), "ALL");
    }
}
