use serde::Serialize;

use crate::data::model::{ALL_SITES, LaunchDataset};

// ---------------------------------------------------------------------------
// Control descriptors – declarative widget configuration
// ---------------------------------------------------------------------------
//
// The boundary layer renders widgets from these descriptors; the core only
// derives them from the dataset. Ids, labels and the slider domain are the
// reference dashboard's.

/// Page heading.
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Element id of the site selector.
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
/// Element id of the payload range slider.
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";

/// Fixed slider domain and step, independent of the dataset.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Tick positions labeled on the slider.
const PAYLOAD_SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// One dropdown entry: display label + wire value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Site selector configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub default: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// A labeled tick mark on the range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub at: f64,
    pub label: String,
}

/// Payload range slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderSpec {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial thumb positions: the dataset's payload bounds.
    pub default: (f64, f64),
}

/// Everything the boundary needs to draw the control panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardControls {
    pub title: String,
    pub site_dropdown: DropdownSpec,
    pub payload_slider: RangeSliderSpec,
}

/// Build the site selector: the ALL wildcard first, then one option per
/// distinct site in the dataset.
pub fn site_dropdown(dataset: &LaunchDataset) -> DropdownSpec {
    let mut options = vec![DropdownOption {
        label: "All Site".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(dataset.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    DropdownSpec {
        id: SITE_DROPDOWN_ID.to_string(),
        options,
        default: ALL_SITES.to_string(),
        placeholder: "Select Launch Site".to_string(),
        searchable: true,
    }
}

/// Build the payload slider: fixed [0, 10000] domain, kilo-step, labeled
/// quarter marks, thumbs starting at the dataset's payload bounds.
pub fn payload_slider(dataset: &LaunchDataset) -> RangeSliderSpec {
    RangeSliderSpec {
        id: PAYLOAD_SLIDER_ID.to_string(),
        label: "Payload range (Kg):".to_string(),
        min: PAYLOAD_SLIDER_MIN,
        max: PAYLOAD_SLIDER_MAX,
        step: PAYLOAD_SLIDER_STEP,
        marks: PAYLOAD_SLIDER_MARKS
            .iter()
            .map(|&at| SliderMark {
                at,
                label: format!("{at}"),
            })
            .collect(),
        default: dataset.payload_bounds(),
    }
}

/// The full control panel for the initial page.
pub fn dashboard_controls(dataset: &LaunchDataset) -> DashboardControls {
    DashboardControls {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: site_dropdown(dataset),
        payload_slider: payload_slider(dataset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: payload,
            outcome: Outcome::Success,
            booster_category: "FT".to_string(),
        }
    }

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("KSC LC-39A", 2600.0),
            record("CCAFS LC-40", 350.0),
            record("KSC LC-39A", 9600.0),
        ])
    }

    #[test]
    fn dropdown_lists_all_then_each_site_once() {
        let dd = site_dropdown(&sample_dataset());
        assert_eq!(dd.id, "site-dropdown");
        assert_eq!(dd.default, "ALL");
        assert!(dd.searchable);

        let pairs: Vec<(&str, &str)> = dd
            .options
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("All Site", "ALL"),
                ("CCAFS LC-40", "CCAFS LC-40"),
                ("KSC LC-39A", "KSC LC-39A"),
            ]
        );
    }

    #[test]
    fn slider_has_fixed_domain_and_dataset_defaults() {
        let slider = payload_slider(&sample_dataset());
        assert_eq!(slider.id, "payload-slider");
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10_000.0);
        assert_eq!(slider.step, 1_000.0);
        // Thumbs start on the dataset's payload bounds.
        assert_eq!(slider.default, (350.0, 9600.0));

        let marks: Vec<(&str, f64)> = slider
            .marks
            .iter()
            .map(|m| (m.label.as_str(), m.at))
            .collect();
        assert_eq!(
            marks,
            vec![
                ("0", 0.0),
                ("2500", 2500.0),
                ("5000", 5000.0),
                ("7500", 7500.0),
                ("10000", 10000.0),
            ]
        );
    }

    #[test]
    fn control_panel_carries_the_page_title() {
        let controls = dashboard_controls(&sample_dataset());
        assert_eq!(controls.title, "SpaceX Launch Records Dashboard");
        assert_eq!(controls.site_dropdown.options.len(), 3);
    }
}
