use anyhow::{Context, Result, bail};

use crate::data::model::{LaunchDataset, SiteSelector};

// ---------------------------------------------------------------------------
// Control events
// ---------------------------------------------------------------------------

/// One user interaction with the control panel.
///
/// Exactly one event arrives per change; the controller recomputes the
/// affected charts synchronously before the next event is read.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// The site dropdown changed; carries the new wire value.
    SiteSelected(String),
    /// A slider thumb moved; carries the new (low, high) pair.
    PayloadRangeChanged(f64, f64),
}

impl ControlEvent {
    /// Parse an interactive command line:
    /// `site <value>` or `range <low> <high>`.
    pub fn parse(line: &str) -> Result<ControlEvent> {
        let line = line.trim();

        if let Some(value) = line.strip_prefix("site ") {
            let value = value.trim();
            if value.is_empty() {
                bail!("site command needs a value, e.g. `site ALL`");
            }
            return Ok(ControlEvent::SiteSelected(value.to_string()));
        }

        if let Some(rest) = line.strip_prefix("range ") {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            if parts.len() != 2 {
                bail!("range command needs two bounds, e.g. `range 2000 8000`");
            }
            let low: f64 = parts[0]
                .parse()
                .with_context(|| format!("'{}' is not a number", parts[0]))?;
            let high: f64 = parts[1]
                .parse()
                .with_context(|| format!("'{}' is not a number", parts[1]))?;
            return Ok(ControlEvent::PayloadRangeChanged(low, high));
        }

        bail!("unknown command {line:?} (expected `site <value>` or `range <low> <high>`)")
    }
}

// ---------------------------------------------------------------------------
// Control state
// ---------------------------------------------------------------------------

/// Current values of the two controls, independent of any rendering.
///
/// The slider can physically reach 10000 kg while the dataset may top out
/// lower, so incoming range values are clamped into [0, max payload] and
/// ordered here. The pure filter never sees an invalid pair from the
/// controller; only programmatic callers can trigger its range errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    site: SiteSelector,
    payload_range: (f64, f64),
    /// Upper clamp for slider values: the dataset's max payload.
    max_payload: f64,
}

impl ControlState {
    /// Initial control values: ALL sites, thumbs on the dataset's payload
    /// bounds.
    pub fn new(dataset: &LaunchDataset) -> Self {
        let (min, max) = dataset.payload_bounds();
        ControlState {
            site: SiteSelector::All,
            payload_range: (min, max),
            max_payload: max,
        }
    }

    pub fn site(&self) -> &SiteSelector {
        &self.site
    }

    pub fn payload_range(&self) -> (f64, f64) {
        self.payload_range
    }

    /// Replace the site selection with a dropdown wire value.
    pub fn select_site(&mut self, value: &str) {
        self.site = SiteSelector::from_value(value);
    }

    /// Replace the payload range with slider values, clamped and ordered.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let mut low = low.clamp(0.0, self.max_payload);
        let mut high = high.clamp(0.0, self.max_payload);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        self.payload_range = (low, high);
    }

    /// Apply one control event.
    pub fn apply(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::SiteSelected(value) => self.select_site(value),
            ControlEvent::PayloadRangeChanged(low, high) => {
                self.set_payload_range(*low, *high)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        let record = |payload: f64| LaunchRecord {
            site: "CCAFS LC-40".to_string(),
            payload_mass: payload,
            outcome: Outcome::Success,
            booster_category: "FT".to_string(),
        };
        LaunchDataset::from_records(vec![record(500.0), record(9600.0)])
    }

    #[test]
    fn initial_state_spans_the_dataset() {
        let state = ControlState::new(&dataset());
        assert_eq!(state.site(), &SiteSelector::All);
        assert_eq!(state.payload_range(), (500.0, 9600.0));
    }

    #[test]
    fn slider_values_are_clamped_and_ordered() {
        let mut state = ControlState::new(&dataset());

        // The slider reaches 10000 but the dataset tops out at 9600.
        state.set_payload_range(2000.0, 10_000.0);
        assert_eq!(state.payload_range(), (2000.0, 9600.0));

        state.set_payload_range(-50.0, 3000.0);
        assert_eq!(state.payload_range(), (0.0, 3000.0));

        // Reversed thumbs are ordered rather than rejected.
        state.set_payload_range(8000.0, 2000.0);
        assert_eq!(state.payload_range(), (2000.0, 8000.0));
    }

    #[test]
    fn events_update_the_matching_control() {
        let mut state = ControlState::new(&dataset());

        state.apply(&ControlEvent::SiteSelected("CCAFS LC-40".to_string()));
        assert_eq!(
            state.site(),
            &SiteSelector::Site("CCAFS LC-40".to_string())
        );
        // Range untouched by a site event.
        assert_eq!(state.payload_range(), (500.0, 9600.0));

        state.apply(&ControlEvent::SiteSelected("ALL".to_string()));
        assert_eq!(state.site(), &SiteSelector::All);

        state.apply(&ControlEvent::PayloadRangeChanged(1000.0, 4000.0));
        assert_eq!(state.payload_range(), (1000.0, 4000.0));
    }

    #[test]
    fn parses_interactive_commands() {
        // Site identifiers contain spaces; the rest of the line is the value.
        assert_eq!(
            ControlEvent::parse("site CCAFS LC-40").unwrap(),
            ControlEvent::SiteSelected("CCAFS LC-40".to_string())
        );
        assert_eq!(
            ControlEvent::parse("  site ALL \n").unwrap(),
            ControlEvent::SiteSelected("ALL".to_string())
        );
        assert_eq!(
            ControlEvent::parse("range 2000 8000").unwrap(),
            ControlEvent::PayloadRangeChanged(2000.0, 8000.0)
        );

        assert!(ControlEvent::parse("site ").is_err());
        assert!(ControlEvent::parse("range 2000").is_err());
        assert!(ControlEvent::parse("range two thousand").is_err());
        assert!(ControlEvent::parse("refresh").is_err());
    }
}
