use anyhow::Result;

use crate::chart::ChartSpec;
use crate::data::aggregate::aggregate_outcomes;
use crate::data::filter::filter_payload;
use crate::data::model::LaunchDataset;
use crate::render::Renderer;
use crate::state::{ControlEvent, ControlState};

// ---------------------------------------------------------------------------
// Dashboard – the interaction controller
// ---------------------------------------------------------------------------

/// Target id of the launch-outcome pie chart.
pub const PIE_CHART_ID: &str = "success-pie-chart";
/// Target id of the payload/outcome scatter chart.
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Glue between the controls and the two chart queries.
///
/// Holds the current control values and a shared reference to the immutable
/// dataset. Each incoming event updates the state, recomputes the charts
/// that depend on the changed control, and forwards the fresh descriptions
/// to the renderer: a site change re-renders pie and scatter, a range change
/// re-renders only the scatter (the pie's sole input is the site selector).
/// No caching, no debouncing; every event is a full recomputation.
pub struct Dashboard<'a> {
    dataset: &'a LaunchDataset,
    state: ControlState,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a LaunchDataset) -> Self {
        Dashboard {
            dataset,
            state: ControlState::new(dataset),
        }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Update the control state without rendering (used to seed the state
    /// from CLI flags before the initial render).
    pub fn apply(&mut self, event: &ControlEvent) {
        self.state.apply(event);
    }

    /// Handle one control event end-to-end.
    ///
    /// The state keeps the applied value even when the render fails (an
    /// unknown site stays selected, exactly like a dropdown keeps a value
    /// whose callback errored); the caller decides whether to abort or log
    /// and continue.
    pub fn handle(&mut self, event: &ControlEvent, renderer: &mut dyn Renderer) -> Result<()> {
        log::debug!("control event: {event:?}");
        self.state.apply(event);

        match event {
            ControlEvent::SiteSelected(_) => {
                self.render_pie(renderer)?;
                self.render_scatter(renderer)?;
            }
            ControlEvent::PayloadRangeChanged(..) => {
                self.render_scatter(renderer)?;
            }
        }
        Ok(())
    }

    /// Initial page load: both charts from the current state.
    pub fn render_all(&self, renderer: &mut dyn Renderer) -> Result<()> {
        self.render_pie(renderer)?;
        self.render_scatter(renderer)
    }

    fn render_pie(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let pie = aggregate_outcomes(self.dataset, self.state.site())?;
        log::debug!("pie: {} slices over {} launches", pie.slices.len(), pie.total());
        renderer.render(PIE_CHART_ID, &ChartSpec::Pie(pie))
    }

    fn render_scatter(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let scatter =
            filter_payload(self.dataset, self.state.site(), self.state.payload_range())?;
        renderer.render(SCATTER_CHART_ID, &ChartSpec::Scatter(scatter))
    }
}
