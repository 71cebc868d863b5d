use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::chart::ChartSpec;
use crate::controls::DashboardControls;

// ---------------------------------------------------------------------------
// Renderer – boundary to the rendering collaborator
// ---------------------------------------------------------------------------

/// Where chart descriptions leave the core.
///
/// One call per chart target and interaction; whatever turns the description
/// into pixels lives on the other side of this trait.
pub trait Renderer {
    fn render(&mut self, target: &str, chart: &ChartSpec) -> Result<()>;
}

// ---------------------------------------------------------------------------
// JSON artifact renderer
// ---------------------------------------------------------------------------

/// Writes each chart description as pretty-printed `<target>.json` into a
/// directory, plus `controls.json` for the control panel. A re-render of the
/// same target overwrites its file, so the directory always reflects the
/// current interaction state.
pub struct JsonDirRenderer {
    dir: PathBuf,
}

impl JsonDirRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        Ok(JsonDirRenderer { dir })
    }

    /// Emit the control-panel descriptor next to the charts.
    pub fn write_controls(&self, controls: &DashboardControls) -> Result<()> {
        self.write_json("controls", controls)
    }

    fn write_json<T: serde::Serialize>(&self, target: &str, value: &T) -> Result<()> {
        let path = self.dir.join(format!("{target}.json"));
        let file = fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, value)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

impl Renderer for JsonDirRenderer {
    fn render(&mut self, target: &str, chart: &ChartSpec) -> Result<()> {
        self.write_json(target, chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{PieSlice, PieSpec};

    #[test]
    fn writes_one_json_artifact_per_target() {
        let dir = std::env::temp_dir().join(format!(
            "launchboard-render-test-{}",
            std::process::id()
        ));
        let mut renderer = JsonDirRenderer::new(&dir).unwrap();

        let chart = ChartSpec::Pie(PieSpec {
            title: "Total Success Launches By Site".to_string(),
            slices: vec![PieSlice {
                label: "KSC LC-39A".to_string(),
                value: 7,
            }],
        });
        renderer.render("success-pie-chart", &chart).unwrap();

        let written = std::fs::read_to_string(dir.join("success-pie-chart.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["slices"][0]["value"], 7);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
