mod app;
mod chart;
mod color;
mod controls;
mod data;
mod error;
mod render;
mod state;

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use app::Dashboard;
use render::JsonDirRenderer;
use state::ControlEvent;

#[derive(Parser, Debug)]
#[command(name = "launchboard")]
#[command(about = "SpaceX launch records dashboard core: emits declarative chart specs")]
struct Cli {
    /// Path to the launch-record dataset (.csv, .json or .parquet)
    dataset: PathBuf,

    /// Initial site selection ("ALL" or a site identifier)
    #[arg(long, default_value = "ALL")]
    site: String,

    /// Initial payload range; defaults to the dataset's payload bounds
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
    range: Option<Vec<f64>>,

    /// Directory receiving the JSON chart artifacts
    #[arg(long, default_value = "dashboard_out")]
    out: PathBuf,

    /// Keep reading control events from stdin after the initial render
    #[arg(long)]
    interactive: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // A dataset that fails to load is fatal: there is no dashboard without it.
    let dataset = data::loader::load_file(&cli.dataset)
        .with_context(|| format!("loading {}", cli.dataset.display()))?;
    log::info!(
        "Loaded {} launch records across {} sites (payload {:?} kg)",
        dataset.len(),
        dataset.sites().len(),
        dataset.payload_bounds()
    );

    let mut renderer = JsonDirRenderer::new(&cli.out)?;
    renderer.write_controls(&controls::dashboard_controls(&dataset))?;

    let mut dashboard = Dashboard::new(&dataset);
    dashboard.apply(&ControlEvent::SiteSelected(cli.site.clone()));
    if let Some(range) = &cli.range {
        dashboard.apply(&ControlEvent::PayloadRangeChanged(range[0], range[1]));
    }
    log::info!(
        "Rendering for site {}, payload range {:?}",
        dashboard.state().site(),
        dashboard.state().payload_range()
    );
    dashboard.render_all(&mut renderer)?;

    if cli.interactive {
        log::info!(
            "Reading control events from stdin: `site <value>`, `range <low> <high>`, `show`, `quit`"
        );
        run_event_loop(&mut dashboard, &mut renderer)?;
    }
    Ok(())
}

/// Synchronous interaction loop: one control event per line, one
/// recomputation per event. `show` re-renders both charts, `quit` or EOF
/// ends the loop. A failed event is logged and the loop continues, the same
/// way one broken interaction doesn't take down a dashboard page.
fn run_event_loop(
    dashboard: &mut Dashboard<'_>,
    renderer: &mut JsonDirRenderer,
) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "show" => {
                if let Err(e) = dashboard.render_all(renderer) {
                    log::error!("render failed: {e:#}");
                }
            }
            _ => match ControlEvent::parse(line) {
                Ok(event) => {
                    if let Err(e) = dashboard.handle(&event, renderer) {
                        log::error!("{e:#}");
                    }
                }
                Err(e) => log::error!("{e:#}"),
            },
        }
    }
    Ok(())
}
