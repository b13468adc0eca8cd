// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a JSON script of viewer input and prints every host call.
//!
//! ```text
//! RUST_LOG=loupe_viewer=debug cargo run -p loupe_replay -- loupe_replay/scripts/zoom_and_swipe.json
//! ```

mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use loupe_viewer::loupe_gallery::{Position, ViewableItem};
use loupe_viewer::loupe_view::RenderTransform;
use loupe_viewer::{Viewer, ViewerConfig, ViewerError, ViewerHost};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::script::{Control, Script, Step};

#[derive(Parser, Debug)]
#[command(about = "Replay scripted input through a Loupe viewer")]
struct Cli {
    /// Path to the JSON script.
    script: PathBuf,
    /// Deliver the pending animation frame after every step, instead of only
    /// at explicit `frame` steps.
    #[arg(long)]
    auto_frame: bool,
    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] loupe_viewer::ConfigError),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
}

/// Prints host calls one per line and tracks the outstanding frame.
#[derive(Debug, Default)]
struct PrintingHost {
    frame_pending: bool,
    renders: usize,
}

impl ViewerHost for PrintingHost {
    fn request_frame(&mut self) {
        self.frame_pending = true;
        println!("request_frame");
    }

    fn cancel_frame(&mut self) {
        self.frame_pending = false;
        println!("cancel_frame");
    }

    fn apply_transform(&mut self, t: RenderTransform) {
        self.renders += 1;
        println!(
            "apply_transform translate({:.3}px, {:.3}px) scale({:.3})",
            t.translate_x, t.translate_y, t.scale
        );
    }

    fn show_item(&mut self, index: usize, position: Position, item: &ViewableItem) {
        println!(
            "show_item #{index} [{position}] {} \"{}\"",
            item.source_ref, item.title
        );
    }

    fn prefetch(&mut self, index: usize, item: &ViewableItem) {
        println!("prefetch #{index} {}", item.source_ref);
    }

    fn closed(&mut self) {
        println!("closed");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let text = std::fs::read_to_string(&cli.script).map_err(|source| ReplayError::Read {
        path: cli.script.clone(),
        source,
    })?;
    let script = Script::from_json(&text)?;

    if cli.print_config {
        println!("{}", script.config.to_json_pretty()?);
        return Ok(());
    }

    let host = replay(script, cli.auto_frame)?;
    info!(renders = host.renders, "replay finished");
    Ok(())
}

fn replay(script: Script, auto_frame: bool) -> Result<PrintingHost, ReplayError> {
    let Script {
        config,
        items,
        start_index,
        steps,
    } = script;
    let mut viewer = Viewer::new(config, PrintingHost::default());
    log_config(&viewer.config());

    // Resizes before the first frame establish the layout the viewer opens in.
    let leading = steps
        .iter()
        .take_while(|step| matches!(step, Step::Input(loupe_viewer::ViewerEvent::Resize { .. })))
        .count();
    for step in &steps[..leading] {
        if let Step::Input(event) = step {
            viewer.handle(*event);
        }
    }
    viewer.open(items.clone(), start_index)?;

    for step in &steps[leading..] {
        match step {
            Step::Input(event) => {
                let changes = viewer.handle(*event);
                if !changes.is_empty() {
                    println!("  -> {changes:?}");
                }
            }
            Step::Control(Control::Frame) => fire_frame(&mut viewer),
            Step::Control(Control::JumpTo { index }) => {
                viewer.jump_to(*index);
            }
            Step::Control(Control::LoadFailure { index, reason }) => {
                viewer.report_load_failure(*index, reason);
            }
            Step::Control(Control::Close) => {
                viewer.close();
            }
            Step::Control(Control::Reopen { start_index }) => {
                viewer.open(items.clone(), *start_index)?;
            }
        }
        if auto_frame {
            fire_frame(&mut viewer);
        }
    }
    fire_frame(&mut viewer);
    Ok(viewer.into_host())
}

fn fire_frame(viewer: &mut Viewer<PrintingHost>) {
    if !viewer.host().frame_pending {
        return;
    }
    viewer.host_mut().frame_pending = false;
    if !viewer.on_animation_frame() {
        println!("frame: nothing to render");
    }
}

fn log_config(config: &ViewerConfig) {
    info!(
        max_scale = config.zoom.max_scale,
        wheel_step = config.zoom.wheel_step,
        key_step = config.zoom.key_step,
        swipe_threshold = config.swipe_threshold,
        "viewer configured"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../scripts/zoom_and_swipe.json");

    #[test]
    fn sample_script_renders_at_explicit_frames() {
        let script = Script::from_json(SAMPLE).unwrap();
        let host = replay(script, false).unwrap();
        // Open, wheel zoom, drag, reset, swipe to the next item. The double tap
        // after that is cancelled by closing before its frame.
        assert_eq!(host.renders, 5);
        assert!(!host.frame_pending);
    }

    #[test]
    fn auto_frame_renders_every_change() {
        let script = Script::from_json(SAMPLE).unwrap();
        let host = replay(script, true).unwrap();
        assert_eq!(host.renders, 9);
    }

    #[test]
    fn invalid_start_index_fails_replay() {
        let script = Script::from_json(r#"{ "items": [{ "src": "a.jpg", "alt": "A" }], "start_index": 4 }"#)
            .unwrap();
        assert!(matches!(replay(script, false), Err(ReplayError::Viewer(_))));
    }
}
