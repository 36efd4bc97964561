use anyhow::{Context, Result};
use log::*;

use painter_engine::config::LoopConfig;
use painter_engine::logging::{init_logging, LoggingConfig};
use painter_engine::paint::Color;
use painter_engine::render::{DisplaySink, FallbackView, RenderLoop};
use painter_engine::surface::{CpuSurface, CpuSurfaceProvider, Surface};
use painter_script::{Compiler, CompilerConfig};

const GREEN_FRAME: &str = include_str!("../scripts/green_frame.txt");
const MOVE: &str = include_str!("../scripts/move.txt");

/// Frames in the drift animation.
const DRIFT_STEPS: u32 = 10;

/// Headless display: logs a short summary of every presented frame.
#[derive(Default)]
struct FrameLog {
    frames: u64,
}

impl DisplaySink<CpuSurface> for FrameLog {
    fn present(&mut self, surface: &CpuSurface) {
        self.frames += 1;
        info!("frame {:>3}: {}", self.frames, summarize(surface));
    }
}

fn summarize(surface: &CpuSurface) -> String {
    let size = surface.size();
    format!(
        "{}x{} white={} green={} black={} blue={}",
        size.width,
        size.height,
        surface.count(Color::WHITE),
        surface.count(Color::GREEN),
        surface.count(Color::BLACK),
        surface.count(Color::BLUE),
    )
}

fn submit(lp: &RenderLoop, compiler: &Compiler, name: &str, script: &str) -> Result<()> {
    let ops = compiler
        .compile(script)
        .with_context(|| format!("script '{name}' does not compile"))?;
    debug!("submitting '{name}' ({} operations)", ops.len());
    lp.post_all(ops);
    Ok(())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │   PAINTER STUDIO  ·  headless run    │");
    println!("  └──────────────────────────────────────┘");
    println!();

    let config = LoopConfig::default();
    let compiler = Compiler::new(CompilerConfig::for_surface(config.surface_size));

    // What a window would show before the first publish.
    let mut placeholder = CpuSurface::new(config.surface_size);
    FallbackView::centered(placeholder.bounds()).paint(&mut placeholder);
    info!("fallback: {}", summarize(&placeholder));

    let mut lp = RenderLoop::start(&CpuSurfaceProvider, FrameLog::default(), config)
        .context("failed to start render loop")?;

    submit(&lp, &compiler, "green_frame", GREEN_FRAME)?;
    submit(&lp, &compiler, "move", MOVE)?;

    for step in 1..=DRIFT_STEPS {
        let offset = f64::from(step) * 0.01;
        let script = format!("green\nfigure 0.25 0.25\nmove {offset} {offset}\nupdate");
        submit(&lp, &compiler, "drift", &script)?;
    }

    lp.stop_and_wait()?;
    info!("done");
    Ok(())
}
