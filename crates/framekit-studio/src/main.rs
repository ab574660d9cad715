mod config;
mod demos;
mod terminal;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use framekit_engine::host::{PacedHost, PacedHostConfig};
use framekit_engine::logging::{init_logging, LoggingConfig};
use framekit_engine::render::{AsciiRenderer, Renderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

use config::{Overrides, Settings, StudioConfig};
use demos::tweaks::Tweaks;
use demos::DemoScene;
use terminal::TerminalRenderer;

#[derive(Debug, Parser)]
#[command(name = "framekit-studio", version, about = "Plays framekit demo scenes in the terminal")]
struct Cli {
    #[command(subcommand)]
    demo: Demo,

    /// Stop after this many frames (0 runs until interrupted).
    #[arg(long, global = true)]
    frames: Option<u64>,

    /// Target refresh rate in Hz (0 is uncapped).
    #[arg(long, global = true)]
    fps: Option<f64>,

    /// Output width in terminal columns.
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Output height in terminal rows.
    #[arg(long, global = true)]
    height: Option<usize>,

    /// TOML settings file; flags take precedence over its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Run the loop without drawing frames.
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Demo {
    /// Cube moved off-centre, rendered once.
    Transform,
    /// Cube spinning at a frame-rate independent speed.
    Animation,
    /// Subdivided cube turning with elapsed time, camera above a corner.
    Camera,
    /// Random triangle cloud in wireframe with orbit controls.
    Geometry {
        #[arg(
            long,
            default_value_t = demos::geometry::DEFAULT_TRIANGLES,
            value_parser = clap::value_parser!(u32).range(1..=demos::geometry::MAX_TRIANGLES as i64),
        )]
        triangles: u32,

        /// Seed for a reproducible cloud.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Cube configured from debug-panel values.
    Tweaks(TweakArgs),
}

#[derive(Debug, Args)]
struct TweakArgs {
    /// Mesh elevation, clamped to [-3, 3].
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    elevation: f32,

    #[arg(long)]
    hidden: bool,

    #[arg(long)]
    wireframe: bool,
}

impl From<TweakArgs> for Tweaks {
    fn from(args: TweakArgs) -> Self {
        Self {
            elevation: args.elevation,
            hidden: args.hidden,
            wireframe: args.wireframe,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => StudioConfig::load(path)?,
        None => StudioConfig::default(),
    };
    let overrides = Overrides {
        fps: cli.fps,
        frames: cli.frames,
        width: cli.width,
        height: cli.height,
    };
    let settings = Settings::resolve(file, overrides).context("invalid settings")?;

    init_logging(match &settings.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let ascii = AsciiRenderer::new(settings.width, settings.height);
    let demo = build_demo(cli.demo, ascii.aspect())?;
    let mut renderer = TerminalRenderer::new(ascii, std::io::stdout().lock()).quiet(cli.quiet);

    play(demo, &settings, &mut renderer);
    Ok(())
}

fn build_demo(demo: Demo, aspect: f32) -> anyhow::Result<DemoScene> {
    let scene = match demo {
        Demo::Transform => demos::transform::build(aspect),
        Demo::Animation => demos::animation::build(aspect),
        Demo::Camera => demos::camera::build(aspect),
        Demo::Geometry { triangles, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            demos::geometry::build(aspect, triangles as usize, &mut rng)
                .context("building the triangle cloud")?
        }
        Demo::Tweaks(args) => demos::tweaks::build(aspect, &args.into()),
    };
    Ok(scene)
}

fn play<R: Renderer + ?Sized>(mut demo: DemoScene, settings: &Settings, renderer: &mut R) {
    if !demo.animated {
        renderer.render(&demo.scene, &demo.camera);
        log::info!("rendered a single frame");
        return;
    }

    let mut host = PacedHost::new(PacedHostConfig {
        refresh_hz: settings.fps,
        max_frames: settings.frames,
    });

    log::info!(
        "playing at {} Hz, {}",
        settings.fps,
        match settings.frames {
            Some(n) => format!("{n} frames"),
            None => "until interrupted".to_owned(),
        }
    );

    let summary = demo.driver.run(&mut host, &mut demo.scene, &mut demo.camera, renderer);

    log::info!(
        "stopped after {} frames in {:.2}s ({:?})",
        summary.frames,
        summary.elapsed.as_secs_f64(),
        summary.reason
    );
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_demo() {
        let cli = Cli::try_parse_from([
            "framekit-studio", "tweaks", "--elevation", "-1.5", "--wireframe", "--frames", "10",
        ])
        .unwrap();

        assert_eq!(cli.frames, Some(10));
        match cli.demo {
            Demo::Tweaks(args) => {
                assert_eq!(args.elevation, -1.5);
                assert!(args.wireframe);
                assert!(!args.hidden);
            }
            other => panic!("unexpected demo {other:?}"),
        }
    }

    #[test]
    fn triangle_count_is_bounded() {
        let parse = |n: &str| Cli::try_parse_from(["framekit-studio", "geometry", "--triangles", n]);

        assert!(parse("1000000").is_ok());
        assert!(parse("1000001").is_err());
        assert!(parse("0").is_err());
        assert!(parse("18446744073709551615").is_err());
    }

    #[test]
    fn tiny_fps_is_rejected_before_playing() {
        let cli = Cli::try_parse_from(["framekit-studio", "animation", "--fps", "1e-20", "--frames", "1"])
            .unwrap();
        let flags = Overrides { fps: cli.fps, frames: cli.frames, ..Overrides::default() };
        assert!(Settings::resolve(StudioConfig::default(), flags).is_err());
    }

    #[test]
    fn unknown_demo_is_rejected() {
        assert!(Cli::try_parse_from(["framekit-studio", "textures"]).is_err());
    }

    #[test]
    fn animated_demo_respects_frame_budget() {
        let settings = Settings {
            fps: 0.0,
            frames: Some(3),
            width: 16,
            height: 8,
            log_filter: None,
        };
        let mut renderer = AsciiRenderer::new(settings.width, settings.height);
        play(demos::animation::build(renderer.aspect()), &settings, &mut renderer);
        assert_eq!(renderer.frames_rendered(), 3);
    }

    #[test]
    fn still_demo_renders_once() {
        let settings = Settings {
            fps: 60.0,
            frames: Some(100),
            width: 16,
            height: 8,
            log_filter: None,
        };
        let mut renderer = AsciiRenderer::new(settings.width, settings.height);
        play(demos::transform::build(renderer.aspect()), &settings, &mut renderer);
        assert_eq!(renderer.frames_rendered(), 1);
    }
}
