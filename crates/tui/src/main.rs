mod renderer;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sortanim_core::renderers::{FrameFanout, FrameRecorder, JsonLinesRenderer, SvgFrameWriter};
use sortanim_core::{AnimationConfig, Generator, SortAlgorithm};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "sortanim",
    about = "Generate sorting-algorithm animations frame by frame",
    version
)]
struct Opts {
    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Algorithm to animate (selection, bubble, insertion, merge); repeat to chain runs
    #[arg(short, long = "algorithm")]
    algorithms: Vec<SortAlgorithm>,

    /// Number of random values
    #[arg(long)]
    count: Option<usize>,

    /// Smallest random value (inclusive)
    #[arg(long)]
    min: Option<i64>,

    /// Largest random value (inclusive)
    #[arg(long)]
    max: Option<i64>,

    /// Seed for reproducible input
    #[arg(long)]
    seed: Option<u64>,

    /// Output keyframes per animation frame
    #[arg(long)]
    frames_per_image: Option<u32>,

    /// Use the dark SVG palette
    #[arg(long)]
    dark: bool,

    /// Write one SVG file per frame into this directory
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Write every frame as a JSON line to this file
    #[arg(long)]
    jsonl: Option<PathBuf>,

    /// Replay the animation in the terminal when done
    #[arg(long)]
    play: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    // Terminal playback owns the screen, so logs are kept quiet there.
    init_tracing(if opts.play { "warn" } else { "info" });

    let config = resolve_config(&opts)?;
    let input = config.generate_values()?;
    info!(
        count = input.len(),
        algorithms = ?config.algorithms,
        seed = ?config.seed,
        "generated input sequence"
    );

    let mut recorder = FrameRecorder::new();
    let mut svg = opts
        .svg_dir
        .as_ref()
        .map(|dir| {
            SvgFrameWriter::new(dir, config.layout, config.timeline(), config.dark)
                .map(|writer| writer.with_last_keyframe(config.last_keyframe_bound()))
        })
        .transpose()?;
    let mut jsonl = match &opts.jsonl {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            Some(JsonLinesRenderer::new(BufWriter::new(file), config.timeline()))
        }
        None => None,
    };

    let mut generator = Generator::new();
    {
        let mut sinks = FrameFanout::new();
        if opts.play {
            sinks.push(&mut recorder);
        }
        if let Some(svg) = svg.as_mut() {
            sinks.push(svg);
        }
        if let Some(jsonl) = jsonl.as_mut() {
            sinks.push(jsonl);
        }
        if sinks.is_empty() {
            warn!("no output selected (--svg-dir, --jsonl or --play); frames are only counted");
        }

        for &algorithm in &config.algorithms {
            let outcome = generator
                .run(input.clone(), algorithm, &mut sinks)
                .with_context(|| format!("animating {algorithm} sort"))?;
            info!(
                %algorithm,
                frames = outcome.frames,
                first = %outcome.first_frame,
                last = %outcome.last_frame,
                "run complete"
            );
        }
    }

    let frames = generator.frames_emitted();
    let final_keyframe = config.timeline().keyframe(generator.next_frame());
    writeln!(
        std::io::stdout().lock(),
        "Animation generated. {frames} frames, final keyframe: {final_keyframe}"
    )?;

    if opts.play {
        renderer::play(recorder.frames())?;
    }
    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_config(opts: &Opts) -> Result<AnimationConfig> {
    let mut config = match &opts.config {
        Some(path) => AnimationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnimationConfig::default(),
    };
    if !opts.algorithms.is_empty() {
        config.algorithms = opts.algorithms.clone();
    }
    if let Some(count) = opts.count {
        config.sequence.count = count;
    }
    if let Some(min) = opts.min {
        config.sequence.min = min;
    }
    if let Some(max) = opts.max {
        config.sequence.max = max;
    }
    if let Some(fpi) = opts.frames_per_image {
        config.frames_per_image = fpi;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    config.dark |= opts.dark;
    config.validate()?;
    Ok(config)
}

fn init_tracing(default_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let opts = Opts::parse_from([
            "sortanim", "-a", "bubble", "-a", "merge", "--count", "12", "--seed", "3",
        ]);
        let config = resolve_config(&opts).unwrap();
        assert_eq!(
            config.algorithms,
            vec![SortAlgorithm::Bubble, SortAlgorithm::Merge]
        );
        assert_eq!(config.sequence.count, 12);
        assert_eq!(config.sequence.min, 10);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let opts = Opts::parse_from(["sortanim", "--min", "50", "--max", "5"]);
        assert!(resolve_config(&opts).is_err());
    }

    #[test]
    fn unknown_algorithm_is_a_usage_error() {
        assert!(Opts::try_parse_from(["sortanim", "-a", "bogo"]).is_err());
    }
}
