//! Example: run one steering decision on a filtered frame.
//!
//! Loads a PNG as 8-bit grayscale (any non-zero pixel is line), optionally
//! loads a JSON decision config, feeds the frame through
//! `VisionDecisionNode` and prints the decision and the published twist as
//! JSON.
//!
//! Run from the workspace root:
//!   cargo run -p line-follow --example decide_image -- --help
//!   RUST_LOG=debug cargo run -p line-follow --example decide_image -- --input frame.png

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::ImageReader;
use line_follow::{
    Anchor, BinaryImage, DecisionConfig, Fallback, Heading, LineEstimate, ScanDirection, Twist,
    VisionDecisionNode,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Decide heading and speed for one binary line image")]
struct Args {
    /// Filtered frame (PNG, non-zero = line)
    #[arg(long)]
    input: PathBuf,

    /// Decision config (JSON); missing keys take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pixels at or below this gray level are background
    #[arg(long, default_value_t = 0)]
    threshold: u8,

    /// Output JSON path (default: stdout)
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ScanDto {
    direction: &'static str,
    angle_deg: i32,
    valid_samples: usize,
    anchor_row: Option<usize>,
    anchor_col: Option<usize>,
}

#[derive(Serialize)]
struct DecisionReport {
    width: usize,
    height: usize,
    /// `null` for a stop.
    angle_deg: Option<i32>,
    confidence: f64,
    source: &'static str,
    line_pixels: usize,
    perpendicular: bool,
    enough_line: bool,
    fallback: Option<&'static str>,
    scans: [ScanDto; 2],
    twist: Twist,
    elapsed_ms: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn direction_name(dir: ScanDirection) -> &'static str {
    match dir {
        ScanDirection::LeftToRight => "left_to_right",
        ScanDirection::RightToLeft => "right_to_left",
    }
}

fn scan_dto(est: &LineEstimate) -> ScanDto {
    ScanDto {
        direction: direction_name(est.direction),
        angle_deg: est.angle_deg,
        valid_samples: est.valid_samples,
        anchor_row: est.anchor.map(|Anchor { row, .. }| row),
        anchor_col: est.anchor.map(|Anchor { col, .. }| col),
    }
}

fn load_binary(path: &Path, threshold: u8) -> Result<BinaryImage> {
    let gray = ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?
        .into_luma8();

    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let data = gray
        .into_raw()
        .into_iter()
        .map(|px| if px > threshold { 255 } else { 0 })
        .collect();
    BinaryImage::from_vec(width, height, data).context("building binary image")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DecisionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DecisionConfig::default(),
    };
    let img = load_binary(&args.input, args.threshold)?;
    log::info!(
        "loaded {}: {}x{}",
        args.input.display(),
        img.width(),
        img.height()
    );

    let mut node = VisionDecisionNode::new(config, Vec::<Twist>::new());
    let t0 = Instant::now();
    let (decision, twist) = node.on_image(&img.as_view());
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let report = DecisionReport {
        width: img.width(),
        height: img.height(),
        angle_deg: match decision.heading {
            Heading::Degrees(d) => Some(d),
            Heading::Stop => None,
        },
        confidence: decision.confidence,
        source: direction_name(decision.source),
        line_pixels: decision.line_pixels,
        perpendicular: decision.perpendicular,
        enough_line: decision.enough_line,
        fallback: decision.fallback.map(|f| match f {
            Fallback::MoveAway => "move_away",
            Fallback::Coverage => "coverage",
        }),
        scans: [scan_dto(&decision.left), scan_dto(&decision.right)],
        twist,
        elapsed_ms,
    };

    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    match &args.out {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing JSON to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
