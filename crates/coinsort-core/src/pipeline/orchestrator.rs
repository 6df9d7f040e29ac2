use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::RgbImage;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::classify::{make_decision, Decision};
use crate::detection::detect_circles;
use crate::edges::edge_field;
use crate::error::{CoinError, Result};
use crate::frame::{grayscale, Circle, Frame};
use crate::io::image_io::{load_frame, result_path, save_color_image};
use crate::quality::channel_divergence;
use crate::render::{replay, Canvas, DrawCommand};
use crate::sampling::{sample_center, sample_ring, SamplingConfig};

use super::config::PipelineConfig;
use super::types::{
    BatchItem, CoinReport, ImageOutcome, ImageReport, PipelineStage, ProgressReporter,
};

fn enter(stage: PipelineStage, name: &str) {
    debug!(image = name, stage = %stage, "Pipeline stage");
}

/// Sample, score and classify one detected circle.
///
/// An empty center or ring sample turns the circle into a skip without
/// consulting the classifier.
pub fn score_circle(image: &RgbImage, circle: &Circle, sampling: &SamplingConfig) -> CoinReport {
    let Circle {
        center_x: cx,
        center_y: cy,
        radius: r,
    } = *circle;

    let center = sample_center(image, cx, cy, r, sampling.center_fraction);
    let ring = sample_ring(image, cx, cy, r, sampling.ring_thickness);
    debug!(
        cx,
        cy,
        center_pixels = center.inside_count(),
        ring_pixels = ring.inside_count(),
        stage = %PipelineStage::Sampled,
        "Pipeline stage"
    );

    let center_score = channel_divergence(&center, sampling.background).ok();
    let ring_score = channel_divergence(&ring, sampling.background).ok();
    debug!(cx, cy, stage = %PipelineStage::Scored, "Pipeline stage");

    let decision = match (center_score, ring_score) {
        (Some(c), Some(r)) => make_decision(c, r),
        _ => {
            warn!(
                cx,
                cy,
                radius = r,
                "Sample region is empty, skipping circle"
            );
            Decision::skip()
        }
    };

    CoinReport {
        circle: *circle,
        center_score,
        ring_score,
        decision,
    }
}

/// Run detection and classification on one image.
///
/// Circles are scored in parallel; annotations are then replayed serially
/// in detector order onto a single canvas. With no circles, `output` is
/// `None` unless `write_unannotated` is set.
pub fn process_frame(frame: &Frame, config: &PipelineConfig) -> Result<ImageReport> {
    let name = frame.name.as_str();
    enter(PipelineStage::Loaded, name);

    let gray = grayscale(&frame.image);
    let field = edge_field(&gray)?;
    enter(PipelineStage::EdgesComputed, name);

    let circles = detect_circles(&field, &config.detection)?;
    enter(PipelineStage::CirclesDetected, name);
    info!(image = name, circles = circles.len(), "Detected circles");

    if circles.is_empty() {
        enter(PipelineStage::Finalized, name);
        return Ok(ImageReport {
            name: frame.name.clone(),
            coins: Vec::new(),
            output: config.write_unannotated.then(|| frame.image.clone()),
        });
    }

    let coins: Vec<CoinReport> = circles
        .par_iter()
        .map(|circle| score_circle(&frame.image, circle, &config.sampling))
        .collect();
    enter(PipelineStage::Decided, name);

    for coin in &coins {
        info!(
            image = name,
            cx = coin.circle.center_x,
            cy = coin.circle.center_y,
            radius = coin.circle.radius,
            center_score = ?coin.center_score,
            ring_score = ?coin.ring_score,
            decision = %coin.decision.label,
            "Classified circle"
        );
    }

    let commands: Vec<DrawCommand> = coins
        .iter()
        .map(|coin| DrawCommand {
            circle: coin.circle,
            decision: coin.decision.clone(),
        })
        .collect();
    let mut canvas = Canvas::new(&frame.image);
    let drawn = replay(&mut canvas, &commands);
    enter(PipelineStage::Rendered, name);
    debug!(image = name, drawn, "Annotations drawn");

    enter(PipelineStage::Finalized, name);
    Ok(ImageReport {
        name: frame.name.clone(),
        coins,
        output: Some(canvas.into_output()),
    })
}

/// Load and process one input file, writing the result to `target`.
fn process_path(input: &Path, target: &Path, config: &PipelineConfig) -> Result<ImageOutcome> {
    let frame = load_frame(input)?;
    let report = process_frame(&frame, config)?;

    let written = match report.output {
        Some(ref image) => {
            save_color_image(image, target)?;
            info!(path = %target.display(), total = report.total_value(), "Wrote result");
            Some(target.to_path_buf())
        }
        None => None,
    };

    Ok(ImageOutcome {
        coins: report.coins,
        written,
    })
}

/// Process every input independently, in parallel.
///
/// A failing image is logged and recorded in its [`BatchItem`]; it never
/// stops the rest of the batch. Items come back in input order. Only an
/// invalid config or an output directory that cannot be created fails the
/// whole call.
///
/// Outputs are named after the input's file name. When several inputs map
/// to the same output file, the first one in input order owns it and the
/// others fail with [`CoinError::DuplicateOutput`] without being processed.
pub fn run_batch(
    inputs: &[PathBuf],
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<BatchItem>> {
    config.validate()?;
    std::fs::create_dir_all(&config.output_dir)?;

    info!(
        images = inputs.len(),
        output_dir = %config.output_dir.display(),
        "Starting batch"
    );
    reporter.begin(inputs.len());

    let mut claimed = HashSet::new();
    let targets: Vec<(PathBuf, bool)> = inputs
        .iter()
        .map(|input| {
            let target = result_path(&config.output_dir, input);
            let owner = claimed.insert(target.clone());
            (target, owner)
        })
        .collect();

    let done = AtomicUsize::new(0);
    let items: Vec<BatchItem> = inputs
        .par_iter()
        .zip(targets.par_iter())
        .map(|(input, (target, owner))| {
            let outcome = if *owner {
                process_path(input, target, config)
            } else {
                Err(CoinError::DuplicateOutput(target.clone()))
            };
            if let Err(ref e) = outcome {
                warn!(input = %input.display(), error = %e, "Image failed, continuing");
            }
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.advance(completed);
            BatchItem {
                input: input.clone(),
                outcome,
            }
        })
        .collect();

    reporter.finish();
    Ok(items)
}
