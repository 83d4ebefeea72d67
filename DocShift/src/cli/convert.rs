//! CLI interface for format conversion
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

use super::progress::{DISK, LOOKING_GLASS, print_done, print_step};
use crate::config::ConverterConfig;
use crate::converter::{ConversionPipeline, ConversionRequest, OutputPolicy, Stage};

pub fn execute(
    source: &Path,
    destination: &Path,
    config_path: Option<&PathBuf>,
    cross_format: bool,
    threads: Option<usize>,
    quiet: bool,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => ConverterConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConverterConfig::default(),
    };

    // Flags win over the config file
    if cross_format {
        config.output_policy = OutputPolicy::ByOutputExtension;
    }
    if threads.is_some() {
        config.worker_threads = threads;
    }

    let pipeline = ConversionPipeline::new(&config)?;
    tracing::debug!(
        "Pipeline ready: {} workers, {:?} output policy",
        pipeline.worker_count(),
        pipeline.policy()
    );
    let request = ConversionRequest::new(source, destination);
    let started = Instant::now();

    let report = pipeline.convert_with_progress(&request, &|stage| {
        if quiet {
            return;
        }
        match stage {
            Stage::Reading => print_step(
                1,
                2,
                LOOKING_GLASS,
                &format!("Reading {}...", source.display()),
            ),
            Stage::Writing => print_step(
                2,
                2,
                DISK,
                &format!("Writing {}...", destination.display()),
            ),
            Stage::Idle | Stage::Done | Stage::Failed => {}
        }
    });

    if report.is_success() {
        if !quiet {
            if let Some(plan) = report.plan {
                println!("Converted {} -> {}", plan.reader, plan.writer);
            }
            print_done(started.elapsed());
        }
        return Ok(());
    }

    // Reported by main
    report
        .outcome
        .with_context(|| format!("converting {} -> {}", source.display(), destination.display()))
}
