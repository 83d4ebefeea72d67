//! Two-stage conversion pipeline on a shared worker pool
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! A conversion is `Idle -> Reading -> Writing -> Done`, with `Failed`
//! reachable from both working stages. The read and the write are each
//! handed to the pool as their own unit of work, but the write is only
//! submitted once the read has returned, so one conversion never overlaps
//! itself. Separate conversions share nothing except the pool.

use std::fmt;
use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use super::dispatch::{ConversionPlan, ConversionRequest, OutputPolicy, dispatch};
use super::{read_stage, write_stage};
use crate::config::ConverterConfig;
use crate::error::{Error, Result};

/// Callback invoked on every stage transition.
pub type StageCallback<'a> = &'a dyn Fn(Stage);

/// Where a conversion currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Reading,
    Writing,
    Done,
    Failed,
}

impl Stage {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Reading => "reading",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of one conversion.
#[derive(Debug)]
pub struct ConversionReport {
    /// The request that was run.
    pub request: ConversionRequest,
    /// Codecs chosen by dispatch, absent if dispatch itself failed.
    pub plan: Option<ConversionPlan>,
    /// `Ok` once the output file has been written.
    pub outcome: Result<()>,
    /// Terminal stage: [`Stage::Done`] or [`Stage::Failed`].
    pub stage: Stage,
}

impl ConversionReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    /// Human-readable completion notice.
    #[must_use]
    pub fn notice(&self) -> String {
        match &self.outcome {
            Ok(()) => format!(
                "Conversion complete: {} -> {}",
                self.request.input.display(),
                self.request.output.display()
            ),
            Err(e) => format!("Conversion failed: {e}"),
        }
    }
}

/// Runs conversions on a long-lived worker pool.
///
/// Cloning is cheap and clones share the pool.
#[derive(Clone)]
pub struct ConversionPipeline {
    pool: Arc<ThreadPool>,
    policy: OutputPolicy,
}

impl fmt::Debug for ConversionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionPipeline")
            .field("workers", &self.pool.current_num_threads())
            .field("policy", &self.policy)
            .finish()
    }
}

impl ConversionPipeline {
    /// Build a pipeline and its worker pool.
    ///
    /// The pool is sized from `config.worker_threads`, falling back to
    /// rayon's default (one thread per available core).
    ///
    /// # Errors
    /// Returns [`Error::WorkerPool`] if the pool cannot be started.
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("docshift-worker-{index}"));
        if let Some(threads) = config.worker_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().map_err(|e| Error::WorkerPool(e.to_string()))?;

        tracing::debug!(
            "Started worker pool with {} threads",
            pool.current_num_threads()
        );

        Ok(ConversionPipeline {
            pool: Arc::new(pool),
            policy: config.output_policy,
        })
    }

    /// Pipeline with default configuration.
    ///
    /// # Errors
    /// Returns [`Error::WorkerPool`] if the pool cannot be started.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ConverterConfig::default())
    }

    #[must_use]
    pub fn policy(&self) -> OutputPolicy {
        self.policy
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run one conversion, blocking until it reaches a terminal stage.
    pub fn convert(&self, request: &ConversionRequest) -> ConversionReport {
        self.convert_with_progress(request, &|_| {})
    }

    /// Run one conversion, reporting each stage transition to `on_stage`.
    pub fn convert_with_progress(
        &self,
        request: &ConversionRequest,
        on_stage: StageCallback<'_>,
    ) -> ConversionReport {
        tracing::info!(
            "Converting {} -> {}",
            request.input.display(),
            request.output.display()
        );

        on_stage(Stage::Reading);
        let plan = match dispatch(request, self.policy) {
            Ok(plan) => plan,
            Err(e) => return self.finish(request, None, Err(e), on_stage),
        };

        let document = match self.pool.install(|| read_stage(&plan, &request.input)) {
            Ok(document) => document,
            Err(e) => return self.finish(request, Some(plan), Err(e), on_stage),
        };

        on_stage(Stage::Writing);
        let outcome = self
            .pool
            .install(|| write_stage(&plan, document, &request.output));

        self.finish(request, Some(plan), outcome, on_stage)
    }

    /// Fire-and-forget: queue the conversion on the pool and return at once.
    ///
    /// `on_complete` runs on a worker thread when the conversion finishes.
    /// Nothing guards the output path, so concurrent submissions writing
    /// the same file race and the last writer wins.
    pub fn submit<F>(&self, request: ConversionRequest, on_complete: F)
    where
        F: FnOnce(ConversionReport) + Send + 'static,
    {
        let pipeline = self.clone();
        self.pool.spawn(move || {
            let report = pipeline.convert(&request);
            on_complete(report);
        });
    }

    fn finish(
        &self,
        request: &ConversionRequest,
        plan: Option<ConversionPlan>,
        outcome: Result<()>,
        on_stage: StageCallback<'_>,
    ) -> ConversionReport {
        let stage = if outcome.is_ok() { Stage::Done } else { Stage::Failed };
        on_stage(stage);

        let report = ConversionReport {
            request: request.clone(),
            plan,
            outcome,
            stage,
        };
        if report.is_success() {
            tracing::info!("{}", report.notice());
        } else {
            tracing::warn!("{}", report.notice());
        }
        report
    }
}
