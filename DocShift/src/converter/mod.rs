//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Format conversion
//!
//! - [`dispatch`]: picks the reader and writer codecs from file extensions
//! - [`pipeline`]: runs read and write as two units of work on a worker pool
//!
//! [`convert_file`] is the synchronous shortcut for callers that don't
//! need a pool.

pub mod dispatch;
pub mod pipeline;

use std::path::Path;

use crate::error::Result;
use crate::formats::{self, Document};

pub use dispatch::{
    ConversionPlan, ConversionRequest, FileFormat, OutputPolicy, dispatch, transcode,
};
pub use pipeline::{ConversionPipeline, ConversionReport, Stage, StageCallback};

/// Convert `source` into `dest` on the calling thread.
///
/// # Errors
/// Returns the dispatch, parse, or IO error that stopped the conversion.
/// Nothing is written unless the source parsed.
pub fn convert_file<P: AsRef<Path>>(source: P, dest: P, policy: OutputPolicy) -> Result<()> {
    let request = ConversionRequest::new(source.as_ref(), dest.as_ref());
    tracing::info!(
        "Converting {:?} -> {:?}",
        request.input,
        request.output
    );

    let plan = dispatch(&request, policy)?;
    let document = read_stage(&plan, &request.input)?;
    write_stage(&plan, document, &request.output)?;

    tracing::info!("Conversion complete");
    Ok(())
}

pub(crate) fn read_stage(plan: &ConversionPlan, input: &Path) -> Result<Document> {
    formats::read_document(plan.reader, input)
}

pub(crate) fn write_stage(plan: &ConversionPlan, document: Document, output: &Path) -> Result<()> {
    let document = transcode(document, plan.writer)?;
    formats::write_document(&document, output)
}
