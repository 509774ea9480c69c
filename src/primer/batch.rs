//! Designing primers for every record of an input
//!
//! Records are independent, so multi-record inputs are spread over a rayon
//! pool. Each record still runs the sequential search.

use log::{debug, warn};
use rayon::prelude::*;

use super::error::SequenceError;
use super::fasta::{parse_sequence_input, SequenceRecord};
use super::finder::design_sequence;
use super::types::{DesignParams, DesignReport, DesignRun, RecordFailure};

/// Parse `input` and design primers for each record.
///
/// A single-record input propagates its validation error. With several
/// records, failures are collected in `DesignRun::failures` and the rest
/// are still designed.
pub fn design_run(input: &str, params: &DesignParams) -> Result<DesignRun, SequenceError> {
    let records = parse_sequence_input(input)?;
    let mut run = DesignRun::new(params.clone());

    if let [record] = records.as_slice() {
        let report = design_sequence(&record.name, &record.sequence, params)?;
        run.reports.push(report);
        return Ok(run);
    }

    for (record, outcome) in records.iter().zip(design_batch(&records, params)) {
        match outcome {
            Ok(report) => run.reports.push(report),
            Err(e) => run.failures.push(RecordFailure {
                name: record.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    debug!(
        "Designed {} records: {} pairs found, {} rejected",
        records.len(),
        run.pairs_found(),
        run.failures.len()
    );

    Ok(run)
}

/// Design every record in parallel; results are in input order.
pub fn design_batch(
    records: &[SequenceRecord],
    params: &DesignParams,
) -> Vec<Result<DesignReport, SequenceError>> {
    let design_all = || -> Vec<Result<DesignReport, SequenceError>> {
        records
            .par_iter()
            .map(|r| design_sequence(&r.name, &r.sequence, params))
            .collect()
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(params.thread_count.get_count())
        .build()
    {
        Ok(pool) => pool.install(design_all),
        Err(e) => {
            warn!("Could not build thread pool ({}); using the global pool", e);
            design_all()
        }
    }
}
