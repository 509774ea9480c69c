//! Primer search
//!
//! Two strategies are offered. The variable-length search walks every
//! window of every allowed primer length, keeps the windows whose forward
//! and reverse-complement strands both pass the GC% and Tm windows, and
//! returns the pair whose GC content is closest to the target. The
//! fixed-length selection simply takes both ends of the template.

use log::debug;

use super::error::SequenceError;
use super::sequence::{gc_content, melting_temperature, reverse_complement, validate_sequence};
use super::types::{DesignParams, DesignReport, Primer, PrimerPair, SearchStats, SearchStrategy};

/// Variable-length search with the default parameters.
///
/// `Ok(None)` means the template was valid but no window qualified.
pub fn find_best_primer_pair(sequence: &str) -> Result<Option<PrimerPair>, SequenceError> {
    find_best_primer_pair_with(sequence, &DesignParams::default())
}

/// Variable-length search with explicit parameters. `params.strategy` is ignored.
pub fn find_best_primer_pair_with(
    sequence: &str,
    params: &DesignParams,
) -> Result<Option<PrimerPair>, SequenceError> {
    let seq = validate_sequence(sequence, params.min_primer_length.max(1))?;
    let (pair, _) = search_variable_length(&seq, params);
    Ok(pair)
}

/// Fixed-length selection with the default parameters.
pub fn compute_fixed_primers(sequence: &str) -> Result<PrimerPair, SequenceError> {
    compute_fixed_primers_with(sequence, &DesignParams::fixed_length())
}

/// Fixed-length selection with explicit parameters. `params.strategy` is ignored.
pub fn compute_fixed_primers_with(
    sequence: &str,
    params: &DesignParams,
) -> Result<PrimerPair, SequenceError> {
    let n = params.fixed_primer_length.max(1);
    let seq = validate_sequence(sequence, 2 * n)?;
    Ok(select_sequence_ends(&seq, n, params.target_gc_percent))
}

/// Validate one named sequence and run the strategy selected in `params`.
pub fn design_sequence(
    name: &str,
    sequence: &str,
    params: &DesignParams,
) -> Result<DesignReport, SequenceError> {
    let seq = validate_sequence(sequence, params.minimum_sequence_length())?;

    let (pair, stats) = match params.strategy {
        SearchStrategy::VariableLength => search_variable_length(&seq, params),
        SearchStrategy::FixedLength => {
            let n = params.fixed_primer_length.max(1);
            let pair = select_sequence_ends(&seq, n, params.target_gc_percent);
            // Both ends are read, neither is filtered
            let stats = SearchStats {
                windows_scanned: 2,
                ..SearchStats::default()
            };
            (Some(pair), stats)
        }
    };

    Ok(DesignReport {
        name: name.to_string(),
        sequence_length: seq.len(),
        pair,
        stats,
    })
}

/// Exhaustive scan over lengths `min..=max` (outer) and start offsets (inner).
///
/// `seq` must already be validated. Ties keep the earliest candidate.
pub(crate) fn search_variable_length(
    seq: &str,
    params: &DesignParams,
) -> (Option<PrimerPair>, SearchStats) {
    let bytes = seq.as_bytes();
    let mut stats = SearchStats::default();
    let mut best: Option<PrimerPair> = None;
    let mut best_score = f64::INFINITY;

    for length in params.min_primer_length.max(1)..=params.max_primer_length {
        if length > bytes.len() {
            break;
        }

        for start in 0..=(bytes.len() - length) {
            stats.windows_scanned += 1;

            let forward_seq = &seq[start..start + length];
            let forward_gc = gc_content(forward_seq);
            let forward_tm = melting_temperature(forward_seq);
            if !params.accepts(forward_gc, forward_tm) {
                continue;
            }
            stats.forward_passed += 1;

            let reverse_seq = reverse_complement(forward_seq);
            let reverse_gc = gc_content(&reverse_seq);
            let reverse_tm = melting_temperature(&reverse_seq);
            if !params.accepts(reverse_gc, reverse_tm) {
                continue;
            }
            stats.pairs_passed += 1;

            let score = (forward_gc - params.target_gc_percent).abs();
            if score < best_score {
                best_score = score;
                best = Some(PrimerPair {
                    forward: Primer {
                        sequence: forward_seq.to_string(),
                        start,
                        gc_percent: forward_gc,
                        tm: forward_tm,
                    },
                    reverse: Primer {
                        sequence: reverse_seq,
                        start,
                        gc_percent: reverse_gc,
                        tm: reverse_tm,
                    },
                    score,
                    strategy: SearchStrategy::VariableLength,
                });
            }
        }
    }

    debug!(
        "Scanned {} windows over {} bp: {} forward passed, {} pairs passed, best score {:?}",
        stats.windows_scanned,
        seq.len(),
        stats.forward_passed,
        stats.pairs_passed,
        best.as_ref().map(|p| p.score)
    );

    (best, stats)
}

/// First `n` bases forward, reverse complement of the last `n` bases.
///
/// `seq` must be validated and at least `n` long. GC% and Tm are reported
/// but not used as filters.
fn select_sequence_ends(seq: &str, n: usize, target_gc_percent: f64) -> PrimerPair {
    let tail_start = seq.len() - n;
    let forward_seq = &seq[..n];
    let reverse_seq = reverse_complement(&seq[tail_start..]);

    let forward_gc = gc_content(forward_seq);
    let forward = Primer {
        sequence: forward_seq.to_string(),
        start: 0,
        gc_percent: forward_gc,
        tm: melting_temperature(forward_seq),
    };
    let reverse = Primer {
        gc_percent: gc_content(&reverse_seq),
        tm: melting_temperature(&reverse_seq),
        sequence: reverse_seq,
        start: tail_start,
    };

    debug!("Selected fixed {} bp ends of {} bp template", n, seq.len());

    PrimerPair {
        forward,
        reverse,
        score: (forward_gc - target_gc_percent).abs(),
        strategy: SearchStrategy::FixedLength,
    }
}
