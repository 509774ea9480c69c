//! Data types for primer design

use serde::{Deserialize, Serialize};

/// How primers are picked from the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Scan every window of every allowed length and keep the pair whose
    /// GC content is closest to the target
    VariableLength,
    /// First N bases forward, reverse complement of the last N bases
    FixedLength,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::VariableLength
    }
}

impl SearchStrategy {
    pub fn description(&self) -> String {
        match self {
            Self::VariableLength => "Variable length (best GC/Tm-filtered pair)".to_string(),
            Self::FixedLength => "Fixed length (sequence ends)".to_string(),
        }
    }
}

/// Thread count configuration for multi-record batches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadCount {
    /// Use all available CPU cores
    Auto,
    /// Use a specific number of threads
    Fixed(usize),
}

impl Default for ThreadCount {
    fn default() -> Self {
        Self::Auto
    }
}

impl ThreadCount {
    /// Get the actual number of threads to use
    pub fn get_count(&self) -> usize {
        match self {
            Self::Auto => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            Self::Fixed(n) => (*n).max(1),
        }
    }
}

/// Design parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParams {
    pub strategy: SearchStrategy,
    pub min_primer_length: usize,
    pub max_primer_length: usize,
    pub fixed_primer_length: usize,
    pub min_gc_percent: f64,
    pub max_gc_percent: f64,
    pub min_tm: f64,
    pub max_tm: f64,
    pub target_gc_percent: f64,
    pub thread_count: ThreadCount,
}

impl Default for DesignParams {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::VariableLength,
            min_primer_length: 20,
            max_primer_length: 25,
            fixed_primer_length: 20,
            min_gc_percent: 40.0,
            max_gc_percent: 60.0,
            min_tm: 50.0,
            max_tm: 62.0,
            target_gc_percent: 50.0,
            thread_count: ThreadCount::Auto,
        }
    }
}

impl DesignParams {
    pub fn fixed_length() -> Self {
        Self {
            strategy: SearchStrategy::FixedLength,
            ..Self::default()
        }
    }

    /// Shortest template the selected strategy accepts
    pub fn minimum_sequence_length(&self) -> usize {
        match self.strategy {
            SearchStrategy::VariableLength => self.min_primer_length.max(1),
            SearchStrategy::FixedLength => 2 * self.fixed_primer_length.max(1),
        }
    }

    /// Both GC% and Tm inside their inclusive windows
    pub fn accepts(&self, gc_percent: f64, tm: f64) -> bool {
        (self.min_gc_percent..=self.max_gc_percent).contains(&gc_percent)
            && (self.min_tm..=self.max_tm).contains(&tm)
    }
}

/// A single primer with its heuristic properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primer {
    pub sequence: String,
    /// 0-based start of the template span this primer was taken from
    pub start: usize,
    pub gc_percent: f64,
    pub tm: f64,
}

impl Primer {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Template span covered, as a half-open range
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len()
    }
}

/// Forward/reverse primer pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerPair {
    pub forward: Primer,
    pub reverse: Primer,
    /// Distance of the forward primer's GC% from the target
    pub score: f64,
    pub strategy: SearchStrategy,
}

/// Counters collected while scanning a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub windows_scanned: usize,
    pub forward_passed: usize,
    pub pairs_passed: usize,
}

/// Outcome of designing primers for one sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub name: String,
    pub sequence_length: usize,
    pub pair: Option<PrimerPair>,
    pub stats: SearchStats,
}

/// A record that failed validation inside a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFailure {
    pub name: String,
    pub reason: String,
}

/// Complete results of one "Design Primers" invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRun {
    pub params: DesignParams,
    pub reports: Vec<DesignReport>,
    pub failures: Vec<RecordFailure>,
}

impl DesignRun {
    pub fn new(params: DesignParams) -> Self {
        Self {
            params,
            reports: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn pairs_found(&self) -> usize {
        self.reports.iter().filter(|r| r.pair.is_some()).count()
    }
}
