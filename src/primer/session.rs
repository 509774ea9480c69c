//! Command handler behind the front end's buttons

use std::path::Path;

use super::batch::design_run;
use super::error::{ExportError, SequenceError};
use super::report::{export_text, render_run, save_run_json};
use super::types::{DesignParams, DesignRun};

/// What the front end can ask for
pub trait PrimerCommands {
    /// Design primers for `input`; on success the run becomes the current result.
    fn design_primers(&mut self, input: &str) -> Result<&DesignRun, SequenceError>;

    /// Forget the current result.
    fn reset(&mut self);

    /// Write the current result's text to `path`.
    fn export(&self, path: &Path) -> Result<(), ExportError>;
}

/// Holds the parameters and the most recent successful run.
#[derive(Debug, Clone, Default)]
pub struct DesignSession {
    pub params: DesignParams,
    run: Option<DesignRun>,
}

impl DesignSession {
    pub fn new(params: DesignParams) -> Self {
        Self { params, run: None }
    }

    pub fn current(&self) -> Option<&DesignRun> {
        self.run.as_ref()
    }

    /// Rendered text of the current run, empty when there is none
    pub fn rendered(&self) -> String {
        self.run.as_ref().map(render_run).unwrap_or_default()
    }

    /// Replace the current run with one loaded from disk; its parameters
    /// become the session's.
    pub fn restore(&mut self, run: DesignRun) {
        self.params = run.params.clone();
        self.run = Some(run);
    }

    /// Install the outcome of a design computed elsewhere (e.g. on a worker
    /// thread). An error clears the current run.
    pub fn accept(
        &mut self,
        outcome: Result<DesignRun, SequenceError>,
    ) -> Result<&DesignRun, SequenceError> {
        self.run = None;
        Ok(self.run.insert(outcome?))
    }

    pub fn save_json(&self, path: &Path) -> Result<(), ExportError> {
        let run = self.run.as_ref().ok_or(ExportError::NothingToExport)?;
        save_run_json(run, path)
    }
}

impl PrimerCommands for DesignSession {
    fn design_primers(&mut self, input: &str) -> Result<&DesignRun, SequenceError> {
        let outcome = design_run(input, &self.params);
        self.accept(outcome)
    }

    fn reset(&mut self) {
        self.run = None;
    }

    fn export(&self, path: &Path) -> Result<(), ExportError> {
        export_text(&self.rendered(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primer::report::NO_PAIR_MESSAGE;
    use crate::primer::types::SearchStrategy;

    #[test]
    fn test_design_then_reset() {
        let mut session = DesignSession::default();
        let run = session.design_primers("GCGCGCGCGCATATATATAT").unwrap();
        assert_eq!(run.pairs_found(), 1);
        assert!(session.rendered().starts_with("Forward Primer:"));

        session.reset();
        assert!(session.current().is_none());
        assert_eq!(session.rendered(), "");
    }

    #[test]
    fn test_failed_design_clears_previous_result() {
        let mut session = DesignSession::default();
        session.design_primers("GCGCGCGCGCATATATATAT").unwrap();

        let err = session.design_primers("GCGCGCGCGCATATATATAX").unwrap_err();
        assert!(matches!(err, SequenceError::InvalidAlphabet { found: 'X', .. }));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_accept_outcome_from_worker() {
        let params = DesignParams::default();
        let outcome = std::thread::spawn(move || design_run("GCGCGCGCGCATATATATAT", &params))
            .join()
            .unwrap();

        let mut session = DesignSession::default();
        assert_eq!(session.accept(outcome).unwrap().pairs_found(), 1);

        assert_eq!(session.accept(Err(SequenceError::EmptyInput)), Err(SequenceError::EmptyInput));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_no_pair_is_a_result() {
        let mut session = DesignSession::default();
        session.design_primers(&"T".repeat(25)).unwrap();
        assert_eq!(session.rendered(), NO_PAIR_MESSAGE);
    }

    #[test]
    fn test_export_without_result() {
        let session = DesignSession::default();
        let path = std::env::temp_dir().join("primer_design_session_unused.txt");
        assert!(matches!(session.export(&path), Err(ExportError::NothingToExport)));
        assert!(matches!(session.save_json(&path), Err(ExportError::NothingToExport)));
    }

    #[test]
    fn test_restore_takes_params() {
        let mut source = DesignSession::new(DesignParams::fixed_length());
        let run = source.design_primers(&"ACGT".repeat(10)).unwrap().clone();

        let mut session = DesignSession::default();
        session.restore(run);
        assert_eq!(session.params.strategy, SearchStrategy::FixedLength);
        assert_eq!(session.rendered(), source.rendered());
    }
}
