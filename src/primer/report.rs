//! Rendering design results as text and writing them to disk

use std::path::Path;

use log::info;

use super::error::ExportError;
use super::types::{DesignReport, DesignRun, Primer, PrimerPair};

/// File name offered when exporting the rendered text
pub const DEFAULT_EXPORT_FILE: &str = "primer_results.txt";

/// Message shown when a valid template has no qualifying pair
pub const NO_PAIR_MESSAGE: &str = "No suitable primer pairs found.";

fn render_primer(title: &str, primer: &Primer) -> String {
    format!(
        "{}:\nSequence: {}\nGC Content: {:.2}%\nTm: {:.2}°C",
        title, primer.sequence, primer.gc_percent, primer.tm
    )
}

/// Forward block, blank line, reverse block.
pub fn render_pair(pair: &PrimerPair) -> String {
    format!(
        "{}\n\n{}",
        render_primer("Forward Primer", &pair.forward),
        render_primer("Reverse Primer", &pair.reverse)
    )
}

pub fn render_report(report: &DesignReport) -> String {
    match &report.pair {
        Some(pair) => render_pair(pair),
        None => NO_PAIR_MESSAGE.to_string(),
    }
}

/// Text for a whole run. A lone record renders exactly like `render_report`;
/// several records each get a `>name (N bp)` heading.
pub fn render_run(run: &DesignRun) -> String {
    if run.failures.is_empty() {
        if let [report] = run.reports.as_slice() {
            return render_report(report);
        }
    }

    let mut sections: Vec<String> = run
        .reports
        .iter()
        .map(|r| format!(">{} ({} bp)\n{}", r.name, r.sequence_length, render_report(r)))
        .collect();
    sections.extend(
        run.failures
            .iter()
            .map(|f| format!(">{}\nError: {}", f.name, f.reason)),
    );
    sections.join("\n\n")
}

/// Write already-rendered result text to `path`.
pub fn export_text(content: &str, path: &Path) -> Result<(), ExportError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    std::fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported results to {}", path.display());
    Ok(())
}

/// Save a complete run, parameters included, as pretty JSON.
pub fn save_run_json(run: &DesignRun, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(run)?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {} design reports to {}", run.reports.len(), path.display());
    Ok(())
}

pub fn load_run_json(path: &Path) -> Result<DesignRun, ExportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primer::batch::design_run;
    use crate::primer::types::{DesignParams, RecordFailure};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("primer_design_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_render_pair_layout() {
        let run = design_run("GCGCGCGCGCATATATATAT", &DesignParams::default()).unwrap();
        let text = render_run(&run);
        assert_eq!(
            text,
            "Forward Primer:\n\
             Sequence: GCGCGCGCGCATATATATAT\n\
             GC Content: 50.00%\n\
             Tm: 60.00°C\n\
             \n\
             Reverse Primer:\n\
             Sequence: ATATATATATGCGCGCGCGC\n\
             GC Content: 50.00%\n\
             Tm: 60.00°C"
        );
    }

    #[test]
    fn test_render_fixed_pair_rounds_to_two_places() {
        let pair = crate::primer::finder::compute_fixed_primers(
            "GCGAAAAAAAAAAAAAAAAAGCGCGCGCGCATATATATAT",
        )
        .unwrap();
        let text = render_pair(&pair);
        assert!(text.starts_with(
            "Forward Primer:\nSequence: GCGAAAAAAAAAAAAAAAAA\nGC Content: 15.00%\nTm: 46.00°C\n\n"
        ));
        assert!(text.ends_with(
            "Reverse Primer:\nSequence: ATATATATATGCGCGCGCGC\nGC Content: 50.00%\nTm: 60.00°C"
        ));
    }

    #[test]
    fn test_render_no_pair() {
        let run = design_run(&"A".repeat(30), &DesignParams::default()).unwrap();
        assert_eq!(render_run(&run), NO_PAIR_MESSAGE);
    }

    #[test]
    fn test_render_multi_record() {
        let mut run = design_run(
            ">one\nGCGCGCGCGCATATATATAT\n>two\nAAAAAAAAAAAAAAAAAAAAAAAA",
            &DesignParams::default(),
        )
        .unwrap();
        run.failures.push(RecordFailure {
            name: "three".to_string(),
            reason: "bad base".to_string(),
        });

        let text = render_run(&run);
        assert!(text.starts_with(">one (20 bp)\nForward Primer:\n"));
        assert!(text.contains(">two (24 bp)\nNo suitable primer pairs found."));
        assert!(text.ends_with(">three\nError: bad base"));
    }

    #[test]
    fn test_export_refuses_empty() {
        let path = temp_path("empty.txt");
        assert!(matches!(
            export_text("  \n", &path),
            Err(ExportError::NothingToExport)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_writes_file() {
        let path = temp_path("export.txt");
        export_text("Forward Primer:\nSequence: ACGT\n", &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Forward Primer:\nSequence: ACGT");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_reports_io_error() {
        let path = temp_path("missing_dir").join("out.txt");
        assert!(matches!(
            export_text("content", &path),
            Err(ExportError::Io { .. })
        ));
    }

    #[test]
    fn test_json_save_and_load() {
        let run = design_run(
            ">a\nGCGCGCGCGCATATATATATGGCC\n>b\nACGTN\n>c\nGCGCGCGCGCATATATATATGCGCGCGCGCATATATATAT",
            &DesignParams::fixed_length(),
        )
        .unwrap();
        assert_eq!(run.reports.len(), 1);
        assert_eq!(run.failures.len(), 2);

        let path = temp_path("run.json");
        save_run_json(&run, &path).unwrap();
        let loaded = load_run_json(&path).unwrap();
        assert_eq!(loaded, run);
        let _ = std::fs::remove_file(&path);
    }
}
