//! Input parsing: a bare sequence or one or more FASTA records

use super::error::SequenceError;

/// One named template sequence, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

/// Split user input into named records.
///
/// Text without a `>` header is a single record named `Sequence_1`. Each
/// record's lines are trimmed and joined; characters are kept as typed so
/// validation can point at the offending base.
pub fn parse_sequence_input(text: &str) -> Result<Vec<SequenceRecord>, SequenceError> {
    if text.trim().is_empty() {
        return Err(SequenceError::EmptyInput);
    }

    let mut records = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_seq = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if current_name.is_some() || !current_seq.is_empty() {
                records.push(finish_record(current_name.take(), &mut current_seq, records.len()));
            }
            current_name = Some(header.trim().to_string());
        } else {
            current_seq.push_str(line);
        }
    }

    if current_name.is_some() || !current_seq.is_empty() {
        records.push(finish_record(current_name, &mut current_seq, records.len()));
    }

    Ok(records)
}

fn finish_record(name: Option<String>, seq: &mut String, index: usize) -> SequenceRecord {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => format!("Sequence_{}", index + 1),
    };
    SequenceRecord {
        name,
        sequence: std::mem::take(seq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_sequence() {
        let records = parse_sequence_input("  atgcatgc\nGGCC  \n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Sequence_1");
        assert_eq!(records[0].sequence, "atgcatgcGGCC");
    }

    #[test]
    fn test_parse_fasta_records() {
        let fasta = ">amp1 first\nACGT\nACGT\n\n>amp2\nGGGG\n>\nTTTT";
        let records = parse_sequence_input(fasta).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "amp1 first");
        assert_eq!(records[0].sequence, "ACGTACGT");
        assert_eq!(records[1].name, "amp2");
        assert_eq!(records[1].sequence, "GGGG");
        assert_eq!(records[2].name, "Sequence_3");
        assert_eq!(records[2].sequence, "TTTT");
    }

    #[test]
    fn test_parse_header_without_sequence() {
        // Kept so validation reports it as empty rather than dropping it silently
        let records = parse_sequence_input(">lonely\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert_eq!(parse_sequence_input(""), Err(SequenceError::EmptyInput));
        assert_eq!(parse_sequence_input(" \n \n"), Err(SequenceError::EmptyInput));
    }
}
