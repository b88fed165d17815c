use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::token::Token;

/// A token-record stream could not be loaded.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read token records: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad token record on line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// Load externally produced tokens from JSONL: one record per line, e.g.
/// `{"kind":"property_name","value":"a"}`. Blank lines are skipped.
///
/// This is an interchange loader, not a tokenizer; the records were
/// classified by whatever produced the stream.
pub fn read_tokens(reader: impl BufRead) -> Result<Vec<Token>, RecordError> {
    let mut tokens = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let token = serde_json::from_str(trimmed).map_err(|source| RecordError::Malformed {
            line: idx + 1,
            source,
        })?;
        tokens.push(token);
    }
    Ok(tokens)
}

pub fn read_tokens_file(path: &Path) -> Result<Vec<Token>, RecordError> {
    read_tokens(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_and_skips_blank_lines() {
        let input = "{\"kind\":\"object_start\"}\n\n{\"kind\":\"property_name\",\"value\":\"a\"}\n{\"kind\":\"integer\",\"value\":1}\n{\"kind\":\"object_end\"}\n";
        let tokens = read_tokens(input.as_bytes()).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::ObjectStart,
                Token::PropertyName("a".to_string()),
                Token::Integer(1),
                Token::ObjectEnd,
            ]
        );
    }

    #[test]
    fn malformed_record_reports_line_number() {
        let input = "{\"kind\":\"object_start\"}\nnot json\n";
        let err = read_tokens(input.as_bytes()).unwrap_err();
        match err {
            RecordError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
