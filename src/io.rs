use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::io::{COMMENT_MARKER, TSV_HEADER, TSV_SEPARATOR};
use crate::data::RankingPair;
use crate::errors::PairGenError;
use crate::types::{GroupId, Label};

/// Parallel group-id and label columns read from an observation file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Observations {
    pub group_ids: Vec<GroupId>,
    pub labels: Vec<Label>,
}

impl Observations {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Output encoding for generated pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairFormat {
    /// `winner<TAB>loser<TAB>weight` rows behind a header line.
    #[default]
    Tsv,
    /// One JSON object per line.
    JsonLines,
}

/// Reads `group_id label` rows separated by whitespace.
///
/// Blank lines and lines starting with `#` are ignored. A first data row that
/// does not parse as numbers is treated as a header and skipped; any later
/// malformed row fails with its 1-based line number.
pub fn read_observations<R: BufRead>(reader: R) -> Result<Observations, PairGenError> {
    let mut observations = Observations::default();
    let mut saw_data_row = false;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        match parse_row(trimmed) {
            Ok((group_id, label)) => {
                observations.group_ids.push(group_id);
                observations.labels.push(label);
            }
            Err(_) if !saw_data_row => {
                warn!(
                    "[rankpairs] skipping header row at line {}: '{}'",
                    line_no, trimmed
                );
            }
            Err(reason) => {
                return Err(PairGenError::Parse {
                    line: line_no,
                    reason,
                });
            }
        }
        saw_data_row = true;
    }

    Ok(observations)
}

fn parse_row(row: &str) -> Result<(GroupId, Label), String> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    let [group_field, label_field] = fields.as_slice() else {
        return Err(format!(
            "expected 2 columns (group_id label), found {}",
            fields.len()
        ));
    };
    let group_id = group_field
        .parse::<GroupId>()
        .map_err(|_| format!("invalid group id '{group_field}'"))?;
    let label = label_field
        .parse::<Label>()
        .map_err(|_| format!("invalid label '{label_field}'"))?;
    Ok((group_id, label))
}

/// Writes `pairs` in the requested format.
pub fn write_pairs<W: Write>(
    mut writer: W,
    pairs: &[RankingPair],
    format: PairFormat,
) -> Result<(), PairGenError> {
    match format {
        PairFormat::Tsv => {
            writeln!(writer, "{TSV_HEADER}")?;
            for pair in pairs {
                writeln!(
                    writer,
                    "{}{TSV_SEPARATOR}{}{TSV_SEPARATOR}{}",
                    pair.winner, pair.loser, pair.weight
                )?;
            }
        }
        PairFormat::JsonLines => {
            for pair in pairs {
                serde_json::to_writer(&mut writer, pair).map_err(std::io::Error::from)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_and_skips_comments_blank_lines_and_header() {
        let input = "group\tlabel\n# query 1\n1\t3.0\n1 1\n\n2\t0.5\n";
        let observations = read_observations(input.as_bytes()).unwrap();
        assert_eq!(observations.group_ids, vec![1, 1, 2]);
        assert_eq!(observations.labels, vec![3.0, 1.0, 0.5]);
        assert_eq!(observations.len(), 3);
    }

    #[test]
    fn malformed_rows_after_data_report_line_numbers() {
        let input = "1 2.0\n1 oops\n";
        let err = read_observations(input.as_bytes()).unwrap_err();
        match err {
            PairGenError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("oops"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = read_observations("1 2.0\n1 2.0 9\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PairGenError::Parse { line: 2, .. }));
    }

    #[test]
    fn writes_tsv_with_header() {
        let mut buf = Vec::new();
        write_pairs(
            &mut buf,
            &[RankingPair::new(0, 1), RankingPair::new(2, 1)],
            PairFormat::Tsv,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "winner\tloser\tweight\n0\t1\t1\n2\t1\t1\n"
        );
    }

    #[test]
    fn writes_json_lines() {
        let mut buf = Vec::new();
        write_pairs(&mut buf, &[RankingPair::new(4, 3)], PairFormat::JsonLines).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed: RankingPair = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, RankingPair::new(4, 3));
        assert!(text.ends_with('\n'));
    }
}
