//! Field delimiter detection.

/// Delimiters tried in order; earlier entries win ties.
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Fallback when no candidate splits the header.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Number of non-blank lines sampled.
const SAMPLE_LINES: usize = 10;

/// Picks the delimiter that splits the sampled lines most consistently.
///
/// A candidate must split the first line into at least two fields. Among
/// those, the one whose field count matches the header on the most sampled
/// lines wins, then the one producing more fields.
pub fn detect_delimiter(text: &str) -> u8 {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();
    let Some(first) = sample.first() else {
        return DEFAULT_DELIMITER;
    };

    let mut best: Option<(u8, usize, usize)> = None;
    for candidate in CANDIDATE_DELIMITERS {
        let header_fields = count_fields(first, candidate);
        if header_fields < 2 {
            continue;
        }
        let consistent = sample
            .iter()
            .filter(|line| count_fields(line, candidate) == header_fields)
            .count();
        let better = match best {
            None => true,
            Some((_, best_consistent, best_fields)) => {
                (consistent, header_fields) > (best_consistent, best_fields)
            }
        };
        if better {
            best = Some((candidate, consistent, header_fields));
        }
    }

    best.map_or(DEFAULT_DELIMITER, |(delimiter, _, _)| delimiter)
}

/// Counts fields on one line, ignoring delimiters inside double quotes.
fn count_fields(line: &str, delimiter: u8) -> usize {
    let mut fields = 1;
    let mut in_quotes = false;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            fields += 1;
        }
    }
    fields
}
