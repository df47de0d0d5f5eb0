//! Exclusion file parsing.

use std::io::{self, BufRead};

/// Reads one channel name per line, trimming whitespace and dropping blank
/// lines. Duplicates are kept.
pub fn parse_exclusions(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut channels = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            channels.push(name.to_string());
        }
    }

    Ok(channels)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn drops_blank_and_whitespace_lines() {
        let input = "channel1\n\n \nchannel2\n";
        let channels = parse_exclusions(input.as_bytes()).unwrap();
        assert_eq!(channels, vec!["channel1", "channel2"]);
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let channels = parse_exclusions("".as_bytes()).unwrap();
        assert!(channels.is_empty());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let input = "  general \t\r\n\trandom";
        let channels = parse_exclusions(input.as_bytes()).unwrap();
        assert_eq!(channels, vec!["general", "random"]);
    }

    #[test]
    fn keeps_duplicates() {
        let channels = parse_exclusions("dup\ndup\n".as_bytes()).unwrap();
        assert_eq!(channels, vec!["dup", "dup"]);
    }

    #[test]
    fn surfaces_invalid_utf8() {
        let input: &[u8] = &[b'o', b'k', b'\n', 0xff, 0xfe, b'\n'];
        let err = parse_exclusions(input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
