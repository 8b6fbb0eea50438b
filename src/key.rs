//! Row key construction and parsing for entities and edges, and the
//! prefix scan ranges built on top of them.
//!
//! Flag byte values are load-bearing: `ENTITY (0x01) < DIRECTED_CORRECT
//! (0x02) < DIRECTED_INVERTED (0x03) < UNDIRECTED (0x04)` is exactly what
//! lets a single range cover "edges only" for a vertex prefix. Changing
//! these values is a format-breaking change.

use crate::error::{CodecError, Result};
use crate::escape::{escape, unescape, DELIMITER, DELIMITER_PLUS_ONE};
use crate::options::CodecOptions;

pub const ENTITY: u8 = 1;
pub const DIRECTED_CORRECT: u8 = 2;
pub const DIRECTED_INVERTED: u8 = 3;
pub const UNDIRECTED: u8 = 4;

/// `escape(vertex) ++ [DELIMITER, ENTITY]`.
pub fn build_entity_row(vertex_bytes: &[u8]) -> Vec<u8> {
    let mut row = escape(vertex_bytes);
    row.push(DELIMITER);
    row.push(ENTITY);
    row
}

pub fn is_entity_row(row: &[u8]) -> bool {
    row.last() == Some(&ENTITY)
}

/// Strips the trailing `[DELIMITER, ENTITY]` and unescapes the remainder.
pub fn parse_entity_row(row: &[u8]) -> Result<Vec<u8>> {
    let body_len = row.len().saturating_sub(2);
    unescape(&row[..body_len])
}

/// Builds the one or two row keys for an edge. A self-edge (`src == dst`)
/// produces only the first key.
pub fn build_edge_rows(src: &[u8], dst: &[u8], directed: bool) -> (Vec<u8>, Option<Vec<u8>>) {
    let (f1, f2) = if directed { (DIRECTED_CORRECT, DIRECTED_INVERTED) } else { (UNDIRECTED, UNDIRECTED) };

    let key1 = build_edge_row(src, f1, dst);
    if src == dst {
        return (key1, None);
    }
    let key2 = build_edge_row(dst, f2, src);
    (key1, Some(key2))
}

fn build_edge_row(first: &[u8], flag: u8, second: &[u8]) -> Vec<u8> {
    let mut row = escape(first);
    row.push(DELIMITER);
    row.push(flag);
    row.push(DELIMITER);
    row.extend(escape(second));
    row.push(DELIMITER);
    row.push(flag);
    row
}

/// Parses an edge row key, returning `(source, destination, directed)`.
///
/// The `DIRECTED_INVERTED` flag is ambiguous on its own about which field
/// is the caller's original source: `options` decides whether to preserve
/// the stored (byte-swapped) order or canonicalize it back.
pub fn parse_edge_row(row: &[u8], options: &CodecOptions) -> Result<(Vec<u8>, Vec<u8>, bool)> {
    if row.is_empty() {
        return Err(CodecError::BadDelimCount { found: 0 });
    }
    let search_end = row.len() - 1;
    let mut positions = [0usize; 3];
    let mut found = 0usize;
    for (i, &b) in row[..search_end].iter().enumerate() {
        if b == DELIMITER {
            if found < 3 {
                positions[found] = i;
            }
            found += 1;
        }
    }
    if found != 3 {
        return Err(CodecError::BadDelimCount { found });
    }
    let (p0, p1, p2) = (positions[0], positions[1], positions[2]);
    let flag = row[row.len() - 1];

    let part0 = unescape(&row[0..p0])?;
    let part2 = unescape(&row[p1 + 1..p2])?;

    match flag {
        UNDIRECTED => Ok((part0, part2, false)),
        DIRECTED_CORRECT => Ok((part0, part2, true)),
        DIRECTED_INVERTED => {
            if options.return_matched_seeds_as_edge_source {
                Ok((part0, part2, true))
            } else {
                Ok((part2, part0, true))
            }
        }
        other => Err(CodecError::BadDirectionFlag { flag: other }),
    }
}

/// Scan range bounds, built directly on an already-escaped vertex prefix
/// `v` (it is not re-escaped).
pub fn entity_start_key(v: &[u8]) -> Vec<u8> {
    let mut key = v.to_vec();
    key.push(DELIMITER);
    key.push(ENTITY);
    key
}

pub fn entity_end_key(v: &[u8]) -> Vec<u8> {
    let mut key = entity_start_key(v);
    key.push(DELIMITER_PLUS_ONE);
    key
}

pub fn edges_only_start_key(v: &[u8]) -> Vec<u8> {
    let mut key = v.to_vec();
    key.push(DELIMITER);
    key.push(DIRECTED_CORRECT);
    key.push(DELIMITER);
    key
}

pub fn edges_only_end_key(v: &[u8]) -> Vec<u8> {
    let mut key = v.to_vec();
    key.push(DELIMITER);
    key.push(UNDIRECTED);
    key.push(DELIMITER_PLUS_ONE);
    key
}

pub fn edge_start_key(v: &[u8]) -> Vec<u8> {
    let mut key = v.to_vec();
    key.push(DELIMITER);
    key.push(UNDIRECTED);
    key
}

pub fn edge_end_key(v: &[u8]) -> Vec<u8> {
    let mut key = edge_start_key(v);
    key.push(DELIMITER_PLUS_ONE);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_row_layout() {
        let row = build_entity_row(b"a");
        assert_eq!(row, vec![0x61, 0x00, 0x01]);
        assert!(is_entity_row(&row));
        assert_eq!(parse_entity_row(&row).unwrap(), b"a");
    }

    #[test]
    fn directed_edge_rows_match_scenario() {
        let (k1, k2) = build_edge_rows(b"a", b"b", true);
        assert_eq!(k1, vec![0x61, 0x00, 0x02, 0x00, 0x62, 0x00, 0x02]);
        assert_eq!(k2.unwrap(), vec![0x62, 0x00, 0x03, 0x00, 0x61, 0x00, 0x03]);
    }

    #[test]
    fn undirected_edge_rows_match_scenario() {
        let (k1, k2) = build_edge_rows(b"a", b"b", false);
        assert_eq!(k1, vec![0x61, 0x00, 0x04, 0x00, 0x62, 0x00, 0x04]);
        assert_eq!(k2.unwrap(), vec![0x62, 0x00, 0x04, 0x00, 0x61, 0x00, 0x04]);
    }

    #[test]
    fn self_edge_emits_single_row() {
        let (k1, k2) = build_edge_rows(b"a", b"a", true);
        assert_eq!(k1, vec![0x61, 0x00, 0x02, 0x00, 0x61, 0x00, 0x02]);
        assert!(k2.is_none());

        let options = CodecOptions::default();
        let (s, d, directed) = parse_edge_row(&k1, &options).unwrap();
        assert_eq!((s.as_slice(), d.as_slice(), directed), (b"a".as_slice(), b"a".as_slice(), true));
    }

    #[test]
    fn inverted_row_canonicalizes_by_default() {
        let options = CodecOptions::default();
        let row = vec![0x62, 0x00, 0x03, 0x00, 0x61, 0x00, 0x03];
        let (s, d, directed) = parse_edge_row(&row, &options).unwrap();
        assert_eq!((s, d, directed), (b"a".to_vec(), b"b".to_vec(), true));
    }

    #[test]
    fn inverted_row_preserves_stored_order_when_requested() {
        let options = CodecOptions { return_matched_seeds_as_edge_source: true };
        let row = vec![0x62, 0x00, 0x03, 0x00, 0x61, 0x00, 0x03];
        let (s, d, directed) = parse_edge_row(&row, &options).unwrap();
        assert_eq!((s, d, directed), (b"b".to_vec(), b"a".to_vec(), true));
    }

    #[test]
    fn bad_delim_count_is_rejected() {
        let options = CodecOptions::default();
        assert!(matches!(parse_edge_row(&[0x61, 0x00, 0x02], &options), Err(CodecError::BadDelimCount { .. })));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let options = CodecOptions::default();
        let row = vec![0x61, 0x00, 0x09, 0x00, 0x62, 0x00, 0x09];
        assert!(matches!(parse_edge_row(&row, &options), Err(CodecError::BadDirectionFlag { flag: 0x09 })));
    }

    #[test]
    fn edges_only_scan_range_matches_scenario() {
        let v = escape(b"V");
        let start = edges_only_start_key(&v);
        let end = edges_only_end_key(&v);
        assert_eq!(start, [v.clone(), vec![0x00, 0x02, 0x00]].concat());
        assert_eq!(end, [v.clone(), vec![0x00, 0x04, 0x01]].concat());

        let entity_row = [v.as_slice(), &[0x00, 0x01]].concat();
        assert!(entity_row.as_slice() < start.as_slice());
    }
}
