//! Lenient input parsers for free-text lesson inputs
//!
//! Converts raw delimited text into the typed collections the simulators
//! accept. All parsers honor the same leniency contract: malformed tokens are
//! silently dropped and empty input yields an empty collection — never a panic
//! and never an error. A learning tool fed free-text input should degrade
//! gracefully rather than crash the lesson; simulators handle the resulting
//! degenerate collections with their own single-step early exits.
//!
//! Tuple formats use `-` as the in-tuple separator (`"u-v"`, `"u-v-w"`,
//! `"l-r-delta"`). A `-` directly after a separator (or at the start of a
//! token) is read as a sign, so `"0-1--5"` parses as `(0, 1, -5)`.

use rustc_hash::FxHashSet;

/// Parse comma-separated integers. Empty or whitespace-only input gives `[]`;
/// unparseable tokens are dropped.
pub fn parse_int_list(text: &str) -> Vec<i64> {
    text.split(',')
        .filter_map(|tok| tok.trim().parse::<i64>().ok())
        .collect()
}

/// Parse comma-separated words, trimmed, empty tokens dropped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse comma-separated `"u-v"` pairs into an edge list.
pub fn parse_edges(text: &str) -> Vec<(usize, usize)> {
    text.split(',')
        .filter_map(|tok| {
            let fields = signed_fields(tok.trim());
            match fields.as_slice() {
                [u, v] if *u >= 0 && *v >= 0 => Some((*u as usize, *v as usize)),
                _ => None,
            }
        })
        .collect()
}

/// Parse comma-separated `"u-v-w"` triples into a weighted edge list.
/// Weights may be negative (`"0-1--5"` is an edge 0→1 with weight -5).
pub fn parse_weighted_edges(text: &str) -> Vec<(usize, usize, i64)> {
    text.split(',')
        .filter_map(|tok| {
            let fields = signed_fields(tok.trim());
            match fields.as_slice() {
                [u, v, w] if *u >= 0 && *v >= 0 => Some((*u as usize, *v as usize, *w)),
                _ => None,
            }
        })
        .collect()
}

/// Parse comma-separated `"a-b"` pairs, normalized so the first endpoint is
/// never greater than the second.
pub fn parse_intervals(text: &str) -> Vec<(i64, i64)> {
    text.split(',')
        .filter_map(|tok| {
            let fields = signed_fields(tok.trim());
            match fields.as_slice() {
                [a, b] => Some((*a.min(b), *a.max(b))),
                _ => None,
            }
        })
        .collect()
}

/// Parse comma-separated `"l-r-delta"` range updates, normalized so `l <= r`.
pub fn parse_range_updates(text: &str) -> Vec<(usize, usize, i64)> {
    text.split(',')
        .filter_map(|tok| {
            let fields = signed_fields(tok.trim());
            match fields.as_slice() {
                [l, r, d] if *l >= 0 && *r >= 0 => {
                    let (l, r) = (*l as usize, *r as usize);
                    Some((l.min(r), l.max(r), *d))
                }
                _ => None,
            }
        })
        .collect()
}

/// Parse comma-separated `"r-c"` pairs into a blocked-cell membership set.
pub fn parse_cells(text: &str) -> FxHashSet<(usize, usize)> {
    text.split(',')
        .filter_map(|tok| {
            let fields = signed_fields(tok.trim());
            match fields.as_slice() {
                [r, c] if *r >= 0 && *c >= 0 => Some((*r as usize, *c as usize)),
                _ => None,
            }
        })
        .collect()
}

/// Split a tuple token on `-`, treating a `-` that immediately follows a
/// separator (or starts the token) as the sign of the next number.
/// Returns `[]` if any field fails to parse.
fn signed_fields(token: &str) -> Vec<i64> {
    let mut fields = Vec::new();
    let mut current = String::new();
    for ch in token.chars() {
        if ch == '-' && !current.is_empty() {
            fields.push(current.clone());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    let mut out = Vec::with_capacity(fields.len());
    let mut pending_sign = false;
    for field in fields {
        if field.is_empty() {
            // Empty field means the separator was doubled: sign marker.
            if pending_sign {
                return Vec::new();
            }
            pending_sign = true;
            continue;
        }
        let text = if pending_sign {
            pending_sign = false;
            format!("-{}", field)
        } else {
            field
        };
        match text.trim().parse::<i64>() {
            Ok(v) => out.push(v),
            Err(_) => return Vec::new(),
        }
    }
    if pending_sign {
        return Vec::new();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_list_basic() {
        assert_eq!(parse_int_list("1, 2,3"), vec![1, 2, 3]);
        assert_eq!(parse_int_list("  "), Vec::<i64>::new());
        assert_eq!(parse_int_list(""), Vec::<i64>::new());
    }

    #[test]
    fn int_list_drops_malformed_tokens() {
        assert_eq!(parse_int_list("1,x,3"), vec![1, 3]);
        assert_eq!(parse_int_list("a,b"), Vec::<i64>::new());
    }

    #[test]
    fn int_list_accepts_negatives() {
        assert_eq!(parse_int_list("-4,5,-6"), vec![-4, 5, -6]);
    }

    #[test]
    fn edges_basic() {
        assert_eq!(parse_edges("0-1,1-2"), vec![(0, 1), (1, 2)]);
        assert_eq!(parse_edges("0-1,bad,2-3"), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn weighted_edges_negative_weight() {
        assert_eq!(parse_weighted_edges("0-1-4,1-2--5"), vec![(0, 1, 4), (1, 2, -5)]);
    }

    #[test]
    fn intervals_are_normalized() {
        assert_eq!(parse_intervals("5-1,2-4"), vec![(1, 5), (2, 4)]);
    }

    #[test]
    fn range_updates_are_normalized() {
        assert_eq!(parse_range_updates("3-1-10"), vec![(1, 3, 10)]);
        assert_eq!(parse_range_updates("0-2--7"), vec![(0, 2, -7)]);
    }

    #[test]
    fn cells_build_membership_set() {
        let cells = parse_cells("0-1,2-2");
        assert!(cells.contains(&(0, 1)));
        assert!(cells.contains(&(2, 2)));
        assert!(!cells.contains(&(1, 0)));
    }

    #[test]
    fn words_trimmed_and_nonempty() {
        assert_eq!(parse_words("apple, app ,,ape"), vec!["apple", "app", "ape"]);
    }

    #[test]
    fn malformed_tuples_never_panic() {
        assert!(parse_edges("---").is_empty());
        assert!(parse_weighted_edges("1-2-3-4").is_empty());
        assert!(parse_cells("x-y").is_empty());
        assert!(parse_intervals("5-").is_empty());
    }
}
