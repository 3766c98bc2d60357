// Integration tests for parsing, the catalog, and trace playback

use algotty::catalog::{pattern_info, PatternKey};
use algotty::parse;
use algotty::playback;

#[test]
fn test_every_pattern_has_a_working_demo() {
    for &key in PatternKey::all() {
        let trace = playback::demo_trace(key);
        assert!(!trace.is_empty(), "{} produced an empty demo trace", key.as_str());
        assert!(!trace.result.is_empty());
    }
}

#[test]
fn test_step_numbers_are_contiguous_from_zero() {
    for &key in PatternKey::all() {
        let trace = playback::demo_trace(key);
        for (i, step) in trace.steps.iter().enumerate() {
            assert_eq!(step.seq, i, "{} has a gap in step numbering", key.as_str());
        }
    }
}

#[test]
fn test_traces_are_deterministic() {
    for &key in PatternKey::all() {
        let a = playback::demo_trace(key);
        let b = playback::demo_trace(key);
        assert_eq!(a.len(), b.len());
        assert_eq!(a.result, b.result);
        for (sa, sb) in a.steps.iter().zip(&b.steps) {
            assert_eq!(sa.action, sb.action);
            assert_eq!(sa.fields, sb.fields);
            assert_eq!(sa.what, sb.what);
        }
    }
}

#[test]
fn test_every_step_has_explanation_text() {
    for &key in PatternKey::all() {
        let trace = playback::demo_trace(key);
        for step in &trace.steps {
            assert!(!step.what.is_empty());
            assert!(!step.why.is_empty());
            assert!(!step.deep_what.is_empty());
        }
    }
}

#[test]
fn test_first_step_marks_every_field_changed() {
    for &key in PatternKey::all() {
        let trace = playback::demo_trace(key);
        let first = &trace.steps[0];
        assert_eq!(first.changed.len(), first.fields.len());
    }
}

#[test]
fn test_trace_with_args_overrides_demo_input() {
    let args = vec!["1,1".to_string()];
    let trace = playback::trace_with_args(PatternKey::HashDuplicate, &args);
    assert!(trace.result.contains('1'));
}

#[test]
fn test_trace_with_empty_args_falls_back_to_demo() {
    let trace = playback::trace_with_args(PatternKey::BinarySearch, &[]);
    let demo = playback::demo_trace(PatternKey::BinarySearch);
    assert_eq!(trace.len(), demo.len());
    assert_eq!(trace.result, demo.result);
}

#[test]
fn test_catalog_covers_every_pattern() {
    for &key in PatternKey::all() {
        let info = pattern_info(key);
        assert_eq!(info.key, key);
        assert!(!info.name.is_empty());
        assert!(!info.time_complexity.is_empty());
        assert!(!info.invariant.is_empty());
    }
}

#[test]
fn test_pattern_keys_round_trip_through_parse() {
    for &key in PatternKey::all() {
        assert_eq!(PatternKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(PatternKey::parse("no-such-pattern"), None);
    assert_eq!(PatternKey::parse("  Grid-BFS "), Some(PatternKey::GridBfs));
}

#[test]
fn test_parsers_drop_malformed_tokens() {
    assert_eq!(parse::parse_int_list("3, x, 5,,-2"), vec![3, 5, -2]);
    assert_eq!(parse::parse_edges("0-1,bad,2-3,4-"), vec![(0, 1), (2, 3)]);
    assert_eq!(
        parse::parse_weighted_edges("0-1-4,0-2,1-2-oops,2-3--5"),
        vec![(0, 1, 4), (2, 3, -5)]
    );
    assert_eq!(parse::parse_intervals("1-3,8-2,junk"), vec![(1, 3), (2, 8)]);
}

#[test]
fn test_parsers_accept_empty_input() {
    assert!(parse::parse_int_list("").is_empty());
    assert!(parse::parse_edges("   ").is_empty());
    assert!(parse::parse_intervals("").is_empty());
    assert!(parse::parse_words("").is_empty());
    assert!(parse::parse_cells("").is_empty());
}

#[test]
fn test_degenerate_inputs_still_trace() {
    let trace = playback::trace_with_args(PatternKey::SlidingWindow, &["".to_string()]);
    assert!(!trace.is_empty());
    let trace = playback::trace_with_args(
        PatternKey::Dijkstra,
        &["".to_string(), "0".to_string()],
    );
    assert!(!trace.is_empty());
}
