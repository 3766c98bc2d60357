//! Stack-based bracket validation

use crate::trace::{Field, Recorder, Simulation, StateFields};

/// Event tag for the bracket scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketEvent {
    /// Opener pushed onto the stack.
    Push,
    /// Closer matched the opener on top of the stack.
    Match,
    /// Closer did not match the top (or the stack was empty).
    Mismatch,
    /// Non-bracket character, recorded but ignored for validity.
    Skip,
    /// End of input: stack empty, string valid.
    Valid,
    /// End of input with unclosed openers.
    Leftover,
    /// Empty input.
    Degenerate,
}

/// Snapshot for one bracket step.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketState {
    pub event: BracketEvent,
    pub index: usize,
    pub ch: char,
    /// Stack contents, bottom first.
    pub stack: Vec<char>,
}

impl StateFields for BracketState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("index", self.index.to_string()),
            Field::new("char", self.ch.to_string()),
            Field::new("stack", self.stack.iter().collect::<String>()),
        ]
    }
}

/// The opener each closer must match.
fn matching_opener(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Validate bracket nesting with an explicit stack.
///
/// Openers push; closers pop-and-compare against a fixed closer→opener map; a
/// mismatch (or a closer on an empty stack) fails immediately. Characters that
/// are neither openers nor closers are recorded but do not affect validity.
/// Leftover openers at end of input also fail.
pub fn simulate_brackets(text: &str) -> Simulation<BracketState, bool> {
    let mut rec = Recorder::new();

    if text.is_empty() {
        rec.push(
            "empty input: trivially balanced",
            BracketState {
                event: BracketEvent::Degenerate,
                index: 0,
                ch: ' ',
                stack: Vec::new(),
            },
        );
        return rec.finish(true);
    }

    let mut stack: Vec<char> = Vec::new();

    for (index, ch) in text.chars().enumerate() {
        if matches!(ch, '(' | '[' | '{') {
            stack.push(ch);
            rec.push(
                format!("push '{}'", ch),
                BracketState {
                    event: BracketEvent::Push,
                    index,
                    ch,
                    stack: stack.clone(),
                },
            );
        } else if let Some(opener) = matching_opener(ch) {
            match stack.pop() {
                Some(top) if top == opener => {
                    rec.push(
                        format!("'{}' matches '{}'", ch, top),
                        BracketState {
                            event: BracketEvent::Match,
                            index,
                            ch,
                            stack: stack.clone(),
                        },
                    );
                }
                Some(top) => {
                    stack.push(top); // restore for the final snapshot
                    rec.push(
                        format!("'{}' does not match '{}': invalid", ch, top),
                        BracketState {
                            event: BracketEvent::Mismatch,
                            index,
                            ch,
                            stack: stack.clone(),
                        },
                    );
                    return rec.finish(false);
                }
                None => {
                    rec.push(
                        format!("'{}' with empty stack: invalid", ch),
                        BracketState {
                            event: BracketEvent::Mismatch,
                            index,
                            ch,
                            stack: Vec::new(),
                        },
                    );
                    return rec.finish(false);
                }
            }
        } else {
            rec.push(
                format!("'{}' is not a bracket: skip", ch),
                BracketState {
                    event: BracketEvent::Skip,
                    index,
                    ch,
                    stack: stack.clone(),
                },
            );
        }
    }

    let last = text.chars().count() - 1;
    if stack.is_empty() {
        rec.push(
            "end of input with empty stack: valid",
            BracketState {
                event: BracketEvent::Valid,
                index: last,
                ch: ' ',
                stack: Vec::new(),
            },
        );
        rec.finish(true)
    } else {
        rec.push(
            format!("{} unclosed opener(s) remain: invalid", stack.len()),
            BracketState {
                event: BracketEvent::Leftover,
                index: last,
                ch: ' ',
                stack,
            },
        );
        rec.finish(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_string_is_valid() {
        assert!(simulate_brackets("({[]})").result);
    }

    #[test]
    fn interleaved_is_invalid() {
        let sim = simulate_brackets("([)]");
        assert!(!sim.result);
        assert_eq!(sim.steps.last().unwrap().state.event, BracketEvent::Mismatch);
    }

    #[test]
    fn leftover_openers_are_invalid() {
        let sim = simulate_brackets("((");
        assert!(!sim.result);
        assert_eq!(sim.steps.last().unwrap().state.event, BracketEvent::Leftover);
    }

    #[test]
    fn stray_closer_fails_on_empty_stack() {
        let sim = simulate_brackets(")");
        assert!(!sim.result);
    }

    #[test]
    fn non_bracket_characters_are_skipped() {
        let sim = simulate_brackets("(a)");
        assert!(sim.result);
        assert!(sim.steps.iter().any(|s| s.state.event == BracketEvent::Skip));
    }

    #[test]
    fn empty_string_is_trivially_valid() {
        let sim = simulate_brackets("");
        assert!(sim.result);
        assert_eq!(sim.steps.len(), 1);
    }
}
