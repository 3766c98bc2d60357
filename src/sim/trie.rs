//! Trie construction and prefix search

use crate::trace::{Field, Recorder, Simulation, StateFields};
use rustc_hash::FxHashMap;

/// Event tag for trie build + walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieEvent {
    /// A new node was created for the current character.
    CreateNode,
    /// The character's child already existed; descended into it.
    FollowEdge,
    /// A word's last node was flagged end-of-word.
    MarkWord,
    /// Prefix walk matched this character.
    WalkMatch,
    /// Prefix walk found no child for this character: abort.
    WalkMiss,
    /// Entire prefix consumed: prefix exists.
    WalkDone,
    /// No words to insert.
    Degenerate,
}

/// Snapshot for one trie step.
#[derive(Debug, Clone, PartialEq)]
pub struct TrieState {
    pub event: TrieEvent,
    /// Characters consumed so far on the current path.
    pub path: String,
    pub ch: char,
    /// Total nodes in the trie (root excluded).
    pub node_count: usize,
    /// Words fully inserted so far.
    pub words_inserted: usize,
}

impl StateFields for TrieState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("path", format!("\"{}\"", self.path)),
            Field::new("char", self.ch.to_string()),
            Field::new("nodes", self.node_count.to_string()),
            Field::new("words", self.words_inserted.to_string()),
        ]
    }
}

/// Trie node: character -> child map plus an end-of-word flag.
#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_word: bool,
}

/// Insert every word character-by-character, then walk the query prefix.
///
/// Any character of the prefix with no matching child aborts with `false`;
/// consuming the whole prefix answers `true`. This is prefix existence, not
/// whole-word membership — an empty prefix is trivially present once any word
/// (or none) is inserted.
pub fn simulate_trie_prefix(words: &[String], prefix: &str) -> Simulation<TrieState, bool> {
    let mut rec = Recorder::new();

    if words.is_empty() {
        rec.push(
            "no words to insert: empty trie",
            TrieState {
                event: TrieEvent::Degenerate,
                path: String::new(),
                ch: ' ',
                node_count: 0,
                words_inserted: 0,
            },
        );
        // An empty trie still contains the empty prefix.
        return rec.finish(prefix.is_empty());
    }

    let mut root = TrieNode::default();
    let mut node_count = 0usize;

    for (wi, word) in words.iter().enumerate() {
        let mut node = &mut root;
        let mut path = String::new();
        for ch in word.chars() {
            path.push(ch);
            let created = !node.children.contains_key(&ch);
            node = node.children.entry(ch).or_default();
            if created {
                node_count += 1;
                rec.push(
                    format!("create node for '{}' (path \"{}\")", ch, path),
                    TrieState {
                        event: TrieEvent::CreateNode,
                        path: path.clone(),
                        ch,
                        node_count,
                        words_inserted: wi,
                    },
                );
            } else {
                rec.push(
                    format!("follow existing edge '{}' (path \"{}\")", ch, path),
                    TrieState {
                        event: TrieEvent::FollowEdge,
                        path: path.clone(),
                        ch,
                        node_count,
                        words_inserted: wi,
                    },
                );
            }
        }
        node.is_word = true;
        rec.push(
            format!("mark \"{}\" as a complete word", word),
            TrieState {
                event: TrieEvent::MarkWord,
                path: word.clone(),
                ch: word.chars().last().unwrap_or(' '),
                node_count,
                words_inserted: wi + 1,
            },
        );
    }

    let mut node = &root;
    let mut path = String::new();
    for ch in prefix.chars() {
        match node.children.get(&ch) {
            Some(child) => {
                path.push(ch);
                node = child;
                rec.push(
                    format!("prefix walk: '{}' found (path \"{}\")", ch, path),
                    TrieState {
                        event: TrieEvent::WalkMatch,
                        path: path.clone(),
                        ch,
                        node_count,
                        words_inserted: words.len(),
                    },
                );
            }
            None => {
                rec.push(
                    format!("prefix walk: no child for '{}': prefix absent", ch),
                    TrieState {
                        event: TrieEvent::WalkMiss,
                        path: path.clone(),
                        ch,
                        node_count,
                        words_inserted: words.len(),
                    },
                );
                return rec.finish(false);
            }
        }
    }

    rec.push(
        format!("entire prefix \"{}\" consumed: present", prefix),
        TrieState {
            event: TrieEvent::WalkDone,
            path,
            ch: prefix.chars().last().unwrap_or(' '),
            node_count,
            words_inserted: words.len(),
        },
    );
    rec.finish(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn present_prefix_is_found() {
        let sim = simulate_trie_prefix(&words(&["apple", "app", "ape"]), "ap");
        assert!(sim.result);
    }

    #[test]
    fn prefix_existence_not_word_membership() {
        // "appl" is a prefix of "apple" but not an inserted word.
        let sim = simulate_trie_prefix(&words(&["apple"]), "appl");
        assert!(sim.result);
    }

    #[test]
    fn absent_prefix_aborts_on_first_miss() {
        let sim = simulate_trie_prefix(&words(&["apple"]), "axe");
        assert!(!sim.result);
        assert_eq!(sim.steps.last().unwrap().state.event, TrieEvent::WalkMiss);
    }

    #[test]
    fn prefix_longer_than_every_word_is_absent() {
        let sim = simulate_trie_prefix(&words(&["cat"]), "cats");
        assert!(!sim.result);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let sim = simulate_trie_prefix(&words(&["car", "cat"]), "");
        // c-a shared, r and t distinct: 4 nodes total.
        let last_nodes = sim.steps.last().unwrap().state.node_count;
        assert_eq!(last_nodes, 4);
        assert!(sim.steps.iter().any(|s| s.state.event == TrieEvent::FollowEdge));
    }

    #[test]
    fn empty_word_list_single_step() {
        let sim = simulate_trie_prefix(&[], "a");
        assert!(!sim.result);
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn empty_prefix_is_trivially_present() {
        assert!(simulate_trie_prefix(&words(&["x"]), "").result);
        assert!(simulate_trie_prefix(&[], "").result);
    }
}
