//! Aho-Corasick multi-pattern matcher
//!
//! Built once per pattern-set snapshot and scanned in a single
//! left-to-right pass. Nodes live in an arena and refer to each other by
//! index: failure links span a DAG, not a tree, and indices sidestep the
//! ownership cycles native references would create.

use std::collections::{HashMap, VecDeque};

const ROOT: usize = 0;

/// One pattern occurrence reported by [`AhoCorasickAutomaton::find_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatonMatch<'a> {
    /// The matched pattern
    pub pattern: &'a str,
    /// Index of the pattern in the build-time pattern list
    pub pattern_index: usize,
    /// Char offset of the first matched char
    pub start: usize,
    /// Char offset one past the last matched char
    pub end: usize,
}

/// Size and shape counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutomatonStats {
    /// Number of patterns in the snapshot
    pub pattern_count: usize,
    /// Number of arena nodes, root included
    pub node_count: usize,
    /// Mean pattern length in chars
    pub average_pattern_length: f64,
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, usize>,
    /// Longest proper suffix of this node's path that is also a root path
    failure: usize,
    /// Pattern indices ending here, own terminals plus those inherited
    /// along the failure chain
    outputs: Vec<usize>,
}

/// Immutable multi-pattern matcher over a pattern-set snapshot
#[derive(Debug)]
pub struct AhoCorasickAutomaton {
    nodes: Vec<Node>,
    patterns: Vec<String>,
    /// Char length per pattern, cached for start-offset arithmetic
    pattern_lens: Vec<usize>,
}

impl AhoCorasickAutomaton {
    /// Build the automaton: trie insertion, then a BFS pass for failure
    /// links, then a second BFS pass propagating output lists.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.is_empty())
            .collect();
        let pattern_lens = patterns.iter().map(|p| p.chars().count()).collect();

        let mut automaton = Self {
            nodes: vec![Node::default()],
            patterns,
            pattern_lens,
        };
        automaton.build_trie();
        automaton.build_failure_links();
        automaton.propagate_outputs();
        automaton
    }

    fn build_trie(&mut self) {
        for index in 0..self.patterns.len() {
            let mut current = ROOT;
            // Walk/create one node per char of the pattern
            let chars: Vec<char> = self.patterns[index].chars().collect();
            for ch in chars {
                current = match self.nodes[current].children.get(&ch).copied() {
                    Some(next) => next,
                    None => {
                        let next = self.nodes.len();
                        self.nodes.push(Node::default());
                        self.nodes[current].children.insert(ch, next);
                        next
                    }
                };
            }
            self.nodes[current].outputs.push(index);
        }
    }

    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        // Depth-1 nodes fail to the root
        let depth_one: Vec<usize> = self.nodes[ROOT].children.values().copied().collect();
        for child in depth_one {
            self.nodes[child].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let transitions: Vec<(char, usize)> = self.nodes[current]
                .children
                .iter()
                .map(|(&ch, &child)| (ch, child))
                .collect();

            for (ch, child) in transitions {
                queue.push_back(child);

                // Follow the parent's failure chain until some node has a
                // transition on `ch`, or the chain bottoms out at the root.
                let mut failure = self.nodes[current].failure;
                self.nodes[child].failure = loop {
                    if let Some(&next) = self.nodes[failure].children.get(&ch) {
                        break next;
                    }
                    if failure == ROOT {
                        break ROOT;
                    }
                    failure = self.nodes[failure].failure;
                };
            }
        }
    }

    /// Second BFS: each node inherits its failure node's outputs. BFS order
    /// guarantees the failure node (strictly shallower) is already final.
    fn propagate_outputs(&mut self) {
        let mut queue = VecDeque::new();
        for &child in self.nodes[ROOT].children.values() {
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let failure = self.nodes[current].failure;
            if !self.nodes[failure].outputs.is_empty() {
                let inherited = self.nodes[failure].outputs.clone();
                self.nodes[current].outputs.extend(inherited);
            }
            for &child in self.nodes[current].children.values() {
                queue.push_back(child);
            }
        }
    }

    /// Advance one scan state by one char, following failure links on
    /// mismatch.
    fn step(&self, state: usize, ch: char) -> usize {
        let mut current = state;
        loop {
            if let Some(&next) = self.nodes[current].children.get(&ch) {
                return next;
            }
            if current == ROOT {
                return ROOT;
            }
            current = self.nodes[current].failure;
        }
    }

    /// Every pattern occurrence in `chars`, in end-position order
    pub fn find_all(&self, chars: &[char]) -> Vec<AutomatonMatch<'_>> {
        let mut matches = Vec::new();
        let mut state = ROOT;

        for (i, &ch) in chars.iter().enumerate() {
            state = self.step(state, ch);
            for &pattern_index in &self.nodes[state].outputs {
                let len = self.pattern_lens[pattern_index];
                matches.push(AutomatonMatch {
                    pattern: &self.patterns[pattern_index],
                    pattern_index,
                    start: i + 1 - len,
                    end: i + 1,
                });
            }
        }
        matches
    }

    /// True when any pattern occurs in `chars`
    pub fn has_match(&self, chars: &[char]) -> bool {
        let mut state = ROOT;
        for &ch in chars {
            state = self.step(state, ch);
            if !self.nodes[state].outputs.is_empty() {
                return true;
            }
        }
        false
    }

    /// First occurrence by end position, or None
    pub fn find_first(&self, chars: &[char]) -> Option<AutomatonMatch<'_>> {
        let mut state = ROOT;
        for (i, &ch) in chars.iter().enumerate() {
            state = self.step(state, ch);
            if let Some(&pattern_index) = self.nodes[state].outputs.first() {
                let len = self.pattern_lens[pattern_index];
                return Some(AutomatonMatch {
                    pattern: &self.patterns[pattern_index],
                    pattern_index,
                    start: i + 1 - len,
                    end: i + 1,
                });
            }
        }
        None
    }

    /// The pattern snapshot this automaton was built from
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Shape counters for diagnostics
    pub fn stats(&self) -> AutomatonStats {
        let total_len: usize = self.pattern_lens.iter().sum();
        AutomatonStats {
            pattern_count: self.patterns.len(),
            node_count: self.nodes.len(),
            average_pattern_length: if self.patterns.is_empty() {
                0.0
            } else {
                total_len as f64 / self.patterns.len() as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn spans<'a>(matches: &[AutomatonMatch<'a>]) -> Vec<(&'a str, usize, usize)> {
        matches.iter().map(|m| (m.pattern, m.start, m.end)).collect()
    }

    #[test]
    fn finds_overlapping_and_nested_patterns() {
        // The classic Aho-Corasick example set
        let ac = AhoCorasickAutomaton::new(["he", "she", "his", "hers"]);
        let matches = ac.find_all(&chars("ushers"));
        assert_eq!(
            spans(&matches),
            vec![("she", 1, 4), ("he", 2, 4), ("hers", 2, 6)]
        );
    }

    #[test]
    fn suffix_patterns_surface_through_failure_links() {
        let ac = AhoCorasickAutomaton::new(["asshole", "ass", "hole"]);
        let matches = ac.find_all(&chars("asshole"));
        assert_eq!(
            spans(&matches),
            vec![("ass", 0, 3), ("asshole", 0, 7), ("hole", 3, 7)]
        );
    }

    #[test]
    fn has_match_and_find_first() {
        let ac = AhoCorasickAutomaton::new(["damn", "hell"]);
        assert!(ac.has_match(&chars("what the hell")));
        assert!(!ac.has_match(&chars("what the heck")));

        let first = ac.find_first(&chars("damn hell")).unwrap();
        assert_eq!((first.pattern, first.start, first.end), ("damn", 0, 4));
        assert!(ac.find_first(&chars("clean text")).is_none());
    }

    #[test]
    fn empty_patterns_are_dropped() {
        let ac = AhoCorasickAutomaton::new(["", "ok"]);
        assert_eq!(ac.patterns(), ["ok"]);
        assert!(ac.find_all(&chars("")).is_empty());
    }

    #[test]
    fn repeated_pattern_occurrences_all_reported() {
        let ac = AhoCorasickAutomaton::new(["aa"]);
        let matches = ac.find_all(&chars("aaaa"));
        assert_eq!(spans(&matches), vec![("aa", 0, 2), ("aa", 1, 3), ("aa", 2, 4)]);
    }

    #[test]
    fn non_latin_patterns() {
        let ac = AhoCorasickAutomaton::new(["साला", "கூதி"]);
        let matches = ac.find_all(&chars("वह साला बोला"));
        assert_eq!(spans(&matches), vec![("साला", 3, 7)]);
    }

    #[test]
    fn stats_counts_nodes_and_patterns() {
        let ac = AhoCorasickAutomaton::new(["ab", "ac"]);
        let stats = ac.stats();
        assert_eq!(stats.pattern_count, 2);
        // root + 'a' + 'b' + 'c'
        assert_eq!(stats.node_count, 4);
        assert!((stats.average_pattern_length - 2.0).abs() < f64::EPSILON);
    }
}
