//! The trie and the automaton are both exhaustive multi-pattern matchers
//! over the same dictionary; their match sets must agree on any input.

use std::collections::BTreeSet;

use bowdler_core::{AhoCorasickAutomaton, WordTrie};
use proptest::prelude::*;

proptest! {
    #[test]
    fn trie_and_automaton_report_the_same_spans(
        words in proptest::collection::btree_set("[ab]{1,4}", 1..8),
        text in "[ab]{0,40}",
    ) {
        let words: Vec<String> = words.into_iter().collect();
        let mut trie = WordTrie::new();
        for word in &words {
            trie.insert(word);
        }
        let automaton = AhoCorasickAutomaton::new(words.clone());

        let chars: Vec<char> = text.chars().collect();
        let mut from_trie = BTreeSet::new();
        for pos in 0..chars.len() {
            for m in trie.matches_at(&chars, pos) {
                from_trie.insert((m.start, m.end, m.word.to_string()));
            }
        }
        let from_automaton: BTreeSet<_> = automaton
            .find_all(&chars)
            .into_iter()
            .map(|m| (m.start, m.end, m.pattern.to_string()))
            .collect();

        prop_assert_eq!(from_trie, from_automaton);
    }
}
