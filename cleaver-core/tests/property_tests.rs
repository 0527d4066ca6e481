//! Property-based checks of the dispatch protocol

mod common;

use cleaver_core::{Beef, Cutter, CutterRegistry, Dispatcher, Disposition, Dissection, Token};
use common::{segment_chunks, Letters, Recording, Words};
use proptest::prelude::*;
use std::sync::Arc;

/// Split `text` at the given character positions
fn split_at_chars(text: &str, cuts: &[usize]) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut points: Vec<usize> = cuts.iter().map(|&cut| cut % (chars.len() + 1)).collect();
    points.sort_unstable();
    points.dedup();

    let mut pieces = Vec::new();
    let mut last = 0;
    for point in points.into_iter().chain(std::iter::once(chars.len())) {
        pieces.push(chars[last..point].iter().collect());
        last = point;
    }
    pieces
}

fn registry() -> CutterRegistry {
    CutterRegistry::builder().with(Letters).with(Words).build()
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ab 中1!]{0,40}").unwrap()
}

proptest! {
    #[test]
    fn chunking_never_changes_output(
        text in text_strategy(),
        cuts in proptest::collection::vec(0usize..64, 0..6),
    ) {
        let pieces = split_at_chars(&text, &cuts);
        let chunks: Vec<&str> = pieces.iter().map(String::as_str).collect();

        let whole = segment_chunks(registry(), &[text.as_str()]);
        let chunked = segment_chunks(registry(), &chunks);
        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn spans_are_ordered_and_disjoint(
        text in text_strategy(),
        cuts in proptest::collection::vec(0usize..64, 0..6),
    ) {
        let pieces = split_at_chars(&text, &cuts);
        let chunks: Vec<&str> = pieces.iter().map(String::as_str).collect();
        let tokens = segment_chunks(registry(), &chunks);

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for token in &tokens {
            prop_assert!(token.start < token.end);
            prop_assert_eq!(token.char_len(), token.text.chars().count());
        }
    }

    #[test]
    fn dissection_never_goes_backward(
        text in text_strategy(),
        cuts in proptest::collection::vec(0usize..64, 0..6),
    ) {
        let letters = Arc::new(Recording::new(Letters));
        let words = Arc::new(Recording::new(Words));
        let registry = CutterRegistry::builder()
            .with_shared(letters.clone())
            .with_shared(words.clone())
            .build();

        let pieces = split_at_chars(&text, &cuts);
        let chunks: Vec<&str> = pieces.iter().map(String::as_str).collect();
        segment_chunks(registry, &chunks);

        for (offset, result) in letters.calls().into_iter().chain(words.calls()) {
            prop_assert!(result.end() >= offset);
            if let Dissection::Complete(end) = result {
                prop_assert!(end > offset);
            }
        }
    }

    #[test]
    fn assignable_is_idempotent(text in text_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let beef = Beef::new(&chars, 0, true);
        let cutters: [&dyn Cutter; 2] = [&Letters, &Words];

        for cutter in cutters {
            for history in 0..chars.len() {
                for index in history..chars.len() {
                    prop_assert_eq!(
                        cutter.assignable(&beef, history, index),
                        cutter.assignable(&beef, history, index)
                    );
                }
            }
        }
    }

    #[test]
    fn assigned_positions_dissect_within_bounds(text in text_strategy()) {
        let chars: Vec<char> = text.chars().collect();
        let cutters: [&dyn Cutter; 2] = [&Letters, &Words];

        for is_final in [false, true] {
            let beef = Beef::new(&chars, 0, is_final);
            for cutter in cutters {
                for index in 0..chars.len() {
                    if cutter.assignable(&beef, index, index) != Disposition::Assigned {
                        continue;
                    }
                    let mut tokens: Vec<Token> = Vec::new();
                    let result = cutter.dissect(&mut tokens, &beef, index);
                    prop_assert!(result.end() >= index && result.end() <= beef.end());
                    prop_assert!(tokens.iter().all(|token| token.end <= result.end()));
                }
            }
        }
    }
}

#[test]
fn split_helper_covers_text() {
    let pieces = split_at_chars("中华人民", &[1, 3, 3]);
    assert_eq!(pieces, vec!["中", "华人", "民"]);
    assert_eq!(split_at_chars("", &[5]), vec!["", ""]);

    let total = Dispatcher::dispatch_str(registry(), "ab 中", &mut Vec::<Token>::new())
        .unwrap()
        .tokens;
    assert_eq!(total, 2);
}
