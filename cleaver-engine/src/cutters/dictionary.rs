//! Dictionary-driven CJK cutter

use super::disposition_for;
use crate::chars::is_ideograph;
use crate::dictionary::Dictionary;
use cleaver_core::{Beef, Cutter, Disposition, Dissection, Sink, Token};
use std::sync::Arc;

/// Forward maximum matching over runs of CJK ideographs
///
/// At each position the longest dictionary word wins; an ideograph that
/// starts no word becomes a single-character token. While the stream is
/// open and the rest of the run is still a strict prefix of some word, the
/// cutter stops and waits, since more text could extend the match.
#[derive(Debug, Clone)]
pub struct DictionaryCutter {
    dictionary: Arc<Dictionary>,
}

impl DictionaryCutter {
    /// Create a cutter over a shared dictionary
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// The dictionary used for matching
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl Default for DictionaryCutter {
    fn default() -> Self {
        Self::new(Arc::new(Dictionary::builtin()))
    }
}

impl Cutter for DictionaryCutter {
    fn name(&self) -> &str {
        "dictionary"
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        disposition_for(beef.char_at(index), history, index, is_ideograph)
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let run_end = beef.scan_while(offset, is_ideograph);
        let open_ended = run_end == beef.end() && !beef.is_final();
        let run = beef.slice(offset, run_end);

        let mut pos = 0;
        while pos < run.len() {
            let rest = &run[pos..];
            if open_ended && self.dictionary.is_proper_prefix(rest) {
                return Dissection::Partial(offset + pos);
            }

            let len = self.dictionary.longest_match(rest).max(1);
            let start = offset + pos;
            sink.collect(Token::new(beef.text(start, start + len), start, start + len));
            pos += len;
        }
        Dissection::Complete(run_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cutter() -> DictionaryCutter {
        DictionaryCutter::new(Arc::new(Dictionary::from_words([
            "中华",
            "中华人民共和国",
            "人民",
            "共和国",
            "万岁",
        ])))
    }

    fn cut(text: &str, origin: usize, is_final: bool) -> (Dissection, Vec<String>) {
        let chars: Vec<char> = text.chars().collect();
        let beef = Beef::new(&chars, origin, is_final);
        let mut tokens: Vec<Token> = Vec::new();
        let result = cutter().dissect(&mut tokens, &beef, origin);
        (result, tokens.into_iter().map(|token| token.text).collect())
    }

    #[test]
    fn test_maximum_matching() {
        let (result, words) = cut("中华人民共和国万岁!", 0, false);
        assert_eq!(result, Dissection::Complete(9));
        assert_eq!(words, vec!["中华人民共和国", "万岁"]);
    }

    #[test]
    fn test_unknown_ideographs_are_single_tokens() {
        let (result, words) = cut("庖丁人民", 0, true);
        assert_eq!(result, Dissection::Complete(4));
        assert_eq!(words, vec!["庖", "丁", "人民"]);
    }

    #[test]
    fn test_waits_on_open_prefix() {
        let (result, words) = cut("万岁中华人民", 4, false);
        assert_eq!(result, Dissection::Partial(6));
        assert_eq!(words, vec!["万岁"]);

        let (result, words) = cut("万岁中华人民", 4, true);
        assert_eq!(result, Dissection::Complete(10));
        assert_eq!(words, vec!["万岁", "中华", "人民"]);
    }

    #[test]
    fn test_complete_word_at_end_without_longer_candidate() {
        let (result, words) = cut("人民", 0, false);
        assert_eq!(result, Dissection::Complete(2));
        assert_eq!(words, vec!["人民"]);
    }

    #[test]
    fn test_points() {
        let chars: Vec<char> = "a中".chars().collect();
        let beef = Beef::new(&chars, 0, true);
        let cutter = cutter();
        assert_eq!(cutter.assignable(&beef, 0, 0), Disposition::Limit);
        assert_eq!(cutter.assignable(&beef, 0, 1), Disposition::Point);
        assert_eq!(cutter.assignable(&beef, 1, 1), Disposition::Assigned);
    }
}
