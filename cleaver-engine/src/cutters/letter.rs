//! Latin word cutter

use super::disposition_for;
use crate::chars::is_letter;
use cleaver_core::{Beef, Cutter, Disposition, Dissection, Sink, Token};

/// Latin letter runs
///
/// One call keeps consuming across the whitespace between words. A run
/// touching the window end is never reported while more input may follow;
/// the cutter returns a partial result ending after the last reported word
/// instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterCutter;

impl LetterCutter {
    /// Create a letter cutter
    pub fn new() -> Self {
        Self
    }
}

impl Cutter for LetterCutter {
    fn name(&self) -> &str {
        "letter"
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        disposition_for(beef.char_at(index), history, index, is_letter)
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let mut committed = offset;
        let mut pos = offset;
        loop {
            let end = beef.scan_while(pos, is_letter);
            if end == beef.end() && !beef.is_final() {
                return Dissection::Partial(committed);
            }
            sink.collect(Token::new(beef.text(pos, end), pos, end));
            committed = end;

            let next = beef.scan_while(end, char::is_whitespace);
            match beef.char_at(next) {
                Some(ch) if next > end && is_letter(ch) => pos = next,
                _ => return Dissection::Complete(next),
            }
        }
    }
}
