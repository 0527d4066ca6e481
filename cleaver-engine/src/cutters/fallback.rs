//! Catch-all cutter

use crate::chars::CharClass;
use cleaver_core::{Beef, Cutter, Disposition, Dissection, Sink, Token};

/// Claims every non-whitespace character
///
/// Consecutive characters of the same class form one token, except
/// punctuation and symbols which become one token each. Registered last,
/// it guarantees that no visible character is left unsegmented.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCutter;

impl FallbackCutter {
    /// Create a fallback cutter
    pub fn new() -> Self {
        Self
    }
}

impl Cutter for FallbackCutter {
    fn name(&self) -> &str {
        "fallback"
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        super::disposition_for(beef.char_at(index), history, index, |ch| {
            !ch.is_whitespace()
        })
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let Some(first) = beef.char_at(offset) else {
            return Dissection::Partial(offset);
        };

        let class = CharClass::of(first);
        let end = match class {
            CharClass::Punctuation | CharClass::Whitespace => offset + 1,
            _ => beef.scan_while(offset, |ch| CharClass::of(ch) == class),
        };
        if class != CharClass::Punctuation && end == beef.end() && !beef.is_final() {
            return Dissection::Partial(offset);
        }

        sink.collect(Token::new(beef.text(offset, end), offset, end));
        Dissection::Complete(end)
    }
}
