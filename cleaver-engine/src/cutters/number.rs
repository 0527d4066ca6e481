//! Number cutter

use super::disposition_for;
use crate::chars::{is_decimal_separator, is_digit};
use cleaver_core::{Beef, Cutter, Disposition, Dissection, Sink, Token};

/// Digit runs with an optional decimal part (`42`, `3.14`, `２０２４`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCutter;

impl NumberCutter {
    /// Create a number cutter
    pub fn new() -> Self {
        Self
    }
}

impl Cutter for NumberCutter {
    fn name(&self) -> &str {
        "number"
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        disposition_for(beef.char_at(index), history, index, is_digit)
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        let waiting = |pos: usize| pos == beef.end() && !beef.is_final();

        let integer_end = beef.scan_while(offset, is_digit);
        if waiting(integer_end) {
            return Dissection::Partial(offset);
        }

        let mut end = integer_end;
        if beef.char_at(integer_end).is_some_and(is_decimal_separator) {
            let fraction = integer_end + 1;
            if waiting(fraction) {
                return Dissection::Partial(offset);
            }
            let fraction_end = beef.scan_while(fraction, is_digit);
            if fraction_end > fraction {
                if waiting(fraction_end) {
                    return Dissection::Partial(offset);
                }
                end = fraction_end;
            }
        }

        sink.collect(Token::new(beef.text(offset, end), offset, end));
        Dissection::Complete(end)
    }
}
