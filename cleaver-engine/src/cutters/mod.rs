//! Concrete segmentation strategies
//!
//! Every cutter claims a position only when it can start a token there and
//! reports every later position it could also start at as a
//! [`Disposition::Point`](cleaver_core::Disposition::Point), so the
//! dispatcher can skip unclaimed text to the next useful position.

mod dictionary;
mod fallback;
mod letter;
mod number;

pub use dictionary::DictionaryCutter;
pub use fallback::FallbackCutter;
pub use letter::LetterCutter;
pub use number::NumberCutter;

use cleaver_core::Disposition;

/// Disposition of a cutter that can start at any character matching `starts`
pub(crate) fn disposition_for(
    ch: Option<char>,
    history: usize,
    index: usize,
    starts: impl Fn(char) -> bool,
) -> Disposition {
    match ch {
        Some(ch) if starts(ch) && history == index => Disposition::Assigned,
        Some(ch) if starts(ch) => Disposition::Point,
        _ => Disposition::Limit,
    }
}
