//! The pluggable cutter protocol
//!
//! A cutter is one segmentation strategy: dictionary words, numbers, latin
//! words, a whitespace fallback, and so on. Cutters never see each other;
//! the [`Dispatcher`](crate::Dispatcher) decides which one consumes text at
//! every position.
//!
//! # Contract
//!
//! * [`Cutter::assignable`] is a pure, deterministic function of the window
//!   contents, the history anchor and the index (`index >= history`).
//! * [`Cutter::dissect`] is only called at an offset for which
//!   `assignable(beef, offset, offset)` just returned
//!   [`Disposition::Assigned`].
//! * Spans are reported left-to-right, without overlap, never before the
//!   call offset and never past the returned end.
//! * A span that could still be the prefix of a longer token is not
//!   reported while the window is not final; the cutter returns
//!   [`Dissection::Partial`] instead and is resumed once more characters
//!   are available. Resumption continues, it never repeats a report.
//! * The returned end is never before the call offset, never past the
//!   window end, and a [`Dissection::Complete`] always consumes at least one
//!   character.

use crate::buffer::Beef;
use crate::disposition::{Disposition, Dissection};
use crate::sink::Sink;
use std::sync::Arc;

/// A segmentation strategy
pub trait Cutter: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Classify the character at `index` for a scan anchored at `history`
    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition;

    /// Consume text from `offset`, reporting tokens to `sink`
    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection;
}

impl<C: Cutter + ?Sized> Cutter for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        (**self).assignable(beef, history, index)
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        (**self).dissect(sink, beef, offset)
    }
}

impl<C: Cutter + ?Sized> Cutter for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
        (**self).assignable(beef, history, index)
    }

    fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
        (**self).dissect(sink, beef, offset)
    }
}
