//! Character dispositions and dissection results
//!
//! These two small types carry the whole vocabulary a cutter uses to talk to
//! the dispatcher: whether it wants a position, and how far it got.

/// How a cutter regards the character at some index, relative to the
/// offset where the current scanning attempt started (the history anchor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Not consumable by this cutter.
    ///
    /// When no later position yields [`Disposition::Point`] the next scan
    /// resumes at the end of the buffer.
    Limit,
    /// Consumable. With `history == index` the cutter claims the right to
    /// dissect at this index.
    Assigned,
    /// Consumable, and a fresh scan may begin here. Used as the resume hint
    /// when no cutter claims the current position.
    Point,
}

impl Disposition {
    /// Numeric code used by the classic integer protocol
    /// (`LIMIT = -1`, `POINT = 0`, `ASSIGNED = 1`).
    pub const fn code(self) -> i32 {
        match self {
            Disposition::Limit => -1,
            Disposition::Point => 0,
            Disposition::Assigned => 1,
        }
    }

    /// Decode a classic integer disposition.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Disposition::Limit),
            0 => Some(Disposition::Point),
            1 => Some(Disposition::Assigned),
            _ => None,
        }
    }

    /// Whether this disposition claims the position.
    #[inline]
    pub const fn is_assigned(self) -> bool {
        matches!(self, Disposition::Assigned)
    }
}

/// Outcome of a single `dissect` call.
///
/// Offsets are absolute stream positions, never buffer-relative indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dissection {
    /// Everything from the call offset up to (not including) `end` has been
    /// dissected.
    Complete(usize),
    /// Dissected up to `end`, but the cutter cannot continue past `end`
    /// until more characters arrive.
    Partial(usize),
}

impl Dissection {
    /// The offset the cutter got to.
    #[inline]
    pub const fn end(self) -> usize {
        match self {
            Dissection::Complete(end) | Dissection::Partial(end) => end,
        }
    }

    /// Whether the cutter asked for more input.
    #[inline]
    pub const fn is_partial(self) -> bool {
        matches!(self, Dissection::Partial(_))
    }

    /// Encode with the signed convention: positive for complete, negative
    /// for partial.
    ///
    /// Returns `None` for an end of zero, which has no signed encoding.
    pub fn to_signed(self) -> Option<i64> {
        let end = i64::try_from(self.end()).ok().filter(|&end| end > 0)?;
        Some(match self {
            Dissection::Complete(_) => end,
            Dissection::Partial(_) => -end,
        })
    }

    /// Decode the signed convention. Zero is not a valid result.
    pub fn from_signed(value: i64) -> Option<Self> {
        let end = usize::try_from(value.unsigned_abs()).ok()?;
        match value.signum() {
            1 => Some(Dissection::Complete(end)),
            -1 => Some(Dissection::Partial(end)),
            _ => None,
        }
    }
}
