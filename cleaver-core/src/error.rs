//! Error types for the segmentation protocol

use crate::disposition::Disposition;
use thiserror::Error;

/// Core protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Characters were offered after end-of-stream was signaled
    #[error("cannot append after end of stream")]
    StreamEnded,

    /// An offset fell outside the current buffer window
    #[error("offset {offset} outside buffer window [{start}, {end}]")]
    BufferBounds {
        /// The rejected offset
        offset: usize,
        /// First absolute offset still held by the buffer
        start: usize,
        /// Absolute offset one past the last held character
        end: usize,
    },

    /// A cutter broke the protocol; the session cannot continue
    #[error("cutter '{cutter}' violated the segmentation contract at offset {offset}: {violation}")]
    ContractViolation {
        /// Name of the offending cutter
        cutter: String,
        /// Offset the cutter was dissecting from
        offset: usize,
        /// What went wrong
        violation: Violation,
    },
}

impl CoreError {
    /// Whether this error is a cutter contract violation
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CoreError::ContractViolation { .. })
    }
}

/// Ways a cutter can break the protocol
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Returned end lies before the dissection offset
    #[error("returned end {end} is before the dissection offset")]
    BackwardProgress {
        /// The returned end
        end: usize,
    },

    /// Completed without consuming a single character
    #[error("completed without consuming any character")]
    NoProgress,

    /// Returned end lies past the buffer
    #[error("returned end {end} exceeds buffer end {limit}")]
    OutOfBounds {
        /// The returned end
        end: usize,
        /// End of the buffer at call time
        limit: usize,
    },

    /// A span started before the previous one ended
    #[error("span {start}..{end} overlaps or precedes the previous span ending at {previous_end}")]
    SpanOutOfOrder {
        /// Span start
        start: usize,
        /// Span end
        end: usize,
        /// End of the previously reported span
        previous_end: usize,
    },

    /// A span started before the dissection offset or was inverted
    #[error("span {start}..{end} lies outside the dissected range")]
    SpanOutOfRange {
        /// Span start
        start: usize,
        /// Span end
        end: usize,
    },

    /// A span extends past the end the cutter returned
    #[error("span ending at {span_end} extends past the returned end {returned}")]
    SpanPastEnd {
        /// End of the furthest span
        span_end: usize,
        /// The returned end
        returned: usize,
    },

    /// Two identical `assignable` queries disagreed
    #[error("assignable answered {first:?} then {second:?} for identical input")]
    NonDeterministic {
        /// First answer
        first: Disposition,
        /// Second answer
        second: Disposition,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
