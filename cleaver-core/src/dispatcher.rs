//! Dispatcher: arbitration, dissection and buffer refill
//!
//! The dispatcher owns the [`RollingBuffer`] and walks a cursor over it.
//! At every position it polls the registered cutters in priority order; the
//! first one answering [`Disposition::Assigned`] dissects. A
//! [`Dissection::Partial`] result suspends the session until the caller
//! feeds more text, after which the same cutter is resumed where it stopped.
//!
//! ```text
//!            feed / finish
//!   ┌──────────────┐ ───────▶ ┌──────────┐  buffer exhausted, final  ┌──────┐
//!   │AwaitingInput │          │ Scanning │ ────────────────────────▶ │ Done │
//!   └──────────────┘ ◀─────── └──────────┘                           └──────┘
//!        partial / buffer exhausted
//! ```

use crate::buffer::{Beef, RollingBuffer};
use crate::cutter::Cutter;
use crate::disposition::{Disposition, Dissection};
use crate::error::{CoreError, Result, Violation};
use crate::registry::CutterRegistry;
use crate::sink::{Sink, Token};
use tracing::{debug, error, trace, warn};

/// Dispatcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// Offering positions to cutters
    Scanning,
    /// Waiting for the caller to feed text or finish the stream
    AwaitingInput,
    /// Stream ended and buffer exhausted; no cutter will run again
    Done,
}

/// Dispatcher tuning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherOptions {
    /// Re-query the winning cutter before dissection and fail the session
    /// if the two answers differ
    pub strict: bool,
}

/// Counters collected while dispatching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Number of `dissect` calls
    pub dissections: usize,
    /// Number of tokens forwarded to the sink
    pub tokens: usize,
    /// Number of times a suspended cutter was resumed directly
    pub resumptions: usize,
    /// Number of suspensions waiting for input
    pub suspensions: usize,
    /// Characters no cutter claimed
    pub skipped_chars: usize,
    /// Partial results returned on the final buffer
    pub starved: usize,
}

/// Cutter to resume once the buffer grows
#[derive(Debug, Clone, Copy)]
struct Resume {
    cutter: usize,
    offset: usize,
}

/// Orchestrates the buffer and the registered cutters for one session
#[derive(Debug)]
pub struct Dispatcher {
    registry: CutterRegistry,
    buffer: RollingBuffer,
    options: DispatcherOptions,
    state: DispatchState,
    cursor: usize,
    history: usize,
    resume: Option<Resume>,
    /// Cutter excluded at an offset after starving on the final buffer
    excluded: Option<Resume>,
    failure: Option<CoreError>,
    stats: DispatchStats,
}

impl Dispatcher {
    /// Create a dispatcher over an ordered registry
    pub fn new(registry: CutterRegistry) -> Self {
        Self::with_options(registry, DispatcherOptions::default())
    }

    /// Create a dispatcher with explicit options
    pub fn with_options(registry: CutterRegistry, options: DispatcherOptions) -> Self {
        Self {
            registry,
            buffer: RollingBuffer::new(),
            options,
            state: DispatchState::Scanning,
            cursor: 0,
            history: 0,
            resume: None,
            excluded: None,
            failure: None,
            stats: DispatchStats::default(),
        }
    }

    /// Segment a complete text in one go
    pub fn dispatch_str(
        registry: CutterRegistry,
        text: &str,
        sink: &mut dyn Sink,
    ) -> Result<DispatchStats> {
        let mut dispatcher = Self::new(registry);
        dispatcher.feed(text)?;
        dispatcher.finish();
        dispatcher.run(sink)?;
        Ok(dispatcher.stats)
    }

    /// Current state
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Next unconsumed absolute offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Offset where the current scanning attempt started
    pub fn history(&self) -> usize {
        self.history
    }

    /// Counters so far
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// The buffer, for inspection
    pub fn buffer(&self) -> &RollingBuffer {
        &self.buffer
    }

    /// The registry this session dispatches over
    pub fn registry(&self) -> &CutterRegistry {
        &self.registry
    }

    /// Name and offset of the cutter waiting to be resumed, if any
    pub fn pending_resume(&self) -> Option<(&str, usize)> {
        let resume = self.resume?;
        let cutter = self.registry.get(resume.cutter)?;
        Some((cutter.name(), resume.offset))
    }

    /// Append newly available text, returning the number of characters added
    pub fn feed(&mut self, text: &str) -> Result<usize> {
        self.check_failed()?;
        if self.state == DispatchState::Done {
            return Err(CoreError::StreamEnded);
        }

        let added = self.buffer.append(text)?;
        if added > 0 && self.state == DispatchState::AwaitingInput {
            self.state = DispatchState::Scanning;
        }
        Ok(added)
    }

    /// Signal end-of-stream
    pub fn finish(&mut self) {
        self.buffer.mark_end_of_stream();
        if self.state == DispatchState::AwaitingInput {
            self.state = DispatchState::Scanning;
        }
    }

    /// Drive dissection until more input is needed or the stream is done
    pub fn run(&mut self, sink: &mut dyn Sink) -> Result<DispatchState> {
        self.check_failed()?;
        while self.state == DispatchState::Scanning {
            if let Err(err) = self.step(sink) {
                error!(%err, "segmentation session aborted");
                self.failure = Some(err.clone());
                return Err(err);
            }
        }
        Ok(self.state)
    }

    fn check_failed(&self) -> Result<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn step(&mut self, sink: &mut dyn Sink) -> Result<()> {
        let offset = self.cursor;
        if offset >= self.buffer.end() {
            if self.buffer.is_final() {
                self.resume = None;
                self.state = DispatchState::Done;
                debug!(end = offset, stats = ?self.stats, "dispatch done");
            } else {
                self.suspend()?;
            }
            return Ok(());
        }

        self.history = offset;
        let resume = self.resume.take().filter(|resume| resume.offset == offset);
        let excluded = self
            .excluded
            .filter(|excluded| excluded.offset == offset)
            .map(|excluded| excluded.cutter);

        let beef = self.buffer.slice_from(offset)?;
        let winner = match resume {
            Some(resume) if claims(&self.registry, resume.cutter, &beef, offset) => {
                self.stats.resumptions += 1;
                Some(resume.cutter)
            }
            _ => arbitrate(&self.registry, &beef, offset, excluded, self.options)?,
        };

        let Some(winner) = winner else {
            let next = next_point(&self.registry, &beef, offset);
            trace!(from = offset, to = next, "no cutter claimed position, skipping");
            self.stats.skipped_chars += next - offset;
            self.cursor = next;
            self.history = next;
            return Ok(());
        };

        let outcome = dissect(self.registry.cutter(winner), sink, &beef, offset)?;
        let is_final = beef.is_final();
        self.stats.dissections += 1;
        self.stats.tokens += outcome.tokens;

        let end = outcome.result.end();
        self.cursor = end;
        self.history = end;
        match outcome.result {
            Dissection::Complete(_) => {}
            Dissection::Partial(_) if is_final => {
                let name = self.cutter_name(winner);
                warn!(
                    cutter = name,
                    offset = end,
                    "partial result on final buffer, offering position to other cutters"
                );
                self.stats.starved += 1;
                self.excluded = Some(Resume {
                    cutter: winner,
                    offset: end,
                });
            }
            Dissection::Partial(_) => {
                self.resume = Some(Resume {
                    cutter: winner,
                    offset: end,
                });
                self.suspend()?;
            }
        }
        Ok(())
    }

    /// Trim consumed text and wait for the caller
    fn suspend(&mut self) -> Result<()> {
        let trimmed = self.buffer.trim_before(self.cursor)?;
        self.stats.suspensions += 1;
        self.state = DispatchState::AwaitingInput;
        trace!(
            cursor = self.cursor,
            trimmed,
            pending = ?self.pending_resume(),
            "awaiting input"
        );
        Ok(())
    }

    fn cutter_name(&self, index: usize) -> &str {
        self.registry.cutter(index).name()
    }
}

fn claims(registry: &CutterRegistry, index: usize, beef: &Beef<'_>, offset: usize) -> bool {
    registry
        .get(index)
        .is_some_and(|cutter| cutter.assignable(beef, offset, offset).is_assigned())
}

/// First cutter, in priority order, claiming `offset`
fn arbitrate(
    registry: &CutterRegistry,
    beef: &Beef<'_>,
    offset: usize,
    excluded: Option<usize>,
    options: DispatcherOptions,
) -> Result<Option<usize>> {
    for (index, cutter) in registry.iter().enumerate() {
        if excluded == Some(index) {
            continue;
        }

        let disposition = cutter.assignable(beef, offset, offset);
        trace!(cutter = cutter.name(), offset, ?disposition, "polled");
        if !disposition.is_assigned() {
            continue;
        }

        if options.strict {
            let again = cutter.assignable(beef, offset, offset);
            if again != disposition {
                return Err(CoreError::ContractViolation {
                    cutter: cutter.name().to_string(),
                    offset,
                    violation: Violation::NonDeterministic {
                        first: disposition,
                        second: again,
                    },
                });
            }
        }
        return Ok(Some(index));
    }
    Ok(None)
}

/// Earliest index after `history` where any cutter reports a point,
/// else the end of the window
fn next_point(registry: &CutterRegistry, beef: &Beef<'_>, history: usize) -> usize {
    ((history + 1)..beef.end())
        .find(|&index| {
            registry
                .iter()
                .any(|cutter| cutter.assignable(beef, history, index) == Disposition::Point)
        })
        .unwrap_or_else(|| beef.end())
}

struct Outcome {
    result: Dissection,
    tokens: usize,
}

/// Run the winning cutter behind a guard that enforces span ordering
fn dissect(
    cutter: &dyn Cutter,
    sink: &mut dyn Sink,
    beef: &Beef<'_>,
    offset: usize,
) -> Result<Outcome> {
    let mut guard = SpanGuard::new(sink, offset);
    let result = cutter.dissect(&mut guard, beef, offset);
    debug!(cutter = cutter.name(), offset, ?result, tokens = guard.forwarded, "dissected");

    let violation = check_result(result, offset, beef.end())
        .or(guard.violation)
        .or_else(|| {
            (guard.last_end > result.end()).then_some(Violation::SpanPastEnd {
                span_end: guard.last_end,
                returned: result.end(),
            })
        });

    match violation {
        Some(violation) => Err(CoreError::ContractViolation {
            cutter: cutter.name().to_string(),
            offset,
            violation,
        }),
        None => Ok(Outcome {
            result,
            tokens: guard.forwarded,
        }),
    }
}

fn check_result(result: Dissection, offset: usize, limit: usize) -> Option<Violation> {
    let end = result.end();
    if end < offset {
        Some(Violation::BackwardProgress { end })
    } else if end > limit {
        Some(Violation::OutOfBounds { end, limit })
    } else if end == offset && !result.is_partial() {
        Some(Violation::NoProgress)
    } else {
        None
    }
}

/// Sink wrapper that stops forwarding at the first misplaced span
struct SpanGuard<'s> {
    inner: &'s mut dyn Sink,
    last_end: usize,
    forwarded: usize,
    violation: Option<Violation>,
}

impl<'s> SpanGuard<'s> {
    fn new(inner: &'s mut dyn Sink, offset: usize) -> Self {
        Self {
            inner,
            last_end: offset,
            forwarded: 0,
            violation: None,
        }
    }
}

impl Sink for SpanGuard<'_> {
    fn collect(&mut self, token: Token) {
        if self.violation.is_some() {
            return;
        }
        if token.end < token.start {
            self.violation = Some(Violation::SpanOutOfRange {
                start: token.start,
                end: token.end,
            });
            return;
        }
        if token.start < self.last_end {
            self.violation = Some(if self.forwarded == 0 {
                Violation::SpanOutOfRange {
                    start: token.start,
                    end: token.end,
                }
            } else {
                Violation::SpanOutOfOrder {
                    start: token.start,
                    end: token.end,
                    previous_end: self.last_end,
                }
            });
            return;
        }

        self.last_end = token.end;
        self.forwarded += 1;
        self.inner.collect(token);
    }
}
