//! Streaming segmentation protocol
//!
//! This crate defines the contract between a rolling character buffer,
//! pluggable segmentation strategies ("cutters") and the dispatcher that
//! decides, at every position of a stream, which cutter may consume text.
//! Cutters may stop in the middle of a match when the buffer runs out and
//! are resumed once the caller feeds more characters, so text never has to
//! be resident in memory all at once.
//!
//! ```
//! use cleaver_core::{
//!     Beef, Cutter, CutterRegistry, DispatchState, Dispatcher, Disposition, Dissection, Sink,
//!     Token,
//! };
//!
//! struct Words;
//!
//! impl Cutter for Words {
//!     fn name(&self) -> &str {
//!         "words"
//!     }
//!
//!     fn assignable(&self, beef: &Beef<'_>, history: usize, index: usize) -> Disposition {
//!         match beef.char_at(index) {
//!             Some(c) if !c.is_whitespace() && history == index => Disposition::Assigned,
//!             Some(c) if !c.is_whitespace() => Disposition::Point,
//!             _ => Disposition::Limit,
//!         }
//!     }
//!
//!     fn dissect(&self, sink: &mut dyn Sink, beef: &Beef<'_>, offset: usize) -> Dissection {
//!         let end = beef.scan_while(offset, |c| !c.is_whitespace());
//!         if end == beef.end() && !beef.is_final() {
//!             return Dissection::Partial(offset);
//!         }
//!         sink.collect(Token::new(beef.text(offset, end), offset, end));
//!         Dissection::Complete(end)
//!     }
//! }
//!
//! let mut dispatcher = Dispatcher::new(CutterRegistry::builder().with(Words).build());
//! let mut tokens: Vec<Token> = Vec::new();
//!
//! dispatcher.feed("paoding cuts").unwrap();
//! assert_eq!(dispatcher.run(&mut tokens).unwrap(), DispatchState::AwaitingInput);
//! dispatcher.feed(" well").unwrap();
//! dispatcher.finish();
//! assert_eq!(dispatcher.run(&mut tokens).unwrap(), DispatchState::Done);
//!
//! let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, ["paoding", "cuts", "well"]);
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod cutter;
pub mod dispatcher;
pub mod disposition;
pub mod error;
pub mod registry;
pub mod sink;

// Re-export key types
pub use buffer::{Beef, RollingBuffer};
pub use cutter::Cutter;
pub use dispatcher::{DispatchState, DispatchStats, Dispatcher, DispatcherOptions};
pub use disposition::{Disposition, Dissection};
pub use error::{CoreError, Result, Violation};
pub use registry::{CutterRegistry, CutterRegistryBuilder};
pub use sink::{emit_fn, emit_push, FnSink, Sink, Token};
