//! Progress reporting module

use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use std::time::Duration;

const BYTES_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}) {msg}";
const INPUTS_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs {msg}";

/// Progress reporter for segmenting many inputs
///
/// Drawn on stderr and hidden automatically when stderr is not a terminal.
/// Measured in bytes when every input size is known up front, otherwise in
/// inputs.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    by_bytes: bool,
    bytes: u64,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            by_bytes: false,
            bytes: 0,
        }
    }

    /// Initialize the bar for `total_inputs` inputs of `total_bytes` bytes
    pub fn init(&mut self, total_inputs: u64, total_bytes: Option<u64>) {
        if self.quiet || total_inputs < 2 {
            return;
        }

        let (length, template) = match total_bytes {
            Some(bytes) => (bytes, BYTES_TEMPLATE),
            None => (total_inputs, INPUTS_TEMPLATE),
        };
        self.by_bytes = total_bytes.is_some();

        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(length);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    /// Record a finished input
    pub fn input_completed(&mut self, name: &str, bytes: usize, tokens: usize) {
        self.bytes += bytes as u64;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{name}: {tokens} tokens"));
            pb.inc(if self.by_bytes { bytes as u64 } else { 1 });
        }
    }

    /// Total bytes segmented so far
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("done, {}", HumanBytes(self.bytes)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init(10, None);
        assert!(reporter.progress_bar.is_none());
        reporter.input_completed("a.txt", 12, 3);
        assert_eq!(reporter.bytes(), 12);
        reporter.finish();
    }

    #[test]
    fn test_single_input_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init(1, Some(100));
        assert!(reporter.progress_bar.is_none());
    }

    #[test]
    fn test_bar_counts_inputs_when_sizes_unknown() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init(2, None);
        reporter.input_completed("<stdin>", 10, 2);
        reporter.input_completed("b.txt", 5, 1);
        assert_eq!(reporter.progress_bar.as_ref().map(|pb| pb.position()), Some(2));
        assert_eq!(reporter.bytes(), 15);
        reporter.finish();
    }

    #[test]
    fn test_bar_counts_bytes_when_sizes_known() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init(2, Some(15));
        reporter.input_completed("a.txt", 10, 2);
        assert_eq!(reporter.progress_bar.as_ref().map(|pb| pb.position()), Some(10));
        reporter.input_completed("b.txt", 5, 1);
        assert_eq!(
            reporter.progress_bar.as_ref().and_then(|pb| pb.length()),
            Some(15)
        );
        assert_eq!(reporter.progress_bar.as_ref().map(|pb| pb.position()), Some(15));
        reporter.finish();
    }
}
