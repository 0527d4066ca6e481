//! Segment command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, FormatOptions, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::Context;
use clap::Args;
use cleaver_api::{ApiError, Config, Segmenter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extra dictionary file (repeatable)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Vec<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CLEAVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated cutters in priority order
    #[arg(long, value_name = "LIST")]
    pub cutters: Option<String>,

    /// Read size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Print character offsets next to tokens
    #[arg(long)]
    pub offsets: bool,

    /// Fail when a cutter answers inconsistently
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging the config file with flags
#[derive(Debug)]
pub struct Settings {
    /// Segmentation configuration
    pub config: Config,
    /// Output format
    pub format: OutputFormat,
    /// Formatting switches
    pub options: FormatOptions,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.settings(&file_config)?;
        let segmenter = Segmenter::with_config(settings.config)
            .map_err(config_error)?;
        log::debug!("Cutters: {}", segmenter.cutter_names().join(", "));

        let sources = resolve_patterns(&self.input)?;
        log::info!("Found {} input(s) to segment", sources.len());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter = create_formatter(settings.format, writer, settings.options);

        let mut progress = ProgressReporter::new(self.quiet);
        let total_bytes = sources.iter().map(InputSource::size).sum::<Option<u64>>();
        progress.init(sources.len() as u64, total_bytes);

        for source in &sources {
            let (bytes, tokens) = segment_source(&segmenter, source, formatter.as_mut())?;
            progress.input_completed(&source.display_name(), bytes, tokens);
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "Segmented {} input(s), {} bytes",
            sources.len(),
            progress.bytes()
        );
        Ok(())
    }

    /// Merge flags over the configuration file
    pub fn settings(&self, file_config: &CliConfig) -> CliResult<Settings> {
        let segmentation = &file_config.segmentation;

        let mut builder = match &self.cutters {
            Some(list) => Config::builder().cutter_list(list),
            None => Config::builder().cutters(&segmentation.cutters),
        }
        .map_err(config_error)?;

        builder = builder
            .chunk_size_kb(self.chunk_kb.unwrap_or(segmentation.chunk_size_kb))
            .strict(self.strict || segmentation.strict);
        for path in segmentation.dictionaries.iter().chain(&self.dictionary) {
            builder = builder.dictionary(path.clone());
        }
        let config = builder
            .build()
            .map_err(config_error)?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.default_format).ok_or_else(
                || {
                    CliError::ConfigError(format!(
                        "unknown output format '{}'",
                        file_config.output.default_format
                    ))
                },
            )?,
        };

        Ok(Settings {
            config,
            format,
            options: FormatOptions {
                include_offsets: self.offsets || file_config.output.include_offsets,
                pretty_json: file_config.output.pretty_json,
            },
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

fn config_error(error: ApiError) -> CliError {
    match error {
        ApiError::Config(message) => CliError::ConfigError(message),
        other => CliError::ConfigError(other.to_string()),
    }
}

/// Stream one input through the formatter, returning (bytes, tokens)
fn segment_source(
    segmenter: &Segmenter,
    source: &InputSource,
    formatter: &mut dyn OutputFormatter,
) -> CliResult<(usize, usize)> {
    let name = source.display_name();
    log::debug!("Segmenting {name}");
    formatter.begin_source(&name)?;

    let mut write_error = None;
    let metadata = segmenter
        .stream(source.to_input(), |token| {
            if write_error.is_none() {
                if let Err(e) = formatter.format_token(&token) {
                    write_error = Some(e);
                }
            }
        })
        .map_err(|e| CliError::SegmentationError {
            source: name.clone(),
            message: e.to_string(),
        })?;
    if let Some(e) = write_error {
        return Err(e.context(format!("Failed to write tokens of {name}")));
    }

    formatter.end_source(&metadata)?;
    log::info!(
        "{name}: {} tokens, {} chars, {} resumptions",
        metadata.token_count,
        metadata.total_chars,
        metadata.resumptions
    );
    Ok((metadata.total_bytes, metadata.token_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: SegmentArgs,
    }

    fn args(extra: &[&str]) -> SegmentArgs {
        let mut argv = vec!["segment", "-i", "a.txt"];
        argv.extend_from_slice(extra);
        Harness::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_defaults_come_from_config() {
        let settings = args(&[]).settings(&CliConfig::default()).unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(
            settings.config.cutters(),
            vec!["dictionary", "letter", "number", "fallback"]
        );
        assert_eq!(settings.config.chunk_size(), 64 * 1024);
        assert!(!settings.options.include_offsets);
    }

    #[test]
    fn test_flags_override_config() {
        let mut file_config = CliConfig::default();
        file_config.output.default_format = "markdown".to_string();
        file_config.segmentation.dictionaries = vec![PathBuf::from("base.dic")];

        let settings = args(&[
            "-f",
            "json",
            "--cutters",
            "letter,fallback",
            "--chunk-kb",
            "4",
            "--strict",
            "--offsets",
            "-d",
            "extra.dic",
        ])
        .settings(&file_config)
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.config.cutters(), vec!["letter", "fallback"]);
        assert_eq!(settings.config.chunk_size(), 4 * 1024);
        assert!(settings.config.is_strict());
        assert!(settings.options.include_offsets);
        assert_eq!(
            settings.config.dictionaries(),
            &[PathBuf::from("base.dic"), PathBuf::from("extra.dic")]
        );
    }

    #[test]
    fn test_config_format_used_without_flag() {
        let mut file_config = CliConfig::default();
        file_config.output.default_format = "md".to_string();
        let settings = args(&[]).settings(&file_config).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_invalid_settings() {
        let mut file_config = CliConfig::default();
        file_config.output.default_format = "yaml".to_string();
        assert!(args(&[]).settings(&file_config).is_err());

        let err = args(&["--cutters", "letter,runes"])
            .settings(&CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("Configuration error"));

        assert!(args(&["--cutters", "fallback,letter"])
            .settings(&CliConfig::default())
            .is_err());
    }
}
