use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use mirai_event::{DecoderConfig, Registries};
use tracing::{debug, info, warn};

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::{AppError, Result},
    output::OutputManager,
};

/// Options of one `decode` run.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    pub lines: bool,
    pub chain: bool,
    pub output: OutputFormat,
    pub keep_going: bool,
    pub max_depth: Option<usize>,
}

/// Outcome of a `decode` run that did not abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeSummary {
    pub total: usize,
    pub failed: usize,
}

pub struct CommandExecutor {
    config: AppConfig,
    registries: Registries,
    output_manager: OutputManager,
}

impl CommandExecutor {
    pub fn new(config: AppConfig, colored: bool) -> Self {
        let output_manager = OutputManager::new(colored && config.colored);
        Self {
            config,
            registries: Registries::with_defaults(),
            output_manager,
        }
    }

    /// Decode payloads from `file`, or stdin when it is `None`.
    pub fn decode_file(&self, file: Option<&Path>, options: DecodeOptions) -> Result<()> {
        let input = match file {
            Some(path) => {
                debug!("Reading payloads from {}", path.display());
                fs::read(path)?
            }
            None => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer)?;
                buffer
            }
        };

        let stdout = io::stdout();
        let stderr = io::stderr();
        let summary = self.decode_input(&input, options, &mut stdout.lock(), &mut stderr.lock())?;

        info!(
            "Decoded {} payload(s), {} failed",
            summary.total, summary.failed
        );
        if summary.failed > 0 {
            return Err(AppError::PartialFailure {
                failed: summary.failed,
                total: summary.total,
            });
        }
        Ok(())
    }

    /// Decode `input` and write one rendered result per payload to `out`.
    ///
    /// Without `keep_going` the first failure is returned as the error.
    /// With it, failures are reported (to `out` for JSON output, `err`
    /// otherwise) and counted in the summary.
    pub fn decode_input<W: Write, E: Write>(
        &self,
        input: &[u8],
        options: DecodeOptions,
        out: &mut W,
        err: &mut E,
    ) -> Result<DecodeSummary> {
        let config = self.decoder_config(options.max_depth)?;
        let mut summary = DecodeSummary::default();

        let payloads: Vec<(Option<usize>, &[u8])> = if options.lines {
            input
                .split(|b| *b == b'\n')
                .enumerate()
                .filter(|(_, line)| !line.trim_ascii().is_empty())
                .map(|(index, line)| (Some(index + 1), line))
                .collect()
        } else {
            vec![(None, input)]
        };

        for (line, payload) in payloads {
            summary.total += 1;
            match self.render(payload, &config, options) {
                Ok(rendered) => writeln!(out, "{rendered}")?,
                Err(AppError::Decode(error)) => {
                    summary.failed += 1;
                    if !options.keep_going {
                        return Err(error.into());
                    }
                    warn!(kind = error.kind(), ?line, "Skipping payload that failed to decode");
                    let report =
                        self.output_manager
                            .format_failure(&error, line, &options.output)?;
                    if options.output.is_json() {
                        writeln!(out, "{report}")?;
                    } else {
                        writeln!(err, "{report}")?;
                    }
                }
                Err(other) => return Err(other),
            }
        }

        Ok(summary)
    }

    fn render(&self, payload: &[u8], config: &DecoderConfig, options: DecodeOptions) -> Result<String> {
        if options.chain {
            let chain = self.registries.chain_decoder(config).decode(payload)?;
            self.output_manager.format_chain(&chain, &options.output)
        } else {
            let event = self.registries.event_decoder(config).decode(payload)?;
            self.output_manager.format_event(&event, &options.output)
        }
    }

    fn decoder_config(&self, max_depth: Option<usize>) -> Result<DecoderConfig> {
        let config = match max_depth {
            Some(depth) => self.config.decoder.with_max_depth(depth),
            None => self.config.decoder,
        };
        config.validate().map_err(AppError::InvalidConfig)?;
        Ok(config)
    }

    pub fn list_variants(&self, elements: bool, format: &OutputFormat) -> Result<()> {
        let rendered = self.render_variants(elements, format)?;
        println!("{rendered}");
        Ok(())
    }

    pub fn render_variants(&self, elements: bool, format: &OutputFormat) -> Result<String> {
        if elements {
            let tags = self.registries.elements.tags();
            self.output_manager
                .format_variants("Message elements", &tags, format)
        } else {
            let tags = self.registries.events.tags();
            self.output_manager.format_variants("Events", &tags, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirai_event::{DecodeError, MAX_SUPPORTED_DEPTH};

    fn options(lines: bool, keep_going: bool, output: OutputFormat) -> DecodeOptions {
        DecodeOptions {
            lines,
            chain: false,
            output,
            keep_going,
            max_depth: None,
        }
    }

    fn executor() -> CommandExecutor {
        CommandExecutor::new(AppConfig::default(), false)
    }

    #[test]
    fn test_decode_single_payload() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = executor()
            .decode_input(
                br#"{"type":"BotOnlineEvent","qq":1}"#,
                options(false, false, OutputFormat::JsonCompact),
                &mut out,
                &mut err,
            )
            .unwrap();

        assert_eq!(summary, DecodeSummary { total: 1, failed: 0 });
        assert_eq!(String::from_utf8(out).unwrap(), "{\"type\":\"BotOnlineEvent\",\"qq\":1}\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_first_failure_aborts() {
        let input = b"{\"type\":\"BotOnlineEvent\",\"qq\":1}\n{\"type\":\"Bogus\"}\n{\"type\":\"BotOnlineEvent\",\"qq\":2}\n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = executor().decode_input(
            input,
            options(true, false, OutputFormat::JsonCompact),
            &mut out,
            &mut err,
        );

        assert!(matches!(
            result,
            Err(AppError::Decode(DecodeError::UnknownVariant(_)))
        ));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_keep_going_reports_and_counts() {
        let input = b"{\"type\":\"BotOnlineEvent\",\"qq\":1}\n\n{\"type\":\"Bogus\"}\n{oops\n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary = executor()
            .decode_input(
                input,
                options(true, true, OutputFormat::Pretty),
                &mut out,
                &mut err,
            )
            .unwrap();

        assert_eq!(summary, DecodeSummary { total: 3, failed: 2 });
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("error[unknown_variant] line 3"));
        assert!(err.contains("error[malformed_json] line 4"));
        assert!(String::from_utf8(out).unwrap().starts_with("BotOnlineEvent [bot]"));
    }

    #[test]
    fn test_chain_mode_and_depth_override() {
        let input = br#"[{"type":"Quote","id":1,"origin":[{"type":"Plain","text":"x"}]}]"#;
        let mut out = Vec::new();
        let mut err = Vec::new();

        let mut opts = options(false, false, OutputFormat::Pretty);
        opts.chain = true;
        executor()
            .decode_input(input, opts, &mut out, &mut err)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Elements: Quote"));

        opts.max_depth = Some(1);
        let result = executor().decode_input(input, opts, &mut Vec::new(), &mut Vec::new());
        assert!(matches!(
            result,
            Err(AppError::Decode(DecodeError::RecursionLimitExceeded { limit: 1 }))
        ));

        opts.max_depth = Some(0);
        let result = executor().decode_input(input, opts, &mut Vec::new(), &mut Vec::new());
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));

        opts.max_depth = Some(MAX_SUPPORTED_DEPTH + 1);
        let result = executor().decode_input(input, opts, &mut Vec::new(), &mut Vec::new());
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_render_variants() {
        let executor = executor();

        let events = executor
            .render_variants(false, &OutputFormat::Pretty)
            .unwrap();
        assert!(events.starts_with("Events (49):"));

        let elements = executor
            .render_variants(true, &OutputFormat::JsonCompact)
            .unwrap();
        let tags: Vec<String> = serde_json::from_str(&elements).unwrap();
        assert_eq!(tags.len(), 18);
        assert!(tags.contains(&"Quote".to_string()));
    }
}
