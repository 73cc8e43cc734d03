// ============================================================================
// Line Processor
// Validates input lines and adds the configured addend to each
// ============================================================================

use crate::domain::{DriverConfig, EchoMode};
use crate::interfaces::{EventHandler, LineEvent};
use crate::numeric::{add, normalize, validate};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

/// Counts of what happened to each input line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

impl ProcessSummary {
    /// Lines read, including skipped ones
    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.skipped
    }

    fn record(&mut self, event: &LineEvent) {
        match event {
            LineEvent::LineAccepted { .. } => self.accepted += 1,
            LineEvent::LineRejected { .. } => self.rejected += 1,
            LineEvent::LineSkipped { .. } => self.skipped += 1,
        }
    }
}

/// Line-oriented driver around [`add`]
///
/// Every line is handled on its own: a rejected line never affects the
/// lines after it.
pub struct LineProcessor {
    config: DriverConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl LineProcessor {
    /// Create a processor from a configuration
    ///
    /// # Errors
    /// Returns the configuration's validation message if the addend is not
    /// a valid numeral.
    pub fn new(config: DriverConfig, event_handler: Arc<dyn EventHandler>) -> Result<Self, String> {
        config.validate()?;
        tracing::debug!(?config, "line processor configured");
        Ok(Self {
            config,
            event_handler,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Classify one line and compute its sum if it is valid
    ///
    /// `line_number` is 1-based and only used for reporting.
    pub fn process_line(&self, line_number: usize, raw: &str) -> LineEvent {
        let line = if self.config.trim_whitespace {
            raw.trim()
        } else {
            raw
        };

        let event = if line.is_empty() && self.config.skip_blank_lines {
            LineEvent::LineSkipped { line_number }
        } else {
            match validate(line) {
                Ok(()) => {
                    let input = match self.config.echo_mode {
                        EchoMode::Raw => line.to_string(),
                        EchoMode::Canonical => normalize(line),
                    };
                    LineEvent::LineAccepted {
                        line_number,
                        input,
                        addend: self.config.addend.clone(),
                        sum: add(line, &self.config.addend),
                    }
                },
                Err(e) => LineEvent::LineRejected {
                    line_number,
                    input: line.to_string(),
                    reason: e.to_string(),
                },
            }
        };

        self.event_handler.on_event(event.clone());
        event
    }

    /// Report text for an event, `None` for skipped lines
    pub fn render(event: &LineEvent) -> Option<String> {
        match event {
            LineEvent::LineAccepted {
                input, addend, sum, ..
            } => Some(format!("{} + {} = {}", input, addend, sum)),
            LineEvent::LineRejected { input, .. } => {
                Some(format!("'{}' is not a valid double number.", input))
            },
            LineEvent::LineSkipped { .. } => None,
        }
    }

    /// Process every line of `reader`, writing one report line per
    /// non-skipped input line to `writer`
    ///
    /// # Errors
    /// Propagates read and write failures, including input that is not UTF-8.
    pub fn process<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> io::Result<ProcessSummary> {
        let mut summary = ProcessSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let event = self.process_line(index + 1, &line);
            if let Some(report) = Self::render(&event) {
                writeln!(writer, "{}", report)?;
            }
            summary.record(&event);
        }

        writer.flush()?;
        tracing::debug!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            skipped = summary.skipped,
            "input processed"
        );
        Ok(summary)
    }

    /// Open `path` and [`process`](Self::process) it
    pub fn process_file<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        writer: W,
    ) -> io::Result<ProcessSummary> {
        let file = File::open(path.as_ref())?;
        self.process(BufReader::new(file), writer)
    }
}
