//! Output formatting for the one-shot commands

use console::{style, Term};
use serde::Serialize;
use timber_cubic::core::{compute_volume, Field, InputBuffer, InputSnapshot};

use crate::commands::OutputFormat;
use crate::error::CliResult;

/// Result of the `volume` command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeReport {
    /// Length as given
    pub length: String,
    /// Circumference as given
    pub circumference: String,
    /// Whole feet
    pub feet: f64,
    /// Remaining inches
    pub inches: u8,
    /// Formatted volume
    pub display: String,
}

impl VolumeReport {
    /// Computes the volume for raw field text
    #[must_use]
    pub fn compute(length: &str, circumference: &str) -> Self {
        let volume = compute_volume(length, circumference);
        Self {
            length: length.to_string(),
            circumference: circumference.to_string(),
            feet: volume.feet,
            inches: volume.inches,
            display: volume.to_string(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}

fn styled_volume(display: &str, use_color: bool) -> String {
    if use_color {
        style(display).green().bold().force_styling(true).to_string()
    } else {
        display.to_string()
    }
}

/// Renders the `volume` command output
pub fn render_volume(
    report: &VolumeReport,
    format: OutputFormat,
    use_color: bool,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(styled_volume(&report.display, use_color)),
    }
}

/// Renders the final state of a `keys` replay
pub fn render_snapshot(
    snapshot: &InputSnapshot,
    format: OutputFormat,
    use_color: bool,
) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(snapshot);
    }

    let value = |raw: &str| -> String {
        if raw.is_empty() {
            InputBuffer::PLACEHOLDER.to_string()
        } else {
            raw.to_string()
        }
    };
    let label = |text: &str| -> String {
        let padded = format!("{text:<20}");
        if use_color {
            style(padded).dim().force_styling(true).to_string()
        } else {
            padded
        }
    };
    let marker = |field: Field| if snapshot.active == field { " *" } else { "" };

    Ok(format!(
        "{}{}{}\n{}{}{}\n{}{}",
        label(&format!("{}:", Field::Length.label())),
        value(&snapshot.length),
        marker(Field::Length),
        label(&format!("{}:", Field::Circumference.label())),
        value(&snapshot.circumference),
        marker(Field::Circumference),
        label("Volume:"),
        styled_volume(&snapshot.display, use_color),
    ))
}

/// Writes command output to stdout and notices to stderr
#[derive(Debug)]
pub struct Printer {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Printer {
    /// Creates a printer over the process streams
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Prints command output; never suppressed
    pub fn output(&self, text: &str) -> CliResult<()> {
        self.out.write_line(text)?;
        Ok(())
    }

    /// Prints a notice unless quiet
    pub fn info(&self, message: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().force_styling(true).to_string()
        } else {
            "INFO".to_string()
        };
        self.err.write_line(&format!("{prefix} {message}"))?;
        Ok(())
    }
}
