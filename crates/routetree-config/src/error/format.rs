//! Terminal rendering of configuration errors

use crate::error::ConfigError;
use std::fmt;
use yansi::{Color, Paint, Style};

const MARK: Style = Style::new().fg(Color::Red).bold();
const SUBJECT: Style = Style::new().fg(Color::Cyan);
const LABEL: Style = Style::new().bold();
const FOCUS: Style = Style::new().fg(Color::Yellow);

/// Renders a [`ConfigError`] as a headline naming the offending setting or
/// file, labelled notes, and for parse errors the surrounding file lines.
pub struct ErrorFormatter {
    error: ConfigError,
    use_colors: bool,
}

/// Pieces of one rendered error.
struct Report {
    headline: String,
    subject: Option<String>,
    notes: Vec<(&'static str, String)>,
    snippet: Option<String>,
}

impl Report {
    fn new(headline: impl Into<String>, subject: impl Into<Option<String>>) -> Self {
        Self {
            headline: headline.into(),
            subject: subject.into(),
            notes: Vec::new(),
            snippet: None,
        }
    }

    fn note(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.notes.push((label, value.into()));
        self
    }

    fn snippet(mut self, context: &str) -> Self {
        if !context.trim().is_empty() {
            self.snippet = Some(context.to_string());
        }
        self
    }
}

impl From<&ConfigError> for Report {
    fn from(error: &ConfigError) -> Self {
        match error {
            ConfigError::FileNotFound { path } => {
                Report::new("Configuration file not found", path.display().to_string())
                    .note("hint", "create .routetree.toml or point --config at an existing file")
            }
            ConfigError::UnknownFormat { path } => {
                Report::new("Unknown configuration format", path.display().to_string())
                    .note("supported", ".yml, .yaml, .toml, .json")
            }
            ConfigError::YamlError {
                location,
                message,
                context,
            } => parse_report("YAML", location, message, context),
            ConfigError::TomlError {
                location,
                message,
                context,
            } => parse_report("TOML", location, message, context),
            ConfigError::JsonError {
                location,
                message,
                context,
            } => parse_report("JSON", location, message, context),
            ConfigError::IoError { path, source } => {
                Report::new("Failed to read configuration file", path.display().to_string())
                    .note("cause", source.to_string())
            }
            ConfigError::InvalidEnum {
                field,
                value,
                options,
                hint,
            } => Report::new(format!("Invalid value '{}' for", value), field.clone())
                .note("valid options", options.clone())
                .note("hint", hint.clone()),
            ConfigError::EnvVarError { var, message } => {
                Report::new("Failed to parse environment variable", var.clone())
                    .note("error", message.clone())
            }
            ConfigError::ValidationError { field, message } => {
                Report::new("Invalid setting", field.clone()).note("error", message.clone())
            }
        }
    }
}

fn parse_report(kind: &str, location: &str, message: &str, context: &str) -> Report {
    let file = location.strip_prefix(" in ").map(str::to_string);
    Report::new(format!("Failed to parse {} configuration", kind), file)
        .note("error", message)
        .snippet(context)
}

impl ErrorFormatter {
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    pub fn format(&self) -> String {
        let report = Report::from(&self.error);

        let mut out = format!("{} {}", self.paint("✗", MARK), report.headline);
        if let Some(subject) = &report.subject {
            out.push(' ');
            out.push_str(&self.paint(subject, SUBJECT));
        }
        for (label, value) in &report.notes {
            out.push_str(&format!("\n  {}: {}", self.paint(label, LABEL), value));
        }
        if let Some(snippet) = &report.snippet {
            for line in snippet.lines() {
                out.push('\n');
                if line.starts_with('→') || line.trim_start().starts_with('^') {
                    out.push_str(&self.paint(line, FOCUS));
                } else {
                    out.push_str(line);
                }
            }
        }
        out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_colors {
            text.paint(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Colours only when stderr is a terminal and `NO_COLOR` is unset.
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
