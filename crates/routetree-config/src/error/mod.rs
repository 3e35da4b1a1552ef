//! Error types for configuration loading and validation

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Unknown configuration format
    #[error("Unknown configuration format for file: {path}\nSupported formats: .yml, .yaml, .toml, .json")]
    UnknownFormat { path: PathBuf },

    #[error("Failed to parse YAML configuration{location}:\n{message}\n{context}")]
    YamlError {
        location: String,
        message: String,
        context: String,
    },

    #[error("Failed to parse TOML configuration{location}:\n{message}\n{context}")]
    TomlError {
        location: String,
        message: String,
        context: String,
    },

    #[error("Failed to parse JSON configuration{location}:\n{message}\n{context}")]
    JsonError {
        location: String,
        message: String,
        context: String,
    },

    #[error("Failed to read configuration file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid enum value
    #[error("Invalid value '{value}' for {field}\n  Valid options: {options}\n  Hint: {hint}")]
    InvalidEnum {
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable {var}: {message}")]
    EnvVarError { var: String, message: String },

    /// Generic validation error
    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ConfigError {
    /// Create an invalid enum error with a suggestion
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = Self::suggest_option(&value, options);
        Self::InvalidEnum {
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn from_yaml_error(err: serde_yaml::Error, content: &str, path: Option<&str>) -> Self {
        let context = err
            .location()
            .map(|loc| context_lines(content, loc.line(), None))
            .unwrap_or_default();
        Self::YamlError {
            location: location(path),
            message: err.to_string(),
            context,
        }
    }

    pub fn from_toml_error(err: toml::de::Error, content: &str, path: Option<&str>) -> Self {
        let context = err
            .span()
            .map(|span| {
                let line = content[..span.start].matches('\n').count() + 1;
                context_lines(content, line, None)
            })
            .unwrap_or_default();
        Self::TomlError {
            location: location(path),
            message: err.message().to_string(),
            context,
        }
    }

    pub fn from_json_error(err: serde_json::Error, content: &str, path: Option<&str>) -> Self {
        let context = context_lines(content, err.line(), Some(err.column()));
        Self::JsonError {
            location: location(path),
            message: err.to_string(),
            context,
        }
    }

    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .map(|opt| (opt, Self::distance(&input_lower, &opt.to_lowercase())))
            .min_by_key(|(_, d)| *d);

        match closest {
            Some((opt, d)) if d <= 3 => format!("Did you mean '{}'?", opt),
            _ => "Check your configuration file".to_string(),
        }
    }

    /// Levenshtein distance
    fn distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a.chars().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = usize::from(a_char != *b_char);
                let best = (curr_row[j] + 1)
                    .min(prev_row[j + 1] + 1)
                    .min(prev_row[j] + cost);
                curr_row.push(best);
            }
            prev_row = curr_row;
        }

        prev_row.last().copied().unwrap_or(0)
    }
}

fn location(path: Option<&str>) -> String {
    path.map(|p| format!(" in {}", p)).unwrap_or_default()
}

/// One line either side of `line_num` (1-based), the offending one marked,
/// with a caret under `column` when known.
fn context_lines(content: &str, line_num: usize, column: Option<usize>) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            if num != line_num {
                return format!("  {:3} | {}", num, line);
            }
            let mut marked = format!("→ {:3} | {}", num, line);
            if let Some(col) = column.filter(|c| *c > 0) {
                marked.push_str(&format!("\n        {}^", " ".repeat(col - 1)));
            }
            marked
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggests_close_option() {
        let err = ConfigError::invalid_enum("output.format", "jsno", &["text", "json"]);
        assert!(err.to_string().contains("Did you mean 'json'?"));
    }

    #[test]
    fn test_no_suggestion_for_distant_value() {
        let err = ConfigError::invalid_enum("output.format", "spreadsheet", &["text", "json"]);
        assert!(err.to_string().contains("Check your configuration file"));
    }

    #[test]
    fn test_context_marks_line() {
        let content = "a\nb\nc\nd";
        let context = context_lines(content, 3, None);
        assert!(context.contains("→   3 | c"));
        assert!(context.contains("    2 | b"));
        assert!(!context.contains("| a"));
    }

    #[test]
    fn test_context_is_one_line_either_side() {
        let context = context_lines("a\nb\nc\nd\ne", 3, Some(2));
        assert_eq!(
            context.lines().collect::<Vec<_>>(),
            vec!["    2 | b", "→   3 | c", "         ^", "    4 | d"]
        );
    }

    #[test]
    fn test_context_out_of_range_is_empty() {
        assert!(context_lines("a", 5, None).is_empty());
    }
}
