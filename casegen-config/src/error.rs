use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the raw TOML and its filename together so validation code can
/// build labelled diagnostics without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error labelled at `key`'s value, when it can be found.
    pub fn validation_error(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_value_span(self.src, key),
            message: message.into(),
        })
    }

    /// Create an invalid package name error.
    pub fn invalid_package_name_error(
        &self,
        key: &str,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackageName {
            src: self.named_source(),
            span: find_value_span(self.src, key),
            name: name.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(casegen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse casegen.toml")]
    #[diagnostic(
        code(casegen::parse_error),
        help("supported keys under [generator] are: mode, fallback_project_name, failure_import, output")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(casegen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid Dart package name '{name}'")]
    #[diagnostic(
        code(casegen::invalid_package_name),
        help("{reason}. Use only lowercase letters, digits, and underscores, starting with a letter or underscore.")
    )]
    InvalidPackageName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}

/// Span of the value assigned to `key` (e.g. `"my_app"` in `fallback_project_name = "my_app"`).
///
/// Falls back to the key itself when no value follows on the same line.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            let key_start = offset + (line.len() - trimmed.len());
            if let Some(after_eq) = rest.trim_start().strip_prefix('=') {
                let value = after_eq.trim();
                if value.is_empty() {
                    return Some(SourceSpan::from((key_start, key.len())));
                }
                let value_start = offset + line.find(value).unwrap_or(0);
                return Some(SourceSpan::from((value_start, value.len())));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[generator]\nfallback_project_name = \"\"\n";
        let span = find_value_span(src, "fallback_project_name").unwrap();
        assert_eq!(span.offset(), 36);
        assert_eq!(span.len(), 2);
        assert_eq!(&src[36..38], "\"\"");
    }

    #[test]
    fn test_find_value_span_missing_key() {
        assert!(find_value_span("[generator]\nmode = \"simple\"\n", "output").is_none());
    }
}
