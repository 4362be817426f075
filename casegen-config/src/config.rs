use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use casegen_core::{Mode, defaults};
use serde::Deserialize;

use crate::{CONFIG_FILE_NAME, Error, Result, SourceContext};

/// Root of `casegen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub mode: Mode,
    /// Package name used when `pubspec.yaml` is missing or has no `name`.
    pub fallback_project_name: String,
    /// Location of the `Failure` type, relative to `lib/`.
    pub failure_import: String,
    /// Output directory for generated files.
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            fallback_project_name: defaults::PROJECT_NAME.to_string(),
            failure_import: defaults::FAILURE_PATH.to_string(),
            output: None,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a casegen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load the file at `path`, or the defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        log::debug!("loading config from {}", path.display());
        Self::from_file(path)
    }

    /// Parse a casegen.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.generator.validate(&ctx)?;
        Ok(config)
    }
}

impl GeneratorConfig {
    fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        ctx.validate_package_name("fallback_project_name", &self.fallback_project_name)?;

        if self.failure_import.trim().is_empty() {
            return Err(ctx.validation_error("failure_import", "failure_import must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.mode, Mode::Simple);
        assert_eq!(config.generator.fallback_project_name, "my_app");
        assert_eq!(config.generator.failure_import, "core/error/failures.dart");
        assert_eq!(config.generator.output, None);
    }

    #[test]
    fn test_full_generator_table() {
        let config = Config::from_str(
            r#"
            [generator]
            mode = "professional"
            fallback_project_name = "shop"
            failure_import = "shared/errors/failure.dart"
            output = "lib/features/order/domain/usecases"
            "#,
        )
        .unwrap();

        let generator = config.generator;
        assert_eq!(generator.mode, Mode::Professional);
        assert_eq!(generator.fallback_project_name, "shop");
        assert_eq!(generator.failure_import, "shared/errors/failure.dart");
        assert_eq!(
            generator.output,
            Some(PathBuf::from("lib/features/order/domain/usecases"))
        );
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config = Config::from_str("[generator]\nmode = \"simple\"\n").unwrap();
        assert_eq!(config.generator.fallback_project_name, "my_app");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str("[generator]\nstyle = \"pro\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let err = Config::from_str("[emitter]\nmode = \"simple\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = Config::from_str("[generator]\nmode = \"fancy\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_fallback_name_is_rejected() {
        let err = Config::from_str("[generator]\nfallback_project_name = \"\"\n").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(message.contains("fallback_project_name"));
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_failure_import_is_rejected() {
        let err = Config::from_str("[generator]\nfailure_import = \" \"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
