//! Formatting options.
//!
//! The resolved configuration a printer sees. Keys follow the camelCase names
//! used in formatter config files (`printWidth`, `useTabs`, `tabWidth`,
//! `parser`), so a config file can be deserialized directly.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default maximum line width.
pub const DEFAULT_PRINT_WIDTH: usize = 80;

/// Indentation width used when `tabWidth` is unset or zero.
pub const DEFAULT_TAB_WIDTH: usize = 2;

/// Stylesheet dialect, named after the parser that reads it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain CSS.
    #[default]
    Css,
    Less,
    Scss,
}

impl Dialect {
    /// Parser name registered by the engine for this dialect.
    pub fn parser_name(self) -> &'static str {
        match self {
            Dialect::Css => "css",
            Dialect::Less => "less",
            Dialect::Scss => "scss",
        }
    }

    /// Infer the dialect from a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "css" | "pcss" | "postcss" => Some(Dialect::Css),
            "less" => Some(Dialect::Less),
            "scss" => Some(Dialect::Scss),
            _ => None,
        }
    }
}

/// Errors raised while resolving options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no stylesheet dialect matches `{}`", .0.display())]
    UnknownExtension(PathBuf),
}

/// Resolved formatting options.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Maximum line width.
    pub print_width: usize,

    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,

    /// Spaces per indentation level. `None` means unset.
    pub tab_width: Option<usize>,

    /// Source dialect.
    pub parser: Dialect,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: DEFAULT_PRINT_WIDTH,
            use_tabs: false,
            tab_width: None,
            parser: Dialect::Css,
        }
    }
}

impl FormatOptions {
    /// Default options with the given print width.
    pub fn with_print_width(print_width: usize) -> Self {
        Self {
            print_width,
            ..Default::default()
        }
    }

    /// Parse options from a JSON config document.
    ///
    /// Missing keys take their defaults; unknown keys are ignored.
    pub fn from_json(source: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Default options for formatting the file at `path`, with the dialect
    /// inferred from its extension.
    pub fn for_path(path: &Path) -> Result<Self, OptionsError> {
        let parser = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Dialect::from_extension)
            .ok_or_else(|| OptionsError::UnknownExtension(path.to_path_buf()))?;
        Ok(Self {
            parser,
            ..Default::default()
        })
    }

    /// Columns contributed by one indentation level.
    ///
    /// A tab counts as a single column; otherwise `tabWidth`, falling back to
    /// [`DEFAULT_TAB_WIDTH`] when unset or zero.
    #[inline]
    pub fn indent_unit(&self) -> usize {
        if self.use_tabs {
            1
        } else {
            self.tab_width
                .filter(|&width| width != 0)
                .unwrap_or(DEFAULT_TAB_WIDTH)
        }
    }
}
