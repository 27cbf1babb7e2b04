//! cssline Formatter Overlay
//!
//! Renders short one-declaration style rules on a single line:
//!
//! ```text
//! .a {                 .a { color: red; }
//!   color: red;   =>
//! }
//! ```
//!
//! # Architecture
//!
//! The overlay is a [`Printer`](cssline_ir::Printer) that wraps the host
//! engine's default stylesheet printer. For every node the engine visits:
//!
//! 1. **Match**: is it a rule with exactly one declaration and no comments?
//! 2. **Measure**: rebuild selector and value text and estimate the width of
//!    `selector { property: value; }` at the rule's nesting depth.
//! 3. **Render**: emit the single-line form if it fits the print width,
//!    otherwise delegate to the wrapped printer.
//!
//! Every decision is a pure function of the node, its ancestors and the
//! options; nothing is cached between calls.
//!
//! # Modules
//!
//! - [`collapse`]: Recognizing single-declaration rules
//! - [`selector`]: Selector text reconstruction
//! - [`value`]: Value text flattening
//! - [`width`]: Single-line width estimation
//! - [`printer`]: The print dispatcher
//! - [`plugin`]: Languages, parsers and printer registration for the engine

pub mod collapse;
pub mod plugin;
pub mod printer;
pub mod selector;
pub mod value;
pub mod width;

pub use collapse::{is_single_declaration_rule, SingleDeclarationRule};
pub use plugin::{PrinterRegistry, SingleLinePlugin, POSTCSS_AST_FORMAT};
pub use printer::SingleLinePrinter;
pub use selector::render_selector;
pub use value::render_value;
pub use width::{estimate_line_width, indent_columns, nesting_depth, SINGLE_LINE_OVERHEAD};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for collapse decisions.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=cssline_fmt=trace`. A subscriber the host engine already
/// installed stays in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set; keeping it");
            }
        }
    });
}
