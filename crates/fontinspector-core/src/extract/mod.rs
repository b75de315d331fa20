//! Tolerant font-evidence extraction from fetched HTML and CSS text.
//!
//! The scanners never fail on malformed input; they extract what they can
//! and skip the rest.

mod css;
mod html;

pub use css::FontScan;
pub use html::{HtmlScan, scan_html};

#[cfg(test)]
mod tests;
