//! # html2readme
//!
//! Turn an HTML fragment copied from a project page into a clean `README.md`.
//!
//! Conversion runs in two steps:
//!
//! 1. [`convert`] parses the HTML and renders the node tree as Markdown using
//!    a fixed tag mapping (headings, emphasis, lists, tables, links...).
//! 2. [`clean`] applies an ordered list of [`Rule`]s to the Markdown, then
//!    collapses runs of blank lines. [`Rules::readme`] strips the boilerplate
//!    of the course project pages this tool was written for;
//!    [`Rules::extension`] is the lighter set of the browser-extension export.
//!
//! ```text
//! HTML String ──convert──▶ raw Markdown ──clean(rules)──▶ README Markdown
//! ```
//!
//! ## Example
//!
//! ```rust
//! use html2readme::ReadmeService;
//!
//! let service = ReadmeService::new();
//! let markdown = service
//!     .readme("<h1>0x00. Hello</h1><ul><li>one</li><li>two</li></ul>")
//!     .unwrap();
//! assert_eq!(markdown, "# 0x00. Hello\n\n* one\n* two");
//! ```

mod clean;
mod convert;
pub mod html;
pub mod node;
mod rules;
mod service;

pub use clean::{clean, collapse_blank_lines};
pub use convert::{convert, render, render_list, render_table, Format, ListMarker};
pub use html::parse_html;
pub use node::Node;
pub use rules::{Rule, Rules};
pub use service::ReadmeService;

/// Error type for html2readme operations
#[derive(Debug, thiserror::Error)]
pub enum Html2ReadmeError {
    #[error("Invalid cleanup pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Cleanup rule `{pattern}` failed: {source}")]
    Substitution {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

pub type Result<T> = std::result::Result<T, Html2ReadmeError>;
