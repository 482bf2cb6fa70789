//! Convert a Node tree to Markdown text.
//!
//! Rendering is post-order: an element's children are rendered and
//! concatenated first (its inner content), then the element's [`Format`]
//! wraps that content. Lists and tables re-traverse their own structure
//! instead of consuming the inner content.

use crate::html::parse_html;
use crate::node::Node;

/// Formatting strategy selected by tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Heading(usize),
    Paragraph,
    Strong,
    Emphasis,
    Code,
    Preformatted,
    Blockquote,
    HorizontalRule,
    LineBreak,
    Anchor,
    Image,
    List(ListMarker),
    Table,
    /// Unknown and structural tags render as their inner content
    Transparent,
}

/// Item marker for a rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Ordered,
}

impl ListMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMarker::Bullet => "*",
            ListMarker::Ordered => "1.",
        }
    }
}

impl Format {
    /// Resolve the strategy for a lowercase tag name
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "h1" => Format::Heading(1),
            "h2" => Format::Heading(2),
            "h3" => Format::Heading(3),
            "h4" => Format::Heading(4),
            "h5" => Format::Heading(5),
            "h6" => Format::Heading(6),
            "p" => Format::Paragraph,
            "strong" | "b" => Format::Strong,
            "em" | "i" => Format::Emphasis,
            "code" => Format::Code,
            "pre" => Format::Preformatted,
            "blockquote" => Format::Blockquote,
            "hr" => Format::HorizontalRule,
            "br" => Format::LineBreak,
            "a" => Format::Anchor,
            "img" => Format::Image,
            "ul" => Format::List(ListMarker::Bullet),
            "ol" => Format::List(ListMarker::Ordered),
            "table" => Format::Table,
            _ => Format::Transparent,
        }
    }
}

/// Convert an HTML string to Markdown.
///
/// Never fails: malformed markup is absorbed by the parser. The result is
/// trimmed of leading and trailing whitespace.
///
/// # Example
///
/// ```rust
/// use html2readme::convert;
///
/// assert_eq!(convert("<h2>Tasks</h2>"), "## Tasks");
/// ```
pub fn convert(html: &str) -> String {
    let root = parse_html(html);
    render(&root, 0).trim().to_string()
}

/// Render a node at the given list nesting depth
pub fn render(node: &Node, depth: usize) -> String {
    let Some(tag) = node.tag_name() else {
        return node.node_value.clone().unwrap_or_default();
    };

    match Format::for_tag(tag) {
        Format::HorizontalRule => "\n---\n\n".to_string(),
        Format::LineBreak => "\n".to_string(),
        Format::Image => {
            let src = node.attr("src").unwrap_or_default();
            let alt = node.attr("alt").unwrap_or_default();
            format!("![{}]({})", alt, src)
        }
        Format::List(marker) => render_list(node, marker, depth + 1),
        Format::Table => render_table(node, depth),
        format => {
            let content = render_children(node, depth);
            match format {
                Format::Heading(level) => format!("\n{} {}\n\n", "#".repeat(level), content),
                Format::Paragraph => format!("\n{}\n\n", content),
                Format::Strong => format!("**{}**", content),
                Format::Emphasis => format!("*{}*", content),
                Format::Code => format!("`{}`", content),
                Format::Preformatted => format!("\n```\n{}\n```\n\n", content),
                Format::Blockquote => format!("\n> {}\n\n", content),
                Format::Anchor => {
                    let href = node.attr("href").unwrap_or_default();
                    format!("[{}]({})", content, href)
                }
                _ => content,
            }
        }
    }
}

/// Concatenate the renderings of all children
fn render_children(node: &Node, depth: usize) -> String {
    node.children()
        .map(|child| render(child, depth))
        .collect()
}

/// Render the direct `li` children of a list.
///
/// `depth` is the nesting depth of this list (1 for a top-level list).
/// Nested lists inside an item are rendered as part of the item text at
/// `depth + 1`, which indents their lines by two more spaces.
pub fn render_list(node: &Node, marker: ListMarker, depth: usize) -> String {
    tracing::trace!(depth, marker = marker.as_str(), "rendering list");

    let indent = "  ".repeat(depth.saturating_sub(1));
    let mut result = String::from("\n");

    for item in node.child_elements_named("li") {
        let item_content = render(item, depth);
        result.push_str(&format!(
            "{}{} {}\n",
            indent,
            marker.as_str(),
            item_content.trim()
        ));
    }

    result.push('\n');
    result
}

/// Render a table as a pipe table.
///
/// The first `tr` is the header and takes both `th` and `td` cells; body rows
/// only take `td` cells. Rows and cells are found anywhere below the table,
/// including inside nested tables.
pub fn render_table(table: &Node, depth: usize) -> String {
    let mut result = String::from("\n");

    let rows = table.descendants_named(&["tr"]);
    let Some((header_row, body_rows)) = rows.split_first() else {
        return result;
    };
    tracing::trace!(rows = rows.len(), "rendering table");

    let header_cells = header_row.descendants_named(&["th", "td"]);
    result.push_str(&format!("| {} |\n", render_cells(&header_cells, depth)));

    let separator = vec!["---"; header_cells.len()].join(" | ");
    result.push_str(&format!("| {} |\n", separator));

    for row in body_rows {
        let cells = row.descendants_named(&["td"]);
        result.push_str(&format!("| {} |\n", render_cells(&cells, depth)));
    }

    result.push('\n');
    result
}

fn render_cells(cells: &[&Node], depth: usize) -> String {
    cells
        .iter()
        .map(|cell| render(cell, depth).trim().to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
