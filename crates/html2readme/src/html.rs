//! HTML parsing support.
//!
//! Parses an HTML string with html5ever (through `scraper`) and converts the
//! result into the owned [`Node`] tree the converter walks. Parsing never
//! fails: malformed markup is repaired by the HTML tree-construction rules.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the parser's synthetic `html` element. Text and
/// comments both become text nodes, so a comment renders as its literal
/// content. Doctypes and processing instructions are dropped.
///
/// # Example
///
/// ```rust
/// use html2readme::parse_html;
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(root.tag_name(), Some("html"));
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    element_to_node(document.root_element())
}

fn element_to_node(element: ElementRef) -> Node {
    let value = element.value();
    let mut node = Node::element_with_attrs(value.name(), value.attrs().collect());

    node.children = element
        .children()
        .filter_map(|child| match child.value() {
            ScraperNode::Text(text) => Some(Node::text(&text.text)),
            ScraperNode::Comment(comment) => Some(Node::text(&comment.comment)),
            ScraperNode::Element(_) => ElementRef::wrap(child).map(element_to_node),
            _ => None,
        })
        .collect();

    node
}
