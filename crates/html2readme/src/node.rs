//! Owned DOM node tree used by the converter.
//!
//! A [`Node`] is either an element (with a lowercase tag name, attributes and
//! children) or a text fragment. The tree produced by [`crate::parse_html`] is
//! owned by a single conversion and never mutated once built.

use indexmap::IndexMap;

/// A node of the parsed HTML tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Lowercase tag name, `None` for text nodes
    pub tag_name: Option<String>,

    /// Text payload for text nodes
    pub node_value: Option<String>,

    /// Attributes in document order
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            tag_name: Some(tag_name.to_lowercase()),
            ..Self::default()
        }
    }

    /// Create a new element node with attributes.
    ///
    /// Attribute names are lowercased. When a name repeats, the first value
    /// is kept, matching how HTML parsers treat duplicate attributes.
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.attributes
                .entry(name.to_lowercase())
                .or_insert_with(|| value.to_string());
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_value: Some(content.to_string()),
            ..Self::default()
        }
    }

    pub fn is_element(&self) -> bool {
        self.tag_name.is_some()
    }

    pub fn is_text(&self) -> bool {
        self.tag_name.is_none()
    }

    /// Tag name of an element, `None` for text
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_lowercase().as_str())
            .map(String::as_str)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Direct element children with the given tag, in document order
    pub fn child_elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> {
        self.element_children()
            .filter(move |n| n.tag_name() == Some(tag))
    }

    /// All descendant elements whose tag is one of `tags`, in document order.
    ///
    /// The search does not stop at a match, so elements nested inside a
    /// matching element are returned as well. The node itself is never
    /// included.
    pub fn descendants_named(&self, tags: &[&str]) -> Vec<&Node> {
        let mut found = Vec::new();
        collect_descendants(self, tags, &mut found);
        found
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }
}

fn collect_descendants<'a>(node: &'a Node, tags: &[&str], found: &mut Vec<&'a Node>) {
    for child in node.element_children() {
        if child.tag_name().is_some_and(|t| tags.contains(&t)) {
            found.push(child);
        }
        collect_descendants(child, tags, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), Some("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.node_value.as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "https://example.com"), ("Title", "Example"), ("href", "ignored")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_set_attr() {
        let mut img = Node::element("img");
        img.set_attr("src", "a.png");
        img.set_attr("SRC", "b.png");
        assert_eq!(img.attr("src"), Some("b.png"));
        assert_eq!(img.attributes.len(), 1);
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().count(), 3);
        assert_eq!(parent.element_children().count(), 1);
    }

    #[test]
    fn test_child_elements_named_is_shallow() {
        let mut inner = Node::element("ul");
        inner.add_child(Node::element("li"));
        let mut item = Node::element("li");
        item.add_child(inner);
        let mut list = Node::element("ul");
        list.add_child(item);
        list.add_child(Node::element("li"));

        assert_eq!(list.child_elements_named("li").count(), 2);
    }

    #[test]
    fn test_descendants_named_in_document_order() {
        let mut th = Node::element("th");
        th.add_child(Node::text("A"));
        let mut td = Node::element("td");
        td.add_child(Node::text("B"));
        let mut tr = Node::element("tr");
        tr.add_child(th);
        tr.add_child(td);
        let mut tbody = Node::element("tbody");
        tbody.add_child(tr);
        let mut table = Node::element("table");
        table.add_child(tbody);

        let cells = table.descendants_named(&["td", "th"]);
        let tags: Vec<_> = cells.iter().filter_map(|c| c.tag_name()).collect();
        assert_eq!(tags, vec!["th", "td"]);
        assert_eq!(table.descendants_named(&["tr"]).len(), 1);
        assert!(table.descendants_named(&["table"]).is_empty());
    }
}
