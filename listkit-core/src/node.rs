//! Renderable node tree
//!
//! A `Node` is the output of every component: text, an element with a tag,
//! optional key, attributes and children, or a keyless fragment.

use std::fmt;

use serde::Serialize;

/// Tags that start a new line when rendered as text or in the terminal
const BLOCK_TAGS: &[&str] = &[
    "div", "section", "form", "ul", "ol", "li", "p", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Tags that never have children (self-closed in HTML)
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// Identity of a rendered node across renders
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Position within the parent container
    Index(usize),
    /// Content identity (e.g. a record id)
    Id(String),
}

impl Key {
    /// HTML attribute carrying this key
    pub fn attr_name(&self) -> &'static str {
        match self {
            Key::Index(_) => "data-key",
            Key::Id(_) => "data-id",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A renderable node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Plain text
    Text(String),
    /// Tagged element
    Element(Element),
    /// Ordered group of nodes without a wrapper
    Fragment(Vec<Node>),
}

/// A tagged element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name (`ul`, `li`, `span`, ...)
    pub tag: String,
    /// Optional identity used by list containers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Attributes in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Child nodes in order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no key, attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the key
    pub fn key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Append an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append one child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Look up an attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_block(&self) -> bool {
        BLOCK_TAGS.contains(&self.tag.as_str())
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }
}

impl Node {
    /// Text node from anything displayable
    pub fn text(value: impl fmt::Display) -> Self {
        Node::Text(value.to_string())
    }

    /// Element node with the given children
    pub fn element<I, N>(tag: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Node::Element(Element::new(tag).children(children))
    }

    /// Fragment node
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Direct children (empty for text)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Element(element) => &element.children,
            Node::Fragment(children) => children,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for the first element with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if let Node::Element(element) = self {
            if element.tag == tag {
                return Some(element);
            }
        }
        self.children().iter().find_map(|child| child.find(tag))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let node: Node = Element::new("div")
            .attr("class", "card")
            .child("a")
            .children(["b", "c"])
            .into();

        let element = node.as_element().unwrap();
        assert_eq!(element.get_attr("class"), Some("card"));
        assert_eq!(node.text_content(), "abc");
    }

    #[test]
    fn test_find_nested_element() {
        let node = Node::element("div", [Node::element("p", [Node::text("inner")])]);
        let p = node.find("p").unwrap();
        assert_eq!(p.children, vec![Node::text("inner")]);
        assert!(node.find("ul").is_none());
    }

    #[test]
    fn test_block_and_void_tags() {
        assert!(Element::new("li").is_block());
        assert!(!Element::new("span").is_block());
        assert!(Element::new("input").is_void());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Index(3).to_string(), "3");
        assert_eq!(Key::Id("post-7".to_string()).to_string(), "post-7");
    }

    #[test]
    fn test_key_attr_names_differ() {
        assert_eq!(Key::Index(1).attr_name(), "data-key");
        assert_eq!(Key::Id("1".to_string()).attr_name(), "data-id");
    }

    #[test]
    fn test_serialize_json_shape() {
        let node: Node = Element::new("li").key(Key::Index(0)).child("x").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["element"]["tag"], "li");
        assert_eq!(json["element"]["key"]["index"], 0);
        assert_eq!(json["element"]["children"][0]["text"], "x");
        assert!(json["element"].get("attrs").is_none());
    }
}
