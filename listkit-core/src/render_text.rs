use crate::node::{Element, Node};

/// Render a node tree as plain text.
///
/// Block elements start new lines, inline content is concatenated, and list
/// items get a `- ` bullet indented by nesting depth. Inputs show their value
/// (or placeholder) and buttons their label, both in brackets.
pub fn render_text(node: &Node) -> String {
    let mut writer = TextWriter::default();
    writer.node(node);
    writer.flush();
    writer.lines.join("\n")
}

#[derive(Default)]
struct TextWriter {
    lines: Vec<String>,
    current: String,
    list_depth: usize,
    pending_bullet: bool,
}

impl TextWriter {
    fn flush(&mut self) {
        let content = std::mem::take(&mut self.current);
        if content.trim().is_empty() {
            return;
        }

        let lead = self.lead();
        self.lines.push(format!("{}{}", lead, content.trim_end()));
    }

    /// Emit a bare bullet for a list item that has produced no line yet
    fn flush_bullet(&mut self) {
        if self.pending_bullet {
            let lead = self.lead();
            self.lines.push(lead.trim_end().to_string());
        }
    }

    fn lead(&mut self) -> String {
        let indent = "  ".repeat(self.list_depth.saturating_sub(1));
        if self.pending_bullet {
            self.pending_bullet = false;
            format!("{}- ", indent)
        } else if self.list_depth > 0 {
            format!("{}  ", indent)
        } else {
            String::new()
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.current.push_str(text),
            Node::Fragment(children) => self.children(children),
            Node::Element(element) if element.is_block() => self.block(element),
            Node::Element(element) => self.inline(element),
        }
    }

    fn children(&mut self, children: &[Node]) {
        for child in children {
            self.node(child);
        }
    }

    fn block(&mut self, element: &Element) {
        self.flush();
        match element.tag.as_str() {
            "ul" | "ol" => {
                self.flush_bullet();
                self.list_depth += 1;
                self.children(&element.children);
                self.flush();
                self.list_depth -= 1;
            }
            "li" => {
                self.pending_bullet = true;
                self.children(&element.children);
                self.flush();
                self.flush_bullet();
            }
            _ => {
                self.children(&element.children);
                self.flush();
            }
        }
    }

    fn inline(&mut self, element: &Element) {
        match element.tag.as_str() {
            "input" => {
                let shown = match element.get_attr("value") {
                    Some(value) if !value.is_empty() => value,
                    _ => element.get_attr("placeholder").unwrap_or(""),
                };
                self.current.push_str(&format!("[{}]", shown));
            }
            "button" => {
                let label: String = element.children.iter().map(Node::text_content).collect();
                if !self.current.is_empty() && !self.current.ends_with(' ') {
                    self.current.push(' ');
                }
                self.current.push_str(&format!("[{}]", label));
            }
            _ => self.children(&element.children),
        }
    }
}
