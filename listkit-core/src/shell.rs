use crate::component::Component;
use crate::list::{span, GenericList};
use crate::node::Node;

/// Top-level page: a numbers list and a fruits list, each under a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShell {
    pub numbers: Vec<i64>,
    pub fruits: Vec<String>,
}

impl Default for AppShell {
    fn default() -> Self {
        Self {
            numbers: vec![1, 2, 3, 4, 5],
            fruits: ["apple", "banana", "cherry"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl AppShell {
    pub fn new(numbers: Vec<i64>, fruits: Vec<String>) -> Self {
        Self { numbers, fruits }
    }
}

impl Component for AppShell {
    fn render(&self) -> Node {
        Node::element(
            "div",
            [
                Node::element("h1", ["Numbers"]),
                GenericList::new(&self.numbers, span).render(),
                Node::element("h1", ["Fruits"]),
                GenericList::new(&self.fruits, span).render(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Key;

    #[test]
    fn test_default_shell_layout() {
        let node = AppShell::default().render();
        let sections = node.children();

        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].text_content(), "Numbers");
        assert_eq!(sections[2].text_content(), "Fruits");

        let numbers: Vec<_> = sections[1].children().iter().map(Node::text_content).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5"]);

        let fruits: Vec<_> = sections[3].children().iter().map(Node::text_content).collect();
        assert_eq!(fruits, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_items_wrapped_in_span() {
        let node = AppShell::new(vec![42], Vec::new()).render();
        let li = node.children()[1].children()[0].as_element().unwrap();

        assert_eq!(li.key, Some(Key::Index(0)));
        assert_eq!(li.children[0].as_element().unwrap().tag, "span");
        assert!(node.children()[3].children().is_empty());
    }
}
