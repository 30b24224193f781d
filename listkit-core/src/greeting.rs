use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::node::Node;

/// Greeting card for a named person with an optional age line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl Greeting {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

impl Component for Greeting {
    fn render(&self) -> Node {
        let mut children = vec![Node::element(
            "h1",
            [Node::text(format!("Hello, {}!", self.name))],
        )];

        // Zero is treated like an absent age
        if let Some(age) = self.age.filter(|age| *age > 0) {
            children.push(Node::element(
                "p",
                [Node::text(format!("You are {} years old.", age))],
            ));
        }

        Node::element("div", children)
    }
}
