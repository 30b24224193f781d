//! Generic list renderer
//!
//! Maps an ordered slice of any item type through a caller-supplied render
//! function and wraps each result in a list item keyed by its position:
//!
//! ```text
//! [a, b, c] --render_item--> ul
//!                             ├── li key=0 → render_item(a)
//!                             ├── li key=1 → render_item(b)
//!                             └── li key=2 → render_item(c)
//! ```
//!
//! Keys are positional, so re-rendering the same slice yields the same keys.
//! The renderer never inspects items and adds no fallback for empty input.

use tracing::trace;

use crate::component::Component;
use crate::node::{Element, Key, Node};

/// Render every item in order into a `ul` of index-keyed `li` elements.
///
/// `render_item` is called exactly once per item, in index order.
pub fn render_list<T, F>(items: &[T], mut render_item: F) -> Node
where
    F: FnMut(&T) -> Node,
{
    trace!(count = items.len(), "rendering list");
    let children = items
        .iter()
        .enumerate()
        .map(|(index, item)| list_item(index, render_item(item)));
    Element::new("ul").children(children).into()
}

/// Fallible variant of [`render_list`].
///
/// Stops at the first error and returns it unchanged; items after the failing
/// one are not rendered and no partial container is produced.
pub fn try_render_list<T, F, E>(items: &[T], mut render_item: F) -> Result<Node, E>
where
    F: FnMut(&T) -> Result<Node, E>,
{
    trace!(count = items.len(), "rendering list (fallible)");
    let children = items
        .iter()
        .enumerate()
        .map(|(index, item)| render_item(item).map(|node| list_item(index, node)))
        .collect::<Result<Vec<_>, E>>()?;
    Ok(Element::new("ul").children(children).into())
}

fn list_item(index: usize, node: Node) -> Element {
    Element::new("li").key(Key::Index(index)).child(node)
}

/// List component holding borrowed items and their render function
pub struct GenericList<'a, T, F>
where
    F: Fn(&T) -> Node,
{
    items: &'a [T],
    render_item: F,
}

impl<'a, T, F> GenericList<'a, T, F>
where
    F: Fn(&T) -> Node,
{
    pub fn new(items: &'a [T], render_item: F) -> Self {
        Self { items, render_item }
    }
}

impl<T, F> Component for GenericList<'_, T, F>
where
    F: Fn(&T) -> Node,
{
    fn render(&self) -> Node {
        render_list(self.items, &self.render_item)
    }
}

/// Render callback used by the app shell: wraps the value in a `span`
pub fn span<T: std::fmt::Display>(item: &T) -> Node {
    Node::element("span", [Node::text(item)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_texts(node: &Node) -> Vec<String> {
        node.children().iter().map(Node::text_content).collect()
    }

    #[test]
    fn test_numbers_render_in_order() {
        let numbers = [1, 2, 3, 4, 5];
        let node = render_list(&numbers, |n| Node::text(n));

        assert_eq!(node.as_element().unwrap().tag, "ul");
        assert_eq!(item_texts(&node), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_strings_render_in_order() {
        let fruits = ["apple", "banana", "cherry"];
        let node = render_list(&fruits, |f| Node::text(f));

        assert_eq!(item_texts(&node), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_empty_input_yields_empty_container() {
        let empty: [u8; 0] = [];
        let node = render_list(&empty, |n| Node::text(n));

        let ul = node.as_element().unwrap();
        assert_eq!(ul.tag, "ul");
        assert!(ul.children.is_empty());
    }

    #[test]
    fn test_items_are_index_keyed_li() {
        let node = render_list(&["x", "y"], |s| span(s));

        for (index, child) in node.children().iter().enumerate() {
            let li = child.as_element().unwrap();
            assert_eq!(li.tag, "li");
            assert_eq!(li.key, Some(Key::Index(index)));
            assert_eq!(li.children.len(), 1);
        }
    }

    #[test]
    fn test_render_item_called_once_per_item_in_order() {
        let items = vec!['a', 'b', 'c'];
        let mut seen = Vec::new();
        render_list(&items, |c| {
            seen.push(*c);
            Node::text(c)
        });
        assert_eq!(seen, items);
    }

    #[test]
    fn test_try_render_list_propagates_first_error() {
        let items = [1, 2, 3, 4];
        let mut calls = 0;
        let result: Result<Node, String> = try_render_list(&items, |n| {
            calls += 1;
            if *n == 2 {
                Err(format!("cannot render {}", n))
            } else {
                Ok(Node::text(n))
            }
        });

        assert_eq!(result, Err("cannot render 2".to_string()));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_try_render_list_success_matches_infallible() {
        let items = ["a", "b"];
        let fallible: Result<Node, ()> = try_render_list(&items, |s| Ok(Node::text(s)));
        assert_eq!(fallible.unwrap(), render_list(&items, |s| Node::text(s)));
    }

    #[test]
    fn test_generic_list_component_is_stable_across_renders() {
        let fruits = vec!["apple".to_string(), "banana".to_string()];
        let list = GenericList::new(&fruits, span);

        let first = list.render();
        assert_eq!(first.children().len(), 2);
        assert_eq!(first, list.render());
    }
}
