//! Component trait shared by every renderable piece

use crate::node::Node;

/// A value that can render itself to a node tree
pub trait Component {
    /// Produce the node tree for the current props/state
    fn render(&self) -> Node;
}

impl<C: Component + ?Sized> Component for &C {
    fn render(&self) -> Node {
        (**self).render()
    }
}
