//! The document seam.

use crate::selector::Selector;

/// Read and write access to the page.
///
/// Methods take `&self`: like the browser DOM, implementations use interior
/// mutability and are shared by cheap handle clones. Queries return nodes in
/// document order.
pub trait Dom {
    /// Handle to one element.
    type Node: Clone;

    /// All elements matching `selector`.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Node>;

    /// Descendants of `root` matching `selector`.
    fn query_within(&self, root: &Self::Node, selector: &Selector) -> Vec<Self::Node>;

    /// First element matching `selector`.
    fn query_first(&self, selector: &Selector) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// Element with the given `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// Attribute value.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Sets an attribute.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Element `id`, if any.
    fn id(&self, node: &Self::Node) -> Option<String> {
        self.attribute(node, "id")
    }

    /// Text content.
    fn text(&self, node: &Self::Node) -> String;

    /// Replaces the text content.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Whether the element carries `class`.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Adds `class`.
    fn add_class(&self, node: &Self::Node, class: &str);

    /// Removes `class`.
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Current location fragment without the leading `#` (empty when none).
    fn fragment(&self) -> String;

    /// Replaces the location fragment without adding a history entry.
    fn replace_fragment(&self, fragment: &str);
}
