//! In-memory document used for headless rendering and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::Dom;
use crate::selector::{Matchable, Selector};

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<usize>,
}

impl Matchable for NodeData {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<NodeData>,
    fragment: String,
    mutations: usize,
    fragment_replacements: usize,
}

impl Tree {
    const BODY: usize = 0;

    /// Descendants of `root` in document order, excluding `root`.
    fn descendants(&self, root: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            out.push(index);
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }
        out
    }
}

/// Element description passed to [`MemoryDocument::append`].
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl ElementBuilder {
    /// Starts an element with no classes, attributes or text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Shared handle to an in-memory element tree rooted at `<body>`.
///
/// Clones refer to the same tree. Every effective change to an element is
/// counted, so callers can assert that an operation left the page untouched.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding an empty `<body>`.
    pub fn new() -> Self {
        let body = NodeData {
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        };
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![body],
                fragment: String::new(),
                mutations: 0,
                fragment_replacements: 0,
            })),
        }
    }

    /// The `<body>` element.
    pub const fn body_id(&self) -> NodeId {
        NodeId(Tree::BODY)
    }

    /// Appends an element under `parent` and returns it.
    pub fn append(&self, parent: NodeId, element: ElementBuilder) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let index = tree.nodes.len();
        tree.nodes.push(NodeData {
            classes: element.classes,
            attributes: element.attributes,
            text: element.text,
            children: Vec::new(),
        });
        tree.nodes[parent.0].children.push(index);
        NodeId(index)
    }

    /// Sets the fragment as if the page had been opened with it.
    pub fn set_initial_fragment(&self, fragment: &str) {
        self.tree.borrow_mut().fragment = fragment.trim_start_matches('#').to_string();
    }

    /// Text of the element with `id`, if it exists.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.element_by_id(id).map(|node| self.text(&node))
    }

    /// Number of effective element mutations so far.
    pub fn mutation_count(&self) -> usize {
        self.tree.borrow().mutations
    }

    /// Number of times the fragment was replaced.
    pub fn fragment_replacements(&self) -> usize {
        self.tree.borrow().fragment_replacements
    }

    fn find(&self, candidates: Vec<usize>, selector: &Selector) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        candidates
            .into_iter()
            .filter(|&index| selector.matches(&tree.nodes[index]))
            .map(NodeId)
            .collect()
    }
}

impl Dom for MemoryDocument {
    type Node = NodeId;

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let candidates = {
            let tree = self.tree.borrow();
            let mut all = vec![Tree::BODY];
            all.extend(tree.descendants(Tree::BODY));
            all
        };
        self.find(candidates, selector)
    }

    fn query_within(&self, root: &NodeId, selector: &Selector) -> Vec<NodeId> {
        let candidates = self.tree.borrow().descendants(root.0);
        self.find(candidates, selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_first(&Selector::attribute_eq("id", id))
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body_id())
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        let data = &tree.nodes[node.0];
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut tree = self.tree.borrow_mut();
        let data = &mut tree.nodes[node.0];
        let changed = if name == "class" {
            let classes: Vec<String> = value.split_whitespace().map(str::to_string).collect();
            let changed = data.classes != classes;
            data.classes = classes;
            changed
        } else {
            data.attributes.insert(name.to_string(), value.to_string()).as_deref() != Some(value)
        };
        if changed {
            tree.mutations += 1;
        }
    }

    fn text(&self, node: &NodeId) -> String {
        self.tree.borrow().nodes[node.0].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut tree = self.tree.borrow_mut();
        let data = &mut tree.nodes[node.0];
        if data.text != text {
            data.text = text.to_string();
            tree.mutations += 1;
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.tree.borrow().nodes[node.0].has_class(class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut tree = self.tree.borrow_mut();
        let data = &mut tree.nodes[node.0];
        if !data.has_class(class) {
            data.classes.push(class.to_string());
            tree.mutations += 1;
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut tree = self.tree.borrow_mut();
        let data = &mut tree.nodes[node.0];
        let before = data.classes.len();
        data.classes.retain(|c| c != class);
        if data.classes.len() != before {
            tree.mutations += 1;
        }
    }

    fn fragment(&self) -> String {
        self.tree.borrow().fragment.clone()
    }

    fn replace_fragment(&self, fragment: &str) {
        let mut tree = self.tree.borrow_mut();
        tree.fragment = fragment.trim_start_matches('#').to_string();
        tree.fragment_replacements += 1;
    }
}
