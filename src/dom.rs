//! In-memory element tree used as the render target.
//!
//! [`Element`] is a cheaply clonable handle to a shared node record, so the
//! app can keep typed references to a button or panel while the same node
//! sits inside the rendered tree. There is no diffing: a refresh discards
//! the old subtree wholesale and builds a new one.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;

/// Handle to one element node. Cloning the handle aliases the same node.
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

struct ElementData {
    tag: String,
    text: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                tag: tag.to_string(),
                text: String::new(),
                classes: Vec::new(),
                attrs: BTreeMap::new(),
                children: Vec::new(),
            })),
        }
    }

    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.inner.borrow_mut().text = text.to_string();
    }

    /// Add a class if not already present.
    pub fn add_class(&self, class: &str) {
        let mut data = self.inner.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// Flip a class and report whether it is now present.
    pub fn toggle_class(&self, class: &str) -> bool {
        let mut data = self.inner.borrow_mut();
        if let Some(index) = data.classes.iter().position(|c| c == class) {
            data.classes.remove(index);
            false
        } else {
            data.classes.push(class.to_string());
            true
        }
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner.borrow().attrs.get(name).cloned()
    }

    /// Append a child node, preserving insertion order.
    pub fn append(&self, child: &Element) {
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Remove and drop all children. Returns how many were removed.
    pub fn clear_children(&self) -> usize {
        let mut data = self.inner.borrow_mut();
        let removed = data.children.len();
        data.children.clear();
        removed
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Handles to the current children, in order.
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// Whether two handles alias the same node.
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Render the subtree as indented plain text, one node per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let data = self.inner.borrow();
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", data.tag);
        if !data.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", data.classes.join(" "));
        }
        for (name, value) in &data.attrs {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        let _ = write!(out, ">");
        if !data.text.is_empty() {
            let _ = write!(out, " {}", data.text);
        }
        out.push('\n');
        for child in &data.children {
            child.render_into(out, depth + 1);
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("text", &data.text)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish()
    }
}
