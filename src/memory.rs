//! In-Memory Document
//!
//! Arena-backed element tree implementing the DOM seam. Used by tests, and
//! by anyone who wants to exercise the widgets without a browser.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::{Document, DomNode};
use crate::error::WidgetResult;

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    checked: bool,
    display: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
struct Arena {
    nodes: Vec<NodeData>,
}

impl Arena {
    /// Pre-order walk starting at `index`
    fn walk(&self, index: usize, out: &mut Vec<usize>) {
        out.push(index);
        for &child in &self.nodes[index].children {
            self.walk(child, out);
        }
    }
}

/// In-memory document with a `<body>` root
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    arena: Rc<RefCell<Arena>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        let arena = Arena {
            nodes: vec![NodeData {
                tag: "body".to_string(),
                ..Default::default()
            }],
        };
        Self { arena: Rc::new(RefCell::new(arena)) }
    }

    pub fn body(&self) -> MemoryNode {
        self.node(0)
    }

    /// Append a new element under `parent`
    pub fn append(&self, parent: &MemoryNode, tag: &str) -> MemoryNode {
        let index = {
            let mut arena = self.arena.borrow_mut();
            let index = arena.nodes.len();
            arena.nodes.push(NodeData {
                tag: tag.to_string(),
                parent: Some(parent.index),
                ..Default::default()
            });
            arena.nodes[parent.index].children.push(index);
            index
        };
        self.node(index)
    }

    fn node(&self, index: usize) -> MemoryNode {
        MemoryNode { arena: Rc::clone(&self.arena), index }
    }
}

impl Document for MemoryDocument {
    type Node = MemoryNode;

    fn elements_by_class(&self, class: &str) -> Vec<MemoryNode> {
        let mut order = Vec::new();
        {
            let arena = self.arena.borrow();
            arena.walk(0, &mut order);
            order.retain(|&i| arena.nodes[i].classes.iter().any(|c| c == class));
        }
        order.into_iter().map(|i| self.node(i)).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        let mut order = Vec::new();
        let found = {
            let arena = self.arena.borrow();
            arena.walk(0, &mut order);
            order.into_iter().find(|&i| arena.nodes[i].id.as_deref() == Some(id))
        };
        found.map(|i| self.node(i))
    }
}

/// Handle to an element of a [`MemoryDocument`]
#[derive(Clone, Debug)]
pub struct MemoryNode {
    arena: Rc<RefCell<Arena>>,
    index: usize,
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena) && self.index == other.index
    }
}

impl MemoryNode {
    pub fn with_class(self, class: &str) -> Self {
        self.with_data(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        })
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_data(|n| n.id = Some(id.to_string()))
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.with_data(|n| {
            n.attributes.insert(name.to_string(), value.to_string());
        })
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_data(|n| n.text = Some(text.to_string()))
    }

    pub fn with_checked(self, checked: bool) -> Self {
        self.with_data(|n| n.checked = checked)
    }

    pub fn with_display(self, display: &str) -> Self {
        self.with_data(|n| n.display = Some(display.to_string()))
    }

    pub fn tag(&self) -> String {
        self.arena.borrow().nodes[self.index].tag.clone()
    }

    fn with_data(self, f: impl FnOnce(&mut NodeData)) -> Self {
        f(&mut self.arena.borrow_mut().nodes[self.index]);
        self
    }

    fn read<T>(&self, f: impl FnOnce(&NodeData) -> T) -> T {
        f(&self.arena.borrow().nodes[self.index])
    }

    fn write<T>(&self, f: impl FnOnce(&mut NodeData) -> T) -> T {
        f(&mut self.arena.borrow_mut().nodes[self.index])
    }
}

impl DomNode for MemoryNode {
    fn has_class(&self, class: &str) -> bool {
        self.read(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&self, class: &str) -> WidgetResult<()> {
        self.write(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
        Ok(())
    }

    fn remove_class(&self, class: &str) -> WidgetResult<()> {
        self.write(|n| n.classes.retain(|c| c != class));
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> WidgetResult<bool> {
        let present = self.write(|n| {
            if let Some(pos) = n.classes.iter().position(|c| c == class) {
                n.classes.remove(pos);
                false
            } else {
                n.classes.push(class.to_string());
                true
            }
        });
        Ok(present)
    }

    fn checked(&self) -> WidgetResult<bool> {
        Ok(self.read(|n| n.checked))
    }

    fn set_checked(&self, checked: bool) -> WidgetResult<()> {
        self.write(|n| n.checked = checked);
        Ok(())
    }

    fn display(&self) -> Option<String> {
        self.read(|n| n.display.clone()).filter(|d| !d.is_empty())
    }

    fn set_display(&self, value: &str) -> WidgetResult<()> {
        self.write(|n| n.display = Some(value.to_string()));
        Ok(())
    }

    fn contains(&self, other: &Self) -> bool {
        if !Rc::ptr_eq(&self.arena, &other.arena) {
            return false;
        }
        let arena = self.arena.borrow();
        let mut cursor = Some(other.index);
        while let Some(i) = cursor {
            if i == self.index {
                return true;
            }
            cursor = arena.nodes[i].parent;
        }
        false
    }

    fn next_element_sibling(&self) -> Option<Self> {
        let next = {
            let arena = self.arena.borrow();
            let parent = arena.nodes[self.index].parent?;
            let siblings = &arena.nodes[parent].children;
            let pos = siblings.iter().position(|&i| i == self.index)?;
            siblings.get(pos + 1).copied()
        };
        next.map(|index| MemoryNode { arena: Rc::clone(&self.arena), index })
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.read(|n| n.attributes.get(name).cloned())
    }

    fn text_content(&self) -> Option<String> {
        self.read(|n| n.text.clone())
    }
}
