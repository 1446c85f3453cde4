//! Trie vertex storage.
//!
//! # Responsibilities
//! - Hold literal children, the single dynamic child, and the two
//!   method-keyed handler maps (exact terminus and wildcard terminus)
//! - Guard the one-dynamic-child-per-node invariant
//!
//! # Design Decisions
//! - `children` never contains a `"*"` key; wildcard routing bypasses it
//! - A dynamic child, once set, is never cleared; a different parameter
//!   name at the same position is reported back to the caller
//! - Last registration for a `(node, method)` pair wins, silently

use std::collections::HashMap;

use crate::routing::method::Method;

/// A single trie vertex.
#[derive(Debug, Clone)]
pub(crate) struct RouteNode<T> {
    children: HashMap<String, RouteNode<T>>,
    dynamic: Option<DynamicChild<T>>,
    handlers: HashMap<Method, T>,
    wildcard_handlers: HashMap<Method, T>,
}

/// The at-most-one dynamic branch below a node.
#[derive(Debug, Clone)]
pub(crate) struct DynamicChild<T> {
    pub(crate) param: String,
    pub(crate) node: Box<RouteNode<T>>,
}

impl<T> RouteNode<T> {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            dynamic: None,
            handlers: HashMap::new(),
            wildcard_handlers: HashMap::new(),
        }
    }

    /// Literal child for an already-folded segment key, if any.
    pub(crate) fn literal(&self, key: &str) -> Option<&RouteNode<T>> {
        self.children.get(key)
    }

    pub(crate) fn dynamic(&self) -> Option<&DynamicChild<T>> {
        self.dynamic.as_ref()
    }

    pub(crate) fn handler(&self, method: Method) -> Option<&T> {
        self.handlers.get(&method)
    }

    pub(crate) fn wildcard_handler(&self, method: Method) -> Option<&T> {
        self.wildcard_handlers.get(&method)
    }

    /// Descend into the literal child for `key`, creating it if absent.
    pub(crate) fn literal_child_mut(&mut self, key: String) -> &mut RouteNode<T> {
        self.children.entry(key).or_insert_with(RouteNode::new)
    }

    /// Descend into the dynamic child, creating the slot bound to `name` if
    /// absent. Returns the already-registered parameter name if it differs.
    pub(crate) fn dynamic_child_mut(&mut self, name: &str) -> Result<&mut RouteNode<T>, String> {
        let slot = self.dynamic.get_or_insert_with(|| DynamicChild {
            param: name.to_string(),
            node: Box::new(RouteNode::new()),
        });
        if slot.param != name {
            return Err(slot.param.clone());
        }
        Ok(&mut slot.node)
    }

    pub(crate) fn set_handler(&mut self, method: Method, handler: T) {
        self.handlers.insert(method, handler);
    }

    pub(crate) fn set_wildcard_handler(&mut self, method: Method, handler: T) {
        self.wildcard_handlers.insert(method, handler);
    }
}

impl<T> Default for RouteNode<T> {
    fn default() -> Self {
        Self::new()
    }
}
