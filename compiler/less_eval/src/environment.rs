//! Variable scopes.
//!
//! Uses a scope stack: the bottom scope holds global variables, and each
//! nested block (ruleset, mixin call) pushes a scope that shadows the ones
//! beneath it.

use rustc_hash::FxHashMap;

use crate::Node;

/// Stack of variable scopes. Never empty.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<FxHashMap<String, Node>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![FxHashMap::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Pop the innermost scope. The global scope stays.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Bind `name` (without `@`) in the innermost scope.
    pub fn define(&mut self, name: impl Into<String>, value: Node) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value);
        }
    }

    /// Look `name` up from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Option<&Node> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
