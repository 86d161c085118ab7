//! Variable substitution pass.

use less_ir::{Node, NodeKind, Visitor};
use rustc_hash::FxHashMap;

/// Replaces `@name` references with bound values.
///
/// Unbound variables are left in place. The walk goes through deferred
/// operations to their operands, so substitution still applies to
/// arithmetic that strict math has frozen: `@a + 1` becomes `2 + 1`, not
/// `3`.
#[derive(Clone, Debug, Default)]
pub struct SubstituteVariables {
    bindings: FxHashMap<String, Node>,
    substituted: usize,
}

impl SubstituteVariables {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: Node) -> Self {
        self.bindings.insert(name.into(), value);
        self
    }

    /// Number of references replaced so far.
    pub fn substituted(&self) -> usize {
        self.substituted
    }
}

impl FromIterator<(String, Node)> for SubstituteVariables {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        SubstituteVariables {
            bindings: iter.into_iter().collect(),
            substituted: 0,
        }
    }
}

impl Visitor for SubstituteVariables {
    fn visit(&mut self, mut node: Node) -> Node {
        if let NodeKind::Variable(name) = &node.kind {
            if let Some(value) = self.bindings.get(name) {
                self.substituted += 1;
                tracing::trace!(name = %name, "substituting variable");
                return value.clone().reduced_from(node.span);
            }
            return node;
        }
        node.accept(self);
        node
    }
}
