//! Scoped text output.
//!
//! Emission always writes into the innermost buffer. Code that needs the
//! text of a sub-tree on its own pushes a buffer, emits, and pops it;
//! [`crate::ScopedOutput`] pairs those two steps so the pop happens on every
//! exit path.

/// Stack of text buffers with a permanent root.
#[derive(Debug, Default)]
pub struct OutputStack {
    root: String,
    nested: Vec<String>,
}

impl OutputStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new innermost buffer.
    pub fn push(&mut self) {
        self.nested.push(String::new());
    }

    /// Remove the innermost buffer and return its text.
    ///
    /// The root buffer is never removed; popping with no nested buffer
    /// drains the root instead.
    pub fn pop(&mut self) -> String {
        self.nested
            .pop()
            .unwrap_or_else(|| std::mem::take(&mut self.root))
    }

    /// Number of live buffers, root included.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.current_mut().push_str(text);
        self
    }

    /// Append `items` with `separator` between consecutive ones. For nodes
    /// rather than text use [`crate::EvalContext::emit_joined`].
    pub fn append_joined<I, S>(&mut self, items: I, separator: &str) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let buffer = self.current_mut();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                buffer.push_str(separator);
            }
            buffer.push_str(item.as_ref());
        }
        self
    }

    /// Text of the innermost buffer.
    pub fn current(&self) -> &str {
        self.nested.last().unwrap_or(&self.root)
    }

    /// Move the innermost buffer's text out, leaving the buffer in place.
    pub fn take_current(&mut self) -> String {
        std::mem::take(self.current_mut())
    }

    fn current_mut(&mut self) -> &mut String {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }
}

#[cfg(test)]
mod tests;
