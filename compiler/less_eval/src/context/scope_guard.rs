//! RAII guard for output buffers.
//!
//! [`ScopedOutput`] pushes a buffer when created and pops it when dropped,
//! so a buffer opened for one call's text is released on normal return,
//! on `?` early return, and during unwinding alike.
//!
//! ```text
//! let mut scoped = ctx.scoped_output();
//! scoped.output.append(&call.name).append("(");
//! scoped.emit_joined(&args, separator);
//! scoped.output.append(")");
//! let css = scoped.finish(); // buffer popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::EvalContext;

/// Guard over a pushed output buffer. Derefs to the context.
pub struct ScopedOutput<'ctx> {
    ctx: &'ctx mut EvalContext,
}

impl ScopedOutput<'_> {
    /// Text written into this buffer. The buffer itself is popped when the
    /// guard drops, right after this returns.
    pub fn finish(self) -> String {
        self.ctx.output.take_current()
    }
}

impl Drop for ScopedOutput<'_> {
    fn drop(&mut self) {
        self.ctx.output.pop();
    }
}

impl Deref for ScopedOutput<'_> {
    type Target = EvalContext;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for ScopedOutput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl EvalContext {
    /// Push an output buffer that is popped when the guard drops.
    pub fn scoped_output(&mut self) -> ScopedOutput<'_> {
        self.output.push();
        ScopedOutput { ctx: self }
    }
}
