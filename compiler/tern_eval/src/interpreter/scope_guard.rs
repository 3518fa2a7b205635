//! RAII scope guard for the interpreter's environment.
//!
//! [`ScopedInterpreter`] pushes a scope when created and pops it when
//! dropped, including on early return through `?` and during unwinding.
//! It holds `&mut Interpreter` and derefs to it, so evaluation methods are
//! called on the guard directly.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard that pops the environment scope on drop.
///
/// ```text
/// {
///     let mut scoped = interpreter.scoped();
///     scoped.env_mut().declare(name);
///     scoped.evaluate(expr)?;
/// } // scope popped here
/// ```
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a scope and return a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a new scope.
    ///
    /// The scope is popped when the closure returns, even on panic.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
