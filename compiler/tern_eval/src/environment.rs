//! Lexical scope chain for variable bindings.
//!
//! Frames live in an arena ([`ScopeChain`]) and point at their enclosing
//! frame by [`FrameId`]. A frame's parent always has a smaller id than the
//! frame itself, so the parent links form a tree rooted at
//! [`FrameId::ROOT`] and can never loop.
//!
//! Variables are resolved two ways:
//! - by name, walking parent links until a frame declares the name
//!   ([`ScopeChain::lookup`], [`ScopeChain::assign`]);
//! - by a distance computed before evaluation, hopping exactly that many
//!   parents and indexing the target frame directly
//!   ([`ScopeChain::lookup_at`], [`ScopeChain::assign_at`]).
//!
//! A declared variable starts [`Binding::Uninitialized`] unless it is defined
//! with a value. Reading it before the first assignment is
//! [`ScopeErrorKind::Uninitialized`], reported separately from
//! [`ScopeErrorKind::Undefined`].

use std::fmt;

use rustc_hash::FxHashMap;
use tern_ir::{Ident, Name};

/// Index of a frame in a [`ScopeChain`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FrameId(u32);

impl FrameId {
    /// The global frame; the only frame without a parent.
    pub const ROOT: FrameId = FrameId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}

/// One declared variable slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding<V> {
    /// Declared with no value; every read fails until the first write.
    Uninitialized,
    /// Holds a value. Later writes replace it.
    Initialized(V),
}

/// Why a variable access failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeErrorKind {
    /// No frame on the chain declares the name.
    Undefined,
    /// The name is declared but was never assigned.
    Uninitialized,
}

/// Failed variable access, carrying the identifier for error reporting.
///
/// Holds only interned data; the evaluator turns it into an
/// [`EvalError`](crate::EvalError) with the name spelled out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScopeError {
    pub kind: ScopeErrorKind,
    pub ident: Ident,
}

impl ScopeError {
    #[cold]
    fn undefined(ident: &Ident) -> Self {
        ScopeError {
            kind: ScopeErrorKind::Undefined,
            ident: *ident,
        }
    }

    #[cold]
    fn uninitialized(ident: &Ident) -> Self {
        ScopeError {
            kind: ScopeErrorKind::Uninitialized,
            ident: *ident,
        }
    }
}

/// A single lexical scope.
#[derive(Clone, Debug)]
struct Frame<V> {
    bindings: FxHashMap<Name, Binding<V>>,
    /// Enclosing frame; `None` only for the root.
    parent: Option<FrameId>,
    /// Set once a handle to this frame escapes (closures); blocks reclaiming it.
    captured: bool,
    /// Scope exited while newer frames still sat above it. Bindings are gone;
    /// the slot is truncated once it becomes the newest frame.
    retired: bool,
}

impl<V> Frame<V> {
    fn new(parent: Option<FrameId>) -> Self {
        Frame {
            bindings: FxHashMap::default(),
            parent,
            captured: false,
            retired: false,
        }
    }
}

/// Arena of frames forming a rooted tree of scopes.
///
/// Generic over the evaluator's value type; the chain never inspects values.
#[derive(Clone, Debug)]
pub struct ScopeChain<V> {
    frames: Vec<Frame<V>>,
}

/// The static-distance path found something the resolver promised away.
///
/// The distance table and the runtime nesting disagree, which is a bug in the
/// interpreter rather than in the program being run.
#[cold]
#[track_caller]
fn broken_resolution(what: fmt::Arguments<'_>) -> ! {
    tracing::error!("scope resolution mismatch: {what}");
    panic!("scope resolution mismatch: {what}")
}

impl<V> ScopeChain<V> {
    /// Create a chain holding only the root frame.
    pub fn new() -> Self {
        ScopeChain {
            frames: vec![Frame::new(None)],
        }
    }

    #[inline]
    pub fn root(&self) -> FrameId {
        FrameId::ROOT
    }

    /// Number of frame slots in the arena, root and retired slots included.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True if `frame` is live in this arena.
    #[inline]
    pub fn contains(&self, frame: FrameId) -> bool {
        self.frames
            .get(frame.index())
            .is_some_and(|scope| !scope.retired)
    }

    #[inline]
    #[track_caller]
    fn frame(&self, id: FrameId) -> &Frame<V> {
        &self.frames[id.index()]
    }

    #[inline]
    #[track_caller]
    fn frame_mut(&mut self, id: FrameId) -> &mut Frame<V> {
        &mut self.frames[id.index()]
    }

    /// Open a new, empty frame enclosed by `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not a live frame of this chain.
    #[track_caller]
    pub fn push_frame(&mut self, parent: FrameId) -> FrameId {
        assert!(
            self.contains(parent),
            "parent {parent:?} is not a live frame ({} frames)",
            self.frames.len()
        );
        let id = u32::try_from(self.frames.len())
            .map(FrameId)
            .unwrap_or_else(|_| panic!("scope chain exceeded u32::MAX frames"));
        self.frames.push(Frame::new(Some(parent)));
        tracing::trace!(frame = id.raw(), parent = parent.raw(), "push frame");
        id
    }

    /// Enclosing frame, or `None` for the root.
    #[inline]
    pub fn parent(&self, frame: FrameId) -> Option<FrameId> {
        self.frame(frame).parent
    }

    /// Number of parent hops from `frame` to the root.
    pub fn depth(&self, frame: FrameId) -> usize {
        let mut hops = 0;
        let mut current = self.frame(frame).parent;
        while let Some(id) = current {
            hops += 1;
            current = self.frame(id).parent;
        }
        hops
    }

    /// Declare `name` in `frame` without a value.
    ///
    /// Replaces any binding `frame` already had for `name`.
    pub fn declare(&mut self, frame: FrameId, name: Name) {
        self.frame_mut(frame)
            .bindings
            .insert(name, Binding::Uninitialized);
    }

    /// Declare `name` in `frame` with an initial value.
    ///
    /// Replaces any binding `frame` already had for `name`.
    pub fn define(&mut self, frame: FrameId, name: Name, value: V) {
        self.frame_mut(frame)
            .bindings
            .insert(name, Binding::Initialized(value));
    }

    /// The binding `frame` itself holds for `name`, ignoring ancestors.
    pub fn binding(&self, frame: FrameId, name: Name) -> Option<&Binding<V>> {
        self.frame(frame).bindings.get(&name)
    }

    /// Read a variable by walking from `frame` towards the root.
    ///
    /// The nearest frame declaring the name decides the outcome.
    pub fn lookup(&self, frame: FrameId, ident: &Ident) -> Result<&V, ScopeError> {
        let mut current = Some(frame);
        let mut hops = 0u32;
        while let Some(id) = current {
            let scope = self.frame(id);
            if let Some(binding) = scope.bindings.get(&ident.name) {
                tracing::trace!(frame = id.raw(), hops, "resolved by name");
                return match binding {
                    Binding::Initialized(value) => Ok(value),
                    Binding::Uninitialized => Err(ScopeError::uninitialized(ident)),
                };
            }
            current = scope.parent;
            hops += 1;
        }
        Err(ScopeError::undefined(ident))
    }

    /// Write a variable by walking from `frame` towards the root.
    ///
    /// The nearest frame declaring the name has its binding overwritten,
    /// whether or not it was initialized. Never creates a binding.
    pub fn assign(&mut self, frame: FrameId, ident: &Ident, value: V) -> Result<(), ScopeError> {
        let mut current = frame;
        loop {
            let scope = self.frame_mut(current);
            if let Some(binding) = scope.bindings.get_mut(&ident.name) {
                *binding = Binding::Initialized(value);
                return Ok(());
            }
            match scope.parent {
                Some(parent) => current = parent,
                None => return Err(ScopeError::undefined(ident)),
            }
        }
    }

    /// Frame reached by following exactly `distance` parent links.
    ///
    /// # Panics
    /// Panics if the walk passes the root frame.
    #[track_caller]
    pub fn ancestor(&self, frame: FrameId, distance: u32) -> FrameId {
        let mut current = frame;
        for hop in 0..distance {
            current = self.frame(current).parent.unwrap_or_else(|| {
                broken_resolution(format_args!(
                    "distance {distance} from {frame:?} passes the root after {hop} hops"
                ))
            });
        }
        current
    }

    /// Read a variable `distance` frames above `frame`.
    ///
    /// An uninitialized binding still fails with
    /// [`ScopeErrorKind::Uninitialized`].
    ///
    /// # Panics
    /// Panics if the target frame does not declare the name, or the walk
    /// passes the root. Either means the distance table does not match the
    /// runtime scope nesting.
    #[track_caller]
    pub fn lookup_at(&self, frame: FrameId, distance: u32, ident: &Ident) -> Result<&V, ScopeError> {
        let target = self.ancestor(frame, distance);
        match self.frame(target).bindings.get(&ident.name) {
            Some(Binding::Initialized(value)) => Ok(value),
            Some(Binding::Uninitialized) => Err(ScopeError::uninitialized(ident)),
            None => broken_resolution(format_args!(
                "{:?} at {} is not declared in {target:?} (distance {distance})",
                ident.name, ident.span
            )),
        }
    }

    /// Write a variable `distance` frames above `frame`.
    ///
    /// # Panics
    /// Same contract as [`lookup_at`](Self::lookup_at).
    #[track_caller]
    pub fn assign_at(&mut self, frame: FrameId, distance: u32, ident: &Ident, value: V) {
        let target = self.ancestor(frame, distance);
        match self.frame_mut(target).bindings.get_mut(&ident.name) {
            Some(binding) => *binding = Binding::Initialized(value),
            None => broken_resolution(format_args!(
                "{:?} at {} is not declared in {target:?} (distance {distance})",
                ident.name, ident.span
            )),
        }
    }

    /// Keep `frame` alive for the rest of the chain's lifetime.
    pub fn mark_captured(&mut self, frame: FrameId) {
        let scope = self.frame_mut(frame);
        if !scope.captured {
            scope.captured = true;
            tracing::debug!(frame = frame.raw(), "frame captured");
        }
    }

    /// True if a frame newer than `frame` that has not been retired still
    /// descends from it.
    fn has_live_descendant(&self, frame: FrameId) -> bool {
        let base = frame.index();
        let mut descends = vec![false; self.frames.len() - base];
        descends[0] = true;
        for (offset, scope) in self.frames[base + 1..].iter().enumerate() {
            let below = scope
                .parent
                .is_some_and(|parent| parent >= frame && descends[parent.index() - base]);
            if below && !scope.retired {
                return true;
            }
            descends[offset + 1] = below;
        }
        false
    }

    /// Drop `frame` once its scope has exited.
    ///
    /// Captured frames, the root and frames with a live descendant are kept.
    /// The newest frame is truncated along with any retired frames directly
    /// below it; children always have larger ids, so none of them can have a
    /// live child. An older frame is retired instead: its bindings are
    /// dropped now and its slot goes when the frames above it are gone.
    /// Returns whether any slot was removed.
    pub fn release(&mut self, frame: FrameId) -> bool {
        if frame == FrameId::ROOT || self.frame(frame).captured {
            return false;
        }
        if frame.index() + 1 != self.frames.len() {
            if self.has_live_descendant(frame) {
                return false;
            }
            let scope = self.frame_mut(frame);
            scope.bindings = FxHashMap::default();
            scope.retired = true;
            tracing::debug!(frame = frame.raw(), "frame retired");
            return false;
        }
        self.frames.pop();
        tracing::debug!(frame = frame.raw(), "frame reclaimed");
        while self.frames.len() > 1 && self.frames.last().is_some_and(|scope| scope.retired) {
            self.frames.pop();
            tracing::debug!(frame = self.frames.len(), "retired frame reclaimed");
        }
        true
    }
}

impl<V> Default for ScopeChain<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A scope chain plus the frame the evaluator is currently running in.
///
/// Mirrors the evaluator's view: operations act on the current frame, and
/// blocks push and pop scopes around it.
#[derive(Clone, Debug)]
pub struct Environment<V> {
    chain: ScopeChain<V>,
    current: FrameId,
}

impl<V> Environment<V> {
    /// Create an environment positioned at a fresh global frame.
    pub fn new() -> Self {
        Environment {
            chain: ScopeChain::new(),
            current: FrameId::ROOT,
        }
    }

    #[inline]
    pub fn current(&self) -> FrameId {
        self.current
    }

    #[inline]
    pub fn chain(&self) -> &ScopeChain<V> {
        &self.chain
    }

    /// Number of frames on the active chain, global frame included.
    pub fn depth(&self) -> usize {
        self.chain.depth(self.current) + 1
    }

    /// Enter a new scope nested in the current one.
    #[inline]
    pub fn push_scope(&mut self) {
        self.current = self.chain.push_frame(self.current);
    }

    /// Enter a new scope nested in `parent` (usually a captured frame).
    ///
    /// Returns the frame that was current, for [`restore`](Self::restore).
    pub fn push_scope_in(&mut self, parent: FrameId) -> FrameId {
        let previous = self.current;
        self.current = self.chain.push_frame(parent);
        previous
    }

    /// Leave the current scope, returning to its parent.
    ///
    /// The global frame is never popped. A popped frame that still has newer
    /// frames above it (a scope opened inside a captured frame, say) loses
    /// its bindings at once but keeps an empty slot until those frames are
    /// reclaimed. A frame that encloses a captured frame keeps its bindings.
    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.chain.parent(self.current) {
            let popped = self.current;
            tracing::trace!(frame = popped.raw(), parent = parent.raw(), "pop frame");
            self.current = parent;
            self.chain.release(popped);
        }
    }

    /// Make `frame` current, returning the frame that was current.
    ///
    /// # Panics
    /// Panics if `frame` is not live.
    #[track_caller]
    pub fn enter(&mut self, frame: FrameId) -> FrameId {
        assert!(self.chain.contains(frame), "cannot enter dead frame {frame:?}");
        std::mem::replace(&mut self.current, frame)
    }

    /// Return to a frame previously handed out by [`enter`](Self::enter) or
    /// [`push_scope_in`](Self::push_scope_in).
    #[track_caller]
    pub fn restore(&mut self, previous: FrameId) {
        self.enter(previous);
    }

    /// Handle to the current frame that stays valid after the scope exits.
    pub fn capture(&mut self) -> FrameId {
        self.chain.mark_captured(self.current);
        self.current
    }

    /// Declare `name` in the current scope without a value.
    #[inline]
    pub fn declare(&mut self, name: Name) {
        self.chain.declare(self.current, name);
    }

    /// Declare `name` in the current scope with a value.
    #[inline]
    pub fn define(&mut self, name: Name, value: V) {
        self.chain.define(self.current, name, value);
    }

    /// Read a variable by name from the current scope outward.
    #[inline]
    pub fn lookup(&self, ident: &Ident) -> Result<&V, ScopeError> {
        self.chain.lookup(self.current, ident)
    }

    /// Overwrite the nearest binding of a variable.
    #[inline]
    pub fn assign(&mut self, ident: &Ident, value: V) -> Result<(), ScopeError> {
        self.chain.assign(self.current, ident, value)
    }

    /// Read a variable `distance` scopes above the current one.
    #[inline]
    #[track_caller]
    pub fn lookup_at(&self, distance: u32, ident: &Ident) -> Result<&V, ScopeError> {
        self.chain.lookup_at(self.current, distance, ident)
    }

    /// Write a variable `distance` scopes above the current one.
    #[inline]
    #[track_caller]
    pub fn assign_at(&mut self, distance: u32, ident: &Ident, value: V) {
        self.chain.assign_at(self.current, distance, ident, value);
    }
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}
