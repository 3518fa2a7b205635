//! Property-based tests for the scope chain.
//!
//! Random sequences of scope operations run against both `Environment` and
//! a plain stack-of-maps model. After every step the two must agree on
//! lookups and depth, and every initialized binding must be reachable at
//! the distance the model computes for it.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use tern_eval::{Environment, ScopeErrorKind};
use tern_ir::{Ident, Name, StringInterner};

const NAMES: u8 = 4;

#[derive(Clone, Debug)]
enum Op {
    Push,
    Pop,
    Declare(u8),
    Define(u8, i64),
    Assign(u8, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Push),
        2 => Just(Op::Pop),
        2 => (0..NAMES).prop_map(Op::Declare),
        3 => (0..NAMES, any::<i64>()).prop_map(|(n, v)| Op::Define(n, v)),
        3 => (0..NAMES, any::<i64>()).prop_map(|(n, v)| Op::Assign(n, v)),
    ]
}

/// Reference model: one map per active scope, innermost last.
struct Model {
    frames: Vec<FxHashMap<u8, Option<i64>>>,
}

impl Model {
    fn new() -> Self {
        Model {
            frames: vec![FxHashMap::default()],
        }
    }

    fn innermost(&mut self) -> &mut FxHashMap<u8, Option<i64>> {
        self.frames.last_mut().unwrap()
    }

    /// Distance from the innermost frame to the nearest declaration.
    fn distance(&self, name: u8) -> Option<usize> {
        self.frames
            .iter()
            .rev()
            .position(|frame| frame.contains_key(&name))
    }

    fn lookup(&self, name: u8) -> Result<i64, ScopeErrorKind> {
        match self.distance(name) {
            None => Err(ScopeErrorKind::Undefined),
            Some(d) => {
                let frame = &self.frames[self.frames.len() - 1 - d];
                frame[&name].ok_or(ScopeErrorKind::Uninitialized)
            }
        }
    }

    fn assign(&mut self, name: u8, value: i64) -> Result<(), ScopeErrorKind> {
        let d = self.distance(name).ok_or(ScopeErrorKind::Undefined)?;
        let index = self.frames.len() - 1 - d;
        self.frames[index].insert(name, Some(value));
        Ok(())
    }
}

struct Harness {
    names: Vec<Name>,
    env: Environment<i64>,
    model: Model,
}

impl Harness {
    fn new(interner: &StringInterner) -> Self {
        Harness {
            names: (0..NAMES).map(|i| interner.intern(&format!("v{i}"))).collect(),
            env: Environment::new(),
            model: Model::new(),
        }
    }

    fn ident(&self, name: u8) -> Ident {
        Ident::synthetic(self.names[usize::from(name)])
    }

    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Push => {
                self.env.push_scope();
                self.model.frames.push(FxHashMap::default());
            }
            Op::Pop => {
                self.env.pop_scope();
                if self.model.frames.len() > 1 {
                    self.model.frames.pop();
                }
            }
            Op::Declare(n) => {
                self.env.declare(self.names[usize::from(n)]);
                self.model.innermost().insert(n, None);
            }
            Op::Define(n, v) => {
                self.env.define(self.names[usize::from(n)], v);
                self.model.innermost().insert(n, Some(v));
            }
            Op::Assign(n, v) => {
                let ident = self.ident(n);
                let actual = self.env.assign(&ident, v).map_err(|e| e.kind);
                assert_eq!(actual, self.model.assign(n, v), "assign v{}", n);
            }
        }
    }

    fn check(&self) {
        assert_eq!(self.env.depth(), self.model.frames.len());
        for n in 0..NAMES {
            let ident = self.ident(n);
            let by_name = self.env.lookup(&ident).copied().map_err(|e| e.kind);
            assert_eq!(by_name, self.model.lookup(n), "lookup v{}", n);

            if let Some(d) = self.model.distance(n) {
                let d = u32::try_from(d).unwrap();
                let at = self.env.lookup_at(d, &ident).copied().map_err(|e| e.kind);
                assert_eq!(at, by_name, "lookup_at({}) v{}", d, n);
            }
        }
    }
}

proptest! {
    #[test]
    fn environment_matches_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let interner = StringInterner::new();
        let mut harness = Harness::new(&interner);
        for op in &ops {
            harness.apply(op);
            harness.check();
        }
    }

    #[test]
    fn balanced_scopes_reclaim_every_frame(depth in 0usize..32) {
        let interner = StringInterner::new();
        let name = interner.intern("v");
        let mut env: Environment<i64> = Environment::new();
        for level in 0..depth {
            env.push_scope();
            env.define(name, i64::try_from(level).unwrap());
        }
        prop_assert_eq!(env.chain().frame_count(), depth + 1);
        for _ in 0..depth {
            env.pop_scope();
        }
        prop_assert_eq!(env.depth(), 1);
        prop_assert_eq!(env.chain().frame_count(), 1);
    }

    #[test]
    fn assign_at_writes_the_frame_lookup_at_reads(depth in 1u32..16, target in 0u32..16, value in any::<i64>()) {
        let target = target % depth;
        let interner = StringInterner::new();
        let ident = Ident::synthetic(interner.intern("v"));
        let mut env: Environment<i64> = Environment::new();
        env.define(ident.name, -1);
        for _ in 0..depth {
            env.push_scope();
            env.define(ident.name, -1);
        }

        env.assign_at(target, &ident, value);
        for distance in 0..=depth {
            let expected = if distance == target { value } else { -1 };
            prop_assert_eq!(env.lookup_at(distance, &ident).copied(), Ok(expected));
        }
    }
}
