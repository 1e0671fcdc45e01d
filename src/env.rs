//! Lexical environments: a name-to-value map with a parent chain.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::V;

pub struct Environment {
    bindings: RefCell<HashMap<String, V>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// A fresh, parentless environment — the root, or a lambda's captured scope.
    pub fn new() -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// A fresh environment whose parent is `parent`. Used to build the
    /// per-call frame for a lambda invocation (see `src/eval.rs`) — never to
    /// mutate an existing environment's parent in place.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// A child environment that starts out holding a copy of `bindings`,
    /// parented to `parent`. Used by `eval::call` to run a lambda body
    /// without ever mutating the lambda's own captured environment.
    pub fn with_parent_and_bindings(parent: Rc<Environment>, bindings: HashMap<String, V>) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: Some(parent),
        })
    }

    /// Recursive lookup. Returns a fresh clone; `Err("Unbound symbol '<k>'")`
    /// if `k` is bound nowhere in the parent chain.
    pub fn get(&self, k: &str) -> V {
        if let Some(v) = self.bindings.borrow().get(k) {
            return v.clone();
        }
        match &self.parent {
            Some(parent) => parent.get(k),
            None => V::err(format!("Unbound symbol '{}'", k)),
        }
    }

    /// Local write-or-replace; never walks the parent chain.
    pub fn put(&self, k: impl Into<String>, v: V) {
        self.bindings.borrow_mut().insert(k.into(), v);
    }

    /// Walks to the root ancestor, then `put`s there.
    pub fn def(self: &Rc<Self>, k: impl Into<String>, v: V) {
        let mut env = Rc::clone(self);
        while let Some(parent) = env.parent.clone() {
            env = parent;
        }
        env.put(k, v);
    }

    /// A snapshot of this environment's own (non-inherited) bindings, used
    /// when constructing a lambda's per-call frame.
    pub fn local_bindings(&self) -> HashMap<String, V> {
        self.bindings.borrow().clone()
    }

    /// A fresh, parentless environment seeded with `bindings`. Used to build
    /// an independent partially-applied lambda: the new closure gets its own
    /// environment rather than sharing (and so mutating) the original's.
    pub fn with_bindings(bindings: HashMap<String, V>) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: None,
        })
    }
}
