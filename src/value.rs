//! The runtime value type `V` and the function payload it carries.
//!
//! Every Lisp-level value in the interpreter is a `V`. Rust's ownership model
//! (move-by-default, explicit `Clone`) stands in for the copy/delete discipline
//! a garbage-collector-less C implementation has to hand-roll.

use std::fmt;
use std::rc::Rc;

use crate::env::Environment;

/// Absolute tolerance used by float equality and by the `<=`/`>=` float forms.
pub const FLOAT_TOLERANCE: f64 = 1e-9;

/// A builtin's Rust-level signature. Opaque to the evaluator; equality is by
/// function-pointer identity.
pub type BuiltinFn = fn(&Rc<Environment>, Vec<V>) -> V;

/// The two shapes a `Fun` value can take.
#[derive(Clone)]
pub enum Fun {
    /// A primitive implemented in Rust.
    Builtin {
        name: &'static str,
        func: BuiltinFn,
    },
    /// A user-defined function: formals, an unevaluated body, and a captured
    /// environment. The captured env begins with no parent; it gains one only
    /// transiently, as a fresh per-call child frame built in `eval::call`
    /// (see `src/eval.rs`) — the captured env itself is never mutated.
    Lambda {
        formals: Vec<V>,
        body: Vec<V>,
        env: Rc<Environment>,
    },
}

impl fmt::Display for Fun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fun::Builtin { .. } => write!(f, "<function>"),
            Fun::Lambda { formals, body, .. } => {
                write!(f, "(\\ {{")?;
                print_joined(f, formals)?;
                write!(f, "}} {{")?;
                print_joined(f, body)?;
                write!(f, "}})")
            }
        }
    }
}

/// The runtime value type. Exactly the eight alternatives the language needs:
/// two numeric tags, an error tag that is a first-class value (not a Rust
/// panic or `Result`), three string-ish leaf tags, a function payload, and
/// the two list kinds that distinguish evaluable code from quoted data.
#[derive(Clone)]
pub enum V {
    Int(i64),
    Float(f64),
    Err(String),
    Sym(String),
    Str(String),
    Fun(Fun),
    SExpr(Vec<V>),
    QExpr(Vec<V>),
}

impl V {
    pub fn sexpr() -> V {
        V::SExpr(Vec::new())
    }

    pub fn qexpr() -> V {
        V::QExpr(Vec::new())
    }

    pub fn err(msg: impl Into<String>) -> V {
        V::Err(msg.into())
    }

    /// Name used in error messages and by `typeof`.
    pub fn type_name(&self) -> &'static str {
        match self {
            V::Int(_) => "Number",
            V::Float(_) => "Double",
            V::Err(_) => "Error",
            V::Sym(_) => "Symbol",
            V::Str(_) => "String",
            V::Fun(_) => "Function",
            V::SExpr(_) => "S-Expression",
            V::QExpr(_) => "Q-Expression",
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, V::Err(_))
    }
}

/// Structural equality. `Float` uses `FLOAT_TOLERANCE`; lambdas compare by
/// formals/body only (captured env ignored); builtins compare by identity of
/// their function pointer; an `SExpr` is never equal to a `QExpr` even with
/// identical contents, since the tags themselves differ.
pub fn equal(a: &V, b: &V) -> bool {
    match (a, b) {
        (V::Int(x), V::Int(y)) => x == y,
        (V::Float(x), V::Float(y)) => (x - y).abs() < FLOAT_TOLERANCE,
        (V::Err(x), V::Err(y)) => x == y,
        (V::Sym(x), V::Sym(y)) => x == y,
        (V::Str(x), V::Str(y)) => x == y,
        (V::SExpr(x), V::SExpr(y)) | (V::QExpr(x), V::QExpr(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| equal(p, q))
        }
        (V::Fun(Fun::Builtin { func: f, .. }), V::Fun(Fun::Builtin { func: g, .. })) => {
            std::ptr::eq(*f as *const (), *g as *const ())
        }
        (
            V::Fun(Fun::Lambda {
                formals: f1,
                body: b1,
                ..
            }),
            V::Fun(Fun::Lambda {
                formals: f2,
                body: b2,
                ..
            }),
        ) => {
            f1.len() == f2.len()
                && f1.iter().zip(f2.iter()).all(|(p, q)| equal(p, q))
                && b1.len() == b2.len()
                && b1.iter().zip(b2.iter()).all(|(p, q)| equal(p, q))
        }
        _ => false,
    }
}

fn print_joined(f: &mut fmt::Formatter<'_>, items: &[V]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            V::Int(n) => write!(f, "{}", n),
            V::Float(n) => write!(f, "{:.6}", n),
            V::Err(msg) => write!(f, "Error: {}", msg),
            V::Sym(s) => write!(f, "{}", s),
            V::Str(s) => write!(f, "{}", escape_str(s)),
            V::Fun(fun) => write!(f, "{}", fun),
            V::SExpr(items) => {
                write!(f, "(")?;
                print_joined(f, items)?;
                write!(f, ")")
            }
            V::QExpr(items) => {
                write!(f, "{{")?;
                print_joined(f, items)?;
                write!(f, "}}")
            }
        }
    }
}
