//! Ordering (`< > <= >=`) and equality (`== !=`) over pairs of values.
//!
//! Ordering is restricted to two arguments of the same numeric tag. Integer
//! comparisons return an `Int` 0/1, float comparisons return a `Float`
//! 0.0/1.0 — almost certainly a bug, but an observable one, preserved
//! bug-for-bug here rather than normalized, so existing Lispy programs that
//! pattern on the returned tag keep working.

use std::rc::Rc;

use crate::env::Environment;
use crate::value::{equal, BuiltinFn, Fun, FLOAT_TOLERANCE, V};

fn check_two_numeric(name: &str, args: &[V]) -> Option<V> {
    if args.len() != 2 {
        return Some(V::err(format!(
            "Function '{}' passed incorrect number of arguments. Got {}, Expected 2.",
            name,
            args.len()
        )));
    }
    for (i, a) in args.iter().enumerate() {
        if !matches!(a, V::Int(_) | V::Float(_)) {
            return Some(V::err(format!(
                "Function '{}' passed incorrect type for argument {}. Got {}, Expected {} or {}.",
                name,
                i,
                a.type_name(),
                "Number",
                "Double"
            )));
        }
    }
    if args[0].type_name() != args[1].type_name() {
        return Some(V::err(format!(
            "Function '{}' passed two arguments of differing type. Got {} and {}.",
            name,
            args[0].type_name(),
            args[1].type_name()
        )));
    }
    None
}

fn builtin_ord(name: &'static str, args: Vec<V>) -> V {
    if let Some(e) = check_two_numeric(name, &args) {
        return e;
    }
    match (&args[0], &args[1]) {
        (V::Int(a), V::Int(b)) => {
            let r = match name {
                "<" => a < b,
                ">" => a > b,
                "<=" => a <= b,
                ">=" => a >= b,
                _ => unreachable!(),
            };
            V::Int(r as i64)
        }
        (V::Float(a), V::Float(b)) => {
            let r = match name {
                "<" => a < b,
                ">" => a > b,
                "<=" => a <= b || (a - b).abs() < FLOAT_TOLERANCE,
                ">=" => a >= b || (a - b).abs() < FLOAT_TOLERANCE,
                _ => unreachable!(),
            };
            V::Float(if r { 1.0 } else { 0.0 })
        }
        _ => unreachable!(),
    }
}

fn builtin_lt(_env: &Rc<Environment>, args: Vec<V>) -> V {
    builtin_ord("<", args)
}
fn builtin_gt(_env: &Rc<Environment>, args: Vec<V>) -> V {
    builtin_ord(">", args)
}
fn builtin_le(_env: &Rc<Environment>, args: Vec<V>) -> V {
    builtin_ord("<=", args)
}
fn builtin_ge(_env: &Rc<Environment>, args: Vec<V>) -> V {
    builtin_ord(">=", args)
}

fn check_two(name: &str, args: &[V]) -> Option<V> {
    if args.len() != 2 {
        Some(V::err(format!(
            "Function '{}' passed incorrect number of arguments. Got {}, Expected 2.",
            name,
            args.len()
        )))
    } else {
        None
    }
}

fn builtin_eq(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = check_two("==", &args) {
        return e;
    }
    V::Int(equal(&args[0], &args[1]) as i64)
}

fn builtin_ne(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = check_two("!=", &args) {
        return e;
    }
    V::Int(!equal(&args[0], &args[1]) as i64)
}

pub fn register(env: &Rc<Environment>) {
    for (name, func) in [
        ("<", builtin_lt as BuiltinFn),
        (">", builtin_gt),
        ("<=", builtin_le),
        (">=", builtin_ge),
        ("==", builtin_eq),
        ("!=", builtin_ne),
    ] {
        env.put(name, V::Fun(Fun::Builtin { name, func }));
    }
}
