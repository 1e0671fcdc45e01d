//! Numeric coercions and rounding: `inttofloat floattoint ceil floor round`.

use std::rc::Rc;

use crate::builtins::assert;
use crate::env::Environment;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_inttofloat(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = assert::arity("inttofloat", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::Float(n) => V::Float(*n),
        V::Int(n) => V::Float(*n as f64),
        other => assert::arg_type("inttofloat", 0, other, "Number").unwrap(),
    }
}

fn builtin_floattoint(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = assert::arity("floattoint", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::Int(n) => V::Int(*n),
        V::Float(n) => V::Int(*n as i64),
        other => assert::arg_type("floattoint", 0, other, "Double").unwrap(),
    }
}

fn rounding(name: &'static str, f: fn(f64) -> f64, _env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = assert::arity(name, args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::Float(n) => V::Int(f(*n) as i64),
        other => assert::arg_type(name, 0, other, "Double").unwrap(),
    }
}

fn builtin_ceil(env: &Rc<Environment>, args: Vec<V>) -> V {
    rounding("ceil", f64::ceil, env, args)
}
fn builtin_floor(env: &Rc<Environment>, args: Vec<V>) -> V {
    rounding("floor", f64::floor, env, args)
}
fn builtin_round(env: &Rc<Environment>, args: Vec<V>) -> V {
    rounding("round", f64::round, env, args)
}

pub fn register(env: &Rc<Environment>) {
    for (name, func) in [
        ("inttofloat", builtin_inttofloat as BuiltinFn),
        ("floattoint", builtin_floattoint),
        ("ceil", builtin_ceil),
        ("floor", builtin_floor),
        ("round", builtin_round),
    ] {
        env.put(name, V::Fun(Fun::Builtin { name, func }));
    }
}
