//! List manipulation: `list head tail join eval`.

use std::rc::Rc;

use crate::builtins::assert;
use crate::env::Environment;
use crate::eval::eval;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_list(_env: &Rc<Environment>, args: Vec<V>) -> V {
    V::QExpr(args)
}

fn builtin_head(_env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if let Some(e) = assert::arity("head", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::QExpr(_) => {}
        other => return assert::arg_type("head", 0, other, "Q-Expression").unwrap(),
    }
    let items = match args.remove(0) {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };
    if items.is_empty() {
        return V::err("Function 'head' passed {}!");
    }
    V::QExpr(vec![items.into_iter().next().unwrap()])
}

fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if let Some(e) = assert::arity("tail", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::QExpr(_) => {}
        other => return assert::arg_type("tail", 0, other, "Q-Expression").unwrap(),
    }
    let items = match args.remove(0) {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };
    if items.is_empty() {
        return V::err("Function 'tail' passed {}!");
    }
    V::QExpr(items.into_iter().skip(1).collect())
}

fn builtin_join(_env: &Rc<Environment>, args: Vec<V>) -> V {
    let mut joined = Vec::new();
    for (i, a) in args.into_iter().enumerate() {
        match a {
            V::QExpr(items) => joined.extend(items),
            other => return assert::arg_type("join", i, &other, "Q-Expression").unwrap(),
        }
    }
    V::QExpr(joined)
}

fn builtin_eval(env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if let Some(e) = assert::arity("eval", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::QExpr(_) => {}
        other => return assert::arg_type("eval", 0, other, "Q-Expression").unwrap(),
    }
    let items = match args.remove(0) {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };
    eval(env, V::SExpr(items))
}

pub fn register(env: &Rc<Environment>) {
    for (name, func) in [
        ("list", builtin_list as BuiltinFn),
        ("head", builtin_head),
        ("tail", builtin_tail),
        ("join", builtin_join),
        ("eval", builtin_eval),
    ] {
        env.put(name, V::Fun(Fun::Builtin { name, func }));
    }
}
