//! `if c {then} {else}` — evaluates exactly one branch.

use std::rc::Rc;

use crate::builtins::assert;
use crate::env::Environment;
use crate::eval::eval;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_if(env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if let Some(e) = assert::arity("if", args.len(), 3) {
        return e;
    }
    if !matches!(args[0], V::Int(_)) {
        return assert::arg_type("if", 0, &args[0], "Number").unwrap();
    }
    if !matches!(args[1], V::QExpr(_)) {
        return assert::arg_type("if", 1, &args[1], "Q-Expression").unwrap();
    }
    if !matches!(args[2], V::QExpr(_)) {
        return assert::arg_type("if", 2, &args[2], "Q-Expression").unwrap();
    }

    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let cond = match args.remove(0) {
        V::Int(n) => n,
        _ => unreachable!(),
    };

    let branch = if cond != 0 { then_branch } else { else_branch };
    let body = match branch {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };
    eval(env, V::SExpr(body))
}

pub fn register(env: &Rc<Environment>) {
    env.put(
        "if",
        V::Fun(Fun::Builtin {
            name: "if",
            func: builtin_if as BuiltinFn,
        }),
    );
}
