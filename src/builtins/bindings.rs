//! Variable binding (`def`, `=`) and lambda construction (`\`).

use std::rc::Rc;

use crate::env::Environment;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_var(name: &'static str, env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if args.is_empty() {
        return V::err(format!(
            "Function '{}' passed incorrect type for argument 0. Got {}, Expected {}.",
            name, "nothing", "Q-Expression"
        ));
    }
    match &args[0] {
        V::QExpr(_) => {}
        other => {
            return V::err(format!(
                "Function '{}' passed incorrect type for argument 0. Got {}, Expected {}.",
                name,
                other.type_name(),
                "Q-Expression"
            ))
        }
    }

    let syms = match args.remove(0) {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };

    let mut names = Vec::with_capacity(syms.len());
    for s in &syms {
        match s {
            V::Sym(name) => names.push(name.clone()),
            other => {
                return V::err(format!(
                    "Function '{}' passed incorrect type for the {}th element in argument 1. Got {}, Expected {}.",
                    name, names.len(), other.type_name(), "Symbol"
                ))
            }
        }
    }

    if names.len() != args.len() {
        return V::err(format!(
            "Function '{}' cannot define incorrect number of values to symbols. Got {} and {}, Expected them to be equal.",
            name, names.len(), args.len()
        ));
    }

    for (sym, val) in names.into_iter().zip(args.into_iter()) {
        if name == "def" {
            env.def(sym, val);
        } else {
            env.put(sym, val);
        }
    }

    V::sexpr()
}

fn builtin_def(env: &Rc<Environment>, args: Vec<V>) -> V {
    builtin_var("def", env, args)
}

fn builtin_put(env: &Rc<Environment>, args: Vec<V>) -> V {
    builtin_var("=", env, args)
}

fn builtin_lambda(_env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if args.len() != 2 {
        return V::err(format!(
            "Function '\\' passed incorrect number of arguments. Got {}, Expected 2.",
            args.len()
        ));
    }
    for i in 0..2 {
        if !matches!(args[i], V::QExpr(_)) {
            return V::err(format!(
                "Function '\\' passed incorrect type for argument {}. Got {}, Expected {}.",
                i,
                args[i].type_name(),
                "Q-Expression"
            ));
        }
    }

    let body = match args.remove(1) {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };
    let formals = match args.remove(0) {
        V::QExpr(items) => items,
        _ => unreachable!(),
    };

    for f in &formals {
        if !matches!(f, V::Sym(_)) {
            return V::err(format!(
                "Function '\\' passed incorrect type for an element of argument 0. Got {}, Expected {}.",
                f.type_name(),
                "Symbol"
            ));
        }
    }

    V::Fun(Fun::Lambda {
        formals,
        body,
        env: Environment::new(),
    })
}

pub fn register(env: &Rc<Environment>) {
    for (name, func) in [
        ("def", builtin_def as BuiltinFn),
        ("=", builtin_put),
        ("\\", builtin_lambda),
    ] {
        env.put(name, V::Fun(Fun::Builtin { name, func }));
    }
}
