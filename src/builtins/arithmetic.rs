//! `+ - * /`: accept either all `Int` or all `Float` arguments, the numeric
//! tag inferred from the first argument. Unary `-` negates. Integer division
//! truncates toward zero and rejects `/0`; float division follows IEEE-754.

use std::rc::Rc;

use crate::env::Environment;
use crate::value::{BuiltinFn, Fun, V};

fn type_name_for_first(args: &[V]) -> &'static str {
    match args.first() {
        Some(V::Float(_)) => "Double",
        _ => "Number",
    }
}

fn op(name: &'static str, env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = check_numeric(name, &args) {
        return e;
    }

    if type_name_for_first(&args) == "Double" {
        op_float(name, args)
    } else {
        op_int(env, name, args)
    }
}

fn check_numeric(name: &str, args: &[V]) -> Option<V> {
    let expected = type_name_for_first(args);
    for (i, a) in args.iter().enumerate() {
        if a.type_name() != expected {
            return Some(V::err(format!(
                "Function '{}' passed incorrect type for argument {}. Got {}, Expected {}.",
                name,
                i,
                a.type_name(),
                expected
            )));
        }
    }
    None
}

fn op_float(name: &str, mut args: Vec<V>) -> V {
    let mut x = match args.remove(0) {
        V::Float(n) => n,
        _ => unreachable!(),
    };
    if name == "-" && args.is_empty() {
        return V::Float(-x);
    }
    for a in args {
        let y = match a {
            V::Float(n) => n,
            _ => unreachable!(),
        };
        x = match name {
            "+" => x + y,
            "-" => x - y,
            "*" => x * y,
            "/" => x / y,
            _ => unreachable!(),
        };
    }
    V::Float(x)
}

fn op_int(_env: &Rc<Environment>, name: &str, mut args: Vec<V>) -> V {
    let mut x = match args.remove(0) {
        V::Int(n) => n,
        _ => unreachable!(),
    };
    if name == "-" && args.is_empty() {
        return V::Int(-x);
    }
    for a in args {
        let y = match a {
            V::Int(n) => n,
            _ => unreachable!(),
        };
        match name {
            "+" => x += y,
            "-" => x -= y,
            "*" => x *= y,
            "/" => {
                if y == 0 {
                    return V::err("Division By Zero!");
                }
                x /= y;
            }
            _ => unreachable!(),
        }
    }
    V::Int(x)
}

fn builtin_add(env: &Rc<Environment>, args: Vec<V>) -> V {
    op("+", env, args)
}
fn builtin_sub(env: &Rc<Environment>, args: Vec<V>) -> V {
    op("-", env, args)
}
fn builtin_mul(env: &Rc<Environment>, args: Vec<V>) -> V {
    op("*", env, args)
}
fn builtin_div(env: &Rc<Environment>, args: Vec<V>) -> V {
    op("/", env, args)
}

pub fn register(env: &Rc<Environment>) {
    for (name, func) in [
        ("+", builtin_add as BuiltinFn),
        ("-", builtin_sub),
        ("*", builtin_mul),
        ("/", builtin_div),
    ] {
        env.put(name, V::Fun(Fun::Builtin { name, func }));
    }
}
