//! Process control: `quit`.

use std::rc::Rc;

use crate::builtins::assert;
use crate::env::Environment;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_quit(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = assert::arity("quit", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::Int(n) => std::process::exit(*n as i32),
        other => assert::arg_type("quit", 0, other, "Number").unwrap(),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.put(
        "quit",
        V::Fun(Fun::Builtin {
            name: "quit",
            func: builtin_quit as BuiltinFn,
        }),
    );
}
