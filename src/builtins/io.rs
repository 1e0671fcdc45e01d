//! File loading and console diagnostics: `load`, `print`, `error`.

use std::rc::Rc;

use crate::builtins::assert;
use crate::env::Environment;
use crate::eval::eval;
use crate::parser::parse_program;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_load(env: &Rc<Environment>, mut args: Vec<V>) -> V {
    if let Some(e) = assert::arity("load", args.len(), 1) {
        return e;
    }
    if !matches!(args[0], V::Str(_)) {
        return assert::arg_type("load", 0, &args[0], "String").unwrap();
    }
    let path = match args.remove(0) {
        V::Str(s) => s,
        _ => unreachable!(),
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => return V::err(format!("Could not load Library: {}", e)),
    };

    let exprs = match parse_program(&contents) {
        Ok(exprs) => exprs,
        Err(e) => return V::err(format!("Could not load Library: {}", e)),
    };

    for expr in exprs {
        let result = eval(env, expr);
        if let V::Err(msg) = &result {
            println!("Error: {}", msg);
        }
    }

    V::sexpr()
}

fn builtin_print(_env: &Rc<Environment>, args: Vec<V>) -> V {
    let parts: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", parts.join(" "));
    V::sexpr()
}

fn builtin_error(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = assert::arity("error", args.len(), 1) {
        return e;
    }
    match &args[0] {
        V::Str(s) => V::err(s.clone()),
        other => assert::arg_type("error", 0, other, "String").unwrap(),
    }
}

pub fn register(env: &Rc<Environment>) {
    for (name, func) in [
        ("load", builtin_load as BuiltinFn),
        ("print", builtin_print),
        ("error", builtin_error),
    ] {
        env.put(name, V::Fun(Fun::Builtin { name, func }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval as eval_v;
    use crate::parser::parse_one;

    fn root() -> Rc<Environment> {
        let env = Environment::new();
        register(&env);
        env
    }

    #[test]
    fn error_constructs_err_without_raising() {
        let env = root();
        match eval_v(&env, parse_one(r#"(error "boom")"#).unwrap()) {
            V::Err(msg) => assert_eq!(msg, "boom"),
            other => panic!("expected Err, got {}", other),
        }
    }

    #[test]
    fn error_does_not_accept_format_directives_as_a_template() {
        let env = root();
        match eval_v(&env, parse_one(r#"(error "100%done")"#).unwrap()) {
            V::Err(msg) => assert_eq!(msg, "100%done"),
            other => panic!("expected Err, got {}", other),
        }
    }

    #[test]
    fn load_missing_file_errors() {
        let env = root();
        match eval_v(&env, parse_one(r#"(load "/no/such/file.lispy")"#).unwrap()) {
            V::Err(msg) => assert!(msg.starts_with("Could not load Library:")),
            other => panic!("expected Err, got {}", other),
        }
    }

    #[test]
    fn load_runs_every_top_level_form_in_order() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lispy_load_test_{}.lispy", std::process::id()));
        std::fs::write(&path, "(def {x} 41)\n(def {y} 1)").unwrap();

        let env = root();
        crate::builtins::arithmetic::register(&env);
        crate::builtins::bindings::register(&env);

        let src = format!("(load \"{}\")", path.display());
        eval_v(&env, parse_one(&src).unwrap());
        assert!(matches!(eval_v(&env, parse_one("(+ x y)").unwrap()), V::Int(42)));

        let _ = std::fs::remove_file(&path);
    }
}
