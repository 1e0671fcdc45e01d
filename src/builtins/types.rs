//! Introspection: `typeof`.

use std::rc::Rc;

use crate::builtins::assert;
use crate::env::Environment;
use crate::value::{BuiltinFn, Fun, V};

fn builtin_typeof(_env: &Rc<Environment>, args: Vec<V>) -> V {
    if let Some(e) = assert::arity("typeof", args.len(), 1) {
        return e;
    }
    V::Str(args[0].type_name().to_string())
}

pub fn register(env: &Rc<Environment>) {
    env.put(
        "typeof",
        V::Fun(Fun::Builtin {
            name: "typeof",
            func: builtin_typeof as BuiltinFn,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval;
    use crate::parser::parse_one;

    fn root() -> Rc<Environment> {
        let env = Environment::new();
        register(&env);
        env
    }

    #[test]
    fn typeof_returns_the_documented_type_names() {
        let env = root();
        assert!(matches!(
            eval(&env, parse_one("(typeof {1 2 3})").unwrap()),
            V::Str(s) if s == "Q-Expression"
        ));
        assert!(matches!(
            eval(&env, parse_one("(typeof 1)").unwrap()),
            V::Str(s) if s == "Number"
        ));
        assert!(matches!(
            eval(&env, parse_one("(typeof 1.0)").unwrap()),
            V::Str(s) if s == "Double"
        ));
    }
}
