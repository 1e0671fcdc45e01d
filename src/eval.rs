//! The tree-walking evaluator: symbol lookup, S-expression reduction, call
//! dispatch (builtin or lambda), and partial application.

use std::rc::Rc;

use crate::env::Environment;
use crate::value::{Fun, V};

/// `eval(e, v)`: symbols resolve against `e`; S-expressions reduce (below);
/// every other tag is self-evaluating and returned unchanged.
pub fn eval(env: &Rc<Environment>, v: V) -> V {
    match v {
        V::Sym(name) => env.get(&name),
        V::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

/// S-expression reduction:
/// 1. Evaluate each child in order.
/// 2. If any child evaluated to `Err`, that error is the whole result.
/// 3. Zero children → empty `SExpr`. One child → that child, unwrapped.
/// 4. Otherwise the first child must be a `Fun`; call it with the rest.
fn eval_sexpr(env: &Rc<Environment>, items: Vec<V>) -> V {
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let result = eval(env, item);
        if result.is_err() {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.is_empty() {
        return V::sexpr();
    }
    if evaluated.len() == 1 {
        return evaluated.into_iter().next().unwrap();
    }

    let mut rest = evaluated;
    let first = rest.remove(0);
    match first {
        V::Fun(f) => call(env, f, rest),
        other => V::err(format!(
            "S-Expression starts with incorrect type. Got {}, Expected {}.",
            other.type_name(),
            "Function"
        )),
    }
}

/// Call dispatch. Builtins are invoked directly; lambdas bind their formals
/// against `args` left-to-right, honoring `&`-variadic capture and returning
/// a partially-applied closure when fewer arguments are given than formals.
pub fn call(env: &Rc<Environment>, f: Fun, args: Vec<V>) -> V {
    match f {
        Fun::Builtin { func, .. } => func(env, args),
        Fun::Lambda {
            mut formals,
            body,
            env: captured,
        } => {
            let given = args.len();
            let total = formals.len();
            let mut args: std::collections::VecDeque<V> = args.into();
            let mut bound: Vec<(String, V)> = Vec::new();

            while !args.is_empty() {
                if formals.is_empty() {
                    return V::err(format!(
                        "Function passed too many arguments. Got {}, Expected {}.",
                        given, total
                    ));
                }
                let sym = formals.remove(0);
                let sym_name = match sym {
                    V::Sym(s) => s,
                    _ => return V::err("formal parameter list must contain only symbols"),
                };

                if sym_name == "&" {
                    if formals.len() != 1 {
                        return V::err(
                            "Function format invalid. Symbol '&' not followed by single symbol.",
                        );
                    }
                    let varsym = match formals.remove(0) {
                        V::Sym(s) => s,
                        _ => return V::err("formal parameter list must contain only symbols"),
                    };
                    let rest: Vec<V> = args.into_iter().collect();
                    bound.push((varsym, V::QExpr(rest)));
                    args = std::collections::VecDeque::new();
                    break;
                }

                let val = args.pop_front().unwrap();
                bound.push((sym_name, val));
            }

            if formals.first().map(|s| matches!(s, V::Sym(s) if s == "&")) == Some(true) {
                if formals.len() != 2 {
                    return V::err(
                        "Function format invalid. Symbol '&' not followed by single symbol.",
                    );
                }
                formals.remove(0);
                let varsym = match formals.remove(0) {
                    V::Sym(s) => s,
                    _ => return V::err("formal parameter list must contain only symbols"),
                };
                bound.push((varsym, V::qexpr()));
            }

            let mut bindings = captured.local_bindings();
            for (k, v) in bound {
                bindings.insert(k, v);
            }

            if formals.is_empty() {
                let call_env = Environment::with_parent_and_bindings(Rc::clone(env), bindings);
                eval_sexpr(&call_env, body)
            } else {
                // Independent closure: its own fresh environment, not the
                // original lambda's — so partial application never leaks
                // bindings back into the value it was applied to.
                V::Fun(Fun::Lambda {
                    formals,
                    body,
                    env: Environment::with_bindings(bindings),
                })
            }
        }
    }
}
