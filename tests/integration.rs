//! End-to-end language scenarios, run against a freshly bootstrapped root
//! environment.

use lispy::env::Environment;
use lispy::eval::eval;
use lispy::parser::parse_one;
use lispy::value::{equal, Fun, V};

fn root() -> std::rc::Rc<Environment> {
    let env = Environment::new();
    lispy::builtins::register_builtins(&env);
    env
}

fn run(src: &str) -> V {
    let env = root();
    eval(&env, parse_one(src).unwrap())
}

fn run_in(env: &std::rc::Rc<Environment>, src: &str) -> V {
    eval(env, parse_one(src).unwrap())
}

#[test]
fn sum_of_three_integers() {
    assert!(matches!(run("+ 1 2 3"), V::Int(6)));
}

#[test]
fn eval_of_head_of_nested_sexprs() {
    assert!(matches!(
        run("eval (head {(+ 1 2) (+ 10 20)})"),
        V::Int(3)
    ));
}

#[test]
fn def_then_lookup() {
    let env = root();
    run_in(&env, "def {x} 100");
    assert!(matches!(run_in(&env, "x"), V::Int(100)));
}

#[test]
fn variadic_lambda_captures_remaining_args() {
    match run("(\\ {x & xs} {xs}) 1 2 3 4") {
        V::QExpr(items) => assert_eq!(items.len(), 3),
        other => panic!("expected QExpr, got {}", other),
    }
}

#[test]
fn if_selects_correct_branch() {
    assert!(matches!(
        run("if (== 1 1) {+ 1 2} {+ 10 20}"),
        V::Int(3)
    ));
}

#[test]
fn division_by_zero_is_an_error_value() {
    match run("/ 5 0") {
        V::Err(msg) => assert_eq!(msg, "Division By Zero!"),
        other => panic!("expected Err, got {}", other),
    }
    assert_eq!(run("/ 5 0").to_string(), "Error: Division By Zero!");
}

#[test]
fn float_addition_prints_with_default_fractional_form() {
    assert_eq!(run("+ 1.5 2.25").to_string(), "3.750000");
}

#[test]
fn ceil_floor_round() {
    assert!(matches!(run("ceil 1.2"), V::Int(2)));
    assert!(matches!(run("floor 1.8"), V::Int(1)));
    assert!(matches!(run("round 1.5"), V::Int(2)));
}

#[test]
fn typeof_qexpr() {
    assert_eq!(run("typeof {1 2 3}").to_string(), "\"Q-Expression\"");
}

#[test]
fn head_of_empty_list_errors() {
    match run("head {}") {
        V::Err(msg) => assert_eq!(msg, "Function 'head' passed {}!"),
        other => panic!("expected Err, got {}", other),
    }
}

#[test]
fn partial_application_then_full_application() {
    let env = root();
    run_in(&env, "def {add} (\\ {x y} {+ x y})");
    let partial = run_in(&env, "(add 3)");
    match &partial {
        V::Fun(lispy::value::Fun::Lambda { formals, .. }) => assert_eq!(formals.len(), 1),
        other => panic!("expected partial lambda, got {}", other),
    }
    assert!(partial.to_string().starts_with("(\\ {y}"));

    run_in(&env, "def {partial} ((\\ {x y} {+ x y}) 3)");
    assert!(matches!(run_in(&env, "(partial 4)"), V::Int(7)));
}

#[test]
fn def_is_global_put_is_local() {
    let root_env = root();
    run_in(&root_env, "def {g} 1");
    let child = Environment::with_parent(root_env.clone());
    eval(&child, parse_one("(= {l} 2)").unwrap());
    assert!(matches!(root_env.get("g"), V::Int(1)));
    assert!(matches!(root_env.get("l"), V::Err(_)));
    assert!(matches!(child.get("l"), V::Int(2)));
}

#[test]
fn error_propagates_through_sexpr_reduction() {
    match run("+ 1 (head {})") {
        V::Err(msg) => assert_eq!(msg, "Function 'head' passed {}!"),
        other => panic!("expected Err, got {}", other),
    }
}

#[test]
fn print_read_round_trip_for_non_function_values() {
    // `eval`'s own S-expression results are `(...)`-printed, so feed them
    // back through the reader wrapped as a Q-expression to compare structure
    // rather than re-triggering evaluation.
    for (src, expected) in [
        ("42", V::Int(42)),
        ("-7", V::Int(-7)),
        ("{1 2 3}", V::QExpr(vec![V::Int(1), V::Int(2), V::Int(3)])),
        ("\"hello\"", V::Str("hello".to_string())),
    ] {
        let env = root();
        let v = run_in(&env, src);
        assert!(equal(&v, &expected), "eval({}) = {}", src, v);
        let printed = v.to_string();
        let reread = parse_one(&printed).unwrap();
        assert!(equal(&reread, &v), "print/read round-trip failed for {}", src);
    }
}

#[test]
fn currying_a_multi_arg_lambda_keeps_bound_args_across_calls() {
    let env = root();
    run_in(&env, "def {add} (\\ {x y} {+ x y})");
    run_in(&env, "def {add5} (add 5)");
    assert!(matches!(run_in(&env, "(add5 2)"), V::Int(7)));
}

#[test]
fn a_lambda_written_inside_another_lambdas_body_does_not_close_over_it() {
    // Every `\` starts from a fresh, parentless env, so nesting one lambda
    // literal inside another's body does not give the inner lambda access to
    // the outer lambda's formals. Currying (above) is the form of reuse this
    // language actually supports.
    let env = root();
    run_in(&env, "def {make-counter} (\\ {n} {\\ {} {n}})");
    run_in(&env, "def {c} (make-counter 5)");
    assert!(matches!(run_in(&env, "(c)"), V::Err(_)));
}

#[test]
fn join_requires_all_qexpr_arguments() {
    match run("join {1 2} 3") {
        V::Err(msg) => assert!(msg.contains("incorrect type")),
        other => panic!("expected Err, got {}", other),
    }
}

#[test]
fn recursive_lambda_reentry_does_not_corrupt_bindings() {
    // `fact` looks itself up by symbol (root-bound via `def`) inside its own
    // body, so evaluating `(fact 5)` reenters the same lambda value five
    // times before any call returns. Each reentry gets its own per-call
    // frame (src/eval.rs), so the nested `n` bindings never collide.
    let env = root();
    run_in(
        &env,
        "def {fact} (\\ {n} {if (== n 0) {1} {* n (fact (- n 1))}})",
    );
    assert!(matches!(run_in(&env, "(fact 5)"), V::Int(120)));
    assert!(matches!(run_in(&env, "(fact 0)"), V::Int(1)));
}

#[test]
fn interleaved_calls_to_two_partial_applications_of_the_same_lambda_stay_independent() {
    // `add5` and `add10` are both partial applications derived from the same
    // `add` lambda value. Calling them in an interleaved order exercises
    // that each one's bound `x` lives in its own closure env and that
    // driving one to completion does not disturb the other's pending call.
    let env = root();
    run_in(&env, "def {add} (\\ {x y} {+ x y})");
    let add5 = run_in(&env, "(add 5)");
    let add10 = run_in(&env, "(add 10)");

    let (f5, f10) = match (&add5, &add10) {
        (V::Fun(f5 @ Fun::Lambda { .. }), V::Fun(f10 @ Fun::Lambda { .. })) => {
            (f5.clone(), f10.clone())
        }
        _ => panic!(
            "expected two partial lambdas, got {} and {}",
            add5, add10
        ),
    };

    let call = |f: &Fun, arg: i64| eval(&env, V::SExpr(vec![V::Fun(f.clone()), V::Int(arg)]));

    assert!(matches!(call(&f10, 1), V::Int(11)));
    assert!(matches!(call(&f5, 1), V::Int(6)));
    assert!(matches!(call(&f10, 2), V::Int(12)));
    assert!(matches!(call(&f5, 2), V::Int(7)));
}
