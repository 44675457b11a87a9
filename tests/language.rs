mod common;

use common::{assert_failure, assert_value, eval_last, run_captured, runtime_error};
use funk::{
    ast::{Arity, BuiltIn, Expr},
    error::RuntimeError,
    get_result,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Context, EvalResult},
            function::core::find_builtin,
        },
        lexer::tokenize,
        parser::core::parse_program,
    },
};

fn count_mismatch(function: &str, expected: &str, received: usize) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                          expected: expected.to_string(),
                                          received }
}

fn undefined(name: &str) -> RuntimeError {
    RuntimeError::UndefinedSymbol { name: name.to_string() }
}

#[test]
fn basic_arithmetic() {
    assert_value("(add 1 2 3)", 6);
    assert_value("(sub 10 3 2)", 5);
    assert_value("(mul 2 3 4)", 24);
    assert_value("(div 100 5 2)", 10);
    assert_value("(mod 17 5)", 2);
    assert_value("(add (mul 2 3) (sub 10 (add 1 1)))", 14);
}

#[test]
fn arithmetic_edge_cases() {
    assert_value("(add)", 0);
    assert_value("(mul)", 1);
    assert_value("(sub 4)", 4);
    assert_value("(sub -4 -6)", 2);
    assert_value("(div 7 2)", 3);
    assert_value("(div -7 2)", -3);
    assert_value("(mod -7 3)", -1);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("(div 10 0)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("(div 10 2 0 5)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("(mod 10 0)"), RuntimeError::RemainderByZero);
}

#[test]
fn overflow_is_error() {
    assert_eq!(runtime_error("(add 2147483647 1)"),
               RuntimeError::Overflow { function: "add".to_string() });
    assert_eq!(runtime_error("(div -2147483648 -1)"),
               RuntimeError::Overflow { function: "div".to_string() });
}

#[test]
fn left_folding_builtins_require_an_argument() {
    assert_eq!(runtime_error("(sub)"), count_mismatch("sub", "at least 1", 0));
    assert_eq!(runtime_error("(div)"), count_mismatch("div", "at least 1", 0));
    assert_eq!(runtime_error("(mod)"), count_mismatch("mod", "at least 1", 0));
}

#[test]
fn arithmetic_rejects_non_numbers() {
    assert_eq!(runtime_error("(add 1 add)"),
               RuntimeError::UnexpectedArgumentType { function: "add".to_string() });
    assert_eq!(runtime_error("(mul 2 (batch))"),
               RuntimeError::UnexpectedArgumentType { function: "mul".to_string() });
}

#[test]
fn if_selects_first_truthy_pair_or_else() {
    assert_value("(if 0 1 0 2 3)", 3);
    assert_value("(if 1 10 20)", 10);
    assert_value("(if 0 10 7 20 30)", 20);
    assert_value("(if -1 5)", 5);
    assert_value("(if 0 1)", Expr::Void);
    assert_value("(if)", Expr::Void);
    assert_value("(if 9)", 9);
}

#[test]
fn if_evaluates_branches_that_are_not_taken() {
    assert_eq!(runtime_error("(if 1 5 (div 1 0))"), RuntimeError::DivisionByZero);

    let (result, output) = run_captured(&["(if 1 2 (print 99))"]);
    assert!(result.is_ok());
    assert_eq!(output, "99\n2\n");
}

#[test]
fn if_conditions_must_be_numbers() {
    assert_eq!(runtime_error("(if add 1 2)"),
               RuntimeError::UnexpectedArgumentType { function: "if".to_string() });
}

#[test]
fn batch_returns_last_argument() {
    assert_value("(batch 1 2 3)", 3);
    assert_value("(batch)", Expr::Void);
}

#[test]
fn not_and_or_xor() {
    assert_value("(not 0)", 1);
    assert_value("(not 5)", 0);
    assert_value("(and 1 2 3)", 1);
    assert_value("(and 1 0 3)", 0);
    assert_value("(or 0 0 4)", 1);
    assert_value("(or 0 0)", 0);
    assert_value("(xor 0 1 0)", 1);
    assert_value("(xor 1 1 0)", 0);
    assert_value("(xor 0 0)", 0);
    assert_eq!(runtime_error("(not)"), count_mismatch("not", "1", 0));
    assert_eq!(runtime_error("(not 1 2)"), count_mismatch("not", "1", 2));
    assert_eq!(runtime_error("(and 1 not)"),
               RuntimeError::UnexpectedArgumentType { function: "and".to_string() });
}

#[test]
fn comparisons_check_adjacent_pairs() {
    assert_value("(equal 1 1 2)", 0);
    assert_value("(equal 4 4 4)", 1);
    assert_value("(not_equal 1 0 1)", 1);
    assert_value("(not_equal 1 1)", 0);
    assert_value("(greater 3 2 1)", 1);
    assert_value("(greater 3 3)", 0);
    assert_value("(greater_or_equal 3 3 1)", 1);
    assert_value("(less 1 2 2)", 0);
    assert_value("(less -5 0 5)", 1);
    assert_value("(less_or_equal 1 2 2)", 1);
}

#[test]
fn comparisons_require_two_arguments() {
    for name in ["equal", "not_equal", "greater", "greater_or_equal", "less", "less_or_equal"] {
        assert_eq!(runtime_error(&format!("({name} 1)")),
                   count_mismatch(name, "at least 2", 1));
        assert_eq!(runtime_error(&format!("({name})")),
                   count_mismatch(name, "at least 2", 0));
    }
}

#[test]
fn builtin_arguments_are_evaluated_before_the_count_is_checked() {
    let (result, output) = run_captured(&["(equal (print 7))"]);
    let e = result.expect_err("a single comparison argument must fail");
    assert_eq!(e.downcast_ref::<RuntimeError>(),
               Some(&count_mismatch("equal", "at least 2", 1)));
    assert_eq!(output, "7\n");

    assert_eq!(runtime_error("(equal (undefined_thing))"), undefined("undefined_thing"));
    assert_eq!(runtime_error("(not (div 1 0) 2)"), RuntimeError::DivisionByZero);
}

#[test]
fn function_with_call_body_binds_parameters() {
    assert_value("(function add1 (x) (add x 1)) (add1 5)", 6);
    assert_value("(function sum3 (a b c) (add a b c)) (sum3 1 2 3)", 6);
}

#[test]
fn function_with_symbol_body_gets_no_parameter_scope() {
    assert_eq!(runtime_error("(function id (x) x) (id 5)"), undefined("x"));
}

#[test]
fn function_with_symbol_body_sees_caller_bindings() {
    let src = "(function get (x) x)
               (function outer (x) (get 100))
               (outer 7)";
    assert_value(src, 7);
}

#[test]
fn function_with_literal_body() {
    assert_value("(function five () 5) (five)", 5);
    assert_value("(function ignore (a b) 0) (ignore 1 2)", 0);
}

#[test]
fn defining_a_function_returns_it_and_binds_it() {
    let result = eval_last("(function sq (x) (mul x x))");
    let Expr::Function(def) = result else {
        panic!("expected a function, got {result:?}");
    };
    assert_eq!(def.name, "sq");
    assert_eq!(def.parameters, vec!["x".to_string()]);
    assert_value("(function sq (x) (mul x x)) (sq 12)", 144);
}

#[test]
fn nested_definitions_stay_in_the_call_scope() {
    let src = "(function outer () (batch (function helper () (add 1 1)) (helper)))";
    assert_value(&format!("{src} (outer)"), 2);
    assert_eq!(runtime_error(&format!("{src} (outer) (helper)")), undefined("helper"));
}

#[test]
fn user_function_argument_count_is_checked() {
    let e = runtime_error("(function add1 (x) (add x 1)) (add1 1 2)");
    assert_eq!(e, count_mismatch("add1", "1", 2));
    assert_eq!(e.to_string(),
               "Unexpected number of arguments provided to function \"add1\" (Expected: 1, Received: 2).");
}

#[test]
fn functions_are_first_class() {
    let src = "(function apply (f a) (f a))
               (function inc (x) (add x 1))
               (apply inc 41)";
    assert_value(src, 42);
    assert_value("(function call_builtin (f) (f 2 3)) (call_builtin mul)", 6);
}

#[test]
fn callee_can_be_any_expression() {
    assert_value("((function twice (x) (mul x 2)) 21)", 42);
    assert_value("((function twice (x) (mul x 2)) 21) (twice 4)", 8);
    assert_value("((batch add) 1 2)", 3);
}

#[test]
fn builtins_can_be_shadowed() {
    assert_value("(function add (a b) (sub a b)) (add 5 3)", 2);
}

#[test]
fn calling_a_non_function_is_error() {
    assert_eq!(runtime_error("(1 2)"),
               RuntimeError::NotCallable { found: "number 1".to_string() });
    assert_eq!(runtime_error("((batch) 2)"),
               RuntimeError::NotCallable { found: "void".to_string() });
}

#[test]
fn undefined_symbols_fail_after_searching_every_scope() {
    assert_eq!(runtime_error("(foo 1)"), undefined("foo"));
    let src = "(function inner () (add missing 1))
               (function middle (a) (inner))
               (function outer (b) (middle b))
               (outer 1)";
    assert_eq!(runtime_error(src), undefined("missing"));
}

#[test]
fn parameters_shadow_outer_bindings() {
    let src = "(function x () (add 1 1))
               (function f (x) (add x 1))
               (f 10)";
    assert_value(src, 11);
}

#[test]
fn evaluating_void_is_error() {
    let mut context = Context::with_output(Box::new(std::io::sink()));
    let mut env = Environment::with_builtins();
    assert_eq!(context.eval(&Expr::Void, &mut env), Err(RuntimeError::VoidEvaluation));
}

#[test]
fn errors_abort_the_whole_run() {
    let (result, output) = run_captured(&["(print 1) (div 1 0) (print 2)"]);
    assert!(result.is_err());
    assert_eq!(output, "1\n");
}

#[test]
fn print_writes_display_forms() {
    let (result, output) = run_captured(&["(print 1 -2)"]);
    assert!(result.is_ok());
    assert_eq!(output, "1\n-2\n");

    let (_, output) = run_captured(&["(print add (batch))"]);
    assert_eq!(output, "<built-in add>\n");

    let (_, output) = run_captured(&["(print (function sq (x) (mul x x)))"]);
    assert_eq!(output, "(function sq (x) (mul x x))\n");
}

#[test]
fn only_numeric_top_level_results_are_echoed() {
    let src = "(function f () (add 1 2)) (f) (print 4) (batch) 5 add";
    let (result, output) = run_captured(&[src]);
    let results = result.expect("program failed");
    assert_eq!(results.len(), 6);
    assert_eq!(output, "3\n4\n5\n");
}

#[test]
fn sources_are_concatenated() {
    let (result, output) = run_captured(&["(function f (x) (add x 1))", "(f 1)"]);
    assert!(result.is_ok());
    assert_eq!(output, "2\n");

    let (result, output) = run_captured(&["(add 1", " 2)"]);
    assert!(result.is_ok());
    assert_eq!(output, "3\n");
}

#[test]
fn empty_program_is_error() {
    assert_failure("");
    assert_failure("   \n\t ");
}

/// An `if` that only evaluates the branch it selects.
fn lazy_if(context: &mut Context, env: &mut Environment<'_>, args: &[Expr]) -> EvalResult<Expr> {
    let mut pairs = args.chunks_exact(2);
    for pair in pairs.by_ref() {
        if context.eval(&pair[0], env)?.as_number() != Some(0) {
            return context.eval(&pair[1], env);
        }
    }
    pairs.remainder()
         .first()
         .map_or(Ok(Expr::Void), |other| context.eval(other, env))
}

#[test]
fn lazy_builtins_receive_unevaluated_arguments() {
    let tokens = tokenize("(function fact (n) (lazy_if (less_or_equal n 1) 1 (mul n (fact (sub n 1))))) \
                           (fact 5) \
                           (lazy_if 1 7 (div 1 0))")
        .unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut env = Environment::with_builtins();
    env.define("lazy_if", Expr::BuiltIn(BuiltIn::lazy("lazy_if", Arity::AtLeast(0), lazy_if)));

    let mut context = Context::with_output(Box::new(std::io::sink()));
    let results = context.run(&program, &mut env).unwrap();

    assert_eq!(results[1], Expr::Number(120));
    assert_eq!(results[2], Expr::Number(7));
}

#[test]
fn builtins_are_registered_in_the_root_scope() {
    let env = Environment::with_builtins();
    assert!(env.is_root());
    assert!(env.lookup("print").is_ok_and(Expr::is_callable));
    assert_eq!(env.lookup("add").cloned(), Ok(Expr::BuiltIn(find_builtin("add").unwrap())));
    assert!(find_builtin("lambda").is_none());
    assert!(get_result("(equal 1 1)").is_ok());
}
