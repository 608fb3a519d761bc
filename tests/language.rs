use std::fs;

use quill::{parse, run_source, run_with_output};
use walkdir::WalkDir;

fn run_ok(src: &str, argument: i64) -> i64 {
    run_source(src, argument).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn run_fault(src: &str, argument: i64) {
    if run_source(src, argument).is_ok() {
        panic!("Program succeeded but was expected to fault")
    }
}

fn run_captured(src: &str, argument: i64) -> (i64, String) {
    let program = parse(src).unwrap_or_else(|e| panic!("Parse failed: {e}"));
    let mut out = Vec::new();
    let result = run_with_output(&program, argument, &mut out).unwrap_or_else(|e| {
                                                                  panic!("Program failed: {e}")
                                                              });
    (result, String::from_utf8(out).expect("printed output is UTF-8"))
}

/// Wraps a condition in a program that returns 1 when it holds and 0
/// otherwise.
fn check_cond(cond: &str, argument: i64) -> i64 {
    run_ok(&format!("main(n) {{ if ({cond}) {{ return 1; }} return 0; }}"),
           argument)
}

#[test]
fn basic_arithmetic() {
    assert_eq!(run_ok("main(n) { return 5 + 3; }", 0), 8);
    assert_eq!(run_ok("main(n) { return 5 - 3; }", 0), 2);
    assert_eq!(run_ok("main(n) { return 5 * 3; }", 0), 15);
    assert_eq!(run_ok("main(n) { return -5; }", 0), -5);
    assert_eq!(run_ok("main(n) { return 2 + 3 * 4; }", 0), 14);
    assert_eq!(run_ok("main(n) { return (2 + 3) * 4; }", 0), 20);
}

#[test]
fn arithmetic_wraps_at_the_integer_boundary() {
    assert_eq!(run_ok("main(n) { return n + 1; }", i64::MAX), i64::MIN);
    assert_eq!(run_ok("main(n) { return n - 1; }", i64::MIN), i64::MAX);
    assert_eq!(run_ok("main(n) { return -n; }", i64::MIN), i64::MIN);
}

#[test]
fn comparisons() {
    assert_eq!(check_cond("3 <= 3", 0), 1);
    assert_eq!(check_cond("3 < 3", 0), 0);
    assert_eq!(check_cond("3 >= 4", 0), 0);
    assert_eq!(check_cond("4 > 3", 0), 1);
    assert_eq!(check_cond("3 == 3", 0), 1);
    assert_eq!(check_cond("3 != 3", 0), 0);
}

#[test]
fn logical_operators() {
    assert_eq!(check_cond("!(3 == 3)", 0), 0);
    assert_eq!(check_cond("(3 < 4) && (5 > 4)", 0), 1);
    assert_eq!(check_cond("(3 > 4) || (5 > 4)", 0), 1);
    assert_eq!(check_cond("(3 > 4) && (5 > 4)", 0), 0);
    assert_eq!(check_cond("(3 > 4) || (5 < 4)", 0), 0);
    assert_eq!(check_cond("(1 + 2) < 3 * 2", 0), 1);
}

#[test]
fn logical_operators_short_circuit() {
    // 'boom' is never defined; the condition must not evaluate it.
    assert_eq!(check_cond("(1 == 1) || (boom() == 0)", 0), 1);
    assert_eq!(check_cond("(1 == 2) && (boom() == 0)", 0), 0);
    // Without short-circuiting the same conditions fault.
    run_fault("main(n) { if ((1 == 2) || (boom() == 0)) { return 1; } return 0; }",
              0);
}

#[test]
fn variable_lifecycle() {
    assert_eq!(run_ok("main(n) { let x = 7; return x; }", 0), 7);
    assert_eq!(run_ok("main(n) { let x = 7; x = 9; return x; }", 0), 9);
    // Re-declaring in the same frame overwrites.
    assert_eq!(run_ok("main(n) { let x = 1; let x = 2; return x; }", 0), 2);
}

#[test]
fn assignment_requires_prior_declaration() {
    run_fault("main(n) { x = 1; return x; }", 0);
}

#[test]
fn reading_an_undefined_variable_faults() {
    run_fault("main(n) { return x; }", 0);
}

#[test]
fn blocks_share_the_enclosing_frame() {
    // 'y' declared inside the block is still visible after it.
    assert_eq!(run_ok("main(n) { let x = 1; { let y = 2; x = x + y; } return x + y; }",
                      0),
               5);
}

#[test]
fn if_and_else_branches() {
    let src = "main(n) { if (n == 0) { return 1; } else { return 2; } }";
    assert_eq!(run_ok(src, 0), 1);
    assert_eq!(run_ok(src, 3), 2);
}

#[test]
fn while_loop_counts_iterations() {
    let src = "main(n) {
        let c = n;
        let steps = 0;
        while (c > 0) {
            c = c - 1;
            steps = steps + 1;
        }
        return steps;
    }";
    assert_eq!(run_ok(src, 0), 0);
    assert_eq!(run_ok(src, 5), 5);
}

#[test]
fn return_unwinds_nested_constructs() {
    let src = "main(n) {
        let i = 0;
        while (i < 10) {
            if (i == n) {
                { return i * 100; }
            }
            i = i + 1;
        }
        return -1;
    }";
    assert_eq!(run_ok(src, 3), 300);
    assert_eq!(run_ok(src, 42), -1);
}

#[test]
fn zero_argument_call() {
    assert_eq!(run_ok("main(n) { return f(); } f() { return 41; }", 0), 41);
}

#[test]
fn recursion_isolates_frames() {
    let src = "main(n) { return fact(n); }
               fact(k) { if (k <= 1) { return 1; } return k * fact(k - 1); }";
    assert_eq!(run_ok(src, 0), 1);
    assert_eq!(run_ok(src, 5), 120);
}

#[test]
fn frames_do_not_chain_to_the_caller() {
    // 'secret' lives in main's frame and must be invisible inside peek.
    run_fault("main(n) { let secret = 42; return peek(); } peek() { return secret; }",
              0);
}

#[test]
fn function_body_may_fall_through_without_return() {
    // The body's last executed statement provides the call's value.
    assert_eq!(run_ok("main(n) { let x = f(); return x; } f() { let y = 5; y = y + 1; }",
                      0),
               6);
}

#[test]
fn arguments_evaluate_once_left_to_right() {
    let src = "main(n) { return add(probe(1), probe(2)); }
               probe(v) { print v; return v; }
               add(a, b) { return a + b; }";
    let (result, output) = run_captured(src, 0);
    assert_eq!(result, 3);
    assert_eq!(output, "1\n2\n");
}

#[test]
fn call_statement_allows_a_valueless_callee() {
    // 'note' ends on an untaken branch and produces no value; as a
    // statement the call discards it, so nothing faults.
    let src = "main(n) { note(); return 1; }
               note() { print 7; if (1 == 2) { print 8; } }";
    let (result, output) = run_captured(src, 0);
    assert_eq!(result, 1);
    assert_eq!(output, "7\n");
}

#[test]
fn call_expression_requires_a_value() {
    // The same valueless body faults when the call's value is consumed.
    run_fault("main(n) { return note() + 1; }
               note() { if (1 == 2) { print 8; } }",
              0);
    // The entry function's value is consumed by the host as well.
    run_fault("main(n) { if (1 == 2) { return 1; } }", 0);
}

#[test]
fn call_statement_discards_its_value() {
    let src = "main(n) { probe(7); return 1; } probe(v) { print v; return v; }";
    let (result, output) = run_captured(src, 0);
    assert_eq!(result, 1);
    assert_eq!(output, "7\n");
}

#[test]
fn print_emits_one_line_per_statement() {
    let (result, output) = run_captured("main(n) { print 42; print -1; return 0; }", 0);
    assert_eq!(result, 0);
    assert_eq!(output, "42\n-1\n");
}

#[test]
fn loop_with_print_end_to_end() {
    let src = "main(n) {
        let x = 0;
        while (x < n) {
            print x;
            x = x + 1;
        }
        return x;
    }";
    let (result, output) = run_captured(src, 3);
    assert_eq!(result, 3);
    assert_eq!(output, "0\n1\n2\n");
}

#[test]
fn conditional_entry_end_to_end() {
    let src = "main(n) { if (n <= 1) { return 1; } return n; }";
    assert_eq!(run_ok(src, 0), 1);
    assert_eq!(run_ok(src, 5), 5);
}

#[test]
fn runs_are_deterministic() {
    let src = "main(n) {
        let x = 0;
        while (x < n) {
            print x * x;
            x = x + 1;
        }
        return x;
    }";
    let first = run_captured(src, 4);
    let second = run_captured(src, 4);
    assert_eq!(first, second);
}

#[test]
fn unknown_function_faults() {
    run_fault("main(n) { return missing(1); }", 0);
}

#[test]
fn wrong_function_arity_faults() {
    run_fault("main(n) { return f(3); } f(x, y) { return x + y; }", 0);
    run_fault("main(n) { return f(1, 2, 3); } f(x, y) { return x + y; }", 0);
}

#[test]
fn duplicate_function_definition_faults() {
    run_fault("main(n) { return 1; } main(n) { return 2; }", 0);
}

#[test]
fn missing_entry_function_faults() {
    run_fault("helper(n) { return 1; }", 0);
}

#[test]
fn empty_source_is_a_parse_error() {
    assert!(parse("").is_err());
}

#[test]
fn comments_are_skipped() {
    let src = "// Entry point.
    main(n) {
        /* the
           answer */
        return 42; // and nothing else
    }";
    assert_eq!(run_ok(src, 0), 42);
}

#[test]
fn block_comment_may_end_with_extra_stars() {
    assert_eq!(run_ok("main(n) { /* the answer **/ return 42; }", 0), 42);
    assert_eq!(run_ok("main(n) { /**/ return 42; }", 0), 42);
    assert_eq!(run_ok("main(n) { /* stars ** inside */ return 42; }", 0), 42);
}

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "quill")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let argument = header_value(&content, "arg")
            .unwrap_or_else(|| panic!("{path:?} is missing an '// arg:' header"));
        let expected = header_value(&content, "expect")
            .unwrap_or_else(|| panic!("{path:?} is missing an '// expect:' header"));

        count += 1;
        assert_eq!(run_ok(&content, argument), expected, "program {path:?}");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn header_value(content: &str, key: &str) -> Option<i64> {
    let prefix = format!("// {key}:");
    content.lines()
           .find_map(|line| line.trim().strip_prefix(&prefix))
           .and_then(|rest| rest.trim().parse().ok())
}
