// Integration tests for the tape interpreter

use std::io;
use tapelang::{Interpreter, Memory, RegistryError, RuntimeError};

fn doubling(count: usize, memory: &mut Memory) {
    let factor = 2i64.pow(count as u32);
    memory.set_value(memory.value() * factor % 255);
}

fn interpreter(code: &'static str) -> Interpreter<io::Empty, Vec<u8>> {
    Interpreter::new(io::empty(), Vec::new(), code.as_bytes())
}

#[test]
fn test_loop_operation() {
    let mut bfm = interpreter("----[---->+<]>++.+.+.+.");

    let result = bfm.run();
    assert!(result.is_ok(), "Execution failed: {:?}", result);

    assert_eq!(bfm.output().as_slice(), b"ABCD");
}

#[test]
fn test_print_hello_world() {
    let mut bfm = interpreter(
        "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.",
    );

    bfm.run().expect("Execution failed");

    assert_eq!(
        String::from_utf8_lossy(bfm.output()),
        "Hello World!\n"
    );
}

#[test]
fn test_get_value_in_memory() {
    let mut bfm = interpreter("+");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(0), 1);
}

#[test]
fn test_get_value_out_of_range() {
    let mut bfm = interpreter("+>+");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(-1), 0);
    assert_eq!(bfm.get_value(2999), 0);
    // capacity itself is the first invalid position
    assert_eq!(bfm.get_value(3000), 0);
    assert_eq!(bfm.get_value(isize::MAX), 0);
}

#[test]
fn test_last_cell_is_addressable() {
    let code = io::Cursor::new(format!("{}+++", ">".repeat(2999)));
    let mut bfm = Interpreter::new(io::empty(), Vec::new(), code);
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.cursor(), 2999);
    assert_eq!(bfm.get_value(2999), 3);
}

#[test]
fn test_add_operator_duplicate() {
    let mut bfm = interpreter("+");

    let err = bfm
        .add_operator('+', |count, memory| {
            memory.set_value(memory.value() * 2 * count as i64 % 255);
        })
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateSymbol('+'));

    bfm.run().expect("Execution failed");
    assert_eq!(bfm.get_value(0), 1);
}

#[test]
fn test_add_operator() {
    // (1 + 1 + 1) * (2 * 2 * 2)
    let mut bfm = interpreter("+++***");

    bfm.add_operator('*', doubling).expect("registration failed");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(0), 24);
}

#[test]
fn test_two_user_operators() {
    let mut bfm = interpreter("+++***");

    bfm.add_operator('#', doubling).expect("registration failed");
    bfm.add_operator('*', doubling).expect("registration failed");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(0), 24);
}

#[test]
fn test_add_comment_letter_is_rejected() {
    let mut bfm = interpreter("x+");

    let err = bfm
        .add_operator('x', |_, memory| memory.set_value(42))
        .unwrap_err();
    assert_eq!(err, RegistryError::UnreachableSymbol('x'));
    assert!(!bfm.operators().contains('x'));

    bfm.run().expect("Execution failed");
    assert_eq!(bfm.get_value(0), 1);
}

#[test]
fn test_remove_unknown_operator() {
    let mut bfm = interpreter("+");

    assert_eq!(
        bfm.remove_operator('/').unwrap_err(),
        RegistryError::UnknownSymbol('/')
    );

    bfm.run().expect("Execution failed");
    assert_eq!(bfm.get_value(0), 1);
}

#[test]
fn test_remove_user_operator() {
    // only the three '+' run; '#' is gone and stops parsing
    let mut bfm = interpreter("+++###");

    bfm.add_operator('#', doubling).expect("registration failed");
    bfm.remove_operator('#').expect("removal failed");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(0), 3);
}

#[test]
fn test_remove_then_rerun_fresh_interpreter() {
    let mut first = interpreter("+++###");
    first.add_operator('#', doubling).expect("registration failed");
    first.run().expect("Execution failed");
    assert_eq!(first.get_value(0), 24);

    first.remove_operator('#').expect("removal failed");

    let mut second = interpreter("+++###");
    second.run().expect("Execution failed");
    assert_eq!(second.get_value(0), 3);
}

#[test]
fn test_remove_builtin_operator() {
    let mut bfm = interpreter("++++");

    bfm.remove_operator('+').expect("removal failed");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(0), 0);
}

#[test]
fn test_registry_change_after_parse_has_no_effect() {
    let mut bfm = interpreter("+++");
    assert_eq!(bfm.program().expect("parse failed").len(), 1);

    bfm.remove_operator('+').expect("removal failed");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.get_value(0), 3);
}

#[test]
fn test_interpreters_do_not_share_operators() {
    let mut first = interpreter("+*");
    let mut second = interpreter("+*");

    first.add_operator('*', doubling).expect("registration failed");
    first.run().expect("Execution failed");
    second.run().expect("Execution failed");

    assert_eq!(first.get_value(0), 2);
    assert_eq!(second.get_value(0), 1);
    assert!(!second.operators().contains('*'));
}

#[test]
fn test_comments_are_ignored() {
    let mut bfm = interpreter("add three +++ then print it .");
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.output().as_slice(), &[3]);
}

#[test]
fn test_unmatched_bracket_is_reported() {
    let mut bfm = interpreter("+]");
    let err = bfm.run().unwrap_err();

    assert!(matches!(err, RuntimeError::Parse(_)), "got {:?}", err);
    assert_eq!(err.to_string(), "unmatched ']' at line 1, column 2");
    assert_eq!(bfm.get_value(0), 0);
}

#[test]
fn test_echo_input() {
    let mut bfm = Interpreter::new("hi".as_bytes(), Vec::new(), ",.>,.".as_bytes());
    bfm.run().expect("Execution failed");

    assert_eq!(bfm.into_output(), b"hi".to_vec());
}
