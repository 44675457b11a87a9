#![allow(dead_code)]

use std::{
    cell::RefCell,
    error::Error,
    io::{self, Write},
    rc::Rc,
};

use funk::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::evaluator::core::Context,
    run_sources,
};

/// An output sink that can be read back after the context is done with it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output is not UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `sources` with top-level echo on and returns the results together
/// with everything written to the output.
pub fn run_captured(sources: &[&str]) -> (Result<Vec<Expr>, Box<dyn Error>>, String) {
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(Box::new(buffer.clone()));
    let result = run_sources(sources, &mut context, true);
    (result, buffer.contents())
}

/// The value of the last top-level expression.
pub fn eval_last(src: &str) -> Expr {
    match get_result(src) {
        Ok(results) => results.last().cloned().expect("program produced no results"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

pub fn assert_value(src: &str, expected: impl Into<Expr>) {
    assert_eq!(eval_last(src), expected.into(), "unexpected result for {src}");
}

pub fn assert_failure(src: &str) -> Box<dyn Error> {
    match get_result(src) {
        Ok(results) => panic!("Script succeeded but was expected to fail: {src} => {results:?}"),
        Err(e) => e,
    }
}

pub fn runtime_error(src: &str) -> RuntimeError {
    let e = assert_failure(src);
    e.downcast_ref::<RuntimeError>()
     .cloned()
     .unwrap_or_else(|| panic!("expected a runtime error for {src}, got: {e}"))
}

pub fn parse_error(src: &str) -> ParseError {
    let e = assert_failure(src);
    e.downcast_ref::<ParseError>()
     .cloned()
     .unwrap_or_else(|| panic!("expected a parse error for {src}, got: {e}"))
}
