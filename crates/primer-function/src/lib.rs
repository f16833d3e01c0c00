//! Free functions showing distinct call conventions.

use derive_new::new;
use primer_support::Result;
use std::io::Write;
use tracing::{debug, info_span};

/// A function with no parameters and nothing to return.
pub fn greet() -> &'static str {
    "hello world"
}

/// Two parameters, one result.
pub fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

/// Two parameters, two results.
pub fn swap(x: i64, y: i64) -> (i64, i64) {
    (y, x)
}

/// The two results of [`swap_named`], named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, new)]
pub struct Swapped {
    pub a: i64,
    pub b: i64,
}

impl From<Swapped> for (i64, i64) {
    fn from(s: Swapped) -> (i64, i64) {
        (s.a, s.b)
    }
}

/// Like [`swap`], but the results are declared up front and filled in by name.
pub fn swap_named(x: i64, y: i64) -> Swapped {
    let mut result = Swapped::new(0, 0);
    result.a = y;
    result.b = x;
    result
}

/// A required first argument and any number of trailing arguments.
pub fn variable_cut(mut x: i64, rest: &[i64]) -> i64 {
    for v in rest {
        x = x.wrapping_add(*v);
    }
    x
}

/// `x` is a copy; the caller never sees the change.
pub fn modify_value(mut x: i64) {
    x = x.wrapping_mul(10);
    debug!(x, "modified local copy");
}

/// `x` borrows the caller's variable; the caller sees the change.
pub fn modify_pointer(x: &mut i64) {
    *x = x.wrapping_mul(10);
}

/// Call each function once and write its result to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let _span = info_span!("function_demo").entered();

    writeln!(out, "{}", greet())?;

    let sum = add(1, 2);
    debug!(sum, "add");
    writeln!(out, "add() return: {sum}")?;

    let (mut x, y) = swap(1, 2);
    debug!(x, y, "swap");
    writeln!(out, "swap() x: {x}, y: {y}")?;

    let Swapped { a, b } = swap_named(1, 2);
    debug!(a, b, "swap_named");
    writeln!(out, "swap_named() a: {a}, b: {b}")?;

    let cut = variable_cut(1, &[2, 3, 4, 5]);
    debug!(cut, "variable_cut");
    writeln!(out, "variable_cut() return: {cut}")?;

    x = 1;
    modify_value(x);
    debug!(x, "after modify_value");
    writeln!(out, "modify_value() return: {x}")?;

    x = 1;
    modify_pointer(&mut x);
    debug!(x, "after modify_pointer");
    writeln!(out, "modify_pointer() return: {x}")?;

    Ok(())
}
