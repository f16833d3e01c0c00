use elegance::{Io, Printer, Render};
use std::collections::BTreeMap;
use std::io::Write;

use crate::{Error, Result};

/// The default line width of rendered output.
pub const COLUMNS: usize = 80;

/// The widest line the printer accepts.
pub const MAX_COLUMNS: usize = 65536;

const INDENT: isize = 2;

/// A value that can be laid out by the pretty printer.
pub trait Print {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error>;
}

impl<T: Print + ?Sized> Print for &T {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        (**self).print(p)
    }
}

macro_rules! print_display {
    ($($ty:ty),*) => {
        $(
            impl Print for $ty {
                fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
                    p.text_owned(self.to_string())
                }
            }
        )*
    };
}

print_display!(bool, u8, i32, i64, f32, f64);

impl Print for str {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        p.text_owned(format!("{self:?}"))
    }
}

impl Print for String {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        self.as_str().print(p)
    }
}

impl<T: Print> Print for [T] {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        p.cgroup(INDENT, |p| {
            p.text("[")?;
            for (i, x) in self.iter().enumerate() {
                if i > 0 {
                    p.text(",")?;
                    p.space()?;
                }
                x.print(p)?;
            }
            p.text("]")
        })
    }
}

impl<T: Print> Print for Vec<T> {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        self.as_slice().print(p)
    }
}

/// Maps print in key order, `{k: v, ...}`.
impl<K: Print, V: Print> Print for BTreeMap<K, V> {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        p.cgroup(INDENT, |p| {
            p.text("{")?;
            for (i, (k, v)) in self.iter().enumerate() {
                if i > 0 {
                    p.text(",")?;
                    p.space()?;
                }
                k.print(p)?;
                p.text(": ")?;
                v.print(p)?;
            }
            p.text("}")
        })
    }
}

/// Print a named record, `Name { field: value, ... }`. The body prints the
/// fields with [`print_field`] and [`print_last_field`].
pub fn print_record<R, F>(
    p: &mut Printer<R>,
    name: &'static str,
    body: F,
) -> std::result::Result<(), R::Error>
where
    R: Render,
    F: FnOnce(&mut Printer<R>) -> std::result::Result<(), R::Error>,
{
    // The closing brace breaks back to the record's own column.
    p.cgroup(0, |p| {
        p.cgroup(INDENT, |p| {
            p.text(name)?;
            p.text(" {")?;
            p.space()?;
            body(p)
        })?;
        p.space()?;
        p.text("}")
    })
}

pub fn print_field<R, T>(
    p: &mut Printer<R>,
    name: &'static str,
    value: &T,
) -> std::result::Result<(), R::Error>
where
    R: Render,
    T: Print + ?Sized,
{
    print_last_field(p, name, value)?;
    p.text(",")?;
    p.space()
}

pub fn print_last_field<R, T>(
    p: &mut Printer<R>,
    name: &'static str,
    value: &T,
) -> std::result::Result<(), R::Error>
where
    R: Render,
    T: Print + ?Sized,
{
    p.text(name)?;
    p.text(": ")?;
    value.print(p)
}

/// Widths outside `1..=MAX_COLUMNS` are rejected before a printer is built.
pub fn check_columns(columns: usize) -> Result<usize> {
    if (1..=MAX_COLUMNS).contains(&columns) {
        Ok(columns)
    } else {
        Err(Error::Columns(columns))
    }
}

/// Lay out `x` at the given width and return the text.
pub fn render_to_string<T: Print + ?Sized>(x: &T, columns: usize) -> Result<String> {
    let columns = check_columns(columns)?;
    let mut bytes = Vec::new();
    let mut p = Printer::new(Io(&mut bytes), columns);
    x.print(&mut p)?;
    p.finish()?;
    Ok(String::from_utf8(bytes)?)
}

/// Lay out `x` at the given width and write it to `out`, followed by a newline.
pub fn write_line<W, T>(out: &mut W, x: &T, columns: usize) -> Result<()>
where
    W: Write,
    T: Print + ?Sized,
{
    let columns = check_columns(columns)?;
    let mut p = Printer::new(Io(&mut *out), columns);
    x.print(&mut p)?;
    p.hard_break()?;
    p.finish()?;
    Ok(())
}
