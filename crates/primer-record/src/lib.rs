//! A record mixing exported fields with an internal one.

use derive_new::new;
use elegance::{Printer, Render};
use primer_support::{print_field, print_last_field, print_record, write_line, Print, Result};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, info_span};

#[derive(Clone, Debug, PartialEq, new)]
pub struct Demo {
    // Internal to this module.
    a: bool,
    pub b: u8,
    pub c: i64,
    pub d: f32,
    pub e: String,
    pub f: Vec<i64>,
    pub g: BTreeMap<String, i64>,
}

impl Demo {
    pub fn a(&self) -> bool {
        self.a
    }

    pub fn set_a(&mut self, a: bool) {
        self.a = a;
    }

    /// The byte code as a character.
    pub fn code_char(&self) -> char {
        char::from(self.b)
    }
}

impl Print for Demo {
    fn print<R: Render>(&self, p: &mut Printer<R>) -> std::result::Result<(), R::Error> {
        print_record(p, "Demo", |p| {
            print_field(p, "a", &self.a)?;
            print_field(p, "b", &self.b)?;
            print_field(p, "c", &self.c)?;
            print_field(p, "d", &self.d)?;
            print_field(p, "e", &self.e)?;
            print_field(p, "f", &self.f)?;
            print_last_field(p, "g", &self.g)
        })
    }
}

/// The record the demo starts from.
pub fn sample() -> Demo {
    Demo::new(
        true,
        b'b',
        1,
        1.0,
        String::from("E"),
        vec![1],
        BTreeMap::from([(String::from("GOLANG"), 1)]),
    )
}

/// Print the sample record, clear its flag, and print it again.
pub fn run<W: Write>(out: &mut W, columns: usize) -> Result<()> {
    let _span = info_span!("record_demo").entered();

    let mut demo = sample();
    debug!(?demo, "constructed");
    write_line(out, &demo, columns)?;

    demo.a = false;
    debug!(a = demo.a, "cleared flag");
    write_line(out, &demo, columns)?;

    writeln!(out, "demo.b: {}", demo.code_char())?;
    Ok(())
}
