use colored::*;
use libc::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_void};
use std::io::{self, Write};
use std::mem::size_of;

/// Printed after the pointer group; the variation it describes is the whole
/// reason the pointer sizes are reported per build.
pub const POINTER_NOTE: &str =
    "Note: pointer sizes depend on the compiled architecture (32-bit or 64-bit).";

/// C-ABI scalar types, as the compiling toolchain lays them out.
///
/// Rust has no extended-precision float, so the `long double` entry reports
/// the `f64` it maps to here.
pub fn basic_sizes() -> [(&'static str, usize); 4] {
    [
        ("char", size_of::<c_char>()),
        ("int", size_of::<c_int>()),
        ("float", size_of::<c_float>()),
        ("double", size_of::<c_double>()),
    ]
}

pub fn larger_sizes() -> [(&'static str, usize); 3] {
    [
        ("long", size_of::<c_long>()),
        ("long long", size_of::<c_longlong>()),
        ("long double (f64)", size_of::<f64>()),
    ]
}

pub fn pointer_sizes() -> [(&'static str, usize); 3] {
    [
        ("pointer to char", size_of::<*const c_char>()),
        ("pointer to int", size_of::<*const c_int>()),
        ("pointer to void", size_of::<*const c_void>()),
    ]
}

/// The full table, in report order.
pub fn sizes() -> Vec<(&'static str, usize)> {
    basic_sizes()
        .into_iter()
        .chain(larger_sizes())
        .chain(pointer_sizes())
        .collect()
}

/// Report the byte size of every listed type. Compile-time constants only;
/// no platform call is made.
pub fn report(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=== Memory Usage of Basic Data Types ===".bold())?;
    write_group(&basic_sizes(), out)?;

    writeln!(out)?;
    writeln!(out, "{}", "=== Memory Usage of Larger Data Types ===".bold())?;
    write_group(&larger_sizes(), out)?;

    writeln!(out)?;
    writeln!(out, "{}", "=== Memory Usage of Pointers ===".bold())?;
    write_group(&pointer_sizes(), out)?;
    writeln!(out, "{}", POINTER_NOTE)
}

fn write_group(group: &[(&str, usize)], out: &mut impl Write) -> io::Result<()> {
    for (name, bytes) in group {
        writeln!(out, "{}: {} bytes", name, bytes)?;
    }
    Ok(())
}
