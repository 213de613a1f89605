use chrono::{DateTime, Local};
use colored::*;
use std::io::{self, Write};

/// asctime(3)-style rendering: `"Thu Aug 29 12:34:56 2026\n"`.
///
/// `%e` space-pads single-digit days, matching the C formatting exactly.
/// The trailing newline is part of the contract.
pub fn asctime(moment: &DateTime<Local>) -> String {
    format!("{}\n", moment.format("%a %b %e %H:%M:%S %Y"))
}

/// Report the current local date and time.
///
/// The formatted string already ends with a newline, so none is appended
/// here.
pub fn report(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=== Current Time Information ===".bold())?;
    write!(out, "Local date and time: {}", asctime(&Local::now()))
}
