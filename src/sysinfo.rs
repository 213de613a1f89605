use colored::*;
use std::io::{self, Write};

use crate::platform::PlatformFamily;

#[cfg(unix)]
use std::ffi::CStr;

#[cfg(windows)]
use winapi::um::sysinfoapi::{GetSystemInfo, SYSTEM_INFO};

/// Report the operating-system family and processor architecture.
///
/// Platform-query failures are printed as diagnostic lines and never
/// propagate; only sink write errors do.
pub fn report(family: PlatformFamily, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=== Operating System Information ===".bold())?;

    match family {
        PlatformFamily::Unknown => writeln!(out, "Operating system: Unknown"),
        _ => native_identity(out),
    }
}

#[cfg(windows)]
fn native_identity(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Operating system: Windows")?;

    let info = unsafe {
        let mut info: SYSTEM_INFO = std::mem::zeroed();
        GetSystemInfo(&mut info);
        info
    };

    let arch = crate::platform::arch_label(unsafe { info.u.s() }.wProcessorArchitecture);
    writeln!(out, "Architecture: {}", arch)
}

#[cfg(unix)]
fn native_identity(out: &mut impl Write) -> io::Result<()> {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };

    if unsafe { libc::uname(&mut uts) } != 0 {
        let err = io::Error::last_os_error();
        return writeln!(out, "Error querying system identity: {}", err);
    }

    writeln!(out, "Operating system: {}", cstr_field(&uts.sysname))?;
    writeln!(out, "Node name: {}", cstr_field(&uts.nodename))?;
    writeln!(out, "System version: {}", cstr_field(&uts.version))?;
    writeln!(out, "Architecture: {}", cstr_field(&uts.machine))
}

#[cfg(not(any(windows, unix)))]
fn native_identity(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Operating system: Unknown")
}

/// The utsname fields are NUL-terminated byte arrays of fixed width.
#[cfg(unix)]
fn cstr_field(field: &[libc::c_char]) -> String {
    unsafe { CStr::from_ptr(field.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}
