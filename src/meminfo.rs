use colored::*;
use std::io::{self, Write};

use crate::platform::PlatformFamily;

#[cfg(windows)]
use winapi::um::sysinfoapi::{GetSystemInfo, SYSTEM_INFO};

/// Report the virtual-memory page size.
pub fn report(family: PlatformFamily, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=== Advanced Memory Information ===".bold())?;

    if family == PlatformFamily::Unknown {
        return writeln!(out, "Memory information is not available on this operating system.");
    }

    match page_size() {
        Ok(bytes) => writeln!(out, "Memory page size: {} bytes", bytes),
        Err(err) => writeln!(out, "Error querying memory page size: {}", err),
    }
}

/// Query the page size the kernel manages virtual memory at.
#[cfg(windows)]
pub fn page_size() -> io::Result<u64> {
    // GetSystemInfo cannot fail.
    let info = unsafe {
        let mut info: SYSTEM_INFO = std::mem::zeroed();
        GetSystemInfo(&mut info);
        info
    };
    Ok(u64::from(info.dwPageSize))
}

#[cfg(unix)]
pub fn page_size() -> io::Result<u64> {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(size as u64)
}

#[cfg(not(any(windows, unix)))]
pub fn page_size() -> io::Result<u64> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "page size is not queryable on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_sane() {
        let size = page_size().expect("page size query failed");
        assert!(size >= 512, "page size {} implausibly small", size);
        assert!(size.is_power_of_two(), "page size {} not a power of two", size);
    }

    #[test]
    fn test_report_native() {
        let mut buf = Vec::new();
        report(PlatformFamily::current(), &mut buf).expect("report failed");
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("=== Advanced Memory Information ==="));
        assert!(output.contains("Memory page size:"));
        assert!(output.contains("bytes"));
    }

    #[test]
    fn test_report_unknown_family() {
        let mut buf = Vec::new();
        report(PlatformFamily::Unknown, &mut buf).expect("report failed");
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Memory information is not available"));
    }
}
