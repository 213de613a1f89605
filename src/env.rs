use colored::*;
use std::ffi::OsString;
use std::io::{self, Write};

/// Print one `KEY=VALUE` line per entry, in the order the snapshot yields
/// them: not sorted, not deduplicated.
pub fn dump<I>(vars: I, out: &mut impl Write) -> io::Result<()>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    for (key, value) in vars {
        writeln!(out, "{}={}", key.to_string_lossy(), value.to_string_lossy())?;
    }
    Ok(())
}

/// Report every environment variable of the current process.
pub fn report(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=== Environment Variables ===".bold())?;

    #[cfg(windows)]
    {
        match native::snapshot() {
            Ok(vars) => dump(vars, out),
            Err(err) => writeln!(out, "Error obtaining environment block: {}", err),
        }
    }

    #[cfg(not(windows))]
    {
        // The process-owned environ list; nothing to acquire or release.
        dump(std::env::vars_os(), out)
    }
}

#[cfg(windows)]
mod native {
    use std::ffi::OsString;
    use std::io;
    use std::os::windows::ffi::OsStringExt;
    use winapi::um::processenv::{FreeEnvironmentStringsW, GetEnvironmentStringsW};

    /// Owns the environment block; released in `Drop` so every exit path
    /// frees it exactly once.
    struct EnvBlock(*mut u16);

    impl Drop for EnvBlock {
        fn drop(&mut self) {
            unsafe {
                FreeEnvironmentStringsW(self.0);
            }
        }
    }

    /// Walk the NUL-separated wide-string table up to the terminating empty
    /// string, splitting each entry at the first `=` past position 0 (drive
    /// pseudo-variables like `=C:=C:\` keep their leading `=` in the key).
    pub fn snapshot() -> io::Result<Vec<(OsString, OsString)>> {
        let raw = unsafe { GetEnvironmentStringsW() };
        if raw.is_null() {
            return Err(io::Error::last_os_error());
        }
        let block = EnvBlock(raw);

        let mut vars = Vec::new();
        let mut cursor = block.0;
        unsafe {
            while *cursor != 0 {
                let start = cursor;
                let mut len = 0;
                while *cursor != 0 {
                    cursor = cursor.add(1);
                    len += 1;
                }
                let entry = std::slice::from_raw_parts(start, len);

                let split = entry
                    .iter()
                    .skip(1)
                    .position(|&unit| unit == u16::from(b'='))
                    .map(|pos| pos + 1)
                    .unwrap_or(len);
                vars.push((
                    OsString::from_wide(&entry[..split]),
                    OsString::from_wide(entry.get(split + 1..).unwrap_or(&[])),
                ));

                cursor = cursor.add(1); // past the entry terminator
            }
        }

        Ok(vars)
    }
}
