use std::fmt;

/// Coarse host classification used to pick which system APIs each reporter
/// calls. Resolved once at startup and handed to every reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    Unix,
    Unknown,
}

impl PlatformFamily {
    /// Resolve the family of the compiled target.
    pub fn current() -> Self {
        #[cfg(windows)]
        {
            PlatformFamily::Windows
        }

        #[cfg(unix)]
        {
            PlatformFamily::Unix
        }

        #[cfg(not(any(windows, unix)))]
        {
            PlatformFamily::Unknown
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformFamily::Windows => "Windows",
            PlatformFamily::Unix => "Unix",
            PlatformFamily::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Processor architecture label reported on the Windows path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchLabel {
    X64,
    X86,
    Arm,
    Arm64,
    Unknown,
}

impl fmt::Display for ArchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArchLabel::X64 => "x64",
            ArchLabel::X86 => "x86",
            ArchLabel::Arm => "ARM",
            ArchLabel::Arm64 => "ARM64",
            ArchLabel::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Map a `SYSTEM_INFO.wProcessorArchitecture` code to its label.
///
/// The codes are stable Windows SDK constants; spelling them out here keeps
/// the mapping callable (and testable) on every host.
pub fn arch_label(code: u16) -> ArchLabel {
    match code {
        9 => ArchLabel::X64,    // PROCESSOR_ARCHITECTURE_AMD64
        0 => ArchLabel::X86,    // PROCESSOR_ARCHITECTURE_INTEL
        5 => ArchLabel::Arm,    // PROCESSOR_ARCHITECTURE_ARM
        12 => ArchLabel::Arm64, // PROCESSOR_ARCHITECTURE_ARM64
        _ => ArchLabel::Unknown,
    }
}
