use sysdiag::platform::PlatformFamily;
use sysdiag::report_all;

const SECTION_HEADERS: [&str; 5] = [
    "=== Operating System Information ===",
    "=== Advanced Memory Information ===",
    "=== Current Time Information ===",
    "=== Environment Variables ===",
    "=== Memory Usage of Basic Data Types ===",
];

fn capture(family: PlatformFamily) -> String {
    let mut buf = Vec::new();
    report_all(family, &mut buf).expect("report_all failed");
    String::from_utf8(buf).expect("report is not valid UTF-8")
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let output = capture(PlatformFamily::current());

    let mut last = 0;
    for header in SECTION_HEADERS {
        let pos = output[last..]
            .find(header)
            .unwrap_or_else(|| panic!("missing or out-of-order section: {}", header));
        last += pos;
    }
}

#[test]
fn test_unknown_family_still_prints_every_section() {
    // The identity and memory reporters degrade to "unavailable" lines, but
    // nothing may terminate the run early.
    let output = capture(PlatformFamily::Unknown);

    for header in SECTION_HEADERS {
        assert!(output.contains(header), "missing section: {}", header);
    }
    assert!(output.contains("Operating system: Unknown"));
    assert!(output.contains("Memory information is not available"));
}

#[test]
fn test_injected_variable_is_dumped_verbatim() {
    unsafe {
        std::env::set_var("SYSDIAG_REPORT_PROBE", "bar");
    }
    let output = capture(PlatformFamily::current());
    unsafe {
        std::env::remove_var("SYSDIAG_REPORT_PROBE");
    }

    assert!(output.lines().any(|line| line == "SYSDIAG_REPORT_PROBE=bar"));
}

#[test]
fn test_identity_memory_and_size_sections_are_deterministic() {
    // The clock section differs by nature and the environment section can be
    // mutated by a parallel test, so only the stable sections are compared.
    let stable_sections = |report: &str| -> (String, String) {
        let head = report
            .split("=== Current Time Information ===")
            .next()
            .expect("clock section missing")
            .to_string();
        let tail_at = report
            .find("=== Memory Usage of Basic Data Types ===")
            .expect("type-size section missing");
        (head, report[tail_at..].to_string())
    };

    let first = capture(PlatformFamily::current());
    let second = capture(PlatformFamily::current());
    assert_eq!(stable_sections(&first), stable_sections(&second));
}

#[test]
fn test_type_size_section_ends_with_pointer_note() {
    let output = capture(PlatformFamily::current());
    let last_line = output.lines().last().expect("empty report");
    assert_eq!(last_line, sysdiag::datasize::POINTER_NOTE);
}
