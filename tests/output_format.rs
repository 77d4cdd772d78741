// =============================================================================
// Fichier : output_format.rs
// Rôle    : Contrat de sortie vu par un consommateur de logs
// =============================================================================

use chrono::Local;
use termlog::{ColorPolicy, Logger, Severity, SharedBuffer};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn logger(namespace: &str, detected: bool) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let mut logger = Logger::with_detector(namespace, move || detected);
    logger.output = Box::new(buffer.clone());
    logger.time_format = DATE_FORMAT.to_string();
    (logger, buffer)
}

fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[test]
fn warn_line_is_byte_exact() {
    let (mut log, out) = logger("", true);
    termlog::warn!(log, "Unit Testing Output");
    assert_eq!(
        out.contents(),
        format!("{} \x1b[1;33mWARN \x1b[0m Unit Testing Output\n", today())
    );
}

#[test]
fn conditional_true_and_false() {
    let (mut log, out) = logger("", true);
    termlog::conditional!(
        log,
        true,
        Severity::Warn,
        Severity::Info,
        "This is conditional: {}",
        true
    );
    assert_eq!(
        out.take(),
        format!("{} \x1b[1;33mWARN \x1b[0m This is conditional: true\n", today())
    );

    termlog::conditional!(
        log,
        false,
        Severity::Warn,
        Severity::Info,
        "This is conditional: {}",
        false
    );
    assert_eq!(
        out.take(),
        format!("{} \x1b[1;36mINFO \x1b[0m This is conditional: false\n", today())
    );
}

#[test]
fn namespaced_plain_lines() {
    let (mut log, out) = logger("my-namespace", false);
    termlog::debug!(log, "Debugging message");
    termlog::info!(log, "Informational message");
    termlog::warn!(log, "Warning message");
    termlog::error!(log, "Error message");

    let date = today();
    let expected = [
        format!("{date} my-namespace DEBUG Debugging message"),
        format!("{date} my-namespace INFO  Informational message"),
        format!("{date} my-namespace WARN  Warning message"),
        format!("{date} my-namespace ERROR Error message"),
    ];
    let contents = out.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, expected);
}

#[test]
fn force_off_overrides_detection() {
    let (mut log, out) = logger("", true);
    log.color_policy = ColorPolicy::ForceOff;
    termlog::error!(log, "no color");
    assert!(!out.contents().contains('\x1b'));
}

#[test]
fn force_on_overrides_detection() {
    let (mut log, out) = logger("", false);
    log.color_policy = ColorPolicy::ForceOn;
    termlog::error!(log, "color");
    assert_eq!(
        out.contents(),
        format!("{} \x1b[1;31mERROR\x1b[0m color\n", today())
    );
}

#[test]
fn info_threshold_hides_debug_only() {
    let (mut log, out) = logger("", false);
    log.min_severity = Severity::Info;
    termlog::debug!(log, "Debugging message");
    termlog::info!(log, "Informational message");
    termlog::warn!(log, "Warning message");
    termlog::error!(log, "Error message");

    let contents = out.contents();
    assert!(!contents.contains("DEBUG"));
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn embedded_newlines_are_written_verbatim() {
    let (mut log, out) = logger("", false);
    termlog::info!(log, "first\nsecond");
    assert_eq!(out.contents(), format!("{} INFO  first\nsecond\n", today()));
}

#[test]
fn crate_level_constructor_matches_logger_new() {
    assert_eq!(termlog::new().to_string(), r#"Logger{level: 5, namespace: ""}"#);
    assert_eq!(
        Logger::with_namespace("myname").to_string(),
        r#"Logger{level: 5, namespace: "myname"}"#
    );
}
