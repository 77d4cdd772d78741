// =============================================================================
// termlog — Logger terminal à niveaux
// =============================================================================
//
// Architecture :
//   core/      — Sévérités, détection du terminal, Logger, pont `log`,
//                configuration JSON, tampon mémoire
//   macros.rs  — Macros `debug!` … `fatal!`, `conditional!`
//
// Une ligne émise : `<horodatage> <étiquette> <message>\n`
//
// Auteur : M@nu
// Licence : MIT
// =============================================================================

mod macros;

pub mod core;

pub use crate::core::bridge::{install, LogBridge};
pub use crate::core::capability::{detect_capability, TermEnv};
pub use crate::core::logger::{
    ColorPolicy, Logger, ParseColorPolicyError, DEFAULT_FATAL_EXIT_CODE, DEFAULT_PANIC_EXIT_CODE,
    DEFAULT_TIME_FORMAT,
};
pub use crate::core::settings::{LoggerSettings, SettingsManager};
pub use crate::core::severity::{ParseSeverityError, Severity};
pub use crate::core::sink::SharedBuffer;

/// Logger par défaut (stderr, sans espace de noms).
pub fn new() -> Logger {
    Logger::new()
}
