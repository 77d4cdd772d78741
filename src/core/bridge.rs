// =============================================================================
// Fichier : bridge.rs
// Rôle    : Pont entre la façade `log` et le Logger terminal
//
// Une fois installé, `log::info!`, `log::warn!`, … sont rendus par termlog
// avec les mêmes règles de filtrage. `Trace` est traité comme `Debug`.
// =============================================================================

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::logger::Logger;
use super::severity::Severity;

/// Sévérité termlog correspondant à un niveau `log`.
pub const fn severity_of(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warn,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Debug,
    }
}

/// Filtre `log` le plus large compatible avec le seuil `threshold`.
pub const fn level_filter(threshold: Severity) -> LevelFilter {
    match threshold {
        Severity::Debug => LevelFilter::Trace,
        Severity::Info => LevelFilter::Info,
        Severity::Warn => LevelFilter::Warn,
        Severity::Error => LevelFilter::Error,
        Severity::Fatal | Severity::Panic => LevelFilter::Off,
    }
}

/// Implémentation de [`log::Log`] sérialisant les écritures par un mutex.
pub struct LogBridge {
    logger: Mutex<Logger>,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Filtre à passer à `log::set_max_level`.
    pub fn max_level(&self) -> LevelFilter {
        level_filter(self.lock().min_severity)
    }

    /// Récupère le Logger encapsulé.
    pub fn into_inner(self) -> Logger {
        self.logger.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Logger> {
        self.logger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.lock().is_enabled(severity_of(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        self.lock().log(severity_of(record.level()), *record.args());
    }

    fn flush(&self) {
        let _ = self.lock().output.flush();
    }
}

/// Installe `logger` comme backend global de la façade `log`.
///
/// Échoue si un autre backend est déjà installé.
pub fn install(logger: Logger) -> Result<(), SetLoggerError> {
    let bridge = LogBridge::new(logger);
    let max_level = bridge.max_level();
    log::set_boxed_logger(Box::new(bridge))?;
    log::set_max_level(max_level);
    log::debug!("Pont log → termlog installé (filtre {max_level})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logger::ColorPolicy;
    use crate::core::sink::SharedBuffer;

    fn bridge(threshold: Severity) -> (LogBridge, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let mut logger = Logger::with_detector("bridge", || false);
        logger.min_severity = threshold;
        logger.color_policy = ColorPolicy::ForceOff;
        logger.output = Box::new(buffer.clone());
        (LogBridge::new(logger), buffer)
    }

    #[test]
    fn records_render_through_logger() {
        let (bridge, buffer) = bridge(Severity::Debug);
        bridge.log(
            &Record::builder()
                .args(format_args!("connexion {} ouverte", 7))
                .level(Level::Warn)
                .target("app")
                .build(),
        );
        assert!(buffer.contents().ends_with(" bridge WARN  connexion 7 ouverte\n"));
    }

    #[test]
    fn trace_maps_to_debug() {
        let (bridge, buffer) = bridge(Severity::Debug);
        bridge.log(
            &Record::builder()
                .args(format_args!("détail"))
                .level(Level::Trace)
                .build(),
        );
        assert!(buffer.contents().contains("bridge DEBUG détail"));
    }

    #[test]
    fn threshold_applies_to_records() {
        let (bridge, buffer) = bridge(Severity::Warn);
        assert!(!bridge.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(bridge.enabled(&Metadata::builder().level(Level::Error).build()));
        bridge.log(
            &Record::builder()
                .args(format_args!("ignoré"))
                .level(Level::Info)
                .build(),
        );
        assert!(buffer.is_empty());
        assert_eq!(bridge.max_level(), LevelFilter::Warn);
    }

    #[test]
    fn level_filter_agrees_with_gates() {
        for threshold in Severity::all() {
            let filter = level_filter(*threshold);
            for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
                assert_eq!(
                    level <= filter,
                    severity_of(level).passes(*threshold),
                    "{level} au seuil {threshold:?}"
                );
            }
        }
    }

    #[test]
    fn into_inner_returns_configured_logger() {
        let (bridge, _) = bridge(Severity::Info);
        assert_eq!(
            bridge.into_inner().to_string(),
            r#"Logger{level: 4, namespace: "bridge"}"#
        );
    }
}
