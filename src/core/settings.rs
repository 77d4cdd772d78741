// =============================================================================
// Fichier : settings.rs
// Rôle    : Configuration persistante du Logger (JSON)
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::logger::{
    ColorPolicy, Logger, DEFAULT_FATAL_EXIT_CODE, DEFAULT_PANIC_EXIT_CODE, DEFAULT_TIME_FORMAT,
};
use super::severity::Severity;

// =============================================================================
// Structure de configuration
// =============================================================================

/// Paramètres du Logger tels qu'enregistrés sur disque.
///
/// ```json
/// { "level": "info", "namespace": "api", "color": "auto",
///   "fatal_exit_code": 1, "panic_exit_code": 2,
///   "time_format": "%Y-%m-%d %H:%M:%S%.6f" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub level: Severity,
    pub namespace: String,
    pub color: ColorPolicy,
    pub fatal_exit_code: i32,
    pub panic_exit_code: i32,
    pub time_format: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: Severity::Debug,
            namespace: String::new(),
            color: ColorPolicy::Unset,
            fatal_exit_code: DEFAULT_FATAL_EXIT_CODE,
            panic_exit_code: DEFAULT_PANIC_EXIT_CODE,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LoggerSettings {
    /// Reporte ces paramètres sur un Logger existant (sortie inchangée).
    pub fn apply(&self, logger: &mut Logger) {
        logger.min_severity = self.level;
        logger.namespace.clone_from(&self.namespace);
        logger.color_policy = self.color;
        logger.fatal_exit_code = self.fatal_exit_code;
        logger.panic_exit_code = self.panic_exit_code;
        logger.time_format.clone_from(&self.time_format);
    }

    /// Construit un Logger configuré, écrivant sur stderr.
    pub fn build_logger(&self) -> Logger {
        let mut logger = Logger::with_namespace(self.namespace.clone());
        self.apply(&mut logger);
        logger
    }

    /// Capture la configuration courante d'un Logger.
    pub fn from_logger(logger: &Logger) -> Self {
        Self {
            level: logger.min_severity,
            namespace: logger.namespace.clone(),
            color: logger.color_policy,
            fatal_exit_code: logger.fatal_exit_code,
            panic_exit_code: logger.panic_exit_code,
            time_format: logger.time_format.clone(),
        }
    }
}

// =============================================================================
// Gestionnaire de configuration
// =============================================================================

/// Gestionnaire de configuration avec chargement/sauvegarde JSON.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: LoggerSettings,
    config_path: PathBuf,
}

impl SettingsManager {
    /// Charge depuis le chemin par défaut ; valeurs par défaut si absent.
    pub fn new() -> Self {
        Self::at_path(Self::default_config_path())
    }

    /// Charge depuis `path` ; valeurs par défaut si le fichier est absent ou
    /// invalide.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let config_path = path.into();
        let settings = match Self::load_from_path(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::debug!("Configuration par défaut utilisée : {e:#}");
                LoggerSettings::default()
            }
        };
        Self {
            settings,
            config_path,
        }
    }

    /// Charge depuis `path` ; échoue si le fichier est absent ou invalide.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = path.into();
        let settings = Self::load_from_path(&config_path)?;
        Ok(Self {
            settings,
            config_path,
        })
    }

    /// Chemin par défaut du fichier de configuration.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlog")
            .join("settings.json")
    }

    /// Charge la configuration depuis un fichier JSON.
    pub fn load_from_path(path: &Path) -> Result<LoggerSettings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?;
        let settings: LoggerSettings =
            serde_json::from_str(&content).context("Format JSON invalide")?;
        log::info!("Configuration chargée depuis {}", path.display());
        Ok(settings)
    }

    /// Sauvegarde la configuration dans le fichier JSON.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Impossible de créer {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(&self.settings).context("Erreur de sérialisation JSON")?;
        fs::write(&self.config_path, json)
            .with_context(|| format!("Impossible d'écrire {}", self.config_path.display()))?;
        log::info!(
            "Configuration sauvegardée dans {}",
            self.config_path.display()
        );
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Accès en lecture aux paramètres.
    pub const fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    /// Accès en écriture aux paramètres.
    pub fn settings_mut(&mut self) -> &mut LoggerSettings {
        &mut self.settings
    }

    /// Logger construit à partir des paramètres courants.
    pub fn build_logger(&self) -> Logger {
        self.settings.build_logger()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: LoggerSettings = serde_json::from_str(r#"{ "level": "warn" }"#).unwrap();
        assert_eq!(settings.level, Severity::Warn);
        assert_eq!(settings.color, ColorPolicy::Unset);
        assert_eq!(settings.fatal_exit_code, 1);
        assert_eq!(settings.panic_exit_code, 2);
        assert_eq!(settings.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn color_accepts_unset_alias() {
        let settings: LoggerSettings = serde_json::from_str(r#"{ "color": "unset" }"#).unwrap();
        assert_eq!(settings.color, ColorPolicy::Unset);
        let settings: LoggerSettings = serde_json::from_str(r#"{ "color": "off" }"#).unwrap();
        assert_eq!(settings.color, ColorPolicy::ForceOff);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(serde_json::from_str::<LoggerSettings>(r#"{ "level": "verbose" }"#).is_err());
    }

    #[test]
    fn apply_copies_every_field() {
        let settings = LoggerSettings {
            level: Severity::Error,
            namespace: "api".to_string(),
            color: ColorPolicy::ForceOn,
            fatal_exit_code: 13,
            panic_exit_code: 42,
            time_format: "%H:%M".to_string(),
        };
        let mut logger = Logger::with_detector("", || false);
        settings.apply(&mut logger);
        assert_eq!(LoggerSettings::from_logger(&logger), settings);
        assert_eq!(logger.to_string(), r#"Logger{level: 2, namespace: "api"}"#);
    }
}
