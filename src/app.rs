// =============================================================================
// Fichier : app.rs
// Rôle    : Arguments et scénarios du programme de démonstration
// =============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use termlog::{ColorPolicy, Logger, Severity, SettingsManager};

/// Démonstration de termlog.
#[derive(Debug, Parser)]
#[command(name = "termlog-tester", version, about)]
pub struct Cli {
    /// Scénario à exécuter.
    #[arg(short, long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Fichier de configuration JSON appliqué à chaque logger.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    All,
    Info,
    Namespaced,
    ExitCodes,
    Fatal,
    Panic,
    Bridge,
}

/// Exécute le scénario demandé.
pub fn run(cli: &Cli) -> Result<()> {
    let base = BaseLogger::from_cli(cli)?;

    match cli.scenario {
        Scenario::All => {
            println!("==> Logger jusqu'à Error, seuil Info, couleurs forcées à off\n");
            info_logger(&base);
            println!("\n==> Logger nommé, horodatage personnalisé, réglages par défaut\n");
            namespaced_logger(&base);
            println!("\n==> Logger jusqu'à Fatal, codes de sortie 13/42, couleurs forcées\n");
            custom_exit_codes_logger(&base)
        }
        Scenario::Info => info_logger(&base),
        Scenario::Namespaced => namespaced_logger(&base),
        Scenario::ExitCodes => custom_exit_codes_logger(&base),
        Scenario::Fatal => base.build("").fatal(format_args!("Fatal message")),
        Scenario::Panic => base.build("").panic(format_args!("Panic message")),
        Scenario::Bridge => bridge_logger(&base)?,
    }

    Ok(())
}

/// Logger de départ : fichier de configuration s'il est fourni.
struct BaseLogger {
    manager: Option<SettingsManager>,
}

impl BaseLogger {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let manager = match &cli.config {
            // Un fichier explicite doit être lisible
            Some(path) => Some(
                SettingsManager::open(path)
                    .with_context(|| format!("Configuration invalide : {}", path.display()))?,
            ),
            None => None,
        };
        Ok(Self { manager })
    }

    fn build(&self, namespace: &str) -> Logger {
        let mut logger = match &self.manager {
            Some(manager) => manager.build_logger(),
            None => Logger::new(),
        };
        if !namespace.is_empty() {
            logger.namespace = namespace.to_string();
        }
        logger
    }
}

fn all_levels(log: &mut Logger) {
    termlog::debug!(log, "Debugging message");
    termlog::info!(log, "Informational message");
    termlog::warn!(log, "Warning message");
    termlog::error!(log, "Error message");
}

fn info_logger(base: &BaseLogger) {
    let mut log = base.build("");
    log.color_policy = ColorPolicy::ForceOff;
    log.min_severity = Severity::Info;
    all_levels(&mut log);
    termlog::conditional!(
        log,
        true,
        Severity::Info,
        Severity::Debug,
        "Conditional message: {}",
        true
    );
}

fn namespaced_logger(base: &BaseLogger) {
    let mut log = base.build("my-namespace");
    log.time_format = "%Y-%m-%d %H:%M:%S".to_string();
    all_levels(&mut log);
}

fn custom_exit_codes_logger(base: &BaseLogger) -> ! {
    let mut log = base.build("");
    log.color_policy = ColorPolicy::ForceOn;
    log.fatal_exit_code = 13;
    log.panic_exit_code = 42;
    all_levels(&mut log);
    let code = log.fatal_exit_code;
    termlog::fatal!(log, "Fatal message (code {code})")
}

fn bridge_logger(base: &BaseLogger) -> Result<()> {
    termlog::install(base.build("bridge")).context("Impossible d'installer le pont log")?;
    log::debug!("Debugging message");
    log::info!("Informational message");
    log::warn!("Warning message");
    log::error!("Error message");
    log::logger().flush();
    Ok(())
}
