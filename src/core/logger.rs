// =============================================================================
// Fichier : logger.rs
// Rôle    : Logger terminal à niveaux (filtrage, étiquettes, écriture)
//
// Format d'une ligne :
//   `<horodatage> [<espace de noms> ]<ÉTIQ> <message>\n`
//   L'étiquette fait 5 caractères, éventuellement entourée de couleurs ANSI.
// =============================================================================

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::process;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::capability::detect_capability;
use super::severity::Severity;

/// Horodatage par défaut : `YYYY-MM-DD HH:MM:SS.ffffff`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub const DEFAULT_FATAL_EXIT_CODE: i32 = 1;
pub const DEFAULT_PANIC_EXIT_CODE: i32 = 2;

// =============================================================================
// Politique de couleur
// =============================================================================

/// Forçage des couleurs ANSI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPolicy {
    /// S'en remet à la détection du terminal.
    #[default]
    #[serde(rename = "auto", alias = "unset")]
    Unset,
    #[serde(rename = "on")]
    ForceOn,
    #[serde(rename = "off")]
    ForceOff,
}

impl fmt::Display for ColorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "auto"),
            Self::ForceOn => write!(f, "on"),
            Self::ForceOff => write!(f, "off"),
        }
    }
}

/// Politique de couleur non reconnue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("politique de couleur inconnue : {0:?} (attendu : auto, on, off)")]
pub struct ParseColorPolicyError(pub String);

impl FromStr for ColorPolicy {
    type Err = ParseColorPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" | "unset" => Ok(Self::Unset),
            "on" | "always" | "force" => Ok(Self::ForceOn),
            "off" | "never" | "none" => Ok(Self::ForceOff),
            _ => Err(ParseColorPolicyError(s.to_string())),
        }
    }
}

// =============================================================================
// Logger
// =============================================================================

/// Logger terminal.
///
/// La configuration se fait par affectation directe des champs publics après
/// construction ; aucune validation n'est effectuée.
pub struct Logger {
    /// Seuil : un message n'est émis que si ce niveau le laisse passer
    /// (voir [`Severity::passes`]).
    pub min_severity: Severity,
    /// Préfixe ajouté devant chaque étiquette lorsqu'il est non vide.
    pub namespace: String,
    pub color_policy: ColorPolicy,
    pub fatal_exit_code: i32,
    pub panic_exit_code: i32,
    /// Motif strftime de l'horodatage (voir `chrono::format::strftime`).
    pub time_format: String,
    /// Destination des lignes. Le Logger ne la ferme jamais.
    pub output: Box<dyn Write + Send>,
    color_supported: bool,
}

impl Logger {
    /// Logger par défaut, sans espace de noms, écrivant sur stderr.
    pub fn new() -> Self {
        Self::with_detector("", detect_capability)
    }

    /// Logger dont chaque étiquette est préfixée par `namespace`.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self::with_detector(namespace, detect_capability)
    }

    /// Construit un Logger en remplaçant la détection du terminal.
    ///
    /// `detector` est appelé une seule fois ; son résultat n'est consulté que
    /// si [`ColorPolicy::Unset`] est actif.
    pub fn with_detector(namespace: impl Into<String>, detector: impl FnOnce() -> bool) -> Self {
        Self {
            min_severity: Severity::Debug,
            namespace: namespace.into(),
            color_policy: ColorPolicy::Unset,
            fatal_exit_code: DEFAULT_FATAL_EXIT_CODE,
            panic_exit_code: DEFAULT_PANIC_EXIT_CODE,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            output: Box::new(io::stderr()),
            color_supported: detector(),
        }
    }

    /// Résultat de la détection effectuée à la construction.
    pub const fn color_supported(&self) -> bool {
        self.color_supported
    }

    // ── Émission ──────────────────────────────────────────────────────────────

    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args);
    }

    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Choisit `if_true` ou `if_false` selon `condition`, puis émet comme
    /// la méthode du niveau retenu.
    ///
    /// `Fatal` et `Panic` sont toujours écrits mais ne terminent pas le
    /// processus par ce chemin.
    pub fn conditional_level(
        &mut self,
        condition: bool,
        if_true: Severity,
        if_false: Severity,
        args: fmt::Arguments<'_>,
    ) {
        let severity = if condition { if_true } else { if_false };
        self.log(severity, args);
    }

    /// Émission filtrée à un niveau quelconque.
    pub fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        if self.is_enabled(severity) {
            self.print_log(severity, args);
        }
    }

    /// Indique si un message de ce niveau serait émis.
    pub const fn is_enabled(&self, severity: Severity) -> bool {
        severity.passes(self.min_severity)
    }

    /// Écrit un message `FATAL` quel que soit le seuil, puis termine le
    /// processus avec `fatal_exit_code`.
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.print_log(Severity::Fatal, args);
        process::exit(self.fatal_exit_code)
    }

    /// Écrit un message `PANIC`, une ligne vide puis la pile d'appels sur
    /// stderr, et termine le processus avec `panic_exit_code`.
    pub fn panic(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.print_log(Severity::Panic, args);

        let trace = Backtrace::force_capture();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "stack backtrace:\n{trace}");
        let _ = stderr.flush();

        process::exit(self.panic_exit_code)
    }

    // ── Étiquettes ────────────────────────────────────────────────────────────

    /// Couleurs actives pour cet appel (réévalué à chaque émission).
    pub fn colors_enabled(&self) -> bool {
        match self.color_policy {
            ColorPolicy::ForceOn => true,
            ColorPolicy::ForceOff => false,
            ColorPolicy::Unset => self.color_supported,
        }
    }

    /// Étiquette rendue pour `severity`, espace de noms compris.
    ///
    /// La couleur ne s'applique qu'au jeton de sévérité.
    pub fn label(&self, severity: Severity) -> Cow<'static, str> {
        let label = if self.colors_enabled() {
            severity.ansi_label()
        } else {
            severity.label()
        };

        if self.namespace.is_empty() {
            Cow::Borrowed(label)
        } else {
            Cow::Owned(format!("{} {label}", self.namespace))
        }
    }

    // ── Écriture ──────────────────────────────────────────────────────────────

    fn print_log(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        let line = self.render_line(&Local::now(), severity, args);
        // Écriture au mieux : une sortie défaillante n'interrompt pas l'appelant
        let _ = self.output.write_all(line.as_bytes());
        let _ = self.output.flush();
    }

    fn render_line(
        &self,
        now: &DateTime<Local>,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) -> String {
        let timestamp = format_timestamp(now, &self.time_format);
        let label = self.label(severity);
        format!("{timestamp} {label} {args}\n")
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Logger{{level: {}, namespace: {:?}}}",
            self.min_severity.code(),
            self.namespace
        )
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Formate `now` selon `pattern` ; un motif invalide retombe sur le format
/// par défaut.
fn format_timestamp(now: &DateTime<Local>, pattern: &str) -> String {
    let mut stamp = String::new();
    if write!(stamp, "{}", now.format(pattern)).is_err() {
        stamp.clear();
        let _ = write!(stamp, "{}", now.format(DEFAULT_TIME_FORMAT));
    }
    stamp
}
