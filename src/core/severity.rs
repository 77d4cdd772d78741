// =============================================================================
// Fichier : severity.rs
// Rôle    : Niveaux de sévérité, étiquettes texte et étiquettes ANSI
// =============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Séquences ANSI
// =============================================================================

/// Remise à zéro des attributs ANSI.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Étiquettes texte, largeur fixe de 5 caractères.
pub const DEBUG_LABEL: &str = "DEBUG";
pub const INFO_LABEL: &str = "INFO ";
pub const WARN_LABEL: &str = "WARN ";
pub const ERROR_LABEL: &str = "ERROR";
pub const FATAL_LABEL: &str = "FATAL";
pub const PANIC_LABEL: &str = "PANIC";

/// Étiquettes colorisées (couleur de premier plan + reset).
pub const DEBUG_LABEL_ANSI: &str = "\x1b[0;37mDEBUG\x1b[0m"; // 0;37 blanc normal
pub const INFO_LABEL_ANSI: &str = "\x1b[1;36mINFO \x1b[0m"; // 1;36 cyan gras
pub const WARN_LABEL_ANSI: &str = "\x1b[1;33mWARN \x1b[0m"; // 1;33 jaune gras
pub const ERROR_LABEL_ANSI: &str = "\x1b[1;31mERROR\x1b[0m"; // 1;31 rouge gras
pub const FATAL_LABEL_ANSI: &str = "\x1b[1;31mFATAL\x1b[0m";
pub const PANIC_LABEL_ANSI: &str = "\x1b[1;31mPANIC\x1b[0m";

// =============================================================================
// Sévérité
// =============================================================================

/// Niveau de sévérité d'un message, du plus grave au moins grave.
///
/// La valeur numérique (`Panic = 0` … `Debug = 5`) sert aussi de seuil
/// de filtrage sur le [`Logger`](crate::Logger).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    #[default]
    Debug = 5,
}

impl Severity {
    /// Code numérique du niveau.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Étiquette texte (5 caractères).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => DEBUG_LABEL,
            Self::Info => INFO_LABEL,
            Self::Warn => WARN_LABEL,
            Self::Error => ERROR_LABEL,
            Self::Fatal => FATAL_LABEL,
            Self::Panic => PANIC_LABEL,
        }
    }

    /// Étiquette entourée de sa séquence de couleur ANSI.
    pub const fn ansi_label(self) -> &'static str {
        match self {
            Self::Debug => DEBUG_LABEL_ANSI,
            Self::Info => INFO_LABEL_ANSI,
            Self::Warn => WARN_LABEL_ANSI,
            Self::Error => ERROR_LABEL_ANSI,
            Self::Fatal => FATAL_LABEL_ANSI,
            Self::Panic => PANIC_LABEL_ANSI,
        }
    }

    /// Niveau auquel le seuil est comparé avant d'émettre.
    ///
    /// Chaque niveau filtrable est comparé au niveau immédiatement plus grave
    /// (`Debug` → `Info`, `Info` → `Warn`, `Warn` → `Error`, `Error` → `Fatal`).
    /// `Fatal` et `Panic` n'ont pas de porte : ils sont toujours émis.
    pub const fn gate(self) -> Option<Self> {
        match self {
            Self::Debug => Some(Self::Info),
            Self::Info => Some(Self::Warn),
            Self::Warn => Some(Self::Error),
            Self::Error => Some(Self::Fatal),
            Self::Fatal | Self::Panic => None,
        }
    }

    /// Indique si un message de ce niveau passe le seuil `threshold`.
    pub const fn passes(self, threshold: Self) -> bool {
        match self.gate() {
            Some(gate) => threshold.code() > gate.code(),
            None => true,
        }
    }

    /// Convertit un code numérique en niveau.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Panic),
            1 => Some(Self::Fatal),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Liste de tous les niveaux, du plus grave au moins grave.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Panic,
            Self::Fatal,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Nom de niveau non reconnu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("niveau de sévérité inconnu : {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "panic" | "0" => Ok(Self::Panic),
            "fatal" | "1" => Ok(Self::Fatal),
            "error" | "2" => Ok(Self::Error),
            "warn" | "warning" | "3" => Ok(Self::Warn),
            "info" | "information" | "4" => Ok(Self::Info),
            "debug" | "5" => Ok(Self::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
