// =============================================================================
// Fichier : capability.rs
// Rôle    : Détection de la prise en charge des couleurs ANSI par le terminal
//
// Heuristique :
//   - Hors Windows : couleurs supportées.
//   - Windows : supportées seulement sous Windows Terminal (WT_SESSION)
//     ou dans un shell MSYS/MinGW (MSYSTEM). Console classique → désactivées.
// =============================================================================

use std::env;
use std::ffi::OsString;

/// Variable posée par Windows Terminal pour chaque session.
pub const WINDOWS_TERMINAL_VAR: &str = "WT_SESSION";

/// Variable posée par les shells MSYS2 / Git Bash.
pub const MSYS_SHELL_VAR: &str = "MSYSTEM";

/// Instantané de l'environnement utilisé pour décider des couleurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEnv {
    /// Système d'exploitation (valeurs de `std::env::consts::OS`).
    pub os: String,
    pub windows_terminal_session: bool,
    pub msys_shell: bool,
}

impl TermEnv {
    /// Lit l'environnement du processus courant.
    pub fn from_process() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            windows_terminal_session: is_set(env::var_os(WINDOWS_TERMINAL_VAR)),
            msys_shell: is_set(env::var_os(MSYS_SHELL_VAR)),
        }
    }

    /// Indique si la sortie peut recevoir des séquences ANSI.
    pub fn supports_ansi(&self) -> bool {
        if self.os != "windows" {
            return true;
        }
        self.windows_terminal_session || self.msys_shell
    }
}

/// Détecteur par défaut, branché sur l'environnement réel.
pub fn detect_capability() -> bool {
    let term = TermEnv::from_process();
    let supported = term.supports_ansi();
    log::debug!("Couleurs ANSI {} ({term:?})", if supported { "actives" } else { "inactives" });
    supported
}

fn is_set(value: Option<OsString>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(os: &str, wt: bool, msys: bool) -> TermEnv {
        TermEnv {
            os: os.to_string(),
            windows_terminal_session: wt,
            msys_shell: msys,
        }
    }

    #[test]
    fn unix_platforms_support_ansi() {
        assert!(term("linux", false, false).supports_ansi());
        assert!(term("macos", false, false).supports_ansi());
        assert!(term("freebsd", false, true).supports_ansi());
    }

    #[test]
    fn legacy_windows_console_is_unsupported() {
        assert!(!term("windows", false, false).supports_ansi());
    }

    #[test]
    fn modern_windows_hosts_support_ansi() {
        assert!(term("windows", true, false).supports_ansi());
        assert!(term("windows", false, true).supports_ansi());
    }

    #[test]
    fn empty_variable_counts_as_absent() {
        assert!(!is_set(Some(OsString::new())));
        assert!(!is_set(None));
        assert!(is_set(Some(OsString::from("{guid}"))));
    }
}
