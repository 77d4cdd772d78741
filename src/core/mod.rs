// =============================================================================
// Fichier : core/mod.rs
// Rôle    : Logique du logger, sans dépendance vers le programme de démo
// =============================================================================

pub mod bridge;
pub mod capability;
pub mod logger;
pub mod settings;
pub mod severity;
pub mod sink;
