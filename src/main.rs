// =============================================================================
// termlog-tester — Démonstration du logger terminal
// =============================================================================
//
// Scénarios :
//   info        — seuil Info, couleurs forcées à off
//   namespaced  — espace de noms et format d'horodatage personnalisé
//   exit-codes  — couleurs forcées, codes de sortie 13/42, se termine en FATAL
//   fatal/panic — terminaison seule (utilisé par les tests d'intégration)
//   bridge      — messages `log::*!` rendus par termlog
//
// Auteur : M@nu
// Licence : MIT
// =============================================================================

mod app;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = app::Cli::parse();
    app::run(&cli)
}
