// =============================================================================
// Fichier : macros.rs
// Rôle    : Macros d'émission (`format_args!` implicite)
//
// Usage :
//   termlog::warn!(logger, "port {} occupé", port);
//   termlog::conditional!(logger, ok, Severity::Info, Severity::Error, "fin : {}", code);
// =============================================================================

/// Message `DEBUG`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Message `INFO`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Message `WARN`.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Message `ERROR`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Message `FATAL` puis fin du processus.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}

/// Niveau choisi selon une condition.
#[macro_export]
macro_rules! conditional {
    ($logger:expr, $condition:expr, $if_true:expr, $if_false:expr, $($arg:tt)+) => {
        $logger.conditional_level(
            $condition,
            $if_true,
            $if_false,
            ::std::format_args!($($arg)+),
        )
    };
}
