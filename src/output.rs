//! Terminal output for todo-login.
//!
//! Every user-facing line goes through these macros so `--quiet` and
//! `--verbose` apply uniformly. Call `output::init` once from main().
//! Diagnostics that the login page would only have sent to the console
//! (failed requests, raw rejection bodies) use `o_debug!`.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Set the global verbosity level. Later calls are ignored.
pub fn init(v: Verbosity) {
    let _ = VERBOSITY.set(v);
}

/// Current verbosity level, `Normal` before `init`.
pub fn verbosity() -> Verbosity {
    *VERBOSITY.get().unwrap_or(&Verbosity::Normal)
}

/// Major phase header. Shown at Normal+.
#[macro_export]
macro_rules! o_step {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Normal {
            println!($($arg)*);
        }
    };
}

/// Indented detail line. Shown at Normal+.
#[macro_export]
macro_rules! o_detail {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Normal {
            println!($($arg)*);
        }
    };
}

/// Shown at Normal+.
#[macro_export]
macro_rules! o_success {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Normal {
            println!($($arg)*);
        }
    };
}

/// Non-fatal warning on stderr. Shown at Normal+.
#[macro_export]
macro_rules! o_warn {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Normal {
            eprintln!($($arg)*);
        }
    };
}

/// Always shown.
#[macro_export]
macro_rules! o_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

/// Diagnostics. Shown at Verbose only.
#[macro_export]
macro_rules! o_debug {
    ($($arg:tt)*) => {
        if $crate::output::verbosity() >= $crate::output::Verbosity::Verbose {
            eprintln!($($arg)*);
        }
    };
}

/// Prompt text, no newline. Always shown.
#[macro_export]
macro_rules! o_print {
    ($($arg:tt)*) => {
        print!($($arg)*);
    };
}

/// Machine-readable result. Always shown, even in Quiet mode.
#[macro_export]
macro_rules! o_result {
    ($($arg:tt)*) => {
        print!($($arg)*);
    };
}
