// cli/constants.rs — display-level globals and verbosity macros for the
// xorsig binary, following the lz4cli.c-derived module of the same name.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "xorsig";
pub const DIGEST_EXTENSION: &str = ".xsig";

// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout, unconditionally — for digest/diff payload output, which
/// must never be gated by verbosity.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_constant() {
        assert_eq!(DIGEST_EXTENSION, ".xsig");
    }

    #[test]
    fn display_level_default_and_setter_round_trip() {
        let prev = display_level();
        assert!(display_level() <= 3);
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
