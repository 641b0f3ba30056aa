//! Panic hook that restores the terminal before the panic is reported.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then runs the
/// previously installed hook.
///
/// Call this after `color_eyre::install()` so the eyre panic report is
/// printed to a usable terminal.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
