//! The failure collaborators every trapping operation ends in.

use core::panic::Location;

use crate::Hazard;

/// Reports `hazard` and stops the program. Never returns.
///
/// The hazard is logged at `error` level under the `integers::trap` target,
/// as `"<hazard> at <file>:<line>:<column>"` for the caller's location.
/// Filter on that target to route traps separately. With the `abort` feature the process is aborted on the spot;
/// otherwise this panics with the hazard's message, which aborts under
/// `panic = "abort"` and unwinds in test builds.
#[cold]
#[inline(never)]
#[track_caller]
pub fn trap(hazard: Hazard) -> ! {
    let location = Location::caller();
    log::error!(target: "integers::trap", "{hazard} at {location}");

    if cfg!(feature = "abort") {
        std::process::abort();
    }
    panic!("{hazard}")
}

/// Traps with [`Hazard::Invariant`] when `holds` is false.
///
/// Only checked with `debug_assertions`; release builds compile it away.
#[inline(always)]
#[track_caller]
pub fn debug_invariant(holds: bool, what: &'static str) {
    if cfg!(debug_assertions) && !holds {
        trap(Hazard::Invariant(what))
    }
}
