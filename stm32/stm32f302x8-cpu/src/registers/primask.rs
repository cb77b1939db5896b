//! The PRIMASK special register, which masks all configurable-priority exceptions when set.
//!
//! [`Primask`] follows the `cortex-m` convention: `Active` means the priority mask lets
//! interrupts through, `Inactive` means they are masked.

pub use cortex_m::register::primask::Primask;

#[cfg(not(target_arch = "arm"))]
use core::sync::atomic::{AtomicBool, Ordering};

/// Host stand-in for the PRIMASK bit.
#[cfg(not(target_arch = "arm"))]
static MASKED: AtomicBool = AtomicBool::new(false);

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn read() -> Primask {
    cortex_m::register::primask::read()
}

#[cfg(not(target_arch = "arm"))]
pub fn read() -> Primask {
    if MASKED.load(Ordering::SeqCst) {
        Primask::Inactive
    } else {
        Primask::Active
    }
}

/// Sets PRIMASK, masking interrupts.
#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn set() {
    cortex_m::interrupt::disable();
}

#[cfg(not(target_arch = "arm"))]
#[inline(always)]
pub fn set() {
    MASKED.store(true, Ordering::SeqCst);
}

/// Clears PRIMASK, unmasking interrupts.
///
/// # Safety
///
/// Must not be called while code relies on interrupts being masked, such as inside a critical
/// section established by someone else.
#[cfg(target_arch = "arm")]
#[inline(always)]
pub unsafe fn clear() {
    cortex_m::interrupt::enable();
}

/// Clears PRIMASK, unmasking interrupts.
///
/// # Safety
///
/// Must not be called while code relies on interrupts being masked, such as inside a critical
/// section established by someone else.
#[cfg(not(target_arch = "arm"))]
#[inline(always)]
pub unsafe fn clear() {
    MASKED.store(false, Ordering::SeqCst);
}
