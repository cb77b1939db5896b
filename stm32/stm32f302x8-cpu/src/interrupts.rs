use crate::registers::primask;

/// Disables interrupts and returns whether they were enabled.
#[inline(always)]
pub fn disable_interrupts() -> bool {
    let was_enabled = primask::read().is_active();
    primask::set();
    was_enabled
}

/// Enables interrupts.
///
/// # Safety
///
/// The caller must not be inside a region that another caller expects to stay uninterrupted.
#[inline(always)]
pub unsafe fn enable_interrupts() {
    primask::clear();
}

/// Invokes a function with interrupts disabled. The previous enabled state is restored after it
/// returns.
#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn with_interrupts_disabled<T>(f: impl FnOnce() -> T) -> T {
    cortex_m::interrupt::free(|_| f())
}

/// Invokes a function with interrupts disabled. The previous enabled state is restored after it
/// returns.
#[cfg(not(target_arch = "arm"))]
#[inline(always)]
pub fn with_interrupts_disabled<T>(f: impl FnOnce() -> T) -> T {
    let was_enabled = disable_interrupts();
    let result = f();
    if was_enabled {
        unsafe { enable_interrupts() };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::primask::Primask;

    // The host model of PRIMASK is a single static, so the whole sequence lives in one test.
    #[test]
    fn test_with_interrupts_disabled() {
        assert_eq!(primask::read(), Primask::Active);

        let inside = with_interrupts_disabled(primask::read);
        assert_eq!(inside, Primask::Inactive);
        assert_eq!(primask::read(), Primask::Active);

        let nested = with_interrupts_disabled(|| {
            with_interrupts_disabled(|| ());
            primask::read()
        });
        assert!(nested.is_inactive());
        assert!(primask::read().is_active());

        assert!(disable_interrupts());
        assert!(!disable_interrupts());
        unsafe { enable_interrupts() };
        assert!(primask::read().is_active());
    }
}
