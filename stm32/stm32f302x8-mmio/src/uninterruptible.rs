use core::marker::PhantomData;

use stm32f302x8_cpu::interrupts::with_interrupts_disabled;

/// A token proving that the execution context is uninterruptible for the purpose of register
/// access.
///
/// The existence of an `Uninterruptible` token means that PRIMASK is set, so no configurable
/// priority interrupt handler can run between the read and the write of a `modify_*` call. Faults
/// and NMI are not masked; their handlers must not touch peripheral registers.
#[derive(Clone, Copy)]
pub struct Uninterruptible<'a> {
    _phantom_lifetime: PhantomData<&'a ()>,
}

impl<'a> Uninterruptible<'a> {
    /// # Safety
    ///
    /// Interrupts must be masked while `'a` is live.
    pub unsafe fn new_unchecked() -> Self {
        Self {
            _phantom_lifetime: PhantomData,
        }
    }
}

/// Runs a function with interrupts masked, restoring the previous PRIMASK state afterwards.
pub fn uninterruptible<T>(f: impl FnOnce(Uninterruptible) -> T) -> T {
    with_interrupts_disabled(|| f(unsafe { Uninterruptible::new_unchecked() }))
}
