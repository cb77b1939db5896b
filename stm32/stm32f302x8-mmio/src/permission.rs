/// Proof that the caller owns the STM32F302x8 peripheral address space.
///
/// Every fixed-address handle (`Rcc::rcc`, `Gpio::gpioa`, ...) takes one, so code that never
/// received a root cannot reach the hardware. Handles built with `from_ptr` do not need it.
#[derive(Clone, Copy)]
pub struct PermissionRoot {
    _private: (),
}

impl PermissionRoot {
    /// # Safety
    ///
    /// Create exactly one root, after reset and before any peripheral handle exists, and pass
    /// copies of it to the drivers. Two independently created roots let separate drivers program
    /// the same registers without knowing about each other.
    pub unsafe fn new_unchecked() -> Self {
        Self { _private: () }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{memory_map, Gpio};

    #[test]
    fn test_root_reaches_fixed_instances() {
        let root = unsafe { PermissionRoot::new_unchecked() };
        let copy = root;
        assert_eq!(Gpio::gpioc(root).base(), memory_map::GPIOC_BASE);
        assert_eq!(Gpio::gpioc(copy).base(), memory_map::GPIOC_BASE);
    }
}
