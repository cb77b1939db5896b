#![cfg_attr(not(test), no_std)]

//! Cortex-M4 core helpers needed by the STM32F302x8 peripheral layer.
//!
//! On ARM targets these go through the `cortex-m` crate. Host builds, used for tests
//! and simulation, model the interrupt mask in a static so the same code paths can be exercised.

pub mod interrupts;
pub mod registers;
