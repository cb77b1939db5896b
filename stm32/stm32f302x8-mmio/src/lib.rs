#![cfg_attr(not(test), no_std)]

//! Peripheral register map of the STM32F302x8.
//!
//! Every peripheral module declares its `#[repr(C)]` register block, a handle type with one
//! volatile accessor per register, and field catalogs built from
//! [`register_field::Field`] descriptors:
//!
//! ```no_run
//! use stm32f302x8_mmio::{adc, rcc, uninterruptible, Adc, PermissionRoot, Rcc};
//!
//! let root = unsafe { PermissionRoot::new_unchecked() };
//! let rcc = Rcc::rcc(root);
//! let adc = Adc::adc1(root);
//!
//! uninterruptible(|u| rcc.modify_ahbenr(u, |w| w | rcc::ahbenr::ADC1EN.mask()));
//! adc.write_cr(adc::cr::ADVREGEN.value(0b01));
//! while !adc::isr::ADRDY.is_set(adc.read_isr()) {}
//! ```
//!
//! Read-only registers have no write accessor:
//!
//! ```compile_fail
//! use stm32f302x8_mmio::{AdcCommon, PermissionRoot};
//!
//! let root = unsafe { PermissionRoot::new_unchecked() };
//! AdcCommon::adc1_common(root).write_csr(0);
//! ```
//!
//! Read-modify-write goes through `modify_*`, which takes an [`Uninterruptible`] token so that no
//! interrupt handler can touch the register between the load and the store.

#[macro_use]
mod macros;

pub mod adc;
pub mod adc_common;
pub mod can;
pub mod comp;
pub mod crc;
pub mod dac;
pub mod dbgmcu;
pub mod dma;
pub mod dma_channel;
pub mod exti;
pub mod flash;
pub mod gpio;
pub mod i2c;
pub mod iwdg;
pub mod memory_map;
pub mod ob;
pub mod opamp;
pub mod pwr;
pub mod rcc;
pub mod rtc;
pub mod signature;
pub mod spi;
pub mod syscfg;
pub mod tim;
pub mod tsc;
pub mod usart;
pub mod usb;
pub mod wwdg;

mod permission;
mod register;
mod trace;
mod uninterruptible;

pub use crate::adc::Adc;
pub use crate::adc_common::AdcCommon;
pub use crate::can::Can;
pub use crate::comp::Comp;
pub use crate::crc::Crc;
pub use crate::dac::Dac;
pub use crate::dbgmcu::Dbgmcu;
pub use crate::dma::Dma;
pub use crate::dma_channel::DmaChannel;
pub use crate::exti::Exti;
pub use crate::flash::Flash;
pub use crate::gpio::Gpio;
pub use crate::i2c::I2c;
pub use crate::iwdg::Iwdg;
pub use crate::ob::OptionBytes;
pub use crate::opamp::Opamp;
pub use crate::permission::PermissionRoot;
pub use crate::pwr::Pwr;
pub use crate::rcc::Rcc;
pub use crate::register::{Access, RegisterDesc};
pub use crate::rtc::Rtc;
pub use crate::signature::{FlashSize, Uid};
pub use crate::spi::Spi;
pub use crate::syscfg::Syscfg;
pub use crate::tim::Tim;
pub use crate::tsc::Tsc;
pub use crate::uninterruptible::{uninterruptible, Uninterruptible};
pub use crate::usart::Usart;
pub use crate::usb::Usb;
pub use crate::wwdg::Wwdg;
