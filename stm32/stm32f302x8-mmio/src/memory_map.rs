//! Base addresses of the STM32F302x8 memories, buses and peripheral instances.
//!
//! Instance bases are derived from their bus base the same way the reference manual's memory map
//! lists them. [`PERIPHERALS`] catalogs every instance together with its register block layout
//! and field tables.

use core::ops::Range;

use register_field::RegisterFields;
use snafu::{OptionExt, Snafu};

use crate::RegisterDesc;

pub const FLASH_BASE: usize = 0x0800_0000;
pub const FLASH_SIZE: usize = 64 * 1024;
pub const FLASH_PAGE_SIZE: usize = 0x800;
pub const SRAM_BASE: usize = 0x2000_0000;
pub const SRAM_SIZE: usize = 16 * 1024;
pub const PERIPH_BASE: usize = 0x4000_0000;
pub const SRAM_BB_BASE: usize = 0x2200_0000;
pub const PERIPH_BB_BASE: usize = 0x4200_0000;

pub const APB1PERIPH_BASE: usize = PERIPH_BASE;
pub const APB2PERIPH_BASE: usize = PERIPH_BASE + 0x0001_0000;
pub const AHB1PERIPH_BASE: usize = PERIPH_BASE + 0x0002_0000;
pub const AHB2PERIPH_BASE: usize = PERIPH_BASE + 0x0800_0000;
pub const AHB3PERIPH_BASE: usize = PERIPH_BASE + 0x1000_0000;

// APB1
pub const TIM2_BASE: usize = APB1PERIPH_BASE;
pub const TIM6_BASE: usize = APB1PERIPH_BASE + 0x1000;
pub const RTC_BASE: usize = APB1PERIPH_BASE + 0x2800;
pub const WWDG_BASE: usize = APB1PERIPH_BASE + 0x2C00;
pub const IWDG_BASE: usize = APB1PERIPH_BASE + 0x3000;
pub const SPI2_BASE: usize = APB1PERIPH_BASE + 0x3800;
pub const SPI3_BASE: usize = APB1PERIPH_BASE + 0x3C00;
pub const USART2_BASE: usize = APB1PERIPH_BASE + 0x4400;
pub const USART3_BASE: usize = APB1PERIPH_BASE + 0x4800;
pub const I2C1_BASE: usize = APB1PERIPH_BASE + 0x5400;
pub const I2C2_BASE: usize = APB1PERIPH_BASE + 0x5800;
pub const USB_BASE: usize = APB1PERIPH_BASE + 0x5C00;
/// USB packet memory area.
pub const USB_PMAADDR: usize = APB1PERIPH_BASE + 0x6000;
pub const CAN_BASE: usize = APB1PERIPH_BASE + 0x6400;
pub const PWR_BASE: usize = APB1PERIPH_BASE + 0x7000;
pub const DAC1_BASE: usize = APB1PERIPH_BASE + 0x7400;
pub const I2C3_BASE: usize = APB1PERIPH_BASE + 0x7800;

// APB2
pub const SYSCFG_BASE: usize = APB2PERIPH_BASE;
pub const COMP2_BASE: usize = APB2PERIPH_BASE + 0x0020;
pub const COMP4_BASE: usize = APB2PERIPH_BASE + 0x0028;
pub const COMP6_BASE: usize = APB2PERIPH_BASE + 0x0030;
pub const OPAMP2_BASE: usize = APB2PERIPH_BASE + 0x003C;
pub const EXTI_BASE: usize = APB2PERIPH_BASE + 0x0400;
pub const TIM1_BASE: usize = APB2PERIPH_BASE + 0x2C00;
pub const USART1_BASE: usize = APB2PERIPH_BASE + 0x3800;
pub const TIM15_BASE: usize = APB2PERIPH_BASE + 0x4000;
pub const TIM16_BASE: usize = APB2PERIPH_BASE + 0x4400;
pub const TIM17_BASE: usize = APB2PERIPH_BASE + 0x4800;

// AHB1
pub const DMA1_BASE: usize = AHB1PERIPH_BASE;
pub const DMA1_CHANNEL1_BASE: usize = DMA1_BASE + 0x0008;
pub const DMA1_CHANNEL2_BASE: usize = DMA1_BASE + 0x001C;
pub const DMA1_CHANNEL3_BASE: usize = DMA1_BASE + 0x0030;
pub const DMA1_CHANNEL4_BASE: usize = DMA1_BASE + 0x0044;
pub const DMA1_CHANNEL5_BASE: usize = DMA1_BASE + 0x0058;
pub const DMA1_CHANNEL6_BASE: usize = DMA1_BASE + 0x006C;
pub const DMA1_CHANNEL7_BASE: usize = DMA1_BASE + 0x0080;
pub const RCC_BASE: usize = AHB1PERIPH_BASE + 0x1000;
/// Flash interface registers.
pub const FLASH_R_BASE: usize = AHB1PERIPH_BASE + 0x2000;
pub const CRC_BASE: usize = AHB1PERIPH_BASE + 0x3000;
pub const TSC_BASE: usize = AHB1PERIPH_BASE + 0x4000;

// AHB2
pub const GPIOA_BASE: usize = AHB2PERIPH_BASE;
pub const GPIOB_BASE: usize = AHB2PERIPH_BASE + 0x0400;
pub const GPIOC_BASE: usize = AHB2PERIPH_BASE + 0x0800;
pub const GPIOD_BASE: usize = AHB2PERIPH_BASE + 0x0C00;
pub const GPIOF_BASE: usize = AHB2PERIPH_BASE + 0x1400;

// AHB3
pub const ADC1_BASE: usize = AHB3PERIPH_BASE;
pub const ADC1_COMMON_BASE: usize = AHB3PERIPH_BASE + 0x0300;

// System memory and the Cortex-M4 private peripheral bus.
/// Factory-programmed 96-bit unique device ID.
pub const UID_BASE: usize = 0x1FFF_F7AC;
/// Factory-programmed flash size in KiB.
pub const FLASHSIZE_BASE: usize = 0x1FFF_F7CC;
/// Option bytes.
pub const OB_BASE: usize = 0x1FFF_F800;
pub const DBGMCU_BASE: usize = 0xE004_2000;

/// Size of each bit-band region, starting at [`SRAM_BASE`] and [`PERIPH_BASE`].
pub const BIT_BAND_REGION_SIZE: usize = 0x0010_0000;

/// An address region that peripherals are attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bus {
    Apb1,
    Apb2,
    Ahb1,
    Ahb2,
    Ahb3,
    /// System memory, holding the device signature and option bytes.
    SystemMemory,
    /// The Cortex-M4 private peripheral bus.
    Ppb,
}

impl Bus {
    pub const ALL: [Bus; 7] = [
        Bus::Apb1,
        Bus::Apb2,
        Bus::Ahb1,
        Bus::Ahb2,
        Bus::Ahb3,
        Bus::SystemMemory,
        Bus::Ppb,
    ];

    /// The address range decoded by the bus.
    pub const fn region(self) -> Range<usize> {
        match self {
            Bus::Apb1 => APB1PERIPH_BASE..APB2PERIPH_BASE,
            Bus::Apb2 => APB2PERIPH_BASE..AHB1PERIPH_BASE,
            Bus::Ahb1 => AHB1PERIPH_BASE..AHB2PERIPH_BASE,
            Bus::Ahb2 => AHB2PERIPH_BASE..AHB3PERIPH_BASE,
            Bus::Ahb3 => AHB3PERIPH_BASE..0x6000_0000,
            Bus::SystemMemory => 0x1FFF_D800..0x1FFF_F810,
            Bus::Ppb => 0xE000_0000..0xE010_0000,
        }
    }

    pub const fn contains(self, address: usize) -> bool {
        let region = self.region();
        region.start <= address && address < region.end
    }

    pub const fn name(self) -> &'static str {
        match self {
            Bus::Apb1 => "APB1",
            Bus::Apb2 => "APB2",
            Bus::Ahb1 => "AHB1",
            Bus::Ahb2 => "AHB2",
            Bus::Ahb3 => "AHB3",
            Bus::SystemMemory => "system memory",
            Bus::Ppb => "PPB",
        }
    }
}

/// A peripheral instance present on the part.
#[derive(Clone, Copy, Debug)]
pub struct PeripheralDesc {
    /// The instance name, as written in the reference manual.
    pub name: &'static str,
    pub base: usize,
    pub bus: Bus,
    /// Size of the instance's register block in bytes.
    pub size: usize,
    pub registers: &'static [RegisterDesc],
    pub fields: &'static [RegisterFields],
}

impl PeripheralDesc {
    /// The address range covered by the register block.
    pub const fn span(&self) -> Range<usize> {
        self.base..self.base + self.size
    }

    /// Looks up a register by name.
    pub fn register(&self, name: &str) -> Option<&'static RegisterDesc> {
        self.registers.iter().find(|reg| reg.name == name)
    }

    /// Returns the register containing `address`. Reserved gaps are reported like registers.
    pub fn register_at(&self, address: usize) -> Option<&'static RegisterDesc> {
        let offset = address.checked_sub(self.base)?;
        self.registers
            .iter()
            .find(|reg| reg.offset <= offset && offset < reg.end())
    }
}

/// The error type for catalog lookups.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The part has no peripheral instance with the requested name.
    #[snafu(display("no such peripheral on the STM32F302x8"))]
    NotPresent,

    /// No peripheral register block covers the address.
    #[snafu(display("address {address:#010x} is not inside a peripheral register block"))]
    Unmapped { address: usize },
}

/// Finds a peripheral instance by name, ignoring ASCII case.
pub fn find(name: &str) -> Result<&'static PeripheralDesc, LookupError> {
    PERIPHERALS
        .iter()
        .find(|peripheral| peripheral.name.eq_ignore_ascii_case(name))
        .context(NotPresentSnafu)
}

/// Finds the peripheral instance whose register block covers `address`.
///
/// Blocks never overlap, so at most one instance matches.
pub fn decode(address: usize) -> Result<&'static PeripheralDesc, LookupError> {
    PERIPHERALS
        .iter()
        .find(|peripheral| peripheral.span().contains(&address))
        .context(UnmappedSnafu { address })
}

/// Returns the bit-band alias word of `bit` in the peripheral word at `address`, if the address
/// lies in the bit-banded peripheral region.
pub const fn peripheral_bit_band_alias(address: usize, bit: u8) -> Option<usize> {
    bit_band_alias(PERIPH_BASE, PERIPH_BB_BASE, address, bit)
}

/// Returns the bit-band alias word of `bit` in the SRAM word at `address`, if the address lies in
/// the bit-banded SRAM region.
pub const fn sram_bit_band_alias(address: usize, bit: u8) -> Option<usize> {
    bit_band_alias(SRAM_BASE, SRAM_BB_BASE, address, bit)
}

const fn bit_band_alias(region: usize, alias: usize, address: usize, bit: u8) -> Option<usize> {
    if address < region || address - region >= BIT_BAND_REGION_SIZE || bit >= 32 {
        return None;
    }
    Some(alias + ((address & !0b11) - region) * 32 + bit as usize * 4)
}

macro_rules! peripherals {
    ($($name:literal => $base:ident, $bus:ident, $($module:ident)::+;)*) => {
        &[$(
            PeripheralDesc {
                name: $name,
                base: $base,
                bus: Bus::$bus,
                size: crate::$($module)::+::RegisterBlock::SIZE,
                registers: crate::$($module)::+::RegisterBlock::REGISTERS,
                fields: crate::$($module)::+::REGISTER_FIELDS,
            },
        )*]
    };
}

/// Every peripheral instance of the part, ordered by base address.
pub const PERIPHERALS: &[PeripheralDesc] = peripherals! {
    "UID" => UID_BASE, SystemMemory, signature::uid;
    "FLASHSIZE" => FLASHSIZE_BASE, SystemMemory, signature::flash_size;
    "OB" => OB_BASE, SystemMemory, ob;
    "TIM2" => TIM2_BASE, Apb1, tim;
    "TIM6" => TIM6_BASE, Apb1, tim;
    "RTC" => RTC_BASE, Apb1, rtc;
    "WWDG" => WWDG_BASE, Apb1, wwdg;
    "IWDG" => IWDG_BASE, Apb1, iwdg;
    "SPI2" => SPI2_BASE, Apb1, spi;
    "SPI3" => SPI3_BASE, Apb1, spi;
    "USART2" => USART2_BASE, Apb1, usart;
    "USART3" => USART3_BASE, Apb1, usart;
    "I2C1" => I2C1_BASE, Apb1, i2c;
    "I2C2" => I2C2_BASE, Apb1, i2c;
    "USB" => USB_BASE, Apb1, usb;
    "CAN" => CAN_BASE, Apb1, can;
    "PWR" => PWR_BASE, Apb1, pwr;
    "DAC1" => DAC1_BASE, Apb1, dac;
    "I2C3" => I2C3_BASE, Apb1, i2c;
    "SYSCFG" => SYSCFG_BASE, Apb2, syscfg;
    "COMP2" => COMP2_BASE, Apb2, comp;
    "COMP4" => COMP4_BASE, Apb2, comp;
    "COMP6" => COMP6_BASE, Apb2, comp;
    "OPAMP2" => OPAMP2_BASE, Apb2, opamp;
    "EXTI" => EXTI_BASE, Apb2, exti;
    "TIM1" => TIM1_BASE, Apb2, tim;
    "USART1" => USART1_BASE, Apb2, usart;
    "TIM15" => TIM15_BASE, Apb2, tim;
    "TIM16" => TIM16_BASE, Apb2, tim;
    "TIM17" => TIM17_BASE, Apb2, tim;
    "DMA1" => DMA1_BASE, Ahb1, dma;
    "DMA1_Channel1" => DMA1_CHANNEL1_BASE, Ahb1, dma_channel;
    "DMA1_Channel2" => DMA1_CHANNEL2_BASE, Ahb1, dma_channel;
    "DMA1_Channel3" => DMA1_CHANNEL3_BASE, Ahb1, dma_channel;
    "DMA1_Channel4" => DMA1_CHANNEL4_BASE, Ahb1, dma_channel;
    "DMA1_Channel5" => DMA1_CHANNEL5_BASE, Ahb1, dma_channel;
    "DMA1_Channel6" => DMA1_CHANNEL6_BASE, Ahb1, dma_channel;
    "DMA1_Channel7" => DMA1_CHANNEL7_BASE, Ahb1, dma_channel;
    "RCC" => RCC_BASE, Ahb1, rcc;
    "FLASH" => FLASH_R_BASE, Ahb1, flash;
    "CRC" => CRC_BASE, Ahb1, crc;
    "TSC" => TSC_BASE, Ahb1, tsc;
    "GPIOA" => GPIOA_BASE, Ahb2, gpio;
    "GPIOB" => GPIOB_BASE, Ahb2, gpio;
    "GPIOC" => GPIOC_BASE, Ahb2, gpio;
    "GPIOD" => GPIOD_BASE, Ahb2, gpio;
    "GPIOF" => GPIOF_BASE, Ahb2, gpio;
    "ADC1" => ADC1_BASE, Ahb3, adc;
    "ADC1_COMMON" => ADC1_COMMON_BASE, Ahb3, adc_common;
    "DBGMCU" => DBGMCU_BASE, Ppb, dbgmcu;
};
