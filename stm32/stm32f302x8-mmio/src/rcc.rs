//! Reset and clock control.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "RCC",
    struct_name: Rcc,
    size: 0x34,
    instances: {
        rcc: RCC_BASE,
    },
    regs: {
        0x00 cr: u32 = rw,
        0x04 cfgr: u32 = rw,
        0x08 cir: u32 = rw,
        0x0c apb2rstr: u32 = rw,
        0x10 apb1rstr: u32 = rw,
        0x14 ahbenr: u32 = rw,
        0x18 apb2enr: u32 = rw,
        0x1c apb1enr: u32 = rw,
        0x20 bdcr: u32 = rw,
        0x24 csr: u32 = rw,
        0x28 ahbrstr: u32 = rw,
        0x2c cfgr2: u32 = rw,
        0x30 cfgr3: u32 = rw,
    },
}

fields! {
    /// Clock control register.
    pub mod cr {
        HSION @ 0,
        HSIRDY @ 1,
        HSITRIM @ 3 : 5 [bits],
        HSICAL @ 8 : 8 [bits],
        HSEON @ 16,
        HSERDY @ 17,
        HSEBYP @ 18,
        CSSON @ 19,
        PLLON @ 24,
        PLLRDY @ 25,
    }

    /// Clock configuration register.
    pub mod cfgr {
        SW @ 0 : 2 [bits],
        SWS @ 2 : 2 [bits],
        HPRE @ 4 : 4 [bits],
        PPRE1 @ 8 : 3 [bits],
        PPRE2 @ 11 : 3 [bits],
        PLLSRC @ 16,
        PLLXTPRE @ 17,
        PLLMUL @ 18 : 4 [bits],
        USBPRE @ 22,
        I2SSRC @ 23,
        MCO @ 24 : 3 [bits],
        MCOPRE @ 28 : 3 [bits],
        PLLNODIV @ 31;
        legacy {
            PLLMULL = PLLMUL,
            MCOSEL = MCO,
        };
        values {
            SW_HSI = 0x0000_0000,
            SW_HSE = 0x0000_0001,
            SW_PLL = 0x0000_0002,
            SWS_HSI = 0x0000_0000,
            SWS_HSE = 0x0000_0004,
            SWS_PLL = 0x0000_0008,
            HPRE_DIV1 = 0x0000_0000,
            HPRE_DIV2 = 0x0000_0080,
            HPRE_DIV4 = 0x0000_0090,
            HPRE_DIV8 = 0x0000_00a0,
            HPRE_DIV16 = 0x0000_00b0,
            HPRE_DIV64 = 0x0000_00c0,
            HPRE_DIV128 = 0x0000_00d0,
            HPRE_DIV256 = 0x0000_00e0,
            HPRE_DIV512 = 0x0000_00f0,
            PPRE1_DIV1 = 0x0000_0000,
            PPRE1_DIV2 = 0x0000_0400,
            PPRE1_DIV4 = 0x0000_0500,
            PPRE1_DIV8 = 0x0000_0600,
            PPRE1_DIV16 = 0x0000_0700,
            PPRE2_DIV1 = 0x0000_0000,
            PPRE2_DIV2 = 0x0000_2000,
            PPRE2_DIV4 = 0x0000_2800,
            PPRE2_DIV8 = 0x0000_3000,
            PPRE2_DIV16 = 0x0000_3800,
            PLLSRC_HSI_DIV2 = 0x0000_0000,
            PLLSRC_HSE_PREDIV = 0x0001_0000,
            PLLXTPRE_HSE_PREDIV_DIV1 = 0x0000_0000,
            PLLXTPRE_HSE_PREDIV_DIV2 = 0x0002_0000,
            PLLMUL2 = 0x0000_0000,
            PLLMUL3 = 0x0004_0000,
            PLLMUL4 = 0x0008_0000,
            PLLMUL5 = 0x000c_0000,
            PLLMUL6 = 0x0010_0000,
            PLLMUL7 = 0x0014_0000,
            PLLMUL8 = 0x0018_0000,
            PLLMUL9 = 0x001c_0000,
            PLLMUL10 = 0x0020_0000,
            PLLMUL11 = 0x0024_0000,
            PLLMUL12 = 0x0028_0000,
            PLLMUL13 = 0x002c_0000,
            PLLMUL14 = 0x0030_0000,
            PLLMUL15 = 0x0034_0000,
            PLLMUL16 = 0x0038_0000,
            USBPRE_DIV1_5 = 0x0000_0000,
            USBPRE_DIV1 = 0x0040_0000,
            I2SSRC_SYSCLK = 0x0000_0000,
            I2SSRC_EXT = 0x0080_0000,
            MCO_NOCLOCK = 0x0000_0000,
            MCO_LSI = 0x0200_0000,
            MCO_LSE = 0x0300_0000,
            MCO_SYSCLK = 0x0400_0000,
            MCO_HSI = 0x0500_0000,
            MCO_HSE = 0x0600_0000,
            MCO_PLL = 0x0700_0000,
            MCOPRE_DIV1 = 0x0000_0000,
            MCOPRE_DIV2 = 0x1000_0000,
            MCOPRE_DIV4 = 0x2000_0000,
            MCOPRE_DIV8 = 0x3000_0000,
            MCOPRE_DIV16 = 0x4000_0000,
            MCOPRE_DIV32 = 0x5000_0000,
            MCOPRE_DIV64 = 0x6000_0000,
            MCOPRE_DIV128 = 0x7000_0000,
            /// Older name of [`PLLSRC_HSE_PREDIV`].
            PLLSRC_PREDIV1 = PLLSRC_HSE_PREDIV,
            PLLMULL9 = PLLMUL9,
            MCOSEL_PLL_DIV2 = MCO_PLL,
        }
    }

    /// Clock interrupt register.
    pub mod cir {
        LSIRDYF @ 0,
        LSERDYF @ 1,
        HSIRDYF @ 2,
        HSERDYF @ 3,
        PLLRDYF @ 4,
        CSSF @ 7,
        LSIRDYIE @ 8,
        LSERDYIE @ 9,
        HSIRDYIE @ 10,
        HSERDYIE @ 11,
        PLLRDYIE @ 12,
        LSIRDYC @ 16,
        LSERDYC @ 17,
        HSIRDYC @ 18,
        HSERDYC @ 19,
        PLLRDYC @ 20,
        CSSC @ 23,
    }

    /// APB2 peripheral reset register.
    pub mod apb2rstr {
        SYSCFGRST @ 0,
        TIM1RST @ 11,
        USART1RST @ 14,
        TIM15RST @ 16,
        TIM16RST @ 17,
        TIM17RST @ 18,
    }

    /// APB1 peripheral reset register.
    pub mod apb1rstr {
        TIM2RST @ 0,
        TIM6RST @ 4,
        WWDGRST @ 11,
        SPI2RST @ 14,
        SPI3RST @ 15,
        USART2RST @ 17,
        USART3RST @ 18,
        I2C1RST @ 21,
        I2C2RST @ 22,
        USBRST @ 23,
        CANRST @ 25,
        PWRRST @ 28,
        DAC1RST @ 29,
        I2C3RST @ 30;
        legacy {
            DACRST = DAC1RST,
        }
    }

    /// AHB peripheral clock enable register.
    pub mod ahbenr {
        DMA1EN @ 0,
        SRAMEN @ 2,
        FLITFEN @ 4,
        CRCEN @ 6,
        GPIOAEN @ 17,
        GPIOBEN @ 18,
        GPIOCEN @ 19,
        GPIODEN @ 20,
        GPIOFEN @ 22,
        TSCEN @ 24,
        ADC1EN @ 28;
        legacy {
            ADC12EN = ADC1EN,
        }
    }

    /// APB2 peripheral clock enable register.
    pub mod apb2enr {
        SYSCFGEN @ 0,
        TIM1EN @ 11,
        USART1EN @ 14,
        TIM15EN @ 16,
        TIM16EN @ 17,
        TIM17EN @ 18;
        legacy {
            SYSCFGCOMPEN = SYSCFGEN,
        }
    }

    /// APB1 peripheral clock enable register.
    pub mod apb1enr {
        TIM2EN @ 0,
        TIM6EN @ 4,
        WWDGEN @ 11,
        SPI2EN @ 14,
        SPI3EN @ 15,
        USART2EN @ 17,
        USART3EN @ 18,
        I2C1EN @ 21,
        I2C2EN @ 22,
        USBEN @ 23,
        CANEN @ 25,
        PWREN @ 28,
        DAC1EN @ 29,
        I2C3EN @ 30;
        legacy {
            DACEN = DAC1EN,
        }
    }

    /// Backup domain control register.
    pub mod bdcr {
        LSEON @ 0,
        LSERDY @ 1,
        LSEBYP @ 2,
        LSEDRV @ 3 : 2 [bits],
        RTCSEL @ 8 : 2 [bits],
        RTCEN @ 15,
        BDRST @ 16;
        values {
            RTCSEL_NOCLOCK = 0x0000_0000,
            RTCSEL_LSE = 0x0000_0100,
            RTCSEL_LSI = 0x0000_0200,
            RTCSEL_HSE = 0x0000_0300,
        }
    }

    /// Control and status register, holding the reset flags.
    pub mod csr {
        LSION @ 0,
        LSIRDY @ 1,
        V18PWRRSTF @ 23,
        RMVF @ 24,
        OBLRSTF @ 25,
        PINRSTF @ 26,
        PORRSTF @ 27,
        SFTRSTF @ 28,
        IWDGRSTF @ 29,
        WWDGRSTF @ 30,
        LPWRRSTF @ 31;
        legacy {
            VREGRSTF = V18PWRRSTF,
        }
    }

    /// AHB peripheral reset register.
    pub mod ahbrstr {
        GPIOARST @ 17,
        GPIOBRST @ 18,
        GPIOCRST @ 19,
        GPIODRST @ 20,
        GPIOFRST @ 22,
        TSCRST @ 24,
        ADC1RST @ 28;
        legacy {
            ADC12RST = ADC1RST,
        }
    }

    /// Clock configuration register 2, the PLL input and ADC prescalers.
    pub mod cfgr2 {
        PREDIV @ 0 : 4 [bits],
        ADC1PRES @ 4 : 5 [bits];
        legacy {
            PREDIV1 = PREDIV,
            ADCPRE12 = ADC1PRES,
        };
        values {
            PREDIV_DIV1 = 0x0000_0000,
            PREDIV_DIV2 = 0x0000_0001,
            PREDIV_DIV3 = 0x0000_0002,
            PREDIV_DIV4 = 0x0000_0003,
            PREDIV_DIV5 = 0x0000_0004,
            PREDIV_DIV6 = 0x0000_0005,
            PREDIV_DIV7 = 0x0000_0006,
            PREDIV_DIV8 = 0x0000_0007,
            PREDIV_DIV9 = 0x0000_0008,
            PREDIV_DIV10 = 0x0000_0009,
            PREDIV_DIV11 = 0x0000_000a,
            PREDIV_DIV12 = 0x0000_000b,
            PREDIV_DIV13 = 0x0000_000c,
            PREDIV_DIV14 = 0x0000_000d,
            PREDIV_DIV15 = 0x0000_000e,
            PREDIV_DIV16 = 0x0000_000f,
            ADC1PRES_NO = 0x0000_0000,
            ADC1PRES_DIV1 = 0x0000_0100,
            ADC1PRES_DIV2 = 0x0000_0110,
            ADC1PRES_DIV4 = 0x0000_0120,
            ADC1PRES_DIV6 = 0x0000_0130,
            ADC1PRES_DIV8 = 0x0000_0140,
            ADC1PRES_DIV10 = 0x0000_0150,
            ADC1PRES_DIV12 = 0x0000_0160,
            ADC1PRES_DIV16 = 0x0000_0170,
            ADC1PRES_DIV32 = 0x0000_0180,
            ADC1PRES_DIV64 = 0x0000_0190,
            ADC1PRES_DIV128 = 0x0000_01a0,
            ADC1PRES_DIV256 = 0x0000_01b0,
        }
    }

    /// Clock configuration register 3, the kernel clock source selection.
    pub mod cfgr3 {
        USART1SW @ 0 : 2 [bits],
        I2C1SW @ 4,
        I2C2SW @ 5,
        I2C3SW @ 6,
        TIM1SW @ 8,
        USART2SW @ 16 : 2 [bits],
        USART3SW @ 18 : 2 [bits];
        values {
            USART1SW_PCLK = 0x0000_0000,
            USART1SW_SYSCLK = 0x0000_0001,
            USART1SW_LSE = 0x0000_0002,
            USART1SW_HSI = 0x0000_0003,
            I2C1SW_HSI = 0x0000_0000,
            I2C1SW_SYSCLK = 0x0000_0010,
            I2C2SW_HSI = 0x0000_0000,
            I2C2SW_SYSCLK = 0x0000_0020,
            I2C3SW_HSI = 0x0000_0000,
            I2C3SW_SYSCLK = 0x0000_0040,
            TIM1SW_PCLK2 = 0x0000_0000,
            TIM1SW_PLL = 0x0000_0100,
            USART2SW_PCLK = 0x0000_0000,
            USART2SW_SYSCLK = 0x0001_0000,
            USART2SW_LSE = 0x0002_0000,
            USART2SW_HSI = 0x0003_0000,
            USART3SW_PCLK = 0x0000_0000,
            USART3SW_SYSCLK = 0x0004_0000,
            USART3SW_LSE = 0x0008_0000,
            USART3SW_HSI = 0x000c_0000,
            /// Older name of [`TIM1SW_PCLK2`].
            TIM1SW_HCLK = TIM1SW_PCLK2,
            USART1SW_PCLK2 = USART1SW_PCLK,
            USART2SW_PCLK1 = USART2SW_PCLK,
            USART3SW_PCLK1 = USART3SW_PCLK,
        }
    }
}

/// Field tables of every RCC register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr, cfgr, cir, apb2rstr, apb1rstr, ahbenr, apb2enr, apb1enr, bdcr, csr, ahbrstr, cfgr2, cfgr3,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_values_fit_their_fields() {
        assert_eq!(cfgr::SW_PLL, cfgr::SW.value(2));
        assert_eq!(cfgr::PLLMUL9, cfgr::PLLMUL.value(7));
        assert_eq!(cfgr::PPRE1_DIV2, cfgr::PPRE1.value(0b100));
        assert_eq!(cfgr::MCO_PLL & !cfgr::MCO.mask(), 0);
        assert_eq!(cfgr2::ADC1PRES_DIV256, cfgr2::ADC1PRES.value(0b11011));
        assert_eq!(bdcr::RTCSEL_LSE, bdcr::RTCSEL_0);
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(cfgr3::TIM1SW_HCLK, cfgr3::TIM1SW_PCLK2);
        assert_eq!(apb1enr::DACEN, apb1enr::DAC1EN);
        assert_eq!(cfgr::PLLSRC_PREDIV1, cfgr::PLLSRC_HSE_PREDIV);
        assert_eq!(cfgr::PLLMULL, cfgr::PLLMUL);
        assert_eq!(csr::VREGRSTF.mask(), 0x0080_0000);
    }
}
