//! System configuration controller.
//!
//! The comparator and operational amplifier registers that follow this block in the APB2 address
//! space are separate instances, see [`Comp`](crate::Comp) and [`Opamp`](crate::Opamp).

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "SYSCFG",
    struct_name: Syscfg,
    size: 0x1c,
    instances: {
        syscfg: SYSCFG_BASE,
    },
    regs: {
        0x00 cfgr1: u32 = rw,
        0x04 _reserved0: u32,
        0x08 exticr: [u32; 4] = rw(indexed),
        0x18 cfgr2: u32 = rw,
    },
}

/// `EXTIx` port selection values, unshifted.
pub const EXTI_PORT_A: u32 = 0x0;
pub const EXTI_PORT_B: u32 = 0x1;
pub const EXTI_PORT_C: u32 = 0x2;
pub const EXTI_PORT_D: u32 = 0x3;
pub const EXTI_PORT_F: u32 = 0x5;

fields! {
    /// Configuration register 1.
    pub mod cfgr1 {
        MEM_MODE @ 0 : 2 [bits],
        USB_IT_RMP @ 5,
        TIM1_ITR3_RMP @ 6,
        DAC1_TRIG1_RMP @ 7,
        TIM16_DMA_RMP @ 11,
        TIM17_DMA_RMP @ 12,
        TIM6DAC1_DMA_RMP @ 13,
        I2C_PB6_FMP @ 16,
        I2C_PB7_FMP @ 17,
        I2C_PB8_FMP @ 18,
        I2C_PB9_FMP @ 19,
        I2C1_FMP @ 20,
        I2C2_FMP @ 21,
        ENCODER_MODE @ 22 : 2 [bits],
        I2C3_FMP @ 24,
        FPU_IE @ 26 : 6 [bits];
        legacy {
            DAC_TRIG_RMP = DAC1_TRIG1_RMP,
        };
        values {
            MEM_MODE_FLASH = 0x0000_0000,
            MEM_MODE_SYSTEM = 0x0000_0001,
            MEM_MODE_SRAM = 0x0000_0003,
        }
    }

    /// Configuration register 2, the Cortex-M4 fault lock bits.
    pub mod cfgr2 {
        LOCKUP_LOCK @ 0,
        SRAM_PARITY_LOCK @ 1,
        PVD_LOCK @ 2,
        BYP_ADDR_PAR @ 4,
        SRAM_PE @ 8,
    }
}

// Each external interrupt configuration register selects the port of four EXTI lines.
seq_macro::seq!(N in 0..4 {
    paste::paste! {
        fields! {
            /// External interrupt configuration register 1, lines 0 to 3.
            pub mod exticr1 {
                #( EXTI~N @ (N * 4) : 4 [bits], )*
                ;
                values {
                    #(
                        [<EXTI N _PA>] = super::EXTI_PORT_A << (N * 4),
                        [<EXTI N _PB>] = super::EXTI_PORT_B << (N * 4),
                        [<EXTI N _PC>] = super::EXTI_PORT_C << (N * 4),
                        [<EXTI N _PD>] = super::EXTI_PORT_D << (N * 4),
                        [<EXTI N _PF>] = super::EXTI_PORT_F << (N * 4),
                    )*
                }
            }
        }
    }
});

seq_macro::seq!(N in 4..8 {
    paste::paste! {
        fields! {
            /// External interrupt configuration register 2, lines 4 to 7.
            pub mod exticr2 {
                #( EXTI~N @ ((N - 4) * 4) : 4 [bits], )*
                ;
                values {
                    #(
                        [<EXTI N _PA>] = super::EXTI_PORT_A << ((N - 4) * 4),
                        [<EXTI N _PB>] = super::EXTI_PORT_B << ((N - 4) * 4),
                        [<EXTI N _PC>] = super::EXTI_PORT_C << ((N - 4) * 4),
                        [<EXTI N _PD>] = super::EXTI_PORT_D << ((N - 4) * 4),
                        [<EXTI N _PF>] = super::EXTI_PORT_F << ((N - 4) * 4),
                    )*
                }
            }
        }
    }
});

seq_macro::seq!(N in 8..12 {
    paste::paste! {
        fields! {
            /// External interrupt configuration register 3, lines 8 to 11.
            pub mod exticr3 {
                #( EXTI~N @ ((N - 8) * 4) : 4 [bits], )*
                ;
                values {
                    #(
                        [<EXTI N _PA>] = super::EXTI_PORT_A << ((N - 8) * 4),
                        [<EXTI N _PB>] = super::EXTI_PORT_B << ((N - 8) * 4),
                        [<EXTI N _PC>] = super::EXTI_PORT_C << ((N - 8) * 4),
                        [<EXTI N _PD>] = super::EXTI_PORT_D << ((N - 8) * 4),
                        [<EXTI N _PF>] = super::EXTI_PORT_F << ((N - 8) * 4),
                    )*
                }
            }
        }
    }
});

seq_macro::seq!(N in 12..16 {
    paste::paste! {
        fields! {
            /// External interrupt configuration register 4, lines 12 to 15.
            pub mod exticr4 {
                #( EXTI~N @ ((N - 12) * 4) : 4 [bits], )*
                ;
                values {
                    #(
                        [<EXTI N _PA>] = super::EXTI_PORT_A << ((N - 12) * 4),
                        [<EXTI N _PB>] = super::EXTI_PORT_B << ((N - 12) * 4),
                        [<EXTI N _PC>] = super::EXTI_PORT_C << ((N - 12) * 4),
                        [<EXTI N _PD>] = super::EXTI_PORT_D << ((N - 12) * 4),
                        [<EXTI N _PF>] = super::EXTI_PORT_F << ((N - 12) * 4),
                    )*
                }
            }
        }
    }
});

/// Field tables of every SYSCFG register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cfgr1, "exticr0" => exticr1, "exticr1" => exticr2, "exticr2" => exticr3,
    "exticr3" => exticr4, cfgr2,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exti_port_selection() {
        assert_eq!(exticr1::EXTI0.mask(), 0x0000_000f);
        assert_eq!(exticr1::EXTI0_PB, 0x0000_0001);
        assert_eq!(exticr2::EXTI5_PC, 0x0000_0020);
        assert_eq!(exticr4::EXTI15_PF, 0x0000_5000);
        assert_eq!(exticr4::EXTI15.get(exticr4::EXTI15_PF), EXTI_PORT_F);
    }
}
