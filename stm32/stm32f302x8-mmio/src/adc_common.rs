//! Registers shared by the ADCs of a pair. The F302x8 has only ADC1, which acts as the master.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "ADC common",
    struct_name: AdcCommon,
    size: 0x10,
    instances: {
        adc1_common: ADC1_COMMON_BASE,
    },
    regs: {
        0x00 csr: u32 = ro,
        0x04 _reserved0: u32,
        0x08 ccr: u32 = rw,
        0x0c cdr: u32 = ro,
    },
}

fields! {
    /// Common status register, mirroring the master's and slave's `ISR` flags.
    pub mod csr {
        ADRDY_MST @ 0,
        EOSMP_MST @ 1,
        EOC_MST @ 2,
        EOS_MST @ 3,
        OVR_MST @ 4,
        JEOC_MST @ 5,
        JEOS_MST @ 6,
        AWD1_MST @ 7,
        AWD2_MST @ 8,
        AWD3_MST @ 9,
        JQOVF_MST @ 10,
        ADRDY_SLV @ 16,
        EOSMP_SLV @ 17,
        EOC_SLV @ 18,
        EOS_SLV @ 19,
        OVR_SLV @ 20,
        JEOC_SLV @ 21,
        JEOS_SLV @ 22,
        AWD1_SLV @ 23,
        AWD2_SLV @ 24,
        AWD3_SLV @ 25,
        JQOVF_SLV @ 26;
        legacy {
            ADRDY_EOSMP_MST = EOSMP_MST,
            ADRDY_EOSMP_SLV = EOSMP_SLV,
        }
    }

    /// Common control register.
    pub mod ccr {
        MULTI @ 0 : 5 [bits],
        DELAY @ 8 : 4 [bits],
        DMACFG @ 13,
        MDMA @ 14 : 2 [bits],
        CKMODE @ 16 : 2 [bits],
        VREFEN @ 22,
        TSEN @ 23,
        VBATEN @ 24;
        values {
            CKMODE_ASYNC = 0x0000_0000,
            CKMODE_HCLK_DIV1 = 0x0001_0000,
            CKMODE_HCLK_DIV2 = 0x0002_0000,
            CKMODE_HCLK_DIV4 = 0x0003_0000,
        }
    }

    /// Common regular data register for dual mode.
    pub mod cdr {
        RDATA_MST @ 0 : 16,
        RDATA_SLV @ 16 : 16,
    }
}

/// Field tables of every ADC common register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![csr, ccr, cdr];
