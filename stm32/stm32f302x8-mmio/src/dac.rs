//! DAC1, the 12-bit digital-to-analog converter.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "DAC",
    struct_name: Dac,
    size: 0x38,
    instances: {
        dac1: DAC1_BASE,
    },
    regs: {
        0x00 cr: u32 = rw,
        0x04 swtrigr: u32 = wo,
        0x08 dhr12r1: u32 = rw,
        0x0c dhr12l1: u32 = rw,
        0x10 dhr8r1: u32 = rw,
        0x14 dhr12r2: u32 = rw,
        0x18 dhr12l2: u32 = rw,
        0x1c dhr8r2: u32 = rw,
        0x20 dhr12rd: u32 = rw,
        0x24 dhr12ld: u32 = rw,
        0x28 dhr8rd: u32 = rw,
        0x2c dor1: u32 = ro,
        0x30 dor2: u32 = ro,
        0x34 sr: u32 = rw,
    },
}

fields! {
    /// Control register.
    pub mod cr {
        EN1 @ 0,
        BOFF1 @ 1,
        TEN1 @ 2,
        TSEL1 @ 3 : 3 [bits],
        WAVE1 @ 6 : 2 [bits],
        MAMP1 @ 8 : 4 [bits],
        DMAEN1 @ 12,
        DMAUDRIE1 @ 13,
        EN2 @ 16,
        BOFF2 @ 17,
        TEN2 @ 18,
        TSEL2 @ 19 : 3 [bits],
        WAVE2 @ 22 : 2 [bits],
        MAMP2 @ 24 : 4 [bits],
        DMAEN2 @ 28,
        DMAUDRIE2 @ 29;
        legacy {
            OUTEN1 = BOFF1,
            OUTEN2 = BOFF2,
        }
    }

    /// Software trigger register.
    pub mod swtrigr {
        SWTRIG1 @ 0,
        SWTRIG2 @ 1,
    }

    pub mod dhr12r1 {
        DACC1DHR @ 0 : 12,
    }

    pub mod dhr12l1 {
        DACC1DHR @ 4 : 12,
    }

    pub mod dhr8r1 {
        DACC1DHR @ 0 : 8,
    }

    pub mod dhr12r2 {
        DACC2DHR @ 0 : 12,
    }

    pub mod dhr12l2 {
        DACC2DHR @ 4 : 12,
    }

    pub mod dhr8r2 {
        DACC2DHR @ 0 : 8,
    }

    /// Dual 12-bit right-aligned data holding register.
    pub mod dhr12rd {
        DACC1DHR @ 0 : 12,
        DACC2DHR @ 16 : 12,
    }

    /// Dual 12-bit left-aligned data holding register.
    pub mod dhr12ld {
        DACC1DHR @ 4 : 12,
        DACC2DHR @ 20 : 12,
    }

    /// Dual 8-bit right-aligned data holding register.
    pub mod dhr8rd {
        DACC1DHR @ 0 : 8,
        DACC2DHR @ 8 : 8,
    }

    pub mod dor1 {
        DACC1DOR @ 0 : 12,
    }

    pub mod dor2 {
        DACC2DOR @ 0 : 12,
    }

    /// Status register.
    pub mod sr {
        DMAUDR1 @ 13,
        DMAUDR2 @ 29,
    }
}

/// Field tables of every DAC register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr, swtrigr, dhr12r1, dhr12l1, dhr8r1, dhr12r2, dhr12l2, dhr8r2, dhr12rd, dhr12ld, dhr8rd,
    dor1, dor2, sr,
];
