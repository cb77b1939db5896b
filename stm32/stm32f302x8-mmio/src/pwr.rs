//! Power controller.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "PWR",
    struct_name: Pwr,
    size: 0x08,
    instances: {
        pwr: PWR_BASE,
    },
    regs: {
        0x00 cr: u32 = rw,
        0x04 csr: u32 = rw,
    },
}

fields! {
    /// Power control register.
    pub mod cr {
        LPDS @ 0,
        PDDS @ 1,
        CWUF @ 2,
        CSBF @ 3,
        PVDE @ 4,
        PLS @ 5 : 3 [bits],
        DBP @ 8;
        values {
            PLS_LEV0 = 0x0000_0000,
            PLS_LEV1 = 0x0000_0020,
            PLS_LEV2 = 0x0000_0040,
            PLS_LEV3 = 0x0000_0060,
            PLS_LEV4 = 0x0000_0080,
            PLS_LEV5 = 0x0000_00a0,
            PLS_LEV6 = 0x0000_00c0,
            PLS_LEV7 = 0x0000_00e0,
        }
    }

    /// Power control and status register.
    pub mod csr {
        WUF @ 0,
        SBF @ 1,
        PVDO @ 2,
        VREFINTRDYF @ 3,
        EWUP1 @ 8,
        EWUP2 @ 9,
        EWUP3 @ 10,
    }
}

/// Field tables of both PWR registers.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![cr, csr];
