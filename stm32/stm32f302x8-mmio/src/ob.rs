//! Option bytes, as mapped in system memory. Each half-word holds a byte and its complement.
//!
//! They are programmed through the [`Flash`](crate::Flash) interface, so the block is read-only.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "option bytes",
    struct_name: OptionBytes,
    size: 0x10,
    instances: {
        ob: OB_BASE,
    },
    regs: {
        0x00 rdp: u16 = ro,
        0x02 user: u16 = ro,
        0x04 data: [u16; 2] = ro(indexed),
        0x08 wrp: [u16; 4] = ro(indexed),
    },
}

/// `RDP` value selecting read protection level 0.
pub const RDP_LEVEL0: u8 = 0xAA;
/// `RDP` value selecting read protection level 2. Any other value selects level 1.
pub const RDP_LEVEL2: u8 = 0xCC;

fields! {
    /// Read protection option byte.
    #[allow(non_upper_case_globals)]
    pub mod rdp {
        RDP @ 0 : 8,
        nRDP @ 8 : 8,
    }

    /// User option byte.
    #[allow(non_upper_case_globals)]
    pub mod user {
        WDG_SW @ 0,
        nRST_STOP @ 1,
        nRST_STDBY @ 2,
        nBOOT1 @ 4,
        VDDA_MONITOR @ 5,
        SRAM_PE @ 6,
        nUSER @ 8 : 8,
    }

    /// User data option bytes.
    #[allow(non_upper_case_globals)]
    pub mod data {
        DATA @ 0 : 8,
        nDATA @ 8 : 8,
    }

    /// Write protection option bytes.
    #[allow(non_upper_case_globals)]
    pub mod wrp {
        WRP @ 0 : 8,
        nWRP @ 8 : 8,
    }
}

/// Field tables of every option byte.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![rdp, user, data, wrp];
