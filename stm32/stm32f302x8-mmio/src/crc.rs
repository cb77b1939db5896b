//! CRC calculation unit.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "CRC",
    struct_name: Crc,
    size: 0x18,
    instances: {
        crc: CRC_BASE,
    },
    regs: {
        0x00 dr: u32 = rw,
        0x04 idr: u8 = rw,
        0x05 _reserved0: u8,
        0x06 _reserved1: u16,
        0x08 cr: u32 = rw,
        0x0c _reserved2: u32,
        0x10 init: u32 = rw,
        0x14 pol: u32 = rw,
    },
}

fields! {
    pub mod dr {
        DR @ 0 : 32,
    }

    /// Independent data register, a general-purpose byte the unit does not use.
    pub mod idr {
        IDR @ 0 : 8,
    }

    /// Control register.
    pub mod cr {
        RESET @ 0,
        POLYSIZE @ 3 : 2 [bits],
        REV_IN @ 5 : 2 [bits],
        REV_OUT @ 7;
        values {
            POLYSIZE_32 = 0x0000_0000,
            POLYSIZE_16 = 0x0000_0008,
            POLYSIZE_8 = 0x0000_0010,
            POLYSIZE_7 = 0x0000_0018,
        }
    }

    pub mod init {
        INIT @ 0 : 32,
    }

    pub mod pol {
        POL @ 0 : 32,
    }
}

/// Field tables of every CRC register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![dr, idr, cr, init, pol];
