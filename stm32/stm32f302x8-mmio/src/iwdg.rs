//! Independent watchdog.

use register_field::{fields, register_fields, RegisterFields};

/// `KR` value that reloads the counter.
pub const KEY_RELOAD: u32 = 0xAAAA;
/// `KR` value that unlocks `PR`, `RLR` and `WINR`.
pub const KEY_WRITE_ACCESS: u32 = 0x5555;
/// `KR` value that starts the watchdog.
pub const KEY_ENABLE: u32 = 0xCCCC;

mmio_device! {
    doc_name: "IWDG",
    struct_name: Iwdg,
    size: 0x14,
    instances: {
        iwdg: IWDG_BASE,
    },
    regs: {
        0x00 kr: u32 = wo,
        0x04 pr: u32 = rw,
        0x08 rlr: u32 = rw,
        0x0c sr: u32 = ro,
        0x10 winr: u32 = rw,
    },
}

fields! {
    /// Key register.
    pub mod kr {
        KEY @ 0 : 16,
    }

    /// Prescaler register, dividing the LSI clock by `4 << PR`.
    pub mod pr {
        PR @ 0 : 3 [bits],
    }

    /// Reload register.
    pub mod rlr {
        RL @ 0 : 12,
    }

    /// Status register. Each flag is set while an update of the matching register is ongoing.
    pub mod sr {
        PVU @ 0,
        RVU @ 1,
        WVU @ 2,
    }

    /// Window register.
    pub mod winr {
        WIN @ 0 : 12,
    }
}

/// Field tables of every IWDG register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![kr, pr, rlr, sr, winr];
