//! System window watchdog.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "WWDG",
    struct_name: Wwdg,
    size: 0x0c,
    instances: {
        wwdg: WWDG_BASE,
    },
    regs: {
        0x00 cr: u32 = rw,
        0x04 cfr: u32 = rw,
        0x08 sr: u32 = rw,
    },
}

fields! {
    /// Control register.
    pub mod cr {
        T @ 0 : 7 [bits],
        WDGA @ 7;
        values {
            T0 = T_0,
            T1 = T_1,
            T2 = T_2,
            T3 = T_3,
            T4 = T_4,
            T5 = T_5,
            T6 = T_6,
        }
    }

    /// Configuration register.
    pub mod cfr {
        W @ 0 : 7 [bits],
        WDGTB @ 7 : 2 [bits],
        EWI @ 9;
        values {
            W0 = W_0,
            W1 = W_1,
            W2 = W_2,
            W3 = W_3,
            W4 = W_4,
            W5 = W_5,
            W6 = W_6,
            WDGTB0 = WDGTB_0,
            WDGTB1 = WDGTB_1,
        }
    }

    /// Status register.
    pub mod sr {
        EWIF @ 0,
    }
}

/// Field tables of every WWDG register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![cr, cfr, sr];
