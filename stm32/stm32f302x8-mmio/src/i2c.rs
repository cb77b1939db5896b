//! I2C1, I2C2 and I2C3.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "I2C",
    struct_name: I2c,
    size: 0x2c,
    instances: {
        i2c1: I2C1_BASE,
        i2c2: I2C2_BASE,
        i2c3: I2C3_BASE,
    },
    regs: {
        0x00 cr1: u32 = rw,
        0x04 cr2: u32 = rw,
        0x08 oar1: u32 = rw,
        0x0c oar2: u32 = rw,
        0x10 timingr: u32 = rw,
        0x14 timeoutr: u32 = rw,
        0x18 isr: u32 = rw,
        0x1c icr: u32 = wo,
        0x20 pecr: u32 = ro,
        0x24 rxdr: u32 = ro,
        0x28 txdr: u32 = rw,
    },
}

fields! {
    /// Control register 1.
    pub mod cr1 {
        PE @ 0,
        TXIE @ 1,
        RXIE @ 2,
        ADDRIE @ 3,
        NACKIE @ 4,
        STOPIE @ 5,
        TCIE @ 6,
        ERRIE @ 7,
        DNF @ 8 : 4,
        ANFOFF @ 12,
        TXDMAEN @ 14,
        RXDMAEN @ 15,
        SBC @ 16,
        NOSTRETCH @ 17,
        WUPEN @ 18,
        GCEN @ 19,
        SMBHEN @ 20,
        SMBDEN @ 21,
        ALERTEN @ 22,
        PECEN @ 23,
    }

    /// Control register 2.
    pub mod cr2 {
        SADD @ 0 : 10,
        RD_WRN @ 10,
        ADD10 @ 11,
        HEAD10R @ 12,
        START @ 13,
        STOP @ 14,
        NACK @ 15,
        NBYTES @ 16 : 8,
        RELOAD @ 24,
        AUTOEND @ 25,
        PECBYTE @ 26,
    }

    /// Own address register 1.
    pub mod oar1 {
        OA1 @ 0 : 10,
        OA1MODE @ 10,
        OA1EN @ 15,
    }

    /// Own address register 2.
    pub mod oar2 {
        OA2 @ 1 : 7,
        OA2MSK @ 8 : 3 [bits],
        OA2EN @ 15;
        values {
            OA2NOMASK = 0x0000_0000,
            OA2MASK01 = 0x0000_0100,
            OA2MASK02 = 0x0000_0200,
            OA2MASK03 = 0x0000_0300,
            OA2MASK04 = 0x0000_0400,
            OA2MASK05 = 0x0000_0500,
            OA2MASK06 = 0x0000_0600,
            OA2MASK07 = 0x0000_0700,
        }
    }

    /// Timing register.
    pub mod timingr {
        SCLL @ 0 : 8,
        SCLH @ 8 : 8,
        SDADEL @ 16 : 4,
        SCLDEL @ 20 : 4,
        PRESC @ 28 : 4,
    }

    /// Timeout register.
    pub mod timeoutr {
        TIMEOUTA @ 0 : 12,
        TIDLE @ 12,
        TIMOUTEN @ 15,
        TIMEOUTB @ 16 : 12,
        TEXTEN @ 31,
    }

    /// Interrupt and status register.
    pub mod isr {
        TXE @ 0,
        TXIS @ 1,
        RXNE @ 2,
        ADDR @ 3,
        NACKF @ 4,
        STOPF @ 5,
        TC @ 6,
        TCR @ 7,
        BERR @ 8,
        ARLO @ 9,
        OVR @ 10,
        PECERR @ 11,
        TIMEOUT @ 12,
        ALERT @ 13,
        BUSY @ 15,
        DIR @ 16,
        ADDCODE @ 17 : 7,
    }

    /// Interrupt clear register.
    pub mod icr {
        ADDRCF @ 3,
        NACKCF @ 4,
        STOPCF @ 5,
        BERRCF @ 8,
        ARLOCF @ 9,
        OVRCF @ 10,
        PECCF @ 11,
        TIMOUTCF @ 12,
        ALERTCF @ 13,
    }

    pub mod pecr {
        PEC @ 0 : 8,
    }

    pub mod rxdr {
        RXDATA @ 0 : 8,
    }

    pub mod txdr {
        TXDATA @ 0 : 8,
    }
}

/// Field tables of every I2C register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr1, cr2, oar1, oar2, timingr, timeoutr, isr, icr, pecr, rxdr, txdr,
];
