//! Touch sensing controller.
//!
//! Eight analog I/O groups of four I/Os each. In the I/O control registers, `Gx_IOy` is bit
//! `(x - 1) * 4 + (y - 1)`.

use register_field::{fields, register_fields, RegisterFields};

/// Number of analog I/O groups.
pub const GROUP_COUNT: usize = 8;

mmio_device! {
    doc_name: "TSC",
    struct_name: Tsc,
    size: 0x54,
    instances: {
        tsc: TSC_BASE,
    },
    regs: {
        0x00 cr: u32 = rw,
        0x04 ier: u32 = rw,
        0x08 icr: u32 = rw,
        0x0c isr: u32 = ro,
        0x10 iohcr: u32 = rw,
        0x14 _reserved0: u32,
        0x18 ioascr: u32 = rw,
        0x1c _reserved1: u32,
        0x20 ioscr: u32 = rw,
        0x24 _reserved2: u32,
        0x28 ioccr: u32 = rw,
        0x2c _reserved3: u32,
        0x30 iogcsr: u32 = rw,
        0x34 iogcr: [u32; 8] = ro(indexed),
    },
}

fields! {
    /// Control register.
    pub mod cr {
        TSCE @ 0,
        START @ 1,
        AM @ 2,
        SYNCPOL @ 3,
        IODEF @ 4,
        MCV @ 5 : 3 [bits],
        PGPSC @ 12 : 3 [bits],
        SSPSC @ 15,
        SSE @ 16,
        SSD @ 17 : 7 [bits],
        CTPL @ 24 : 4 [bits],
        CTPH @ 28 : 4 [bits],
    }

    pub mod ier {
        EOAIE @ 0,
        MCEIE @ 1,
    }

    pub mod icr {
        EOAIC @ 0,
        MCEIC @ 1,
    }

    pub mod isr {
        EOAF @ 0,
        MCEF @ 1,
    }

    /// I/O group counter registers.
    pub mod iogcr {
        CNT @ 0 : 14,
    }
}

seq_macro::seq!(N in 1..=8 {
    paste::paste! {
        fields! {
            /// I/O hysteresis control register. A set bit keeps the Schmitt trigger enabled.
            pub mod iohcr {
                #(
                    [<G N _IO1>] @ ((N - 1) * 4),
                    [<G N _IO2>] @ ((N - 1) * 4 + 1),
                    [<G N _IO3>] @ ((N - 1) * 4 + 2),
                    [<G N _IO4>] @ ((N - 1) * 4 + 3),
                )*
            }

            /// I/O analog switch control register.
            pub mod ioascr {
                #(
                    [<G N _IO1>] @ ((N - 1) * 4),
                    [<G N _IO2>] @ ((N - 1) * 4 + 1),
                    [<G N _IO3>] @ ((N - 1) * 4 + 2),
                    [<G N _IO4>] @ ((N - 1) * 4 + 3),
                )*
            }

            /// I/O sampling control register.
            pub mod ioscr {
                #(
                    [<G N _IO1>] @ ((N - 1) * 4),
                    [<G N _IO2>] @ ((N - 1) * 4 + 1),
                    [<G N _IO3>] @ ((N - 1) * 4 + 2),
                    [<G N _IO4>] @ ((N - 1) * 4 + 3),
                )*
            }

            /// I/O channel control register.
            pub mod ioccr {
                #(
                    [<G N _IO1>] @ ((N - 1) * 4),
                    [<G N _IO2>] @ ((N - 1) * 4 + 1),
                    [<G N _IO3>] @ ((N - 1) * 4 + 2),
                    [<G N _IO4>] @ ((N - 1) * 4 + 3),
                )*
            }

            /// I/O group control status register.
            pub mod iogcsr {
                #( [<G N E>] @ (N - 1), )*
                #( [<G N S>] @ (N + 15), )*
            }
        }
    }
});

/// Field tables of every TSC register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr, ier, icr, isr, iohcr, ioascr, ioscr, ioccr, iogcsr, iogcr,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_io_bits() {
        assert_eq!(iohcr::G1_IO1.mask(), 0x0000_0001);
        assert_eq!(ioccr::G2_IO3.mask(), 0x0000_0040);
        assert_eq!(ioscr::G8_IO4.mask(), 0x8000_0000);
        assert_eq!(ioascr::FIELDS.len(), 32);
    }

    #[test]
    fn test_group_status() {
        assert_eq!(iogcsr::G1E.mask(), 0x0000_0001);
        assert_eq!(iogcsr::G8E.mask(), 0x0000_0080);
        assert_eq!(iogcsr::G1S.mask(), 0x0001_0000);
        assert_eq!(iogcsr::G8S.mask(), 0x0080_0000);
    }
}
