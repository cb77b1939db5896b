//! General-purpose I/O ports A, B, C, D and F.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "GPIO",
    struct_name: Gpio,
    size: 0x2c,
    instances: {
        gpioa: GPIOA_BASE,
        gpiob: GPIOB_BASE,
        gpioc: GPIOC_BASE,
        gpiod: GPIOD_BASE,
        gpiof: GPIOF_BASE,
    },
    regs: {
        0x00 moder: u32 = rw,
        0x04 otyper: u32 = rw,
        0x08 ospeedr: u32 = rw,
        0x0c pupdr: u32 = rw,
        0x10 idr: u32 = ro,
        0x14 odr: u32 = rw,
        0x18 bsrr: u32 = wo,
        0x1c lckr: u32 = rw,
        0x20 afr: [u32; 2] = rw(indexed),
        0x28 brr: u32 = wo,
    },
}

// Two-bit pin mode values, unshifted.
pub const MODE_INPUT: u32 = 0b00;
pub const MODE_OUTPUT: u32 = 0b01;
pub const MODE_ALTERNATE: u32 = 0b10;
pub const MODE_ANALOG: u32 = 0b11;

pub const OSPEED_LOW: u32 = 0b00;
pub const OSPEED_MEDIUM: u32 = 0b01;
pub const OSPEED_HIGH: u32 = 0b11;

pub const PUPD_NONE: u32 = 0b00;
pub const PUPD_PULL_UP: u32 = 0b01;
pub const PUPD_PULL_DOWN: u32 = 0b10;

/// The `LCKK` write sequence that freezes the pins selected by `LCK0` to `LCK15`.
pub const LOCK_SEQUENCE: [u32; 3] = [1, 0, 1];

seq_macro::seq!(N in 0..16 {
    fields! {
        /// Port mode register, two bits per pin.
        pub mod moder {
            #( MODER~N @ (N * 2) : 2 [bits], )*
        }

        /// Output type register. A set bit selects open drain.
        pub mod otyper {
            #( OT~N @ N, )*
            ;
            legacy {
                #( OT_~N = OT~N, )*
            }
        }

        /// Output speed register, two bits per pin.
        pub mod ospeedr {
            #( OSPEEDR~N @ (N * 2) : 2 [bits], )*
        }

        /// Pull-up/pull-down register, two bits per pin.
        pub mod pupdr {
            #( PUPDR~N @ (N * 2) : 2 [bits], )*
        }

        /// Input data register.
        pub mod idr {
            #( IDR~N @ N, )*
        }

        /// Output data register.
        pub mod odr {
            #( ODR~N @ N, )*
        }

        /// Bit set/reset register. Set bits in the low half drive pins high, in the high half low.
        pub mod bsrr {
            #( BS~N @ N, )*
            #( BR~N @ (N + 16), )*
            ;
            legacy {
                #( BS_~N = BS~N, )*
                #( BR_~N = BR~N, )*
            }
        }

        /// Configuration lock register.
        pub mod lckr {
            #( LCK~N @ N, )*
            LCKK @ 16,
        }

        /// Bit reset register.
        pub mod brr {
            #( BR~N @ N, )*
            ;
            legacy {
                #( BR_~N = BR~N, )*
            }
        }
    }
});

seq_macro::seq!(N in 0..8 {
    fields! {
        /// Alternate function low register, pins 0 to 7.
        pub mod afrl {
            #( AFRL~N @ (N * 4) : 4 [bits], )*
        }

        /// Alternate function high register, pins 8 to 15.
        pub mod afrh {
            #( AFRH~N @ (N * 4) : 4 [bits], )*
        }
    }
});

/// Field tables of every GPIO register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    moder, otyper, ospeedr, pupdr, idr, odr, bsrr, lckr, "afr0" => afrl, "afr1" => afrh, brr,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bit_fields() {
        assert_eq!(moder::MODER0.mask(), 0x0000_0003);
        assert_eq!(moder::MODER15.mask(), 0xc000_0000);
        assert_eq!(moder::MODER3_1, 0x0000_0080);
        assert_eq!(moder::MODER5.value(MODE_OUTPUT), 0x0000_0400);
        assert_eq!(pupdr::PUPDR7.value(PUPD_PULL_DOWN), 0x0000_8000);
    }

    #[test]
    fn test_bsrr() {
        assert_eq!(bsrr::BS0.mask(), 0x0000_0001);
        assert_eq!(bsrr::BR0.mask(), 0x0001_0000);
        assert_eq!(bsrr::BR15.mask(), 0x8000_0000);
        assert_eq!(bsrr::BS_3, bsrr::BS3);
        assert_eq!(bsrr::BR_3, bsrr::BR3);
        assert_eq!(bsrr::FIELDS.len(), 32);
    }

    #[test]
    fn test_alternate_function_fields() {
        assert_eq!(afrl::AFRL7.mask(), 0xf000_0000);
        assert_eq!(afrh::AFRH0.value(7), 0x0000_0007);
        assert_eq!(afrh::AFRH2_3, 0x0000_0800);
    }
}
