//! Extended interrupt and event controller.
//!
//! Lines 0 to 31 are controlled by the first register set, lines 32 to 35 by the second. Only the
//! configurable lines have trigger selection, software trigger and pending bits; the direct lines
//! 23 to 28 and 34 to 35 only have mask bits.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "EXTI",
    struct_name: Exti,
    size: 0x38,
    instances: {
        exti: EXTI_BASE,
    },
    regs: {
        0x00 imr: u32 = rw,
        0x04 emr: u32 = rw,
        0x08 rtsr: u32 = rw,
        0x0c ftsr: u32 = rw,
        0x10 swier: u32 = rw,
        0x14 pr: u32 = rw,
        0x18 _reserved0: [u32; 2],
        0x20 imr2: u32 = rw,
        0x24 emr2: u32 = rw,
        0x28 rtsr2: u32 = rw,
        0x2c ftsr2: u32 = rw,
        0x30 swier2: u32 = rw,
        0x34 pr2: u32 = rw,
    },
}

seq_macro::seq!(N in 0..32 {
    fields! {
        /// Interrupt mask register. A set bit unmasks the line's interrupt request.
        pub mod imr {
            #( MR~N @ N, )*
            ;
            legacy {
                #( IM~N = MR~N, )*
            }
        }

        /// Event mask register.
        pub mod emr {
            #( MR~N @ N, )*
            ;
            legacy {
                #( EM~N = MR~N, )*
            }
        }
    }
});

seq_macro::seq!(N in 0..23 {
    fields! {
        /// Rising trigger selection register.
        pub mod rtsr {
            #( TR~N @ N, )*
            TR29 @ 29,
            TR30 @ 30,
            TR31 @ 31;
            legacy {
                #( RT~N = TR~N, )*
                RT29 = TR29,
                RT30 = TR30,
                RT31 = TR31,
            }
        }

        /// Falling trigger selection register.
        pub mod ftsr {
            #( TR~N @ N, )*
            TR29 @ 29,
            TR30 @ 30,
            TR31 @ 31;
            legacy {
                #( FT~N = TR~N, )*
                FT29 = TR29,
                FT30 = TR30,
                FT31 = TR31,
            }
        }

        /// Software interrupt event register.
        pub mod swier {
            #( SWIER~N @ N, )*
            SWIER29 @ 29,
            SWIER30 @ 30,
            SWIER31 @ 31;
            legacy {
                #( SWI~N = SWIER~N, )*
                SWI29 = SWIER29,
                SWI30 = SWIER30,
                SWI31 = SWIER31,
            }
        }

        /// Pending register. Bits are cleared by writing one.
        pub mod pr {
            #( PR~N @ N, )*
            PR29 @ 29,
            PR30 @ 30,
            PR31 @ 31;
            legacy {
                #( PIF~N = PR~N, )*
                PIF29 = PR29,
                PIF30 = PR30,
                PIF31 = PR31,
            }
        }
    }
});

fields! {
    /// Interrupt mask register for lines 32 to 35.
    pub mod imr2 {
        MR32 @ 0,
        MR33 @ 1,
        MR34 @ 2,
        MR35 @ 3;
        legacy {
            IM32 = MR32,
            IM33 = MR33,
            IM34 = MR34,
            IM35 = MR35,
        }
    }

    /// Event mask register for lines 32 to 35.
    pub mod emr2 {
        MR32 @ 0,
        MR33 @ 1,
        MR34 @ 2,
        MR35 @ 3;
        legacy {
            EM32 = MR32,
            EM33 = MR33,
            EM34 = MR34,
            EM35 = MR35,
        }
    }

    pub mod rtsr2 {
        TR32 @ 0,
        TR33 @ 1;
        legacy {
            RT32 = TR32,
            RT33 = TR33,
        }
    }

    pub mod ftsr2 {
        TR32 @ 0,
        TR33 @ 1;
        legacy {
            FT32 = TR32,
            FT33 = TR33,
        }
    }

    pub mod swier2 {
        SWIER32 @ 0,
        SWIER33 @ 1;
        legacy {
            SWI32 = SWIER32,
            SWI33 = SWIER33,
        }
    }

    pub mod pr2 {
        PR32 @ 0,
        PR33 @ 1;
        legacy {
            PIF32 = PR32,
            PIF33 = PR33,
        }
    }
}

/// Field tables of every EXTI register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    imr, emr, rtsr, ftsr, swier, pr, imr2, emr2, rtsr2, ftsr2, swier2, pr2,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_bits() {
        assert_eq!(imr::MR0.mask(), 0x0000_0001);
        assert_eq!(imr::MR31.mask(), 0x8000_0000);
        assert_eq!(rtsr::TR22.mask(), 0x0040_0000);
        assert_eq!(pr::PR29.mask(), 0x2000_0000);
        assert_eq!(imr::FIELDS.len(), 32);
        assert_eq!(rtsr::FIELDS.len(), 26);
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(imr::IM0, imr::MR0);
        assert_eq!(emr::EM17, emr::MR17);
        assert_eq!(ftsr::FT31, ftsr::TR31);
        assert_eq!(pr::PIF5, pr::PR5);
    }
}
