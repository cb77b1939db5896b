//! Analog comparators COMP2, COMP4 and COMP6. Each is a single control and status register.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "COMP",
    struct_name: Comp,
    size: 0x04,
    instances: {
        comp2: COMP2_BASE,
        comp4: COMP4_BASE,
        comp6: COMP6_BASE,
    },
    regs: {
        0x00 csr: u32 = rw,
    },
}

fields! {
    /// Control and status register.
    #[allow(non_upper_case_globals)]
    pub mod csr {
        COMPxEN @ 0,
        COMPxSW1 @ 1,
        COMPxMODE @ 2 : 2 [bits],
        /// Inverting input selection. Bit 3 of the selection lives at bit 22, see
        /// [`COMPxINSEL_3`].
        COMPxINSEL @ 4 : 3 [bits],
        COMPxNONINSEL @ 7,
        COMPxWNDWEN @ 9,
        COMPxOUTSEL @ 10 : 4 [bits],
        COMPxPOL @ 15,
        COMPxHYST @ 16 : 2 [bits],
        COMPxBLANKING @ 18 : 3 [bits],
        COMPxOUT @ 30,
        COMPxLOCK @ 31;
        values {
            /// Bit 3 of the inverting input selection.
            COMPxINSEL_3 = 0x0040_0000,
            COMPxINSEL_1_4VREFINT = 0x0000_0000,
            COMPxINSEL_1_2VREFINT = 0x0000_0010,
            COMPxINSEL_3_4VREFINT = 0x0000_0020,
            COMPxINSEL_VREFINT = 0x0000_0030,
            COMPxINSEL_DAC1_CH1 = 0x0000_0040,
            COMPxINSEL_IO1 = 0x0000_0060,
            COMPxINSEL_IO2 = 0x0000_0070,
        }
    }
}

/// Field tables of the comparator register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![csr];
