//! Operational amplifier OPAMP2.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "OPAMP",
    struct_name: Opamp,
    size: 0x04,
    instances: {
        opamp2: OPAMP2_BASE,
    },
    regs: {
        0x00 csr: u32 = rw,
    },
}

fields! {
    /// Control and status register.
    #[allow(non_upper_case_globals)]
    pub mod csr {
        OPAMPxEN @ 0,
        FORCEVP @ 1,
        VPSEL @ 2 : 2 [bits],
        VMSEL @ 5 : 2 [bits],
        TCMEN @ 7,
        VMSSEL @ 8,
        VPSSEL @ 9 : 2 [bits],
        CALON @ 11,
        CALSEL @ 12 : 2 [bits],
        PGGAIN @ 14 : 4 [bits],
        USERTRIM @ 18,
        TRIMOFFSETP @ 19 : 5,
        TRIMOFFSETN @ 24 : 5,
        TSTREF @ 29,
        OUTCAL @ 30,
        LOCK @ 31;
        values {
            PGGAIN_X2 = 0x0000_0000,
            PGGAIN_X4 = 0x0000_4000,
            PGGAIN_X8 = 0x0000_8000,
            PGGAIN_X16 = 0x0000_c000,
        }
    }
}

/// Field tables of the OPAMP register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![csr];
