//! Embedded flash memory interface.

use register_field::{fields, register_fields, RegisterFields};

/// First key of the unlock sequence written to `KEYR`.
pub const KEY1: u32 = 0x4567_0123;
/// Second key of the unlock sequence written to `KEYR`.
pub const KEY2: u32 = 0xCDEF_89AB;
/// First key of the option byte unlock sequence written to `OPTKEYR`.
pub const OPTKEY1: u32 = KEY1;
/// Second key of the option byte unlock sequence written to `OPTKEYR`.
pub const OPTKEY2: u32 = KEY2;

mmio_device! {
    doc_name: "FLASH",
    struct_name: Flash,
    size: 0x24,
    instances: {
        flash: FLASH_R_BASE,
    },
    regs: {
        0x00 acr: u32 = rw,
        0x04 keyr: u32 = wo,
        0x08 optkeyr: u32 = wo,
        0x0c sr: u32 = rw,
        0x10 cr: u32 = rw,
        0x14 ar: u32 = wo,
        0x18 _reserved0: u32,
        0x1c obr: u32 = ro,
        0x20 wrpr: u32 = ro,
    },
}

fields! {
    /// Access control register.
    pub mod acr {
        LATENCY @ 0 : 3 [bits],
        HLFCYA @ 3,
        PRFTBE @ 4,
        PRFTBS @ 5;
        values {
            LATENCY_ZERO = 0x0000_0000,
            LATENCY_ONE = 0x0000_0001,
            LATENCY_TWO = 0x0000_0002,
        }
    }

    pub mod keyr {
        FKEYR @ 0 : 32,
    }

    pub mod optkeyr {
        OPTKEYR @ 0 : 32,
    }

    /// Status register. Error and end-of-operation flags are cleared by writing one.
    pub mod sr {
        BSY @ 0,
        PGERR @ 2,
        WRPERR @ 4,
        EOP @ 5;
        legacy {
            WRPRTERR = WRPERR,
        }
    }

    /// Control register.
    pub mod cr {
        PG @ 0,
        PER @ 1,
        MER @ 2,
        OPTPG @ 4,
        OPTER @ 5,
        STRT @ 6,
        LOCK @ 7,
        OPTWRE @ 9,
        ERRIE @ 10,
        EOPIE @ 12,
        OBL_LAUNCH @ 13,
    }

    /// Address register, the page to erase.
    pub mod ar {
        FAR @ 0 : 32,
    }

    /// Option byte register, the option bytes as loaded at reset.
    #[allow(non_upper_case_globals)]
    pub mod obr {
        OPTERR @ 0,
        RDPRT @ 1 : 2 [bits],
        IWDG_SW @ 8,
        nRST_STOP @ 9,
        nRST_STDBY @ 10,
        nBOOT1 @ 12,
        VDDA_MONITOR @ 13,
        SRAM_PE @ 14,
        DATA0 @ 16 : 8,
        DATA1 @ 24 : 8;
        unions {
            /// The user option byte, bits 8 to 15.
            USER = register_field::Field::new(8, 8),
        };
        legacy {
            WDG_SW = IWDG_SW,
        };
        values {
            RDPRT_LEVEL0 = 0x0000_0000,
            RDPRT_LEVEL1 = 0x0000_0002,
            RDPRT_LEVEL2 = 0x0000_0006,
        }
    }

    /// Write protection register.
    pub mod wrpr {
        WRP @ 0 : 32,
    }
}

/// Field tables of every flash interface register.
pub const REGISTER_FIELDS: &[RegisterFields] =
    register_fields![acr, keyr, optkeyr, sr, cr, ar, obr, wrpr];
