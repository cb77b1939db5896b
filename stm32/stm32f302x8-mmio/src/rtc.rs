//! Real-time clock and backup registers.
//!
//! Calendar registers hold BCD digits; each tens and units digit is a separate field.

use register_field::{fields, register_fields, RegisterFields};

/// Number of backup registers.
pub const BACKUP_REGISTER_COUNT: usize = 16;

/// The two `WPR` writes that disable write protection.
pub const WRITE_PROTECTION_KEYS: [u32; 2] = [0xCA, 0x53];

mmio_device! {
    doc_name: "RTC",
    struct_name: Rtc,
    size: 0x90,
    instances: {
        rtc: RTC_BASE,
    },
    regs: {
        0x00 tr: u32 = rw,
        0x04 dr: u32 = rw,
        0x08 cr: u32 = rw,
        0x0c isr: u32 = rw,
        0x10 prer: u32 = rw,
        0x14 wutr: u32 = rw,
        0x18 _reserved0: u32,
        0x1c alrmar: u32 = rw,
        0x20 alrmbr: u32 = rw,
        0x24 wpr: u32 = wo,
        0x28 ssr: u32 = ro,
        0x2c shiftr: u32 = wo,
        0x30 tstr: u32 = ro,
        0x34 tsdr: u32 = ro,
        0x38 tsssr: u32 = ro,
        0x3c calr: u32 = rw,
        0x40 tafcr: u32 = rw,
        0x44 alrmassr: u32 = rw,
        0x48 alrmbssr: u32 = rw,
        0x4c _reserved1: u32,
        0x50 bkpr: [u32; 16] = rw(indexed),
    },
}

fields! {
    /// Time register.
    pub mod tr {
        SU @ 0 : 4 [bits],
        ST @ 4 : 3 [bits],
        MNU @ 8 : 4 [bits],
        MNT @ 12 : 3 [bits],
        HU @ 16 : 4 [bits],
        HT @ 20 : 2 [bits],
        PM @ 22,
    }

    /// Date register.
    pub mod dr {
        DU @ 0 : 4 [bits],
        DT @ 4 : 2 [bits],
        MU @ 8 : 4 [bits],
        MT @ 12,
        WDU @ 13 : 3 [bits],
        YU @ 16 : 4 [bits],
        YT @ 20 : 4 [bits],
    }

    /// Control register.
    pub mod cr {
        WUCKSEL @ 0 : 3 [bits],
        TSEDGE @ 3,
        REFCKON @ 4,
        BYPSHAD @ 5,
        FMT @ 6,
        ALRAE @ 8,
        ALRBE @ 9,
        WUTE @ 10,
        TSE @ 11,
        ALRAIE @ 12,
        ALRBIE @ 13,
        WUTIE @ 14,
        TSIE @ 15,
        ADD1H @ 16,
        SUB1H @ 17,
        BKP @ 18,
        COSEL @ 19,
        POL @ 20,
        OSEL @ 21 : 2 [bits],
        COE @ 23;
        legacy {
            BCK = BKP,
        }
    }

    /// Initialization and status register.
    pub mod isr {
        ALRAWF @ 0,
        ALRBWF @ 1,
        WUTWF @ 2,
        SHPF @ 3,
        INITS @ 4,
        RSF @ 5,
        INITF @ 6,
        INIT @ 7,
        ALRAF @ 8,
        ALRBF @ 9,
        WUTF @ 10,
        TSF @ 11,
        TSOVF @ 12,
        TAMP1F @ 13,
        TAMP2F @ 14,
        TAMP3F @ 15,
        RECALPF @ 16,
    }

    /// Prescaler register.
    pub mod prer {
        PREDIV_S @ 0 : 15,
        PREDIV_A @ 16 : 7,
    }

    /// Wakeup timer register.
    pub mod wutr {
        WUT @ 0 : 16,
    }

    /// Alarm registers A and B.
    pub mod alrmr {
        SU @ 0 : 4 [bits],
        ST @ 4 : 3 [bits],
        MSK1 @ 7,
        MNU @ 8 : 4 [bits],
        MNT @ 12 : 3 [bits],
        MSK2 @ 15,
        HU @ 16 : 4 [bits],
        HT @ 20 : 2 [bits],
        PM @ 22,
        MSK3 @ 23,
        DU @ 24 : 4 [bits],
        DT @ 28 : 2 [bits],
        WDSEL @ 30,
        MSK4 @ 31,
    }

    /// Write protection register.
    pub mod wpr {
        KEY @ 0 : 8,
    }

    /// Sub-second register.
    pub mod ssr {
        SS @ 0 : 16,
    }

    /// Shift control register.
    pub mod shiftr {
        SUBFS @ 0 : 15,
        ADD1S @ 31,
    }

    /// Time stamp time register.
    pub mod tstr {
        SU @ 0 : 4 [bits],
        ST @ 4 : 3 [bits],
        MNU @ 8 : 4 [bits],
        MNT @ 12 : 3 [bits],
        HU @ 16 : 4 [bits],
        HT @ 20 : 2 [bits],
        PM @ 22,
    }

    /// Time stamp date register.
    pub mod tsdr {
        DU @ 0 : 4 [bits],
        DT @ 4 : 2 [bits],
        MU @ 8 : 4 [bits],
        MT @ 12,
        WDU @ 13 : 3 [bits],
    }

    /// Time stamp sub-second register.
    pub mod tsssr {
        SS @ 0 : 16,
    }

    /// Calibration register.
    pub mod calr {
        CALM @ 0 : 9 [bits],
        CALW16 @ 13,
        CALW8 @ 14,
        CALP @ 15,
    }

    /// Tamper and alternate function configuration register.
    pub mod tafcr {
        TAMP1E @ 0,
        TAMP1TRG @ 1,
        TAMPIE @ 2,
        TAMP2E @ 3,
        TAMP2TRG @ 4,
        TAMP3E @ 5,
        TAMP3TRG @ 6,
        TAMPTS @ 7,
        TAMPFREQ @ 8 : 3 [bits],
        TAMPFLT @ 11 : 2 [bits],
        TAMPPRCH @ 13 : 2 [bits],
        TAMPPUDIS @ 15,
        PC13VALUE @ 18,
        PC13MODE @ 19,
        PC14VALUE @ 20,
        PC14MODE @ 21,
        PC15VALUE @ 22,
        PC15MODE @ 23;
        legacy {
            ALARMOUTTYPE = PC13VALUE,
        }
    }

    /// Alarm sub-second registers A and B.
    pub mod alrmssr {
        SS @ 0 : 15,
        MASKSS @ 24 : 4 [bits],
    }

    /// Backup registers.
    pub mod bkpr {
        BKP @ 0 : 32,
    }
}

/// Field tables of every RTC register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    tr, dr, cr, isr, prer, wutr, "alrmar" => alrmr, "alrmbr" => alrmr, wpr, ssr, shiftr, tstr,
    tsdr, tsssr, calr, tafcr, "alrmassr" => alrmssr, "alrmbssr" => alrmssr, bkpr,
];
