//! Timers.
//!
//! TIM1 is the advanced-control timer and its register block is a superset of every other timer
//! on the device, so one block serves all of them. Registers a simpler timer lacks read as zero.
//!
//! The capture/compare mode registers have different layouts in output compare and input capture
//! mode. Both layouts are declared; the output layout is the one listed in [`REGISTER_FIELDS`].

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "TIM",
    struct_name: Tim,
    size: 0x60,
    instances: {
        tim1: TIM1_BASE,
        tim2: TIM2_BASE,
        tim6: TIM6_BASE,
        tim15: TIM15_BASE,
        tim16: TIM16_BASE,
        tim17: TIM17_BASE,
    },
    regs: {
        0x00 cr1: u32 = rw,
        0x04 cr2: u32 = rw,
        0x08 smcr: u32 = rw,
        0x0c dier: u32 = rw,
        0x10 sr: u32 = rw,
        0x14 egr: u32 = wo,
        0x18 ccmr1: u32 = rw,
        0x1c ccmr2: u32 = rw,
        0x20 ccer: u32 = rw,
        0x24 cnt: u32 = rw,
        0x28 psc: u32 = rw,
        0x2c arr: u32 = rw,
        0x30 rcr: u32 = rw,
        0x34 ccr1: u32 = rw,
        0x38 ccr2: u32 = rw,
        0x3c ccr3: u32 = rw,
        0x40 ccr4: u32 = rw,
        0x44 bdtr: u32 = rw,
        0x48 dcr: u32 = rw,
        0x4c dmar: u32 = rw,
        0x50 or: u32 = rw,
        0x54 ccmr3: u32 = rw,
        0x58 ccr5: u32 = rw,
        0x5c ccr6: u32 = rw,
    },
}

fields! {
    /// Control register 1.
    pub mod cr1 {
        CEN @ 0,
        UDIS @ 1,
        URS @ 2,
        OPM @ 3,
        DIR @ 4,
        CMS @ 5 : 2 [bits],
        ARPE @ 7,
        CKD @ 8 : 2 [bits],
        UIFREMAP @ 11,
    }

    /// Control register 2.
    pub mod cr2 {
        CCPC @ 0,
        CCUS @ 2,
        CCDS @ 3,
        MMS @ 4 : 3 [bits],
        TI1S @ 7,
        OIS1 @ 8,
        OIS1N @ 9,
        OIS2 @ 10,
        OIS2N @ 11,
        OIS3 @ 12,
        OIS3N @ 13,
        OIS4 @ 14,
        OIS5 @ 16,
        OIS6 @ 18,
        MMS2 @ 20 : 4 [bits],
    }

    /// Slave mode control register.
    ///
    /// The slave mode selection is four bits wide but its top bit sits apart from the others, at
    /// bit 16. It is only available as the mask [`SMS_3`](smcr::SMS_3).
    pub mod smcr {
        SMS @ 0 : 3 [bits],
        OCCS @ 3,
        TS @ 4 : 3 [bits],
        MSM @ 7,
        ETF @ 8 : 4 [bits],
        ETPS @ 12 : 2 [bits],
        ECE @ 14,
        ETP @ 15;
        values {
            SMS_3 = 0x0001_0000,
        }
    }

    /// DMA/interrupt enable register.
    pub mod dier {
        UIE @ 0,
        CC1IE @ 1,
        CC2IE @ 2,
        CC3IE @ 3,
        CC4IE @ 4,
        COMIE @ 5,
        TIE @ 6,
        BIE @ 7,
        UDE @ 8,
        CC1DE @ 9,
        CC2DE @ 10,
        CC3DE @ 11,
        CC4DE @ 12,
        COMDE @ 13,
        TDE @ 14,
    }

    /// Status register. Flags are cleared by writing zero.
    pub mod sr {
        UIF @ 0,
        CC1IF @ 1,
        CC2IF @ 2,
        CC3IF @ 3,
        CC4IF @ 4,
        COMIF @ 5,
        TIF @ 6,
        BIF @ 7,
        B2IF @ 8,
        CC1OF @ 9,
        CC2OF @ 10,
        CC3OF @ 11,
        CC4OF @ 12,
        CC5IF @ 16,
        CC6IF @ 17,
    }

    /// Event generation register.
    pub mod egr {
        UG @ 0,
        CC1G @ 1,
        CC2G @ 2,
        CC3G @ 3,
        CC4G @ 4,
        COMG @ 5,
        TG @ 6,
        BG @ 7,
        B2G @ 8,
    }

    /// Capture/compare mode register 1 in output compare mode.
    pub mod ccmr1_output {
        CC1S @ 0 : 2 [bits],
        OC1FE @ 2,
        OC1PE @ 3,
        OC1M @ 4 : 3 [bits],
        OC1CE @ 7,
        CC2S @ 8 : 2 [bits],
        OC2FE @ 10,
        OC2PE @ 11,
        OC2M @ 12 : 3 [bits],
        OC2CE @ 15;
        values {
            OC1M_3 = 0x0001_0000,
            OC2M_3 = 0x0100_0000,
        }
    }

    /// Capture/compare mode register 1 in input capture mode.
    pub mod ccmr1_input {
        CC1S @ 0 : 2 [bits],
        IC1PSC @ 2 : 2 [bits],
        IC1F @ 4 : 4 [bits],
        CC2S @ 8 : 2 [bits],
        IC2PSC @ 10 : 2 [bits],
        IC2F @ 12 : 4 [bits],
    }

    /// Capture/compare mode register 2 in output compare mode.
    pub mod ccmr2_output {
        CC3S @ 0 : 2 [bits],
        OC3FE @ 2,
        OC3PE @ 3,
        OC3M @ 4 : 3 [bits],
        OC3CE @ 7,
        CC4S @ 8 : 2 [bits],
        OC4FE @ 10,
        OC4PE @ 11,
        OC4M @ 12 : 3 [bits],
        OC4CE @ 15;
        values {
            OC3M_3 = 0x0001_0000,
            OC4M_3 = 0x0100_0000,
        }
    }

    /// Capture/compare mode register 2 in input capture mode.
    pub mod ccmr2_input {
        CC3S @ 0 : 2 [bits],
        IC3PSC @ 2 : 2 [bits],
        IC3F @ 4 : 4 [bits],
        CC4S @ 8 : 2 [bits],
        IC4PSC @ 10 : 2 [bits],
        IC4F @ 12 : 4 [bits],
    }

    /// Capture/compare enable register.
    pub mod ccer {
        CC1E @ 0,
        CC1P @ 1,
        CC1NE @ 2,
        CC1NP @ 3,
        CC2E @ 4,
        CC2P @ 5,
        CC2NE @ 6,
        CC2NP @ 7,
        CC3E @ 8,
        CC3P @ 9,
        CC3NE @ 10,
        CC3NP @ 11,
        CC4E @ 12,
        CC4P @ 13,
        CC4NP @ 15,
        CC5E @ 16,
        CC5P @ 17,
        CC6E @ 20,
        CC6P @ 21,
    }

    /// Counter.
    ///
    /// With `UIFREMAP` set in `CR1`, bit 31 reads back a copy of `UIF` instead of counter bit 31.
    pub mod cnt {
        CNT @ 0 : 32;
        unions {
            UIFCPY = register_field::Field::bit(31),
        }
    }

    pub mod psc {
        PSC @ 0 : 16,
    }

    pub mod arr {
        ARR @ 0 : 32,
    }

    /// Repetition counter register.
    pub mod rcr {
        REP @ 0 : 16,
    }

    pub mod ccr1 {
        CCR1 @ 0 : 16,
    }

    pub mod ccr2 {
        CCR2 @ 0 : 16,
    }

    pub mod ccr3 {
        CCR3 @ 0 : 16,
    }

    pub mod ccr4 {
        CCR4 @ 0 : 16,
    }

    /// Break and dead-time register.
    pub mod bdtr {
        DTG @ 0 : 8 [bits],
        LOCK @ 8 : 2 [bits],
        OSSI @ 10,
        OSSR @ 11,
        BKE @ 12,
        BKP @ 13,
        AOE @ 14,
        MOE @ 15,
        BKF @ 16 : 4 [bits],
        BK2F @ 20 : 4 [bits],
        BK2E @ 24,
        BK2P @ 25,
    }

    /// DMA control register.
    pub mod dcr {
        DBA @ 0 : 5 [bits],
        DBL @ 8 : 5 [bits],
    }

    /// DMA address for full transfer.
    pub mod dmar {
        DMAB @ 0 : 16,
    }

    /// Option register.
    pub mod or {
        TIM1_ETR_ADC1_RMP @ 0 : 2 [bits],
    }

    /// Capture/compare mode register 3. Channels 5 and 6 are output only.
    pub mod ccmr3 {
        OC5FE @ 2,
        OC5PE @ 3,
        OC5M @ 4 : 3 [bits],
        OC5CE @ 7,
        OC6FE @ 10,
        OC6PE @ 11,
        OC6M @ 12 : 3 [bits],
        OC6CE @ 15;
        values {
            OC5M_3 = 0x0001_0000,
            OC6M_3 = 0x0100_0000,
        }
    }

    /// Capture/compare register 5. The group bits combine channel 5 with channels 1 to 3.
    pub mod ccr5 {
        CCR5 @ 0 : 16,
        GC5C1 @ 29,
        GC5C2 @ 30,
        GC5C3 @ 31,
    }

    pub mod ccr6 {
        CCR6 @ 0 : 16,
    }
}

/// Field tables of every timer register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr1, cr2, smcr, dier, sr, egr, "ccmr1" => ccmr1_output, "ccmr2" => ccmr2_output, ccer, cnt,
    psc, arr, rcr, ccr1, ccr2, ccr3, ccr4, bdtr, dcr, dmar, or, ccmr3, ccr5, ccr6,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mode_fields() {
        assert_eq!(smcr::SMS.mask(), 0x0000_0007);
        assert_eq!(smcr::SMS_2, 0x0000_0004);
        assert_eq!(smcr::SMS_3, 0x0001_0000);
        assert_eq!(ccmr1_output::OC1M.mask(), 0x0000_0070);
        assert_eq!(ccmr1_output::OC2M_3, 0x0100_0000);
        assert_eq!(ccmr3::OC6M.mask(), 0x0000_7000);
    }

    #[test]
    fn test_input_capture_layout() {
        assert_eq!(ccmr1_input::CC1S, ccmr1_output::CC1S);
        assert_eq!(ccmr1_input::IC1F.mask(), 0x0000_00f0);
        assert!(ccmr1_input::IC1PSC.overlaps(ccmr1_output::OC1FE));
        assert_eq!(ccmr2_input::IC4F.mask(), 0x0000_f000);
    }

    #[test]
    fn test_counter_uif_copy() {
        assert_eq!(cnt::UIFCPY.mask(), 0x8000_0000);
        assert!(cnt::UIFCPY.overlaps(cnt::CNT));
        assert_eq!(cnt::FIELDS.len(), 1);
    }

    #[test]
    fn test_register_table_uses_output_layout() {
        let ccmr1 = REGISTER_FIELDS
            .iter()
            .find(|r| r.register == "ccmr1")
            .unwrap();
        assert_eq!(ccmr1.field("OC1M"), Some(ccmr1_output::OC1M));
        assert_eq!(ccmr1.field("IC1F"), None);
    }
}
