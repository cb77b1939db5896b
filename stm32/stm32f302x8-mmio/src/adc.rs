//! ADC1, the 12-bit successive approximation converter.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "ADC",
    struct_name: Adc,
    size: 0xb8,
    instances: {
        adc1: ADC1_BASE,
    },
    regs: {
        0x00 isr: u32 = rw,
        0x04 ier: u32 = rw,
        0x08 cr: u32 = rw,
        0x0c cfgr: u32 = rw,
        0x10 _reserved0: u32,
        0x14 smpr1: u32 = rw,
        0x18 smpr2: u32 = rw,
        0x1c _reserved1: u32,
        0x20 tr1: u32 = rw,
        0x24 tr2: u32 = rw,
        0x28 tr3: u32 = rw,
        0x2c _reserved2: u32,
        0x30 sqr1: u32 = rw,
        0x34 sqr2: u32 = rw,
        0x38 sqr3: u32 = rw,
        0x3c sqr4: u32 = rw,
        0x40 dr: u32 = ro,
        0x44 _reserved3: [u32; 2],
        0x4c jsqr: u32 = rw,
        0x50 _reserved4: [u32; 4],
        0x60 ofr: [u32; 4] = rw(indexed),
        0x70 _reserved5: [u32; 4],
        0x80 jdr: [u32; 4] = ro(indexed),
        0x90 _reserved6: [u32; 4],
        0xa0 awd2cr: u32 = rw,
        0xa4 awd3cr: u32 = rw,
        0xa8 _reserved7: [u32; 2],
        0xb0 difsel: u32 = rw,
        0xb4 calfact: u32 = rw,
    },
}

fields! {
    /// Interrupt and status register.
    pub mod isr {
        ADRDY @ 0,
        EOSMP @ 1,
        EOC @ 2,
        EOS @ 3,
        OVR @ 4,
        JEOC @ 5,
        JEOS @ 6,
        AWD1 @ 7,
        AWD2 @ 8,
        AWD3 @ 9,
        JQOVF @ 10;
        legacy {
            ADRD = ADRDY,
        }
    }

    /// Interrupt enable register.
    pub mod ier {
        ADRDYIE @ 0,
        EOSMPIE @ 1,
        EOCIE @ 2,
        EOSIE @ 3,
        OVRIE @ 4,
        JEOCIE @ 5,
        JEOSIE @ 6,
        AWD1IE @ 7,
        AWD2IE @ 8,
        AWD3IE @ 9,
        JQOVFIE @ 10;
        legacy {
            RDY = ADRDYIE,
            EOSMP = EOSMPIE,
            EOC = EOCIE,
            EOS = EOSIE,
            OVR = OVRIE,
            JEOC = JEOCIE,
            JEOS = JEOSIE,
            AWD1 = AWD1IE,
            AWD2 = AWD2IE,
            AWD3 = AWD3IE,
            JQOVF = JQOVFIE,
        }
    }

    /// Control register.
    pub mod cr {
        ADEN @ 0,
        ADDIS @ 1,
        ADSTART @ 2,
        JADSTART @ 3,
        ADSTP @ 4,
        JADSTP @ 5,
        /// Voltage regulator enable: 0b00 intermediate, 0b01 enabled, 0b10 disabled.
        ADVREGEN @ 28 : 2 [bits],
        ADCALDIF @ 30,
        ADCAL @ 31;
        values {
            ADVREGEN_INTERMEDIATE = 0x0000_0000,
            ADVREGEN_ENABLED = 0x1000_0000,
            ADVREGEN_DISABLED = 0x2000_0000,
        }
    }

    /// Configuration register.
    pub mod cfgr {
        DMAEN @ 0,
        DMACFG @ 1,
        RES @ 3 : 2 [bits],
        ALIGN @ 5,
        EXTSEL @ 6 : 4 [bits],
        EXTEN @ 10 : 2 [bits],
        OVRMOD @ 12,
        CONT @ 13,
        AUTDLY @ 14,
        DISCEN @ 16,
        DISCNUM @ 17 : 3 [bits],
        JDISCEN @ 20,
        JQM @ 21,
        AWD1SGL @ 22,
        AWD1EN @ 23,
        JAWD1EN @ 24,
        JAUTO @ 25,
        AWD1CH @ 26 : 5 [bits];
        values {
            RES_12BIT = 0x0000_0000,
            RES_10BIT = 0x0000_0008,
            RES_8BIT = 0x0000_0010,
            RES_6BIT = 0x0000_0018,
            EXTEN_DISABLED = 0x0000_0000,
            EXTEN_RISING = 0x0000_0400,
            EXTEN_FALLING = 0x0000_0800,
            EXTEN_BOTH = 0x0000_0c00,
        }
    }

    /// Sample time register 1, channels 1 to 9.
    pub mod smpr1 {
        SMP1 @ 3 : 3 [bits],
        SMP2 @ 6 : 3 [bits],
        SMP3 @ 9 : 3 [bits],
        SMP4 @ 12 : 3 [bits],
        SMP5 @ 15 : 3 [bits],
        SMP6 @ 18 : 3 [bits],
        SMP7 @ 21 : 3 [bits],
        SMP8 @ 24 : 3 [bits],
        SMP9 @ 27 : 3 [bits],
    }

    /// Sample time register 2, channels 10 to 18.
    pub mod smpr2 {
        SMP10 @ 0 : 3 [bits],
        SMP11 @ 3 : 3 [bits],
        SMP12 @ 6 : 3 [bits],
        SMP13 @ 9 : 3 [bits],
        SMP14 @ 12 : 3 [bits],
        SMP15 @ 15 : 3 [bits],
        SMP16 @ 18 : 3 [bits],
        SMP17 @ 21 : 3 [bits],
        SMP18 @ 24 : 3 [bits],
    }

    /// Analog watchdog 1 threshold register.
    pub mod tr1 {
        LT1 @ 0 : 12 [bits],
        HT1 @ 16 : 12 [bits],
    }

    pub mod tr2 {
        LT2 @ 0 : 8 [bits],
        HT2 @ 16 : 8 [bits],
    }

    pub mod tr3 {
        LT3 @ 0 : 8 [bits],
        HT3 @ 16 : 8 [bits],
    }

    /// Regular sequence register 1, holding the sequence length and ranks 1 to 4.
    pub mod sqr1 {
        L @ 0 : 4 [bits],
        SQ1 @ 6 : 5 [bits],
        SQ2 @ 12 : 5 [bits],
        SQ3 @ 18 : 5 [bits],
        SQ4 @ 24 : 5 [bits],
    }

    pub mod sqr2 {
        SQ5 @ 0 : 5 [bits],
        SQ6 @ 6 : 5 [bits],
        SQ7 @ 12 : 5 [bits],
        SQ8 @ 18 : 5 [bits],
        SQ9 @ 24 : 5 [bits],
    }

    pub mod sqr3 {
        SQ10 @ 0 : 5 [bits],
        SQ11 @ 6 : 5 [bits],
        SQ12 @ 12 : 5 [bits],
        SQ13 @ 18 : 5 [bits],
        SQ14 @ 24 : 5 [bits],
    }

    pub mod sqr4 {
        SQ15 @ 0 : 5 [bits],
        SQ16 @ 6 : 5 [bits],
    }

    /// Regular data register.
    pub mod dr {
        RDATA @ 0 : 16,
    }

    /// Injected sequence register.
    pub mod jsqr {
        JL @ 0 : 2 [bits],
        JEXTSEL @ 2 : 4 [bits],
        JEXTEN @ 6 : 2 [bits],
        JSQ1 @ 8 : 5 [bits],
        JSQ2 @ 14 : 5 [bits],
        JSQ3 @ 20 : 5 [bits],
        JSQ4 @ 26 : 5 [bits],
    }

    /// Offset registers 1 to 4.
    pub mod ofr {
        OFFSET @ 0 : 12 [bits],
        OFFSET_CH @ 26 : 5 [bits],
        OFFSET_EN @ 31,
    }

    /// Injected data registers 1 to 4.
    pub mod jdr {
        JDATA @ 0 : 16,
    }

    /// Analog watchdog 2 configuration register, one bit per channel 1 to 18.
    pub mod awd2cr {
        AWD2CH @ 1 : 18 [bits],
    }

    pub mod awd3cr {
        AWD3CH @ 1 : 18 [bits],
    }

    /// Differential mode selection register, one bit per channel 1 to 18.
    pub mod difsel {
        DIFSEL @ 1 : 18 [bits],
    }

    /// Calibration factors.
    pub mod calfact {
        CALFACT_S @ 0 : 7 [bits],
        CALFACT_D @ 16 : 7 [bits],
    }
}

/// Field tables of every ADC register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    isr, ier, cr, cfgr, smpr1, smpr2, tr1, tr2, tr3, sqr1, sqr2, sqr3, sqr4, dr, jsqr, ofr, jdr,
    awd2cr, awd3cr, difsel, calfact,
];
