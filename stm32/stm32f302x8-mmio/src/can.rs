//! bxCAN controller with three transmit mailboxes, two receive FIFOs and the filter bank array.

use register_field::{fields, register_fields, RegisterFields};

pub use self::fifo_mailbox::FifoMailbox;
pub use self::filter_bank::FilterBank;
pub use self::tx_mailbox::TxMailbox;

/// Number of filter banks implemented by the single-CAN parts.
pub const FILTER_BANK_COUNT: usize = 14;

mmio_device! {
    doc_name: "CAN",
    struct_name: Can,
    size: 0x320,
    instances: {
        can: CAN_BASE,
    },
    regs: {
        0x000 mcr: u32 = rw,
        0x004 msr: u32 = rw,
        0x008 tsr: u32 = rw,
        0x00c rf0r: u32 = rw,
        0x010 rf1r: u32 = rw,
        0x014 ier: u32 = rw,
        0x018 esr: u32 = rw,
        0x01c btr: u32 = rw,
        0x020 _reserved0: [u32; 88],
        0x180 tx_mailbox: [tx_mailbox::RegisterBlock; 3] = sub(TxMailbox),
        0x1b0 fifo_mailbox: [fifo_mailbox::RegisterBlock; 2] = sub(FifoMailbox),
        0x1d0 _reserved1: [u32; 12],
        0x200 fmr: u32 = rw,
        0x204 fm1r: u32 = rw,
        0x208 _reserved2: u32,
        0x20c fs1r: u32 = rw,
        0x210 _reserved3: u32,
        0x214 ffa1r: u32 = rw,
        0x218 _reserved4: u32,
        0x21c fa1r: u32 = rw,
        0x220 _reserved5: [u32; 8],
        0x240 filter_bank: [filter_bank::RegisterBlock; 28] = sub(FilterBank),
    },
}

/// One transmit mailbox.
pub mod tx_mailbox {
    mmio_device! {
        doc_name: "CAN TX mailbox",
        struct_name: TxMailbox,
        size: 0x10,
        instances: {},
        regs: {
            0x00 tir: u32 = rw,
            0x04 tdtr: u32 = rw,
            0x08 tdlr: u32 = rw,
            0x0c tdhr: u32 = rw,
        },
    }
}

/// One receive FIFO output mailbox.
pub mod fifo_mailbox {
    mmio_device! {
        doc_name: "CAN FIFO mailbox",
        struct_name: FifoMailbox,
        size: 0x10,
        instances: {},
        regs: {
            0x00 rir: u32 = ro,
            0x04 rdtr: u32 = ro,
            0x08 rdlr: u32 = ro,
            0x0c rdhr: u32 = ro,
        },
    }
}

/// One filter bank, two 32-bit filter registers.
pub mod filter_bank {
    mmio_device! {
        doc_name: "CAN filter bank",
        struct_name: FilterBank,
        size: 0x08,
        instances: {},
        regs: {
            0x00 fr1: u32 = rw,
            0x04 fr2: u32 = rw,
        },
    }
}

fields! {
    /// Master control register.
    pub mod mcr {
        INRQ @ 0,
        SLEEP @ 1,
        TXFP @ 2,
        RFLM @ 3,
        NART @ 4,
        AWUM @ 5,
        ABOM @ 6,
        TTCM @ 7,
        RESET @ 15,
        DBF @ 16,
    }

    /// Master status register.
    pub mod msr {
        INAK @ 0,
        SLAK @ 1,
        ERRI @ 2,
        WKUI @ 3,
        SLAKI @ 4,
        TXM @ 8,
        RXM @ 9,
        SAMP @ 10,
        RX @ 11,
    }

    /// Transmit status register.
    pub mod tsr {
        RQCP0 @ 0,
        TXOK0 @ 1,
        ALST0 @ 2,
        TERR0 @ 3,
        ABRQ0 @ 7,
        RQCP1 @ 8,
        TXOK1 @ 9,
        ALST1 @ 10,
        TERR1 @ 11,
        ABRQ1 @ 15,
        RQCP2 @ 16,
        TXOK2 @ 17,
        ALST2 @ 18,
        TERR2 @ 19,
        ABRQ2 @ 23,
        CODE @ 24 : 2,
        TME0 @ 26,
        TME1 @ 27,
        TME2 @ 28,
        LOW0 @ 29,
        LOW1 @ 30,
        LOW2 @ 31;
        unions {
            /// Transmit mailbox empty flags of all three mailboxes.
            TME = register_field::Field::new(26, 3),
            /// Lowest priority flags of all three mailboxes.
            LOW = register_field::Field::new(29, 3),
        }
    }

    /// Receive FIFO 0 register.
    pub mod rf0r {
        FMP0 @ 0 : 2,
        FULL0 @ 3,
        FOVR0 @ 4,
        RFOM0 @ 5,
    }

    /// Receive FIFO 1 register.
    pub mod rf1r {
        FMP1 @ 0 : 2,
        FULL1 @ 3,
        FOVR1 @ 4,
        RFOM1 @ 5,
    }

    /// Interrupt enable register.
    pub mod ier {
        TMEIE @ 0,
        FMPIE0 @ 1,
        FFIE0 @ 2,
        FOVIE0 @ 3,
        FMPIE1 @ 4,
        FFIE1 @ 5,
        FOVIE1 @ 6,
        EWGIE @ 8,
        EPVIE @ 9,
        BOFIE @ 10,
        LECIE @ 11,
        ERRIE @ 15,
        WKUIE @ 16,
        SLKIE @ 17,
    }

    /// Error status register.
    pub mod esr {
        EWGF @ 0,
        EPVF @ 1,
        BOFF @ 2,
        LEC @ 4 : 3 [bits],
        TEC @ 16 : 8,
        REC @ 24 : 8,
    }

    /// Bit timing register.
    pub mod btr {
        BRP @ 0 : 10,
        TS1 @ 16 : 4 [bits],
        TS2 @ 20 : 3 [bits],
        SJW @ 24 : 2 [bits],
        LBKM @ 30,
        SILM @ 31,
    }

    /// TX mailbox identifier register.
    pub mod tir {
        TXRQ @ 0,
        RTR @ 1,
        IDE @ 2,
        EXID @ 3 : 18,
        STID @ 21 : 11,
    }

    /// TX mailbox data length control and time stamp register.
    pub mod tdtr {
        DLC @ 0 : 4,
        TGT @ 8,
        TIME @ 16 : 16,
    }

    /// TX mailbox data low register.
    pub mod tdlr {
        DATA0 @ 0 : 8,
        DATA1 @ 8 : 8,
        DATA2 @ 16 : 8,
        DATA3 @ 24 : 8,
    }

    /// TX mailbox data high register.
    pub mod tdhr {
        DATA4 @ 0 : 8,
        DATA5 @ 8 : 8,
        DATA6 @ 16 : 8,
        DATA7 @ 24 : 8,
    }

    /// Receive FIFO mailbox identifier register.
    pub mod rir {
        RTR @ 1,
        IDE @ 2,
        EXID @ 3 : 18,
        STID @ 21 : 11,
    }

    /// Receive FIFO mailbox data length control and time stamp register.
    pub mod rdtr {
        DLC @ 0 : 4,
        FMI @ 8 : 8,
        TIME @ 16 : 16,
    }

    pub mod rdlr {
        DATA0 @ 0 : 8,
        DATA1 @ 8 : 8,
        DATA2 @ 16 : 8,
        DATA3 @ 24 : 8,
    }

    pub mod rdhr {
        DATA4 @ 0 : 8,
        DATA5 @ 8 : 8,
        DATA6 @ 16 : 8,
        DATA7 @ 24 : 8,
    }

    /// Filter master register.
    pub mod fmr {
        FINIT @ 0,
    }
}

// The filter configuration registers hold one bit per filter bank, and each filter register one
// bit per identifier bit.
seq_macro::seq!(N in 0..14 {
    fields! {
        /// Filter mode register. A set bit puts the bank in identifier list mode.
        pub mod fm1r {
            #( FBM~N @ N, )*
        }

        /// Filter scale register. A set bit selects one 32-bit filter instead of two 16-bit ones.
        pub mod fs1r {
            #( FSC~N @ N, )*
        }

        /// Filter FIFO assignment register. A set bit routes the bank's matches to FIFO 1.
        pub mod ffa1r {
            #( FFA~N @ N, )*
        }

        /// Filter activation register.
        pub mod fa1r {
            #( FACT~N @ N, )*
        }
    }
});

seq_macro::seq!(N in 0..32 {
    fields! {
        /// Filter bank register, shared by `FR1` and `FR2`.
        pub mod fr {
            #( FB~N @ N, )*
        }
    }
});

/// Field tables of every CAN register, mailboxes and filter registers included.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    mcr, msr, tsr, rf0r, rf1r, ier, esr, btr, tir, tdtr, tdlr, tdhr, rir, rdtr, rdlr, rdhr, fmr,
    fm1r, fs1r, ffa1r, fa1r, "fr1" => fr, "fr2" => fr,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(tx_mailbox::RegisterBlock::SIZE, 0x10);
        assert_eq!(filter_bank::RegisterBlock::SIZE, 0x08);
        let filter = RegisterBlock::REGISTERS.iter().find(|reg| reg.name == "filter_bank");
        assert_eq!(filter.map(|reg| (reg.offset, reg.size)), Some((0x240, 28 * 8)));
    }

    #[test]
    fn test_filter_bits() {
        assert_eq!(fa1r::FACT13.mask(), 0x0000_2000);
        assert_eq!(fr::FB31.mask(), 0x8000_0000);
        assert_eq!(fa1r::FIELDS.len(), FILTER_BANK_COUNT);
    }

    #[test]
    fn test_unions() {
        assert_eq!(tsr::TME.mask(), tsr::TME0.mask() | tsr::TME1.mask() | tsr::TME2.mask());
        assert_eq!(tsr::LOW.mask(), 0xe000_0000);
    }
}
