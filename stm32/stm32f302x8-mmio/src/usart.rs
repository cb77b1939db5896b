//! Universal synchronous asynchronous receiver transmitters.
//!
//! Several registers are only 16 bits wide, each followed by 16 reserved bits.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "USART",
    struct_name: Usart,
    size: 0x2c,
    instances: {
        usart1: USART1_BASE,
        usart2: USART2_BASE,
        usart3: USART3_BASE,
    },
    regs: {
        0x00 cr1: u32 = rw,
        0x04 cr2: u32 = rw,
        0x08 cr3: u32 = rw,
        0x0c brr: u16 = rw,
        0x0e _reserved0: u16,
        0x10 gtpr: u16 = rw,
        0x12 _reserved1: u16,
        0x14 rtor: u32 = rw,
        0x18 rqr: u16 = wo,
        0x1a _reserved2: u16,
        0x1c isr: u32 = ro,
        0x20 icr: u32 = wo,
        0x24 rdr: u16 = ro,
        0x26 _reserved3: u16,
        0x28 tdr: u16 = rw,
        0x2a _reserved4: u16,
    },
}

fields! {
    /// Control register 1.
    pub mod cr1 {
        UE @ 0,
        UESM @ 1,
        RE @ 2,
        TE @ 3,
        IDLEIE @ 4,
        RXNEIE @ 5,
        TCIE @ 6,
        TXEIE @ 7,
        PEIE @ 8,
        PS @ 9,
        PCE @ 10,
        WAKE @ 11,
        M0 @ 12,
        MME @ 13,
        CMIE @ 14,
        OVER8 @ 15,
        DEDT @ 16 : 5 [bits],
        DEAT @ 21 : 5 [bits],
        RTOIE @ 26,
        EOBIE @ 27,
        M1 @ 28;
        legacy {
            M = M0,
        }
    }

    /// Control register 2.
    pub mod cr2 {
        ADDM7 @ 4,
        LBDL @ 5,
        LBDIE @ 6,
        LBCL @ 8,
        CPHA @ 9,
        CPOL @ 10,
        CLKEN @ 11,
        STOP @ 12 : 2 [bits],
        LINEN @ 14,
        SWAP @ 15,
        RXINV @ 16,
        TXINV @ 17,
        DATAINV @ 18,
        MSBFIRST @ 19,
        ABREN @ 20,
        ABRMODE @ 21 : 2 [bits],
        RTOEN @ 23,
        ADD @ 24 : 8;
        values {
            STOP_1BIT = 0x0000_0000,
            STOP_0_5BIT = 0x0000_1000,
            STOP_2BIT = 0x0000_2000,
            STOP_1_5BIT = 0x0000_3000,
        }
    }

    /// Control register 3.
    pub mod cr3 {
        EIE @ 0,
        IREN @ 1,
        IRLP @ 2,
        HDSEL @ 3,
        NACK @ 4,
        SCEN @ 5,
        DMAR @ 6,
        DMAT @ 7,
        RTSE @ 8,
        CTSE @ 9,
        CTSIE @ 10,
        ONEBIT @ 11,
        OVRDIS @ 12,
        DDRE @ 13,
        DEM @ 14,
        DEP @ 15,
        SCARCNT @ 17 : 3 [bits],
        WUS @ 20 : 2 [bits],
        WUFIE @ 22,
    }

    /// Baud rate register.
    pub mod brr {
        DIV_FRACTION @ 0 : 4,
        DIV_MANTISSA @ 4 : 12,
    }

    /// Guard time and prescaler register.
    pub mod gtpr {
        PSC @ 0 : 8,
        GT @ 8 : 8,
    }

    /// Receiver timeout register.
    pub mod rtor {
        RTO @ 0 : 24,
        BLEN @ 24 : 8,
    }

    /// Request register.
    pub mod rqr {
        ABRRQ @ 0,
        SBKRQ @ 1,
        MMRQ @ 2,
        RXFRQ @ 3,
        TXFRQ @ 4,
    }

    /// Interrupt and status register.
    pub mod isr {
        PE @ 0,
        FE @ 1,
        NE @ 2,
        ORE @ 3,
        IDLE @ 4,
        RXNE @ 5,
        TC @ 6,
        TXE @ 7,
        LBDF @ 8,
        CTSIF @ 9,
        CTS @ 10,
        RTOF @ 11,
        EOBF @ 12,
        ABRE @ 14,
        ABRF @ 15,
        BUSY @ 16,
        CMF @ 17,
        SBKF @ 18,
        RWU @ 19,
        WUF @ 20,
        TEACK @ 21,
        REACK @ 22,
    }

    /// Interrupt flag clear register.
    pub mod icr {
        PECF @ 0,
        FECF @ 1,
        NCF @ 2,
        ORECF @ 3,
        IDLECF @ 4,
        TCCF @ 6,
        LBDCF @ 8,
        CTSCF @ 9,
        RTOCF @ 11,
        EOBCF @ 12,
        CMCF @ 17,
        WUCF @ 20;
        legacy {
            NECF = NCF,
        }
    }

    pub mod rdr {
        RDR @ 0 : 9,
    }

    pub mod tdr {
        TDR @ 0 : 9,
    }
}

/// Field tables of every USART register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr1, cr2, cr3, brr, gtpr, rtor, rqr, isr, icr, rdr, tdr,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baud_rate_fields() {
        // 72 MHz / 115200 with 16x oversampling: USARTDIV = 625 = 0x271.
        let brr = brr::DIV_MANTISSA.value(39) | brr::DIV_FRACTION.value(1);
        assert_eq!(brr, 0x0271);
        assert!(u16::try_from(brr).is_ok());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(cr1::M, cr1::M0);
        assert_eq!(icr::NECF.mask(), 0x0000_0004);
        assert_eq!(cr2::STOP_2BIT, cr2::STOP.value(0b10));
    }
}
