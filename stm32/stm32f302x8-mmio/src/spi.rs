//! SPI2 and SPI3, both with I2S support.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "SPI",
    struct_name: Spi,
    size: 0x24,
    instances: {
        spi2: SPI2_BASE,
        spi3: SPI3_BASE,
    },
    regs: {
        0x00 cr1: u32 = rw,
        0x04 cr2: u32 = rw,
        0x08 sr: u32 = rw,
        0x0c dr: u32 = rw,
        0x10 crcpr: u32 = rw,
        0x14 rxcrcr: u32 = ro,
        0x18 txcrcr: u32 = ro,
        0x1c i2scfgr: u32 = rw,
        0x20 i2spr: u32 = rw,
    },
}

impl Spi<'_> {
    /// Writes one byte to the data register with a byte-wide access.
    ///
    /// With data sizes of 8 bits or fewer, a 32-bit write to `DR` queues two frames, so byte
    /// frames must be written with a byte access.
    pub fn write_dr_u8(&self, value: u8) {
        let ptr = self.address_of_dr() as *mut u8;
        crate::trace::write("SPI", "dr", ptr as usize, value);
        unsafe { core::ptr::write_volatile(ptr, value) };
    }

    /// Reads one byte from the data register with a byte-wide access, popping a single frame.
    pub fn read_dr_u8(&self) -> u8 {
        let ptr = self.address_of_dr() as *const u8;
        let value = unsafe { core::ptr::read_volatile(ptr) };
        crate::trace::read("SPI", "dr", ptr as usize, value);
        value
    }
}

fields! {
    /// Control register 1.
    pub mod cr1 {
        CPHA @ 0,
        CPOL @ 1,
        MSTR @ 2,
        BR @ 3 : 3 [bits],
        SPE @ 6,
        LSBFIRST @ 7,
        SSI @ 8,
        SSM @ 9,
        RXONLY @ 10,
        CRCL @ 11,
        CRCNEXT @ 12,
        CRCEN @ 13,
        BIDIOE @ 14,
        BIDIMODE @ 15,
    }

    /// Control register 2.
    pub mod cr2 {
        RXDMAEN @ 0,
        TXDMAEN @ 1,
        SSOE @ 2,
        NSSP @ 3,
        FRF @ 4,
        ERRIE @ 5,
        RXNEIE @ 6,
        TXEIE @ 7,
        /// Data size minus one, in bits.
        DS @ 8 : 4 [bits],
        FRXTH @ 12,
        LDMARX @ 13,
        LDMATX @ 14,
    }

    /// Status register.
    pub mod sr {
        RXNE @ 0,
        TXE @ 1,
        CHSIDE @ 2,
        UDR @ 3,
        CRCERR @ 4,
        MODF @ 5,
        OVR @ 6,
        BSY @ 7,
        FRE @ 8,
        FRLVL @ 9 : 2 [bits],
        FTLVL @ 11 : 2 [bits],
    }

    pub mod dr {
        DR @ 0 : 16,
    }

    pub mod crcpr {
        CRCPOLY @ 0 : 16,
    }

    pub mod rxcrcr {
        RXCRC @ 0 : 16,
    }

    pub mod txcrcr {
        TXCRC @ 0 : 16,
    }

    /// I2S configuration register.
    pub mod i2scfgr {
        CHLEN @ 0,
        DATLEN @ 1 : 2 [bits],
        CKPOL @ 3,
        I2SSTD @ 4 : 2 [bits],
        PCMSYNC @ 7,
        I2SCFG @ 8 : 2 [bits],
        I2SE @ 10,
        I2SMOD @ 11,
    }

    /// I2S prescaler register.
    pub mod i2spr {
        I2SDIV @ 0 : 8,
        ODD @ 8,
        MCKOE @ 9,
    }
}

/// Field tables of every SPI register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    cr1, cr2, sr, dr, crcpr, rxcrcr, txcrcr, i2scfgr, i2spr,
];
