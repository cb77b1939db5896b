//! USB full-speed device controller.
//!
//! The endpoint registers are 16 bits wide on a 32-bit stride. The packet memory the buffer
//! descriptor table points into lives at [`USB_PMAADDR`](crate::memory_map::USB_PMAADDR).
//!
//! Field catalogs below use the crate-wide 32-bit masks. Every field fits in the low half-word,
//! so accessors work on `u16` words through [`Field::get_u16`](register_field::Field::get_u16)
//! and [`Field::set_u16`](register_field::Field::set_u16), and whole-value constants such as
//! [`epr::EPREG_MASK`] narrow with `as u16` without losing bits.

use register_field::{fields, register_fields, RegisterFields};

/// Number of endpoint registers.
pub const ENDPOINT_COUNT: usize = 8;

mmio_device! {
    doc_name: "USB",
    struct_name: Usb,
    size: 0x5c,
    instances: {
        usb: USB_BASE,
    },
    regs: {
        0x00 ep0r: u16 = rw,
        0x02 _reserved0: u16,
        0x04 ep1r: u16 = rw,
        0x06 _reserved1: u16,
        0x08 ep2r: u16 = rw,
        0x0a _reserved2: u16,
        0x0c ep3r: u16 = rw,
        0x0e _reserved3: u16,
        0x10 ep4r: u16 = rw,
        0x12 _reserved4: u16,
        0x14 ep5r: u16 = rw,
        0x16 _reserved5: u16,
        0x18 ep6r: u16 = rw,
        0x1a _reserved6: u16,
        0x1c ep7r: u16 = rw,
        0x1e _reserved7: u16,
        0x20 _reserved8: [u32; 8],
        0x40 cntr: u16 = rw,
        0x42 _reserved9: u16,
        0x44 istr: u16 = rw,
        0x46 _reserved10: u16,
        0x48 fnr: u16 = ro,
        0x4a _reserved11: u16,
        0x4c daddr: u16 = rw,
        0x4e _reserved12: u16,
        0x50 btable: u16 = rw,
        0x52 _reserved13: u16,
        0x54 lpmcsr: u16 = rw,
        0x56 _reserved14: u16,
        0x58 bcdr: u16 = rw,
        0x5a _reserved15: u16,
    },
}

impl Usb<'_> {
    /// Returns the address of endpoint register `index`.
    pub fn address_of_epr(&self, index: usize) -> usize {
        assert!(index < ENDPOINT_COUNT, "endpoint index out of range");
        self.address_of_ep0r() + index * 4
    }

    /// Reads endpoint register `index`. Decode it with the `_u16` methods of the [`epr`] fields.
    pub fn read_epr(&self, index: usize) -> u16 {
        let ptr = self.address_of_epr(index) as *const u16;
        let value = unsafe { core::ptr::read_volatile(ptr) };
        crate::trace::read("USB", "epr", ptr as usize, value);
        value
    }

    /// Writes endpoint register `index`.
    ///
    /// The toggle bits flip when written with one and the `CTR` flags are cleared by writing zero,
    /// so a plain read-modify-write is rarely what a driver wants; see [`epr::EPREG_MASK`].
    pub fn write_epr(&self, index: usize, value: u16) {
        let ptr = self.address_of_epr(index) as *mut u16;
        crate::trace::write("USB", "epr", ptr as usize, value);
        unsafe { core::ptr::write_volatile(ptr, value) };
    }
}

fields! {
    /// Endpoint registers, shared by `EP0R` to `EP7R`.
    pub mod epr {
        EA @ 0 : 4 [bits],
        STAT_TX @ 4 : 2 [bits],
        DTOG_TX @ 6,
        CTR_TX @ 7,
        EP_KIND @ 8,
        EP_TYPE @ 9 : 2 [bits],
        SETUP @ 11,
        STAT_RX @ 12 : 2 [bits],
        DTOG_RX @ 14,
        CTR_RX @ 15;
        values {
            EP_BULK = 0x0000,
            EP_CONTROL = 0x0200,
            EP_ISOCHRONOUS = 0x0400,
            EP_INTERRUPT = 0x0600,
            EP_TX_DIS = 0x0000,
            EP_TX_STALL = 0x0010,
            EP_TX_NAK = 0x0020,
            EP_TX_VALID = 0x0030,
            EP_RX_DIS = 0x0000,
            EP_RX_STALL = 0x1000,
            EP_RX_NAK = 0x2000,
            EP_RX_VALID = 0x3000,
            /// Bits that are written back unchanged when updating an endpoint register.
            EPREG_MASK = 0x8f8f,
        }
    }

    /// Control register.
    pub mod cntr {
        FRES @ 0,
        PDWN @ 1,
        LP_MODE @ 2,
        FSUSP @ 3,
        RESUME @ 4,
        L1RESUME @ 5,
        L1REQM @ 7,
        ESOFM @ 8,
        SOFM @ 9,
        RESETM @ 10,
        SUSPM @ 11,
        WKUPM @ 12,
        ERRM @ 13,
        PMAOVRM @ 14,
        CTRM @ 15;
        legacy {
            LPMODE = LP_MODE,
        }
    }

    /// Interrupt status register. Event flags are cleared by writing zero.
    pub mod istr {
        EP_ID @ 0 : 4 [bits],
        DIR @ 4,
        L1REQ @ 7,
        ESOF @ 8,
        SOF @ 9,
        RESET @ 10,
        SUSP @ 11,
        WKUP @ 12,
        ERR @ 13,
        PMAOVR @ 14,
        CTR @ 15,
    }

    /// Frame number register.
    pub mod fnr {
        FN @ 0 : 11,
        LSOF @ 11 : 2 [bits],
        LCK @ 13,
        RXDM @ 14,
        RXDP @ 15,
    }

    /// Device address register.
    pub mod daddr {
        ADD @ 0 : 7 [bits],
        EF @ 7,
    }

    /// Buffer table address, relative to the packet memory and 8-byte aligned.
    pub mod btable {
        BTABLE @ 3 : 13,
    }

    /// LPM control and status register.
    pub mod lpmcsr {
        LMPEN @ 0,
        LPMACK @ 1,
        REMWAKE @ 3,
        BESL @ 4 : 4 [bits],
    }

    /// Battery charging detector register.
    pub mod bcdr {
        BCDEN @ 0,
        DCDEN @ 1,
        PDEN @ 2,
        SDEN @ 3,
        DCDET @ 4,
        PDET @ 5,
        SDET @ 6,
        PS2DET @ 7,
        DPPU @ 15,
    }
}

/// Field tables of every USB register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![
    "ep0r" => epr, "ep1r" => epr, "ep2r" => epr, "ep3r" => epr,
    "ep4r" => epr, "ep5r" => epr, "ep6r" => epr, "ep7r" => epr,
    cntr, istr, fnr, daddr, btable, lpmcsr, bcdr,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_fields() {
        assert_eq!(epr::EP_TYPE.mask(), 0x0600);
        assert_eq!(epr::EP_INTERRUPT, epr::EP_TYPE.value(0b11));
        assert_eq!(epr::EP_RX_VALID, epr::STAT_RX.mask());
        assert_eq!(
            epr::EPREG_MASK,
            epr::CTR_RX.mask()
                | epr::SETUP.mask()
                | epr::EP_TYPE.mask()
                | epr::EP_KIND.mask()
                | epr::CTR_TX.mask()
                | epr::EA.mask()
        );
    }

    #[test]
    fn test_endpoint_register_stride() {
        let mut block = core::mem::MaybeUninit::<RegisterBlock>::zeroed();
        let usb = unsafe { Usb::from_ptr(block.as_mut_ptr()) };
        assert_eq!(usb.address_of_epr(0), usb.address_of_ep0r());
        assert_eq!(usb.address_of_epr(7), usb.address_of_ep7r());

        usb.write_epr(5, 0x0281);
        assert_eq!(usb.read_ep5r(), 0x0281);
        assert_eq!(usb.read_epr(4), 0);
    }

    #[test]
    fn test_half_word_fields_fit() {
        for table in REGISTER_FIELDS {
            for desc in table.fields {
                assert_eq!(
                    u32::from(desc.field.mask_u16()),
                    desc.field.mask(),
                    "{}.{}",
                    table.register,
                    desc.name,
                );
            }
        }
    }

    #[test]
    fn test_endpoint_update_with_half_word_fields() {
        let mut block = core::mem::MaybeUninit::<RegisterBlock>::zeroed();
        let usb = unsafe { Usb::from_ptr(block.as_mut_ptr()) };

        usb.write_epr(1, epr::EP_INTERRUPT as u16 | epr::EA.set_u16(0, 1));
        let value = usb.read_epr(1);
        assert_eq!(epr::EA.get_u16(value), 1);
        assert_eq!(epr::EP_TYPE.get_u16(value), 0b11);

        let value = epr::STAT_TX.set_u16(value & epr::EPREG_MASK as u16, 0b11);
        usb.write_epr(1, value);
        assert_eq!(usb.read_ep1r(), 0x0631);
        assert_eq!(cntr::FRES.mask_u16() | cntr::PDWN.mask_u16(), 0x0003);
    }

    #[test]
    #[should_panic(expected = "endpoint index out of range")]
    fn test_endpoint_index_out_of_range() {
        let mut block = core::mem::MaybeUninit::<RegisterBlock>::zeroed();
        let usb = unsafe { Usb::from_ptr(block.as_mut_ptr()) };
        usb.read_epr(ENDPOINT_COUNT);
    }
}
