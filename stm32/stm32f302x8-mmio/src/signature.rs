//! Device electronic signature, factory-programmed in system memory.

/// The 96-bit unique device ID.
pub mod uid {
    use register_field::{fields, register_fields, RegisterFields};

    mmio_device! {
        doc_name: "UID",
        struct_name: Uid,
        size: 0x0c,
        instances: {
            uid: UID_BASE,
        },
        regs: {
            0x00 uid: [u32; 3] = ro(indexed),
        },
    }

    impl Uid<'_> {
        /// Reads all three words of the unique ID, lowest address first.
        pub fn read_unique_id(&self) -> [u32; 3] {
            [self.read_uid_0(), self.read_uid_1(), self.read_uid_2()]
        }
    }

    fields! {
        /// Bits 31:0, the die coordinates on the wafer.
        pub mod uid0 {
            X @ 0 : 16,
            Y @ 16 : 16,
        }

        /// Bits 63:32.
        pub mod uid1 {
            WAF_NUM @ 0 : 8,
            LOT_NUM @ 8 : 24,
        }

        /// Bits 95:64, the rest of the lot number.
        pub mod uid2 {
            LOT_NUM @ 0 : 32,
        }
    }

    pub const REGISTER_FIELDS: &[RegisterFields] =
        register_fields!["uid0" => uid0, "uid1" => uid1, "uid2" => uid2];
}

/// The flash memory size data register.
pub mod flash_size {
    use register_field::{fields, register_fields, RegisterFields};

    mmio_device! {
        doc_name: "FLASHSIZE",
        struct_name: FlashSize,
        size: 0x02,
        instances: {
            flash_size: FLASHSIZE_BASE,
        },
        regs: {
            0x00 f_size: u16 = ro,
        },
    }

    impl FlashSize<'_> {
        /// Reads the size of the main flash memory in KiB.
        pub fn read_kib(&self) -> u16 {
            self.read_f_size()
        }
    }

    fields! {
        pub mod f_size {
            F_SIZE @ 0 : 16,
        }
    }

    pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![f_size];
}

pub use flash_size::FlashSize;
pub use uid::Uid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_words() {
        let mut words = [0x0012_0034u32, 0x4d52_3107, 0x3436_3838];
        let uid = unsafe { Uid::from_ptr(words.as_mut_ptr().cast()) };
        assert_eq!(uid.read_unique_id(), words);
        assert_eq!(uid::uid0::Y.get(uid.read_uid_0()), 0x0012);
        assert_eq!(uid::uid1::WAF_NUM.get(uid.read_uid(1)), 0x07);
        assert_eq!(uid.address_of_uid(2), uid.base() + 8);
    }

    #[test]
    fn test_flash_size() {
        let mut f_size = 64u16;
        let flash_size = unsafe { FlashSize::from_ptr((&mut f_size as *mut u16).cast()) };
        assert_eq!(flash_size.read_kib(), 64);
        assert_eq!(
            flash_size.read_kib() as usize * 1024,
            crate::memory_map::FLASH_SIZE
        );
    }
}
