#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Bit-position descriptors for memory-mapped register fields.
//!
//! A [`Field`] names a contiguous run of bits within a 32-bit register word. It is a pair of
//! small integers, so descriptors are `const` values that fold away entirely: every operation is
//! the plain mask-and-shift arithmetic a hand-written driver would use.
//!
//! ```
//! use register_field::Field;
//!
//! const ADVREGEN: Field = Field::new(28, 2);
//!
//! assert_eq!(ADVREGEN.mask(), 0x3000_0000);
//! assert_eq!(ADVREGEN.bit_mask(0), 0x1000_0000);
//! assert_eq!(ADVREGEN.set(0xffff_ffff, 0b01), 0xdfff_ffff);
//! assert_eq!(ADVREGEN.get(0x2000_0000), 0b10);
//! ```
//!
//! Per-register catalogs of fields are declared with the [`fields!`] macro.

use snafu::Snafu;

mod macros;

// For macro access via `$crate`.
#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use seq_macro::seq;
}

/// The error type returned by the checked field operations.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// The value has bits set above the field's width.
    #[snafu(display("value {value:#x} does not fit in a {width}-bit field"))]
    ValueTooWide {
        /// The rejected value, before shifting.
        value: u32,
        /// The width of the field in bits.
        width: u8,
    },
}

/// A contiguous run of bits within a 32-bit register word.
///
/// The run starts at bit [`pos`](Self::pos) (counted from the least significant bit) and is
/// [`width`](Self::width) bits wide. Construction checks that the run lies within the word, and
/// because constructors are `const fn`, a bad descriptor in a `const` item is a compile error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pos: u8,
    width: u8,
}

impl Field {
    /// Creates a field of `width` bits starting at bit `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or the field extends past bit 31.
    #[inline(always)]
    pub const fn new(pos: u8, width: u8) -> Self {
        assert!(width != 0, "a field must be at least one bit wide");
        assert!(
            pos as u32 + width as u32 <= u32::BITS,
            "a field must lie within a 32-bit word",
        );
        Self { pos, width }
    }

    /// Creates a single-bit field at bit `pos`.
    #[inline(always)]
    pub const fn bit(pos: u8) -> Self {
        Self::new(pos, 1)
    }

    /// The position of the field's least significant bit.
    #[inline(always)]
    pub const fn pos(self) -> u8 {
        self.pos
    }

    /// The width of the field in bits.
    #[inline(always)]
    pub const fn width(self) -> u8 {
        self.width
    }

    /// The unshifted mask covering every valid field value, `(1 << width) - 1`.
    #[inline(always)]
    pub const fn value_mask(self) -> u32 {
        u32::MAX >> (u32::BITS - self.width as u32)
    }

    /// The mask selecting the field within a register word, `value_mask() << pos()`.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        self.value_mask() << self.pos
    }

    /// The mask of the `index`th bit of the field, `1 << (pos() + index)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the field width.
    #[inline(always)]
    pub const fn bit_mask(self, index: u8) -> u32 {
        assert!(index < self.width, "bit index out of range for field");
        1 << (self.pos + index)
    }

    /// Extracts the field from a register word.
    #[inline(always)]
    pub const fn get(self, word: u32) -> u32 {
        (word & self.mask()) >> self.pos
    }

    /// Shifts `value` into the field's position, discarding bits that do not fit.
    #[inline(always)]
    pub const fn value(self, value: u32) -> u32 {
        (value << self.pos) & self.mask()
    }

    /// Replaces the field within `word`, leaving every other bit unchanged.
    ///
    /// Bits of `value` above the field width are discarded.
    #[inline(always)]
    pub const fn set(self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | self.value(value)
    }

    /// Returns `word` with every bit of the field cleared.
    #[inline(always)]
    pub const fn clear(self, word: u32) -> u32 {
        word & !self.mask()
    }

    /// Returns whether any bit of the field is set in `word`.
    #[inline(always)]
    pub const fn is_set(self, word: u32) -> bool {
        word & self.mask() != 0
    }

    /// Returns whether the two fields share any bit.
    #[inline(always)]
    pub const fn overlaps(self, other: Field) -> bool {
        self.mask() & other.mask() != 0
    }

    /// [`mask`](Self::mask) narrowed for a 16-bit register.
    ///
    /// # Panics
    ///
    /// Panics if the field extends past bit 15.
    #[inline(always)]
    pub const fn mask_u16(self) -> u16 {
        assert!(
            self.pos as u32 + self.width as u32 <= u16::BITS,
            "field does not fit a 16-bit register",
        );
        self.mask() as u16
    }

    /// [`get`](Self::get) for a 16-bit register.
    #[inline(always)]
    pub const fn get_u16(self, word: u16) -> u16 {
        (word & self.mask_u16()) >> self.pos
    }

    /// [`set`](Self::set) for a 16-bit register.
    #[inline(always)]
    pub const fn set_u16(self, word: u16, value: u16) -> u16 {
        (word & !self.mask_u16()) | (self.value(value as u32) as u16)
    }

    /// Shifts `value` into the field's position if it fits.
    pub fn try_value(self, value: u32) -> Result<u32, FieldError> {
        if value & !self.value_mask() != 0 {
            return ValueTooWideSnafu {
                value,
                width: self.width,
            }
            .fail();
        }
        Ok(self.value(value))
    }

    /// Replaces the field within `word` if `value` fits.
    pub fn try_set(self, word: u32, value: u32) -> Result<u32, FieldError> {
        Ok(self.clear(word) | self.try_value(value)?)
    }
}

/// A named field, as listed in a register's `FIELDS` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDesc {
    /// The field's name within its register.
    pub name: &'static str,
    /// The field's bit position and width.
    pub field: Field,
}

/// The field table of one register.
#[derive(Clone, Copy, Debug)]
pub struct RegisterFields {
    /// The register's name, matching its field module.
    pub register: &'static str,
    /// Every field of the register in declaration order.
    pub fields: &'static [FieldDesc],
}

impl RegisterFields {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<Field> {
        self.fields
            .iter()
            .find(|desc| desc.name == name)
            .map(|desc| desc.field)
    }

    /// Returns the first pair of fields that share a bit, if any.
    pub fn first_overlap(&self) -> Option<(&'static str, &'static str)> {
        let fields = self.fields;
        fields.iter().enumerate().find_map(|(i, a)| {
            fields[i + 1..]
                .iter()
                .find(|b| a.field.overlaps(b.field))
                .map(|b| (a.name, b.name))
        })
    }

    /// The union of every field mask.
    pub fn used_mask(&self) -> u32 {
        self.fields.iter().fold(0, |acc, desc| acc | desc.field.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert_eq!(Field::bit(0).mask(), 0x0000_0001);
        assert_eq!(Field::bit(31).mask(), 0x8000_0000);
        assert_eq!(Field::new(0, 32).mask(), 0xffff_ffff);
        assert_eq!(Field::new(0, 32).value_mask(), 0xffff_ffff);
        assert_eq!(Field::new(4, 4).mask(), 0x0000_00f0);
        assert_eq!(Field::new(28, 2).mask(), 0x3000_0000);
    }

    #[test]
    fn test_mask_matches_width_and_position() {
        for pos in 0..32u8 {
            for width in 1..=(32 - pos) {
                let field = Field::new(pos, width);
                let expected = ((((1u64 << width) - 1) as u32) as u64) << pos;
                assert_eq!(field.mask() as u64, expected, "pos {pos} width {width}");
                let bits = (0..width).fold(0, |acc, i| acc | field.bit_mask(i));
                assert_eq!(bits, field.mask(), "pos {pos} width {width}");
            }
        }
    }

    #[test]
    fn test_bit_masks() {
        let field = Field::new(28, 2);
        assert_eq!(field.bit_mask(0), 0x1000_0000);
        assert_eq!(field.bit_mask(1), 0x2000_0000);
        assert_eq!(field.bit_mask(0) | field.bit_mask(1), field.mask());
    }

    #[test]
    #[should_panic]
    fn test_bit_mask_out_of_range_panics() {
        let _ = Field::new(3, 2).bit_mask(2);
    }

    #[test]
    #[should_panic]
    fn test_field_past_word_panics() {
        let _ = Field::new(30, 3);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Field::new(0, 0);
    }

    #[test]
    fn test_get_set() {
        let field = Field::new(8, 4);
        assert_eq!(field.get(0x0000_0a00), 0xa);
        assert_eq!(field.set(0xffff_ffff, 0x5), 0xffff_f5ff);
        assert_eq!(field.set(0, 0x1f), 0x0000_0f00);
        assert_eq!(field.clear(0xffff_ffff), 0xffff_f0ff);
        assert!(field.is_set(0x0000_0100));
        assert!(!field.is_set(0xffff_f0ff));
    }

    #[test]
    fn test_round_trip_preserves_other_bits() {
        let words = [0, 0xffff_ffff, 0xdead_beef, 0x1234_5678, 0x8000_0001];
        for (pos, width) in [(0, 1), (3, 5), (16, 16), (28, 4), (0, 32), (31, 1)] {
            let field = Field::new(pos, width);
            for word in words {
                for value in [0, 1, field.value_mask(), field.value_mask() >> 1] {
                    let result = field.set(word, value);
                    assert_eq!(field.get(result), value);
                    assert_eq!(result & !field.mask(), word & !field.mask());
                }
            }
        }
    }

    #[test]
    fn test_half_word_accessors() {
        let field = Field::new(12, 2);
        assert_eq!(field.mask_u16(), 0x3000);
        assert_eq!(field.get_u16(0xb000), 0b11);
        assert_eq!(field.set_u16(0xffff, 0b01), 0xdfff);
        assert_eq!(field.set_u16(0, 0xff), 0x3000);
    }

    #[test]
    #[should_panic(expected = "field does not fit a 16-bit register")]
    fn test_half_word_mask_rejects_high_fields() {
        let _ = Field::new(15, 2).mask_u16();
    }

    #[test]
    fn test_overlaps() {
        assert!(Field::new(0, 4).overlaps(Field::new(3, 2)));
        assert!(!Field::new(0, 4).overlaps(Field::new(4, 2)));
    }

    #[test]
    fn test_try_value() {
        let field = Field::new(4, 3);
        assert_eq!(field.try_value(7), Ok(0x70));
        assert_eq!(
            field.try_value(8),
            Err(FieldError::ValueTooWide { value: 8, width: 3 }),
        );
        assert_eq!(field.try_set(0xffff_ffff, 0), Ok(0xffff_ff8f));
        assert!(field.try_set(0, 0x10).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = Field::new(0, 2).try_value(4).unwrap_err();
        assert_eq!(error.to_string(), "value 0x4 does not fit in a 2-bit field");
    }

    #[test]
    fn test_register_fields() {
        const FIELDS: &[FieldDesc] = &[
            FieldDesc {
                name: "EN",
                field: Field::bit(0),
            },
            FieldDesc {
                name: "MODE",
                field: Field::new(1, 2),
            },
            FieldDesc {
                name: "WIDE",
                field: Field::new(2, 4),
            },
        ];
        let register = RegisterFields {
            register: "cr",
            fields: FIELDS,
        };
        assert_eq!(register.field("MODE"), Some(Field::new(1, 2)));
        assert_eq!(register.field("NOPE"), None);
        assert_eq!(register.first_overlap(), Some(("MODE", "WIDE")));
        assert_eq!(register.used_mask(), 0x3f);
    }
}
