/// How software may access a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Padding between registers. No accessors are generated.
    Reserved,
    /// Reads only. Writes are ignored by the hardware or undefined.
    ReadOnly,
    /// Writes only, typically key and clear registers.
    WriteOnly,
    /// Reads and writes.
    ReadWrite,
    /// An array of nested register blocks.
    Block,
}

impl Access {
    /// Returns whether accessors exist for the register.
    pub const fn is_accessible(self) -> bool {
        !matches!(self, Self::Reserved)
    }
}

/// One entry of a block's `REGISTERS` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterDesc {
    /// The register's name, lowercase, as used by its accessors.
    pub name: &'static str,
    /// Byte offset from the block base.
    pub offset: usize,
    /// Size in bytes. Register arrays report the size of the whole array.
    pub size: usize,
    /// How the register may be accessed.
    pub access: Access,
}

impl RegisterDesc {
    /// The offset one past the last byte of the register.
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}
