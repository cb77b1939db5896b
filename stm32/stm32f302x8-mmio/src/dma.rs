//! DMA1 interrupt status and flag clear registers. The channels are [`DmaChannel`](crate::DmaChannel)
//! instances.

use register_field::{fields, register_fields, RegisterFields};

/// Number of channels of DMA1.
pub const CHANNEL_COUNT: usize = 7;

mmio_device! {
    doc_name: "DMA",
    struct_name: Dma,
    size: 0x08,
    instances: {
        dma1: DMA1_BASE,
    },
    regs: {
        0x00 isr: u32 = ro,
        0x04 ifcr: u32 = wo,
    },
}

// Four flags per channel, channel 1 in the lowest nibble.
seq_macro::seq!(N in 1..=7 {
    fields! {
        /// Interrupt status register.
        pub mod isr {
            #(
                GIF~N @ ((N - 1) * 4),
                TCIF~N @ ((N - 1) * 4 + 1),
                HTIF~N @ ((N - 1) * 4 + 2),
                TEIF~N @ ((N - 1) * 4 + 3),
            )*
        }

        /// Interrupt flag clear register.
        pub mod ifcr {
            #(
                CGIF~N @ ((N - 1) * 4),
                CTCIF~N @ ((N - 1) * 4 + 1),
                CHTIF~N @ ((N - 1) * 4 + 2),
                CTEIF~N @ ((N - 1) * 4 + 3),
            )*
        }
    }
});

/// Field tables of both DMA registers.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![isr, ifcr];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_flags() {
        assert_eq!(isr::GIF1.mask(), 0x0000_0001);
        assert_eq!(isr::TCIF2.mask(), 0x0000_0020);
        assert_eq!(isr::TEIF7.mask(), 0x0800_0000);
        assert_eq!(ifcr::CHTIF4.mask(), 0x0000_4000);
        assert_eq!(isr::FIELDS.len(), 4 * CHANNEL_COUNT);
    }
}
