//! One DMA1 channel. Channels are 0x14 bytes apart, each register block followed by a reserved
//! word.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "DMA channel",
    struct_name: DmaChannel,
    size: 0x10,
    instances: {
        dma1_channel1: DMA1_CHANNEL1_BASE,
        dma1_channel2: DMA1_CHANNEL2_BASE,
        dma1_channel3: DMA1_CHANNEL3_BASE,
        dma1_channel4: DMA1_CHANNEL4_BASE,
        dma1_channel5: DMA1_CHANNEL5_BASE,
        dma1_channel6: DMA1_CHANNEL6_BASE,
        dma1_channel7: DMA1_CHANNEL7_BASE,
    },
    regs: {
        0x00 ccr: u32 = rw,
        0x04 cndtr: u32 = rw,
        0x08 cpar: u32 = rw,
        0x0c cmar: u32 = rw,
    },
}

fields! {
    /// Channel configuration register.
    pub mod ccr {
        EN @ 0,
        TCIE @ 1,
        HTIE @ 2,
        TEIE @ 3,
        DIR @ 4,
        CIRC @ 5,
        PINC @ 6,
        MINC @ 7,
        PSIZE @ 8 : 2 [bits],
        MSIZE @ 10 : 2 [bits],
        PL @ 12 : 2 [bits],
        MEM2MEM @ 14;
        values {
            PSIZE_8 = 0x0000_0000,
            PSIZE_16 = 0x0000_0100,
            PSIZE_32 = 0x0000_0200,
            MSIZE_8 = 0x0000_0000,
            MSIZE_16 = 0x0000_0400,
            MSIZE_32 = 0x0000_0800,
            PL_LOW = 0x0000_0000,
            PL_MEDIUM = 0x0000_1000,
            PL_HIGH = 0x0000_2000,
            PL_VERY_HIGH = 0x0000_3000,
        }
    }

    /// Number of data to transfer.
    pub mod cndtr {
        NDT @ 0 : 16,
    }

    /// Peripheral address register.
    pub mod cpar {
        PA @ 0 : 32,
    }

    /// Memory address register.
    pub mod cmar {
        MA @ 0 : 32,
    }
}

/// Field tables of every channel register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![ccr, cndtr, cpar, cmar];
