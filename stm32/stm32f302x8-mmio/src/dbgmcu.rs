//! MCU debug component.

use register_field::{fields, register_fields, RegisterFields};

mmio_device! {
    doc_name: "DBGMCU",
    struct_name: Dbgmcu,
    size: 0x10,
    instances: {
        dbgmcu: DBGMCU_BASE,
    },
    regs: {
        0x00 idcode: u32 = ro,
        0x04 cr: u32 = rw,
        0x08 apb1fz: u32 = rw,
        0x0c apb2fz: u32 = rw,
    },
}

/// `DEV_ID` of the STM32F302x6/8 family.
pub const DEV_ID_F302X8: u32 = 0x439;

fields! {
    /// Device identifier.
    pub mod idcode {
        DEV_ID @ 0 : 12,
        REV_ID @ 16 : 16,
    }

    /// Debug configuration register.
    pub mod cr {
        DBG_SLEEP @ 0,
        DBG_STOP @ 1,
        DBG_STANDBY @ 2,
        TRACE_IOEN @ 5,
        TRACE_MODE @ 6 : 2 [bits],
    }

    /// APB1 freeze register. A set bit stops the peripheral while the core is halted.
    pub mod apb1fz {
        DBG_TIM2_STOP @ 0,
        DBG_TIM6_STOP @ 4,
        DBG_RTC_STOP @ 10,
        DBG_WWDG_STOP @ 11,
        DBG_IWDG_STOP @ 12,
        DBG_I2C1_SMBUS_TIMEOUT @ 21,
        DBG_I2C2_SMBUS_TIMEOUT @ 22,
        DBG_CAN_STOP @ 25,
        DBG_I2C3_SMBUS_TIMEOUT @ 30,
    }

    /// APB2 freeze register.
    pub mod apb2fz {
        DBG_TIM1_STOP @ 0,
        DBG_TIM15_STOP @ 2,
        DBG_TIM16_STOP @ 3,
        DBG_TIM17_STOP @ 4,
    }
}

/// Field tables of every DBGMCU register.
pub const REGISTER_FIELDS: &[RegisterFields] = register_fields![idcode, cr, apb1fz, apb2fz];
