use stm32f302x8_mmio::memory_map::PERIPHERALS;
use stm32f302x8_mmio::{adc, can, gpio, rcc, usart, usb, Access, RegisterDesc};

#[test]
fn test_registers_tile_every_block() {
    for peripheral in PERIPHERALS {
        let mut end = 0;
        for reg in peripheral.registers {
            assert_eq!(
                reg.offset, end,
                "{}.{} does not start where the previous register ends",
                peripheral.name, reg.name,
            );
            assert!(reg.size > 0);
            end = reg.end();
        }
        assert_eq!(end, peripheral.size, "{} size", peripheral.name);
    }
}

#[test]
fn test_register_names_are_unique() {
    for peripheral in PERIPHERALS {
        for (i, reg) in peripheral.registers.iter().enumerate() {
            assert!(
                peripheral.registers[i + 1..]
                    .iter()
                    .all(|other| other.name != reg.name),
                "{}.{} declared twice",
                peripheral.name,
                reg.name,
            );
        }
    }
}

#[test]
fn test_adc_block_ends_at_calfact() {
    assert_eq!(adc::RegisterBlock::SIZE, 0xb8);
    assert_eq!(core::mem::size_of::<adc::RegisterBlock>(), 0xb8);

    let last = adc::RegisterBlock::REGISTERS.last().unwrap();
    assert_eq!(last.name, "calfact");
    assert_eq!(last.offset, 0xb4);
    assert_eq!(last.end(), 0xb8);
}

#[test]
fn test_documented_offsets() {
    let offset = |regs: &[stm32f302x8_mmio::RegisterDesc], name: &str| {
        regs.iter().find(|reg| reg.name == name).unwrap().offset
    };

    assert_eq!(offset(adc::RegisterBlock::REGISTERS, "difsel"), 0xb0);
    assert_eq!(offset(adc::RegisterBlock::REGISTERS, "jdr"), 0x80);
    assert_eq!(offset(rcc::RegisterBlock::REGISTERS, "cfgr3"), 0x30);
    assert_eq!(offset(gpio::RegisterBlock::REGISTERS, "brr"), 0x28);
    assert_eq!(offset(usart::RegisterBlock::REGISTERS, "tdr"), 0x28);
    assert_eq!(offset(usb::RegisterBlock::REGISTERS, "cntr"), 0x40);
    assert_eq!(offset(can::RegisterBlock::REGISTERS, "fmr"), 0x200);
    assert_eq!(offset(can::RegisterBlock::REGISTERS, "filter_bank"), 0x240);
}

#[test]
fn test_register_widths() {
    let usart = usart::RegisterBlock::REGISTERS;
    let brr = usart.iter().find(|reg| reg.name == "brr").unwrap();
    assert_eq!(brr.size, 2);
    assert_eq!(brr.access, Access::ReadWrite);

    let adc = adc::RegisterBlock::REGISTERS;
    let jdr = adc.iter().find(|reg| reg.name == "jdr").unwrap();
    assert_eq!(jdr.size, 16);
    assert_eq!(jdr.access, Access::ReadOnly);
}

#[test]
fn test_reserved_gaps_have_no_accessors() {
    for peripheral in PERIPHERALS {
        for reg in peripheral.registers {
            assert_eq!(
                reg.name.starts_with("_reserved"),
                !reg.access.is_accessible(),
                "{}.{}",
                peripheral.name,
                reg.name,
            );
        }
    }
}

/// Register tables of the blocks nested inside a peripheral through `sub(...)` registers.
fn nested_registers(peripheral: &str) -> &'static [&'static [RegisterDesc]] {
    match peripheral {
        "CAN" => &[
            can::tx_mailbox::RegisterBlock::REGISTERS,
            can::fifo_mailbox::RegisterBlock::REGISTERS,
            can::filter_bank::RegisterBlock::REGISTERS,
        ],
        _ => &[],
    }
}

#[test]
fn test_every_nested_block_is_resolvable() {
    for peripheral in PERIPHERALS {
        let blocks = peripheral
            .registers
            .iter()
            .filter(|reg| reg.access == Access::Block)
            .count();
        assert_eq!(nested_registers(peripheral.name).len(), blocks, "{}", peripheral.name);
    }
}

#[test]
fn test_field_tables_name_real_registers() {
    for peripheral in PERIPHERALS {
        let nested = nested_registers(peripheral.name);
        for table in peripheral.fields {
            let found = peripheral.register(table.register).is_some()
                || nested
                    .iter()
                    .any(|regs| regs.iter().any(|reg| reg.name == table.register))
                || peripheral.registers.iter().any(|reg| {
                    // Indexed registers are listed once per element, as `name0`, `name1`, ...
                    table.register.starts_with(reg.name)
                        && table.register[reg.name.len()..]
                            .bytes()
                            .all(|b| b.is_ascii_digit())
                        && reg.size > 4
                });
            assert!(found, "{} has no register {}", peripheral.name, table.register);
        }
    }
}

#[test]
fn test_can_sub_blocks() {
    let regs = can::RegisterBlock::REGISTERS;
    let tx = regs.iter().find(|reg| reg.name == "tx_mailbox").unwrap();
    assert_eq!(tx.access, Access::Block);
    assert_eq!((tx.offset, tx.size), (0x180, 3 * can::tx_mailbox::RegisterBlock::SIZE));

    let fifo = regs.iter().find(|reg| reg.name == "fifo_mailbox").unwrap();
    assert_eq!((fifo.offset, fifo.size), (0x1b0, 2 * can::fifo_mailbox::RegisterBlock::SIZE));
}
