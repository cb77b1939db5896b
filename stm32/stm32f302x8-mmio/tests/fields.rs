use register_field::Field;
use stm32f302x8_mmio::memory_map::PERIPHERALS;
use stm32f302x8_mmio::{adc, exti, rcc, tim, usb};

#[test]
fn test_sibling_fields_do_not_overlap() {
    for peripheral in PERIPHERALS {
        for table in peripheral.fields {
            assert_eq!(
                table.first_overlap(),
                None,
                "{}.{}",
                peripheral.name,
                table.register,
            );
        }
    }
}

#[test]
fn test_masks_match_position_and_width() {
    for peripheral in PERIPHERALS {
        for table in peripheral.fields {
            for desc in table.fields {
                let field = desc.field;
                let expected = ((1u64 << field.width()) - 1) << field.pos();
                assert_eq!(u64::from(field.mask()), expected, "{}", desc.name);
                for i in 0..field.width() {
                    assert_eq!(field.bit_mask(i), 1 << (field.pos() + i), "{}", desc.name);
                }
            }
        }
    }
}

#[test]
fn test_adc_voltage_regulator_bits() {
    assert_eq!(adc::cr::ADVREGEN.pos(), 28);
    assert_eq!(adc::cr::ADVREGEN.width(), 2);
    assert_eq!(adc::cr::ADVREGEN_0, 0x1000_0000);
    assert_eq!(adc::cr::ADVREGEN_1, 0x2000_0000);
    assert_eq!(
        adc::cr::ADVREGEN_0 | adc::cr::ADVREGEN_1,
        adc::cr::ADVREGEN.mask()
    );
    assert_eq!(adc::cr::ADVREGEN.mask(), 0x3000_0000);
}

#[test]
fn test_multi_bit_fields_are_the_union_of_their_bits() {
    assert_eq!(adc::cfgr::RES_0 | adc::cfgr::RES_1, adc::cfgr::RES.mask());
    assert_eq!(
        rcc::cfgr::PLLMUL_0 | rcc::cfgr::PLLMUL_1 | rcc::cfgr::PLLMUL_2 | rcc::cfgr::PLLMUL_3,
        rcc::cfgr::PLLMUL.mask()
    );
    assert_eq!(tim::bdtr::LOCK_0 | tim::bdtr::LOCK_1, tim::bdtr::LOCK.mask());
}

#[test]
fn test_legacy_aliases() {
    assert_eq!(adc::ier::RDY, adc::ier::ADRDYIE);
    assert_eq!(rcc::cfgr3::TIM1SW_HCLK, rcc::cfgr3::TIM1SW_PCLK2);
    assert_eq!(exti::imr::IM0, exti::imr::MR0);
    assert_eq!(usb::cntr::LPMODE, usb::cntr::LP_MODE);
}

#[test]
fn test_legacy_aliases_are_not_listed() {
    assert!(adc::ier::FIELDS.iter().all(|desc| desc.name != "RDY"));
    assert!(exti::imr::FIELDS.iter().all(|desc| desc.name != "IM0"));
}

#[test]
fn test_field_round_trip() {
    let fields = [
        adc::cr::ADVREGEN,
        adc::cfgr::EXTSEL,
        rcc::cfgr::PLLMUL,
        rcc::cfgr::SW,
        tim::cnt::CNT,
        usb::epr::STAT_RX,
        Field::bit(31),
    ];
    let words = [0, u32::MAX, 0xa5a5_5a5a, 0x1234_5678];
    for field in fields {
        for word in words {
            for value in [0, 1, field.value_mask() / 2, field.value_mask()] {
                let set = field.set(word, value);
                assert_eq!(field.get(set), value);
                assert_eq!(set & !field.mask(), word & !field.mask());
            }
        }
    }
}

#[test]
fn test_enumerated_values() {
    assert_eq!(rcc::cfgr::SW_PLL, rcc::cfgr::SW.value(0b10));
    assert_eq!(adc::cfgr::RES_8BIT, adc::cfgr::RES.value(0b10));
    assert_eq!(tim::smcr::SMS_3, 1 << 16);
}
