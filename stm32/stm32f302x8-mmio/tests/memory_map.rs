use stm32f302x8_mmio::memory_map::{self, Bus, LookupError, PERIPHERALS};

#[test]
fn test_bases_are_unique_and_sorted() {
    for pair in PERIPHERALS.windows(2) {
        assert!(
            pair[0].base < pair[1].base,
            "{} and {} are out of order",
            pair[0].name,
            pair[1].name,
        );
    }
}

#[test]
fn test_blocks_do_not_overlap() {
    for pair in PERIPHERALS.windows(2) {
        assert!(
            pair[0].span().end <= pair[1].base,
            "{} overlaps {}",
            pair[0].name,
            pair[1].name,
        );
    }
}

#[test]
fn test_blocks_lie_inside_their_bus() {
    for peripheral in PERIPHERALS {
        let region = peripheral.bus.region();
        assert!(
            region.start <= peripheral.base && peripheral.span().end <= region.end,
            "{} is outside {}",
            peripheral.name,
            peripheral.bus.name(),
        );
    }
}

#[test]
fn test_gpio_ports() {
    let ports = [
        memory_map::GPIOA_BASE,
        memory_map::GPIOB_BASE,
        memory_map::GPIOC_BASE,
        memory_map::GPIOD_BASE,
        memory_map::GPIOF_BASE,
    ];
    assert_eq!(ports[0], memory_map::AHB2PERIPH_BASE);
    assert!(ports.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ports.iter().all(|&base| Bus::Ahb2.contains(base)));
    assert_eq!(memory_map::GPIOF_BASE - memory_map::GPIOA_BASE, 5 * 0x400);
}

#[test]
fn test_instance_bases() {
    assert_eq!(memory_map::TIM2_BASE, 0x4000_0000);
    assert_eq!(memory_map::RTC_BASE, 0x4000_2800);
    assert_eq!(memory_map::CAN_BASE, 0x4000_6400);
    assert_eq!(memory_map::SYSCFG_BASE, 0x4001_0000);
    assert_eq!(memory_map::TIM1_BASE, 0x4001_2c00);
    assert_eq!(memory_map::DMA1_CHANNEL7_BASE, 0x4002_0080);
    assert_eq!(memory_map::RCC_BASE, 0x4002_1000);
    assert_eq!(memory_map::FLASH_R_BASE, 0x4002_2000);
    assert_eq!(memory_map::ADC1_BASE, 0x5000_0000);
    assert_eq!(memory_map::ADC1_COMMON_BASE, 0x5000_0300);
}

#[test]
fn test_every_instance_is_cataloged() {
    let names = [
        "ADC1", "ADC1_COMMON", "CAN", "COMP2", "COMP4", "COMP6", "CRC", "DAC1", "DBGMCU", "DMA1",
        "DMA1_Channel1", "DMA1_Channel7", "EXTI", "FLASH", "GPIOA", "GPIOB", "GPIOC", "GPIOD",
        "GPIOF", "I2C1", "I2C2", "I2C3", "IWDG", "OB", "OPAMP2", "PWR", "RCC", "RTC", "SPI2",
        "SPI3", "SYSCFG", "TIM1", "TIM2", "TIM6", "TIM15", "TIM16", "TIM17", "TSC", "USART1",
        "USART2", "USART3", "USB", "WWDG", "UID", "FLASHSIZE",
    ];
    for name in names {
        assert!(memory_map::find(name).is_ok(), "{name} missing");
    }
}

#[test]
fn test_absent_instances() {
    for name in ["GPIOE", "TIM3", "TIM4", "TIM8", "ADC2", "SPI1", "DMA2", "OPAMP1"] {
        assert_eq!(memory_map::find(name).unwrap_err(), LookupError::NotPresent);
    }
}

#[test]
fn test_decode_register_address() {
    let address = memory_map::RCC_BASE + 0x30;
    let rcc = memory_map::decode(address).unwrap();
    assert_eq!(rcc.name, "RCC");
    assert_eq!(rcc.register_at(address).unwrap().name, "cfgr3");

    let gap = memory_map::decode(memory_map::EXTI_BASE + 0x18).unwrap();
    assert_eq!(gap.register_at(memory_map::EXTI_BASE + 0x1c).unwrap().name, "_reserved0");
}

#[test]
fn test_bit_band_aliases() {
    // RCC_APB1ENR bit 28 (PWREN).
    assert_eq!(
        memory_map::peripheral_bit_band_alias(memory_map::RCC_BASE + 0x1c, 28),
        Some(0x4242_03f0),
    );
    assert_eq!(memory_map::peripheral_bit_band_alias(memory_map::GPIOA_BASE, 0), None);
    assert_eq!(memory_map::sram_bit_band_alias(memory_map::SRAM_BASE, 32), None);
}
