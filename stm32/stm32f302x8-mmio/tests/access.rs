use core::mem::MaybeUninit;

use stm32f302x8_mmio::memory_map::{self, PERIPHERALS};
use stm32f302x8_mmio::{
    adc, can, gpio, rcc, uninterruptible, usart, Adc, Can, Gpio, PermissionRoot, Rcc, Usart,
};

/// RAM standing in for a register block.
struct Fake<T>(Box<MaybeUninit<T>>);

impl<T> Fake<T> {
    fn new() -> Self {
        Self(Box::new(MaybeUninit::zeroed()))
    }

    fn ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    fn word(&mut self, offset: usize) -> u32 {
        unsafe { self.ptr().cast::<u8>().add(offset).cast::<u32>().read() }
    }
}

#[test]
fn test_fixed_instances_use_catalog_bases() {
    let root = unsafe { PermissionRoot::new_unchecked() };
    assert_eq!(Gpio::gpioa(root).base(), memory_map::GPIOA_BASE);
    assert_eq!(Gpio::gpiof(root).base(), memory_map::GPIOF_BASE);
    assert_eq!(Rcc::rcc(root).base(), memory_map::RCC_BASE);
    assert_eq!(Usart::usart2(root).base(), memory_map::USART2_BASE);

    let gpiob = Gpio::gpiob(root);
    assert_eq!(gpiob.address_of_odr(), memory_map::GPIOB_BASE + 0x14);
    assert_eq!(gpiob.address_of_afr(1), memory_map::GPIOB_BASE + 0x24);

    let desc = memory_map::find("GPIOB").unwrap();
    assert_eq!(desc.base, gpiob.base());
    assert_eq!(desc.size, gpio::RegisterBlock::SIZE);
}

#[test]
fn test_every_address_of_matches_the_catalog() {
    let root = unsafe { PermissionRoot::new_unchecked() };
    let rcc = Rcc::rcc(root);
    let desc = memory_map::find("RCC").unwrap();
    for (reg, address) in desc.registers.iter().zip([
        rcc.address_of_cr(),
        rcc.address_of_cfgr(),
        rcc.address_of_cir(),
        rcc.address_of_apb2rstr(),
        rcc.address_of_apb1rstr(),
        rcc.address_of_ahbenr(),
        rcc.address_of_apb2enr(),
        rcc.address_of_apb1enr(),
        rcc.address_of_bdcr(),
        rcc.address_of_csr(),
        rcc.address_of_ahbrstr(),
        rcc.address_of_cfgr2(),
        rcc.address_of_cfgr3(),
    ]) {
        assert_eq!(desc.base + reg.offset, address, "{}", reg.name);
    }
    assert!(PERIPHERALS.iter().any(|p| p.base == rcc.base()));
}

#[test]
fn test_read_write_modify() {
    let mut fake = Fake::<rcc::RegisterBlock>::new();
    let rcc = unsafe { Rcc::from_ptr(fake.ptr()) };

    rcc.write_cfgr(rcc::cfgr::SW_PLL);
    assert_eq!(rcc.read_cfgr(), 0x0000_0002);

    uninterruptible(|u| {
        rcc.modify_cfgr(u, |w| rcc::cfgr::PLLMUL.set(w, 7));
        rcc.modify_ahbenr(u, |w| w | rcc::ahbenr::GPIOAEN.mask());
    });
    assert_eq!(rcc::cfgr::PLLMUL.get(rcc.read_cfgr()), 7);
    assert_eq!(rcc::cfgr::SW.get(rcc.read_cfgr()), 0b10);
    assert_eq!(fake.word(0x14), rcc::ahbenr::GPIOAEN.mask());
}

#[test]
fn test_indexed_registers() {
    let mut fake = Fake::<adc::RegisterBlock>::new();
    let adc = unsafe { Adc::from_ptr(fake.ptr()) };

    adc.write_ofr(2, adc::ofr::OFFSET_EN.mask() | 0x123);
    assert_eq!(adc.read_ofr_2(), 0x8000_0123);
    assert_eq!(adc.read_ofr(0), 0);
    uninterruptible(|u| adc.modify_ofr_3(u, |w| w | 1));
    assert_eq!(fake.word(0x60 + 3 * 4), 1);
    assert_eq!(fake.word(0x60 + 2 * 4), 0x8000_0123);

    assert_eq!(adc.address_of_jdr(3), adc.base() + 0x8c);
}

#[test]
#[should_panic(expected = "register index out of range")]
fn test_index_out_of_range() {
    let mut fake = Fake::<adc::RegisterBlock>::new();
    let adc = unsafe { Adc::from_ptr(fake.ptr()) };
    adc.read_jdr(4);
}

#[test]
fn test_half_word_registers() {
    let mut fake = Fake::<usart::RegisterBlock>::new();
    let usart = unsafe { Usart::from_ptr(fake.ptr()) };

    usart.write_brr(0x0271);
    usart.write_tdr(b'A'.into());
    assert_eq!(usart.read_brr(), 0x0271);
    assert_eq!(fake.word(0x0c), 0x0000_0271);
    assert_eq!(fake.word(0x28), 0x0000_0041);
}

#[test]
fn test_can_sub_blocks() {
    let mut fake = Fake::<can::RegisterBlock>::new();
    let can = unsafe { Can::from_ptr(fake.ptr()) };

    let mailbox = can.tx_mailbox_2();
    assert_eq!(mailbox, can.tx_mailbox(2));
    assert_eq!(mailbox.base(), can.base() + 0x180 + 2 * 0x10);
    mailbox.write_tdlr(0xdead_beef);
    assert_eq!(fake.word(0x1a8), 0xdead_beef);

    let bank = can.filter_bank(13);
    assert_eq!(bank.address_of_fr2(), can.base() + 0x240 + 13 * 8 + 4);
    bank.write_fr1(0x1234_5678);
    assert_eq!(fake.word(0x2a8), 0x1234_5678);

    assert_eq!(can.fifo_mailbox_1().read_rdlr(), 0);
}

#[test]
fn test_handles_are_copy_and_send() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Gpio<'static>>();
    assert_send_sync::<can::TxMailbox<'static>>();
}

#[cfg(feature = "trace")]
mod trace {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use stm32f302x8_mmio::{rcc, spi, usb, Rcc, Spi, Usb};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{Layer, Registry};

    use super::Fake;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Recorded {
        target: String,
        message: String,
        peripheral: String,
        register: String,
        address: u64,
        value: u64,
    }

    impl Visit for Recorded {
        fn record_u64(&mut self, field: &Field, value: u64) {
            match field.name() {
                "address" => self.address = value,
                "value" => self.value = value,
                _ => {}
            }
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            match field.name() {
                "peripheral" => self.peripheral = value.to_owned(),
                "register" => self.register = value.to_owned(),
                _ => {}
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = format!("{value:?}");
            }
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Recorded>>>);

    impl<S: Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut recorded = Recorded {
                target: event.metadata().target().to_owned(),
                ..Default::default()
            };
            event.record(&mut recorded);
            self.0.lock().unwrap().push(recorded);
        }
    }

    /// Runs `f` with a subscriber that records every event emitted on this thread.
    fn record(f: impl FnOnce()) -> Vec<Recorded> {
        let recorder = Recorder::default();
        {
            let _guard = Registry::default().with(recorder.clone()).set_default();
            f();
        }
        let events = std::mem::take(&mut *recorder.0.lock().unwrap());
        events
    }

    fn access(
        message: &str,
        peripheral: &str,
        register: &str,
        address: usize,
        value: u64,
    ) -> Recorded {
        Recorded {
            target: "mmio".to_owned(),
            message: message.to_owned(),
            peripheral: peripheral.to_owned(),
            register: register.to_owned(),
            address: address as u64,
            value,
        }
    }

    #[test]
    fn test_register_accesses_are_traced() {
        let mut fake = Fake::<rcc::RegisterBlock>::new();
        let rcc = unsafe { Rcc::from_ptr(fake.ptr()) };

        let events = record(|| {
            rcc.write_cfgr(rcc::cfgr::SW_PLL);
            assert_eq!(rcc.read_cfgr(), rcc::cfgr::SW_PLL);
        });
        let address = rcc.address_of_cfgr();
        assert_eq!(
            events,
            [
                access("write", "RCC", "cfgr", address, 0x2),
                access("read", "RCC", "cfgr", address, 0x2),
            ],
        );
    }

    #[test]
    fn test_narrow_accesses_are_traced() {
        let mut usb_fake = Fake::<usb::RegisterBlock>::new();
        let usb = unsafe { Usb::from_ptr(usb_fake.ptr()) };
        let mut spi_fake = Fake::<spi::RegisterBlock>::new();
        let spi = unsafe { Spi::from_ptr(spi_fake.ptr()) };

        let events = record(|| {
            usb.write_epr(3, 0x0283);
            usb.read_epr(3);
            spi.write_dr_u8(0x5a);
        });
        assert_eq!(
            events,
            [
                access("write", "USB", "epr", usb.address_of_epr(3), 0x0283),
                access("read", "USB", "epr", usb.address_of_epr(3), 0x0283),
                access("write", "SPI", "dr", spi.address_of_dr(), 0x5a),
            ],
        );
    }
}
