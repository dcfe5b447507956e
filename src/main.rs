//! RustMorseInput - Main entry point
//!
//! Device build (ESP-IDF):
//! 1. Open the emulated EEPROM and load settings
//! 2. Build the device menu
//! 3. Poll UART key bytes, drive the menu, drain logs to UART
//!
//! Host build: the same loop as a line-oriented simulator on stdin/stdout.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod device {
    use core::cell::{Cell, RefCell};
    use core::fmt::Write;

    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::sys as esp_idf_sys;

    use rust_morse_input::config::nvs::NvsEeprom;
    use rust_morse_input::logging::timestamp_us;
    use rust_morse_input::menu::{MenuUseEvent, DEVICE_MENU_ITEMS, ROOT_LABEL};
    use rust_morse_input::serial_log::{self, uart::{UartConsole, UartConsoleConfig}};
    use rust_morse_input::{
        dev_error, ConfigStore, DeviceMenu, Menu, MenuGraph, MenuIntent, LOG_STREAM,
    };

    #[no_mangle]
    fn main() {
        // Initialize ESP-IDF
        esp_idf_sys::link_patches();

        let Some(peripherals) = Peripherals::take().ok() else {
            return;
        };
        let mut uart = match UartConsole::new(
            peripherals.uart1,
            peripherals.pins.gpio6,
            peripherals.pins.gpio7,
            &UartConsoleConfig::default(),
        ) {
            Ok(uart) => uart,
            Err(_) => return,
        };

        let store = match NvsEeprom::take() {
            Ok(eeprom) => RefCell::new(ConfigStore::new(eeprom)),
            Err(e) => {
                dev_error!(LOG_STREAM, Config, timestamp_us(), "NVS unavailable: {:?}", e);
                serial_log::drain(&LOG_STREAM, &mut uart);
                return;
            }
        };
        let loaded = store.borrow_mut().load();
        match loaded {
            Ok(_) => {
                let _ = write!(uart, "{}", store.borrow().config());
            }
            Err(e) => dev_error!(LOG_STREAM, Config, timestamp_us(), "load failed: {}", e),
        }

        let mut graph = MenuGraph::<DEVICE_MENU_ITEMS>::new(ROOT_LABEL);
        let layout = match DeviceMenu::build(&mut graph) {
            Ok(layout) => layout,
            Err(e) => {
                dev_error!(LOG_STREAM, Menu, timestamp_us(), "menu wiring: {}", e);
                serial_log::drain(&LOG_STREAM, &mut uart);
                return;
            }
        };

        let report_pending = Cell::new(false);
        let mut on_use = |event: MenuUseEvent| {
            let Some(action) = layout.action(event.item.id()) else {
                return;
            };
            let result = action.perform(&mut *store.borrow_mut());
            match result {
                Ok(()) => report_pending.set(action.reports_config()),
                Err(e) => dev_error!(LOG_STREAM, Config, timestamp_us(), "{:?}: {}", action, e),
            }
        };

        let mut menu = Menu::new(&graph).with_use_handler(&mut on_use);

        loop {
            while let Some(intent) = uart.read_byte().and_then(MenuIntent::from_byte) {
                menu.apply(intent);
            }

            if report_pending.replace(false) {
                let _ = write!(uart, "{}", store.borrow().config());
            }

            serial_log::drain(&LOG_STREAM, &mut uart);

            unsafe {
                esp_idf_sys::vTaskDelay(1);
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    use std::cell::RefCell;
    use std::io::{self, BufRead, Write};

    use rust_morse_input::config::RamStorage;
    use rust_morse_input::console::{execute, parse_line};
    use rust_morse_input::menu::{MenuChangeEvent, MenuUseEvent, DEVICE_MENU_ITEMS, ROOT_LABEL};
    use rust_morse_input::serial_log;
    use rust_morse_input::{ConfigStore, DeviceMenu, Menu, MenuGraph, MenuIntent, LOG_STREAM};

    /// `core::fmt::Write` over stdout
    struct Stdout;

    impl core::fmt::Write for Stdout {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            io::stdout().write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
        }
    }

    let store = RefCell::new(ConfigStore::new(RamStorage::<64>::new()));
    let loaded = store.borrow_mut().load();
    match loaded {
        Ok(_) => print!("{}", store.borrow().config()),
        Err(e) => eprintln!("settings: {}", e),
    }

    let mut graph = MenuGraph::<DEVICE_MENU_ITEMS>::new(ROOT_LABEL);
    let layout = match DeviceMenu::build(&mut graph) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("menu: {}", e);
            std::process::exit(1);
        }
    };

    println!("keys: n next, p previous, s enter, b back, r root, u use, q quit");
    println!("      :<command> runs a console command (:help)");

    let mut on_change = |event: MenuChangeEvent| {
        println!("{} -> {}", event.from.label(), event.to.label());
    };
    let mut on_use = |event: MenuUseEvent| {
        println!("use {}", event.item.label());
        if let Some(action) = layout.action(event.item.id()) {
            let result = action.perform(&mut *store.borrow_mut());
            match result {
                Ok(()) if action.reports_config() => print!("{}", store.borrow().config()),
                Ok(()) => {}
                Err(e) => println!("{:?} failed: {}", action, e),
            }
        }
    };

    let mut menu = Menu::new(&graph)
        .with_change_handler(&mut on_change)
        .with_use_handler(&mut on_use);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();

        if line == "q" {
            break;
        }

        if let Some(command) = line.strip_prefix(':') {
            if let Err(e) = execute(&parse_line(command), &mut *store.borrow_mut(), &mut Stdout) {
                println!("{}", e);
            }
        } else {
            for key in line.chars() {
                match MenuIntent::from_key(key) {
                    Some(intent) => menu.apply(intent),
                    None => println!("? {}", key),
                }
            }
            println!("at {}", menu.current().label());
        }

        serial_log::drain(&LOG_STREAM, &mut Stdout);
    }
}
