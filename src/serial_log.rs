//! Serial log output.
//!
//! Drains a [`LogStream`] into any `core::fmt::Write` sink: the UART on the
//! device, stdout in the host simulator.
//!
//! Line format: `[timestamp_us] LEVEL source: message`

use core::fmt::Write;

use crate::logging::{LogEntry, LogStream};

/// Write one entry as a log line.
pub fn write_entry(out: &mut dyn Write, entry: &LogEntry) -> core::fmt::Result {
    writeln!(
        out,
        "[{:10}] {}: {}: {}",
        entry.timestamp_us,
        entry.level.as_str(),
        entry.source.as_str(),
        entry.message()
    )
}

/// Drain every pending entry into `out`, then report and reset the drop count.
///
/// Returns the number of entries written.
pub fn drain<const N: usize>(stream: &LogStream<N>, out: &mut dyn Write) -> usize {
    let mut written = 0;

    while let Some(entry) = stream.drain() {
        if write_entry(out, &entry).is_err() {
            break;
        }
        written += 1;
    }

    let dropped = stream.dropped();
    if dropped > 0 {
        let _ = writeln!(out, "[WARN] Dropped: {}", dropped);
        stream.reset_dropped();
    }

    written
}

/// UART console for the device build: log output and single-key input.
#[cfg(target_os = "espidf")]
pub mod uart {
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripheral::Peripheral;
    use esp_idf_svc::hal::uart::{self, UartDriver};
    use esp_idf_svc::sys::EspError;

    /// UART configuration for the console.
    pub struct UartConsoleConfig {
        pub baud_rate: u32,
    }

    impl Default for UartConsoleConfig {
        fn default() -> Self {
            Self { baud_rate: 115200 }
        }
    }

    /// `core::fmt::Write` adapter over UART1 that also polls received bytes.
    pub struct UartConsole<'d> {
        driver: UartDriver<'d>,
    }

    impl<'d> UartConsole<'d> {
        /// Initialize UART1 on the given TX/RX pins.
        pub fn new(
            uart: impl Peripheral<P = uart::UART1> + 'd,
            tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
            rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
            config: &UartConsoleConfig,
        ) -> Result<Self, EspError> {
            let uart_config = uart::config::Config::default()
                .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

            let driver = UartDriver::new(
                uart,
                tx_pin,
                rx_pin,
                Option::<gpio::AnyIOPin>::None, // CTS
                Option::<gpio::AnyIOPin>::None, // RTS
                &uart_config,
            )?;

            Ok(Self { driver })
        }

        /// Next received byte, without waiting.
        pub fn read_byte(&mut self) -> Option<u8> {
            let mut buf = [0u8; 1];
            match self.driver.read(&mut buf, 0) {
                Ok(1) => Some(buf[0]),
                _ => None,
            }
        }
    }

    impl core::fmt::Write for UartConsole<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            self.driver.write(s.as_bytes()).map(|_| ()).map_err(|_| core::fmt::Error)
        }
    }
}
