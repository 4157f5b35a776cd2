// src/serial/mod.rs

//! Serial port driver (COM1) for debugging output
//!
//! Provides UART output on COM1 (0x3F8) at 38400 baud, 8N1, with FIFO
//! enabled. Transmission polls the line status register with a bounded
//! spin so a missing port cannot hang the kernel.

pub mod backend;
pub(crate) mod constants;
mod error;

pub use backend::{PortIoBackend, Register, SerialHardware};
pub use error::SerialError;

use crate::constants::BAUD_RATE_DIVISOR;
use constants::*;
use core::fmt;
use lazy_static::lazy_static;
use spin::Mutex;
use x86_64::instructions::interrupts;

/// 16550-compatible UART driven through a [`SerialHardware`] backend
#[derive(Debug)]
pub struct SerialPort<H: SerialHardware> {
    hw: H,
}

impl<H: SerialHardware> SerialPort<H> {
    pub const fn new(hw: H) -> Self {
        Self { hw }
    }

    /// Program baud rate, line format, FIFO and modem control.
    pub fn init(&mut self) {
        // Disable interrupts first
        self.hw.write(Register::InterruptEnable, 0x00);

        // Set DLAB to configure baud rate
        self.hw.write(Register::LineControl, DLAB_ENABLE);
        self.hw.write(Register::Data, (BAUD_RATE_DIVISOR & 0xFF) as u8);
        self.hw
            .write(Register::InterruptEnable, ((BAUD_RATE_DIVISOR >> 8) & 0xFF) as u8);

        // Configure 8N1 and clear DLAB
        self.hw.write(Register::LineControl, CONFIG_8N1);
        self.hw.write(Register::FifoControl, FIFO_ENABLE_CLEAR);
        self.hw
            .write(Register::ModemControl, MODEM_CTRL_ENABLE_IRQ_RTS_DSR);
    }

    /// Send one byte once the transmit holding register is empty.
    pub fn send(&mut self, byte: u8) -> Result<(), SerialError> {
        for _ in 0..TIMEOUT_ITERATIONS {
            if self.hw.read(Register::LineStatus) & LSR_TRANSMIT_EMPTY != 0 {
                self.hw.write(Register::Data, byte);
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(SerialError::Timeout)
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }
}

impl<H: SerialHardware> fmt::Write for SerialPort<H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.send(byte).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

lazy_static! {
    /// Global COM1 port, configured on first use
    ///
    /// # Locking Order
    ///
    /// Acquire SERIAL1 before the VGA writer if both are needed.
    pub static ref SERIAL1: Mutex<SerialPort<PortIoBackend>> = {
        let mut port = SerialPort::new(PortIoBackend::new());
        port.init();
        Mutex::new(port)
    };
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;

    interrupts::without_interrupts(|| {
        // NOTE: output is best-effort; a missing port must not stop the kernel
        let _ = SERIAL1.lock().write_fmt(args);
    });
}

/// Prints to the host through the serial interface.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!($($arg)*));
    };
}

/// Prints to the host through the serial interface, appending a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(concat!($fmt, "\n"), $($arg)*));
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    /// Records register writes; reports a fixed line status.
    struct RecordingBackend {
        writes: Vec<(Register, u8)>,
        line_status: u8,
        status_reads: u32,
    }

    impl RecordingBackend {
        fn new(line_status: u8) -> Self {
            Self {
                writes: Vec::new(),
                line_status,
                status_reads: 0,
            }
        }
    }

    impl SerialHardware for RecordingBackend {
        fn write(&mut self, register: Register, value: u8) {
            self.writes.push((register, value));
        }

        fn read(&mut self, register: Register) -> u8 {
            match register {
                Register::LineStatus => {
                    self.status_reads += 1;
                    self.line_status
                }
                _ => 0,
            }
        }
    }

    #[test]
    fn test_init_programs_38400_8n1() {
        let mut port = SerialPort::new(RecordingBackend::new(0));
        port.init();
        assert_eq!(
            port.hardware().writes,
            vec![
                (Register::InterruptEnable, 0x00),
                (Register::LineControl, 0x80),
                (Register::Data, 0x03),
                (Register::InterruptEnable, 0x00),
                (Register::LineControl, 0x03),
                (Register::FifoControl, 0xC7),
                (Register::ModemControl, 0x0B),
            ]
        );
    }

    #[test]
    fn test_write_str_sends_data_bytes() {
        let mut port = SerialPort::new(RecordingBackend::new(LSR_TRANSMIT_EMPTY));
        write!(port, "ok").unwrap();
        assert_eq!(
            port.hardware().writes,
            vec![(Register::Data, b'o'), (Register::Data, b'k')]
        );
    }

    #[test]
    fn test_send_times_out_when_transmitter_busy() {
        let mut port = SerialPort::new(RecordingBackend::new(0));
        assert_eq!(port.send(b'x'), Err(SerialError::Timeout));
        assert!(port.hardware().writes.is_empty());
        assert_eq!(port.hardware().status_reads, TIMEOUT_ITERATIONS);
    }
}
