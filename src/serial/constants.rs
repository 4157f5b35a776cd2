// src/serial/constants.rs

//! Constants and register definitions for serial port operations

/// Register offsets from base port
pub mod register_offset {
    pub const DATA: u16 = 0;
    pub const INTERRUPT_ENABLE: u16 = 1;
    pub const FIFO_CONTROL: u16 = 2;
    pub const LINE_CONTROL: u16 = 3;
    pub const MODEM_CONTROL: u16 = 4;
    pub const LINE_STATUS: u16 = 5;
}

/// Line control: divisor latch access bit
pub const DLAB_ENABLE: u8 = 0x80;

/// Line control: 8 data bits, no parity, one stop bit, DLAB cleared
pub const CONFIG_8N1: u8 = 0x03;

/// FIFO control: enable, clear both queues, 14-byte threshold
pub const FIFO_ENABLE_CLEAR: u8 = 0xC7;

/// Modem control: DTR, RTS and OUT2 (IRQ enable)
pub const MODEM_CTRL_ENABLE_IRQ_RTS_DSR: u8 = 0x0B;

/// Line status: transmit holding register empty
pub const LSR_TRANSMIT_EMPTY: u8 = 0x20;

/// Polls of the line status register before a byte is given up on
pub const TIMEOUT_ITERATIONS: u32 = 100_000;
