// src/constants.rs

//! Kernel constants and configuration values
//!
//! This module centralizes the compile-time configuration of the kernel:
//! what is shown at boot, where, and how diagnostics are emitted.

use crate::vga_buffer::ColorCode;
use log::LevelFilter;

/// Greeting written to the screen at boot
pub const GREETING: &str = "Hello, world! Welcome to my kernel.";

/// Row the greeting is written to
pub const GREETING_ROW: usize = 0;

/// Attribute used for the boot screen (light gray on black)
pub const DEFAULT_ATTRIBUTE: ColorCode = ColorCode::normal();

/// COM1 base I/O port address
pub const SERIAL_IO_PORT: u16 = 0x3F8;

/// UART divisor for 38400 baud (115200 / 3)
pub const BAUD_RATE_DIVISOR: u16 = 3;

/// QEMU isa-debug-exit I/O port
pub const QEMU_EXIT_PORT: u16 = 0xF4;

/// Most verbose level the serial logger emits
pub const MAX_LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
