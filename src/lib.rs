// src/lib.rs
//! hello_kernel - minimal x86_64 kernel that greets on the VGA text console
//!
//! The kernel clears the 80x25 VGA text buffer and writes a greeting at a
//! given row. Diagnostics go to COM1 through the `log` facade.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![allow(missing_docs)]

pub mod arch;
pub mod boot;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod qemu;
pub mod serial;
pub mod vga_buffer;

use crate::arch::{ArchCpu, Cpu};
use core::panic::PanicInfo;

pub use errors::{KernelError, Result};
pub use qemu::{exit_qemu, QemuExitCode};

/// Bring up kernel diagnostics (serial port and logger).
pub fn init() -> Result<()> {
    logger::init()?;
    log::info!(
        "hello_kernel {} ({} build for {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
    );
    Ok(())
}

/// Halt loop
#[inline]
pub fn hlt_loop() -> ! {
    loop {
        ArchCpu::halt();
    }
}

/// Test trait
pub trait Testable {
    fn run(&self);
}

impl<T> Testable for T
where
    T: Fn(),
{
    fn run(&self) {
        crate::serial_print!("{} ... ", core::any::type_name::<T>());
        self();
        crate::serial_println!("[ok]");
    }
}

/// Test runner for bare-metal integration tests
pub fn test_runner(tests: &[&dyn Testable]) {
    crate::serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler body for bare-metal integration tests
#[inline(never)]
pub fn test_panic_handler(info: &PanicInfo) -> ! {
    crate::serial_println!("[failed]\n");
    crate::serial_println!("Error: {}\n", info);
    exit_qemu(QemuExitCode::Failed);
}
