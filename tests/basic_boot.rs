//! Boots in QEMU and checks the hardware console. Host builds compile this
//! file to an empty test binary.

#![cfg(target_os = "none")]
#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(hello_kernel::test_runner)]
#![reexport_test_harness_main = "test_main"]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use hello_kernel::constants::GREETING;
use hello_kernel::vga_buffer::{self, TextBuffer, VgaError};

entry_point!(test_kernel_main);

fn test_kernel_main(_boot_info: &'static BootInfo) -> ! {
    hello_kernel::init().unwrap();
    test_main();
    hello_kernel::hlt_loop();
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    hello_kernel::test_panic_handler(info)
}

#[test_case]
fn test_boot_screen_on_hardware() {
    hello_kernel::boot::run().unwrap();
    vga_buffer::with_writer(|writer| {
        for (i, expected) in GREETING.bytes().enumerate() {
            assert_eq!(writer.buffer().read_byte(i * 2), Ok(expected));
            assert_eq!(writer.buffer().read_byte(i * 2 + 1), Ok(0x07));
        }
        assert_eq!(writer.buffer().read_byte(3998), Ok(b' '));
    });
}

#[test_case]
fn test_write_at_later_row() {
    assert_eq!(vga_buffer::write_at("row 5", 5), Ok(5));
    vga_buffer::with_writer(|writer| {
        assert_eq!(writer.buffer().read_byte(5 * 160), Ok(b'r'));
    });
}

#[test_case]
fn test_overflow_rejected_on_hardware() {
    assert_eq!(vga_buffer::write_at("x", 25), Err(VgaError::InvalidRow));
    assert_eq!(vga_buffer::clear(), Ok(()));
}
