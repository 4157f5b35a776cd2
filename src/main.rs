//! hello_kernel - boot entry point
//!
//! Clears the VGA text console and writes the greeting at row 0.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(target_os = "none")]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::panic::PanicInfo;
    use hello_kernel::errors::ErrorContext;
    use hello_kernel::serial_println;

    entry_point!(kernel_main);

    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        if let Err(err) = hello_kernel::init() {
            serial_println!("[KERNEL] logger unavailable: {}", err);
        }

        match hello_kernel::boot::run() {
            Ok(()) => log::info!("boot screen ready, halting"),
            Err(err) => log::error!("boot screen failed: {} ({})", err, err.context()),
        }

        hello_kernel::hlt_loop();
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("[KERNEL PANIC] {}", info);
        hello_kernel::hlt_loop();
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("hello_kernel runs on bare metal; build it with `cargo kbuild` and boot the image");
}
