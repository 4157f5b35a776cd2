//! Utilities for interacting with QEMU test infrastructure.

use crate::arch::{ArchCpu, Cpu};
use crate::arch::qemu;

/// Exit codes understood by QEMU's ISA debug exit device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// Signal that the test run completed successfully.
    Success = 0x10,
    /// Signal that at least one test failed.
    Failed = 0x11,
}

/// Write the exit code to QEMU's debug exit port and halt the CPU.
#[inline]
pub fn exit_qemu(code: QemuExitCode) -> ! {
    qemu::exit_qemu(code as u32);

    loop {
        ArchCpu::halt();
    }
}
