// src/arch/x86_64/cpu.rs

use crate::arch::Cpu;
use x86_64::instructions::hlt;

#[derive(Debug)]
pub struct X86Cpu;

impl Cpu for X86Cpu {
    fn halt() {
        hlt();
    }
}
