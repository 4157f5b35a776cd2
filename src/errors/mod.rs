// src/errors/mod.rs

//! Error handling for the kernel

pub mod unified;

pub use unified::{ErrorContext, KernelError, Result};
