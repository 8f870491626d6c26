//! Static register tables, one module per supported architecture.

pub mod arm;
pub mod arm64;
pub mod ia32;
pub mod riscv64;
pub mod x64;
pub mod x87;
