mod blocks;
mod core;
mod decomposition;
pub use self::decomposition::*;
mod gemm;
pub(crate) use self::gemm::*;
mod matrix_math;
