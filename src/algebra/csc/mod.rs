#![allow(non_snake_case)]

mod core;
mod insert;
mod matrix_math;
pub(crate) use matrix_math::*;
