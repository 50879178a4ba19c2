//! FFI bindings for the C implementations in `c/dot.c`.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_double, size_t};

    extern "C" {
        pub fn dot_c_original(v1: *const c_double, v2: *const c_double, n: size_t) -> c_double;
        pub fn dot_c_scalar_opt(a: *const c_double, b: *const c_double, n: size_t) -> c_double;
    }
}

#[cfg(c_implementation_active)]
use super::check_lengths;
#[cfg(c_implementation_active)]
use crate::error::DotError;

/// Whether build.rs compiled and linked the C sources
pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);

/// C sequential loop, same accumulation order as the reference
#[cfg(c_implementation_active)]
pub fn dot_c_original(a: &[f64], b: &[f64]) -> Result<f64, DotError> {
    check_lengths(a, b)?;
    // SAFETY: both pointers are valid for a.len() reads after the check.
    Ok(unsafe { ffi::dot_c_original(a.as_ptr(), b.as_ptr(), a.len()) })
}

/// C 4x unrolled loop
#[cfg(c_implementation_active)]
pub fn dot_c_scalar_opt(a: &[f64], b: &[f64]) -> Result<f64, DotError> {
    check_lengths(a, b)?;
    // SAFETY: both pointers are valid for a.len() reads after the check.
    Ok(unsafe { ffi::dot_c_scalar_opt(a.as_ptr(), b.as_ptr(), a.len()) })
}
