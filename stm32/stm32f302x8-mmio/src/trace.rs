//! Register access events, compiled out unless the `trace` feature is enabled.
//!
//! Each event has target `mmio`, a `read` or `write` message, and the `peripheral`, `register`,
//! `address` and `value` fields.

#[cfg(feature = "trace")]
#[inline(always)]
pub(crate) fn read<T: Into<u64>>(
    peripheral: &'static str,
    register: &'static str,
    address: usize,
    value: T,
) {
    let value: u64 = value.into();
    tracing::trace!(
        target: "mmio",
        peripheral,
        register,
        address = address as u64,
        value,
        "read"
    );
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn read<T: Into<u64>>(
    _peripheral: &'static str,
    _register: &'static str,
    _address: usize,
    _value: T,
) {
}

#[cfg(feature = "trace")]
#[inline(always)]
pub(crate) fn write<T: Into<u64>>(
    peripheral: &'static str,
    register: &'static str,
    address: usize,
    value: T,
) {
    let value: u64 = value.into();
    tracing::trace!(
        target: "mmio",
        peripheral,
        register,
        address = address as u64,
        value,
        "write"
    );
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn write<T: Into<u64>>(
    _peripheral: &'static str,
    _register: &'static str,
    _address: usize,
    _value: T,
) {
}
