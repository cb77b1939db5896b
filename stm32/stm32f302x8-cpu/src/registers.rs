pub mod primask;
