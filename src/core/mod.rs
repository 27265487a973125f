//! Core building blocks: the selector checker and the parameters that
//! describe a single invocation. These are internal primitives consumed
//! by the high-level `api` module.
pub mod checker;
pub mod params;
