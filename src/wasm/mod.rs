//! WebAssembly bindings for the tracer.
//!
//! This module exposes a JavaScript-callable handle so a browser-hosted
//! emulator can feed memory accesses in and pull bank listings out.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::TracerHandle;
