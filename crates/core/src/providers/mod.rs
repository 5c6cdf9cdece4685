pub mod traits;

// Implementations
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod http;
pub mod wallet;
