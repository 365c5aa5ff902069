pub mod catalog;
pub mod gallery;
pub mod navigation;
pub mod sections;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
