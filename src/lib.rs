pub mod content;
pub mod cursor;
pub mod geometry;
pub mod magnetic;
pub mod motion;
pub mod reveal;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
