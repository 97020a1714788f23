//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `keys` - keyboard shortcut to message mapping
//! - `surface` - softbuffer presentation of rendered frames

pub mod app;
pub mod keys;
pub mod surface;

pub use app::App;
