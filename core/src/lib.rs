//! Content and interaction logic shared by the ASKRA site frontend and host.
//!
//! Everything here is plain data and total functions, so it compiles for
//! both `wasm32-unknown-unknown` and the native server.

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod data;
pub mod model;
pub mod motion;
pub mod page;
pub mod sitemap;
pub mod slider;
