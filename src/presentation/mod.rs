pub mod host_bridge;
pub mod roulette_view;
pub mod toast;
pub mod wasm_api;

pub use host_bridge::*;
pub use roulette_view::*;
pub use toast::*;
pub use wasm_api::*;
