pub mod list_service;
pub mod ports;
pub mod reporting;
pub mod result_publisher;
pub mod roulette_controller;

pub use list_service::*;
pub use ports::*;
pub use reporting::*;
pub use result_publisher::*;
pub use roulette_controller::*;
