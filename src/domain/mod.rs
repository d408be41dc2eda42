pub mod errors;
pub mod events;
pub mod items;
pub mod logging;
pub mod roulette;
