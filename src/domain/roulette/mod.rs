//! Roulette core: winner selection, circular track and spin animation.

pub mod animation;
pub mod candidate;
pub mod config;
pub mod result;
pub mod selector;
pub mod track;

pub use animation::*;
pub use candidate::*;
pub use config::*;
pub use result::*;
pub use selector::*;
pub use track::*;
