//! Payload shapes of the spreadsheet API. The JSONP transport lives in the
//! host page; this crate only encodes requests and decodes answers.

pub mod dto;

pub use dto::*;
