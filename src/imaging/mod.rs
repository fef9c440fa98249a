//! Image handling module
//!
//! This module handles:
//! - Encoding the selected file into an inline request payload
//! - The on-screen preview of the selected file

pub mod encoder;
pub mod preview;

pub use encoder::{encode_file, EncodedImagePart};
pub use preview::Preview;
