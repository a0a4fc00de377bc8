//! I/O module
//!
//! Handles request decoding and response output.
//!
//! # Components
//!
//! - `json_format` - JSON format handling (request decoding, response styles)
//! - `line_reader` - Line-oriented request reader with iterator interface

pub mod json_format;
pub mod line_reader;

pub use json_format::{
    decode_request, render_response, write_response, OutputStyle, SpacedFormatter,
};
pub use line_reader::{open_file, LineReader};
