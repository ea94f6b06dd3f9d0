//! Page compositions.

pub mod landing;
