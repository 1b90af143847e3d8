//! MyMoodAI REST client.
//!
//! Typed access to the MyMoodAI image-generation service: model creation,
//! training image upload, order execution, and the model/avatar/style
//! listings, all authenticated with a bearer key.

pub mod api;
pub mod error;
pub mod models;
pub mod normalize;
