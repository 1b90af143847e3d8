//! Terminal front-end for the MyMoodAI demo workflows.
//!
//! The binary wires environment configuration to the page workflows;
//! rendering lives here so it can be exercised without a live service.

pub mod render;
