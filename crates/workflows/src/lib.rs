//! Page workflows over the MyMoodAI client.
//!
//! Three call sequences matching the pages they back: training (create,
//! upload, run), the model/avatar dashboard with pagination, and the style
//! catalog. Each yields plain display values for a rendering layer; none of
//! them retries or persists anything.

pub mod browse;
pub mod styles;
pub mod training;

/// Treat empty strings the way the service treats absent fields.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
