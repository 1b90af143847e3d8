//! Wire types for the MyMoodAI REST API.
//!
//! Records tolerate missing fields wherever the service is known to omit
//! them; unknown fields are ignored. Models and orders share one id space
//! (a model is an order with `parent == 0`).

use serde::{Deserialize, Serialize};

/// Identifier of an order (or model; both live in the same id space).
pub type OrderId = i64;

/// Identifier of a style catalog entry.
pub type StyleId = i64;

/// Identifier of an uploaded training image.
pub type SelfieId = i64;

/// Payload for the order creation endpoints.
///
/// `parent == 0` asks for a fresh trainable model; a nonzero `parent`
/// references an already-trained model and asks for avatar generation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateModelRequest {
    /// Styles to generate avatars for.
    pub styles: Vec<StyleId>,
    /// Service-defined gender code (the demo payload uses `1`).
    pub gender: i32,
    /// Parent model id, or `0` for a new training order.
    pub parent: OrderId,
}

/// Response of the order creation endpoints. Only `id` is contractual;
/// everything else the service attaches is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedModel {
    pub id: OrderId,
}

/// A model (or order) as returned by the listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Model {
    pub id: OrderId,
    /// Styles the order was created with.
    #[serde(default)]
    pub styles: Vec<StyleId>,
    /// Service-defined gender code.
    pub gender: Option<i32>,
    /// Parent model id; `0` marks a root training order.
    #[serde(default)]
    pub parent: OrderId,
}

/// One generated avatar. Every field is optional on the wire; a record
/// without `filename_small` cannot be shown as a thumbnail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Avatar {
    /// Thumbnail-sized image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_small: Option<String>,
    /// Full-sized image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Large-sized image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_large: Option<String>,
}

/// A training image (selfie) previously uploaded to an order.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingImage {
    pub id: SelfieId,
    pub filename: Option<String>,
}

/// Gender marker attached to style catalog entries.
///
/// The service vocabulary is open-ended; anything other than `man` or
/// `woman` folds into [`StyleGender::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleGender {
    Man,
    Woman,
    #[serde(other)]
    Unspecified,
}

/// A style catalog entry.
///
/// Image and name fields come in generic and gendered variants; picking
/// the right one for display is the style workflow's job, not the wire
/// type's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Style {
    pub id: StyleId,
    pub name: Option<String>,
    /// Name variant shown for styles marked `man`.
    pub name_male: Option<String>,
    pub gender: Option<StyleGender>,
    pub image: Option<String>,
    /// Preferred generic image variant.
    pub image_v: Option<String>,
    pub image_female_v: Option<String>,
    pub image_male_v: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
