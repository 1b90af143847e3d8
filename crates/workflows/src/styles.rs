//! The style catalog workflow: one listing call plus the per-style
//! display selection the catalog page needs.
//!
//! Styles carry generic and gendered name/image variants; which one is
//! shown depends on the style's own gender marker, never on the viewer.

use mymoodai_client::api::MyMoodAIApi;
use mymoodai_client::error::MyMoodAIError;
use mymoodai_client::models::{Style, StyleGender};

use crate::non_empty;

/// Shown for styles the service left unnamed.
pub const UNNAMED_STYLE: &str = "Unnamed Style";

/// Display fields for one style catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCard {
    pub name: String,
    /// Preview image URL, when the style has any usable variant.
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl StyleCard {
    /// Shape a wire style into its display form.
    pub fn from_style(style: &Style) -> Self {
        StyleCard {
            name: display_name(style),
            image: display_image(style),
            description: non_empty(style.description.as_deref()).map(str::to_string),
            category: non_empty(style.category.as_deref()).map(str::to_string),
        }
    }
}

/// Pick the preview image for a style.
///
/// A gendered variant wins when the style is marked for that gender and
/// the variant is present; otherwise the generic `image_v`, then `image`.
/// Empty strings count as absent throughout.
pub fn display_image(style: &Style) -> Option<String> {
    let gendered = match style.gender {
        Some(StyleGender::Woman) => non_empty(style.image_female_v.as_deref()),
        Some(StyleGender::Man) => non_empty(style.image_male_v.as_deref()),
        _ => None,
    };

    gendered
        .or_else(|| non_empty(style.image_v.as_deref()))
        .or_else(|| non_empty(style.image.as_deref()))
        .map(str::to_string)
}

/// Pick the display name for a style: the male variant when the style is
/// marked `man` and has one, else the generic name, else [`UNNAMED_STYLE`].
pub fn display_name(style: &Style) -> String {
    if style.gender == Some(StyleGender::Man) {
        if let Some(name) = non_empty(style.name_male.as_deref()) {
            return name.to_string();
        }
    }
    non_empty(style.name.as_deref())
        .unwrap_or(UNNAMED_STYLE)
        .to_string()
}

/// Fetch the style catalog and shape every entry into a card, preserving
/// catalog order.
pub async fn browse_styles<A>(api: &A) -> Result<Vec<StyleCard>, MyMoodAIError>
where
    A: MyMoodAIApi + ?Sized,
{
    let styles = api.list_styles().await?;
    tracing::info!(count = styles.len(), "Loaded style catalog");

    Ok(styles.iter().map(StyleCard::from_style).collect())
}
