//! The dashboard workflow: list every model, then page through each
//! model's avatars until the service reports an empty page.
//!
//! One model failing to list its avatars does not abort the dashboard;
//! the failure is recorded on that model's card and enumeration moves on.

use mymoodai_client::api::MyMoodAIApi;
use mymoodai_client::error::MyMoodAIError;
use mymoodai_client::models::{Avatar, OrderId};

use crate::non_empty;

/// Hard ceiling on avatar pages fetched per model to prevent runaway
/// pagination against a service that never returns an empty page.
pub const MAX_AVATAR_PAGES: u32 = 200;

/// One model's slot on the dashboard.
#[derive(Debug, Clone)]
pub struct ModelCard {
    pub model_id: OrderId,
    /// Avatars collected across all fetched pages, in arrival order.
    pub avatars: Vec<AvatarCard>,
    /// Set when the avatar listing failed partway; avatars fetched before
    /// the failure are kept.
    pub error: Option<String>,
}

impl ModelCard {
    /// Whether any avatar was collected for this model.
    pub fn has_avatars(&self) -> bool {
        !self.avatars.is_empty()
    }
}

/// How a single avatar should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarCard {
    /// A clickable thumbnail. `full` falls back to the thumbnail URL when
    /// the service sent no full-size variant.
    Image { thumbnail: String, full: String },
    /// No usable thumbnail; the JSON-encoded record is shown instead.
    Raw(String),
}

impl AvatarCard {
    /// Shape a wire avatar into its display form. Empty strings count as
    /// absent.
    pub fn from_avatar(avatar: &Avatar) -> Self {
        match non_empty(avatar.filename_small.as_deref()) {
            Some(thumbnail) => {
                let full = non_empty(avatar.filename.as_deref()).unwrap_or(thumbnail);
                AvatarCard::Image {
                    thumbnail: thumbnail.to_string(),
                    full: full.to_string(),
                }
            }
            None => AvatarCard::Raw(
                serde_json::to_string(avatar)
                    .unwrap_or_else(|_| "<unreadable avatar>".to_string()),
            ),
        }
    }
}

/// Build the dashboard: every model on the account with its avatars.
///
/// Failing to list the models fails the whole dashboard. A failure inside
/// one model's avatar pagination only marks that model's card.
pub async fn browse_models<A>(api: &A) -> Result<Vec<ModelCard>, MyMoodAIError>
where
    A: MyMoodAIApi + ?Sized,
{
    let models = api.list_models().await?;
    tracing::info!(count = models.len(), "Building dashboard cards");

    let mut cards = Vec::with_capacity(models.len());
    for model in &models {
        cards.push(browse_one_model(api, model.id).await);
    }
    Ok(cards)
}

/// Page through one model's avatars, starting at page 1.
async fn browse_one_model<A>(api: &A, model_id: OrderId) -> ModelCard
where
    A: MyMoodAIApi + ?Sized,
{
    let mut avatars = Vec::new();
    let mut error = None;
    let mut page: u32 = 1;

    loop {
        match api.list_model_avatars(model_id, page).await {
            Ok(batch) if batch.is_empty() => break,
            Ok(batch) => {
                avatars.extend(batch.iter().map(AvatarCard::from_avatar));
                if page >= MAX_AVATAR_PAGES {
                    tracing::warn!(model_id, page, "Hit the avatar page ceiling; stopping");
                    break;
                }
                page += 1;
            }
            Err(e) => {
                tracing::warn!(model_id, page, error = %e, "Avatar listing failed");
                error = Some(e.to_string());
                break;
            }
        }
    }

    ModelCard {
        model_id,
        avatars,
        error,
    }
}
