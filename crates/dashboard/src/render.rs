//! Plain-text rendering of workflow cards.
//!
//! Stands in for the demo pages' HTML: one block per model or style, with
//! indented detail lines underneath.

use mymoodai_workflows::browse::{AvatarCard, ModelCard};
use mymoodai_workflows::styles::StyleCard;

/// Render the dashboard listing.
pub fn dashboard(cards: &[ModelCard]) -> String {
    if cards.is_empty() {
        return "No models found.\n".to_string();
    }
    cards.iter().map(model_card).collect()
}

/// Render the style catalog listing.
pub fn styles(cards: &[StyleCard]) -> String {
    if cards.is_empty() {
        return "No styles found.\n".to_string();
    }
    cards.iter().map(style_card).collect()
}

// ---- private helpers ----

fn model_card(card: &ModelCard) -> String {
    let mut out = format!("Model ID: {}\n", card.model_id);

    for avatar in &card.avatars {
        match avatar {
            AvatarCard::Image { thumbnail, full } => {
                out.push_str(&format!("  {thumbnail} (full: {full})\n"));
            }
            AvatarCard::Raw(raw) => {
                out.push_str(&format!("  {raw}\n"));
            }
        }
    }

    if let Some(error) = &card.error {
        out.push_str(&format!("  Error retrieving avatars: {error}\n"));
    } else if !card.has_avatars() {
        out.push_str("  No avatars available for this model.\n");
    }

    out
}

fn style_card(card: &StyleCard) -> String {
    let mut out = format!("{}\n", card.name);

    if let Some(image) = &card.image {
        out.push_str(&format!("  {image}\n"));
    }
    out.push_str(&format!(
        "  {}\n",
        card.description
            .as_deref()
            .unwrap_or("No description provided.")
    ));
    if let Some(category) = &card.category {
        out.push_str(&format!("  [{category}]\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_dashboard_says_so() {
        assert_eq!(dashboard(&[]), "No models found.\n");
    }

    #[test]
    fn models_render_with_their_avatars() {
        let cards = vec![ModelCard {
            model_id: 7,
            avatars: vec![
                AvatarCard::Image {
                    thumbnail: "thumb.jpg".to_string(),
                    full: "full.jpg".to_string(),
                },
                AvatarCard::Raw(r#"{"filename":"full2.jpg"}"#.to_string()),
            ],
            error: None,
        }];

        assert_eq!(
            dashboard(&cards),
            "Model ID: 7\n  thumb.jpg (full: full.jpg)\n  {\"filename\":\"full2.jpg\"}\n"
        );
    }

    #[test]
    fn models_without_avatars_get_the_placeholder_line() {
        let cards = vec![ModelCard {
            model_id: 7,
            avatars: vec![],
            error: None,
        }];

        assert_eq!(
            dashboard(&cards),
            "Model ID: 7\n  No avatars available for this model.\n"
        );
    }

    #[test]
    fn a_failed_model_keeps_its_partial_avatars_and_shows_the_error() {
        let cards = vec![ModelCard {
            model_id: 7,
            avatars: vec![AvatarCard::Image {
                thumbnail: "thumb.jpg".to_string(),
                full: "thumb.jpg".to_string(),
            }],
            error: Some("MyMoodAI API error (500): boom".to_string()),
        }];

        let page = dashboard(&cards);

        assert!(page.contains("thumb.jpg"));
        assert!(page.contains("Error retrieving avatars: MyMoodAI API error (500): boom"));
        assert!(!page.contains("No avatars available"));
    }

    #[test]
    fn an_empty_catalog_says_so() {
        assert_eq!(styles(&[]), "No styles found.\n");
    }

    #[test]
    fn styles_render_their_selected_fields() {
        let cards = vec![StyleCard {
            name: "Astronaut".to_string(),
            image: Some("astro.jpg".to_string()),
            description: None,
            category: Some("Sci-Fi".to_string()),
        }];

        assert_eq!(
            styles(&cards),
            "Astronaut\n  astro.jpg\n  No description provided.\n  [Sci-Fi]\n"
        );
    }
}
