//! The training workflow: create a model order, upload the selfie, start
//! the run.
//!
//! Strictly sequential. The first failing step aborts the sequence; a
//! partially created order is left as-is on the service (there is no
//! rollback endpoint).

use std::path::Path;

use mymoodai_client::api::MyMoodAIApi;
use mymoodai_client::error::MyMoodAIError;
use mymoodai_client::models::{CreateModelRequest, OrderId};

/// A training workflow failure, tagged with the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    /// Step 1 failed; no order exists.
    #[error("Failed to create model: {0}")]
    CreateModel(#[source] MyMoodAIError),

    /// Step 2 failed; the order exists but has no training image.
    #[error("Failed to upload training image to order {order_id}: {source}")]
    UploadImage {
        order_id: OrderId,
        #[source]
        source: MyMoodAIError,
    },

    /// Step 3 failed; the order has its image but training never started.
    #[error("Failed to start training for order {order_id}: {source}")]
    RunOrder {
        order_id: OrderId,
        #[source]
        source: MyMoodAIError,
    },
}

/// Run the full training sequence and return the new order's id.
///
/// Steps run strictly in order, each against the order id returned by the
/// first:
///
/// 1. create the model order,
/// 2. upload the training image at `image_path`,
/// 3. start the run.
pub async fn run_training<A>(
    api: &A,
    request: &CreateModelRequest,
    image_path: &Path,
) -> Result<OrderId, TrainingError>
where
    A: MyMoodAIApi + ?Sized,
{
    let created = api
        .create_model(request)
        .await
        .map_err(TrainingError::CreateModel)?;
    let order_id = created.id;
    tracing::info!(order_id, "Created model order");

    api.upload_training_image(order_id, image_path)
        .await
        .map_err(|source| TrainingError::UploadImage { order_id, source })?;
    tracing::info!(order_id, path = %image_path.display(), "Uploaded training image");

    api.run_order(order_id)
        .await
        .map_err(|source| TrainingError::RunOrder { order_id, source })?;
    tracing::info!(order_id, "Started training run");

    Ok(order_id)
}
