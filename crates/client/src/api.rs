//! REST API client for the MyMoodAI HTTP endpoints.
//!
//! Wraps the MyMoodAI HTTP API (order and model creation, training image
//! upload, order execution, listings) using [`reqwest`]. Every request
//! carries the account's bearer key. The operations the page workflows
//! consume are exposed through the [`MyMoodAIApi`] trait so tests can
//! substitute a scripted implementation.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::MyMoodAIError;
use crate::models::{
    Avatar, CreateModelRequest, CreatedModel, Model, OrderId, SelfieId, Style, TrainingImage,
};
use crate::normalize::normalize_list;

/// HTTP client for a single MyMoodAI deployment.
pub struct MyMoodAIClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// The slice of the MyMoodAI REST surface the page workflows run on.
///
/// [`MyMoodAIClient`] is the live implementation; workflow tests swap in a
/// scripted one.
#[async_trait]
pub trait MyMoodAIApi: Send + Sync {
    /// Create a new trainable model (an order with `parent == 0`).
    async fn create_model(
        &self,
        request: &CreateModelRequest,
    ) -> Result<CreatedModel, MyMoodAIError>;

    /// Upload a training image to an order, reading it from `image_path`.
    async fn upload_training_image(
        &self,
        order_id: OrderId,
        image_path: &Path,
    ) -> Result<Value, MyMoodAIError>;

    /// Start processing an order.
    async fn run_order(&self, order_id: OrderId) -> Result<Value, MyMoodAIError>;

    /// List all models on the account.
    async fn list_models(&self) -> Result<Vec<Model>, MyMoodAIError>;

    /// List one page (1-based) of a model's generated avatars. An empty
    /// page means there are no further pages.
    async fn list_model_avatars(
        &self,
        model_id: OrderId,
        page: u32,
    ) -> Result<Vec<Avatar>, MyMoodAIError>;

    /// List the style catalog.
    async fn list_styles(&self) -> Result<Vec<Style>, MyMoodAIError>;
}

impl MyMoodAIClient {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://api.mymoodai.app/rest/api`.
    ///   Trailing slashes are trimmed.
    /// * `api_key` - Account key sent as `Authorization: Bearer <key>`.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple consumers).
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create a generation order against an already-trained model.
    ///
    /// Sends a `POST order/create` request; `request.parent` must be the
    /// trained model's id.
    pub async fn create_order(
        &self,
        request: &CreateModelRequest,
    ) -> Result<CreatedModel, MyMoodAIError> {
        let value = self.post_json("order/create", request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the current processing status of an order.
    ///
    /// Sends a `GET order/{id}/status` request. The status record's shape
    /// is owned by the service and returned raw.
    pub async fn order_status(&self, order_id: OrderId) -> Result<Value, MyMoodAIError> {
        self.get_json(&format!("order/{}/status", order_id)).await
    }

    /// List every order on the account, training and generation alike.
    ///
    /// Sends a `GET order/list` request.
    pub async fn list_orders(&self) -> Result<Vec<Model>, MyMoodAIError> {
        let value = self.get_json("order/list").await?;
        normalize_list(value, "orders")
    }

    /// List the generation orders attached to a model.
    ///
    /// Sends a `GET model/{id}/order/list` request.
    pub async fn list_model_orders(&self, model_id: OrderId) -> Result<Vec<Model>, MyMoodAIError> {
        let value = self
            .get_json(&format!("model/{}/order/list", model_id))
            .await?;
        normalize_list(value, "orders")
    }

    /// List the training images already uploaded to an order.
    ///
    /// Sends a `GET order/{id}/training-images/list` request.
    pub async fn list_training_images(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<TrainingImage>, MyMoodAIError> {
        let value = self
            .get_json(&format!("order/{}/training-images/list", order_id))
            .await?;
        normalize_list(value, "images")
    }

    /// Mark one uploaded image as the order's main training image.
    ///
    /// Sends a `GET order/{id}/training-images/{selfie_id}/select` request.
    pub async fn select_training_image(
        &self,
        order_id: OrderId,
        selfie_id: SelfieId,
    ) -> Result<Value, MyMoodAIError> {
        self.get_json(&format!(
            "order/{}/training-images/{}/select",
            order_id, selfie_id
        ))
        .await
    }

    // ---- private helpers ----

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send an authenticated GET request and decode the response.
    async fn get_json(&self, path: &str) -> Result<Value, MyMoodAIError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::decode_response(response).await
    }

    /// Send an authenticated POST request with a JSON body and decode the
    /// response.
    async fn post_json<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, MyMoodAIError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        Self::decode_response(response).await
    }

    /// Read the body and run it through the shared decoding path.
    ///
    /// A body that cannot be read is only a transport error when the
    /// status was a success; on an error status the placeholder text keeps
    /// the status visible.
    async fn decode_response(response: reqwest::Response) -> Result<Value, MyMoodAIError> {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => "<unreadable body>".to_string(),
        };
        Self::decode_body(status, &body)
    }

    /// Classify a status line and body into parsed JSON or the matching
    /// error. Non-2xx statuses become [`MyMoodAIError::Api`] with the body
    /// text attached; so do 2xx bodies reporting a failure through a
    /// top-level `error` field.
    fn decode_body(status: StatusCode, body: &str) -> Result<Value, MyMoodAIError> {
        if !status.is_success() {
            return Err(MyMoodAIError::Api {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }

        let value: Value = serde_json::from_str(body)?;
        if value.get("error").is_some_and(|e| !e.is_null()) {
            return Err(MyMoodAIError::Api {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }
        Ok(value)
    }

    /// Build the multipart form for a training image upload.
    async fn training_image_form(image_path: &Path) -> Result<multipart::Form, MyMoodAIError> {
        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|source| MyMoodAIError::LocalIo {
                path: image_path.to_path_buf(),
                source,
            })?;

        let file_name = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "selfie".to_string());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(image_path))?;

        Ok(multipart::Form::new().part("image", part))
    }
}

#[async_trait]
impl MyMoodAIApi for MyMoodAIClient {
    /// Sends a `POST order/create/model` request with the styles, gender
    /// code, and `parent: 0`.
    async fn create_model(
        &self,
        request: &CreateModelRequest,
    ) -> Result<CreatedModel, MyMoodAIError> {
        let value = self.post_json("order/create/model", request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Sends a `POST order/{id}/training-images/upload` request with the
    /// image as a multipart part named `image`.
    async fn upload_training_image(
        &self,
        order_id: OrderId,
        image_path: &Path,
    ) -> Result<Value, MyMoodAIError> {
        let form = Self::training_image_form(image_path).await?;

        let response = self
            .client
            .post(self.endpoint(&format!("order/{}/training-images/upload", order_id)))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        Self::decode_response(response).await
    }

    /// Sends a `GET order/{id}/run` request.
    async fn run_order(&self, order_id: OrderId) -> Result<Value, MyMoodAIError> {
        self.get_json(&format!("order/{}/run", order_id)).await
    }

    /// Sends a `GET model/list` request.
    async fn list_models(&self) -> Result<Vec<Model>, MyMoodAIError> {
        let value = self.get_json("model/list").await?;
        normalize_list(value, "models")
    }

    /// Sends a `GET model/{id}/avatars/{page}` request.
    async fn list_model_avatars(
        &self,
        model_id: OrderId,
        page: u32,
    ) -> Result<Vec<Avatar>, MyMoodAIError> {
        let value = self
            .get_json(&format!("model/{}/avatars/{}", model_id, page))
            .await?;
        normalize_list(value, "avatars")
    }

    /// Sends a `GET styles/list` request.
    async fn list_styles(&self) -> Result<Vec<Style>, MyMoodAIError> {
        let value = self.get_json("styles/list").await?;
        normalize_list(value, "styles")
    }
}

/// MIME type for an upload, guessed from the file extension. Defaults to
/// JPEG, which is what the service's own clients send.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        Some(ext) if ext.eq_ignore_ascii_case("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
