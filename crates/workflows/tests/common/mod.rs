#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use mymoodai_client::api::MyMoodAIApi;
use mymoodai_client::error::MyMoodAIError;
use mymoodai_client::models::{Avatar, CreateModelRequest, CreatedModel, Model, OrderId, Style};
use serde_json::Value;

/// One remote call a workflow made, with the arguments that matter for
/// asserting sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateModel { parent: OrderId },
    UploadTrainingImage { order_id: OrderId, file_name: String },
    RunOrder { order_id: OrderId },
    ListModels,
    ListModelAvatars { model_id: OrderId, page: u32 },
    ListStyles,
}

/// Scripted stand-in for the live API.
///
/// Each operation pops its next result from a per-operation queue and
/// records the call. Popping an empty avatar-page queue yields an empty
/// page (the listing is exhausted); every other unscripted call panics.
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    create_model_results: Mutex<VecDeque<Result<CreatedModel, MyMoodAIError>>>,
    upload_results: Mutex<VecDeque<Result<Value, MyMoodAIError>>>,
    run_results: Mutex<VecDeque<Result<Value, MyMoodAIError>>>,
    list_models_results: Mutex<VecDeque<Result<Vec<Model>, MyMoodAIError>>>,
    avatar_pages: Mutex<VecDeque<Result<Vec<Avatar>, MyMoodAIError>>>,
    styles_results: Mutex<VecDeque<Result<Vec<Style>, MyMoodAIError>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result of the next `create_model` call.
    pub fn script_create_model(&self, result: Result<CreatedModel, MyMoodAIError>) {
        self.create_model_results.lock().unwrap().push_back(result);
    }

    /// Script the result of the next `upload_training_image` call.
    pub fn script_upload(&self, result: Result<Value, MyMoodAIError>) {
        self.upload_results.lock().unwrap().push_back(result);
    }

    /// Script the result of the next `run_order` call.
    pub fn script_run(&self, result: Result<Value, MyMoodAIError>) {
        self.run_results.lock().unwrap().push_back(result);
    }

    /// Script the result of the next `list_models` call.
    pub fn script_models(&self, result: Result<Vec<Model>, MyMoodAIError>) {
        self.list_models_results.lock().unwrap().push_back(result);
    }

    /// Script the result of the next `list_model_avatars` call. Pages are
    /// consumed in the order the workflow requests them.
    pub fn script_avatar_page(&self, result: Result<Vec<Avatar>, MyMoodAIError>) {
        self.avatar_pages.lock().unwrap().push_back(result);
    }

    /// Script the result of the next `list_styles` call.
    pub fn script_styles(&self, result: Result<Vec<Style>, MyMoodAIError>) {
        self.styles_results.lock().unwrap().push_back(result);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MyMoodAIApi for ScriptedApi {
    async fn create_model(
        &self,
        request: &CreateModelRequest,
    ) -> Result<CreatedModel, MyMoodAIError> {
        self.record(Call::CreateModel {
            parent: request.parent,
        });
        self.create_model_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted create_model call")
    }

    async fn upload_training_image(
        &self,
        order_id: OrderId,
        image_path: &Path,
    ) -> Result<Value, MyMoodAIError> {
        self.record(Call::UploadTrainingImage {
            order_id,
            file_name: image_path.display().to_string(),
        });
        self.upload_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted upload_training_image call")
    }

    async fn run_order(&self, order_id: OrderId) -> Result<Value, MyMoodAIError> {
        self.record(Call::RunOrder { order_id });
        self.run_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted run_order call")
    }

    async fn list_models(&self) -> Result<Vec<Model>, MyMoodAIError> {
        self.record(Call::ListModels);
        self.list_models_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted list_models call")
    }

    async fn list_model_avatars(
        &self,
        model_id: OrderId,
        page: u32,
    ) -> Result<Vec<Avatar>, MyMoodAIError> {
        self.record(Call::ListModelAvatars { model_id, page });
        self.avatar_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_styles(&self) -> Result<Vec<Style>, MyMoodAIError> {
        self.record(Call::ListStyles);
        self.styles_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted list_styles call")
    }
}

/// A canned service-side failure.
pub fn api_error(status: u16, body: &str) -> MyMoodAIError {
    MyMoodAIError::Api {
        status,
        body: body.to_string(),
    }
}

/// A minimal model record with the given id.
pub fn model(id: OrderId) -> Model {
    Model {
        id,
        ..Model::default()
    }
}

/// An avatar with optional thumbnail and full-size URLs.
pub fn avatar(small: Option<&str>, full: Option<&str>) -> Avatar {
    Avatar {
        filename_small: small.map(str::to_string),
        filename: full.map(str::to_string),
        ..Avatar::default()
    }
}
