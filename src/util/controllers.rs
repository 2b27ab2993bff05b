use log::error;
use rocket::{
    http::{ContentType, Status},
    response::{self, Responder, Response},
    serde::json::Json,
    Request,
};
use rocket_okapi::{
    gen::OpenApiGenerator, okapi::openapi3::Responses, response::OpenApiResponderInner,
    OpenApiError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseError {
    pub error: String,
    #[serde(skip)]
    pub status: Status,
}

impl OpenApiResponderInner for ResponseError {
    fn responses(_gen: &mut OpenApiGenerator) -> Result<Responses, OpenApiError> {
        let mut responses = Json::<ResponseError>::responses(_gen)?;

        let mut response_value = None;
        if let Some((_response_code, response)) = responses.responses.iter().next() {
            response_value = Some(response.clone());
        }
        responses.responses.clear();
        if let Some(response_value) = response_value {
            responses.responses.insert("400".to_owned(), response_value);
        }

        Ok(responses)
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.error,)
    }
}

impl std::error::Error for ResponseError {}

impl<'r> Responder<'r, 'static> for ResponseError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string(&self).unwrap();
        Response::build()
            .sized_body(body.len(), std::io::Cursor::new(body))
            .header(ContentType::JSON)
            .status(self.status)
            .ok()
    }
}

impl From<RegistryError> for ResponseError {
    fn from(err: RegistryError) -> Self {
        if let RegistryError::Internal(ref source) = err {
            error!("storage failure: {source}");
        }
        ResponseError {
            error: err.to_string(),
            status: err.status(),
        }
    }
}

/// 201 response for successful record creation.
#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseCreated {
    pub message: String,
    pub id: String,
}

impl ResponseCreated {
    pub fn build(id: String) -> Self {
        Self {
            message: "Record created successfully".to_owned(),
            id,
        }
    }
}

impl OpenApiResponderInner for ResponseCreated {
    fn responses(_gen: &mut OpenApiGenerator) -> Result<Responses, OpenApiError> {
        let mut responses = Json::<ResponseCreated>::responses(_gen)?;

        let mut response_value = None;
        if let Some((_response_code, response)) = responses.responses.iter().next() {
            response_value = Some(response.clone());
        }
        responses.responses.clear();
        if let Some(response_value) = response_value {
            responses.responses.insert("201".to_owned(), response_value);
        }

        Ok(responses)
    }
}

impl<'r> Responder<'r, 'static> for ResponseCreated {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string(&self).unwrap();
        Response::build()
            .sized_body(body.len(), std::io::Cursor::new(body))
            .header(ContentType::JSON)
            .status(Status::Created)
            .ok()
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseMessage {
    pub message: String,
}

impl ResponseMessage {
    pub fn build(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_owned(),
        })
    }
}

pub type ResponseResult<T> = Result<Json<T>, ResponseError>;
pub type CreatedResult = Result<ResponseCreated, ResponseError>;
