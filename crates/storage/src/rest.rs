//! ExerciseDB REST API
//!
//! Responses are decoded into untyped JSON first. Only arrays are accepted, so unexpected payloads
//! (e.g. error objects returned with a success status) end up as
//! [`domain::StorageError::InvalidResponse`] instead of failing later.

use fitscout_domain as domain;
use fitscout_web_app as web_app;
use gloo_net::http::{Request, Response};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const HEADER_KEY: &str = "X-RapidAPI-Key";
const HEADER_HOST: &str = "X-RapidAPI-Host";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub host: String,
    pub key: String,
}

impl Endpoint {
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

impl From<&web_app::Settings> for Endpoint {
    fn from(value: &web_app::Settings) -> Self {
        Self {
            base_url: value.base_url.clone(),
            host: value.api_host.clone(),
            key: value.api_key.clone(),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::from(&web_app::Settings::default())
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub endpoint: Endpoint,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            sender: GlooNetSendRequest,
            endpoint,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new(Endpoint::default())
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_body_parts(&self) -> Result<Vec<domain::BodyPart>, domain::ReadError> {
        parse_body_parts(self.fetch("exercises/bodyPartList", false).await?)
    }

    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        parse_exercises(self.fetch("exercises", true).await?)
    }

    async fn read_exercises_by_body_part(
        &self,
        body_part: &domain::BodyPart,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        parse_exercises(
            self.fetch(
                &format!("exercises/bodyPart/{}", urlencoding::encode(body_part.as_str())),
                true,
            )
            .await?,
        )
    }
}

impl<S: SendRequest> REST<S> {
    async fn fetch(&self, path: &str, unbounded: bool) -> Result<Value, domain::ReadError> {
        let url = self.endpoint.url(path);
        let mut builder = Request::get(&url)
            .header(HEADER_KEY, &self.endpoint.key)
            .header(HEADER_HOST, &self.endpoint.host);
        if unbounded {
            builder = builder.query([("limit", "0")]);
        }
        let request = builder
            .build()
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))?;

        debug!("GET {url}");

        let response = self
            .sender
            .send_request(request)
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;

        if !response.ok() {
            return Err(domain::StorageError::Other(
                format!("{} {}", response.status(), response.status_text()).into(),
            )
            .into());
        }

        Ok(response.json::<Value>().await.map_err(|err| {
            domain::StorageError::InvalidResponse(format!("deserialization failed: {err}"))
        })?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub target: String,
    pub equipment: String,
    pub body_part: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            target: value.target,
            equipment: value.equipment,
            body_part: value.body_part.into(),
            gif_url: value.gif_url,
            secondary_muscles: value.secondary_muscles,
            instructions: value.instructions,
        }
    }
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            target: value.target,
            equipment: value.equipment,
            body_part: value.body_part.to_string(),
            gif_url: value.gif_url,
            secondary_muscles: value.secondary_muscles,
            instructions: value.instructions,
        }
    }
}

pub fn parse_body_parts(value: Value) -> Result<Vec<domain::BodyPart>, domain::ReadError> {
    expect_array(value)?
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::String(body_part) => Ok(domain::BodyPart::from(body_part)),
            other => Err(invalid(format!(
                "expected string at index {idx}, received {}",
                kind(&other)
            ))),
        })
        .collect()
}

pub fn parse_exercises(value: Value) -> Result<Vec<domain::Exercise>, domain::ReadError> {
    expect_array(value)?
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<Exercise>(item)
                .map(domain::Exercise::from)
                .map_err(|err| invalid(format!("invalid exercise at index {idx}: {err}")))
        })
        .collect()
}

fn expect_array(value: Value) -> Result<Vec<Value>, domain::ReadError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(invalid(format!("expected array, received {}", kind(&other)))),
    }
}

fn invalid(message: String) -> domain::ReadError {
    domain::ReadError::Storage(domain::StorageError::InvalidResponse(message))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
