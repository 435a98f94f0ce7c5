use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn ok(body: impl Into<Value>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            status: 500,
            body: Value::String(description.into()),
        }
    }
}

/// What a handler hands back to the entry point.
#[derive(PartialEq, Debug)]
pub enum Output {
    Structured(Response),
    #[cfg_attr(not(test), allow(dead_code))]
    Plain(String),
}

impl Output {
    pub fn into_response(self) -> Response {
        match self {
            Self::Structured(resp) => resp,
            Self::Plain(body) => Response::ok(body),
        }
    }
}
