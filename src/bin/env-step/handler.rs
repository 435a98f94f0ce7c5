use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::env::{self, Env};
use crate::response::{Output, Response};
use crate::Input;

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
struct Body<'a> {
    simple: Option<&'a str>,
    quoted: Option<&'a str>,
    quoted_escapes: Option<&'a str>,
    certificate: Option<&'a str>,
    json: Value,
}

// The invocation payload is accepted but not consulted.
pub fn handler(input: &Input, env: &Env) -> Result<Output> {
    debug!(?input, "got input");

    let text = env
        .json
        .as_deref()
        .ok_or_else(|| anyhow!("{} environment variable not set", env::JSON))?;

    let json: Value = serde_json::from_str(text)
        .with_context(|| format!("failed to parse {} environment variable", env::JSON))?;

    info!("Reporting environment");

    let body = Body {
        simple: env.simple.as_deref(),
        quoted: env.quoted.as_deref(),
        quoted_escapes: env.quoted_escapes.as_deref(),
        certificate: env.certificate.as_deref(),
        json,
    };

    Ok(Output::Structured(Response::ok(serde_json::to_value(body)?)))
}
