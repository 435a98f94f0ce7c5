#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::{ffi::OsString, io};
use tracing::{debug, Level};

mod env;
mod handler;
mod response;

use crate::env::Env;
use handler::handler;
use response::Response;

const DEFAULT_LOG_LEVEL: Level = Level::WARN;

#[derive(PartialEq, Debug)]
pub struct Input {
    pub event: Value,
    pub steps: Value,
    pub ctx: Value,
}

impl Input {
    fn parse(arg: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(arg).context("invocation payload is not valid JSON")?;
        let mut fields = match payload {
            Value::Object(fields) => fields,
            other => return Err(anyhow!("invocation payload is not a JSON object: {}", other)),
        };
        let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);

        Ok(Self {
            event: take("event"),
            steps: take("steps"),
            ctx: take("ctx"),
        })
    }
}

fn main() -> Result<()> {
    init_logging();

    let line = run(std::env::args_os().skip(1), &Env::from_process())?;
    println!("{}", line);

    Ok(())
}

fn init_logging() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Parses the last positional argument, runs the handler and returns the
/// response line. Only a bad invocation argument is an error here; handler
/// failures become a 500 response.
fn run<I>(args: I, env: &Env) -> Result<String>
where
    I: IntoIterator<Item = OsString>,
{
    let arg = args
        .into_iter()
        .last()
        .ok_or_else(|| anyhow!("missing invocation payload argument"))?
        .into_string()
        .map_err(|arg| anyhow!("invocation payload is not valid Unicode: {:?}", arg))?;
    let input = Input::parse(&arg)?;

    let resp = match handler(&input, env) {
        Ok(output) => output.into_response(),
        Err(e) => {
            debug!("{:?}", e);
            Response::error(format!("{:#}", e))
        }
    };

    Ok(serde_json::to_string(&resp)?)
}
