#[cfg(test)]
use derive_builder::Builder;
use std::env;

pub const SIMPLE: &str = "SIMPLE";
pub const QUOTED: &str = "QUOTED";
pub const QUOTED_ESCAPES: &str = "QUOTED_ESCAPES";
pub const CERTIFICATE: &str = "CERTIFICATE";
pub const JSON: &str = "JSON";

/// Snapshot of the variables the step reads, captured once at start.
#[derive(Default, PartialEq, Eq, Debug)]
#[cfg_attr(test, derive(Builder), builder(default))]
pub struct Env {
    #[cfg_attr(test, builder(setter(into, strip_option)))]
    pub simple: Option<String>,
    #[cfg_attr(test, builder(setter(into, strip_option)))]
    pub quoted: Option<String>,
    #[cfg_attr(test, builder(setter(into, strip_option)))]
    pub quoted_escapes: Option<String>,
    #[cfg_attr(test, builder(setter(into, strip_option)))]
    pub certificate: Option<String>,
    #[cfg_attr(test, builder(setter(into, strip_option)))]
    pub json: Option<String>,
}

impl Env {
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            simple: lookup(SIMPLE),
            quoted: lookup(QUOTED),
            quoted_escapes: lookup(QUOTED_ESCAPES),
            certificate: lookup(CERTIFICATE),
            json: lookup(JSON),
        }
    }
}
