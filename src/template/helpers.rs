// ABOUTME: Handlebars helper functions exposed to templates
// ABOUTME: Implements the error, jsonptr, json, yaml, and env template functions

use std::collections::BTreeMap;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, Output, RenderContext, RenderError, ScopedJson,
};
use serde_json::Value as JsonValue;

use crate::data::resolve_pointer;
use crate::envvar::{EnvAccess, EnvError, Whitelist};

/// Error helper - aborts the current render with the given message
pub fn error_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    _out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let message = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("error helper requires a message parameter"))?;

    Err(RenderError::new(message))
}

/// JSON helper - serializes a value to compact JSON text
pub fn json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let doc = h
        .param(0)
        .ok_or_else(|| RenderError::new("json helper requires a document parameter"))?;

    let text = serde_json::to_string(doc.value())
        .map_err(|e| RenderError::new(format!("JSON serialization error: {}", e)))?;
    out.write(&text)?;
    Ok(())
}

/// YAML helper - serializes a value to YAML text
pub fn yaml_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let doc = h
        .param(0)
        .ok_or_else(|| RenderError::new("yaml helper requires a document parameter"))?;

    let text = serde_yaml::to_string(doc.value())
        .map_err(|e| RenderError::new(format!("YAML serialization error: {}", e)))?;
    out.write(&text)?;
    Ok(())
}

/// Jsonptr helper - resolves an RFC 6901 pointer against a document. Returns
/// the resolved value so it can be piped into other helpers.
pub struct JsonPointerHelper;

impl HelperDef for JsonPointerHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> std::result::Result<ScopedJson<'reg, 'rc>, RenderError> {
        let pointer = h
            .param(0)
            .and_then(|v| v.value().as_str())
            .ok_or_else(|| RenderError::new("jsonptr helper requires a pointer parameter"))?;
        let doc = h
            .param(1)
            .ok_or_else(|| RenderError::new("jsonptr helper requires a document parameter"))?;

        let resolved = resolve_pointer(doc.value(), pointer)
            .map_err(|e| RenderError::new(e.to_string()))?;
        Ok(ScopedJson::Derived(resolved.clone()))
    }
}

/// Env helper - whitelist-gated environment variable lookup. With no
/// arguments it lists the whitelisted variables, with one it returns a single
/// value, with several it returns a map of the names that are set.
pub struct EnvHelper {
    access: EnvAccess,
}

impl EnvHelper {
    pub fn new(whitelist: Whitelist) -> Self {
        Self {
            access: EnvAccess::new(whitelist),
        }
    }
}

impl HelperDef for EnvHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> std::result::Result<ScopedJson<'reg, 'rc>, RenderError> {
        let names: Vec<String> = h
            .params()
            .iter()
            .map(|p| {
                p.value()
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| RenderError::new("env helper arguments must be strings"))
            })
            .collect::<std::result::Result<_, _>>()?;

        let value = match names.as_slice() {
            [] => to_json_map(self.access.list().map_err(env_render_error)?),
            [name] => JsonValue::String(self.access.get(name).map_err(env_render_error)?),
            _ => to_json_map(self.access.get_many(&names).map_err(env_render_error)?),
        };

        Ok(ScopedJson::Derived(value))
    }
}

fn env_render_error(e: EnvError) -> RenderError {
    RenderError::new(e.to_string())
}

fn to_json_map(vars: BTreeMap<String, String>) -> JsonValue {
    JsonValue::Object(
        vars.into_iter()
            .map(|(name, value)| (name, JsonValue::String(value)))
            .collect(),
    )
}

/// Register the function library with a Handlebars instance. The env function
/// is registered only when environment access was enabled; the namespace is
/// frozen once the instance is handed to the executor.
pub fn register_helpers(handlebars: &mut Handlebars, env: Option<Whitelist>) {
    handlebars.register_helper("error", Box::new(error_helper));
    handlebars.register_helper("jsonptr", Box::new(JsonPointerHelper));
    handlebars.register_helper("json", Box::new(json_helper));
    handlebars.register_helper("yaml", Box::new(yaml_helper));

    if let Some(whitelist) = env {
        handlebars.register_helper("env", Box::new(EnvHelper::new(whitelist)));
    }
}
