//! # Template Renderer
//!
//! Built-in `Renderer` for the list replies. Looks the template up by name, pulls the
//! records out of the data object and hands them to the layouts in `strings::templates`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::domain::traits::Renderer;
use crate::domain::types::{Client, Event, HistoryEntry, Silence, Stash};
use crate::strings::templates;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template {template} expects a `{field}` field")]
    MissingField {
        template: &'static str,
        field: &'static str,
    },

    #[error("Template {template} could not read its data: {source}")]
    Data {
        template: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn records<T: DeserializeOwned>(
    data: &Value,
    template: &'static str,
    field: &'static str,
) -> Result<Vec<T>, RenderError> {
    let value = data
        .get(field)
        .ok_or(RenderError::MissingField { template, field })?;
    serde_json::from_value(value.clone()).map_err(|source| RenderError::Data { template, source })
}

impl Renderer for TemplateRenderer {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError> {
        match template {
            templates::CLIENTS => {
                let clients: Vec<Client> = records(data, templates::CLIENTS, "clients")?;
                Ok(templates::clients(&clients))
            }
            templates::CLIENT_HISTORY => {
                let history: Vec<HistoryEntry> =
                    records(data, templates::CLIENT_HISTORY, "history")?;
                Ok(templates::client_history(&history))
            }
            templates::EVENTS => {
                let events: Vec<Event> = records(data, templates::EVENTS, "events")?;
                Ok(templates::events(&events))
            }
            templates::SILENCES => {
                let silences: Vec<Silence> = records(data, templates::SILENCES, "silences")?;
                Ok(templates::silences(&silences))
            }
            templates::STASHES => {
                let stashes: Vec<Stash> = records(data, templates::STASHES, "stashes")?;
                Ok(templates::stashes(&stashes))
            }
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_clients_keeps_given_order() {
        let data = json!({"clients": [{"name": "b"}, {"name": "a"}]});
        let text = TemplateRenderer::new().render("clients", &data).unwrap();
        assert_eq!(text, "**Clients** (2)\n* **b**\n* **a**\n");
    }

    #[test]
    fn test_unknown_template() {
        let err = TemplateRenderer::new()
            .render("nope", &json!({}))
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(name) if name == "nope"));
    }

    #[test]
    fn test_missing_field() {
        let err = TemplateRenderer::new()
            .render("events", &json!({"clients": []}))
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingField { field: "events", .. }));
    }

    #[test]
    fn test_bad_records() {
        let err = TemplateRenderer::new()
            .render("events", &json!({"events": [{"check": {"name": "cpu"}}]}))
            .unwrap_err();
        assert!(matches!(err, RenderError::Data { template: "events", .. }));
    }
}
