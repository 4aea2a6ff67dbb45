//! `WorkshopApi` implementation over HTTP.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use workshop_admin_app::ports::WorkshopApi;
use workshop_admin_domain::draft::UpdateWorkshop;
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::id::{MaterialRef, WorkshopId};
use workshop_admin_domain::workshop::Workshop;

use crate::error::ApiClientError;

const COLLECTION_PATH: &str = "/api/workshops";
const MATERIAL_FIELD: &str = "material";

/// HTTP client for the remote workshop server.
#[derive(Debug, Clone)]
pub struct ReqwestWorkshopApi {
    client: Client,
    base_url: String,
    material_base_url: String,
}

impl ReqwestWorkshopApi {
    /// Wrap a configured [`Client`].
    #[must_use]
    pub fn new(client: Client, base_url: &str, material_base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            material_base_url: material_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}", self.base_url)
    }

    fn item_url(&self, id: WorkshopId) -> String {
        format!("{}{COLLECTION_PATH}/{id}", self.base_url)
    }
}

/// Check the HTTP response status and turn non-2xx into an error.
fn check_response(result: Result<Response, reqwest::Error>) -> Result<Response, ApiClientError> {
    let resp = result.map_err(ApiClientError::Transport)?;
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ApiClientError::Status(resp.status()))
    }
}

/// Multipart payload: the six text fields, plus `material` only when a file was picked.
fn update_form(update: UpdateWorkshop) -> Result<Form, ApiClientError> {
    let mut form = Form::new();
    for (name, value) in update.text_fields() {
        form = form.text(name, value.to_string());
    }
    if let Some(file) = update.material {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(ApiClientError::Transport)?;
        }
        form = form.part(MATERIAL_FIELD, part);
    }
    Ok(form)
}

impl WorkshopApi for ReqwestWorkshopApi {
    async fn list(&self) -> Result<Vec<Workshop>, AdminError> {
        let resp = check_response(self.client.get(self.collection_url()).send().await)?;
        let workshops = resp
            .json::<Vec<Workshop>>()
            .await
            .map_err(ApiClientError::from_body)?;
        tracing::debug!(count = workshops.len(), "fetched workshops");
        Ok(workshops)
    }

    async fn update(&self, update: UpdateWorkshop) -> Result<Workshop, AdminError> {
        let url = self.item_url(update.id);
        let form = update_form(update)?;
        let resp = check_response(self.client.put(url).multipart(form).send().await)?;
        let workshop = resp
            .json::<Workshop>()
            .await
            .map_err(ApiClientError::from_body)?;
        Ok(workshop)
    }

    async fn delete(&self, id: WorkshopId) -> Result<(), AdminError> {
        check_response(self.client.delete(self.item_url(id)).send().await)?;
        Ok(())
    }

    fn material_url(&self, material: &MaterialRef) -> String {
        format!(
            "{}{COLLECTION_PATH}/materials/{material}",
            self.material_base_url
        )
    }
}
