//! Console pages for workshops.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Form, Multipart, Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

use workshop_admin_app::ports::{DocumentExporter, SessionStore, SpreadsheetExporter, WorkshopApi};
use workshop_admin_app::request::RequestPhase;
use workshop_admin_app::view::{Confirmation, EditSession, WorkshopAdminView};
use workshop_admin_domain::draft::{Attachment, DraftField};
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::export::ExportFile;
use workshop_admin_domain::id::WorkshopId;

use crate::error::DashboardError;
use crate::nav::NavLink;
use crate::state::AppState;

/// Where every action redirects back to.
pub const LIST_PATH: &str = "/workshops";

const MATERIAL_FIELD: &str = "material";
const DELETE_QUESTION: &str = "Are you sure you want to delete this workshop?";

/// One table row.
pub struct RowView {
    serial: usize,
    id: WorkshopId,
    name: String,
    date: String,
    time: String,
    meeting_link: String,
    description: String,
    instructor: String,
    material_url: Option<String>,
}

/// The open update modal.
pub struct EditorView {
    id: WorkshopId,
    name: String,
    date: String,
    time: String,
    meeting_link: String,
    description: String,
    instructor: String,
    attachment: Option<String>,
    submitting: bool,
}

impl From<&EditSession> for EditorView {
    fn from(session: &EditSession) -> Self {
        let draft = session.draft();
        Self {
            id: session.id(),
            name: draft.name.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            meeting_link: draft.meeting_link.clone(),
            description: draft.description.clone(),
            instructor: draft.instructor.clone(),
            attachment: session.attachment().map(|file| file.file_name.clone()),
            submitting: session.is_submitting(),
        }
    }
}

pub struct ToastView {
    level: &'static str,
    text: String,
}

/// Workshop list page template.
#[derive(Template)]
#[template(path = "workshops.html")]
pub struct WorkshopsTemplate {
    nav: Vec<NavLink>,
    display_name: String,
    query: String,
    loading: bool,
    load_failed: bool,
    rows: Vec<RowView>,
    editor: Option<EditorView>,
    toasts: Vec<ToastView>,
}

impl IntoResponse for WorkshopsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Delete confirmation page template.
#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    nav: Vec<NavLink>,
    display_name: String,
    id: WorkshopId,
    name: Option<String>,
    question: &'static str,
}

impl IntoResponse for ConfirmDeleteTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query string of the list page.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
}

/// Redirect back to the list, keeping the current search.
fn back_to_list(query: &str) -> Redirect {
    if query.is_empty() {
        return Redirect::to(LIST_PATH);
    }
    let params = ListParams {
        q: query.to_string(),
    };
    match serde_urlencoded::to_string(&params) {
        Ok(encoded) => Redirect::to(&format!("{LIST_PATH}?{encoded}")),
        Err(err) => {
            tracing::warn!(error = %err, "unable to encode search query");
            Redirect::to(LIST_PATH)
        }
    }
}

/// `GET /workshops` — the table (filtered by `q`), the modal, and pending toasts.
pub async fn list<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
    Query(params): Query<ListParams>,
) -> WorkshopsTemplate
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let controller = &state.controller;
    let mut view = controller.view().await;
    view.set_query(params.q);

    let rows = view
        .visible()
        .into_iter()
        .map(|row| RowView {
            serial: row.serial,
            id: row.workshop.id,
            name: row.workshop.name.clone(),
            date: row.workshop.date.clone(),
            time: row.workshop.time.clone(),
            meeting_link: row.workshop.meeting_link.clone(),
            description: row.workshop.description.clone(),
            instructor: row.workshop.instructor.clone(),
            material_url: row
                .workshop
                .material
                .as_ref()
                .map(|material| controller.material_url(material)),
        })
        .collect();
    let editor = view.editor().map(EditorView::from);
    let toasts = view
        .take_toasts()
        .into_iter()
        .map(|toast| ToastView {
            level: toast.level.as_str(),
            text: toast.text,
        })
        .collect();

    WorkshopsTemplate {
        nav: state.links.sidebar(),
        display_name: view.display_name().to_string(),
        query: view.query().as_str().to_string(),
        loading: view.load_phase().is_pending(),
        load_failed: view.load_phase() == RequestPhase::Failed,
        rows,
        editor,
        toasts,
    }
}

/// `POST /workshops/reload` — remount: cancel in-flight requests and refetch.
pub async fn reload<A, S, D, X>(State(state): State<AppState<A, S, D, X>>) -> Redirect
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    state.controller.mount().await;
    Redirect::to(LIST_PATH)
}

/// `POST /workshops/{id}/edit` — open the update modal on a row.
pub async fn open_editor<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
    Path(id): Path<WorkshopId>,
) -> Result<Redirect, DashboardError>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let mut view = state.controller.view().await;
    view.open_editor(id)?;
    Ok(back_to_list(view.query().as_str()))
}

/// `POST /workshops/edit/cancel` — close the modal, discarding the draft.
pub async fn cancel_edit<A, S, D, X>(State(state): State<AppState<A, S, D, X>>) -> Redirect
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let mut view = state.controller.view().await;
    view.cancel_edit();
    back_to_list(view.query().as_str())
}

/// The decoded update form.
#[derive(Debug, Default)]
struct SubmittedForm {
    fields: Vec<(DraftField, String)>,
    material: Option<Attachment>,
}

async fn read_form(mut multipart: Multipart) -> Result<SubmittedForm, DashboardError> {
    let mut form = SubmittedForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };
        if name == MATERIAL_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(ToString::to_string);
            let bytes = field.bytes().await?;
            // Browsers send an empty part when no file was picked.
            if !file_name.is_empty() && !bytes.is_empty() {
                form.material = Some(Attachment {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }
        match DraftField::from_str(&name) {
            Ok(draft_field) => form.fields.push((draft_field, field.text().await?)),
            Err(err) => tracing::debug!(error = %err, "ignoring form field"),
        }
    }
    Ok(form)
}

fn apply_form<S: SessionStore>(
    view: &mut WorkshopAdminView<S>,
    id: WorkshopId,
    form: SubmittedForm,
) -> Result<(), AdminError> {
    if view.editor().map(EditSession::id) != Some(id) {
        view.open_editor(id)?;
    }
    for (field, value) in form.fields {
        view.edit_field(field, value)?;
    }
    if form.material.is_some() {
        view.attach(form.material)?;
    }
    Ok(())
}

/// `POST /workshops/{id}` — submit the update modal (multipart, optional file).
///
/// Validation failures and remote failures end up as toasts on the next
/// render; the modal then stays open.
pub async fn submit<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
    Path(id): Path<WorkshopId>,
    multipart: Multipart,
) -> Result<Redirect, DashboardError>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let form = read_form(multipart).await?;
    apply_form(&mut *state.controller.view().await, id, form)?;

    match state.controller.submit_update().await {
        Ok(_) | Err(AdminError::Validation(_)) => {
            let view = state.controller.view().await;
            Ok(back_to_list(view.query().as_str()))
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /workshops/{id}/delete` — ask for confirmation.
pub async fn confirm_delete<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
    Path(id): Path<WorkshopId>,
) -> ConfirmDeleteTemplate
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let view = state.controller.view().await;
    ConfirmDeleteTemplate {
        nav: state.links.sidebar(),
        display_name: view.display_name().to_string(),
        id,
        name: view.find(id).map(|ws| ws.name.clone()),
        question: DELETE_QUESTION,
    }
}

/// Answer of the delete confirmation page.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: String,
}

/// `POST /workshops/{id}/delete` — delete if `confirm=yes`, otherwise do nothing.
pub async fn delete<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
    Path(id): Path<WorkshopId>,
    Form(form): Form<DeleteForm>,
) -> Redirect
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let confirmation = Confirmation::from_answer(&form.confirm);
    state.controller.delete(id, confirmation).await;
    let view = state.controller.view().await;
    back_to_list(view.query().as_str())
}

/// A rendered export as a download response.
pub struct Download(ExportFile);

impl IntoResponse for Download {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.0.file_name());
        (
            [
                (header::CONTENT_TYPE, self.0.content_type().to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.0.bytes,
        )
            .into_response()
    }
}

/// `GET /workshops/export/pdf` — the whole collection as `workshops_details.pdf`.
pub async fn export_pdf<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
) -> Result<Download, DashboardError>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let file = state
        .controller
        .export_document(state.document_exporter.as_ref())
        .await?;
    Ok(Download(file))
}

/// `GET /workshops/export/xlsx` — the whole collection as `workshops_details.xlsx`.
pub async fn export_xlsx<A, S, D, X>(
    State(state): State<AppState<A, S, D, X>>,
) -> Result<Download, DashboardError>
where
    A: WorkshopApi + Send + Sync + 'static,
    S: SessionStore + Send + 'static,
    D: DocumentExporter + Send + Sync + 'static,
    X: SpreadsheetExporter + Send + Sync + 'static,
{
    let file = state
        .controller
        .export_spreadsheet(state.spreadsheet_exporter.as_ref())
        .await?;
    Ok(Download(file))
}
