//! The workshop admin view — everything the page shows, and how it changes.
//!
//! The view is plain single-threaded state. Network calls are never made
//! here: `begin_*` methods mark a workflow pending and return a ticket plus
//! the payload to send, and [`WorkshopAdminView::reduce`] applies the result
//! once it comes back. See [`crate::controller`] for the async driver.

use tokio_util::sync::CancellationToken;
use workshop_admin_domain::draft::{Attachment, DraftField, UpdateWorkshop, WorkshopDraft};
use workshop_admin_domain::error::{AdminError, NotFoundError};
use workshop_admin_domain::export::{ExportFile, ExportFormat, ExportTable};
use workshop_admin_domain::id::WorkshopId;
use workshop_admin_domain::search::SearchQuery;
use workshop_admin_domain::session::Session;
use workshop_admin_domain::workshop::{self, Workshop};

use crate::ports::{DocumentExporter, SessionStore, SpreadsheetExporter};
use crate::request::{Completion, Reduction, RequestPhase, RequestTicket};
use crate::session::SessionContext;
use crate::toast::{Toast, ToastQueue};

pub const UPDATE_SUCCEEDED: &str = "Workshop updated successfully.";
pub const UPDATE_FAILED: &str = "Error updating workshop.";
pub const DELETE_SUCCEEDED: &str = "Workshop deleted successfully.";
pub const DELETE_REJECTED: &str = "Failed to delete workshop.";
pub const DELETE_FAILED: &str = "Error deleting workshop.";

/// The operator's answer to the delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Interpret a form answer; only an explicit yes confirms.
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("yes") {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// State of the update modal.
#[derive(Debug, Default)]
pub enum Editor {
    #[default]
    Closed,
    Editing(EditSession),
}

/// The workshop currently open in the update modal.
#[derive(Debug)]
pub struct EditSession {
    id: WorkshopId,
    draft: WorkshopDraft,
    attachment: Option<Attachment>,
    pending: Option<RequestTicket>,
}

impl EditSession {
    #[must_use]
    pub fn id(&self) -> WorkshopId {
        self.id
    }

    #[must_use]
    pub fn draft(&self) -> &WorkshopDraft {
        &self.draft
    }

    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Whether a submission of this draft is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }
}

/// A displayed row: 1-based serial within the filtered list, plus the record.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub serial: usize,
    pub workshop: &'a Workshop,
}

/// Payload of a started update.
#[derive(Debug)]
pub struct PendingUpdate {
    pub ticket: RequestTicket,
    pub request: UpdateWorkshop,
    pub cancel: CancellationToken,
}

/// Payload of a started delete or load.
#[derive(Debug)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub cancel: CancellationToken,
}

/// The admin page state for one operator.
pub struct WorkshopAdminView<S> {
    session: SessionContext<S>,
    workshops: Vec<Workshop>,
    query: SearchQuery,
    editor: Editor,
    toasts: ToastQueue,
    generation: u64,
    next_sequence: u64,
    cancel: CancellationToken,
    load: RequestPhase,
    update: RequestPhase,
    delete: RequestPhase,
}

impl<S: SessionStore> WorkshopAdminView<S> {
    /// Create an unmounted view for the given session.
    #[must_use]
    pub fn new(session: SessionContext<S>) -> Self {
        Self {
            session,
            workshops: Vec::new(),
            query: SearchQuery::default(),
            editor: Editor::Closed,
            toasts: ToastQueue::default(),
            generation: 0,
            next_sequence: 0,
            cancel: CancellationToken::new(),
            load: RequestPhase::Idle,
            update: RequestPhase::Idle,
            delete: RequestPhase::Idle,
        }
    }

    /// Start a fresh page lifetime and the initial collection load.
    ///
    /// The session is read again from its store. Requests of the previous
    /// mount are cancelled and their completions will be dropped as stale.
    /// Transient state (collection, query, editor) is reset; queued toasts
    /// survive.
    pub fn mount(&mut self) -> PendingRequest {
        self.unmount();
        if let Err(err) = self.session.reload() {
            tracing::warn!(error = ?err, "unable to read session, keeping the previous one");
        }
        let ticket = self.issue_ticket();
        self.load = RequestPhase::Pending(ticket);
        tracing::debug!(generation = self.generation, "admin view mounted");
        PendingRequest {
            ticket,
            cancel: self.cancel.clone(),
        }
    }

    /// End the current page lifetime, cancelling everything in flight.
    pub fn unmount(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;
        self.workshops.clear();
        self.query = SearchQuery::default();
        self.editor = Editor::Closed;
        self.load = RequestPhase::Idle;
        self.update = RequestPhase::Idle;
        self.delete = RequestPhase::Idle;
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        let ticket = RequestTicket::new(self.generation, self.next_sequence);
        self.next_sequence += 1;
        ticket
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.session.session()
    }

    /// Name shown in the greeting.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.session.display_name()
    }

    /// The full cached collection.
    #[must_use]
    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    /// Look up a cached record.
    #[must_use]
    pub fn find(&self, id: WorkshopId) -> Option<&Workshop> {
        self.workshops.iter().find(|ws| ws.id == id)
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Replace the search query; the visible rows follow immediately.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = SearchQuery::new(query);
    }

    /// Rows matching the current query, in collection order.
    #[must_use]
    pub fn visible(&self) -> Vec<Row<'_>> {
        self.query
            .filter(&self.workshops)
            .into_iter()
            .enumerate()
            .map(|(index, workshop)| Row {
                serial: index + 1,
                workshop,
            })
            .collect()
    }

    #[must_use]
    pub fn editor(&self) -> Option<&EditSession> {
        match &self.editor {
            Editor::Closed => None,
            Editor::Editing(session) => Some(session),
        }
    }

    #[must_use]
    pub fn load_phase(&self) -> RequestPhase {
        self.load
    }

    #[must_use]
    pub fn update_phase(&self) -> RequestPhase {
        self.update
    }

    #[must_use]
    pub fn delete_phase(&self) -> RequestPhase {
        self.delete
    }

    /// Toasts waiting to be shown.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        self.toasts.peek()
    }

    /// Remove and return queued toasts (called once per render).
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }

    /// Open the update modal on a cached record, replacing any open draft.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] if `id` is not in the collection.
    pub fn open_editor(&mut self, id: WorkshopId) -> Result<(), AdminError> {
        let workshop = self.find(id).ok_or_else(|| NotFoundError {
            entity: "Workshop",
            id: id.to_string(),
        })?;
        self.editor = Editor::Editing(EditSession {
            id,
            draft: WorkshopDraft::from(workshop),
            attachment: None,
            pending: None,
        });
        Ok(())
    }

    /// Close the modal, discarding the draft and any picked file.
    pub fn cancel_edit(&mut self) {
        self.editor = Editor::Closed;
    }

    fn editing_mut(&mut self) -> Result<&mut EditSession, AdminError> {
        match &mut self.editor {
            Editor::Editing(session) => Ok(session),
            Editor::Closed => Err(AdminError::NotEditing),
        }
    }

    /// Change one draft field.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotEditing`] if the modal is closed.
    pub fn edit_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), AdminError> {
        self.editing_mut()?.draft.set(field, value);
        Ok(())
    }

    /// Pick (or clear) the replacement material file.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotEditing`] if the modal is closed.
    pub fn attach(&mut self, attachment: Option<Attachment>) -> Result<(), AdminError> {
        self.editing_mut()?.attachment = attachment;
        Ok(())
    }

    /// Validate the draft and start its submission.
    ///
    /// An invalid draft sends nothing: the modal stays open and the
    /// validation message is queued as an error toast.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotEditing`] if the modal is closed, or
    /// [`AdminError::Validation`] if the draft is invalid.
    pub fn begin_update(&mut self) -> Result<PendingUpdate, AdminError> {
        let validation = self.editing_mut()?.draft.validate();
        if let Err(err) = validation {
            self.toasts.error(capitalize(&err.to_string()));
            return Err(err.into());
        }

        let ticket = self.issue_ticket();
        let cancel = self.cancel.clone();
        let session = self.editing_mut()?;
        session.pending = Some(ticket);
        let request = UpdateWorkshop {
            id: session.id,
            draft: session.draft.clone(),
            material: session.attachment.clone(),
        };
        self.update = RequestPhase::Pending(ticket);

        Ok(PendingUpdate {
            ticket,
            request,
            cancel,
        })
    }

    /// Start a delete if the operator confirmed it.
    ///
    /// Returns `None` (and sends nothing) when declined.
    pub fn begin_delete(
        &mut self,
        id: WorkshopId,
        confirmation: Confirmation,
    ) -> Option<PendingRequest> {
        if confirmation == Confirmation::Declined {
            tracing::debug!(%id, "delete declined");
            return None;
        }
        let ticket = self.issue_ticket();
        self.delete = RequestPhase::Pending(ticket);
        Some(PendingRequest {
            ticket,
            cancel: self.cancel.clone(),
        })
    }

    /// Apply a finished request to the view.
    pub fn reduce(&mut self, completion: Completion) -> Reduction {
        if completion.ticket().generation() != self.generation {
            tracing::debug!(
                ticket = ?completion.ticket(),
                generation = self.generation,
                "dropping completion from previous mount"
            );
            return Reduction::Stale;
        }

        match completion {
            Completion::Loaded { ticket, result } => self.reduce_loaded(ticket, result),
            Completion::Updated { ticket, result } => self.reduce_updated(ticket, result),
            Completion::Deleted { ticket, id, result } => self.reduce_deleted(ticket, id, result),
        }
    }

    fn reduce_loaded(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Workshop>, AdminError>,
    ) -> Reduction {
        if self.load != RequestPhase::Pending(ticket) {
            return Reduction::Stale;
        }
        match result {
            Ok(workshops) => {
                tracing::debug!(count = workshops.len(), "workshops loaded");
                self.workshops = workshops;
                self.load = RequestPhase::Succeeded;
            }
            Err(err) => {
                // No toast here, unlike update and delete.
                tracing::error!(error = ?err, "error fetching workshops");
                self.workshops.clear();
                self.load = RequestPhase::Failed;
            }
        }
        Reduction::Applied
    }

    fn reduce_updated(
        &mut self,
        ticket: RequestTicket,
        result: Result<Workshop, AdminError>,
    ) -> Reduction {
        let latest = self.update == RequestPhase::Pending(ticket);
        let owns_editor = matches!(
            &self.editor,
            Editor::Editing(session) if session.pending == Some(ticket)
        );

        match result {
            Ok(updated) => {
                let id = updated.id;
                if !workshop::replace_by_id(&mut self.workshops, updated) {
                    tracing::warn!(%id, "updated workshop is not in the loaded collection");
                }
                if owns_editor {
                    self.editor = Editor::Closed;
                }
                if latest {
                    self.update = RequestPhase::Succeeded;
                }
                self.toasts.success(UPDATE_SUCCEEDED);
            }
            Err(err) => {
                tracing::error!(error = ?err, "error updating workshop");
                match &mut self.editor {
                    Editor::Editing(session) if owns_editor => session.pending = None,
                    _ => {}
                }
                if latest {
                    self.update = RequestPhase::Failed;
                }
                self.toasts.error(UPDATE_FAILED);
            }
        }
        Reduction::Applied
    }

    fn reduce_deleted(
        &mut self,
        ticket: RequestTicket,
        id: WorkshopId,
        result: Result<(), AdminError>,
    ) -> Reduction {
        let latest = self.delete == RequestPhase::Pending(ticket);
        match result {
            Ok(()) => {
                let removed = workshop::remove_by_id(&mut self.workshops, id);
                tracing::debug!(%id, removed, "workshop deleted");
                if latest {
                    self.delete = RequestPhase::Succeeded;
                }
                self.toasts.success(DELETE_SUCCEEDED);
            }
            Err(err) => {
                tracing::error!(%id, error = ?err, "error deleting workshop");
                if latest {
                    self.delete = RequestPhase::Failed;
                }
                self.toasts.error(if err.is_status() {
                    DELETE_REJECTED
                } else {
                    DELETE_FAILED
                });
            }
        }
        Reduction::Applied
    }

    /// Render the full collection (never the filtered rows) as a PDF.
    ///
    /// # Errors
    ///
    /// Propagates the exporter's error; no toast is queued.
    pub fn export_document<D>(&self, exporter: &D) -> Result<ExportFile, AdminError>
    where
        D: DocumentExporter + ?Sized,
    {
        let table = ExportTable::document(&self.workshops);
        let bytes = exporter.render_document(&table)?;
        Ok(ExportFile {
            format: ExportFormat::Pdf,
            bytes,
        })
    }

    /// Render the full collection (never the filtered rows) as a workbook.
    ///
    /// # Errors
    ///
    /// Propagates the exporter's error; no toast is queued.
    pub fn export_spreadsheet<X>(&self, exporter: &X) -> Result<ExportFile, AdminError>
    where
        X: SpreadsheetExporter + ?Sized,
    {
        let table = ExportTable::spreadsheet(&self.workshops);
        let bytes = exporter.render_spreadsheet(&table)?;
        Ok(ExportFile {
            format: ExportFormat::Xlsx,
            bytes,
        })
    }

    /// Cancel everything in flight and clear the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the session store cannot be cleared.
    pub fn logout(&mut self) -> Result<(), AdminError> {
        self.unmount();
        self.session.clear()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
