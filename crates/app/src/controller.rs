//! Async driver for [`WorkshopAdminView`].
//!
//! Each operation follows the same three steps: lock the view and start the
//! workflow, release the lock and await the port under the mount's
//! cancellation token, then lock again and feed the [`Completion`] to
//! `reduce`. A cancelled request never reaches the view.

use tokio::sync::{Mutex, MutexGuard};
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::export::ExportFile;
use workshop_admin_domain::id::{MaterialRef, WorkshopId};

use crate::ports::{DocumentExporter, SessionStore, SpreadsheetExporter, WorkshopApi};
use crate::request::{Completion, Reduction, run_cancellable};
use crate::view::{Confirmation, WorkshopAdminView};

/// Owns the view and the API it talks to.
pub struct AdminController<A, S> {
    api: A,
    view: Mutex<WorkshopAdminView<S>>,
}

impl<A, S> AdminController<A, S>
where
    A: WorkshopApi + Send + Sync,
    S: SessionStore + Send,
{
    /// Wrap an (unmounted) view.
    pub fn new(api: A, view: WorkshopAdminView<S>) -> Self {
        Self {
            api,
            view: Mutex::new(view),
        }
    }

    /// Lock the view for reading or synchronous edits.
    pub async fn view(&self) -> MutexGuard<'_, WorkshopAdminView<S>> {
        self.view.lock().await
    }

    /// Absolute download URL of a material file.
    pub fn material_url(&self, material: &MaterialRef) -> String {
        self.api.material_url(material)
    }

    /// Mount the view and load the collection.
    ///
    /// Returns `None` if the load was cancelled by a newer mount or a logout.
    #[tracing::instrument(skip(self))]
    pub async fn mount(&self) -> Option<Reduction> {
        let pending = self.view.lock().await.mount();
        let result = run_cancellable(&pending.cancel, self.api.list()).await?;
        Some(self.view.lock().await.reduce(Completion::Loaded {
            ticket: pending.ticket,
            result,
        }))
    }

    /// Submit the open editor.
    ///
    /// Returns `Ok(None)` if the request was cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotEditing`] or [`AdminError::Validation`] when
    /// nothing could be sent. Remote failures are not errors here: they are
    /// reduced into the view as a failure toast.
    #[tracing::instrument(skip(self))]
    pub async fn submit_update(&self) -> Result<Option<Reduction>, AdminError> {
        let pending = self.view.lock().await.begin_update()?;
        tracing::debug!(
            id = %pending.request.id,
            with_material = pending.request.material.is_some(),
            "submitting workshop update"
        );
        let Some(result) = run_cancellable(&pending.cancel, self.api.update(pending.request)).await
        else {
            return Ok(None);
        };
        Ok(Some(self.view.lock().await.reduce(Completion::Updated {
            ticket: pending.ticket,
            result,
        })))
    }

    /// Delete a workshop if the operator confirmed it.
    ///
    /// Returns `None` when declined (nothing is sent) or cancelled.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: WorkshopId, confirmation: Confirmation) -> Option<Reduction> {
        let pending = self.view.lock().await.begin_delete(id, confirmation)?;
        let result = run_cancellable(&pending.cancel, self.api.delete(id)).await?;
        Some(self.view.lock().await.reduce(Completion::Deleted {
            ticket: pending.ticket,
            id,
            result,
        }))
    }

    /// Render the full collection as a PDF.
    ///
    /// # Errors
    ///
    /// Propagates the exporter's error.
    pub async fn export_document<D>(&self, exporter: &D) -> Result<ExportFile, AdminError>
    where
        D: DocumentExporter + ?Sized,
    {
        self.view.lock().await.export_document(exporter)
    }

    /// Render the full collection as a workbook.
    ///
    /// # Errors
    ///
    /// Propagates the exporter's error.
    pub async fn export_spreadsheet<X>(&self, exporter: &X) -> Result<ExportFile, AdminError>
    where
        X: SpreadsheetExporter + ?Sized,
    {
        self.view.lock().await.export_spreadsheet(exporter)
    }

    /// Cancel in-flight requests and clear the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Session`] if the session store cannot be cleared.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AdminError> {
        self.view.lock().await.logout()
    }

    /// Cancel in-flight requests without touching the session.
    pub async fn shutdown(&self) {
        self.view.lock().await.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::{Arc, Mutex as StdMutex};

    use tokio::sync::Notify;
    use workshop_admin_domain::draft::{Attachment, DraftField, UpdateWorkshop};
    use workshop_admin_domain::error::{RemoteError, RemoteErrorKind};
    use workshop_admin_domain::workshop::Workshop;

    use crate::request::RequestPhase;
    use crate::session::SessionContext;
    use crate::session::tests::InMemorySessionStore;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Update(UpdateWorkshop),
        Delete(WorkshopId),
    }

    /// In-memory stand-in for the remote server.
    #[derive(Clone, Default)]
    struct InMemoryApi {
        records: Arc<StdMutex<Vec<Workshop>>>,
        calls: Arc<StdMutex<Vec<Call>>>,
        fail_with: Arc<StdMutex<Option<RemoteErrorKind>>>,
        gate: Option<Arc<Notify>>,
    }

    impl InMemoryApi {
        fn with(records: Vec<Workshop>) -> Self {
            let api = Self::default();
            *api.records.lock().unwrap() = records;
            api
        }

        fn failing(self, kind: RemoteErrorKind) -> Self {
            *self.fail_with.lock().unwrap() = Some(kind);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn check(&self) -> Result<(), AdminError> {
            match *self.fail_with.lock().unwrap() {
                Some(kind) => Err(RemoteError::new(kind).into()),
                None => Ok(()),
            }
        }
    }

    impl WorkshopApi for InMemoryApi {
        fn list(&self) -> impl Future<Output = Result<Vec<Workshop>, AdminError>> + Send {
            self.calls.lock().unwrap().push(Call::List);
            let result = self.check().map(|()| self.records.lock().unwrap().clone());
            let gate = self.gate.clone();
            async move {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                result
            }
        }

        fn update(
            &self,
            update: UpdateWorkshop,
        ) -> impl Future<Output = Result<Workshop, AdminError>> + Send {
            self.calls.lock().unwrap().push(Call::Update(update.clone()));
            let result = self.check().map(|()| {
                let draft = update.draft;
                let canonical = Workshop {
                    id: update.id,
                    name: draft.name,
                    date: draft.date,
                    time: draft.time,
                    meeting_link: draft.meeting_link,
                    description: draft.description,
                    instructor: draft.instructor,
                    material: update
                        .material
                        .map(|file| workshop_admin_domain::id::MaterialRef::new(file.file_name)),
                };
                let mut records = self.records.lock().unwrap();
                if let Some(slot) = records.iter_mut().find(|ws| ws.id == canonical.id) {
                    *slot = canonical.clone();
                }
                canonical
            });
            async move { result }
        }

        fn delete(&self, id: WorkshopId) -> impl Future<Output = Result<(), AdminError>> + Send {
            self.calls.lock().unwrap().push(Call::Delete(id));
            let result = self.check().map(|()| {
                self.records.lock().unwrap().retain(|ws| ws.id != id);
            });
            async move { result }
        }

        fn material_url(&self, material: &MaterialRef) -> String {
            format!("http://api.test/api/workshops/materials/{material}")
        }
    }

    fn workshop(id: i64, name: &str) -> Workshop {
        Workshop::builder(WorkshopId::new(id))
            .name(name)
            .date("2024-05-01")
            .time("10:00")
            .meeting_link("https://meet.example.com")
            .description("Session")
            .instructor("Ferris")
            .build()
    }

    fn controller(api: InMemoryApi) -> AdminController<InMemoryApi, InMemorySessionStore> {
        let session = SessionContext::load(InMemorySessionStore::with_username("ada")).unwrap();
        AdminController::new(api, WorkshopAdminView::new(session))
    }

    #[tokio::test]
    async fn should_load_collection_on_mount() {
        let ctrl = controller(InMemoryApi::with(vec![workshop(1, "Intro to Rust")]));

        assert_eq!(ctrl.mount().await, Some(Reduction::Applied));

        let view = ctrl.view().await;
        assert_eq!(view.workshops().len(), 1);
        assert_eq!(view.load_phase(), RequestPhase::Succeeded);
    }

    #[tokio::test]
    async fn should_stay_empty_and_silent_when_load_fails() {
        let api = InMemoryApi::with(vec![workshop(1, "A")]).failing(RemoteErrorKind::Transport);
        let ctrl = controller(api);

        ctrl.mount().await;

        let view = ctrl.view().await;
        assert!(view.workshops().is_empty());
        assert!(view.toasts().is_empty());
    }

    #[tokio::test]
    async fn should_send_update_and_apply_canonical_record() {
        let api = InMemoryApi::with(vec![workshop(1, "A"), workshop(2, "B")]);
        let ctrl = controller(api.clone());
        ctrl.mount().await;
        {
            let mut view = ctrl.view().await;
            view.open_editor(WorkshopId::new(2)).unwrap();
            view.edit_field(DraftField::Name, "B2").unwrap();
            view.attach(Some(Attachment {
                file_name: "deck.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                bytes: vec![1],
            }))
            .unwrap();
        }

        let outcome = ctrl.submit_update().await.unwrap();

        assert_eq!(outcome, Some(Reduction::Applied));
        let view = ctrl.view().await;
        assert_eq!(view.workshops()[1].name, "B2");
        assert_eq!(
            view.workshops()[1].material.as_ref().map(MaterialRef::as_str),
            Some("deck.pdf")
        );
        assert!(view.editor().is_none());
        assert!(matches!(&api.calls()[1], Call::Update(u) if u.material.is_some()));
    }

    #[tokio::test]
    async fn should_not_call_api_when_draft_invalid() {
        let api = InMemoryApi::with(vec![workshop(1, "A")]);
        let ctrl = controller(api.clone());
        ctrl.mount().await;
        {
            let mut view = ctrl.view().await;
            view.open_editor(WorkshopId::new(1)).unwrap();
            view.edit_field(DraftField::Date, "tomorrow").unwrap();
        }

        let result = ctrl.submit_update().await;

        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert_eq!(api.calls(), [Call::List]);
    }

    #[tokio::test]
    async fn should_keep_collection_when_update_fails() {
        let api = InMemoryApi::with(vec![workshop(1, "A")]);
        let ctrl = controller(api.clone());
        ctrl.mount().await;
        ctrl.view().await.open_editor(WorkshopId::new(1)).unwrap();
        *api.fail_with.lock().unwrap() = Some(RemoteErrorKind::Status(500));

        ctrl.submit_update().await.unwrap();

        let view = ctrl.view().await;
        assert_eq!(view.workshops(), [workshop(1, "A")].as_slice());
        assert!(view.editor().is_some());
    }

    #[tokio::test]
    async fn should_not_call_api_when_delete_declined() {
        let api = InMemoryApi::with(vec![workshop(1, "A")]);
        let ctrl = controller(api.clone());
        ctrl.mount().await;

        let outcome = ctrl
            .delete(WorkshopId::new(1), Confirmation::Declined)
            .await;

        assert_eq!(outcome, None);
        assert_eq!(api.calls(), [Call::List]);
        assert_eq!(ctrl.view().await.workshops().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_confirmed_workshop() {
        let api = InMemoryApi::with(vec![workshop(1, "A"), workshop(2, "B")]);
        let ctrl = controller(api.clone());
        ctrl.mount().await;

        ctrl.delete(WorkshopId::new(1), Confirmation::Confirmed)
            .await;

        assert_eq!(api.calls()[1], Call::Delete(WorkshopId::new(1)));
        let view = ctrl.view().await;
        assert_eq!(view.workshops().len(), 1);
        assert_eq!(view.workshops()[0].id, WorkshopId::new(2));
    }

    #[tokio::test]
    async fn should_keep_single_item_when_deleting_absent_id() {
        let api = InMemoryApi::with(vec![workshop(1, "A")]);
        let ctrl = controller(api);
        ctrl.mount().await;

        ctrl.delete(WorkshopId::new(2), Confirmation::Confirmed)
            .await;

        let view = ctrl.view().await;
        assert_eq!(view.workshops().len(), 1);
        assert_eq!(view.workshops()[0].id, WorkshopId::new(1));
    }

    #[tokio::test]
    async fn should_abandon_load_when_remounted() {
        let gate = Arc::new(Notify::new());
        let api = InMemoryApi {
            gate: Some(Arc::clone(&gate)),
            ..InMemoryApi::with(vec![workshop(1, "A")])
        };
        let ctrl = Arc::new(controller(api));

        let first = tokio::spawn({
            let ctrl = Arc::clone(&ctrl);
            async move { ctrl.mount().await }
        });
        while !ctrl.view().await.load_phase().is_pending() {
            tokio::task::yield_now().await;
        }

        ctrl.shutdown().await;

        assert_eq!(first.await.unwrap(), None);
        assert!(ctrl.view().await.workshops().is_empty());
    }

    #[tokio::test]
    async fn should_clear_session_on_logout() {
        let ctrl = controller(InMemoryApi::default());
        ctrl.mount().await;

        ctrl.logout().await.unwrap();

        assert_eq!(ctrl.view().await.display_name(), "Admin User");
    }

    #[tokio::test]
    async fn should_greet_new_operator_when_remounted_after_relogin() {
        let store = InMemorySessionStore::with_username("ada");
        let session = SessionContext::load(store.clone()).unwrap();
        let ctrl = AdminController::new(InMemoryApi::default(), WorkshopAdminView::new(session));
        ctrl.mount().await;
        ctrl.logout().await.unwrap();

        store.stored.lock().unwrap().username = Some("bob".to_string());
        ctrl.mount().await;

        assert_eq!(ctrl.view().await.display_name(), "bob");
    }

    #[tokio::test]
    async fn should_build_material_url_from_api() {
        let ctrl = controller(InMemoryApi::default());
        assert_eq!(
            ctrl.material_url(&MaterialRef::new("a.pdf")),
            "http://api.test/api/workshops/materials/a.pdf"
        );
    }
}
