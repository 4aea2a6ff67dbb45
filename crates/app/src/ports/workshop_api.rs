//! Remote workshop API port.

use std::future::Future;

use workshop_admin_domain::draft::UpdateWorkshop;
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::id::{MaterialRef, WorkshopId};
use workshop_admin_domain::workshop::Workshop;

/// The server that owns workshop records.
///
/// Every non-success outcome is reported as [`AdminError::Remote`]; the
/// console does not distinguish not-found, conflict, or validation failures.
pub trait WorkshopApi {
    /// Fetch the whole collection.
    fn list(&self) -> impl Future<Output = Result<Vec<Workshop>, AdminError>> + Send;

    /// Send the draft (and optional replacement file) and return the
    /// server's canonical record.
    fn update(
        &self,
        update: UpdateWorkshop,
    ) -> impl Future<Output = Result<Workshop, AdminError>> + Send;

    /// Delete a workshop by id.
    fn delete(&self, id: WorkshopId) -> impl Future<Output = Result<(), AdminError>> + Send;

    /// Absolute URL the material file can be downloaded from.
    fn material_url(&self, material: &MaterialRef) -> String;
}
