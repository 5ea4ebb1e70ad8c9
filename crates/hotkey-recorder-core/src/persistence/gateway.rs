use crate::{CoreResult, HotkeyDescriptor};

/// Durable store of `target → descriptor` bindings.
///
/// The recorder calls [`save`](PersistenceGateway::save) exactly once per
/// finalized session, after the state machine has decided. It never retries.
pub trait PersistenceGateway {
    /// Store `descriptor` for `target_id`; `None` clears the binding.
    ///
    /// # Errors
    ///
    /// Implementations should report failures as
    /// [`CaptureError::PersistenceFailed`](crate::CaptureError::PersistenceFailed).
    fn save(&mut self, target_id: &str, descriptor: Option<&HotkeyDescriptor>) -> CoreResult<()>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for &mut G {
    fn save(&mut self, target_id: &str, descriptor: Option<&HotkeyDescriptor>) -> CoreResult<()> {
        (**self).save(target_id, descriptor)
    }
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Box<G> {
    fn save(&mut self, target_id: &str, descriptor: Option<&HotkeyDescriptor>) -> CoreResult<()> {
        (**self).save(target_id, descriptor)
    }
}
