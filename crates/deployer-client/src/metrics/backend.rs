use std::sync::Arc;

/// Backend metrics collection interface.
///
/// Every call issued by [`crate::State`] reports exactly one `record_call` and
/// at most one of the failure hooks, matching the class of [`crate::DeployerError`].
pub trait MetricsBackend: Send + Sync + 'static {
    /// A call to `method` is about to be issued.
    fn record_call(&self, method: &str);

    /// The call channel failed before a result was available.
    fn record_transport_error(&self, method: &str);

    /// The controller rejected the addressed entity.
    ///
    /// `code` is the entity error code, possibly empty.
    fn record_entity_error(&self, method: &str, code: &str);

    /// The response did not line up with the request.
    fn record_protocol_violation(&self, method: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
