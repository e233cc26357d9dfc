use crate::model::notification::NotificationRequest;

/// The OS-local notification center.
///
/// Calls are fire-and-forget from the engine's perspective; delivery errors
/// are the dispatcher's to log. The reconciler guarantees `cancel_all`
/// completes before any `schedule` of the same pass.
pub trait NotificationDispatcher {
    /// Drop every pending request scheduled by a previous pass
    fn cancel_all(&self);

    /// Queue one notification request
    fn schedule(&self, request: NotificationRequest);
}

/// Answers whether the user has granted notification permission.
///
/// Denied permission is an expected mode, not an error: the reconciler still
/// publishes the timeline, it just skips the dispatcher.
pub trait PermissionOracle {
    fn has_notification_permission(&self) -> bool;
}
