use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::io::dispatch::{NotificationDispatcher, PermissionOracle};
use crate::io::publish::{PublishError, TimelinePublisher};
use crate::io::store::{StoreError, TaskStore};
use crate::model::horizon::PlanHorizon;
use crate::ops::{clone_ops, reminder_ops, timeline_ops};

/// Error type for engine passes
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// How a reconcile request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Full pass ran: timeline published, notifications rebuilt
    Scheduled { requests: usize },
    /// Timeline published, but notification permission is missing so the
    /// dispatcher was not touched. An expected mode, not a failure.
    PermissionDenied,
    /// Another pass was in flight; this request was folded into the rerun
    /// slot and the in-flight caller will run it.
    Coalesced,
}

/// Single-flight state: one pass may run at a time, with one pending rerun
/// slot holding the latest coalesced trigger's parameters. Later triggers
/// while a rerun is already pending overwrite the slot (latest wins).
struct Flight {
    busy: bool,
    pending: Option<(String, DateTime<Utc>)>,
}

/// Orchestrates the full scheduling pass over the task snapshot.
///
/// One pass: fetch the snapshot, publish the 8-day widget timeline, then
/// (permission allowing) cancel every pending notification and re-emit the
/// complete plan for every active task. Full rebuild, no diffing — a pass
/// interrupted by a crash leaves no drift for the next one to untangle.
pub struct ScheduleEngine<S, D, P, W> {
    store: S,
    dispatcher: D,
    permissions: P,
    publisher: W,
    horizon: PlanHorizon,
    tint: String,
    flight: Mutex<Flight>,
}

impl<S, D, P, W> ScheduleEngine<S, D, P, W>
where
    S: TaskStore,
    D: NotificationDispatcher,
    P: PermissionOracle,
    W: TimelinePublisher,
{
    pub fn new(store: S, dispatcher: D, permissions: P, publisher: W) -> Self {
        ScheduleEngine {
            store,
            dispatcher,
            permissions,
            publisher,
            horizon: PlanHorizon::default(),
            tint: "#007aff".into(),
            flight: Mutex::new(Flight {
                busy: false,
                pending: None,
            }),
        }
    }

    /// Override the speculative-reminder horizon
    pub fn with_horizon(mut self, horizon: PlanHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the accent color stamped onto timeline entries
    pub fn with_tint(mut self, tint: impl Into<String>) -> Self {
        self.tint = tint.into();
        self
    }

    /// Run one reconciliation pass, serialized through the single-flight
    /// guard.
    ///
    /// If a pass is already in flight the request returns
    /// [`ReconcileOutcome::Coalesced`] immediately and the in-flight caller
    /// runs exactly one more pass afterwards with the coalesced trigger's
    /// own `user_id`/`now` (latest queued trigger wins), so no trigger is
    /// lost, no stale clock is reused, and no two passes ever interleave
    /// their cancel/schedule calls.
    pub fn reconcile(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ReconcileOutcome, EngineError> {
        {
            let mut flight = self.lock_flight();
            if flight.busy {
                flight.pending = Some((user_id.to_string(), now));
                debug!("reconcile already in flight, coalescing trigger");
                return Ok(ReconcileOutcome::Coalesced);
            }
            flight.busy = true;
        }

        let mut user_id = user_id.to_string();
        let mut now = now;
        loop {
            let result = self.run_pass(&user_id, now);
            let mut flight = self.lock_flight();
            if let Some((next_user, next_now)) = flight.pending.take() {
                drop(flight);
                debug!("running coalesced reconcile pass");
                user_id = next_user;
                now = next_now;
                continue;
            }
            flight.busy = false;
            return result;
        }
    }

    /// Handle a task having just been marked completed: clone its next
    /// occurrence if the guard allows, then reconcile.
    ///
    /// The clone is persisted before the reconcile pass runs, so the pass
    /// sees it and stops emitting speculative reminders for the origin.
    /// Returns the id of the created clone, if any.
    pub fn complete_task(
        &self,
        user_id: &str,
        task_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, EngineError> {
        let snapshot = self.store.fetch_active_tasks(user_id)?;
        let mut created = None;

        if let Some(stored) = snapshot.iter().find(|t| t.id == task_id) {
            if clone_ops::should_clone(stored, &snapshot) {
                match clone_ops::build_clone(stored, now) {
                    Ok(clone) => {
                        let id = self.store.create_task(user_id, clone)?;
                        info!("cloned recurring task {task_id} -> {id}");
                        created = Some(id);
                    }
                    Err(e) => {
                        // local to this task; reconciliation still runs
                        warn!("could not clone recurring task {task_id}: {e}");
                    }
                }
            }
        } else {
            debug!("completed task {task_id} not in snapshot, skipping clone check");
        }

        self.reconcile(user_id, now)?;
        Ok(created)
    }

    /// One full pass against a fresh snapshot
    fn run_pass(&self, user_id: &str, now: DateTime<Utc>) -> Result<ReconcileOutcome, EngineError> {
        let snapshot = self.store.fetch_active_tasks(user_id)?;

        // the widget timeline is rebuilt regardless of permission state
        let timeline = timeline_ops::build_timeline(&snapshot, &self.tint, now);
        self.publisher.publish(&timeline)?;

        if !self.permissions.has_notification_permission() {
            debug!("no notification permission, timeline published only");
            return Ok(ReconcileOutcome::PermissionDenied);
        }

        // cancel must complete before any schedule call of this pass
        self.dispatcher.cancel_all();

        let mut requests = 0;
        for stored in &snapshot {
            for request in reminder_ops::plan(stored, &snapshot, &self.horizon, now) {
                self.dispatcher.schedule(request);
                requests += 1;
            }
        }
        info!(
            "reconciled {} tasks into {requests} notification requests",
            snapshot.len()
        );
        Ok(ReconcileOutcome::Scheduled { requests })
    }

    fn lock_flight(&self) -> std::sync::MutexGuard<'_, Flight> {
        // the guarded state is a flag and a slot; a panicked holder cannot
        // have left them invalid
        self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
