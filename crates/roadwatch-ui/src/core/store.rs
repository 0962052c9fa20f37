//! App-wide yewdux store and its reducers.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Every user or timer action has one named reducer; components never poke
//!   fields directly.
//! - Reducers are plain functions over `&mut AppStore` so they test natively.

use crate::core::connectivity::ConnectivityState;
use crate::core::errors::{ApiError, StatsInconsistency};
use crate::core::stats::consistency_findings;
use crate::core::ui::{Toast, ToastKind, dismiss_toast, push_toast};
use roadwatch_api_models::{DashboardSnapshot, DetectionRecord, SummaryStats};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Telemetry shown on the dashboard.
    pub dashboard: DashboardState,
    /// Connectivity and in-flight action state.
    pub system: SystemState,
    /// Transient notifications.
    pub toasts: ToastState,
}

/// Telemetry slice, replaced wholesale on every snapshot.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardState {
    /// Current counters.
    pub stats: SummaryStats,
    /// Counters from the snapshot before the current one, for trend labels.
    pub previous_stats: Option<SummaryStats>,
    /// Recent detections in producer order, bounded by the configured limit.
    pub detections: Vec<DetectionRecord>,
    /// Epoch milliseconds of the last update (snapshot or tick).
    pub last_update_ms: Option<f64>,
    /// Consistency problems found in the current snapshot.
    pub findings: Vec<StatsInconsistency>,
    /// Whether any snapshot has been applied yet.
    pub loaded: bool,
}

/// Connectivity plus export/refresh progress.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SystemState {
    /// Live source availability.
    pub connectivity: ConnectivityState,
    /// Export request progress.
    pub export: ExportStatus,
    /// A refresh request is in flight.
    pub refresh_busy: bool,
}

/// Visible toasts plus the id counter.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    /// Toasts oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

/// Export request progress shown in the header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ExportStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// Artifact opened.
    Ready {
        /// Name offered for the artifact.
        filename: String,
    },
    /// Request failed; the message is shown to the user.
    Failed {
        /// Failure text.
        message: String,
    },
}

impl ExportStatus {
    /// Whether an export request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Replace telemetry with a snapshot, keeping the first `recent_limit` records.
///
/// Returns the consistency findings so the caller can log them.
pub fn apply_snapshot(
    store: &mut AppStore,
    snapshot: DashboardSnapshot,
    recent_limit: usize,
    now_ms: f64,
) -> Vec<StatsInconsistency> {
    let DashboardSnapshot {
        stats,
        mut detections,
    } = snapshot;
    detections.truncate(recent_limit);
    let findings = consistency_findings(&stats, detections.len());
    let dashboard = &mut store.dashboard;
    dashboard.previous_stats = dashboard.loaded.then_some(dashboard.stats);
    dashboard.stats = stats;
    dashboard.detections = detections;
    dashboard.last_update_ms = Some(now_ms);
    dashboard.findings.clone_from(&findings);
    dashboard.loaded = true;
    findings
}

/// Cosmetic liveness tick: only the last-update stamp moves.
pub fn record_tick(store: &mut AppStore, now_ms: f64) {
    store.dashboard.last_update_ms = Some(now_ms);
}

/// Set the connectivity flag explicitly.
pub fn set_connectivity(store: &mut AppStore, state: ConnectivityState) {
    store.system.connectivity = state;
}

/// Mark a refresh as started.
pub fn begin_refresh(store: &mut AppStore) {
    store.system.refresh_busy = true;
}

/// Apply a successful refresh.
pub fn finish_refresh_ok(
    store: &mut AppStore,
    snapshot: DashboardSnapshot,
    recent_limit: usize,
    now_ms: f64,
) -> Vec<StatsInconsistency> {
    store.system.refresh_busy = false;
    store.system.connectivity = ConnectivityState::Connected;
    apply_snapshot(store, snapshot, recent_limit, now_ms)
}

/// Apply a failed refresh: data stays, the source is considered lost.
///
/// A reconnect in flight keeps its state; it settles connectivity itself.
pub fn finish_refresh_err(store: &mut AppStore) {
    store.system.refresh_busy = false;
    if !matches!(store.system.connectivity, ConnectivityState::Reconnecting { .. }) {
        store.system.connectivity = ConnectivityState::Disconnected;
    }
}

/// Mark a reconnect attempt as started.
///
/// Returns `false` when the source is already connected again, in which case
/// the reconnect loop stops without touching state.
pub fn begin_reconnect_attempt(store: &mut AppStore, attempt: u32) -> bool {
    if store.system.connectivity.is_connected() {
        return false;
    }
    store.system.connectivity = ConnectivityState::Reconnecting { attempt };
    true
}

/// Give up after the last reconnect attempt.
///
/// Returns `false` when something else already settled connectivity.
pub fn abandon_reconnect(store: &mut AppStore) -> bool {
    if !matches!(store.system.connectivity, ConnectivityState::Reconnecting { .. }) {
        return false;
    }
    store.system.connectivity = ConnectivityState::Disconnected;
    true
}

/// Mark an export as started. Returns `false` when one is already running.
pub fn begin_export(store: &mut AppStore) -> bool {
    if store.system.export.is_pending() {
        return false;
    }
    store.system.export = ExportStatus::Pending;
    true
}

/// Record the outcome of an export request.
pub fn finish_export(store: &mut AppStore, outcome: Result<String, ApiError>) {
    store.system.export = match outcome {
        Ok(filename) => ExportStatus::Ready { filename },
        Err(err) => ExportStatus::Failed {
            message: err.to_string(),
        },
    };
}

/// Queue a toast that expires a fixed time after `now_ms`.
pub fn notify(store: &mut AppStore, kind: ToastKind, message: String, now_ms: f64) {
    store.toasts.next_id += 1;
    let id = store.toasts.next_id;
    push_toast(&mut store.toasts.items, id, kind, message, now_ms);
}

/// Drop a toast by id.
pub fn dismiss(store: &mut AppStore, id: u64) {
    dismiss_toast(&mut store.toasts.items, id);
}
