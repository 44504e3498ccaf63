//! Goal-progress calculation core.
//!
//! Pure, synchronous functions that turn a goal's targets and its tracked
//! history into normalized percentages and a chartable timeline. Nothing in
//! this module touches the database; `core::tracking` loads the rows and
//! hands plain snapshots in. All percentage math clamps to `[0, 100]` and
//! never returns a non-finite value, so degenerate target configurations
//! (start equal to target, zero targets, inverted directions) produce flat
//! or clamped output instead of errors.

use chrono::{DateTime, Utc};

/// Label used for the synthesized whole-goal series in timelines.
pub const OVERALL_LABEL: &str = "Overall";

/// Whether progress on a target means decreasing or increasing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Improvement means moving toward a lower number (e.g. run time)
    Min,
    /// Improvement means moving toward a higher number (e.g. distance)
    Max,
}

impl Direction {
    /// Parses the stored direction string (`"min"` / `"max"`).
    /// Unknown strings yield `None`; callers decide whether that is an error.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// The string form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Point-in-time view of one target, as needed by the calculation core.
#[derive(Debug, Clone)]
pub struct TargetSnapshot {
    /// Stable target id; events are matched against this
    pub id: i64,
    /// Display label, becomes the series label in timelines
    pub name: String,
    /// Progress direction
    pub direction: Direction,
    /// Value when the goal was created
    pub start_value: f64,
    /// Value the user is aiming for
    pub target_value: f64,
    /// Most recently tracked value
    pub current_value: f64,
}

/// One tracked value for one target, stripped down to what the timeline
/// reconstruction needs.
#[derive(Debug, Clone)]
pub struct TrackedValue {
    /// Stable id of the target the value was recorded for
    pub target_id: i64,
    /// The submitted value
    pub value: f64,
    /// When it was recorded
    pub timestamp: DateTime<Utc>,
}

/// One point in a goal's progress timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    /// When this percentage held
    pub date: DateTime<Utc>,
    /// Progress percentage in `[0, 100]`
    pub value: f64,
    /// Target display name, or [`OVERALL_LABEL`] for the aggregated series
    pub target_label: String,
}

/// Converts a single target's (start, target, current) tuple into a 0-100
/// completion percentage.
///
/// For [`Direction::Max`] the score is `current / target`; for
/// [`Direction::Min`] it is the fraction of the planned improvement
/// (`start - target`) already realized (`start - current`). Both are
/// expressed as percentages and clamped to `[0, 100]`.
///
/// Division by zero (a zero `Max` target, or a `Min` target whose start
/// equals its target value) returns `0` by convention rather than
/// propagating `NaN`/infinity.
#[must_use]
pub fn compute_progress(
    direction: Direction,
    start_value: f64,
    target_value: f64,
    current_value: f64,
) -> f64 {
    let raw = match direction {
        Direction::Max => {
            if target_value == 0.0 {
                return 0.0;
            }
            (current_value / target_value) * 100.0
        }
        Direction::Min => {
            let total_improvement = start_value - target_value;
            if total_improvement == 0.0 {
                return 0.0;
            }
            let current_improvement = start_value - current_value;
            (current_improvement / total_improvement) * 100.0
        }
    };

    if raw.is_finite() {
        raw.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Folds per-target percentages into one overall score via the median.
///
/// The median resists a single wildly-off target distorting the overall
/// number the way a mean would. Empty input returns `0`; an even count
/// averages the two middle values after an ascending sort.
#[must_use]
pub fn aggregate_overall(per_target_percentages: &[f64]) -> f64 {
    if per_target_percentages.is_empty() {
        return 0.0;
    }

    let mut sorted = per_target_percentages.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Reconstructs the full progress timeline for a goal.
///
/// The output contains, per target, one synthesized initial point at
/// `goal_created_at` (computed from `start_value`) plus one point per
/// tracked event, and alongside them an [`OVERALL_LABEL`] series: the
/// median across all targets, re-evaluated at every event using each other
/// target's most recent value at or before that event's timestamp (falling
/// back to the target's `current_value` when it has no earlier event).
///
/// Events referencing a target id that is no longer on the goal are
/// silently skipped; the remaining series stay chartable. Input event order
/// is arbitrary; output is sorted ascending by date.
///
/// O(events * targets), acceptable for the single-digit-to-low-hundreds
/// sizes this data has in practice.
#[must_use]
pub fn build_timeline(
    goal_created_at: DateTime<Utc>,
    targets: &[TargetSnapshot],
    events: &[TrackedValue],
) -> Vec<TimelinePoint> {
    let mut points = Vec::with_capacity((events.len() + 1) * 2 + targets.len());

    // Initial points: every target starts at its start_value.
    let mut initial_percentages = Vec::with_capacity(targets.len());
    for t in targets {
        let pct = compute_progress(t.direction, t.start_value, t.target_value, t.start_value);
        points.push(TimelinePoint {
            date: goal_created_at,
            value: pct,
            target_label: t.name.clone(),
        });
        initial_percentages.push(pct);
    }

    points.push(TimelinePoint {
        date: goal_created_at,
        value: aggregate_overall(&initial_percentages),
        target_label: OVERALL_LABEL.to_string(),
    });

    for event in events {
        let Some(target) = targets.iter().find(|t| t.id == event.target_id) else {
            // Stale event for a removed target: skip rather than fail the chart.
            continue;
        };

        points.push(TimelinePoint {
            date: event.timestamp,
            value: compute_progress(
                target.direction,
                target.start_value,
                target.target_value,
                event.value,
            ),
            target_label: target.name.clone(),
        });

        // Same-timestamp overall point: every other target contributes its
        // most recent value at or before this event.
        let percentages: Vec<f64> = targets
            .iter()
            .map(|t| {
                let value = if t.id == event.target_id {
                    event.value
                } else {
                    latest_value_at(t, event.timestamp, events)
                };
                compute_progress(t.direction, t.start_value, t.target_value, value)
            })
            .collect();

        points.push(TimelinePoint {
            date: event.timestamp,
            value: aggregate_overall(&percentages),
            target_label: OVERALL_LABEL.to_string(),
        });
    }

    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

/// The target's most recent tracked value at or before `at`, falling back
/// to its denormalized `current_value` when no event qualifies.
fn latest_value_at(target: &TargetSnapshot, at: DateTime<Utc>, events: &[TrackedValue]) -> f64 {
    events
        .iter()
        .filter(|e| e.target_id == target.id && e.timestamp <= at)
        .max_by_key(|e| e.timestamp)
        .map_or(target.current_value, |e| e.value)
}
