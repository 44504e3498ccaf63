//! Tracking business logic - Progress submission and history retrieval.
//!
//! A tracking submission writes, for each updated target, one immutable
//! progress event plus the target's new denormalized `current_value`, and
//! refreshes the goal's overall progress snapshot - all inside a single
//! database transaction. Either the whole submission lands or none of it
//! does, so the event log and the denormalized values cannot drift apart.

use crate::{
    core::progress::{self, Direction, TargetSnapshot, TimelinePoint, TrackedValue},
    entities::{ProgressEvent, goal, progress_event, target},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// One target's share of a tracking submission.
#[derive(Debug, Clone)]
pub struct TargetUpdate {
    /// Stable id of the target being updated
    pub target_id: i64,
    /// The newly tracked value
    pub value: f64,
    /// Evidence photo URLs, may be empty
    pub photo_urls: Vec<String>,
    /// Optional reflection text for this update
    pub reflection: Option<String>,
}

/// Outcome of a tracking submission.
#[derive(Debug, Clone)]
pub struct TrackingResult {
    /// The events that were recorded, one per updated target
    pub events: Vec<progress_event::Model>,
    /// The goal's recomputed overall progress percentage
    pub overall_progress: f64,
}

/// Records a tracking submission for a goal.
///
/// Validates every update before writing anything: each target id must
/// belong to the goal and each value must be finite. Then, in one
/// transaction, inserts one event per update (all sharing a single
/// timestamp), sets each target's `current_value`, and stores the
/// recomputed overall progress (median across all targets) on the goal.
pub async fn record_progress(
    db: &DatabaseConnection,
    goal_id: i64,
    updates: Vec<TargetUpdate>,
) -> Result<TrackingResult> {
    if updates.is_empty() {
        return Err(Error::Config {
            message: "A tracking submission needs at least one target update".to_string(),
        });
    }

    let goal = crate::core::goal::get_goal_by_id(db, goal_id)
        .await?
        .ok_or(Error::GoalNotFound { id: goal_id })?;

    let mut targets = crate::core::goal::get_targets_for_goal(db, goal_id).await?;

    for update in &updates {
        if !update.value.is_finite() {
            return Err(Error::InvalidValue {
                value: update.value,
            });
        }
        if !targets.iter().any(|t| t.id == update.target_id) {
            return Err(Error::TargetNotFound {
                id: update.target_id,
            });
        }
    }

    let txn = db.begin().await?;
    let now = chrono::Utc::now();
    let mut events = Vec::with_capacity(updates.len());

    for update in &updates {
        let photo_urls = encode_photo_urls(&update.photo_urls)?;
        let event = progress_event::ActiveModel {
            goal_id: Set(goal_id),
            target_id: Set(update.target_id),
            value: Set(update.value),
            photo_urls: Set(photo_urls),
            reflection: Set(update.reflection.clone()),
            timestamp: Set(now),
            ..Default::default()
        };
        events.push(event.insert(&txn).await?);

        // Validated above, so the position lookup cannot fail
        if let Some(t) = targets.iter_mut().find(|t| t.id == update.target_id) {
            t.current_value = update.value;
            let mut active_model: target::ActiveModel = t.clone().into();
            active_model.current_value = Set(update.value);
            active_model.update(&txn).await?;
        }
    }

    let overall_progress = overall_from_targets(&targets)?;
    let mut goal_model: goal::ActiveModel = goal.into();
    goal_model.progress = Set(overall_progress);
    goal_model.update(&txn).await?;

    txn.commit().await?;

    Ok(TrackingResult {
        events,
        overall_progress,
    })
}

/// Retrieves all progress events for a goal in chronological order.
pub async fn get_events_for_goal(
    db: &DatabaseConnection,
    goal_id: i64,
) -> Result<Vec<progress_event::Model>> {
    ProgressEvent::find()
        .filter(progress_event::Column::GoalId.eq(goal_id))
        .order_by_asc(progress_event::Column::Timestamp)
        // Events from one submission share a timestamp; id breaks the tie
        .order_by_asc(progress_event::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads a goal's targets and history and reconstructs the chartable
/// timeline via [`progress::build_timeline`].
pub async fn goal_timeline(db: &DatabaseConnection, goal_id: i64) -> Result<Vec<TimelinePoint>> {
    let goal = crate::core::goal::get_goal_by_id(db, goal_id)
        .await?
        .ok_or(Error::GoalNotFound { id: goal_id })?;

    let targets = crate::core::goal::get_targets_for_goal(db, goal_id).await?;
    let snapshots = targets
        .iter()
        .map(snapshot_from_target)
        .collect::<Result<Vec<_>>>()?;

    let events: Vec<TrackedValue> = get_events_for_goal(db, goal_id)
        .await?
        .into_iter()
        .map(|e| TrackedValue {
            target_id: e.target_id,
            value: e.value,
            timestamp: e.timestamp,
        })
        .collect();

    Ok(progress::build_timeline(
        goal.created_at,
        &snapshots,
        &events,
    ))
}

/// Decodes the JSON photo-URL column of an event. A missing column means
/// no photos were attached.
pub fn decode_photo_urls(event: &progress_event::Model) -> Result<Vec<String>> {
    match &event.photo_urls {
        Some(json) => serde_json::from_str(json).map_err(Into::into),
        None => Ok(Vec::new()),
    }
}

fn encode_photo_urls(urls: &[String]) -> Result<Option<String>> {
    if urls.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(urls)?))
    }
}

fn snapshot_from_target(t: &target::Model) -> Result<TargetSnapshot> {
    let direction = Direction::parse(&t.direction).ok_or_else(|| Error::Config {
        message: format!("Target {} has unknown direction '{}'", t.id, t.direction),
    })?;

    Ok(TargetSnapshot {
        id: t.id,
        name: t.name.clone(),
        direction,
        start_value: t.start_value,
        target_value: t.target_value,
        current_value: t.current_value,
    })
}

fn overall_from_targets(targets: &[target::Model]) -> Result<f64> {
    let percentages = targets
        .iter()
        .map(|t| {
            snapshot_from_target(t).map(|s| {
                progress::compute_progress(
                    s.direction,
                    s.start_value,
                    s.target_value,
                    s.current_value,
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(progress::aggregate_overall(&percentages))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::progress::OVERALL_LABEL;
    use crate::test_utils::*;

    fn update(target_id: i64, value: f64) -> TargetUpdate {
        TargetUpdate {
            target_id,
            value,
            photo_urls: vec![],
            reflection: None,
        }
    }

    #[tokio::test]
    async fn test_record_progress_empty_submission_rejected() -> Result<()> {
        let (db, _journal, goal, _targets) = setup_with_goal().await?;

        let result = record_progress(&db, goal.id, vec![]).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_progress_goal_not_found() -> Result<()> {
        // Configure MockDatabase to return no goal (simulating not found)
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Sqlite)
            .append_query_results([Vec::<crate::entities::goal::Model>::new()])
            .into_connection();

        let result = record_progress(&db, 999, vec![update(1, 5.0)]).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::GoalNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_progress_updates_targets_and_snapshot() -> Result<()> {
        // Both test targets are max-direction, start 0, target 10
        let (db, _journal, goal, targets) = setup_with_goal().await?;

        let result = record_progress(
            &db,
            goal.id,
            vec![update(targets[0].id, 7.0), update(targets[1].id, 3.0)],
        )
        .await?;

        assert_eq!(result.events.len(), 2);
        // One submission = one shared timestamp across its events
        assert_eq!(result.events[0].timestamp, result.events[1].timestamp);
        // median(70, 30) = 50
        assert_eq!(result.overall_progress, 50.0);

        let reloaded = crate::core::goal::get_goal_by_id(&db, goal.id)
            .await?
            .unwrap();
        assert_eq!(reloaded.progress, 50.0);

        let reloaded_targets = crate::core::goal::get_targets_for_goal(&db, goal.id).await?;
        assert_eq!(reloaded_targets[0].current_value, 7.0);
        assert_eq!(reloaded_targets[1].current_value, 3.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_progress_unknown_target_writes_nothing() -> Result<()> {
        let (db, _journal, goal, targets) = setup_with_goal().await?;

        let result = record_progress(
            &db,
            goal.id,
            vec![update(targets[0].id, 7.0), update(999, 3.0)],
        )
        .await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::TargetNotFound { id: 999 }
        ));

        // The valid half of the submission must not have landed either
        let events = get_events_for_goal(&db, goal.id).await?;
        assert!(events.is_empty());
        let reloaded = crate::core::goal::get_targets_for_goal(&db, goal.id).await?;
        assert_eq!(reloaded[0].current_value, reloaded[0].start_value);

        Ok(())
    }

    #[tokio::test]
    async fn test_record_progress_rejects_non_finite_value() -> Result<()> {
        let (db, _journal, goal, targets) = setup_with_goal().await?;

        let result = record_progress(&db, goal.id, vec![update(targets[0].id, f64::NAN)]).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidValue { value: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_record_progress_photo_urls_roundtrip() -> Result<()> {
        let (db, _journal, goal, targets) = setup_with_goal().await?;

        let result = record_progress(
            &db,
            goal.id,
            vec![TargetUpdate {
                target_id: targets[0].id,
                value: 5.0,
                photo_urls: vec![
                    "https://photos.example/1.jpg".to_string(),
                    "https://photos.example/2.jpg".to_string(),
                ],
                reflection: Some("felt strong today".to_string()),
            }],
        )
        .await?;

        let event = &result.events[0];
        assert_eq!(event.reflection.as_deref(), Some("felt strong today"));

        let urls = decode_photo_urls(event)?;
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://photos.example/1.jpg");

        // No photos -> column stays NULL
        let result = record_progress(&db, goal.id, vec![update(targets[0].id, 6.0)]).await?;
        assert_eq!(result.events[0].photo_urls, None);
        assert!(decode_photo_urls(&result.events[0])?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_events_for_goal_chronological() -> Result<()> {
        let (db, _journal, goal, targets) = setup_with_goal().await?;

        record_progress(&db, goal.id, vec![update(targets[0].id, 2.0)]).await?;
        record_progress(&db, goal.id, vec![update(targets[0].id, 5.0)]).await?;
        record_progress(&db, goal.id, vec![update(targets[0].id, 8.0)]).await?;

        let events = get_events_for_goal(&db, goal.id).await?;
        assert_eq!(events.len(), 3);
        for pair in events.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_goal_timeline_integration() -> Result<()> {
        let (db, _journal, goal, targets) = setup_with_goal().await?;

        record_progress(
            &db,
            goal.id,
            vec![update(targets[0].id, 7.0), update(targets[1].id, 3.0)],
        )
        .await?;

        let timeline = goal_timeline(&db, goal.id).await?;

        // Initial: 2 targets + 1 Overall. Submission: 2 events + 2 Overall.
        assert_eq!(timeline.len(), 7);
        for pair in timeline.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }

        let overall: Vec<_> = timeline
            .iter()
            .filter(|p| p.target_label == OVERALL_LABEL)
            .collect();
        assert_eq!(overall.len(), 3);
        // Last overall point reflects both updates: median(70, 30) = 50
        assert_eq!(overall.last().unwrap().value, 50.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_goal_timeline_goal_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = goal_timeline(&db, 999).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::GoalNotFound { id: 999 }
        ));

        Ok(())
    }
}
