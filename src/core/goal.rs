//! Goal business logic - Handles goal and target operations.
//!
//! A goal is created together with its targets in one database transaction.
//! Targets carry stable generated ids, so renaming a target is safe: its
//! progress history keys on the id and is untouched. Deleting a goal does
//! NOT cascade to its event log; [`prune_events_for_goal`] is the explicit
//! cleanup operation for callers that want the history gone too.

use crate::{
    core::progress::Direction,
    entities::{Goal, ProgressEvent, Target, goal, progress_event, target},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Parameters for one target of a new goal.
#[derive(Debug, Clone)]
pub struct NewTarget {
    /// Display label, unique within the goal by convention (not enforced)
    pub name: String,
    /// Progress direction
    pub direction: Direction,
    /// Value at goal creation
    pub start_value: f64,
    /// Value the user is aiming for
    pub target_value: f64,
    /// Unit label for display
    pub unit: String,
    /// Unit classification for display
    pub unit_type: String,
    /// Measurement system for display
    pub unit_system: String,
}

/// Creates a goal with its targets in a single transaction.
///
/// Validates that the statement is non-empty, at least one target is given,
/// target names are non-empty, and all numeric values are finite. A
/// `min`-direction target whose start does not exceed its target value (or
/// the `max` equivalent) is accepted; the degenerate percentages it produces
/// are clamped downstream rather than rejected here.
pub async fn create_goal(
    db: &DatabaseConnection,
    journal_id: i64,
    user_id: String,
    statement: String,
    rationale: String,
    next_steps: String,
    targets: Vec<NewTarget>,
) -> Result<(goal::Model, Vec<target::Model>)> {
    if statement.trim().is_empty() {
        return Err(Error::Config {
            message: "Goal statement cannot be empty".to_string(),
        });
    }
    if targets.is_empty() {
        return Err(Error::Config {
            message: "A goal needs at least one target".to_string(),
        });
    }
    for t in &targets {
        if t.name.trim().is_empty() {
            return Err(Error::Config {
                message: "Target name cannot be empty".to_string(),
            });
        }
        for value in [t.start_value, t.target_value] {
            if !value.is_finite() {
                return Err(Error::InvalidValue { value });
            }
        }
    }

    crate::core::journal::get_journal_by_id(db, journal_id)
        .await?
        .ok_or(Error::JournalNotFound { id: journal_id })?;

    let txn = db.begin().await?;

    let goal = goal::ActiveModel {
        journal_id: Set(journal_id),
        user_id: Set(user_id),
        statement: Set(statement.trim().to_string()),
        rationale: Set(rationale),
        next_steps: Set(next_steps),
        progress: Set(0.0),
        created_at: Set(chrono::Utc::now()),
        is_deleted: Set(false),
        ..Default::default()
    };
    let goal = goal.insert(&txn).await?;

    let mut inserted_targets = Vec::with_capacity(targets.len());
    for t in targets {
        let model = target::ActiveModel {
            goal_id: Set(goal.id),
            name: Set(t.name.trim().to_string()),
            direction: Set(t.direction.as_str().to_string()),
            start_value: Set(t.start_value),
            target_value: Set(t.target_value),
            // Tracking starts from wherever the user starts
            current_value: Set(t.start_value),
            unit: Set(t.unit),
            unit_type: Set(t.unit_type),
            unit_system: Set(t.unit_system),
            ..Default::default()
        };
        inserted_targets.push(model.insert(&txn).await?);
    }

    txn.commit().await?;

    Ok((goal, inserted_targets))
}

/// Finds a goal by its unique ID, returning None if not found or deleted.
pub async fn get_goal_by_id(db: &DatabaseConnection, goal_id: i64) -> Result<Option<goal::Model>> {
    Goal::find_by_id(goal_id)
        .filter(goal::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all active goals for a journal, in creation order.
pub async fn get_goals_for_journal(
    db: &DatabaseConnection,
    journal_id: i64,
) -> Result<Vec<goal::Model>> {
    Goal::find()
        .filter(goal::Column::JournalId.eq(journal_id))
        .filter(goal::Column::IsDeleted.eq(false))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the targets of a goal, in insertion (id) order.
pub async fn get_targets_for_goal(
    db: &DatabaseConnection,
    goal_id: i64,
) -> Result<Vec<target::Model>> {
    Target::find()
        .filter(target::Column::GoalId.eq(goal_id))
        .order_by_asc(target::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Renames a target. History is keyed on the target id, so this cannot
/// orphan any recorded events.
pub async fn rename_target(
    db: &DatabaseConnection,
    target_id: i64,
    new_name: String,
) -> Result<target::Model> {
    if new_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Target name cannot be empty".to_string(),
        });
    }

    let target = Target::find_by_id(target_id)
        .one(db)
        .await?
        .ok_or(Error::TargetNotFound { id: target_id })?;

    let mut active_model: target::ActiveModel = target.into();
    active_model.name = Set(new_name.trim().to_string());
    let updated = active_model.update(db).await?;
    Ok(updated)
}

/// Soft-deletes a goal. Its targets and progress events stay in the
/// database; see [`prune_events_for_goal`].
pub async fn soft_delete_goal(db: &DatabaseConnection, goal_id: i64) -> Result<()> {
    let goal = get_goal_by_id(db, goal_id)
        .await?
        .ok_or(Error::GoalNotFound { id: goal_id })?;

    let mut active_model: goal::ActiveModel = goal.into();
    active_model.is_deleted = Set(true);
    active_model.update(db).await?;
    Ok(())
}

/// Hard-deletes all progress events recorded for a goal, returning how many
/// rows were removed. This is the explicit companion to
/// [`soft_delete_goal`]; nothing calls it automatically.
pub async fn prune_events_for_goal(db: &DatabaseConnection, goal_id: i64) -> Result<u64> {
    let result = ProgressEvent::delete_many()
        .filter(progress_event::Column::GoalId.eq(goal_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
