//! Journal business logic - Handles all journal-related operations.
//!
//! Provides functions for creating, retrieving, and soft-deleting journals,
//! plus the marketplace adoption flow that turns a curated template into a
//! user-owned journal. All functions are async and return Result types for
//! error handling.

use crate::{
    entities::{Journal, journal},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new journal for a user, performing input validation.
///
/// The title must be non-empty after trimming; the description may be empty.
pub async fn create_journal(
    db: &DatabaseConnection,
    user_id: String,
    title: String,
    description: String,
) -> Result<journal::Model> {
    if title.trim().is_empty() {
        return Err(Error::Config {
            message: "Journal title cannot be empty".to_string(),
        });
    }

    let journal = journal::ActiveModel {
        user_id: Set(user_id),
        title: Set(title.trim().to_string()),
        description: Set(description),
        created_at: Set(chrono::Utc::now()),
        is_deleted: Set(false),
        ..Default::default()
    };

    let result = journal.insert(db).await?;
    Ok(result)
}

/// Retrieves all active (non-deleted) journals for a user, newest first.
pub async fn get_journals_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<journal::Model>> {
    Journal::find()
        .filter(journal::Column::UserId.eq(user_id))
        .filter(journal::Column::IsDeleted.eq(false))
        .order_by_desc(journal::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a journal by its unique ID, returning None if not found or deleted.
pub async fn get_journal_by_id(
    db: &DatabaseConnection,
    journal_id: i64,
) -> Result<Option<journal::Model>> {
    Journal::find_by_id(journal_id)
        .filter(journal::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Soft-deletes a journal. Entries and goals under it are left in place;
/// callers that want them gone must delete them explicitly.
pub async fn soft_delete_journal(db: &DatabaseConnection, journal_id: i64) -> Result<()> {
    let journal = get_journal_by_id(db, journal_id)
        .await?
        .ok_or(Error::JournalNotFound { id: journal_id })?;

    let mut active_model: journal::ActiveModel = journal.into();
    active_model.is_deleted = Set(true);
    active_model.update(db).await?;
    Ok(())
}

/// Creates a journal for a user from a marketplace template.
///
/// The new journal takes its title and description from the template. The
/// template itself is untouched; adoption is a one-shot copy, not a link.
pub async fn adopt_template(
    db: &DatabaseConnection,
    user_id: String,
    template_id: i64,
) -> Result<journal::Model> {
    let template = crate::core::template::get_template_by_id(db, template_id)
        .await?
        .ok_or(Error::TemplateNotFound { id: template_id })?;

    create_journal(db, user_id, template.name, template.description).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_journal_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_journal(
            &db,
            "user1".to_string(),
            String::new(),
            "desc".to_string(),
        )
        .await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = create_journal(
            &db,
            "user1".to_string(),
            "   ".to_string(),
            "desc".to_string(),
        )
        .await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_journal_trims_title() -> Result<()> {
        let db = setup_test_db().await?;

        let journal = create_journal(
            &db,
            "user1".to_string(),
            "  Morning Pages  ".to_string(),
            "daily writing".to_string(),
        )
        .await?;

        assert_eq!(journal.title, "Morning Pages");
        assert_eq!(journal.user_id, "user1");
        assert!(!journal.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_journals_for_user_scoped() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_journal(&db, "user1", "Journal A").await?;
        create_test_journal(&db, "user1", "Journal B").await?;
        create_test_journal(&db, "user2", "Journal C").await?;

        let journals = get_journals_for_user(&db, "user1").await?;
        assert_eq!(journals.len(), 2);
        assert!(journals.iter().all(|j| j.user_id == "user1"));

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_journal_filters_lookups() -> Result<()> {
        let db = setup_test_db().await?;

        let journal = create_test_journal(&db, "user1", "To Delete").await?;
        soft_delete_journal(&db, journal.id).await?;

        let not_found = get_journal_by_id(&db, journal.id).await?;
        assert!(not_found.is_none());

        let journals = get_journals_for_user(&db, "user1").await?;
        assert!(journals.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_journal_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = soft_delete_journal(&db, 999).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::JournalNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_adopt_template_creates_journal() -> Result<()> {
        let db = setup_test_db().await?;

        let template = create_test_template(&db, "Gratitude Starter").await?;
        let journal = adopt_template(&db, "user1".to_string(), template.id).await?;

        assert_eq!(journal.title, "Gratitude Starter");
        assert_eq!(journal.description, template.description);
        assert_eq!(journal.user_id, "user1");

        Ok(())
    }

    #[tokio::test]
    async fn test_adopt_template_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = adopt_template(&db, "user1".to_string(), 42).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::TemplateNotFound { id: 42 }
        ));

        Ok(())
    }
}
