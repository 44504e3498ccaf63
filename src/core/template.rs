//! Template business logic - Marketplace template curation.
//!
//! Templates are published by the admin surface and browsed by users in the
//! marketplace. Template content is a JSON array of prompt strings; it is
//! validated at publish time so the adoption flow never meets malformed
//! content.

use crate::{
    entities::{Template, template},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Publishes a new marketplace template.
///
/// The name must be non-empty and `content` must parse as a JSON array of
/// prompt strings.
pub async fn create_template(
    db: &DatabaseConnection,
    name: String,
    description: String,
    category: String,
    content: String,
) -> Result<template::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Template name cannot be empty".to_string(),
        });
    }

    // Reject malformed prompt lists at publish time
    serde_json::from_str::<Vec<String>>(&content).map_err(|e| Error::Config {
        message: format!("Template content must be a JSON array of prompts: {e}"),
    })?;

    let template = template::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        category: Set(category),
        content: Set(content),
        created_at: Set(chrono::Utc::now()),
        is_deleted: Set(false),
        ..Default::default()
    };

    let result = template.insert(db).await?;
    Ok(result)
}

/// Retrieves all published templates, ordered alphabetically by name.
pub async fn list_templates(db: &DatabaseConnection) -> Result<Vec<template::Model>> {
    Template::find()
        .filter(template::Column::IsDeleted.eq(false))
        .order_by_asc(template::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves published templates in one marketplace category.
pub async fn list_templates_in_category(
    db: &DatabaseConnection,
    category: &str,
) -> Result<Vec<template::Model>> {
    Template::find()
        .filter(template::Column::Category.eq(category))
        .filter(template::Column::IsDeleted.eq(false))
        .order_by_asc(template::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a template by its unique ID, returning None if not found or
/// withdrawn from the marketplace.
pub async fn get_template_by_id(
    db: &DatabaseConnection,
    template_id: i64,
) -> Result<Option<template::Model>> {
    Template::find_by_id(template_id)
        .filter(template::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Withdraws a template from the marketplace. Journals already adopted from
/// it are unaffected.
pub async fn soft_delete_template(db: &DatabaseConnection, template_id: i64) -> Result<()> {
    let template = get_template_by_id(db, template_id)
        .await?
        .ok_or(Error::TemplateNotFound { id: template_id })?;

    let mut active_model: template::ActiveModel = template.into();
    active_model.is_deleted = Set(true);
    active_model.update(db).await?;
    Ok(())
}

/// Decodes the prompt list of a template.
pub fn template_prompts(template: &template::Model) -> Result<Vec<String>> {
    serde_json::from_str(&template.content).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_template_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Empty name
        let result = create_template(
            &db,
            String::new(),
            String::new(),
            "gratitude".to_string(),
            "[]".to_string(),
        )
        .await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Malformed content
        let result = create_template(
            &db,
            "Broken".to_string(),
            String::new(),
            "gratitude".to_string(),
            "{not json".to_string(),
        )
        .await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Content that is JSON but not a string array
        let result = create_template(
            &db,
            "Wrong shape".to_string(),
            String::new(),
            "gratitude".to_string(),
            "{\"prompts\": []}".to_string(),
        )
        .await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_template_prompts_roundtrip() -> Result<()> {
        let db = setup_test_db().await?;

        let template = create_template(
            &db,
            "Evening Reflection".to_string(),
            "Wind down with three prompts".to_string(),
            "reflection".to_string(),
            r#"["What went well today?","What drained you?","What will you try tomorrow?"]"#
                .to_string(),
        )
        .await?;

        let prompts = template_prompts(&template)?;
        assert_eq!(prompts.len(), 3);
        assert_eq!(prompts[0], "What went well today?");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_templates_by_category() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_template_in_category(&db, "Gratitude Starter", "gratitude").await?;
        create_test_template_in_category(&db, "Couch to 5k", "fitness").await?;
        create_test_template_in_category(&db, "Three Good Things", "gratitude").await?;

        let all = list_templates(&db).await?;
        assert_eq!(all.len(), 3);

        let gratitude = list_templates_in_category(&db, "gratitude").await?;
        assert_eq!(gratitude.len(), 2);
        // Alphabetical order
        assert_eq!(gratitude[0].name, "Gratitude Starter");
        assert_eq!(gratitude[1].name, "Three Good Things");

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_template_withdraws_from_marketplace() -> Result<()> {
        let db = setup_test_db().await?;

        let template = create_test_template(&db, "Short-lived").await?;
        soft_delete_template(&db, template.id).await?;

        assert!(get_template_by_id(&db, template.id).await?.is_none());
        assert!(list_templates(&db).await?.is_empty());

        let result = soft_delete_template(&db, template.id).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::TemplateNotFound { id: _ }
        ));

        Ok(())
    }
}
