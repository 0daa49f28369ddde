use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::ProjectId;

pub const DEFAULT_PHASE: &str = "Ideation";
pub const DEFAULT_STATUS: &str = "building";
pub const DEFAULT_MRR: &str = "€0";
pub const DEFAULT_METRIC1_LABEL: &str = "users";
pub const DEFAULT_METRIC2_LABEL: &str = "visits/mo";

/// A project on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub favicon: Option<String>,
    pub phase: String,
    pub status: String,
    pub tags: Vec<String>,
    pub needs: Vec<String>,
    pub is_todays_launch: bool,
    pub launched_date: Option<String>,
    pub audience: Option<String>,
    pub model: Option<String>,
    pub mrr: Option<String>,
    pub metric1_value: Option<String>,
    pub metric1_label: Option<String>,
    pub metric2_value: Option<String>,
    pub metric2_label: Option<String>,
    pub blocker: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Creation / update parameter structs
// =============================================================================

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[builder(default)]
    pub url: Option<String>,
    #[builder(default)]
    pub image_url: Option<String>,
    #[builder(default)]
    pub favicon: Option<String>,
    #[builder(default = DEFAULT_PHASE.to_string())]
    pub phase: String,
    #[builder(default = DEFAULT_STATUS.to_string())]
    pub status: String,
    #[builder(default)]
    pub tags: Vec<String>,
    #[builder(default)]
    pub needs: Vec<String>,
    #[builder(default = false)]
    pub is_todays_launch: bool,
    #[builder(default)]
    pub launched_date: Option<String>,
    #[builder(default)]
    pub audience: Option<String>,
    #[builder(default)]
    pub model: Option<String>,
    #[builder(default = Some(DEFAULT_MRR.to_string()))]
    pub mrr: Option<String>,
    #[builder(default)]
    pub metric1_value: Option<String>,
    #[builder(default = Some(DEFAULT_METRIC1_LABEL.to_string()))]
    pub metric1_label: Option<String>,
    #[builder(default)]
    pub metric2_value: Option<String>,
    #[builder(default = Some(DEFAULT_METRIC2_LABEL.to_string()))]
    pub metric2_label: Option<String>,
    #[builder(default)]
    pub blocker: Option<String>,
    #[builder(default)]
    pub owner_name: Option<String>,
}

impl NewProject {
    /// Materialize the record a store would persist.
    pub fn into_project(self, id: ProjectId, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            image_url: self.image_url,
            favicon: self.favicon,
            phase: self.phase,
            status: self.status,
            tags: self.tags,
            needs: self.needs,
            is_todays_launch: self.is_todays_launch,
            launched_date: self.launched_date,
            audience: self.audience,
            model: self.model,
            mrr: self.mrr,
            metric1_value: self.metric1_value,
            metric1_label: self.metric1_label,
            metric2_value: self.metric2_value,
            metric2_label: self.metric2_label,
            blocker: self.blocker,
            owner_name: self.owner_name,
            created_at,
        }
    }
}

/// Partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub phase: Option<String>,
    pub status: Option<String>,
    pub is_todays_launch: Option<bool>,
    pub launched_date: Option<String>,
    pub audience: Option<String>,
    pub model: Option<String>,
    pub mrr: Option<String>,
    pub metric1_value: Option<String>,
    pub metric1_label: Option<String>,
    pub metric2_value: Option<String>,
    pub metric2_label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub needs: Option<Vec<String>>,
    pub blocker: Option<String>,
    pub owner_name: Option<String>,
}

impl ProjectUpdate {
    pub fn apply(self, project: &mut Project) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        fn set_opt<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut project.title, self.title);
        set(&mut project.description, self.description);
        set_opt(&mut project.url, self.url);
        set(&mut project.phase, self.phase);
        set(&mut project.status, self.status);
        set(&mut project.is_todays_launch, self.is_todays_launch);
        set_opt(&mut project.launched_date, self.launched_date);
        set_opt(&mut project.audience, self.audience);
        set_opt(&mut project.model, self.model);
        set_opt(&mut project.mrr, self.mrr);
        set_opt(&mut project.metric1_value, self.metric1_value);
        set_opt(&mut project.metric1_label, self.metric1_label);
        set_opt(&mut project.metric2_value, self.metric2_value);
        set_opt(&mut project.metric2_label, self.metric2_label);
        set(&mut project.tags, self.tags);
        set(&mut project.needs, self.needs);
        set_opt(&mut project.blocker, self.blocker);
        set_opt(&mut project.owner_name, self.owner_name);
    }
}

impl Project {
    pub async fn create(id: ProjectId, new: NewProject, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO projects (
                id, title, description, url, image_url, favicon, phase, status,
                tags, needs, is_todays_launch, launched_date, audience, model, mrr,
                metric1_value, metric1_label, metric2_value, metric2_label,
                blocker, owner_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    $16, $17, $18, $19, $20, $21)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new.title)
        .bind(new.description)
        .bind(new.url)
        .bind(new.image_url)
        .bind(new.favicon)
        .bind(new.phase)
        .bind(new.status)
        .bind(new.tags)
        .bind(new.needs)
        .bind(new.is_todays_launch)
        .bind(new.launched_date)
        .bind(new.audience)
        .bind(new.model)
        .bind(new.mrr)
        .bind(new.metric1_value)
        .bind(new.metric1_label)
        .bind(new.metric2_value)
        .bind(new.metric2_label)
        .bind(new.blocker)
        .bind(new.owner_name)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: ProjectId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Newest first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM projects ORDER BY created_at DESC, id DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Returns `None` when no row has this id.
    pub async fn update(id: ProjectId, update: ProjectUpdate, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                url = COALESCE($4, url),
                phase = COALESCE($5, phase),
                status = COALESCE($6, status),
                is_todays_launch = COALESCE($7, is_todays_launch),
                launched_date = COALESCE($8, launched_date),
                audience = COALESCE($9, audience),
                model = COALESCE($10, model),
                mrr = COALESCE($11, mrr),
                metric1_value = COALESCE($12, metric1_value),
                metric1_label = COALESCE($13, metric1_label),
                metric2_value = COALESCE($14, metric2_value),
                metric2_label = COALESCE($15, metric2_label),
                tags = COALESCE($16, tags),
                needs = COALESCE($17, needs),
                blocker = COALESCE($18, blocker),
                owner_name = COALESCE($19, owner_name)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.url)
        .bind(update.phase)
        .bind(update.status)
        .bind(update.is_todays_launch)
        .bind(update.launched_date)
        .bind(update.audience)
        .bind(update.model)
        .bind(update.mrr)
        .bind(update.metric1_value)
        .bind(update.metric1_label)
        .bind(update.metric2_value)
        .bind(update.metric2_label)
        .bind(update.tags)
        .bind(update.needs)
        .bind(update.blocker)
        .bind(update.owner_name)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Returns `false` when no row has this id.
    pub async fn delete(id: ProjectId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let new = NewProject::builder()
            .title("Side project")
            .description("Does a thing")
            .build();

        assert_eq!(new.phase, DEFAULT_PHASE);
        assert_eq!(new.status, DEFAULT_STATUS);
        assert_eq!(new.mrr.as_deref(), Some(DEFAULT_MRR));
        assert_eq!(new.metric1_label.as_deref(), Some("users"));
        assert_eq!(new.metric2_label.as_deref(), Some("visits/mo"));
        assert!(!new.is_todays_launch);
        assert!(new.tags.is_empty());
        assert!(new.needs.is_empty());
        assert!(new.url.is_none());
    }

    #[test]
    fn test_update_only_touches_provided_fields() {
        let mut project = NewProject::builder()
            .title("Before")
            .description("Unchanged")
            .url(Some("https://example.com".to_string()))
            .build()
            .into_project(ProjectId::new(), Utc::now());

        let update = ProjectUpdate {
            title: Some("After".into()),
            is_todays_launch: Some(true),
            tags: Some(vec!["AI".into()]),
            ..Default::default()
        };
        update.apply(&mut project);

        assert_eq!(project.title, "After");
        assert_eq!(project.description, "Unchanged");
        assert_eq!(project.url.as_deref(), Some("https://example.com"));
        assert!(project.is_todays_launch);
        assert_eq!(project.tags, vec!["AI".to_string()]);
        assert_eq!(project.status, DEFAULT_STATUS);
    }
}
