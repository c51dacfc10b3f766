//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::CampaignId;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entities::{Campaign, CampaignPage};
use crate::domain::repository::CampaignRepository;
use crate::domain::value_objects::{CampaignDraft, CampaignFilter, CampaignPatch};
use crate::error::{CampaignError, CampaignResult};

const CAMPAIGN_COLUMNS: &str =
    "id, title, description, goal_amount, raised_amount, image_url, category, created_at";

/// PostgreSQL-backed campaign repository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the filter's WHERE clause to a query builder.
///
/// Both the count query and the page query must see the identical
/// predicate, so the clause is built in one place.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &CampaignFilter) {
    let mut prefix = " WHERE ";

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        qb.push(prefix);
        qb.push("(title ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR description ILIKE ");
        qb.push_bind(pattern);
        qb.push(")");
        prefix = " AND ";
    }

    if let Some(category) = &filter.category {
        qb.push(prefix);
        qb.push("category = ");
        qb.push_bind(category.clone());
    }
}

impl CampaignRepository for PgCampaignRepository {
    async fn list(&self, filter: &CampaignFilter) -> CampaignResult<CampaignPage> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM campaigns");
        push_filters(&mut count_qb, filter);

        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut data_qb =
            QueryBuilder::new(format!("SELECT {} FROM campaigns", CAMPAIGN_COLUMNS));
        push_filters(&mut data_qb, filter);
        data_qb.push(" ORDER BY created_at DESC LIMIT ");
        data_qb.push_bind(filter.limit);
        data_qb.push(" OFFSET ");
        data_qb.push_bind(filter.offset());

        let rows: Vec<CampaignRow> = data_qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await?;

        Ok(CampaignPage {
            campaigns: rows.into_iter().map(CampaignRow::into_campaign).collect(),
            total,
            total_pages: filter.total_pages(total),
            current_page: filter.page,
        })
    }

    async fn find_by_id(&self, id: CampaignId) -> CampaignResult<Option<Campaign>> {
        let row = sqlx::query_as::<_, CampaignRow>(&format!(
            "SELECT {} FROM campaigns WHERE id = $1",
            CAMPAIGN_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CampaignRow::into_campaign))
    }

    async fn create(&self, draft: &CampaignDraft) -> CampaignResult<Campaign> {
        let row = sqlx::query_as::<_, CampaignRow>(&format!(
            r#"
            INSERT INTO campaigns (title, description, goal_amount, image_url, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            CAMPAIGN_COLUMNS
        ))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.goal_amount.as_decimal())
        .bind(&draft.image_url)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_campaign())
    }

    async fn update(
        &self,
        id: CampaignId,
        patch: &CampaignPatch,
    ) -> CampaignResult<Option<Campaign>> {
        // COALESCE keeps columns untouched for absent patch fields
        let row = sqlx::query_as::<_, CampaignRow>(&format!(
            r#"
            UPDATE campaigns SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                goal_amount = COALESCE($4, goal_amount),
                image_url = COALESCE($5, image_url),
                category = COALESCE($6, category)
            WHERE id = $1
            RETURNING {}
            "#,
            CAMPAIGN_COLUMNS
        ))
        .bind(id.as_i64())
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.goal_amount.map(|a| a.as_decimal()))
        .bind(&patch.image_url)
        .bind(&patch.category)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CampaignRow::into_campaign))
    }

    async fn delete(&self, id: CampaignId) -> CampaignResult<bool> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // Donations still reference this campaign
                sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => {
                    CampaignError::HasDonations
                }
                _ => CampaignError::Database(e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn categories(&self) -> CampaignResult<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT category
            FROM campaigns
            WHERE category IS NOT NULL AND category != ''
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}

// ============================================================================
// Row type
// ============================================================================

#[derive(sqlx::FromRow)]
struct CampaignRow {
    id: i64,
    title: String,
    description: Option<String>,
    goal_amount: Decimal,
    raised_amount: Decimal,
    image_url: Option<String>,
    category: Option<String>,
    created_at: DateTime<Utc>,
}

impl CampaignRow {
    fn into_campaign(self) -> Campaign {
        Campaign {
            id: CampaignId::new(self.id),
            title: self.title,
            description: self.description,
            goal_amount: self.goal_amount,
            raised_amount: self.raised_amount,
            image_url: self.image_url,
            category: self.category,
            created_at: self.created_at,
        }
    }
}
