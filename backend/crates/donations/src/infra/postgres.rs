//! PostgreSQL Repository Implementation
//!
//! The ledger owns the `raised_amount` increment on campaigns. The
//! increment is an additive update, safe against concurrent writers at
//! the storage layer, and always runs in the same transaction as the
//! donation write it belongs to.

use chrono::{DateTime, Utc};
use kernel::amount::Amount;
use kernel::id::{CampaignId, DonationId, UserId};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::domain::entities::{AdminDonation, Donation, DonationWithCampaign, PlatformStats};
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::PaymentStatus;
use crate::error::{DonationError, DonationResult};

const DONATION_COLUMNS: &str =
    "id, user_id, campaign_id, amount, payment_status, stripe_session_id, created_at";

/// PostgreSQL-backed donation ledger
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Set a donation's status, returning the updated row
async fn mark_status(
    conn: &mut PgConnection,
    donation_id: DonationId,
    status: PaymentStatus,
) -> Result<Option<DonationRow>, sqlx::Error> {
    sqlx::query_as::<_, DonationRow>(&format!(
        "UPDATE donations SET payment_status = $2 WHERE id = $1 RETURNING {}",
        DONATION_COLUMNS
    ))
    .bind(donation_id.as_i64())
    .bind(status.code())
    .fetch_optional(&mut *conn)
    .await
}

/// Add a completed donation's amount to its campaign's running total
async fn apply_raised_increment(
    conn: &mut PgConnection,
    campaign_id: CampaignId,
    amount: Decimal,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE campaigns SET raised_amount = raised_amount + $2 WHERE id = $1")
        .bind(campaign_id.as_i64())
        .bind(amount)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

impl DonationRepository for PgDonationRepository {
    async fn create_pending(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Amount,
    ) -> DonationResult<Donation> {
        let row = sqlx::query_as::<_, DonationRow>(&format!(
            r#"
            INSERT INTO donations (user_id, campaign_id, amount, payment_status)
            VALUES ($1, $2, $3, 'pending')
            RETURNING {}
            "#,
            DONATION_COLUMNS
        ))
        .bind(user_id.as_i64())
        .bind(campaign_id.as_i64())
        .bind(amount.as_decimal())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_donation())
    }

    async fn complete(
        &self,
        donation_id: DonationId,
        campaign_id: CampaignId,
        amount: Amount,
    ) -> DonationResult<Donation> {
        let mut tx = self.pool.begin().await?;

        let row = mark_status(&mut tx, donation_id, PaymentStatus::Completed)
            .await?
            .ok_or_else(|| {
                DonationError::Internal(format!("Donation {} vanished mid-completion", donation_id))
            })?;

        apply_raised_increment(&mut tx, campaign_id, amount.as_decimal()).await?;

        tx.commit().await?;

        Ok(row.into_donation())
    }

    async fn create_completed_with_session(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Amount,
        session_id: &str,
    ) -> DonationResult<Donation> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, DonationRow>(&format!(
            r#"
            INSERT INTO donations (user_id, campaign_id, amount, payment_status, stripe_session_id)
            VALUES ($1, $2, $3, 'completed', $4)
            RETURNING {}
            "#,
            DONATION_COLUMNS
        ))
        .bind(user_id.as_i64())
        .bind(campaign_id.as_i64())
        .bind(amount.as_decimal())
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            // Unique session id: a concurrent verification won the race
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                DonationError::SessionAlreadyRecorded
            }
            _ => DonationError::Database(e),
        })?;

        apply_raised_increment(&mut tx, campaign_id, amount.as_decimal()).await?;

        tx.commit().await?;

        Ok(row.into_donation())
    }

    async fn find_by_session_id(&self, session_id: &str) -> DonationResult<Option<Donation>> {
        let row = sqlx::query_as::<_, DonationRow>(&format!(
            "SELECT {} FROM donations WHERE stripe_session_id = $1",
            DONATION_COLUMNS
        ))
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DonationRow::into_donation))
    }

    async fn list_by_user(&self, user_id: UserId) -> DonationResult<Vec<DonationWithCampaign>> {
        let rows = sqlx::query_as::<_, DonationWithCampaignRow>(
            r#"
            SELECT d.id, d.amount, d.payment_status, d.created_at,
                   c.id AS campaign_id, c.title AS campaign_title
            FROM donations d
            JOIN campaigns c ON d.campaign_id = c.id
            WHERE d.user_id = $1
            ORDER BY d.created_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(DonationWithCampaignRow::into_entity)
            .collect())
    }

    async fn list_all_detailed(&self) -> DonationResult<Vec<AdminDonation>> {
        let rows = sqlx::query_as::<_, AdminDonationRow>(
            r#"
            SELECT d.id, d.amount, d.payment_status, d.created_at,
                   u.id AS user_id, u.name AS donor_name, u.email AS donor_email,
                   c.id AS campaign_id, c.title AS campaign_title
            FROM donations d
            JOIN users u ON d.user_id = u.id
            JOIN campaigns c ON d.campaign_id = c.id
            ORDER BY d.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminDonationRow::into_entity).collect())
    }

    async fn platform_stats(&self) -> DonationResult<PlatformStats> {
        let raised = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount), 0) FROM donations WHERE payment_status = 'completed'",
        )
        .fetch_one(&self.pool);

        let donors = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT user_id) FROM donations WHERE payment_status = 'completed'",
        )
        .fetch_one(&self.pool);

        let campaigns = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&self.pool);

        let donations = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM donations")
            .fetch_one(&self.pool);

        // Four independent snapshots; no cross-read consistency needed
        let (total_raised, total_donors, total_campaigns, total_donations) =
            tokio::try_join!(raised, donors, campaigns, donations)?;

        Ok(PlatformStats {
            total_raised,
            total_donors,
            total_campaigns,
            total_donations,
        })
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct DonationRow {
    id: i64,
    user_id: i64,
    campaign_id: i64,
    amount: Decimal,
    payment_status: String,
    stripe_session_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl DonationRow {
    fn into_donation(self) -> Donation {
        Donation {
            id: DonationId::new(self.id),
            user_id: UserId::new(self.user_id),
            campaign_id: CampaignId::new(self.campaign_id),
            amount: self.amount,
            payment_status: PaymentStatus::from_code(&self.payment_status),
            stripe_session_id: self.stripe_session_id,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DonationWithCampaignRow {
    id: i64,
    amount: Decimal,
    payment_status: String,
    created_at: DateTime<Utc>,
    campaign_id: i64,
    campaign_title: String,
}

impl DonationWithCampaignRow {
    fn into_entity(self) -> DonationWithCampaign {
        DonationWithCampaign {
            id: DonationId::new(self.id),
            amount: self.amount,
            payment_status: PaymentStatus::from_code(&self.payment_status),
            created_at: self.created_at,
            campaign_id: CampaignId::new(self.campaign_id),
            campaign_title: self.campaign_title,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AdminDonationRow {
    id: i64,
    amount: Decimal,
    payment_status: String,
    created_at: DateTime<Utc>,
    user_id: i64,
    donor_name: String,
    donor_email: String,
    campaign_id: i64,
    campaign_title: String,
}

impl AdminDonationRow {
    fn into_entity(self) -> AdminDonation {
        AdminDonation {
            id: DonationId::new(self.id),
            amount: self.amount,
            payment_status: PaymentStatus::from_code(&self.payment_status),
            created_at: self.created_at,
            user_id: UserId::new(self.user_id),
            donor_name: self.donor_name,
            donor_email: self.donor_email,
            campaign_id: CampaignId::new(self.campaign_id),
            campaign_title: self.campaign_title,
        }
    }
}
