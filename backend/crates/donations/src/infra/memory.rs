//! In-memory fakes for use-case tests
//!
//! [`InMemoryDonationLedger`] mirrors the PostgreSQL implementation's
//! semantics (session-id uniqueness, atomic complete-and-increment);
//! [`FakeCheckoutProvider`] stands in for the Stripe API.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use kernel::amount::Amount;
use kernel::id::{CampaignId, DonationId, UserId};
use rust_decimal::Decimal;

use crate::domain::entities::{AdminDonation, Donation, DonationWithCampaign, PlatformStats};
use crate::domain::provider::{
    CheckoutProvider, CheckoutSession, CheckoutSessionRequest, SessionMetadata,
};
use crate::domain::repository::DonationRepository;
use crate::domain::value_objects::PaymentStatus;
use crate::error::{DonationError, DonationResult};

// ============================================================================
// Donation ledger fake
// ============================================================================

pub struct InMemoryDonationLedger {
    donations: Mutex<Vec<Donation>>,
    raised: Mutex<HashMap<i64, Decimal>>,
    next_id: Mutex<i64>,
    /// When set, the next session insert behaves as if a concurrent
    /// verification committed first
    insert_conflict_once: AtomicBool,
}

impl InMemoryDonationLedger {
    pub fn new() -> Self {
        Self {
            donations: Mutex::new(Vec::new()),
            raised: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
            insert_conflict_once: AtomicBool::new(false),
        }
    }

    /// Campaign running total, zero when never incremented
    pub fn raised(&self, campaign_id: i64) -> Decimal {
        self.raised
            .lock()
            .unwrap()
            .get(&campaign_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn donation_count(&self) -> usize {
        self.donations.lock().unwrap().len()
    }

    /// Arm the simulated lost race for the next session insert
    pub fn set_insert_conflict_once(&self) {
        self.insert_conflict_once.store(true, Ordering::SeqCst);
    }

    fn insert(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Decimal,
        status: PaymentStatus,
        session_id: Option<&str>,
    ) -> Donation {
        let mut next_id = self.next_id.lock().unwrap();
        let donation = Donation {
            id: DonationId::new(*next_id),
            user_id,
            campaign_id,
            amount,
            payment_status: status,
            stripe_session_id: session_id.map(String::from),
            created_at: Utc::now(),
        };
        *next_id += 1;

        self.donations.lock().unwrap().push(donation.clone());
        donation
    }

    fn increment_raised(&self, campaign_id: CampaignId, amount: Decimal) {
        *self
            .raised
            .lock()
            .unwrap()
            .entry(campaign_id.as_i64())
            .or_insert(Decimal::ZERO) += amount;
    }
}

impl DonationRepository for InMemoryDonationLedger {
    async fn create_pending(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Amount,
    ) -> DonationResult<Donation> {
        Ok(self.insert(
            user_id,
            campaign_id,
            amount.as_decimal(),
            PaymentStatus::Pending,
            None,
        ))
    }

    async fn complete(
        &self,
        donation_id: DonationId,
        campaign_id: CampaignId,
        amount: Amount,
    ) -> DonationResult<Donation> {
        let mut donations = self.donations.lock().unwrap();
        let donation = donations
            .iter_mut()
            .find(|d| d.id == donation_id)
            .ok_or_else(|| DonationError::Internal("Donation not found".to_string()))?;

        donation.payment_status = PaymentStatus::Completed;
        let donation = donation.clone();
        drop(donations);

        self.increment_raised(campaign_id, amount.as_decimal());
        Ok(donation)
    }

    async fn create_completed_with_session(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Amount,
        session_id: &str,
    ) -> DonationResult<Donation> {
        if self.insert_conflict_once.swap(false, Ordering::SeqCst) {
            // A concurrent verification "won": record its donation and
            // surface the unique violation to this caller
            self.insert(
                user_id,
                campaign_id,
                amount.as_decimal(),
                PaymentStatus::Completed,
                Some(session_id),
            );
            self.increment_raised(campaign_id, amount.as_decimal());
            return Err(DonationError::SessionAlreadyRecorded);
        }

        let exists = self
            .donations
            .lock()
            .unwrap()
            .iter()
            .any(|d| d.stripe_session_id.as_deref() == Some(session_id));
        if exists {
            return Err(DonationError::SessionAlreadyRecorded);
        }

        let donation = self.insert(
            user_id,
            campaign_id,
            amount.as_decimal(),
            PaymentStatus::Completed,
            Some(session_id),
        );
        self.increment_raised(campaign_id, amount.as_decimal());

        Ok(donation)
    }

    async fn find_by_session_id(&self, session_id: &str) -> DonationResult<Option<Donation>> {
        Ok(self
            .donations
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.stripe_session_id.as_deref() == Some(session_id))
            .cloned())
    }

    async fn list_by_user(&self, user_id: UserId) -> DonationResult<Vec<DonationWithCampaign>> {
        let donations = self.donations.lock().unwrap();
        let mut mine: Vec<DonationWithCampaign> = donations
            .iter()
            .filter(|d| d.user_id == user_id)
            .map(|d| DonationWithCampaign {
                id: d.id,
                amount: d.amount,
                payment_status: d.payment_status,
                created_at: d.created_at,
                campaign_id: d.campaign_id,
                campaign_title: format!("Campaign {}", d.campaign_id),
            })
            .collect();
        // Ids are monotonic here, standing in for created_at DESC
        mine.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(mine)
    }

    async fn list_all_detailed(&self) -> DonationResult<Vec<AdminDonation>> {
        let donations = self.donations.lock().unwrap();
        let mut all: Vec<AdminDonation> = donations
            .iter()
            .map(|d| AdminDonation {
                id: d.id,
                amount: d.amount,
                payment_status: d.payment_status,
                created_at: d.created_at,
                user_id: d.user_id,
                donor_name: format!("User {}", d.user_id),
                donor_email: format!("user{}@example.com", d.user_id),
                campaign_id: d.campaign_id,
                campaign_title: format!("Campaign {}", d.campaign_id),
            })
            .collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }

    async fn platform_stats(&self) -> DonationResult<PlatformStats> {
        let donations = self.donations.lock().unwrap();

        let completed: Vec<&Donation> = donations
            .iter()
            .filter(|d| d.payment_status.is_completed())
            .collect();

        let total_raised = completed.iter().map(|d| d.amount).sum();

        let mut donor_ids: Vec<i64> = completed.iter().map(|d| d.user_id.as_i64()).collect();
        donor_ids.sort_unstable();
        donor_ids.dedup();

        // Campaign count stands in for the campaigns table here
        let mut campaign_ids: Vec<i64> = donations.iter().map(|d| d.campaign_id.as_i64()).collect();
        campaign_ids.sort_unstable();
        campaign_ids.dedup();

        Ok(PlatformStats {
            total_raised,
            total_donors: donor_ids.len() as i64,
            total_campaigns: campaign_ids.len() as i64,
            total_donations: donations.len() as i64,
        })
    }
}

// ============================================================================
// Campaign directory fake
// ============================================================================

/// Minimal stand-in for the campaign registry: knows which ids exist.
pub struct FakeCampaignDirectory {
    ids: Vec<i64>,
}

impl FakeCampaignDirectory {
    pub fn with_campaigns(ids: &[i64]) -> Self {
        Self { ids: ids.to_vec() }
    }

    fn dummy(&self, id: CampaignId) -> campaigns::domain::entities::Campaign {
        campaigns::domain::entities::Campaign {
            id,
            title: format!("Campaign {}", id),
            description: None,
            goal_amount: Decimal::from(1000),
            raised_amount: Decimal::ZERO,
            image_url: None,
            category: None,
            created_at: Utc::now(),
        }
    }
}

impl campaigns::domain::repository::CampaignRepository for FakeCampaignDirectory {
    async fn list(
        &self,
        filter: &campaigns::domain::value_objects::CampaignFilter,
    ) -> campaigns::error::CampaignResult<campaigns::domain::entities::CampaignPage> {
        Ok(campaigns::domain::entities::CampaignPage {
            campaigns: Vec::new(),
            total: 0,
            total_pages: 0,
            current_page: filter.page,
        })
    }

    async fn find_by_id(
        &self,
        id: CampaignId,
    ) -> campaigns::error::CampaignResult<Option<campaigns::domain::entities::Campaign>> {
        Ok(self.ids.contains(&id.as_i64()).then(|| self.dummy(id)))
    }

    async fn create(
        &self,
        _draft: &campaigns::domain::value_objects::CampaignDraft,
    ) -> campaigns::error::CampaignResult<campaigns::domain::entities::Campaign> {
        Err(campaigns::error::CampaignError::Internal(
            "Not supported by FakeCampaignDirectory".to_string(),
        ))
    }

    async fn update(
        &self,
        _id: CampaignId,
        _patch: &campaigns::domain::value_objects::CampaignPatch,
    ) -> campaigns::error::CampaignResult<Option<campaigns::domain::entities::Campaign>> {
        Err(campaigns::error::CampaignError::Internal(
            "Not supported by FakeCampaignDirectory".to_string(),
        ))
    }

    async fn delete(&self, _id: CampaignId) -> campaigns::error::CampaignResult<bool> {
        Err(campaigns::error::CampaignError::Internal(
            "Not supported by FakeCampaignDirectory".to_string(),
        ))
    }

    async fn categories(&self) -> campaigns::error::CampaignResult<Vec<String>> {
        Ok(Vec::new())
    }
}

// ============================================================================
// Checkout provider fake
// ============================================================================

/// Stand-in for the Stripe API with seedable sessions.
pub struct FakeCheckoutProvider {
    sessions: Mutex<HashMap<String, CheckoutSession>>,
    next_id: Mutex<u64>,
}

impl FakeCheckoutProvider {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    fn seed(&self, user_id: i64, campaign_id: i64, amount: &str, paid: bool) -> String {
        let mut next_id = self.next_id.lock().unwrap();
        let id = format!("cs_test_{}", *next_id);
        *next_id += 1;

        self.sessions.lock().unwrap().insert(
            id.clone(),
            CheckoutSession {
                id: id.clone(),
                url: Some(format!("https://checkout.stripe.test/pay/{}", id)),
                payment_status: if paid { "paid" } else { "unpaid" }.to_string(),
                metadata: SessionMetadata {
                    campaign_id: campaign_id.to_string(),
                    user_id: user_id.to_string(),
                    amount: amount.to_string(),
                },
            },
        );

        id
    }

    /// Seed a session the provider reports as paid
    pub fn seed_paid_session(&self, user_id: i64, campaign_id: i64, amount: &str) -> String {
        self.seed(user_id, campaign_id, amount, true)
    }

    /// Seed a session that was never paid
    pub fn seed_unpaid_session(&self, user_id: i64, campaign_id: i64, amount: &str) -> String {
        self.seed(user_id, campaign_id, amount, false)
    }

    /// Flip a created session to paid, as the hosted checkout would
    pub fn mark_paid(&self, session_id: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get_mut(session_id)
            .expect("session must exist to be paid");
        session.payment_status = "paid".to_string();
    }

    /// Test helper: inspect a stored session
    pub fn session(&self, session_id: &str) -> CheckoutSession {
        self.sessions
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .expect("session must exist")
    }
}

impl CheckoutProvider for FakeCheckoutProvider {
    async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> DonationResult<CheckoutSession> {
        let id = self.seed(
            request.user_id.as_i64(),
            request.campaign_id.as_i64(),
            &request.amount.to_string(),
            false,
        );
        Ok(self.session(&id))
    }

    async fn retrieve_session(&self, session_id: &str) -> DonationResult<CheckoutSession> {
        self.sessions
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .ok_or_else(|| {
                DonationError::PaymentSetup(format!("No such checkout session: {}", session_id))
            })
    }
}
