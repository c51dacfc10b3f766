//! HTTP Handlers
//!
//! All routes here sit behind the auth gate; the verified [`Claim`] in
//! request extensions supplies the donor identity.

use auth::domain::value_object::claim::Claim;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use campaigns::domain::repository::CampaignRepository;
use kernel::api::ApiResponse;
use std::sync::Arc;

use crate::application::{
    AllDonationsUseCase, CheckoutInput, CreateCheckoutSessionUseCase, DonateInput,
    MyDonationsUseCase, PlatformStatsUseCase, ProcessDonationUseCase, VerifyDonationUseCase,
};
use crate::domain::provider::CheckoutProvider;
use crate::domain::repository::DonationRepository;
use crate::error::DonationResult;
use crate::presentation::dto::{
    AdminDonationDto, CheckoutRequest, CheckoutResponse, DonateRequest, DonationDto,
    DonationReceiptDto, MyDonationDto, StatsDto, VerifyRequest,
};

/// Shared state for donation, checkout, and admin handlers
#[derive(Clone)]
pub struct DonationAppState<D, C, P>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    pub donations: Arc<D>,
    pub campaigns: Arc<C>,
    pub provider: Arc<P>,
}

// ============================================================================
// Direct donation path
// ============================================================================

/// POST /donations
pub async fn process_donation<D, C, P>(
    State(state): State<DonationAppState<D, C, P>>,
    Extension(claim): Extension<Claim>,
    Json(req): Json<DonateRequest>,
) -> DonationResult<impl IntoResponse>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    let use_case = ProcessDonationUseCase::new(state.donations.clone(), state.campaigns.clone());

    let donation = use_case
        .execute(
            claim.id,
            DonateInput {
                campaign_id: req.campaign_id,
                amount: req.amount,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Donation processed successfully.",
            DonationReceiptDto::from(&donation),
        )),
    ))
}

/// GET /donations/my-donations
pub async fn my_donations<D, C, P>(
    State(state): State<DonationAppState<D, C, P>>,
    Extension(claim): Extension<Claim>,
) -> DonationResult<impl IntoResponse>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    let donations = MyDonationsUseCase::new(state.donations.clone())
        .execute(claim.id)
        .await?;

    let donations: Vec<MyDonationDto> = donations.into_iter().map(MyDonationDto::from).collect();

    Ok(Json(ApiResponse::ok_with_message(
        "Donations retrieved successfully.",
        donations,
    )))
}

// ============================================================================
// Checkout path
// ============================================================================

/// POST /stripe/create-checkout-session
pub async fn create_checkout_session<D, C, P>(
    State(state): State<DonationAppState<D, C, P>>,
    Extension(claim): Extension<Claim>,
    Json(req): Json<CheckoutRequest>,
) -> DonationResult<impl IntoResponse>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    let output = CreateCheckoutSessionUseCase::new(state.provider.clone())
        .execute(
            claim.id,
            CheckoutInput {
                amount: req.amount,
                campaign_id: req.campaign_id,
                campaign_title: req.campaign_title,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(CheckoutResponse {
        session_id: output.session_id,
        url: output.url,
    })))
}

/// POST /stripe/verify-donation
pub async fn verify_donation<D, C, P>(
    State(state): State<DonationAppState<D, C, P>>,
    Json(req): Json<VerifyRequest>,
) -> DonationResult<impl IntoResponse>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    let output = VerifyDonationUseCase::new(state.donations.clone(), state.provider.clone())
        .execute(req.session_id)
        .await?;

    let message = if output.already_recorded {
        "Donation already recorded"
    } else {
        "Donation verified and recorded successfully"
    };

    Ok(Json(ApiResponse::ok_with_message(
        message,
        DonationDto::from(&output.donation),
    )))
}

// ============================================================================
// Admin reporting
// ============================================================================

/// GET /admin/stats
pub async fn stats<D, C, P>(
    State(state): State<DonationAppState<D, C, P>>,
) -> DonationResult<impl IntoResponse>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    let stats = PlatformStatsUseCase::new(state.donations.clone())
        .execute()
        .await?;

    Ok(Json(ApiResponse::ok(StatsDto::from(stats))))
}

/// GET /admin/donations
pub async fn all_donations<D, C, P>(
    State(state): State<DonationAppState<D, C, P>>,
) -> DonationResult<impl IntoResponse>
where
    D: DonationRepository + Clone + Send + Sync + 'static,
    C: CampaignRepository + Clone + Send + Sync + 'static,
    P: CheckoutProvider + Clone + Send + Sync + 'static,
{
    let donations = AllDonationsUseCase::new(state.donations.clone())
        .execute()
        .await?;

    let donations: Vec<AdminDonationDto> =
        donations.into_iter().map(AdminDonationDto::from).collect();

    Ok(Json(ApiResponse::ok(donations)))
}
