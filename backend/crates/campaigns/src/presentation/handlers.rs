//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::api::ApiResponse;
use kernel::id::CampaignId;
use std::sync::Arc;

use crate::application::{
    CreateCampaignUseCase, DeleteCampaignUseCase, GetCampaignUseCase, ListCampaignsUseCase,
    ListCategoriesUseCase, UpdateCampaignUseCase,
};
use crate::domain::repository::CampaignRepository;
use crate::domain::value_objects::{CampaignDraft, CampaignFilter, CampaignPatch};
use crate::error::{CampaignError, CampaignResult};
use crate::presentation::dto::{
    CampaignDto, CreateCampaignRequest, ListQuery, UpdateCampaignRequest,
};

/// Shared state for campaign handlers
#[derive(Clone)]
pub struct CampaignAppState<R>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Parse a path id, rejecting non-numeric values before any storage call
fn parse_campaign_id(raw: &str) -> CampaignResult<CampaignId> {
    raw.parse().map_err(|_| CampaignError::InvalidId)
}

// ============================================================================
// Public endpoints
// ============================================================================

/// GET /campaigns
pub async fn list<R>(
    State(state): State<CampaignAppState<R>>,
    Query(query): Query<ListQuery>,
) -> CampaignResult<impl IntoResponse>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let filter = CampaignFilter::new(
        query.search.clone(),
        query.category.clone(),
        query.page_as_i64(),
        query.limit_as_i64(),
    );

    let page = ListCampaignsUseCase::new(state.repo.clone())
        .execute(filter)
        .await?;

    let campaigns: Vec<CampaignDto> = page.campaigns.into_iter().map(CampaignDto::from).collect();

    Ok(Json(ApiResponse::paginated(
        "Campaigns retrieved successfully.",
        campaigns,
        page.total,
        page.total_pages,
        page.current_page,
    )))
}

/// GET /campaigns/categories
pub async fn categories<R>(
    State(state): State<CampaignAppState<R>>,
) -> CampaignResult<impl IntoResponse>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let categories = ListCategoriesUseCase::new(state.repo.clone())
        .execute()
        .await?;

    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /campaigns/{id}
pub async fn get_by_id<R>(
    State(state): State<CampaignAppState<R>>,
    Path(id): Path<String>,
) -> CampaignResult<impl IntoResponse>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let id = parse_campaign_id(&id)?;

    let campaign = GetCampaignUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(Json(ApiResponse::ok_with_message(
        "Campaign retrieved successfully.",
        CampaignDto::from(campaign),
    )))
}

// ============================================================================
// Admin endpoints
// ============================================================================

/// POST /campaigns (admin)
pub async fn create<R>(
    State(state): State<CampaignAppState<R>>,
    Json(req): Json<CreateCampaignRequest>,
) -> CampaignResult<impl IntoResponse>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let draft = CampaignDraft::new(
        req.title,
        req.description,
        req.goal_amount,
        req.image_url,
        req.category,
    )?;

    let campaign = CreateCampaignUseCase::new(state.repo.clone())
        .execute(draft)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "Campaign created successfully.",
            CampaignDto::from(campaign),
        )),
    ))
}

/// PUT /campaigns/{id} (admin)
pub async fn update<R>(
    State(state): State<CampaignAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCampaignRequest>,
) -> CampaignResult<impl IntoResponse>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let id = parse_campaign_id(&id)?;

    let patch = CampaignPatch::new(
        req.title,
        req.description,
        req.goal_amount,
        req.image_url,
        req.category,
    )?;

    let campaign = UpdateCampaignUseCase::new(state.repo.clone())
        .execute(id, patch)
        .await?;

    Ok(Json(ApiResponse::ok_with_message(
        "Campaign updated successfully.",
        CampaignDto::from(campaign),
    )))
}

/// DELETE /campaigns/{id} (admin)
pub async fn delete_campaign<R>(
    State(state): State<CampaignAppState<R>>,
    Path(id): Path<String>,
) -> CampaignResult<impl IntoResponse>
where
    R: CampaignRepository + Clone + Send + Sync + 'static,
{
    let id = parse_campaign_id(&id)?;

    DeleteCampaignUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(Json(ApiResponse::message_only(
        "Campaign deleted successfully.",
    )))
}
