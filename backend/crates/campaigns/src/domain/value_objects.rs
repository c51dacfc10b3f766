//! Domain Value Objects

use kernel::amount::Amount;
use rust_decimal::Decimal;

use crate::error::{CampaignError, CampaignResult};

/// Default page number
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size
pub const DEFAULT_LIMIT: i64 = 6;

/// Sentinel category meaning "no filter"
const CATEGORY_ALL: &str = "all";

// ============================================================================
// Listing filter
// ============================================================================

/// Normalized listing filter.
///
/// Blank search terms, the `all` category sentinel, and non-positive
/// page/limit values are normalized away at construction, so the
/// repository never sees an invalid filter.
#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl CampaignFilter {
    pub fn new(
        search: Option<String>,
        category: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != CATEGORY_ALL);

        Self {
            search,
            category,
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            limit: limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Row offset for the current page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Page count for a given total
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}

// ============================================================================
// Create / update inputs
// ============================================================================

/// Validated input for campaign creation
#[derive(Debug, Clone)]
pub struct CampaignDraft {
    pub title: String,
    pub description: Option<String>,
    pub goal_amount: Amount,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl CampaignDraft {
    pub fn new(
        title: String,
        description: Option<String>,
        goal_amount: Option<Decimal>,
        image_url: Option<String>,
        category: Option<String>,
    ) -> CampaignResult<Self> {
        let goal = goal_amount.ok_or_else(|| {
            CampaignError::Validation("Title and goal_amount are required.".to_string())
        })?;

        if title.trim().is_empty() {
            return Err(CampaignError::Validation(
                "Title and goal_amount are required.".to_string(),
            ));
        }

        let goal_amount = Amount::new(goal).map_err(|_| {
            CampaignError::Validation("Goal amount must be a positive number.".to_string())
        })?;

        Ok(Self {
            title: title.trim().to_string(),
            description,
            goal_amount,
            image_url,
            category,
        })
    }
}

/// Partial update: `None` means "leave unchanged", not "clear".
#[derive(Debug, Clone, Default)]
pub struct CampaignPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub goal_amount: Option<Amount>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl CampaignPatch {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        goal_amount: Option<Decimal>,
        image_url: Option<String>,
        category: Option<String>,
    ) -> CampaignResult<Self> {
        let goal_amount = goal_amount
            .map(|g| {
                Amount::new(g).map_err(|_| {
                    CampaignError::Validation(
                        "Goal amount must be a positive number.".to_string(),
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            title: title.filter(|t| !t.trim().is_empty()),
            description,
            goal_amount,
            image_url,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_filter_defaults() {
        let filter = CampaignFilter::new(None, None, None, None);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 6);
        assert!(filter.search.is_none());
        assert!(filter.category.is_none());
    }

    #[test]
    fn test_filter_invalid_paging_falls_back() {
        let filter = CampaignFilter::new(None, None, Some(0), Some(-3));
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 6);
    }

    #[test]
    fn test_filter_category_all_is_no_filter() {
        let filter = CampaignFilter::new(None, Some("all".to_string()), None, None);
        assert!(filter.category.is_none());

        let filter = CampaignFilter::new(None, Some("health".to_string()), None, None);
        assert_eq!(filter.category.as_deref(), Some("health"));
    }

    #[test]
    fn test_filter_blank_search_dropped() {
        let filter = CampaignFilter::new(Some("   ".to_string()), None, None, None);
        assert!(filter.search.is_none());

        let filter = CampaignFilter::new(Some("  water ".to_string()), None, None, None);
        assert_eq!(filter.search.as_deref(), Some("water"));
    }

    #[test]
    fn test_filter_offset_and_pages() {
        let filter = CampaignFilter::new(None, None, Some(3), Some(6));
        assert_eq!(filter.offset(), 12);
        assert_eq!(filter.total_pages(14), 3);
        assert_eq!(filter.total_pages(12), 2);
        assert_eq!(filter.total_pages(0), 0);
    }

    #[test]
    fn test_draft_requires_title_and_goal() {
        assert!(matches!(
            CampaignDraft::new("".to_string(), None, Some(Decimal::from(100)), None, None),
            Err(CampaignError::Validation(_))
        ));
        assert!(matches!(
            CampaignDraft::new("Clean Water".to_string(), None, None, None, None),
            Err(CampaignError::Validation(_))
        ));
    }

    #[test]
    fn test_draft_rejects_non_positive_goal() {
        let err = CampaignDraft::new(
            "Clean Water".to_string(),
            None,
            Some(Decimal::ZERO),
            None,
            None,
        )
        .unwrap_err();
        assert!(
            matches!(err, CampaignError::Validation(ref m) if m == "Goal amount must be a positive number.")
        );
    }

    #[test]
    fn test_patch_validates_goal_when_present() {
        assert!(CampaignPatch::new(None, None, None, None, None).is_ok());
        assert!(
            CampaignPatch::new(None, None, Some(Decimal::from(-1)), None, None).is_err()
        );

        let patch = CampaignPatch::new(
            Some("New title".to_string()),
            None,
            Some(Decimal::from_str("2000").unwrap()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.description.is_none());
    }
}
