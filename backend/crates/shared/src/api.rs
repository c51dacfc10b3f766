//! Response Envelope
//!
//! Every endpoint answers with the same JSON shape: a boolean `success`
//! flag, an optional human-readable `message`, a `data` payload, and the
//! pagination trio (`total`, `totalPages`, `currentPage`) on list
//! endpoints. The failure half of the envelope is rendered by the
//! `AppError` response conversion.

use serde::Serialize;

/// Success-side response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(rename = "totalPages", skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(rename = "currentPage", skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Plain success with a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            total: None,
            total_pages: None,
            current_page: None,
        }
    }

    /// Success with a payload and a message
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Paginated success (list endpoints)
    pub fn paginated(
        message: impl Into<String>,
        data: T,
        total: i64,
        total_pages: i64,
        current_page: i64,
    ) -> Self {
        Self {
            message: Some(message.into()),
            total: Some(total),
            total_pages: Some(total_pages),
            current_page: Some(current_page),
            ..Self::ok(data)
        }
    }
}

impl ApiResponse<()> {
    /// Success with a message and no payload
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            total: None,
            total_pages: None,
            current_page: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let body = serde_json::to_value(ApiResponse::ok(serde_json::json!({"id": 1}))).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert!(body.get("message").is_none());
        assert!(body.get("totalPages").is_none());
    }

    #[test]
    fn test_paginated_envelope() {
        let body = serde_json::to_value(ApiResponse::paginated(
            "Campaigns retrieved successfully.",
            vec![1, 2, 3],
            14,
            3,
            1,
        ))
        .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 14);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["currentPage"], 1);
    }

    #[test]
    fn test_message_only_envelope() {
        let body =
            serde_json::to_value(ApiResponse::message_only("Campaign deleted successfully."))
                .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Campaign deleted successfully.");
        assert!(body.get("data").is_none());
    }
}
