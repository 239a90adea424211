//! # Response Formatting
//!
//! Standard response types for REST API.

use serde::Serialize;

/// List response with pagination
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    /// Rows in the whole table, not just this page
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            data,
            total,
            limit,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![json!({"id": "2"}), json!({"id": "3"})], 4, 2, 1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 4);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["offset"], 1);
        assert_eq!(json["data"][0]["id"], "2");
    }
}
