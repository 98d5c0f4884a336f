use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A scheduled class session as returned by `GET /api/classes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassEvent {
    #[schema(example = "42")]
    pub id: String,
    pub title: String,
    pub instructor: String,
    #[schema(example = "6:00 AM")]
    pub start_time: String,
    #[schema(example = "7:00 AM")]
    pub end_time: String,
    pub capacity: i64,
    pub enrolled: i64,
    pub price: f64,
    pub schedule: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_fields() {
        let event = ClassEvent {
            id: "1".to_string(),
            title: "WOD".to_string(),
            instructor: "Jan Kowalski".to_string(),
            start_time: "6:00 AM".to_string(),
            end_time: "7:00 AM".to_string(),
            capacity: 12,
            enrolled: 3,
            price: 25.5,
            schedule: "Mon/Wed/Fri".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["startTime"], "6:00 AM");
        assert_eq!(value["endTime"], "7:00 AM");
        assert_eq!(value["price"], 25.5);
        assert!(value.get("start_time").is_none());
    }
}
