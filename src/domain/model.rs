use crate::hours::{ParseError, WeeklySchedule};
use serde::{Deserialize, Serialize};

/// One restaurant as delivered by the data feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub restaurant_name: String,
    pub cash_balance: f64,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub menu: Vec<DishRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecord {
    pub dish_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: f64,
}

impl From<DishRecord> for Dish {
    fn from(record: DishRecord) -> Self {
        Self {
            name: record.dish_name,
            price: record.price,
        }
    }
}

/// A feed record after its opening hours went through the parser.
/// `schedule` is `None` only when an unparseable record was kept on purpose.
#[derive(Debug, Clone)]
pub struct ParsedRestaurant {
    pub record: RestaurantRecord,
    pub schedule: Option<WeeklySchedule>,
}

#[derive(Debug, Clone)]
pub struct RejectedHours {
    pub restaurant: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub restaurants: Vec<ParsedRestaurant>,
    pub rejected: Vec<RejectedHours>,
}

/// Row of the `schedules.json` snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSnapshot {
    pub id: usize,
    pub name: String,
    pub cash_balance: f64,
    pub dishes: usize,
    pub schedule: WeeklySchedule,
}
