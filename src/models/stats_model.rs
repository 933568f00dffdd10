use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GrowthPoint {
    pub date: DateTime<Utc>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct OrgStats {
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
    pub deleted: usize,
    pub growth: Vec<GrowthPoint>,
}
