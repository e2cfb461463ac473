use serde::{Deserialize, Serialize};

// 缴费状态，由 fees_pending 派生，不落库
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeeStatus {
    Paid,
    Pending,
}

impl FeeStatus {
    pub fn from_pending(fees_pending: f64) -> Self {
        if fees_pending > 0.0 {
            FeeStatus::Pending
        } else {
            FeeStatus::Paid
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeStatus::Paid => write!(f, "Paid"),
            FeeStatus::Pending => write!(f, "Pending"),
        }
    }
}

// 费用记录实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    pub id: i64,
    pub student_id: i64,
    pub fees_paid: f64,
    pub fees_pending: f64,
    pub total_fees: f64,
    pub status: FeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
