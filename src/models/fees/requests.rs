use serde::Deserialize;

// 费用创建请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeesRequest {
    pub student_id: Option<i64>,
    pub fees_paid: Option<f64>,
    pub fees_pending: Option<f64>,
    pub total_fees: Option<f64>,
}

// 费用更新请求（PUT /fees/{studentId}，upsert 语义），
// lastPaymentDate 由服务端盖章，不接受客户端值
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeesRequest {
    pub fees_paid: Option<f64>,
    pub fees_pending: Option<f64>,
    pub total_fees: Option<f64>,
}

// 校验后的新费用记录（用于存储层），金额缺省为 0
#[derive(Debug, Clone)]
pub struct NewFeeRecord {
    pub student_id: i64,
    pub fees_paid: f64,
    pub fees_pending: f64,
    pub total_fees: f64,
}
