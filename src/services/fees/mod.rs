pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::errors::{CmisError, Result};
use crate::models::fees::requests::{CreateFeesRequest, UpdateFeesRequest};
use crate::storage::Storage;

pub struct FeeService {
    storage: Arc<dyn Storage>,
}

impl FeeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取费用记录列表
    pub async fn list_fees(&self) -> Result<HttpResponse> {
        list::list_fees(self).await
    }

    // 查询某学生的费用记录
    pub async fn get_fees_by_student(&self, student_id: i64) -> Result<HttpResponse> {
        get::get_fees_by_student(self, student_id).await
    }

    // 创建费用记录
    pub async fn create_fees(&self, request: CreateFeesRequest) -> Result<HttpResponse> {
        create::create_fees(self, request).await
    }

    // 更新某学生的费用记录（不存在则创建）
    pub async fn update_fees(
        &self,
        student_id: i64,
        request: UpdateFeesRequest,
    ) -> Result<HttpResponse> {
        update::update_fees(self, student_id, request).await
    }

    /// 学生存在性预检查：创建与按学生查询都要求学生当下存在
    pub(crate) async fn require_student(&self, student_id: i64) -> Result<()> {
        if self.storage.get_student_by_id(student_id).await?.is_none() {
            return Err(CmisError::not_found("Student not found."));
        }
        Ok(())
    }
}
