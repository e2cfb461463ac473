pub mod by_student;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::errors::{CmisError, Result};
use crate::models::marks::requests::{CreateMarksRequest, UpdateMarksRequest};
use crate::storage::Storage;

pub struct MarkService {
    storage: Arc<dyn Storage>,
}

impl MarkService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取全部成绩列表
    pub async fn list_marks(&self) -> Result<HttpResponse> {
        list::list_marks(self).await
    }

    // 获取某个学生的全部成绩
    pub async fn list_marks_by_student(&self, student_id: i64) -> Result<HttpResponse> {
        by_student::list_marks_by_student(self, student_id).await
    }

    // 添加成绩
    pub async fn create_marks(&self, request: CreateMarksRequest) -> Result<HttpResponse> {
        create::create_marks(self, request).await
    }

    // 更新成绩
    pub async fn update_marks(&self, id: i64, request: UpdateMarksRequest) -> Result<HttpResponse> {
        update::update_marks(self, id, request).await
    }

    // 删除成绩
    pub async fn delete_marks(&self, id: i64) -> Result<HttpResponse> {
        delete::delete_marks(self, id).await
    }

    /// 学生存在性预检查：创建与按学生查询都要求学生当下存在
    pub(crate) async fn require_student(&self, student_id: i64) -> Result<()> {
        if self
            .storage
            .get_student_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(CmisError::not_found("Student not found."));
        }
        Ok(())
    }
}
