pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::requests::{
    CreateStudentRequest, StudentSearchParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取学生列表
    pub async fn list_students(&self) -> Result<HttpResponse> {
        list::list_students(self).await
    }

    // 按关键字搜索学生
    pub async fn search_students(&self, params: StudentSearchParams) -> Result<HttpResponse> {
        search::search_students(self, params).await
    }

    // 根据 ID 获取学生信息
    pub async fn get_student(&self, id: i64) -> Result<HttpResponse> {
        get::get_student(self, id).await
    }

    // 添加学生
    pub async fn create_student(&self, request: CreateStudentRequest) -> Result<HttpResponse> {
        create::create_student(self, request).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        id: i64,
        request: UpdateStudentRequest,
    ) -> Result<HttpResponse> {
        update::update_student(self, id, request).await
    }

    // 删除学生
    pub async fn delete_student(&self, id: i64) -> Result<HttpResponse> {
        delete::delete_student(self, id).await
    }
}
