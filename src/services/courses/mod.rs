pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取课程列表
    pub async fn list_courses(&self) -> Result<HttpResponse> {
        list::list_courses(self).await
    }

    // 根据 ID 获取课程信息
    pub async fn get_course(&self, id: i64) -> Result<HttpResponse> {
        get::get_course(self, id).await
    }

    // 添加课程
    pub async fn create_course(&self, request: CreateCourseRequest) -> Result<HttpResponse> {
        create::create_course(self, request).await
    }

    // 更新课程信息
    pub async fn update_course(
        &self,
        id: i64,
        request: UpdateCourseRequest,
    ) -> Result<HttpResponse> {
        update::update_course(self, id, request).await
    }

    // 删除课程
    pub async fn delete_course(&self, id: i64) -> Result<HttpResponse> {
        delete::delete_course(self, id).await
    }
}
