use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    courses::{
        entities::Course,
        requests::{NewCourse, UpdateCourseRequest},
    },
    fees::{
        entities::FeeRecord,
        requests::{NewFeeRecord, UpdateFeesRequest},
    },
    marks::{
        entities::MarkRecord,
        requests::{NewMarkRecord, UpdateMarksRequest},
    },
    students::{
        entities::Student,
        requests::{NewStudent, UpdateStudentRequest},
    },
    users::entities::User,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 凭证存储方法
    // 创建用户（注册），邮箱已转小写、密码已哈希
    async fn create_user(&self, email: String, password_hash: String) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// 学生管理方法
    // 列出学生，最新创建的在前
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 子串搜索：姓名/邮箱/院系/课程，不区分大小写
    async fn search_students(&self, keyword: &str) -> Result<Vec<Student>>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生信息（唯一性预检查）
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 创建学生
    async fn create_student(&self, student: NewStudent) -> Result<Student>;
    // 更新学生信息，只更新提供的字段
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生（成绩与费用不级联，孤儿记录保留）
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 列出课程，最新创建的在前
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程代码获取课程信息（唯一性预检查）
    async fn get_course_by_code(&self, course_code: &str) -> Result<Option<Course>>;
    // 创建课程
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    // 更新课程信息，只更新提供的字段
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 列出全部成绩，最新创建的在前
    async fn list_marks(&self) -> Result<Vec<MarkRecord>>;
    // 列出某个学生的全部成绩
    async fn list_marks_by_student(&self, student_id: i64) -> Result<Vec<MarkRecord>>;
    // 添加成绩
    async fn create_marks(&self, record: NewMarkRecord) -> Result<MarkRecord>;
    // 更新成绩，只更新提供的字段
    async fn update_marks(&self, id: i64, update: UpdateMarksRequest)
    -> Result<Option<MarkRecord>>;
    // 删除成绩
    async fn delete_marks(&self, id: i64) -> Result<bool>;

    /// 费用管理方法
    // 列出全部费用记录，最新创建的在前
    async fn list_fees(&self) -> Result<Vec<FeeRecord>>;
    // 获取某个学生的费用记录（每个学生至多一条）
    async fn get_fees_by_student(&self, student_id: i64) -> Result<Option<FeeRecord>>;
    // 创建费用记录
    async fn create_fees(&self, record: NewFeeRecord) -> Result<FeeRecord>;
    // 按学生 upsert 费用记录，两条路径都盖章 lastPaymentDate
    async fn upsert_fees(&self, student_id: i64, update: UpdateFeesRequest) -> Result<FeeRecord>;
}

pub async fn create_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
