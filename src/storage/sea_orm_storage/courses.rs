use super::SeaOrmStorage;
use super::crud;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{CmisError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{NewCourse, UpdateCourseRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 列出全部课程，最新创建的在前
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses =
            crud::fetch_all_newest_first::<Courses>(&self.db, Column::CreatedAt, Column::Id, "课程")
                .await?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = crud::fetch_by_id::<Courses>(&self.db, id, "课程").await?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程代码获取课程（唯一性预检查用），代码由调用方统一转大写
    pub async fn get_course_by_code_impl(&self, course_code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::CourseCode.eq(course_code))
            .one(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 创建课程
    ///
    /// 课程代码唯一约束竞争由 `From<DbErr>` 归类为 Conflict。
    pub async fn create_course_impl(&self, course: NewCourse) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_name: Set(course.course_name),
            course_code: Set(course.course_code),
            department: Set(course.department),
            duration: Set(course.duration),
            description: Set(course.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_course())
    }

    /// 更新课程信息，只更新提供的字段
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = crud::fetch_by_id::<Courses>(&self.db, id, "课程").await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_name) = update.course_name {
            model.course_name = Set(course_name);
        }

        if let Some(course_code) = update.course_code {
            model.course_code = Set(course_code);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(duration) = update.duration {
            model.duration = Set(duration);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model.update(&self.db).await?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        crud::remove_by_id::<Courses>(&self.db, id, "课程").await
    }
}
