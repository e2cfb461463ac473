use super::SeaOrmStorage;
use super::crud;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::errors::{CmisError, Result};
use crate::models::marks::{
    entities::MarkRecord,
    requests::{NewMarkRecord, UpdateMarksRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部成绩，最新创建的在前
    pub async fn list_marks_impl(&self) -> Result<Vec<MarkRecord>> {
        let marks =
            crud::fetch_all_newest_first::<Marks>(&self.db, Column::CreatedAt, Column::Id, "成绩")
                .await?;

        Ok(marks.into_iter().map(|m| m.into_mark_record()).collect())
    }

    /// 列出某个学生的全部成绩，最新创建的在前
    ///
    /// 学生被删除后孤儿成绩仍然可查。
    pub async fn list_marks_by_student_impl(&self, student_id: i64) -> Result<Vec<MarkRecord>> {
        let marks = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark_record()).collect())
    }

    /// 添加成绩记录
    pub async fn create_marks_impl(&self, record: NewMarkRecord) -> Result<MarkRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(record.student_id),
            subject: Set(record.subject),
            marks: Set(record.marks),
            exam_type: Set(record.exam_type.to_string()),
            semester: Set(record.semester),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("添加成绩失败: {e}")))?;

        Ok(result.into_mark_record())
    }

    /// 更新成绩记录，只更新提供的字段
    ///
    /// studentId 也参与合并，但不复查学生存在性（只有创建时查）。
    pub async fn update_marks_impl(
        &self,
        id: i64,
        update: UpdateMarksRequest,
    ) -> Result<Option<MarkRecord>> {
        // 先检查记录是否存在
        let existing = crud::fetch_by_id::<Marks>(&self.db, id, "成绩").await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }

        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }

        if let Some(marks) = update.marks {
            model.marks = Set(marks);
        }

        if let Some(exam_type) = update.exam_type {
            model.exam_type = Set(exam_type.to_string());
        }

        if let Some(semester) = update.semester {
            model.semester = Set(Some(semester));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("更新成绩失败: {e}")))?;

        Ok(Some(result.into_mark_record()))
    }

    /// 删除成绩记录
    pub async fn delete_marks_impl(&self, id: i64) -> Result<bool> {
        crud::remove_by_id::<Marks>(&self.db, id, "成绩").await
    }
}
