use super::SeaOrmStorage;
use super::crud;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{CmisError, Result};
use crate::models::students::{
    entities::Student,
    requests::{NewStudent, UpdateStudentRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 列出全部学生，最新创建的在前
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students =
            crud::fetch_all_newest_first::<Students>(&self.db, Column::CreatedAt, Column::Id, "学生")
                .await?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 子串搜索：姓名/邮箱/院系/课程，不区分大小写
    ///
    /// 关键字里的 LIKE 通配符按字面匹配。
    pub async fn search_students_impl(&self, keyword: &str) -> Result<Vec<Student>> {
        let needle = format!("%{}%", escape_like_pattern(keyword).to_lowercase());
        let matches = |column: Column| {
            Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(&needle).escape('\\'))
        };

        let students = Students::find()
            .filter(
                Condition::any()
                    .add(matches(Column::Name))
                    .add(matches(Column::Email))
                    .add(matches(Column::Department))
                    .add(matches(Column::Course)),
            )
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("搜索学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = crud::fetch_by_id::<Students>(&self.db, id, "学生").await?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生（唯一性预检查用）
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 创建学生
    ///
    /// 邮箱唯一约束竞争由 `From<DbErr>` 归类为 Conflict。
    pub async fn create_student_impl(&self, student: NewStudent) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(student.name),
            email: Set(student.email),
            department: Set(student.department),
            course: Set(student.course),
            phone: Set(student.phone),
            enrollment_year: Set(student.enrollment_year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_student())
    }

    /// 更新学生信息，只更新提供的字段
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = crud::fetch_by_id::<Students>(&self.db, id, "学生").await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(course) = update.course {
            model.course = Set(course);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(enrollment_year) = update.enrollment_year {
            model.enrollment_year = Set(enrollment_year);
        }

        model.update(&self.db).await?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    ///
    /// 不级联：该学生的成绩与费用记录原样保留。
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        crud::remove_by_id::<Students>(&self.db, id, "学生").await
    }
}
