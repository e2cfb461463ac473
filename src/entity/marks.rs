//! 成绩实体
//!
//! student_id 没有外键约束：删除学生后成绩作为孤儿记录保留。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    pub marks: i32,
    pub exam_type: String,
    pub semester: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_mark_record(self) -> crate::models::marks::entities::MarkRecord {
        use crate::models::marks::entities::{ExamType, MarkRecord};
        use chrono::{DateTime, Utc};

        MarkRecord {
            id: self.id,
            student_id: self.student_id,
            subject: self.subject,
            marks: self.marks,
            exam_type: self
                .exam_type
                .parse::<ExamType>()
                .unwrap_or(ExamType::External),
            semester: self.semester,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
