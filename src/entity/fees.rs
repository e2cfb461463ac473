//! 费用实体
//!
//! 每个学生至多一条记录（student_id 唯一）。student_id 没有外键约束，
//! 删除学生后费用记录保留。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub student_id: i64,
    pub fees_paid: f64,
    pub fees_pending: f64,
    pub total_fees: f64,
    pub last_payment_date: Option<i64>,
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

// 从数据库模型转换为业务模型，status 在这里派生，不落库
impl Model {
    pub fn into_fee_record(self) -> crate::models::fees::entities::FeeRecord {
        use crate::models::fees::entities::{FeeRecord, FeeStatus};
        use chrono::{DateTime, Utc};

        FeeRecord {
            id: self.id,
            student_id: self.student_id,
            fees_paid: self.fees_paid,
            fees_pending: self.fees_pending,
            total_fees: self.total_fees,
            status: FeeStatus::from_pending(self.fees_pending),
            last_payment_date: self
                .last_payment_date
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
