use super::SeaOrmStorage;
use super::crud;
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::errors::{CmisError, Result};
use crate::models::fees::{
    entities::FeeRecord,
    requests::{NewFeeRecord, UpdateFeesRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 列出全部费用记录，最新创建的在前
    pub async fn list_fees_impl(&self) -> Result<Vec<FeeRecord>> {
        let fees =
            crud::fetch_all_newest_first::<Fees>(&self.db, Column::CreatedAt, Column::Id, "费用")
                .await?;

        Ok(fees.into_iter().map(|m| m.into_fee_record()).collect())
    }

    /// 获取某个学生的费用记录（每个学生至多一条）
    pub async fn get_fees_by_student_impl(&self, student_id: i64) -> Result<Option<FeeRecord>> {
        let result = Fees::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("查询费用记录失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_record()))
    }

    /// 创建费用记录
    ///
    /// POST 创建不盖章 lastPaymentDate，这一点与 upsert 不同。
    /// student_id 唯一约束竞争由 `From<DbErr>` 归类为 Conflict。
    pub async fn create_fees_impl(&self, record: NewFeeRecord) -> Result<FeeRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(record.student_id),
            fees_paid: Set(record.fees_paid),
            fees_pending: Set(record.fees_pending),
            total_fees: Set(record.total_fees),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into_fee_record())
    }

    /// 按学生 upsert 费用记录：存在则更新，不存在则创建
    ///
    /// 两条路径都会把 lastPaymentDate 盖章为当前时间。
    pub async fn upsert_fees_impl(
        &self,
        student_id: i64,
        update: UpdateFeesRequest,
    ) -> Result<FeeRecord> {
        let now = chrono::Utc::now().timestamp();

        let existing = Fees::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| CmisError::database_operation(format!("查询费用记录失败: {e}")))?;

        let result = match existing {
            Some(record) => {
                let mut model = ActiveModel {
                    id: Set(record.id),
                    last_payment_date: Set(Some(now)),
                    updated_at: Set(now),
                    ..Default::default()
                };

                if let Some(fees_paid) = update.fees_paid {
                    model.fees_paid = Set(fees_paid);
                }

                if let Some(fees_pending) = update.fees_pending {
                    model.fees_pending = Set(fees_pending);
                }

                if let Some(total_fees) = update.total_fees {
                    model.total_fees = Set(total_fees);
                }

                model.update(&self.db).await?
            }
            None => {
                // 创建分支：缺省金额为 0，同样盖章 lastPaymentDate
                let model = ActiveModel {
                    student_id: Set(student_id),
                    fees_paid: Set(update.fees_paid.unwrap_or(0.0)),
                    fees_pending: Set(update.fees_pending.unwrap_or(0.0)),
                    total_fees: Set(update.total_fees.unwrap_or(0.0)),
                    last_payment_date: Set(Some(now)),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model.insert(&self.db).await?
            }
        };

        Ok(result.into_fee_record())
    }
}
