//! 通用 CRUD 辅助函数
//!
//! 四种资源的「全量列表 / 按 ID 查询 / 按 ID 删除」完全同构，在这里用
//! 泛型实现一次；各资源文件只保留真正不同的逻辑（唯一性预检查、搜索、
//! 按学生过滤、upsert 等）。

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait, QueryOrder};

use crate::errors::{CmisError, Result};

/// 全量列表，创建时间倒序；同一秒内按 ID 倒序保证顺序稳定
pub(crate) async fn fetch_all_newest_first<E>(
    db: &DatabaseConnection,
    created_at: E::Column,
    id: E::Column,
    what: &str,
) -> Result<Vec<E::Model>>
where
    E: EntityTrait,
{
    E::find()
        .order_by_desc(created_at)
        .order_by_desc(id)
        .all(db)
        .await
        .map_err(|e| CmisError::database_operation(format!("查询{what}列表失败: {e}")))
}

/// 按主键查询一条记录
pub(crate) async fn fetch_by_id<E>(
    db: &DatabaseConnection,
    id: i64,
    what: &str,
) -> Result<Option<E::Model>>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
{
    E::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| CmisError::database_operation(format!("查询{what}失败: {e}")))
}

/// 按主键删除，返回是否删除了记录
pub(crate) async fn remove_by_id<E>(db: &DatabaseConnection, id: i64, what: &str) -> Result<bool>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
{
    let result = E::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| CmisError::database_operation(format!("删除{what}失败: {e}")))?;

    Ok(result.rows_affected > 0)
}
