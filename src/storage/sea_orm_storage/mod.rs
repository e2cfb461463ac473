//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod crud;
mod fees;
mod marks;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{CmisError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    ///
    /// 配置在启动时构造一次后传引用进来，这里不读任何全局状态。
    pub async fn new_async(config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CmisError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CmisError::configuration(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CmisError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CmisError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CmisError::configuration(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 凭证存储
    async fn create_user(&self, email: String, password_hash: String) -> Result<User> {
        self.create_user_impl(email, password_hash).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    // 学生模块
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn search_students(&self, keyword: &str) -> Result<Vec<Student>> {
        self.search_students_impl(keyword).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, course_code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(course_code).await
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 成绩模块
    async fn list_marks(&self) -> Result<Vec<MarkRecord>> {
        self.list_marks_impl().await
    }

    async fn list_marks_by_student(&self, student_id: i64) -> Result<Vec<MarkRecord>> {
        self.list_marks_by_student_impl(student_id).await
    }

    async fn create_marks(&self, record: NewMarkRecord) -> Result<MarkRecord> {
        self.create_marks_impl(record).await
    }

    async fn update_marks(&self, id: i64, update: UpdateMarksRequest) -> Result<Option<MarkRecord>> {
        self.update_marks_impl(id, update).await
    }

    async fn delete_marks(&self, id: i64) -> Result<bool> {
        self.delete_marks_impl(id).await
    }

    // 费用模块
    async fn list_fees(&self) -> Result<Vec<FeeRecord>> {
        self.list_fees_impl().await
    }

    async fn get_fees_by_student(&self, student_id: i64) -> Result<Option<FeeRecord>> {
        self.get_fees_by_student_impl(student_id).await
    }

    async fn create_fees(&self, record: NewFeeRecord) -> Result<FeeRecord> {
        self.create_fees_impl(record).await
    }

    async fn upsert_fees(&self, student_id: i64, update: UpdateFeesRequest) -> Result<FeeRecord> {
        self.upsert_fees_impl(student_id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fees::entities::FeeStatus;
    use crate::models::marks::entities::ExamType;

    async fn memory_storage() -> SeaOrmStorage {
        let mut config = AppConfig::default();
        config.database.url = ":memory:".to_string();
        // 内存库必须单连接，否则每个连接各是一张白纸
        config.database.pool_size = 1;
        SeaOrmStorage::new_async(&config)
            .await
            .expect("in-memory sqlite should initialize")
    }

    fn sample_student(name: &str, email: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: email.to_string(),
            department: "Computer Science".to_string(),
            course: "B.Tech".to_string(),
            phone: None,
            enrollment_year: 2026,
        }
    }

    fn sample_course(code: &str) -> NewCourse {
        NewCourse {
            course_name: "Data Structures".to_string(),
            course_code: code.to_string(),
            department: "Computer Science".to_string(),
            duration: "4 years".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_student_email_unique_constraint() {
        let storage = memory_storage().await;

        storage
            .create_student_impl(sample_student("Alice Johnson", "alice@example.com"))
            .await
            .unwrap();

        let err = storage
            .create_student_impl(sample_student("Alice Clone", "alice@example.com"))
            .await
            .unwrap_err();

        match err {
            CmisError::Conflict(msg) => assert!(msg.contains("email"), "{msg}"),
            other => panic!("expected Conflict, got {other:?}"),
        }

        // 冲突的那条没有落库
        assert_eq!(storage.list_students_impl().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_students_newest_first() {
        let storage = memory_storage().await;

        for i in 1..=3 {
            storage
                .create_student_impl(sample_student(
                    &format!("Student {i}"),
                    &format!("s{i}@example.com"),
                ))
                .await
                .unwrap();
        }

        let students = storage.list_students_impl().await.unwrap();
        assert_eq!(students.len(), 3);
        // 同一秒内按 ID 倒序兜底，顺序仍然确定
        assert!(students[0].id > students[1].id);
        assert!(students[1].id > students[2].id);
        assert_eq!(students[0].name, "Student 3");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_across_fields() {
        let storage = memory_storage().await;

        storage
            .create_student_impl(sample_student("Alice Johnson", "alice@example.com"))
            .await
            .unwrap();
        storage
            .create_student_impl(NewStudent {
                department: "Mechanical".to_string(),
                course: "Diploma".to_string(),
                ..sample_student("Bob Smith", "bob@example.com")
            })
            .await
            .unwrap();

        // 姓名，大小写混写
        let hits = storage.search_students_impl("aLiCe").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice Johnson");

        // 邮箱
        let hits = storage.search_students_impl("BOB@").await.unwrap();
        assert_eq!(hits.len(), 1);

        // 院系
        let hits = storage.search_students_impl("mechanical").await.unwrap();
        assert_eq!(hits.len(), 1);

        // 课程，两人都命中
        storage
            .create_student_impl(NewStudent {
                course: "B.Tech".to_string(),
                ..sample_student("Carol White", "carol@example.com")
            })
            .await
            .unwrap();
        let hits = storage.search_students_impl("b.tech").await.unwrap();
        assert_eq!(hits.len(), 2);

        // 无命中是空列表，不是错误
        let hits = storage.search_students_impl("zzz").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_like_wildcards_literally() {
        let storage = memory_storage().await;

        storage
            .create_student_impl(sample_student("Wei_Liu", "wei@example.com"))
            .await
            .unwrap();
        storage
            .create_student_impl(sample_student("WeiXLiu", "weix@example.com"))
            .await
            .unwrap();

        // `_` 不再是单字符通配符
        let hits = storage.search_students_impl("Wei_L").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Wei_Liu");

        // `%` 只按字面匹配
        let hits = storage.search_students_impl("%").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_update_student_partial_fields() {
        let storage = memory_storage().await;

        let student = storage
            .create_student_impl(sample_student("Alice Johnson", "alice@example.com"))
            .await
            .unwrap();

        let updated = storage
            .update_student_impl(
                student.id,
                UpdateStudentRequest {
                    name: None,
                    email: None,
                    department: Some("Electronics".to_string()),
                    course: None,
                    phone: Some("555-0100".to_string()),
                    enrollment_year: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Alice Johnson");
        assert_eq!(updated.department, "Electronics");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));

        // 不存在的 ID 返回 None
        let missing = storage
            .update_student_impl(
                9999,
                UpdateStudentRequest {
                    name: Some("Ghost".to_string()),
                    email: None,
                    department: None,
                    course: None,
                    phone: None,
                    enrollment_year: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_course_code_unique_constraint() {
        let storage = memory_storage().await;

        storage.create_course_impl(sample_course("CS101")).await.unwrap();

        let err = storage
            .create_course_impl(sample_course("CS101"))
            .await
            .unwrap_err();

        match err {
            CmisError::Conflict(msg) => assert!(msg.contains("courseCode"), "{msg}"),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_marks_crud_roundtrip() {
        let storage = memory_storage().await;

        let record = storage
            .create_marks_impl(NewMarkRecord {
                student_id: 1,
                subject: "Mathematics".to_string(),
                marks: 87,
                exam_type: ExamType::Internal,
                semester: Some("Fall 2026".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(record.exam_type, ExamType::Internal);

        let updated = storage
            .update_marks_impl(
                record.id,
                UpdateMarksRequest {
                    student_id: None,
                    subject: None,
                    marks: Some(92),
                    exam_type: Some(ExamType::Practical),
                    semester: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.marks, 92);
        assert_eq!(updated.exam_type, ExamType::Practical);
        assert_eq!(updated.subject, "Mathematics");
        assert_eq!(updated.student_id, 1);

        // studentId 参与合并，且不复查学生存在性
        let moved = storage
            .update_marks_impl(
                record.id,
                UpdateMarksRequest {
                    student_id: Some(2),
                    subject: None,
                    marks: None,
                    exam_type: None,
                    semester: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(moved.student_id, 2);
        assert_eq!(moved.marks, 92);

        assert!(storage.delete_marks_impl(record.id).await.unwrap());
        assert!(!storage.delete_marks_impl(record.id).await.unwrap());

        let missing = storage
            .update_marks_impl(
                record.id,
                UpdateMarksRequest {
                    student_id: None,
                    subject: None,
                    marks: Some(50),
                    exam_type: None,
                    semester: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_deleting_student_keeps_marks_and_fees() {
        use crate::entity::prelude::{Fees, Marks};
        use sea_orm::EntityTrait;

        let storage = memory_storage().await;

        let student = storage
            .create_student_impl(sample_student("Alice Johnson", "alice@example.com"))
            .await
            .unwrap();

        storage
            .create_marks_impl(NewMarkRecord {
                student_id: student.id,
                subject: "Physics".to_string(),
                marks: 73,
                exam_type: ExamType::External,
                semester: None,
            })
            .await
            .unwrap();
        storage
            .create_fees_impl(NewFeeRecord {
                student_id: student.id,
                fees_paid: 1000.0,
                fees_pending: 500.0,
                total_fees: 1500.0,
            })
            .await
            .unwrap();

        assert!(storage.delete_student_impl(student.id).await.unwrap());

        // 孤儿记录保留且仍可按学生查询
        let marks = storage.list_marks_by_student_impl(student.id).await.unwrap();
        assert_eq!(marks.len(), 1);
        let fees = storage.get_fees_by_student_impl(student.id).await.unwrap();
        assert!(fees.is_some());

        // 表里也确实还在
        assert_eq!(Marks::find().all(&storage.db).await.unwrap().len(), 1);
        assert_eq!(Fees::find().all(&storage.db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fees_upsert_creates_then_updates_in_place() {
        let storage = memory_storage().await;

        // 第一次 upsert：创建分支，缺省金额为 0，盖章 lastPaymentDate
        let created = storage
            .upsert_fees_impl(
                7,
                UpdateFeesRequest {
                    fees_paid: Some(300.0),
                    fees_pending: Some(200.0),
                    total_fees: None,
                },
            )
            .await
            .unwrap();
        assert!(created.last_payment_date.is_some());
        assert_eq!(created.total_fees, 0.0);
        assert_eq!(created.status, FeeStatus::Pending);

        // 第二次 upsert：同一条记录原地更新
        let updated = storage
            .upsert_fees_impl(
                7,
                UpdateFeesRequest {
                    fees_paid: Some(500.0),
                    fees_pending: Some(0.0),
                    total_fees: Some(500.0),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.total_fees, 500.0);
        assert_eq!(updated.status, FeeStatus::Paid);
        assert!(updated.last_payment_date.is_some());

        assert_eq!(storage.list_fees_impl().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fees_create_does_not_stamp_payment_date() {
        let storage = memory_storage().await;

        let record = storage
            .create_fees_impl(NewFeeRecord {
                student_id: 9,
                fees_paid: 100.0,
                fees_pending: 0.0,
                total_fees: 100.0,
            })
            .await
            .unwrap();

        assert!(record.last_payment_date.is_none());
        assert_eq!(record.status, FeeStatus::Paid);
    }

    #[tokio::test]
    async fn test_fees_one_record_per_student() {
        let storage = memory_storage().await;

        storage
            .create_fees_impl(NewFeeRecord {
                student_id: 3,
                fees_paid: 0.0,
                fees_pending: 0.0,
                total_fees: 0.0,
            })
            .await
            .unwrap();

        let err = storage
            .create_fees_impl(NewFeeRecord {
                student_id: 3,
                fees_paid: 50.0,
                fees_pending: 0.0,
                total_fees: 50.0,
            })
            .await
            .unwrap_err();

        match err {
            CmisError::Conflict(msg) => assert!(msg.contains("studentId"), "{msg}"),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_user_roundtrip_and_duplicate_email() {
        let storage = memory_storage().await;

        let user = storage
            .create_user_impl("admin@cmis.edu".to_string(), "argon2-hash".to_string())
            .await
            .unwrap();

        let by_id = storage.get_user_by_id_impl(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "admin@cmis.edu");

        let by_email = storage
            .get_user_by_email_impl("admin@cmis.edu")
            .await
            .unwrap();
        assert!(by_email.is_some());

        let err = storage
            .create_user_impl("admin@cmis.edu".to_string(), "other-hash".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CmisError::Conflict(_)));
    }
}
