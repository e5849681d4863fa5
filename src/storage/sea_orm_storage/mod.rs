//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod avatars;
mod faculties;
mod students;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
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
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
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
            .map_err(|e| SchoolError::database_operation(format!("数据库迁移失败: {e}")))?;

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
            .map_err(|e| SchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
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
            .map_err(|e| SchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

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
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))
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
            Err(SchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    avatars::{
        entities::{Avatar, AvatarPreview},
        requests::UpsertAvatarData,
        responses::AvatarPageResponse,
    },
    faculties::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_with_faculty(
        &self,
        id: i64,
    ) -> Result<Option<(Student, Option<Faculty>)>> {
        self.get_student_with_faculty_impl(id).await
    }

    async fn student_name_taken(&self, name: &str) -> Result<bool> {
        self.student_name_taken_impl(name).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
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

    async fn list_students_by_age(&self, age: i32) -> Result<Vec<Student>> {
        self.list_students_by_age_impl(age).await
    }

    async fn list_students_by_age_between(&self, min: i32, max: i32) -> Result<Vec<Student>> {
        self.list_students_by_age_between_impl(min, max).await
    }

    async fn list_students_by_faculty(&self, faculty_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_faculty_impl(faculty_id).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    async fn average_student_age(&self) -> Result<Option<f64>> {
        self.average_student_age_impl().await
    }

    async fn list_latest_students(&self, limit: u64) -> Result<Vec<Student>> {
        self.list_latest_students_impl(limit).await
    }

    // 学院模块
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<Faculty> {
        self.create_faculty_impl(faculty).await
    }

    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_id_impl(id).await
    }

    async fn faculty_name_taken(&self, name: &str) -> Result<bool> {
        self.faculty_name_taken_impl(name).await
    }

    async fn list_faculties_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        self.list_faculties_with_pagination_impl(query).await
    }

    async fn update_faculty(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        self.update_faculty_impl(id, update).await
    }

    async fn delete_faculty(&self, id: i64) -> Result<bool> {
        self.delete_faculty_impl(id).await
    }

    async fn list_faculties_by_color(&self, color: &str) -> Result<Vec<Faculty>> {
        self.list_faculties_by_color_impl(color).await
    }

    async fn search_faculties(&self, query: &str) -> Result<Vec<Faculty>> {
        self.search_faculties_impl(query).await
    }

    // 头像模块
    async fn upsert_avatar(&self, student_id: i64, data: UpsertAvatarData) -> Result<Avatar> {
        self.upsert_avatar_impl(student_id, data).await
    }

    async fn get_avatar_by_student_id(&self, student_id: i64) -> Result<Option<Avatar>> {
        self.get_avatar_by_student_id_impl(student_id).await
    }

    async fn get_avatar_preview(&self, student_id: i64) -> Result<Option<AvatarPreview>> {
        self.get_avatar_preview_impl(student_id).await
    }

    async fn delete_avatar(&self, student_id: i64) -> Result<Option<Avatar>> {
        self.delete_avatar_impl(student_id).await
    }

    async fn list_avatars_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<AvatarPageResponse> {
        self.list_avatars_with_pagination_impl(page, size).await
    }
}
