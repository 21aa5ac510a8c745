use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

/// 持久层错误，原样透传给 HTTP 层
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error("mongo: no documents in result")]
    NotFound,

    #[error("no matched document found for update")]
    NoMatchForUpdate,
}

/// 用户服务接口
///
/// 生产环境使用 [`MongoUserService`](crate::database::MongoUserService)，
/// 测试中可替换为内存实现。每个操作对应一次数据库往返，不做重试。
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<(), ServiceError>;

    /// 按名称查找第一条记录
    async fn get_user(&self, name: &str) -> Result<User, ServiceError>;

    /// 空集合返回空列表
    async fn get_all(&self) -> Result<Vec<User>, ServiceError>;

    /// 用传入记录整体替换名称相同的文档
    async fn update_user(&self, user: &User) -> Result<(), ServiceError>;

    /// 没有匹配文档时同样返回成功
    async fn delete_user(&self, name: &str) -> Result<(), ServiceError>;
}
