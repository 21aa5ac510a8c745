// 数据库模块
// 用户服务接口定义及其 MongoDB 实现

pub mod operations; // 数据库操作实现
pub mod service; // 服务接口与错误类型

// 重新导出常用类型，方便其他模块使用
pub use operations::user::MongoUserService;
pub use service::{ServiceError, UserService};
