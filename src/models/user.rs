use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub state: String,
    pub city: String,
    pub pincode: i64,
}

/// 用户记录，`Name` 作为查找键使用（数据库不保证唯一）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub name: String,
    pub age: i64,
    pub address: Address,
}
