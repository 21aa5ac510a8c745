// 用户存储库
// 包含用户集合相关的数据库操作

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};

use crate::database::service::{ServiceError, UserService};
use crate::models::User;

/// 用户存储库，封装单个 MongoDB 集合
#[derive(Clone)]
pub struct MongoUserService {
    collection: Collection<User>,
}

impl MongoUserService {
    pub fn new(collection: Collection<User>) -> Self {
        Self { collection }
    }

    /// 使用数据库中指定名称的集合
    pub fn from_database(db: &Database, collection_name: &str) -> Self {
        Self::new(db.collection::<User>(collection_name))
    }
}

/// 按 `Name` 字段匹配的查询条件
pub(crate) fn name_filter(name: &str) -> Document {
    doc! { "Name": name }
}

#[async_trait]
impl UserService for MongoUserService {
    async fn create_user(&self, user: &User) -> Result<(), ServiceError> {
        tracing::debug!("Creating user: {}", user.name);

        match self.collection.insert_one(user).await {
            Ok(result) => {
                tracing::debug!("Inserted user {} as {:?}", user.name, result.inserted_id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to create user {}: {:?}", user.name, e);
                Err(e.into())
            }
        }
    }

    async fn get_user(&self, name: &str) -> Result<User, ServiceError> {
        tracing::debug!("Fetching user: {}", name);

        self.collection
            .find_one(name_filter(name))
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch user {}: {:?}", name, e);
                ServiceError::from(e)
            })?
            .ok_or(ServiceError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<User>, ServiceError> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            tracing::error!("Failed to query users: {:?}", e);
            ServiceError::from(e)
        })?;
        let users: Vec<User> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to read user cursor: {:?}", e);
            ServiceError::from(e)
        })?;

        tracing::debug!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn update_user(&self, user: &User) -> Result<(), ServiceError> {
        tracing::debug!("Replacing user: {}", user.name);

        let result = self
            .collection
            .replace_one(name_filter(&user.name), user)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update user {}: {:?}", user.name, e);
                ServiceError::from(e)
            })?;

        if result.matched_count == 0 {
            tracing::warn!("No user named {} to update", user.name);
            return Err(ServiceError::NoMatchForUpdate);
        }
        Ok(())
    }

    async fn delete_user(&self, name: &str) -> Result<(), ServiceError> {
        let result = self
            .collection
            .delete_one(name_filter(name))
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete user {}: {:?}", name, e);
                ServiceError::from(e)
            })?;
        tracing::debug!("Deleted {} document(s) named {}", result.deleted_count, name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn filter_matches_on_name_field() {
        let filter = name_filter("John Doe");
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get("Name"), Some(&Bson::String("John Doe".into())));
    }

    #[test]
    fn user_maps_to_pascal_case_document() {
        let user = User {
            name: "Jane Doe".into(),
            age: 25,
            address: crate::models::Address {
                state: "Any State".into(),
                city: "Anytown".into(),
                pincode: 673631,
            },
        };

        let document = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(document.get_str("Name").unwrap(), "Jane Doe");
        assert_eq!(document.get_i64("Age").unwrap(), 25);
        let address = document.get_document("Address").unwrap();
        assert_eq!(address.get_str("City").unwrap(), "Anytown");
        assert_eq!(address.get_i64("Pincode").unwrap(), 673631);
    }
}
