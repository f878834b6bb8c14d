use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with the given email
    pub async fn create(&self, email: &str) -> Result<entity::shack_user::Model, DbErr> {
        let user = entity::shack_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by ID
    pub async fn find_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::shack_user::Model>, DbErr> {
        entity::prelude::ShackUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::shack_user::Model>, DbErr> {
        entity::prelude::ShackUser::find()
            .filter(entity::shack_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
