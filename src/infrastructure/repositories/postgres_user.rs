// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::MediaRef;
use crate::domain::user::{
    Email, FollowRepository, NewUser, PasswordHash, PersonName, User, UserId, UserRepository,
    UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, email, username, name, birth_date, gender, bio, profile_image, password_hash, created_at";

/// Users and the follow graph share one table family, so one adapter
/// serves both ports.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    username: String,
    name: String,
    birth_date: NaiveDate,
    gender: Option<String>,
    bio: Option<String>,
    profile_image: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            username: Username::new(row.username)?,
            name: PersonName::new(row.name)?,
            birth_date: row.birth_date,
            gender: row.gender.as_deref().map(str::parse).transpose()?,
            bio: row.bio,
            profile_image: row.profile_image.map(MediaRef::new).transpose()?,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

fn into_users(rows: Vec<UserRow>) -> DomainResult<Vec<User>> {
    rows.into_iter().map(User::try_from).collect()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            username,
            name,
            birth_date,
            gender,
            bio,
            profile_image,
            password_hash,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, username, name, birth_date, gender, bio, profile_image, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email.as_str())
        .bind(username.as_str())
        .bind(name.as_str())
        .bind(birth_date)
        .bind(gender.map(|g| g.as_str()))
        .bind(bio)
        .bind(profile_image.map(MediaRef::into_inner))
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            username,
            name,
            birth_date,
            gender,
            bio,
            profile_image,
        } = update;

        // Always-true assignment keeps the SET list non-empty.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET id = id");

        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(String::from(username));
        }
        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }
        if let Some(birth_date) = birth_date {
            builder.push(", birth_date = ");
            builder.push_bind(birth_date);
        }
        if let Some(gender) = gender {
            builder.push(", gender = ");
            builder.push_bind(gender.as_str());
        }
        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }
        if let Some(image) = profile_image {
            builder.push(", profile_image = ");
            builder.push_bind(image.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 ORDER BY id ASC LIMIT 1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl FollowRepository for PostgresUserRepository {
    async fn follow(
        &self,
        follower: UserId,
        following: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO follows (follower_id, following_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (follower_id, following_id) DO NOTHING",
        )
        .bind(i64::from(follower))
        .bind(i64::from(following))
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn unfollow(&self, follower: UserId, following: UserId) -> DomainResult<bool> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
                .bind(i64::from(follower))
                .bind(i64::from(following))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn followers(&self, user: UserId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.email, u.username, u.name, u.birth_date, u.gender, u.bio,
                    u.profile_image, u.password_hash, u.created_at
             FROM follows f JOIN users u ON u.id = f.follower_id
             WHERE f.following_id = $1
             ORDER BY f.created_at ASC, u.id ASC",
        )
        .bind(i64::from(user))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_users(rows)
    }

    async fn followings(&self, user: UserId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.email, u.username, u.name, u.birth_date, u.gender, u.bio,
                    u.profile_image, u.password_hash, u.created_at
             FROM follows f JOIN users u ON u.id = f.following_id
             WHERE f.follower_id = $1
             ORDER BY f.created_at ASC, u.id ASC",
        )
        .bind(i64::from(user))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_users(rows)
    }
}
