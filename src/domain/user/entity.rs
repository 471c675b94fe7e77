// src/domain/user/entity.rs
use crate::domain::media::MediaRef;
use crate::domain::user::value_objects::{
    Email, Gender, PasswordHash, PersonName, UserId, Username,
};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub name: PersonName,
    pub birth_date: NaiveDate,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<MediaRef>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn author_ref(&self) -> AuthorRef {
        AuthorRef {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Owner or author reference as carried on items and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: UserId,
    pub email: Email,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: Username,
    pub name: PersonName,
    pub birth_date: NaiveDate,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<MediaRef>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub name: Option<PersonName>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub bio: Option<String>,
    pub profile_image: Option<MediaRef>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            name: None,
            birth_date: None,
            gender: None,
            bio: None,
            profile_image: None,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_name(mut self, name: PersonName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_profile_image(mut self, profile_image: MediaRef) -> Self {
        self.profile_image = Some(profile_image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.name.is_none()
            && self.birth_date.is_none()
            && self.gender.is_none()
            && self.bio.is_none()
            && self.profile_image.is_none()
    }

    /// Apply the changed fields to an in-memory copy.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = birth_date;
        }
        if let Some(gender) = self.gender {
            user.gender = Some(gender);
        }
        if let Some(bio) = &self.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(image) = &self.profile_image {
            user.profile_image = Some(image.clone());
        }
    }
}
