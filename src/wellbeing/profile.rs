//! Profile fields as stored by registration and the settings page.

use crate::database::store::{KeyValueStore, is_filled};
use crate::error::Error;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Username,
    Institution,
    FieldOfStudy,
    Interests,
    /// "What makes you happy?"
    Happiness,
    ProfileImage,
    Bio,
}

impl ProfileField {
    /// Fields that must all be filled for the profile to count as complete.
    pub const REQUIRED: [ProfileField; 6] = [
        ProfileField::Username,
        ProfileField::Institution,
        ProfileField::FieldOfStudy,
        ProfileField::Interests,
        ProfileField::Happiness,
        ProfileField::ProfileImage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Username => "username",
            ProfileField::Institution => "hochschule",
            ProfileField::FieldOfStudy => "studiengang",
            ProfileField::Interests => "interessen",
            ProfileField::Happiness => "gluecklich",
            ProfileField::ProfileImage => "profileImage",
            ProfileField::Bio => "profiltext",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Username => "Username",
            ProfileField::Institution => "Hochschule",
            ProfileField::FieldOfStudy => "Studiengang",
            ProfileField::Interests => "Interessen",
            ProfileField::Happiness => "Was macht dich glücklich?",
            ProfileField::ProfileImage => "Profilbild",
            ProfileField::Bio => "Profiltext",
        }
    }
}

impl FromStr for ProfileField {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "username" | "name" => Ok(ProfileField::Username),
            "hochschule" | "institution" => Ok(ProfileField::Institution),
            "studiengang" | "study" => Ok(ProfileField::FieldOfStudy),
            "interessen" | "interests" => Ok(ProfileField::Interests),
            "gluecklich" | "happy" => Ok(ProfileField::Happiness),
            "profileimage" | "image" | "avatar" => Ok(ProfileField::ProfileImage),
            "profiltext" | "bio" => Ok(ProfileField::Bio),
            other => Err(Error::UnknownProfileField(other.to_string())),
        }
    }
}

pub fn get_field<S: KeyValueStore + ?Sized>(store: &S, field: ProfileField) -> Option<String> {
    store.get(field.key())
}

/// Write a field; a blank value clears it.
pub fn set_field<S: KeyValueStore + ?Sized>(store: &mut S, field: ProfileField, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        store.remove(field.key());
    } else {
        store.set(field.key(), value.to_string());
    }
}

/// Required fields that are missing or blank, in display order.
pub fn missing_fields<S: KeyValueStore + ?Sized>(store: &S) -> Vec<ProfileField> {
    ProfileField::REQUIRED
        .into_iter()
        .filter(|f| !is_filled(store, f.key()))
        .collect()
}

pub fn is_complete<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    missing_fields(store).is_empty()
}
