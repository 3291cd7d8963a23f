//! # Domain models for destinations, recommendations and wishlist entries
//!
//! Defines the data structures the backend returns, parsed eagerly at the
//! network boundary so the rest of the client works with concrete types.
//! All wire payloads are camelCase.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Destination`] | A browsable destination. `tags` is a single comma-separated string as stored by the backend; use [`split_tags`] everywhere it is consumed. |
//! | [`Recommendation`] | A destination projected for one user, carrying `match_score`, the backend's count of matched preferences (a small integer, 0-5 in practice). |
//! | [`WishlistEntry`] | A saved destination with its fields denormalised onto the entry, plus the `added_at` timestamp. |
//! | [`UserProfile`] | The editable profile behind `/api/users/{id}`. |
//! | [`AdminUser`] | The row shape of the admin users table. |
//!
//! Nullable backend columns (`place`, `averageCost`, ...) deserialise to their
//! `Default` value via [`null_default`] so views never branch on `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a nullable field to its default value.
fn null_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A destination as served by `/api/destinations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub place: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub average_cost: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub best_season: String,
    /// CSV-style tags, e.g. "lake,trek".
    #[serde(default, deserialize_with = "null_default")]
    pub tags: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A destination scored for the current user by `/api/recommendations/{userId}`.
///
/// `match_score` counts matched preferences (budget, season, interests), so it
/// is a small integer rather than a percentage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub name: String,
    pub match_score: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub place: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub average_cost: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub best_season: String,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One saved destination from `/api/wishlist/{userId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: i64,
    pub user_id: i64,
    pub destination_id: i64,
    pub destination_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub destination_place: String,
    #[serde(default, deserialize_with = "null_default")]
    pub destination_cost: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub destination_season: String,
    #[serde(default, deserialize_with = "null_default")]
    pub destination_tags: String,
    #[serde(default, deserialize_with = "null_default")]
    pub destination_description: String,
    #[serde(default)]
    pub destination_image_url: Option<String>,
    /// ISO-8601 timestamp of when the entry was created.
    #[serde(default, deserialize_with = "null_default")]
    pub added_at: String,
}

/// Profile fields behind `GET|PUT /api/users/{userId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub interests: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub preferred_season: String,
}

/// Row shape of the admin users table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Account role as the backend spells it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Parse the stored string form; anything unrecognised is a plain user.
    pub fn parse(s: &str) -> Role {
        if s == "ADMIN" {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a CSV tag string into trimmed, non-empty tags.
///
/// The backend stores tags as one delimited string, so every consumer goes
/// through here rather than re-implementing the split.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("lake,trek"), vec!["lake", "trek"]);
        assert_eq!(split_tags(" lake , trek ,"), vec!["lake", "trek"]);
        assert_eq!(split_tags(""), Vec::<String>::new());
        assert_eq!(split_tags(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("USER"), Role::User);
        assert_eq!(Role::parse("garbage"), Role::User);
        assert_eq!(Role::Admin.as_str(), "ADMIN");
    }

    #[test]
    fn test_destination_tolerates_nulls() {
        let json = r#"{
            "id": 7,
            "name": "Rara Lake",
            "place": null,
            "description": null,
            "averageCost": null,
            "bestSeason": null,
            "tags": null,
            "imageUrl": null
        }"#;
        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.name, "Rara Lake");
        assert_eq!(dest.place, "");
        assert_eq!(dest.average_cost, 0.0);
        assert_eq!(dest.image_url, None);
    }

    #[test]
    fn test_recommendation_decodes_camel_case() {
        let json = r#"{
            "id": 1,
            "name": "Pokhara",
            "matchScore": 3,
            "averageCost": 30000.0,
            "bestSeason": "Autumn",
            "tags": "lake,trek",
            "place": "Gandaki",
            "description": "Lakeside town",
            "imageUrl": "https://example.com/p.jpg"
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.match_score, 3);
        assert_eq!(rec.best_season, "Autumn");
    }
}
