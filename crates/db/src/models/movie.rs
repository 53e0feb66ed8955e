//! Movie entity model and DTOs.
//!
//! The wire DTOs are kept separate from the storage row. Every conversion
//! between them is written out below so field correspondence stays auditable.

use std::borrow::Cow;
use std::fmt;

use filmes_core::patch::PatchTarget;
use filmes_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A movie row from the `filmes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    /// Running time in minutes.
    pub duration: i32,
}

/// Column values for an insert or a full overwrite. Never carries an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub duration: i32,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMovie {
    #[validate(
        length(max = 200, message = "title must be at most 200 characters"),
        custom(function = "non_blank")
    )]
    pub title: String,
    #[validate(
        length(max = 50, message = "genre must be at most 50 characters"),
        custom(function = "non_blank")
    )]
    pub genre: String,
    #[validate(range(min = 1, max = 600, message = "duration must be between 1 and 600 minutes"))]
    pub duration: i32,
}

/// DTO for a full update. Also the mutable view that PATCH operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMovie {
    #[validate(
        length(max = 200, message = "title must be at most 200 characters"),
        custom(function = "non_blank")
    )]
    pub title: String,
    #[validate(
        length(max = 50, message = "genre must be at most 50 characters"),
        custom(function = "non_blank")
    )]
    pub genre: String,
    #[validate(range(min = 1, max = 600, message = "duration must be between 1 and 600 minutes"))]
    pub duration: i32,
}

/// Read DTO returned by GET, list and POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub duration: i32,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Conversions
-------------------------------------------------------------------------- */

impl From<CreateMovie> for NewMovie {
    fn from(dto: CreateMovie) -> Self {
        Self {
            title: dto.title,
            genre: dto.genre,
            duration: dto.duration,
        }
    }
}

impl From<UpdateMovie> for NewMovie {
    fn from(dto: UpdateMovie) -> Self {
        Self {
            title: dto.title,
            genre: dto.genre,
            duration: dto.duration,
        }
    }
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            duration: movie.duration,
        }
    }
}

impl From<&Movie> for UpdateMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            duration: movie.duration,
        }
    }
}

/* --------------------------------------------------------------------------
Patch support
-------------------------------------------------------------------------- */

/// Fields of [`UpdateMovie`] addressable by a patch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieField {
    Title,
    Genre,
    Duration,
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovieField::Title => "title",
            MovieField::Genre => "genre",
            MovieField::Duration => "duration",
        };
        f.write_str(name)
    }
}

impl PatchTarget for UpdateMovie {
    type Field = MovieField;

    fn resolve_field(name: &str) -> Option<MovieField> {
        match name.to_ascii_lowercase().as_str() {
            "title" => Some(MovieField::Title),
            "genre" => Some(MovieField::Genre),
            "duration" => Some(MovieField::Duration),
            _ => None,
        }
    }

    fn field_value(&self, field: MovieField) -> Value {
        match field {
            MovieField::Title => Value::from(self.title.as_str()),
            MovieField::Genre => Value::from(self.genre.as_str()),
            MovieField::Duration => Value::from(self.duration),
        }
    }

    fn set_field(&mut self, field: MovieField, value: &Value) -> Result<(), String> {
        match field {
            MovieField::Title | MovieField::Genre => {
                let text = value.as_str().ok_or("expected a string")?.to_string();
                if field == MovieField::Title {
                    self.title = text;
                } else {
                    self.genre = text;
                }
            }
            MovieField::Duration => {
                self.duration = value
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or("expected an integer number of minutes")?;
            }
        }
        Ok(())
    }

    fn reset_field(&mut self, field: MovieField) {
        match field {
            MovieField::Title => self.title.clear(),
            MovieField::Genre => self.genre.clear(),
            MovieField::Duration => self.duration = 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use filmes_core::error::CoreError;
    use filmes_core::patch::{apply_patch, PatchOperation};

    fn dune() -> Movie {
        Movie {
            id: 7,
            title: "Dune".into(),
            genre: "Sci-Fi".into(),
            duration: 155,
        }
    }

    #[test]
    fn valid_create_passes() {
        let dto = CreateMovie {
            title: "Dune".into(),
            genre: "Sci-Fi".into(),
            duration: 155,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn blank_title_and_zero_duration_fail() {
        let dto = CreateMovie {
            title: "   ".into(),
            genre: "Drama".into(),
            duration: 0,
        };
        let err: CoreError = dto.validate().unwrap_err().into();
        assert_matches!(err, CoreError::Validation(ref errs) if {
            let fields: Vec<_> = errs.iter().map(|e| e.field.as_str()).collect();
            fields == ["duration", "title"]
        });
    }

    #[test]
    fn overlong_genre_fails() {
        let dto = UpdateMovie {
            title: "Dune".into(),
            genre: "x".repeat(51),
            duration: 155,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn response_keeps_store_id() {
        let response = MovieResponse::from(dune());
        assert_eq!(response.id, 7);
        assert_eq!(response.title, "Dune");
    }

    #[test]
    fn update_view_round_trips_fields() {
        let movie = dune();
        let view = UpdateMovie::from(&movie);
        let row = NewMovie::from(view);
        assert_eq!(row.title, movie.title);
        assert_eq!(row.genre, movie.genre);
        assert_eq!(row.duration, movie.duration);
    }

    #[test]
    fn patch_changes_only_targeted_field() {
        let mut view = UpdateMovie::from(&dune());
        apply_patch(&mut view, &[PatchOperation::replace("/duration", 166)]).unwrap();
        assert_eq!(view.duration, 166);
        assert_eq!(view.title, "Dune");
        assert_eq!(view.genre, "Sci-Fi");
    }

    #[test]
    fn patch_remove_then_validate_fails() {
        let mut view = UpdateMovie::from(&dune());
        apply_patch(&mut view, &[PatchOperation::remove("/genre")]).unwrap();
        assert!(view.validate().is_err());
    }

    #[test]
    fn patch_test_uses_current_value() {
        let mut view = UpdateMovie::from(&dune());
        let ops = [
            PatchOperation::test("/title", "Dune"),
            PatchOperation::replace("/title", "Dune: Part Two"),
        ];
        apply_patch(&mut view, &ops).unwrap();
        assert_eq!(view.title, "Dune: Part Two");
    }

    #[test]
    fn patch_rejects_out_of_range_integer() {
        let mut view = UpdateMovie::from(&dune());
        let err = apply_patch(
            &mut view,
            &[PatchOperation::replace("/duration", i64::from(i32::MAX) + 1)],
        )
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref errs) if errs[0].field == "duration");
    }
}
