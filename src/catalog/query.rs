//! The fixed set of catalog queries.

use std::ops::RangeInclusive;

use super::error::CatalogError;

/// Years accepted as query parameters.
pub const PLAUSIBLE_YEARS: RangeInclusive<i32> = 1..=9999;

/// One variant per catalog operation.
///
/// Prefer the validating constructors (`CatalogQuery::by_birth_year`, …). Variants
/// built by hand are validated again by the store before they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Every actor, ascending by identity.
    ActorsSortedByIdentity,
    /// Actors whose identity equals `identity` exactly.
    ActorsByIdentity { identity: String },
    /// Actors born during `year`.
    ActorsByBirthYear { year: i32 },
    /// One actor per role named `role`.
    ActorsByRoleName { role: String },
    /// One actor per role in a film released in `year`.
    ActorsByFilmYear { year: i32 },
    /// Distinct actors with a role in a film from `country`.
    ActorsByCountry { country: String },
    /// Distinct actors with a role in a film from `country` released in `year`.
    ActorsByCountryAndYear { country: String, year: i32 },
    /// Distinct actors with a role in a film released in `start_year..=end_year` whose
    /// directors include one whose identity contains `director_pattern`.
    ActorsByDirectorAndYearRange {
        director_pattern: String,
        start_year: i32,
        end_year: i32,
    },
}

impl CatalogQuery {
    pub fn sorted_by_identity() -> Self {
        Self::ActorsSortedByIdentity
    }

    pub fn by_identity(identity: impl Into<String>) -> Self {
        Self::ActorsByIdentity {
            identity: identity.into(),
        }
    }

    pub fn by_birth_year(year: i32) -> Result<Self, CatalogError> {
        Self::ActorsByBirthYear { year }.validated()
    }

    pub fn by_role_name(role: impl Into<String>) -> Self {
        Self::ActorsByRoleName { role: role.into() }
    }

    pub fn by_film_year(year: i32) -> Result<Self, CatalogError> {
        Self::ActorsByFilmYear { year }.validated()
    }

    pub fn by_country(country: impl Into<String>) -> Self {
        Self::ActorsByCountry {
            country: country.into(),
        }
    }

    pub fn by_country_and_year(
        country: impl Into<String>,
        year: i32,
    ) -> Result<Self, CatalogError> {
        Self::ActorsByCountryAndYear {
            country: country.into(),
            year,
        }
        .validated()
    }

    pub fn by_director_and_year_range(
        director_pattern: impl Into<String>,
        start_year: i32,
        end_year: i32,
    ) -> Result<Self, CatalogError> {
        Self::ActorsByDirectorAndYearRange {
            director_pattern: director_pattern.into(),
            start_year,
            end_year,
        }
        .validated()
    }

    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ActorsSortedByIdentity => "actors_sorted_by_identity",
            Self::ActorsByIdentity { .. } => "actors_by_identity",
            Self::ActorsByBirthYear { .. } => "actors_by_birth_year",
            Self::ActorsByRoleName { .. } => "actors_by_role_name",
            Self::ActorsByFilmYear { .. } => "actors_by_film_year",
            Self::ActorsByCountry { .. } => "actors_by_country",
            Self::ActorsByCountryAndYear { .. } => "actors_by_country_and_year",
            Self::ActorsByDirectorAndYearRange { .. } => "actors_by_director_and_year_range",
        }
    }

    /// Checks numeric parameters against [`PLAUSIBLE_YEARS`].
    ///
    /// An inverted range (`start_year > end_year`) is valid and simply matches nothing.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self {
            Self::ActorsByBirthYear { year }
            | Self::ActorsByFilmYear { year }
            | Self::ActorsByCountryAndYear { year, .. } => check_year("year", *year),
            Self::ActorsByDirectorAndYearRange {
                start_year,
                end_year,
                ..
            } => {
                check_year("start_year", *start_year)?;
                check_year("end_year", *end_year)
            }
            Self::ActorsSortedByIdentity
            | Self::ActorsByIdentity { .. }
            | Self::ActorsByRoleName { .. }
            | Self::ActorsByCountry { .. } => Ok(()),
        }
    }

    fn validated(self) -> Result<Self, CatalogError> {
        self.validate()?;
        Ok(self)
    }
}

fn check_year(param: &str, year: i32) -> Result<(), CatalogError> {
    if PLAUSIBLE_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CatalogError::InvalidArgument(format!(
            "{param} must be within {}..={}, got {year}",
            PLAUSIBLE_YEARS.start(),
            PLAUSIBLE_YEARS.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_and_zero_years_are_rejected() {
        assert!(matches!(
            CatalogQuery::by_birth_year(-1985),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            CatalogQuery::by_film_year(0),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            CatalogQuery::by_country_and_year("France", 10_000),
            Err(CatalogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_range_checks_both_bounds() {
        let err = CatalogQuery::by_director_and_year_range("Ridley Scott", 2010, -5).unwrap_err();
        assert!(err.to_string().contains("end_year"));
        assert!(CatalogQuery::by_director_and_year_range("Ridley Scott", 2020, 2010).is_ok());
    }

    #[test]
    fn test_hand_built_variant_is_validated() {
        let query = CatalogQuery::ActorsByFilmYear { year: -3 };
        assert!(query.validate().is_err());
        assert_eq!(query.name(), "actors_by_film_year");
    }
}
