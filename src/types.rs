//! Row types: the two raw datasets and every normalized table
use chrono::NaiveDate;
use serde::Deserialize;

use crate::impl_tabular;
use crate::keys::SurrogateId;

/// Natural movie id from the catalog
pub type MovieId = i64;

/// One row of the denormalized movie catalog, as read from CSV
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMovie {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub revenue: Option<i64>,
    #[serde(default)]
    pub runtime: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,

    // denormalized columns
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub production_companies: Option<String>,
    #[serde(default)]
    pub production_countries: Option<String>,
    #[serde(default)]
    pub crew: Option<String>,
    #[serde(default)]
    pub spoken_languages: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A catalog row after the release date has been parsed
#[derive(Debug, Clone, Default)]
pub struct Movie {
    pub id: MovieId,
    pub title: Option<String>,
    pub homepage: Option<String>,
    pub budget: Option<i64>,
    pub popularity: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub revenue: Option<i64>,
    pub runtime: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub tagline: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub genres: Option<String>,
    pub director: Option<String>,
    pub production_companies: Option<String>,
    pub production_countries: Option<String>,
    pub crew: Option<String>,
    pub spoken_languages: Option<String>,
    pub status: Option<String>,
}

/// One actor/film credit from the appearance list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Appearance {
    #[serde(alias = "Actor")]
    pub actor: Option<String>,
    #[serde(alias = "Film", alias = "title")]
    pub film: Option<String>,
    #[serde(alias = "Year")]
    pub year: Option<i32>,
}

/// Final fact row with names replaced by foreign keys
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFact {
    pub movie_id: MovieId,
    pub title: Option<String>,
    pub homepage: Option<String>,
    pub budget: Option<i64>,
    pub popularity: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub director_id: SurrogateId,
    pub revenue: Option<i64>,
    pub runtime: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub tagline: Option<String>,
    pub original_language_short: String,
    pub overview: Option<String>,
    pub status_id: SurrogateId,
}

impl_tabular!(MovieFact {
    movie_id: Int,
    title: Text,
    homepage: Text,
    budget: Int,
    popularity: Float,
    release_date: Date,
    director_id: Int,
    revenue: Int,
    runtime: Float,
    vote_average: Float,
    vote_count: Int,
    tagline: Text,
    original_language_short: Text,
    overview: Text,
    status_id: Int,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub genre_id: SurrogateId,
    pub genre: String,
}
impl_tabular!(Genre { genre_id: Int, genre: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieGenre {
    pub movie_id: MovieId,
    pub genre_id: SurrogateId,
}
impl_tabular!(MovieGenre { movie_id: Int, genre_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    pub director_id: SurrogateId,
    pub director_name: String,
}
impl_tabular!(Director { director_id: Int, director_name: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDirector {
    pub movie_id: MovieId,
    pub director_id: SurrogateId,
}
impl_tabular!(MovieDirector { movie_id: Int, director_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionCompany {
    pub production_company_id: i64,
    pub production_company: String,
}
impl_tabular!(ProductionCompany { production_company_id: Int, production_company: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieProductionCompany {
    pub production_company_id: i64,
    pub movie_id: MovieId,
}
impl_tabular!(MovieProductionCompany { production_company_id: Int, movie_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionCountry {
    /// ISO 3166-1 code
    pub production_country_id: String,
    pub production_country: String,
}
impl_tabular!(ProductionCountry { production_country_id: Text, production_country: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieProductionCountry {
    pub production_country_id: String,
    pub movie_id: MovieId,
}
impl_tabular!(MovieProductionCountry { production_country_id: Text, movie_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    /// Person id from the source credits
    pub crew_member_id: i64,
    pub name: String,
}
impl_tabular!(CrewMember { crew_member_id: Int, name: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCrew {
    pub movie_id: MovieId,
    pub crew_member_id: i64,
}
impl_tabular!(MovieCrew { movie_id: Int, crew_member_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub department_id: SurrogateId,
    pub department_name: String,
}
impl_tabular!(Department { department_id: Int, department_name: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub job_id: SurrogateId,
    pub job: String,
    pub department_id: SurrogateId,
}
impl_tabular!(Job { job_id: Int, job: Text, department_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewJob {
    pub crew_member_id: i64,
    pub job_id: SurrogateId,
}
impl_tabular!(CrewJob { crew_member_id: Int, job_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code
    pub language_short: String,
    pub language: String,
}
impl_tabular!(Language { language_short: Text, language: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSpokenLanguage {
    pub language_short: String,
    pub movie_id: MovieId,
}
impl_tabular!(MovieSpokenLanguage { language_short: Text, movie_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub status_id: SurrogateId,
    pub status: String,
}
impl_tabular!(Status { status_id: Int, status: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieStatus {
    pub movie_id: MovieId,
    pub status_id: SurrogateId,
}
impl_tabular!(MovieStatus { movie_id: Int, status_id: Int });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub actor_id: SurrogateId,
    pub actor: String,
}
impl_tabular!(Actor { actor_id: Int, actor: Text });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieActor {
    pub actor_id: SurrogateId,
    pub movie_id: MovieId,
}
impl_tabular!(MovieActor { actor_id: Int, movie_id: Int });
