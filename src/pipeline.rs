//! Run orchestration
//!
//! `normalize` is the pure core: raw datasets in, every normalized table out.
//! `write_catalog` hands the result to a sink in a fixed order and stops at the
//! first failure.

use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::assemble::assemble_movies;
use crate::config::DatasetFiles;
use crate::dates::normalize_dates;
use crate::error::{NormalizeError, Result};
use crate::extract::{
    extract_actors, extract_crew, extract_directors, extract_genres, extract_languages,
    extract_production_companies, extract_production_countries, extract_statuses, CrewTables,
};
use crate::loader::{load_datasets, RawDatasets};
use crate::sink::TableSink;
use crate::table::Table;
use crate::types::*;

/// Every table produced by one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub movies: Vec<MovieFact>,
    pub genres: Vec<Genre>,
    pub movies_genres: Vec<MovieGenre>,
    pub directors: Vec<Director>,
    pub movies_directors: Vec<MovieDirector>,
    pub production_companies: Vec<ProductionCompany>,
    pub movies_production_companies: Vec<MovieProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub movies_production_countries: Vec<MovieProductionCountry>,
    pub crew: CrewTables,
    pub languages: Vec<Language>,
    pub movies_spoken_languages: Vec<MovieSpokenLanguage>,
    pub statuses: Vec<Status>,
    pub movies_statuses: Vec<MovieStatus>,
    pub actors: Vec<Actor>,
    pub movies_actors: Vec<MovieActor>,
}

impl Catalog {
    /// Tables to load, in load order.
    ///
    /// Director and status links are folded into `movies` as foreign keys and are
    /// not loaded on their own.
    pub fn tables(&self) -> Vec<(&'static str, Table)> {
        vec![
            ("movies_spoken_languages", Table::from_rows(&self.movies_spoken_languages)),
            ("movies_genres", Table::from_rows(&self.movies_genres)),
            ("movies_actors", Table::from_rows(&self.movies_actors)),
            ("movies_production_countries", Table::from_rows(&self.movies_production_countries)),
            ("movies_production_companies", Table::from_rows(&self.movies_production_companies)),
            ("movies_crew", Table::from_rows(&self.crew.movies_crew)),
            ("movies", Table::from_rows(&self.movies)),
            ("crew_jobs", Table::from_rows(&self.crew.crew_jobs)),
            ("jobs", Table::from_rows(&self.crew.jobs)),
            ("crew", Table::from_rows(&self.crew.crew)),
            ("departments", Table::from_rows(&self.crew.departments)),
            ("directors", Table::from_rows(&self.directors)),
            ("production_countries", Table::from_rows(&self.production_countries)),
            ("production_companies", Table::from_rows(&self.production_companies)),
            ("statuses", Table::from_rows(&self.statuses)),
            ("languages", Table::from_rows(&self.languages)),
            ("genres", Table::from_rows(&self.genres)),
            ("actors", Table::from_rows(&self.actors)),
        ]
    }
}

/// Turn the raw datasets into the normalized catalog
pub fn normalize(raw: RawDatasets) -> Result<Catalog> {
    let RawDatasets { movies, appearances } = raw;

    let movies = normalize_dates(movies)?;
    info!(movies = movies.len(), "parsed release dates");

    let (genres, movies_genres) = extract_genres(&movies);
    info!(genres = genres.len(), links = movies_genres.len(), "extracted genres");

    let (directors, movies_directors) = extract_directors(&movies);
    info!(directors = directors.len(), links = movies_directors.len(), "extracted directors");

    let (production_companies, movies_production_companies) = extract_production_companies(&movies)?;
    info!(
        companies = production_companies.len(),
        links = movies_production_companies.len(),
        "extracted production companies"
    );

    let (production_countries, movies_production_countries) = extract_production_countries(&movies)?;
    info!(
        countries = production_countries.len(),
        links = movies_production_countries.len(),
        "extracted production countries"
    );

    let crew = extract_crew(&movies)?;
    info!(
        members = crew.crew.len(),
        departments = crew.departments.len(),
        jobs = crew.jobs.len(),
        "extracted crew"
    );

    let (languages, movies_spoken_languages) = extract_languages(&movies)?;
    info!(languages = languages.len(), links = movies_spoken_languages.len(), "extracted languages");

    let (statuses, movies_statuses) = extract_statuses(&movies);
    info!(statuses = statuses.len(), "extracted statuses");

    let (actors, movies_actors) = extract_actors(&appearances, &movies);
    info!(actors = actors.len(), links = movies_actors.len(), "extracted actors");

    let facts = assemble_movies(&movies, &movies_directors, &languages, &movies_statuses);
    info!(
        movies = facts.len(),
        dropped = movies.len().saturating_sub(facts.len()),
        "assembled movies"
    );

    Ok(Catalog {
        movies: facts,
        genres,
        movies_genres,
        directors,
        movies_directors,
        production_companies,
        movies_production_companies,
        production_countries,
        movies_production_countries,
        crew,
        languages,
        movies_spoken_languages,
        statuses,
        movies_statuses,
        actors,
        movies_actors,
    })
}

/// Write every table of `catalog`; the first failed write aborts the rest
pub fn write_catalog<S: TableSink + ?Sized>(catalog: &Catalog, sink: &mut S) -> Result<()> {
    for (name, table) in catalog.tables() {
        sink.write(&table, name).map_err(|source| NormalizeError::Sink {
            table: name.to_string(),
            source,
        })?;
        info!(rows = table.len(), "Table {} updated", name);
    }
    Ok(())
}

/// Full run: load, normalize and replace every table in the sink
pub fn run<P: AsRef<Path>, S: TableSink + ?Sized>(
    data_dir: P,
    files: &DatasetFiles,
    sink: &mut S,
) -> Result<Catalog> {
    let started = Instant::now();

    let raw = load_datasets(data_dir, files)?;
    let catalog = normalize(raw)?;
    write_catalog(&catalog, sink)?;

    info!(
        "Data has been loaded. Elapsed time: {:.2} sec",
        started.elapsed().as_secs_f64()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, SinkError};
    use crate::table::Cell;

    fn raw_movie(id: i64, title: &str, date: &str, language: &str, status: Option<&str>) -> RawMovie {
        RawMovie {
            id,
            title: Some(title.to_string()),
            release_date: Some(date.to_string()),
            original_language: Some(language.to_string()),
            status: status.map(str::to_string),
            director: Some("James Cameron".to_string()),
            genres: Some("Action Science Fiction".to_string()),
            spoken_languages: Some(format!("[{{'iso_639_1': '{}', 'name': 'Lang'}}]", language)),
            crew: Some(
                r#"[{"id": 2710, "name": "James Cameron", "department": "Directing", "job": "Director"}]"#
                    .to_string(),
            ),
            production_companies: Some(r#"[{"name": "Lightstorm Entertainment", "id": 574}]"#.to_string()),
            production_countries: Some(r#"[{"iso_3166_1": "US", "name": "United States of America"}]"#.to_string()),
            ..Default::default()
        }
    }

    fn datasets() -> RawDatasets {
        RawDatasets {
            movies: vec![
                raw_movie(19995, "Avatar", "2009-12-10", "en", Some("Released")),
                raw_movie(597, "Titanic", "1997-11-18", "en", None),
            ],
            appearances: vec![
                Appearance {
                    actor: Some("Sam Worthington".to_string()),
                    film: Some("Avatar".to_string()),
                    year: Some(2009),
                },
                Appearance {
                    actor: Some("Kate Winslet".to_string()),
                    film: Some("Titanic".to_string()),
                    year: Some(1998),
                },
            ],
        }
    }

    #[test]
    fn test_normalize_end_to_end() {
        let catalog = normalize(datasets()).unwrap();

        // Titanic has no status, so it is filtered out of the fact table only
        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.movies[0].movie_id, 19995);
        assert_eq!(catalog.movies[0].director_id, 1);
        assert_eq!(catalog.movies[0].status_id, 1);
        assert_eq!(catalog.movies_directors.len(), 2);

        let genres: Vec<_> = catalog.genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(genres, vec!["Action", "Science Fiction"]);
        assert_eq!(catalog.movies_genres.len(), 4);

        // the Titanic credit points at 1998, the catalog says 1997
        assert_eq!(catalog.actors, vec![Actor { actor_id: 1, actor: "Sam Worthington".to_string() }]);

        assert_eq!(catalog.crew.crew_jobs.len(), 1);
        assert_eq!(catalog.crew.movies_crew.len(), 2);
        assert_eq!(catalog.production_companies.len(), 1);
        assert_eq!(catalog.movies_production_countries.len(), 2);
    }

    #[test]
    fn test_rerun_is_identical() {
        let first = normalize(datasets()).unwrap();
        let second = normalize(datasets()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_date_aborts_before_extraction() {
        let mut raw = datasets();
        raw.movies[1].release_date = Some("sometime".to_string());
        assert!(matches!(normalize(raw), Err(NormalizeError::DateParse { movie_id: 597, .. })));
    }

    #[test]
    fn test_write_order_and_contents() {
        let catalog = normalize(datasets()).unwrap();
        let mut sink = MemorySink::new();
        write_catalog(&catalog, &mut sink).unwrap();

        let names = sink.names();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "movies_spoken_languages");
        assert_eq!(names[6], "movies");
        assert_eq!(names[17], "actors");

        let movies = sink.get("movies").unwrap();
        assert_eq!(movies.columns()[0].name, "movie_id");
        assert_eq!(movies.columns()[12].name, "original_language_short");
        assert_eq!(movies.rows()[0][0], Cell::Int(19995));
    }

    struct FailingSink {
        fail_on: &'static str,
        written: Vec<String>,
    }

    impl TableSink for FailingSink {
        fn write(&mut self, _table: &Table, name: &str) -> std::result::Result<(), SinkError> {
            if name == self.fail_on {
                return Err(SinkError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )));
            }
            self.written.push(name.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_stops_remaining_writes() {
        let catalog = normalize(datasets()).unwrap();
        let mut sink = FailingSink {
            fail_on: "movies",
            written: Vec::new(),
        };

        let err = write_catalog(&catalog, &mut sink).unwrap_err();
        assert!(matches!(err, NormalizeError::Sink { ref table, .. } if table == "movies"));
        assert_eq!(sink.written.len(), 6);
    }
}
