//! Benchmark for the normalization core
//!
//! Builds a synthetic catalog in memory and times each stage separately, so the
//! numbers exclude CSV parsing and sink I/O.

use reelforge::dates::normalize_dates;
use reelforge::extract::{extract_actors, extract_crew, extract_genres, extract_production_companies};
use reelforge::loader::RawDatasets;
use reelforge::normalize;
use reelforge::types::{Appearance, RawMovie};
use std::time::Instant;

const MOVIES: usize = 5000;
const GENRES: [&str; 6] = ["Action", "Drama", "Comedy", "Thriller", "Science Fiction", "Animation"];
const DEPARTMENTS: [(&str, &str); 4] = [
    ("Directing", "Director"),
    ("Writing", "Screenplay"),
    ("Sound", "Original Music Composer"),
    ("Production", "Producer"),
];

fn synthetic_movie(i: usize) -> RawMovie {
    let crew: Vec<String> = (0..8)
        .map(|c| {
            let (department, job) = DEPARTMENTS[c % DEPARTMENTS.len()];
            format!(
                "{{'id': {}, 'name': 'Person {}', 'department': '{}', 'job': '{}', 'credit_id': '52fe{}'}}",
                (i * 3 + c) % 20_000,
                (i * 3 + c) % 20_000,
                department,
                job,
                i * 10 + c
            )
        })
        .collect();

    RawMovie {
        id: i as i64 + 1,
        title: Some(format!("Movie {}", i)),
        budget: Some((i as i64 % 200) * 1_000_000),
        popularity: Some(i as f64 / 7.0),
        release_date: Some(format!("{}-{:02}-{:02}", 1950 + i % 70, 1 + i % 12, 1 + i % 28)),
        revenue: Some(i as i64 * 12_345),
        runtime: Some(90.0 + (i % 60) as f64),
        vote_average: Some((i % 100) as f64 / 10.0),
        vote_count: Some(i as i64 % 5000),
        original_language: Some("en".to_string()),
        genres: Some(format!("{} {}", GENRES[i % GENRES.len()], GENRES[(i + 1) % GENRES.len()])),
        director: Some(format!("Director {}", i % 800)),
        status: Some(if i % 10 == 0 { "Post Production" } else { "Released" }.to_string()),
        spoken_languages: Some(r#"[{"iso_639_1": "en", "name": "English"}, {"iso_639_1": "fr", "name": "Français"}]"#.to_string()),
        production_companies: Some(format!(
            r#"[{{"name": "Studio {}", "id": {}}}, {{"name": "Studio {}", "id": {}}}]"#,
            i % 300,
            i % 300,
            (i + 7) % 300,
            (i + 7) % 300
        )),
        production_countries: Some(r#"[{"iso_3166_1": "US", "name": "United States of America"}]"#.to_string()),
        crew: Some(format!("[{}]", crew.join(", "))),
        ..Default::default()
    }
}

fn synthetic_datasets() -> RawDatasets {
    let movies: Vec<RawMovie> = (0..MOVIES).map(synthetic_movie).collect();
    let appearances = (0..MOVIES * 4)
        .map(|a| {
            let i = a % MOVIES;
            Appearance {
                actor: Some(format!("Actor {}", a % 6000)),
                film: Some(format!("Movie {}", i)),
                // every fifth credit carries a year that matches nothing
                year: Some((1950 + i % 70) as i32 + if a % 5 == 0 { 1 } else { 0 }),
            }
        })
        .collect();
    RawDatasets { movies, appearances }
}

fn main() -> anyhow::Result<()> {
    println!("=== Reelforge Normalization Benchmark ===\n");

    let raw = synthetic_datasets();
    println!(
        "Synthetic input: {} movies, {} appearances\n",
        raw.movies.len(),
        raw.appearances.len()
    );

    let start = Instant::now();
    let movies = normalize_dates(raw.movies.clone())?;
    println!("Date parsing:          {:?}", start.elapsed());

    let start = Instant::now();
    let (genres, _) = extract_genres(&movies);
    println!("Genres ({:>5}):        {:?}", genres.len(), start.elapsed());

    let start = Instant::now();
    let (companies, _) = extract_production_companies(&movies)?;
    println!("Companies ({:>5}):     {:?}", companies.len(), start.elapsed());

    let start = Instant::now();
    let crew = extract_crew(&movies)?;
    println!("Crew ({:>5}):          {:?}", crew.crew.len(), start.elapsed());

    let start = Instant::now();
    let (actors, links) = extract_actors(&raw.appearances, &movies);
    println!(
        "Actors ({:>5}, {:>5} links): {:?}",
        actors.len(),
        links.len(),
        start.elapsed()
    );

    println!("\n=== Full normalize ===\n");
    let start = Instant::now();
    let catalog = normalize(raw)?;
    let duration = start.elapsed();

    println!("Time: {:?}", duration);
    println!("Fact rows: {}", catalog.movies.len());
    println!(
        "Average per movie: {:.2}μs",
        duration.as_micros() as f64 / MOVIES as f64
    );

    Ok(())
}
