//! Production companies and production countries
//!
//! Both keep the identifier the source provides (company id, ISO 3166-1 code)
//! instead of minting one.

use crate::embedded::{for_each_record, CompanyRecord, CountryRecord};
use crate::error::Result;
use crate::keys::{FirstSeen, LinkSet};
use crate::types::{
    Movie, MovieProductionCompany, MovieProductionCountry, ProductionCompany, ProductionCountry,
};

/// Build `production_companies` and `movies_production_companies`
pub fn extract_production_companies(
    movies: &[Movie],
) -> Result<(Vec<ProductionCompany>, Vec<MovieProductionCompany>)> {
    let mut companies = FirstSeen::new();
    let mut links = LinkSet::new();

    let rows = movies
        .iter()
        .map(|m| (m.id, m.production_companies.as_deref()));
    for_each_record("production_companies", rows, |movie_id, record: CompanyRecord| {
        companies.insert_with(&record.id, || record.name.clone());
        links.insert(record.id, movie_id);
        Ok(())
    })?;

    let companies = companies
        .into_entries()
        .into_iter()
        .map(|(production_company_id, production_company)| ProductionCompany {
            production_company_id,
            production_company,
        })
        .collect();
    let links = links
        .into_pairs()
        .into_iter()
        .map(|(production_company_id, movie_id)| MovieProductionCompany {
            production_company_id,
            movie_id,
        })
        .collect();

    Ok((companies, links))
}

/// Build `production_countries` and `movies_production_countries`
pub fn extract_production_countries(
    movies: &[Movie],
) -> Result<(Vec<ProductionCountry>, Vec<MovieProductionCountry>)> {
    let mut countries = FirstSeen::new();
    let mut links = LinkSet::new();

    let rows = movies
        .iter()
        .map(|m| (m.id, m.production_countries.as_deref()));
    for_each_record("production_countries", rows, |movie_id, record: CountryRecord| {
        countries.insert_with(&record.iso_3166_1, || record.name.clone());
        links.insert(record.iso_3166_1, movie_id);
        Ok(())
    })?;

    let countries = countries
        .into_entries()
        .into_iter()
        .map(|(production_country_id, production_country)| ProductionCountry {
            production_country_id,
            production_country,
        })
        .collect();
    let links = links
        .into_pairs()
        .into_iter()
        .map(|(production_country_id, movie_id)| MovieProductionCountry {
            production_country_id,
            movie_id,
        })
        .collect();

    Ok((countries, links))
}
