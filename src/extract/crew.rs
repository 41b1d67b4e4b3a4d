//! Crew credits: departments, jobs and the people holding them
//!
//! A job is identified by its name *and* its department, so "Producer" in
//! Production and "Producer" in Sound are two jobs.

use crate::embedded::{for_each_record, CrewRecord};
use crate::error::{NormalizeError, Result};
use crate::escape::decode_escapes;
use crate::keys::{FirstSeen, LinkSet, SurrogateId, SurrogateKeys};
use crate::types::{CrewJob, CrewMember, Department, Job, Movie, MovieCrew, MovieId};

/// Everything derived from the crew column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrewTables {
    pub movies_crew: Vec<MovieCrew>,
    pub crew: Vec<CrewMember>,
    pub departments: Vec<Department>,
    pub jobs: Vec<Job>,
    pub crew_jobs: Vec<CrewJob>,
}

pub fn extract_crew(movies: &[Movie]) -> Result<CrewTables> {
    // Pass 1: parse every credit and mint departments
    let mut credits: Vec<(MovieId, CrewRecord)> = Vec::new();
    let mut departments: SurrogateKeys<String> = SurrogateKeys::new();

    let rows = movies.iter().map(|m| (m.id, m.crew.as_deref()));
    for_each_record("crew", rows, |movie_id, record: CrewRecord| {
        departments.get_or_create(&record.department);
        credits.push((movie_id, record));
        Ok(())
    })?;

    // Pass 2: resolve each credit's job against the department table
    let mut jobs: SurrogateKeys<(String, SurrogateId)> = SurrogateKeys::new();
    let mut members = FirstSeen::new();
    let mut movies_crew = LinkSet::new();
    let mut crew_jobs = LinkSet::new();

    for (movie_id, record) in &credits {
        let department_id =
            departments
                .get(&record.department)
                .ok_or_else(|| NormalizeError::UnknownDepartment {
                    job: record.job.clone(),
                    department: record.department.clone(),
                })?;
        let job_id = jobs.get_or_create(&(record.job.clone(), department_id));

        members.insert_with(&record.id, || decode_escapes(&record.name).into_owned());
        movies_crew.insert(*movie_id, record.id);
        crew_jobs.insert(record.id, job_id);
    }

    Ok(CrewTables {
        movies_crew: movies_crew
            .into_pairs()
            .into_iter()
            .map(|(movie_id, crew_member_id)| MovieCrew {
                movie_id,
                crew_member_id,
            })
            .collect(),
        crew: members
            .into_entries()
            .into_iter()
            .map(|(crew_member_id, name)| CrewMember {
                crew_member_id,
                name,
            })
            .collect(),
        departments: departments
            .into_entries()
            .map(|(department_id, department_name)| Department {
                department_id,
                department_name,
            })
            .collect(),
        jobs: jobs
            .into_entries()
            .map(|(job_id, (job, department_id))| Job {
                job_id,
                job,
                department_id,
            })
            .collect(),
        crew_jobs: crew_jobs
            .into_pairs()
            .into_iter()
            .map(|(crew_member_id, job_id)| CrewJob {
                crew_member_id,
                job_id,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, crew: &str) -> Movie {
        Movie {
            id,
            crew: Some(crew.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_job_name_in_two_departments() {
        let movies = vec![movie(
            1,
            r#"[{"id": 10, "name": "Jon Landau", "department": "Production", "job": "Producer"},
                {"id": 11, "name": "Chris Boyes", "department": "Sound", "job": "Producer"}]"#,
        )];
        let tables = extract_crew(&movies).unwrap();

        assert_eq!(
            tables.departments,
            vec![
                Department { department_id: 1, department_name: "Production".to_string() },
                Department { department_id: 2, department_name: "Sound".to_string() },
            ]
        );
        assert_eq!(
            tables.jobs,
            vec![
                Job { job_id: 1, job: "Producer".to_string(), department_id: 1 },
                Job { job_id: 2, job: "Producer".to_string(), department_id: 2 },
            ]
        );
        assert_eq!(
            tables.crew_jobs,
            vec![
                CrewJob { crew_member_id: 10, job_id: 1 },
                CrewJob { crew_member_id: 11, job_id: 2 },
            ]
        );
    }

    #[test]
    fn test_links_are_deduplicated() {
        let movies = vec![
            movie(
                1,
                "[{'id': 2710, 'name': 'James Cameron', 'department': 'Writing', 'job': 'Writer'},
                  {'id': 2710, 'name': 'James Cameron', 'department': 'Directing', 'job': 'Director'}]",
            ),
            movie(2, "[{'id': 2710, 'name': 'James Cameron', 'department': 'Writing', 'job': 'Writer'}]"),
        ];
        let tables = extract_crew(&movies).unwrap();

        assert_eq!(tables.crew, vec![CrewMember { crew_member_id: 2710, name: "James Cameron".to_string() }]);
        assert_eq!(
            tables.movies_crew,
            vec![
                MovieCrew { movie_id: 1, crew_member_id: 2710 },
                MovieCrew { movie_id: 2, crew_member_id: 2710 },
            ]
        );
        assert_eq!(tables.crew_jobs.len(), 2);
        assert_eq!(tables.jobs.len(), 2);
    }

    #[test]
    fn test_crew_names_are_decoded() {
        let movies = vec![movie(
            1,
            r#"[{"id": 5, "name": "Bj\\u00f6rn Stein", "department": "Crew", "job": "Stunts"}]"#,
        )];
        let tables = extract_crew(&movies).unwrap();
        assert_eq!(tables.crew[0].name, "Björn Stein");
    }

    #[test]
    fn test_missing_crew_contributes_nothing() {
        let movies = vec![Movie { id: 1, ..Default::default() }];
        assert_eq!(extract_crew(&movies).unwrap(), CrewTables::default());
    }
}
