//! One-shot import of the expedition data set.
//!
//! Expected layout under the data directory:
//!
//! ```text
//! Oceans1876/data_sources.json
//! Oceans1876/species.json          (or Oceans1876_subset/ in testing mode)
//! Oceans1876/stations.json
//! HathiTrust/sections.csv
//! ```
//!
//! Every input file is read and validated before the first write, so a
//! malformed file leaves the database untouched. Rows are upserted, which
//! makes the import safe to re-run. Station-species links are rebuilt from
//! scratch on each run.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::server::{
    config::Config,
    data::{
        crud::CrudRepository, data_source::DataSourceRepository, species::SpeciesRepository,
        station::StationRepository,
    },
    error::{config::ConfigError, import::ImportError, AppError},
    model::{
        data_source::UpsertDataSourceParams,
        import::{DataSourceRecord, SectionRecord, SpeciesFile, StationRecord},
        station::UpsertStationParams,
    },
    service::user::UserService,
};

const FULL_SET: &str = "Oceans1876";
const TEST_SET: &str = "Oceans1876_subset";

/// Counts of what an import run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub superuser_created: bool,
    pub data_sources: usize,
    pub species: usize,
    /// Input names the resolver could not match.
    pub unresolved_species: usize,
    pub stations: usize,
    pub station_species_links: usize,
}

/// Validated input, ready to be written.
struct ImportInput {
    data_sources: Vec<UpsertDataSourceParams>,
    species: SpeciesFile,
    stations: Vec<StationImport>,
}

struct StationImport {
    station: UpsertStationParams,
    /// Ids of the resolved species recorded at the station.
    species_ids: Vec<String>,
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Runs the full import.
    ///
    /// # Arguments
    /// - `data_dir` - Root of the data set
    /// - `testing` - Import the small `Oceans1876_subset` species and stations
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - What was written
    /// - `Err(AppError::ConfigErr)` - `FIRST_SUPERUSER` or its password is not configured
    /// - `Err(AppError::ImportErr)` - An input file is missing, malformed or inconsistent
    /// - `Err(AppError::DbErr)` - Database error while writing
    pub async fn run(&self, data_dir: &Path, testing: bool) -> Result<ImportSummary, AppError> {
        let input = read_input(data_dir, testing)?;
        self.check_data_sources(&input).await?;
        let mut summary = ImportSummary::default();

        summary.superuser_created = self.create_superuser().await?;
        summary.data_sources = self.import_data_sources(input.data_sources).await?;

        let (species, unresolved) = self.import_species(&input.species).await?;
        summary.species = species;
        summary.unresolved_species = unresolved;

        let (stations, links) = self.import_stations(input.stations).await?;
        summary.stations = stations;
        summary.station_species_links = links;

        tracing::info!(?summary, "Import finished");

        Ok(summary)
    }

    /// Fails when a resolved species points at a data source that is neither
    /// in the input nor already stored.
    async fn check_data_sources(&self, input: &ImportInput) -> Result<(), AppError> {
        let mut known: HashSet<i32> = input.data_sources.iter().map(|ds| ds.id).collect();
        let stored = CrudRepository::<entity::prelude::DataSource>::new(self.db);

        for (record_id, entry) in &input.species.species {
            let Some(best) = &entry.best_result else {
                continue;
            };
            if known.contains(&best.data_source_id) {
                continue;
            }
            if stored.get(best.data_source_id).await?.is_none() {
                return Err(ImportError::InvalidRecord {
                    record: format!("species {}", record_id),
                    reason: format!("unknown data source {}", best.data_source_id),
                }
                .into());
            }
            known.insert(best.data_source_id);
        }

        Ok(())
    }

    async fn create_superuser(&self) -> Result<bool, AppError> {
        let email = self
            .config
            .first_superuser
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("FIRST_SUPERUSER".to_string()))?;
        let password = self
            .config
            .first_superuser_password
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("FIRST_SUPERUSER_PASSWORD".to_string()))?;

        let created = UserService::new(self.db)
            .ensure_superuser(email, password)
            .await?;
        if created {
            tracing::info!("Superuser created: {}", email);
        } else {
            tracing::info!("Superuser already exists: {}", email);
        }

        Ok(created)
    }

    async fn import_data_sources(
        &self,
        data_sources: Vec<UpsertDataSourceParams>,
    ) -> Result<usize, AppError> {
        let repo = DataSourceRepository::new(self.db);
        let count = data_sources.len();

        for params in data_sources {
            tracing::debug!("Importing data source {}: {}", params.id, params.title);
            repo.upsert(params).await?;
        }

        tracing::info!("Imported {} data sources", count);

        Ok(count)
    }

    async fn import_species(&self, file: &SpeciesFile) -> Result<(usize, usize), AppError> {
        let repo = SpeciesRepository::new(self.db);
        let (mut imported, mut unresolved) = (0, 0);

        for (record_id, entry) in &file.species {
            let Some(params) = entry.to_params() else {
                tracing::debug!(
                    "No match for {} ({})",
                    entry.input.as_deref().unwrap_or("?"),
                    record_id
                );
                unresolved += 1;
                continue;
            };

            repo.upsert(params).await?;
            imported += 1;
        }

        tracing::info!(
            "Imported {} species, {} names without a match",
            imported,
            unresolved
        );

        Ok((imported, unresolved))
    }

    async fn import_stations(
        &self,
        stations: Vec<StationImport>,
    ) -> Result<(usize, usize), AppError> {
        let repo = StationRepository::new(self.db);
        let count = stations.len();

        let removed = repo.clear_species_links().await?;
        tracing::debug!("Removed {} station-species links", removed);

        let mut links = 0;
        for StationImport {
            station,
            species_ids,
        } in stations
        {
            let station = repo.upsert(station).await?;
            repo.link_species(&station.name, &species_ids).await?;
            links += species_ids.len();
        }

        tracing::info!("Imported {} stations with {} species links", count, links);

        Ok((count, links))
    }
}

fn read_input(data_dir: &Path, testing: bool) -> Result<ImportInput, ImportError> {
    let set = if testing { TEST_SET } else { FULL_SET };

    let data_sources: Vec<DataSourceRecord> =
        read_json(&data_dir.join(FULL_SET).join("data_sources.json"))?;
    let species: SpeciesFile = read_json(&data_dir.join(set).join("species.json"))?;
    let stations: Vec<StationRecord> = read_json(&data_dir.join(set).join("stations.json"))?;
    let sections = read_sections(&data_dir.join("HathiTrust").join("sections.csv"))?;

    let data_sources = data_sources
        .into_iter()
        .map(DataSourceRecord::into_params)
        .collect::<Result<Vec<_>, _>>()?;

    let stations = stations
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let order = i32::try_from(index + 1).map_err(|_| ImportError::InvalidRecord {
                record: format!("station {}", record.name),
                reason: "too many stations".to_string(),
            })?;

            Ok(StationImport {
                station: record.to_params(order, &sections)?,
                species_ids: resolved_species_ids(record, &species),
            })
        })
        .collect::<Result<Vec<_>, ImportError>>()?;

    Ok(ImportInput {
        data_sources,
        species,
        stations,
    })
}

/// Maps the species record ids of a station to species ids, skipping names
/// the resolver could not match.
fn resolved_species_ids(record: &StationRecord, species: &SpeciesFile) -> Vec<String> {
    let mut species_ids: Vec<String> = Vec::new();

    for record_id in record.species_record_ids() {
        match species.species.get(record_id) {
            Some(entry) if entry.best_result.is_some() => {
                if !species_ids.contains(&entry.input_id) {
                    species_ids.push(entry.input_id.clone());
                }
            }
            _ => tracing::debug!(
                "Station {} lists unresolved species {}",
                record.name,
                record_id
            ),
        }
    }

    species_ids
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ImportError> {
    let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ImportError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the HathiTrust base URL of every report section.
fn read_sections(path: &Path) -> Result<HashMap<String, String>, ImportError> {
    let csv_error = |source| ImportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;

    reader
        .deserialize::<SectionRecord>()
        .map(|row| row.map(|row| (row.section, row.url)).map_err(csv_error))
        .collect()
}
