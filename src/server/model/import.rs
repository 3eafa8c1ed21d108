//! Records of the import source files.
//!
//! The layouts follow the files as published: `data_sources.json` and
//! `species.json` come from the name resolver and use camelCase keys,
//! `stations.json` uses the column headings of the transcribed station table.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::server::{
    error::import::ImportError,
    model::{
        data_source::{default_updated_at, UpsertDataSourceParams},
        species::UpsertSpeciesParams,
        station::UpsertStationParams,
    },
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRecord {
    pub id: i32,
    pub title: String,
    pub title_short: String,
    pub description: Option<String>,
    pub curation: String,
    pub record_count: Option<i32>,
    pub updated_at: Option<String>,
    pub is_outlink_ready: bool,
    #[serde(rename = "homeURL")]
    pub home_url: Option<String>,
    #[serde(rename = "URL_template")]
    pub url_template: Option<String>,
}

impl DataSourceRecord {
    /// `updatedAt` may carry a time of day; only the date is kept.
    pub fn into_params(self) -> Result<UpsertDataSourceParams, ImportError> {
        let updated_at = match self.updated_at.as_deref().map(str::trim) {
            None | Some("") => default_updated_at(),
            Some(value) => {
                let date = value.get(..10).unwrap_or(value);
                NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                    ImportError::InvalidRecord {
                        record: format!("data source {}", self.id),
                        reason: format!("updatedAt '{}': {}", value, e),
                    }
                })?
            }
        };

        Ok(UpsertDataSourceParams {
            id: self.id,
            title: self.title,
            title_short: self.title_short,
            description: self.description,
            curation: self.curation,
            record_count: self.record_count,
            updated_at,
            is_out_link_ready: self.is_outlink_ready,
            home_url: self.home_url,
            url_template: self.url_template,
        })
    }
}

/// `species.json`: resolver output keyed by the record id of the input name.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesFile {
    pub species: BTreeMap<String, SpeciesEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesEntry {
    /// Name as transcribed from the report.
    pub input: Option<String>,
    pub input_id: String,
    /// Absent when the resolver found no match.
    pub best_result: Option<BestResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestResult {
    pub data_source_id: i32,
    pub record_id: String,
    pub current_record_id: Option<String>,
    pub matched_name: String,
    pub matched_canonical_simple: Option<String>,
    pub matched_canonical_full: Option<String>,
    pub current_name: Option<String>,
    pub current_canonical_simple: Option<String>,
    pub current_canonical_full: Option<String>,
    pub classification_path: Option<String>,
    pub classification_ranks: Option<String>,
    pub classification_ids: Option<String>,
    pub outlink: Option<String>,
}

impl SpeciesEntry {
    /// Species row for a resolved name, `None` when the resolver found no match.
    pub fn to_params(&self) -> Option<UpsertSpeciesParams> {
        let best = self.best_result.as_ref()?;

        Some(UpsertSpeciesParams {
            id: self.input_id.clone(),
            record_id: best.record_id.clone(),
            current_record_id: best.current_record_id.clone(),
            matched_name: best.matched_name.clone(),
            matched_canonical_simple_name: best.matched_canonical_simple.clone(),
            matched_canonical_full_name: best.matched_canonical_full.clone(),
            current_name: best.current_name.clone(),
            current_canonical_simple_name: best.current_canonical_simple.clone(),
            current_canonical_full_name: best.current_canonical_full.clone(),
            classification_path: best.classification_path.clone(),
            classification_ranks: best.classification_ranks.clone(),
            classification_ids: best.classification_ids.clone(),
            outlink: best.outlink.clone(),
            data_source_id: best.data_source_id,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub name: String,
    #[serde(rename = "Decimal Longitude")]
    pub longitude: f64,
    #[serde(rename = "Decimal Latitude")]
    pub latitude: f64,
    #[serde(rename = "Sediment sample")]
    pub sediment_sample: Option<String>,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Water body")]
    pub water_body: String,
    #[serde(rename = "Sea Area")]
    pub sea_area: Option<String>,
    #[serde(rename = "Place")]
    pub place: Option<String>,
    /// `dd/mm/YYYY`
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "FAOarea")]
    pub fao_area: i32,
    #[serde(rename = "Gear")]
    pub gear: Option<String>,
    #[serde(rename = "Depth (fathoms)")]
    pub depth_fathoms: Option<i32>,
    #[serde(rename = "Bottom water temperature (C)")]
    pub bottom_water_temp_c: Option<f64>,
    #[serde(rename = "Bottom water depth D (fathoms)")]
    pub bottom_water_depth_fathoms: Option<i32>,
    #[serde(rename = "Specific Gravity at bottom")]
    pub specific_gravity_at_bottom: Option<f64>,
    #[serde(rename = "Surface temp (C)")]
    pub surface_temp_c: Option<f64>,
    #[serde(rename = "Specific Gravity at surface")]
    pub specific_gravity_at_surface: Option<f64>,
    #[serde(rename = "Temp (F) at Fathoms", default)]
    pub water_temp_at_depth_fathoms: BTreeMap<String, Option<f64>>,
    #[serde(rename = "HathiTrust")]
    pub hathitrust: HathiTrustRecord,
    #[serde(rename = "Species", default)]
    pub species: Vec<StationSpeciesRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HathiTrustRecord {
    #[serde(rename = "Text")]
    pub text: String,
    /// `[section, "first-last"]` page ranges of the station in the report.
    #[serde(rename = "Range", default)]
    pub range: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationSpeciesRecord {
    #[serde(rename = "recordId")]
    pub record_id: Option<String>,
}

/// Row of `HathiTrust/sections.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRecord {
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Url")]
    pub url: String,
}

impl StationRecord {
    /// Converts the record into station values.
    ///
    /// # Arguments
    /// - `order` - 1-based position of the station in the file
    /// - `sections` - HathiTrust base URL per report section
    ///
    /// # Returns
    /// - `Ok(UpsertStationParams)` - Station values with page URLs resolved
    /// - `Err(ImportError::InvalidRecord)` - Bad date, unknown section or malformed page range
    pub fn to_params(
        &self,
        order: i32,
        sections: &HashMap<String, String>,
    ) -> Result<UpsertStationParams, ImportError> {
        let invalid = |reason: String| ImportError::InvalidRecord {
            record: format!("station {}", self.name),
            reason,
        };

        let date = NaiveDate::parse_from_str(self.date.trim(), "%d/%m/%Y")
            .map_err(|e| invalid(format!("date '{}': {}", self.date, e)))?;

        let hathitrust_urls = self
            .hathitrust
            .range
            .iter()
            .map(|(section, pages)| hathitrust_url(sections, section, pages).map_err(&invalid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UpsertStationParams {
            name: self.name.clone(),
            order,
            sediment_sample: self.sediment_sample.clone(),
            longitude: self.longitude,
            latitude: self.latitude,
            location: self.location.clone(),
            water_body: self.water_body.clone(),
            sea_area: self.sea_area.clone(),
            place: self.place.clone(),
            date,
            fao_area: self.fao_area,
            gear: self.gear.clone(),
            depth_fathoms: self.depth_fathoms,
            bottom_water_temp_c: self.bottom_water_temp_c,
            bottom_water_depth_fathoms: self.bottom_water_depth_fathoms,
            specific_gravity_at_bottom: self.specific_gravity_at_bottom,
            surface_temp_c: self.surface_temp_c,
            specific_gravity_at_surface: self.specific_gravity_at_surface,
            water_temp_c_at_depth_fathoms: self.water_temp_at_depth_fathoms.clone(),
            text: self.hathitrust.text.clone(),
            hathitrust_urls,
        })
    }

    /// Record ids of the species found at the station, first occurrence only.
    pub fn species_record_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for record_id in self.species.iter().filter_map(|sp| sp.record_id.as_deref()) {
            if !record_id.is_empty() && !ids.contains(&record_id) {
                ids.push(record_id);
            }
        }
        ids
    }
}

/// Page viewer URL for the first page of a range. HathiTrust sequence
/// numbers are zero based.
fn hathitrust_url(
    sections: &HashMap<String, String>,
    section: &str,
    pages: &str,
) -> Result<String, String> {
    let url = sections
        .get(section)
        .ok_or_else(|| format!("unknown HathiTrust section '{}'", section))?;

    let first_page: i64 = pages
        .split('-')
        .next()
        .map(str::trim)
        .and_then(|page| page.parse().ok())
        .ok_or_else(|| format!("page range '{}'", pages))?;

    Ok(format!("{}?urlappend=%3Bseq={}", url, first_page - 1))
}
