//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses CSV (with a header row) from a string slice and upserts
//! rows into the corresponding table.
//!
//! # CSV Formats
//!
//! - **Materials**: `ID,NAME,TYPE,CRITICALITY_LEVEL,SUPPLY_RISK,TOTAL_DEMAND`
//! - **Locations**: `ID,NAME,TYPE,LAT,LNG,COUNTRY,REGION,CAPACITY,THROUGHPUT_CAPACITY,EU_STRATEGIC_IMPORTANCE,IS_EU_FACILITY`
//! - **Facilities**: `ID,NAME,FACILITY_TYPE,LAT,LNG,COUNTRY,REGION,OUTPUT_CAPACITY,EU_STRATEGIC_IMPORTANCE`
//! - **Routes**: `ID,ORIGIN_ID,DESTINATION_ID,MATERIAL_ID,VOLUME,TRANSIT_TIME,RISK_LEVEL,ALTERNATIVE_AVAILABLE`

use crate::Database;
use anyhow::Context;
use csv::StringRecord;
use rusqlite::params;

fn text(r: &StringRecord, idx: usize) -> &str {
    r.get(idx).unwrap_or("").trim()
}

/// Empty cells become NULL; anything else must parse.
fn optional_int(r: &StringRecord, idx: usize) -> anyhow::Result<Option<i64>> {
    let s = text(r, idx);
    if s.is_empty() {
        return Ok(None);
    }
    let v = s
        .parse::<i64>()
        .with_context(|| format!("column {} is not an integer: {:?}", idx, s))?;
    Ok(Some(v))
}

fn required_int(r: &StringRecord, idx: usize) -> anyhow::Result<i64> {
    optional_int(r, idx)?.with_context(|| format!("column {} is empty", idx))
}

fn required_float(r: &StringRecord, idx: usize) -> anyhow::Result<f64> {
    let s = text(r, idx);
    s.parse::<f64>()
        .with_context(|| format!("column {} is not a number: {:?}", idx, s))
}

fn flag(r: &StringRecord, idx: usize) -> bool {
    matches!(text(r, idx).to_lowercase().as_str(), "true" | "t" | "1" | "yes")
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

impl Database {
    /// Load critical materials.
    ///
    /// # Example CSV
    /// ```text
    /// ID,NAME,TYPE,CRITICALITY_LEVEL,SUPPLY_RISK,TOTAL_DEMAND
    /// 1,Lithium,battery_material,5,high,100000
    /// ```
    pub fn load_materials(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).records() {
            let r = result?;
            conn.execute(
                "INSERT OR REPLACE INTO materials
                 (id, name, type, criticality_level, supply_risk, total_demand)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    required_int(&r, 0)?,
                    text(&r, 1),
                    text(&r, 2),
                    optional_int(&r, 3)?,
                    text(&r, 4),
                    optional_int(&r, 5)?,
                ],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} materials", count);
        Ok(())
    }

    /// Load extraction sites and ports.
    ///
    /// # Example CSV
    /// ```text
    /// ID,NAME,TYPE,LAT,LNG,COUNTRY,REGION,CAPACITY,THROUGHPUT_CAPACITY,EU_STRATEGIC_IMPORTANCE,IS_EU_FACILITY
    /// 8,Port of Rotterdam,port,51.9244,4.4777,Netherlands,EU,,469000000,5,true
    /// ```
    pub fn load_locations(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).records() {
            let r = result?;
            conn.execute(
                "INSERT OR REPLACE INTO locations
                 (id, name, type, lat, lng, country, region, capacity,
                  throughput_capacity, eu_strategic_importance, is_eu_facility)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    required_int(&r, 0)?,
                    text(&r, 1),
                    text(&r, 2),
                    required_float(&r, 3)?,
                    required_float(&r, 4)?,
                    text(&r, 5),
                    text(&r, 6),
                    optional_int(&r, 7)?,
                    optional_int(&r, 8)?,
                    optional_int(&r, 9)?,
                    flag(&r, 10),
                ],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} locations", count);
        Ok(())
    }

    /// Load EU manufacturing facilities.
    ///
    /// # Example CSV
    /// ```text
    /// ID,NAME,FACILITY_TYPE,LAT,LNG,COUNTRY,REGION,OUTPUT_CAPACITY,EU_STRATEGIC_IMPORTANCE
    /// 2,Northvolt Ett,battery_plant,65.5845,22.1567,Sweden,EU,60000,5
    /// ```
    pub fn load_facilities(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).records() {
            let r = result?;
            conn.execute(
                "INSERT OR REPLACE INTO manufacturing_facilities
                 (id, name, facility_type, lat, lng, country, region,
                  output_capacity, eu_strategic_importance)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    required_int(&r, 0)?,
                    text(&r, 1),
                    text(&r, 2),
                    required_float(&r, 3)?,
                    required_float(&r, 4)?,
                    text(&r, 5),
                    text(&r, 6),
                    optional_int(&r, 7)?,
                    optional_int(&r, 8)?,
                ],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} manufacturing facilities", count);
        Ok(())
    }

    /// Load supply routes. Origin and destination reference `locations.id`.
    ///
    /// # Example CSV
    /// ```text
    /// ID,ORIGIN_ID,DESTINATION_ID,MATERIAL_ID,VOLUME,TRANSIT_TIME,RISK_LEVEL,ALTERNATIVE_AVAILABLE
    /// 1,4,8,1,50000,21,medium,true
    /// ```
    pub fn load_routes(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for result in reader(csv_data).records() {
            let r = result?;
            conn.execute(
                "INSERT OR REPLACE INTO supply_routes
                 (id, origin_id, destination_id, material_id, volume,
                  transit_time, risk_level, alternative_available)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    required_int(&r, 0)?,
                    optional_int(&r, 1)?,
                    optional_int(&r, 2)?,
                    optional_int(&r, 3)?,
                    optional_int(&r, 4)?,
                    optional_int(&r, 5)?,
                    text(&r, 6),
                    flag(&r, 7),
                ],
            )?;
            count += 1;
        }
        log::info!("loader: Loaded {} supply routes", count);
        Ok(())
    }
}
