//! SQL schema definitions for the in-memory SQLite database.
//!
//! Mirrors the hosted store's tables closely enough that the same four
//! collection queries can be answered locally.

/// Returns the full SQL schema as a single batch string.
///
/// Tables:
/// - `materials` - Critical materials and their EU demand
/// - `locations` - Extraction sites and ports
/// - `manufacturing_facilities` - EU plants consuming the materials
/// - `supply_routes` - Origin/destination/material triples with volume and risk
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS materials (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        criticality_level INTEGER CHECK (criticality_level BETWEEN 1 AND 5),
        supply_risk TEXT,
        total_demand INTEGER
    );

    CREATE TABLE IF NOT EXISTS locations (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        lat REAL NOT NULL,
        lng REAL NOT NULL,
        country TEXT NOT NULL,
        region TEXT NOT NULL,
        capacity INTEGER,
        throughput_capacity INTEGER,
        eu_strategic_importance INTEGER,
        is_eu_facility INTEGER NOT NULL DEFAULT 0
    );
    CREATE INDEX IF NOT EXISTS idx_locations_eu ON locations(is_eu_facility);

    CREATE TABLE IF NOT EXISTS manufacturing_facilities (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        facility_type TEXT NOT NULL,
        lat REAL NOT NULL,
        lng REAL NOT NULL,
        country TEXT NOT NULL,
        region TEXT NOT NULL,
        output_capacity INTEGER,
        eu_strategic_importance INTEGER
    );

    CREATE TABLE IF NOT EXISTS supply_routes (
        id INTEGER PRIMARY KEY,
        origin_id INTEGER REFERENCES locations(id),
        destination_id INTEGER REFERENCES locations(id),
        material_id INTEGER REFERENCES materials(id),
        volume INTEGER,
        transit_time INTEGER,
        risk_level TEXT,
        alternative_available INTEGER NOT NULL DEFAULT 0
    );
    "#
}
