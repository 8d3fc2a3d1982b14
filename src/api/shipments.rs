//! Mock shipment fleets, one endpoint per transport mode.
//!
//! Static data standing in for the tracking feeds; the wire shapes match
//! what the dashboard already consumes.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirShipment {
    pub id: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub status: &'static str,
    pub temperature: f64,
    pub altitude: u32,
    pub eta: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaShipment {
    pub id: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub status: &'static str,
    pub sea_temp: f64,
    pub wave_height: f64,
    pub eta: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadShipment {
    pub id: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub status: &'static str,
    pub speed: u32,
    pub fuel_level: u32,
    pub eta: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RailShipment {
    pub id: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub status: &'static str,
    pub carriages: u32,
    pub avg_speed: u32,
    pub eta: &'static str,
}

/// Fleet-wide counters for the dashboard overview
#[derive(Debug, Serialize)]
pub struct ShipmentSummary {
    pub air: u32,
    pub ship: u32,
    pub road: u32,
    pub rail: u32,
    pub active: u32,
    pub delayed: u32,
    pub delivered: u32,
}

pub(crate) fn air_fleet() -> Vec<AirShipment> {
    vec![
        AirShipment {
            id: "AIR123",
            origin: "Dubai",
            destination: "Bangalore",
            status: "In Transit",
            temperature: 22.5,
            altitude: 32000,
            eta: "2025-11-06T18:30:00Z",
        },
        AirShipment {
            id: "AIR124",
            origin: "Singapore",
            destination: "Delhi",
            status: "Delivered",
            temperature: 23.0,
            altitude: 0,
            eta: "2025-11-04T14:00:00Z",
        },
    ]
}

pub(crate) fn sea_fleet() -> Vec<SeaShipment> {
    vec![
        SeaShipment {
            id: "SHIP900",
            origin: "Chennai Port",
            destination: "Colombo",
            status: "Anchored",
            sea_temp: 27.0,
            wave_height: 1.5,
            eta: "2025-11-07T10:00:00Z",
        },
        SeaShipment {
            id: "SHIP901",
            origin: "Mumbai",
            destination: "Dubai",
            status: "In Transit",
            sea_temp: 29.0,
            wave_height: 2.1,
            eta: "2025-11-09T15:00:00Z",
        },
    ]
}

pub(crate) fn road_fleet() -> Vec<RoadShipment> {
    vec![
        RoadShipment {
            id: "ROAD550",
            origin: "Chennai",
            destination: "Coimbatore",
            status: "En Route",
            speed: 65,
            fuel_level: 60,
            eta: "2025-11-05T22:00:00Z",
        },
        RoadShipment {
            id: "ROAD551",
            origin: "Bangalore",
            destination: "Hyderabad",
            status: "Stopped",
            speed: 0,
            fuel_level: 40,
            eta: "2025-11-06T08:00:00Z",
        },
    ]
}

pub(crate) fn rail_fleet() -> Vec<RailShipment> {
    vec![
        RailShipment {
            id: "RAIL330",
            origin: "Delhi",
            destination: "Chennai",
            status: "In Transit",
            carriages: 25,
            avg_speed: 70,
            eta: "2025-11-06T06:00:00Z",
        },
        RailShipment {
            id: "RAIL331",
            origin: "Mumbai",
            destination: "Kolkata",
            status: "Delayed",
            carriages: 30,
            avg_speed: 50,
            eta: "2025-11-07T12:00:00Z",
        },
    ]
}

/// GET /api/air-shipments
pub async fn air_shipments() -> Json<Vec<AirShipment>> {
    Json(air_fleet())
}

/// GET /api/ship-shipments
pub async fn ship_shipments() -> Json<Vec<SeaShipment>> {
    Json(sea_fleet())
}

/// GET /api/road-shipments
pub async fn road_shipments() -> Json<Vec<RoadShipment>> {
    Json(road_fleet())
}

/// GET /api/rail-shipments
pub async fn rail_shipments() -> Json<Vec<RailShipment>> {
    Json(rail_fleet())
}

/// GET /api/all-shipments
pub async fn all_shipments() -> Json<ShipmentSummary> {
    Json(ShipmentSummary {
        air: 12,
        ship: 8,
        road: 20,
        rail: 15,
        active: 30,
        delayed: 5,
        delivered: 20,
    })
}
