//! Registro de vehículos - API JSON
//!
//! CRUD de vehículos con búsqueda, filtrado y paginación sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
