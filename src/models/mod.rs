//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL, y el motor de filtrado puro sobre ellos.

pub mod query;
pub mod vehicle;
