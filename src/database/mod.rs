//! Módulo de base de datos
//!
//! Esquema SQLite, migración de esquemas antiguos y alta del administrador.

pub mod migrations;
pub mod schema;

pub use schema::initialize;
