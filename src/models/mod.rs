//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! a las tablas SQLite del panel de administración.

pub mod admin;
pub mod attendance;
pub mod driver;
pub mod expense;
pub mod income;
pub mod report;
pub mod task;
pub mod vehicle;
