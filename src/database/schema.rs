//! Esquema SQLite
//!
//! Todas las tablas se crean de forma idempotente al arrancar. Las fechas
//! se guardan como texto ISO `YYYY-MM-DD` y se comparan lexicográficamente.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::database::migrations;
use crate::repositories::admin_repository::AdminRepository;
use crate::services::auth_service;
use crate::utils::errors::AppResult;

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS admins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS drivers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        license_number TEXT NOT NULL,
        contact TEXT,
        backup_contact TEXT,
        assigned_vehicle TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_number TEXT NOT NULL UNIQUE,
        model TEXT,
        insurance_expiry TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_number TEXT NOT NULL,
        date TEXT NOT NULL,
        petrol REAL NOT NULL DEFAULT 0,
        toll REAL NOT NULL DEFAULT 0,
        maintenance REAL NOT NULL DEFAULT 0,
        tips REAL NOT NULL DEFAULT 0,
        note TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS income (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount REAL NOT NULL,
        note TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        driver_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_number TEXT NOT NULL,
        description TEXT NOT NULL,
        due_date TEXT,
        status TEXT NOT NULL DEFAULT 'Pending',
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses (date)",
    "CREATE INDEX IF NOT EXISTS idx_income_date ON income (date)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance (date)",
];

/// Crear las tablas que falten
pub async fn create_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Preparar la base de datos: migrar tablas antiguas, crear el esquema
/// actual y dar de alta al administrador si no existe
pub async fn initialize(pool: &SqlitePool, config: &EnvironmentConfig) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let legacy = migrations::detect_legacy_layout(&mut tx).await?;
    if legacy.any() {
        info!("🔄 Esquema antiguo detectado: {:?}", legacy);
        migrations::rename_legacy_tables(&mut tx, &legacy).await?;
    }

    create_schema(&mut tx).await?;

    if legacy.any() {
        migrations::copy_legacy_rows(&mut tx, &legacy).await?;
        migrations::drop_legacy_tables(&mut tx, &legacy).await?;
        info!("✅ Migración de esquema antiguo completada");
    }

    tx.commit().await?;

    seed_admin(pool, config).await?;

    info!("✅ Esquema de base de datos listo");
    Ok(())
}

/// Crear la fila del administrador con la contraseña ya hasheada
async fn seed_admin(pool: &SqlitePool, config: &EnvironmentConfig) -> AppResult<()> {
    let repository = AdminRepository::new(pool.clone());

    if repository.count().await? > 0 {
        return Ok(());
    }

    let password_hash = auth_service::hash_password(&config.admin_password, config.bcrypt_cost)?;
    repository.create(&config.admin_username, &password_hash).await?;

    info!("👤 Administrador '{}' creado", config.admin_username);
    Ok(())
}
