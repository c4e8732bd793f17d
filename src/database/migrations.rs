//! Migración de esquemas antiguos
//!
//! Versiones anteriores del panel usaban otras tablas:
//! - `drivers(driver_id, name, license_number, mobile)`
//! - `vehicles(vehicle_id, vehicle_name, petrol_expense, toll_expense,
//!   maintenance_expense, month)` con los totales guardados en el vehículo
//! - `vehicles(vehicle_id, name)` + `expenses(expense_id, vehicle_id, date,
//!   petrol, toll, maintenance)` referenciando el vehículo por id
//!
//! Las tablas antiguas se renombran, se crea el esquema actual, se copian
//! las filas y se eliminan. Los totales por vehículo pasan a ser filas de
//! gasto normales. Todo ocurre dentro de la transacción de `initialize`.

use chrono::Utc;
use sqlx::SqliteConnection;

const MIGRATED_TOTALS_NOTE: &str = "Migrated from stored vehicle totals";

/// Qué tablas antiguas hay en la base de datos
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LegacyLayout {
    pub drivers_by_driver_id: bool,
    pub vehicles_with_totals: bool,
    pub vehicles_by_vehicle_id: bool,
    pub expenses_by_vehicle_id: bool,
}

impl LegacyLayout {
    pub fn any(&self) -> bool {
        self.drivers_by_driver_id
            || self.vehicles_with_totals
            || self.vehicles_by_vehicle_id
            || self.expenses_by_vehicle_id
    }

    fn legacy_vehicles(&self) -> bool {
        self.vehicles_with_totals || self.vehicles_by_vehicle_id
    }
}

async fn table_columns(conn: &mut SqliteConnection, table: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?1)")
        .bind(table)
        .fetch_all(&mut *conn)
        .await
}

pub async fn detect_legacy_layout(conn: &mut SqliteConnection) -> Result<LegacyLayout, sqlx::Error> {
    let drivers = table_columns(conn, "drivers").await?;
    let vehicles = table_columns(conn, "vehicles").await?;
    let expenses = table_columns(conn, "expenses").await?;

    let has = |columns: &[String], name: &str| columns.iter().any(|c| c == name);

    let vehicles_with_totals = has(&vehicles, "petrol_expense");

    Ok(LegacyLayout {
        drivers_by_driver_id: has(&drivers, "driver_id"),
        vehicles_with_totals,
        vehicles_by_vehicle_id: !vehicles_with_totals && has(&vehicles, "vehicle_id"),
        expenses_by_vehicle_id: has(&expenses, "vehicle_id"),
    })
}

pub async fn rename_legacy_tables(conn: &mut SqliteConnection, legacy: &LegacyLayout) -> Result<(), sqlx::Error> {
    if legacy.drivers_by_driver_id {
        sqlx::query("ALTER TABLE drivers RENAME TO legacy_drivers")
            .execute(&mut *conn)
            .await?;
    }
    if legacy.legacy_vehicles() {
        sqlx::query("ALTER TABLE vehicles RENAME TO legacy_vehicles")
            .execute(&mut *conn)
            .await?;
    }
    if legacy.expenses_by_vehicle_id {
        sqlx::query("ALTER TABLE expenses RENAME TO legacy_expenses")
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

pub async fn copy_legacy_rows(conn: &mut SqliteConnection, legacy: &LegacyLayout) -> Result<(), sqlx::Error> {
    let now = Utc::now();
    let today = now.date_naive();

    if legacy.drivers_by_driver_id {
        sqlx::query(
            r#"
            INSERT INTO drivers (id, name, license_number, contact, created_at)
            SELECT driver_id, COALESCE(name, ''), COALESCE(license_number, ''), mobile, ?1
            FROM legacy_drivers
            "#,
        )
        .bind(now)
        .execute(&mut *conn)
        .await?;
    }

    if legacy.vehicles_with_totals {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO vehicles (vehicle_number, created_at)
            SELECT DISTINCT COALESCE(NULLIF(TRIM(vehicle_name), ''), 'vehicle-' || vehicle_id), ?1
            FROM legacy_vehicles
            "#,
        )
        .bind(now)
        .execute(&mut *conn)
        .await?;

        // Un total guardado con mes `YYYY-MM` se fecha el día 1 de ese mes;
        // un mes ilegible se fecha hoy
        sqlx::query(
            r#"
            INSERT INTO expenses (vehicle_number, date, petrol, toll, maintenance, tips, note, created_at)
            SELECT
                COALESCE(NULLIF(TRIM(vehicle_name), ''), 'vehicle-' || vehicle_id),
                CASE
                    WHEN length(month) = 7 THEN COALESCE(date(month || '-01'), ?2)
                    ELSE COALESCE(date(month), ?2)
                END,
                COALESCE(petrol_expense, 0.0),
                COALESCE(toll_expense, 0.0),
                COALESCE(maintenance_expense, 0.0),
                0.0,
                ?3,
                ?1
            FROM legacy_vehicles
            WHERE COALESCE(petrol_expense, 0.0) + COALESCE(toll_expense, 0.0) + COALESCE(maintenance_expense, 0.0) > 0
            "#,
        )
        .bind(now)
        .bind(today)
        .bind(MIGRATED_TOTALS_NOTE)
        .execute(&mut *conn)
        .await?;
    }

    if legacy.vehicles_by_vehicle_id {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO vehicles (id, vehicle_number, created_at)
            SELECT vehicle_id, COALESCE(NULLIF(TRIM(name), ''), 'vehicle-' || vehicle_id), ?1
            FROM legacy_vehicles
            "#,
        )
        .bind(now)
        .execute(&mut *conn)
        .await?;
    }

    if legacy.expenses_by_vehicle_id {
        // Con tabla antigua de vehículos (de cualquiera de las dos formas)
        // el id se resuelve a su nombre; si no, queda `vehicle-<id>`
        let (vehicle_number, join) = if legacy.legacy_vehicles() {
            let name_column = if legacy.vehicles_with_totals {
                "v.vehicle_name"
            } else {
                "v.name"
            };
            (
                format!("COALESCE(NULLIF(TRIM({name_column}), ''), 'vehicle-' || e.vehicle_id)"),
                "LEFT JOIN legacy_vehicles v ON v.vehicle_id = e.vehicle_id",
            )
        } else {
            ("'vehicle-' || e.vehicle_id".to_string(), "")
        };

        let statement = format!(
            r#"
            INSERT INTO expenses (vehicle_number, date, petrol, toll, maintenance, tips, note, created_at)
            SELECT
                {vehicle_number},
                COALESCE(date(substr(e.date, 1, 10)), ?2),
                COALESCE(e.petrol, 0.0),
                COALESCE(e.toll, 0.0),
                COALESCE(e.maintenance, 0.0),
                0.0,
                NULL,
                ?1
            FROM legacy_expenses e
            {join}
            "#
        );

        sqlx::query(&statement)
            .bind(now)
            .bind(today)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

pub async fn drop_legacy_tables(conn: &mut SqliteConnection, legacy: &LegacyLayout) -> Result<(), sqlx::Error> {
    // legacy_expenses primero: puede tener FK hacia legacy_vehicles
    if legacy.expenses_by_vehicle_id {
        sqlx::query("DROP TABLE legacy_expenses").execute(&mut *conn).await?;
    }
    if legacy.legacy_vehicles() {
        sqlx::query("DROP TABLE legacy_vehicles").execute(&mut *conn).await?;
    }
    if legacy.drivers_by_driver_id {
        sqlx::query("DROP TABLE legacy_drivers").execute(&mut *conn).await?;
    }
    Ok(())
}
