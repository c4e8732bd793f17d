use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use transport_admin::config::database::DatabaseConfig;
use transport_admin::config::EnvironmentConfig;
use transport_admin::create_app;
use transport_admin::database;
use transport_admin::state::AppState;

struct TestApp {
    app: Router,
    pool: sqlx::SqlitePool,
}

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

async fn create_test_app() -> TestApp {
    let config = EnvironmentConfig {
        bcrypt_cost: 4,
        ..EnvironmentConfig::default()
    };
    let pool = DatabaseConfig::create_test_pool().await.unwrap();
    database::initialize(&pool, &config).await.unwrap();

    TestApp {
        app: create_app(AppState::new(pool.clone(), config)),
        pool,
    }
}

impl TestApp {
    async fn request(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

        TestResponse { status, headers, body }
    }

    async fn login(&self) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "username": "admin", "password": "admin123" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()["token"].as_str().unwrap().to_string()
    }

    async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app.request(Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_login_logout_cycle() {
    let app = create_test_app().await;

    let status = app.request(Method::GET, "/api/auth/session", None, None).await;
    assert_eq!(status.json()["state"], "logged_out");
    assert_eq!(status.json()["view"], "login");

    let token = app.login().await;

    let status = app.request(Method::GET, "/api/auth/session", Some(&token), None).await;
    assert_eq!(status.json()["state"], "logged_in");
    assert_eq!(status.json()["view"], "dashboard");
    assert_eq!(status.json()["username"], "admin");

    let logout = app.request(Method::POST, "/api/auth/logout", Some(&token), None).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.json()["state"], "logged_out");

    // El token sigue firmado pero su sesión ya no existe
    let after = app.request(Method::GET, "/api/drivers", Some(&token), None).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_wrong_password_stays_logged_out() {
    let app = create_test_app().await;

    for _ in 0..3 {
        let response = app
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "username": "admin", "password": "wrong" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["code"], "UNAUTHORIZED");
    }

    // Reintentos ilimitados: la contraseña correcta sigue funcionando
    app.login().await;
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let app = create_test_app().await;

    for uri in ["/api/dashboard", "/api/menu", "/api/drivers", "/api/export/drivers"] {
        let response = app.request(Method::GET, uri, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let garbage = app.request(Method::GET, "/api/drivers", Some("not-a-token"), None).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_driver_visible_once() {
    let app = create_test_app().await;
    let token = app.login().await;

    let empty = app.request(Method::GET, "/api/drivers", Some(&token), None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.json()["data"], json!([]));
    assert!(empty.json()["message"].is_string());

    let created = app
        .request(
            Method::POST,
            "/api/drivers",
            Some(&token),
            Some(json!({
                "name": "Ravi Kumar",
                "license_number": "TN-0420110012345",
                "contact": "9840012345",
                "backup_contact": "  ",
                "assigned_vehicle": "TN01AB1234"
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json()["data"]["name"], "Ravi Kumar");
    assert_eq!(created.json()["data"]["backup_contact"], Value::Null);

    let listed = app.request(Method::GET, "/api/drivers", Some(&token), None).await;
    let drivers = listed.json()["data"].as_array().unwrap().clone();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0]["license_number"], "TN-0420110012345");
}

#[tokio::test]
async fn test_driver_requires_name() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .request(
            Method::POST,
            "/api/drivers",
            Some(&token),
            Some(json!({ "name": "   ", "license_number": "DL-1" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");
    assert_eq!(app.count("drivers").await, 0);
}

#[tokio::test]
async fn test_duplicate_vehicle_number_is_rejected() {
    let app = create_test_app().await;
    let token = app.login().await;

    let body = json!({ "vehicle_number": "TN01AB1234", "model": "Tata Ace", "insurance_expiry": "2030-01-01" });

    let first = app.request(Method::POST, "/api/vehicles", Some(&token), Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request(Method::POST, "/api/vehicles", Some(&token), Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.json()["code"], "CONFLICT");

    assert_eq!(app.count("vehicles").await, 1);
}

#[tokio::test]
async fn test_vehicle_numbers_fall_back_to_placeholders() {
    let app = create_test_app().await;
    let token = app.login().await;

    let placeholders = app.request(Method::GET, "/api/vehicles/numbers", Some(&token), None).await;
    let json = placeholders.json();
    assert_eq!(json["placeholder"], true);
    assert_eq!(json["vehicle_numbers"].as_array().unwrap().len(), 20);
    assert_eq!(json["vehicle_numbers"][0], "VEH-01");

    app.request(
        Method::POST,
        "/api/vehicles",
        Some(&token),
        Some(json!({ "vehicle_number": "KA05MN0001" })),
    )
    .await;

    let real = app.request(Method::GET, "/api/vehicles/numbers", Some(&token), None).await;
    assert_eq!(real.json()["placeholder"], false);
    assert_eq!(real.json()["vehicle_numbers"], json!(["KA05MN0001"]));
}

#[tokio::test]
async fn test_update_insurance_for_unknown_vehicle_reports_zero_rows() {
    let app = create_test_app().await;
    let token = app.login().await;

    let missing = app
        .request(
            Method::PUT,
            "/api/vehicles/NOPE-1/insurance",
            Some(&token),
            Some(json!({ "insurance_expiry": "2031-05-01" })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::OK);
    assert_eq!(missing.json()["data"]["rows_affected"], 0);

    app.request(
        Method::POST,
        "/api/vehicles",
        Some(&token),
        Some(json!({ "vehicle_number": "TN09ZZ0001" })),
    )
    .await;

    let updated = app
        .request(
            Method::PUT,
            "/api/vehicles/TN09ZZ0001/insurance",
            Some(&token),
            Some(json!({ "insurance_expiry": "2031-05-01" })),
        )
        .await;
    assert_eq!(updated.json()["data"]["rows_affected"], 1);

    let vehicles = app.request(Method::GET, "/api/vehicles", Some(&token), None).await;
    assert_eq!(vehicles.json()["data"][0]["insurance_expiry"], "2031-05-01");
}

#[tokio::test]
async fn test_negative_expense_is_rejected() {
    let app = create_test_app().await;
    let token = app.login().await;

    let response = app
        .request(
            Method::POST,
            "/api/expenses",
            Some(&token),
            Some(json!({ "vehicle_number": "TN01", "date": "2024-03-01", "petrol": -5.0 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("expenses").await, 0);
}

#[tokio::test]
async fn test_vehicle_report_sums_inclusive_range() {
    let app = create_test_app().await;
    let token = app.login().await;

    let expenses = [
        ("A", "2024-02-29", 999.0, 0.0),
        ("A", "2024-03-01", 100.0, 10.0),
        ("A", "2024-03-31", 50.0, 5.0),
        ("B", "2024-03-15", 300.0, 0.0),
        ("B", "2024-04-01", 999.0, 0.0),
    ];
    for (vehicle, date, petrol, toll) in expenses {
        let response = app
            .request(
                Method::POST,
                "/api/expenses",
                Some(&token),
                Some(json!({ "vehicle_number": vehicle, "date": date, "petrol": petrol, "toll": toll })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let report = app
        .request(
            Method::GET,
            "/api/reports/vehicle-expenses?start=2024-03-01&end=2024-03-31",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(report.status, StatusCode::OK);

    let json = report.json();
    let vehicles = json["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 2);
    // Orden por total descendente
    assert_eq!(vehicles[0]["vehicle_number"], "B");
    assert_eq!(vehicles[0]["total"], 300.0);
    assert_eq!(vehicles[1]["vehicle_number"], "A");
    assert_eq!(vehicles[1]["petrol"], 150.0);
    assert_eq!(vehicles[1]["toll"], 15.0);
    assert_eq!(vehicles[1]["total"], 165.0);
    assert_eq!(json["grand_total"], 465.0);
    assert_eq!(json["chart"]["stacked"], true);

    let totals = app
        .request(Method::GET, "/api/vehicles/A/expense-totals", Some(&token), None)
        .await;
    assert_eq!(totals.json()["data"]["total"], 1164.0);
    assert_eq!(totals.json()["data"]["entries"], 3);

    let inverted = app
        .request(
            Method::GET,
            "/api/reports/vehicle-expenses?start=2024-04-01&end=2024-03-01",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_monthly_profit_loss() {
    let app = create_test_app().await;
    let token = app.login().await;

    app.request(
        Method::POST,
        "/api/income",
        Some(&token),
        Some(json!({ "date": "2024-03-10", "amount": 500.0 })),
    )
    .await;
    app.request(
        Method::POST,
        "/api/expenses",
        Some(&token),
        Some(json!({ "vehicle_number": "A", "date": "2024-03-05", "petrol": 150.0, "tips": 50.0 })),
    )
    .await;
    app.request(
        Method::POST,
        "/api/expenses",
        Some(&token),
        Some(json!({ "vehicle_number": "A", "date": "2024-04-02", "maintenance": 80.0 })),
    )
    .await;

    let report = app.request(Method::GET, "/api/reports/profit-loss", Some(&token), None).await;
    assert_eq!(report.status, StatusCode::OK);

    let json = report.json();
    let months = json["months"].as_array().unwrap();
    assert_eq!(months.len(), 2);

    assert_eq!(months[0]["month"], "2024-03");
    assert_eq!(months[0]["income"], 500.0);
    assert_eq!(months[0]["expenses"], 200.0);
    assert_eq!(months[0]["profit"], 300.0);

    assert_eq!(months[1]["month"], "2024-04");
    assert_eq!(months[1]["income"], 0.0);
    assert_eq!(months[1]["profit"], -80.0);

    assert_eq!(json["total_profit"], 220.0);
    assert_eq!(json["chart"]["series"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_insurance_alert_thresholds() {
    let app = create_test_app().await;
    let token = app.login().await;
    let today = Utc::now().date_naive();

    let vehicles = [
        ("EXPIRED", today - Duration::days(3)),
        ("IN-10", today + Duration::days(10)),
        ("IN-20", today + Duration::days(20)),
        ("IN-31", today + Duration::days(31)),
    ];
    for (number, expiry) in vehicles {
        app.request(
            Method::POST,
            "/api/vehicles",
            Some(&token),
            Some(json!({ "vehicle_number": number, "insurance_expiry": expiry })),
        )
        .await;
    }

    let numbers = |json: &Value, key: &str| -> Vec<String> {
        json[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["vehicle_number"].as_str().unwrap().to_string())
            .collect()
    };

    let insurance = app.request(Method::GET, "/api/insurance/alerts", Some(&token), None).await;
    assert_eq!(insurance.json()["threshold_days"], 30);
    assert_eq!(numbers(&insurance.json(), "alerts"), vec!["EXPIRED", "IN-10", "IN-20"]);

    let dashboard = app.request(Method::GET, "/api/dashboard", Some(&token), None).await;
    let summary = dashboard.json();
    assert_eq!(summary["insurance"]["threshold_days"], 10);
    assert_eq!(numbers(&summary["insurance"], "alerts"), vec!["EXPIRED", "IN-10"]);
    assert_eq!(summary["total_vehicles"], 4);
    assert_eq!(summary["welcome"], "Welcome, admin");

    let custom = app
        .request(Method::GET, "/api/insurance/alerts?days=31", Some(&token), None)
        .await;
    assert_eq!(custom.json()["alerts"].as_array().unwrap().len(), 4);

    let negative = app
        .request(Method::GET, "/api/insurance/alerts?days=-1", Some(&token), None)
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_attendance_joins_driver_name() {
    let app = create_test_app().await;
    let token = app.login().await;

    let driver = app
        .request(
            Method::POST,
            "/api/drivers",
            Some(&token),
            Some(json!({ "name": "Anbu", "license_number": "DL-7" })),
        )
        .await;
    let driver_id = driver.json()["data"]["id"].as_i64().unwrap();

    for _ in 0..2 {
        let marked = app
            .request(
                Method::POST,
                "/api/attendance",
                Some(&token),
                Some(json!({ "driver_id": driver_id, "date": "2024-06-01", "status": "Present" })),
            )
            .await;
        assert_eq!(marked.status, StatusCode::OK);
    }

    let listed = app
        .request(Method::GET, "/api/attendance?start=2024-06-01&end=2024-06-01", Some(&token), None)
        .await;
    let records = listed.json()["data"].as_array().unwrap().clone();
    // Sin unicidad por conductor y día
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["driver_name"], "Anbu");
    assert_eq!(records[0]["status"], "Present");
}

#[tokio::test]
async fn test_tasks_pending_by_default() {
    let app = create_test_app().await;
    let token = app.login().await;

    let created = app
        .request(
            Method::POST,
            "/api/tasks",
            Some(&token),
            Some(json!({ "vehicle_number": "TN01", "description": "Replace brake pads", "due_date": "2024-07-01" })),
        )
        .await;
    assert_eq!(created.json()["data"]["status"], "Pending");
    let id = created.json()["data"]["id"].as_i64().unwrap();

    let done = app
        .request(
            Method::PUT,
            &format!("/api/tasks/{}/status", id),
            Some(&token),
            Some(json!({ "status": "Completed" })),
        )
        .await;
    assert_eq!(done.json()["data"]["rows_affected"], 1);

    let pending = app.request(Method::GET, "/api/tasks", Some(&token), None).await;
    assert_eq!(pending.json()["data"], json!([]));

    let all = app.request(Method::GET, "/api/tasks?all=true", Some(&token), None).await;
    assert_eq!(all.json()["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_export_csv_download() {
    let app = create_test_app().await;
    let token = app.login().await;

    let empty = app.request(Method::GET, "/api/export/income", Some(&token), None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.text(), "id,date,amount,note,created_at\n");

    app.request(
        Method::POST,
        "/api/drivers",
        Some(&token),
        Some(json!({ "name": "Ravi, Kumar", "license_number": "DL-1" })),
    )
    .await;

    let response = app.request(Method::GET, "/api/export/drivers", Some(&token), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"drivers.csv\""
    );
    assert!(response.headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let text = response.text();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,license_number,contact,backup_contact,assigned_vehicle,created_at")
    );
    assert!(lines.next().unwrap().starts_with("1,\"Ravi, Kumar\",DL-1,,,,"));

    let unknown = app.request(Method::GET, "/api/export/vehicles", Some(&token), None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_and_views() {
    let app = create_test_app().await;
    let token = app.login().await;

    let menu = app.request(Method::GET, "/api/menu", Some(&token), None).await;
    let entries = menu.json();
    let labels: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Dashboard",
            "Driver Management",
            "Vehicle Management",
            "Expenses",
            "Attendance",
            "Income / Profit-Loss",
            "Insurance Alerts",
            "Pending Tasks",
            "Export",
        ]
    );

    for entry in entries.as_array().unwrap() {
        let path = entry["path"].as_str().unwrap();
        let view = app.request(Method::GET, path, Some(&token), None).await;
        assert_eq!(view.status, StatusCode::OK, "{}", path);
        assert_eq!(view.json()["view"], entry["slug"]);
        assert_eq!(view.json()["title"], entry["label"]);
    }

    let drivers = app.request(Method::GET, "/api/views/drivers", Some(&token), None).await;
    assert_eq!(drivers.json()["content"]["vehicle_options"]["placeholder"], true);

    let unknown = app.request(Method::GET, "/api/views/payroll", Some(&token), None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_daily_expenses_grouped_by_date() {
    let app = create_test_app().await;
    let token = app.login().await;

    let expenses = [
        json!({ "vehicle_number": "A", "date": "2024-03-05", "petrol": 100.0, "toll": 10.0 }),
        json!({ "vehicle_number": "B", "date": "2024-03-05", "maintenance": 40.0, "tips": 5.0 }),
        json!({ "vehicle_number": "A", "date": "2024-03-07", "petrol": 60.0 }),
    ];
    for expense in expenses {
        let response = app.request(Method::POST, "/api/expenses", Some(&token), Some(expense)).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let report = app
        .request(Method::GET, "/api/reports/daily-expenses", Some(&token), None)
        .await;
    assert_eq!(report.status, StatusCode::OK);

    let json = report.json();
    assert_eq!(
        json["days"],
        json!([
            { "date": "2024-03-05", "total": 155.0 },
            { "date": "2024-03-07", "total": 60.0 },
        ])
    );
    assert_eq!(json["chart"]["categories"], json!(["2024-03-05", "2024-03-07"]));
    assert_eq!(json["chart"]["series"][0]["values"], json!([155.0, 60.0]));
    assert_eq!(json["message"], Value::Null);
}

#[tokio::test]
async fn test_empty_reports_carry_informational_message() {
    let app = create_test_app().await;
    let token = app.login().await;

    let daily = app
        .request(Method::GET, "/api/reports/daily-expenses", Some(&token), None)
        .await;
    assert_eq!(daily.json()["days"], json!([]));
    assert_eq!(daily.json()["message"], "No expense data available");

    for uri in [
        "/api/reports/profit-loss",
        "/api/reports/vehicle-expenses",
        "/api/insurance/alerts",
    ] {
        let response = app.request(Method::GET, uri, Some(&token), None).await;
        assert_eq!(response.status, StatusCode::OK, "{}", uri);
        assert!(response.json()["message"].is_string(), "{}", uri);
    }

    let dashboard = app.request(Method::GET, "/api/dashboard", Some(&token), None).await;
    assert!(dashboard.json()["insurance"]["message"].is_string());
}

#[tokio::test]
async fn test_malformed_input_uses_error_envelope() {
    let app = create_test_app().await;
    let token = app.login().await;

    let missing_date = app
        .request(Method::POST, "/api/income", Some(&token), Some(json!({ "amount": 10.0 })))
        .await;
    assert_eq!(missing_date.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_date.json()["code"], "BAD_REQUEST");

    let bad_query = app
        .request(Method::GET, "/api/expenses?start=2024-13-01", Some(&token), None)
        .await;
    assert_eq!(bad_query.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_query.json()["code"], "BAD_REQUEST");

    let bad_path = app
        .request(
            Method::PUT,
            "/api/tasks/abc/status",
            Some(&token),
            Some(json!({ "status": "Completed" })),
        )
        .await;
    assert_eq!(bad_path.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_path.json()["code"], "BAD_REQUEST");

    assert_eq!(app.count("income").await, 0);
}
