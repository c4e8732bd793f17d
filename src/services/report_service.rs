//! Agregaciones de reportes
//!
//! Funciones puras sobre los totales que devuelven los repositorios:
//! cruce mensual de ingresos y gastos, gráficos de barras y alertas de
//! seguro.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::report::{
    BarChart, BarSeries, DailyExpense, InsuranceAlert, MonthlyProfitLoss, MonthlyTotal, VehicleExpenseSummary,
};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{bad_request_error, AppResult};

/// Cuántos números de relleno ofrece el selector cuando no hay vehículos
pub const PLACEHOLDER_VEHICLE_COUNT: usize = 20;

/// Cruce externo de las dos series mensuales. El lado ausente vale 0 y
/// `profit = income - expenses`. Meses en orden ascendente.
pub fn merge_monthly(expenses: &[MonthlyTotal], income: &[MonthlyTotal]) -> Vec<MonthlyProfitLoss> {
    let mut months: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for row in income {
        months.entry(row.month.as_str()).or_default().0 += row.amount;
    }
    for row in expenses {
        months.entry(row.month.as_str()).or_default().1 += row.amount;
    }

    months
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyProfitLoss {
            month: month.to_string(),
            income,
            expenses,
            profit: income - expenses,
        })
        .collect()
}

pub fn profit_loss_chart(months: &[MonthlyProfitLoss]) -> BarChart {
    BarChart {
        title: "Monthly Profit / Loss".to_string(),
        x_label: "Month".to_string(),
        y_label: "Amount".to_string(),
        categories: months.iter().map(|m| m.month.clone()).collect(),
        series: vec![
            BarSeries {
                name: "Income".to_string(),
                values: months.iter().map(|m| m.income).collect(),
            },
            BarSeries {
                name: "Expenses".to_string(),
                values: months.iter().map(|m| m.expenses).collect(),
            },
            BarSeries {
                name: "Profit".to_string(),
                values: months.iter().map(|m| m.profit).collect(),
            },
        ],
        stacked: false,
    }
}

/// Barras apiladas por categoría, un vehículo por barra, en el orden recibido
pub fn vehicle_expense_chart(vehicles: &[VehicleExpenseSummary]) -> BarChart {
    let series = |name: &str, pick: fn(&VehicleExpenseSummary) -> f64| BarSeries {
        name: name.to_string(),
        values: vehicles.iter().map(pick).collect(),
    };

    BarChart {
        title: "Expenses per Vehicle".to_string(),
        x_label: "Vehicle".to_string(),
        y_label: "Amount".to_string(),
        categories: vehicles.iter().map(|v| v.vehicle_number.clone()).collect(),
        series: vec![
            series("Petrol", |v| v.petrol),
            series("Toll", |v| v.toll),
            series("Maintenance", |v| v.maintenance),
            series("Tips", |v| v.tips),
        ],
        stacked: true,
    }
}

pub fn daily_expense_chart(days: &[DailyExpense]) -> BarChart {
    BarChart {
        title: "Daily Expenses".to_string(),
        x_label: "Date".to_string(),
        y_label: "Total Expense".to_string(),
        categories: days.iter().map(|d| d.date.to_string()).collect(),
        series: vec![BarSeries {
            name: "Total Expense".to_string(),
            values: days.iter().map(|d| d.total).collect(),
        }],
        stacked: false,
    }
}

/// Fecha límite `today + days` para las alertas de seguro
pub fn insurance_cutoff(today: NaiveDate, days: i64) -> AppResult<NaiveDate> {
    if days < 0 {
        return Err(bad_request_error("days must be zero or positive"));
    }
    Duration::try_days(days)
        .and_then(|offset| today.checked_add_signed(offset))
        .ok_or_else(|| bad_request_error("days is out of range"))
}

/// Vehículos con vencimiento `<= cutoff`, límite incluido
pub fn insurance_alerts(vehicles: Vec<Vehicle>, today: NaiveDate, cutoff: NaiveDate) -> Vec<InsuranceAlert> {
    vehicles
        .into_iter()
        .filter_map(|vehicle| {
            let expiry = vehicle.insurance_expiry?;
            (expiry <= cutoff).then(|| InsuranceAlert {
                vehicle_number: vehicle.vehicle_number,
                model: vehicle.model,
                insurance_expiry: expiry,
                days_remaining: (expiry - today).num_days(),
            })
        })
        .collect()
}

/// Números de relleno para el selector: `VEH-01` … `VEH-20`
pub fn placeholder_vehicle_numbers() -> Vec<String> {
    (1..=PLACEHOLDER_VEHICLE_COUNT).map(|n| format!("VEH-{:02}", n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn month(month: &str, amount: f64) -> MonthlyTotal {
        MonthlyTotal {
            month: month.to_string(),
            amount,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vehicle(number: &str, expiry: Option<NaiveDate>) -> Vehicle {
        Vehicle {
            id: 1,
            vehicle_number: number.to_string(),
            model: Some("Tata Ace".to_string()),
            insurance_expiry: expiry,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_profit_for_month_with_both_series() {
        let rows = merge_monthly(&[month("2024-03", 200.0)], &[month("2024-03", 500.0)]);
        assert_eq!(
            rows,
            vec![MonthlyProfitLoss {
                month: "2024-03".to_string(),
                income: 500.0,
                expenses: 200.0,
                profit: 300.0,
            }]
        );
    }

    #[test]
    fn test_missing_side_counts_as_zero() {
        let rows = merge_monthly(
            &[month("2024-01", 120.0), month("2024-02", 80.0)],
            &[month("2024-02", 100.0), month("2024-04", 50.0)],
        );

        let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-04"]);

        assert_eq!(rows[0].income, 0.0);
        assert_eq!(rows[0].profit, -120.0);
        assert_eq!(rows[1].profit, 20.0);
        assert_eq!(rows[2].expenses, 0.0);
        assert_eq!(rows[2].profit, 50.0);
    }

    #[test]
    fn test_vehicle_chart_is_stacked_in_given_order() {
        let summaries = vec![
            VehicleExpenseSummary {
                vehicle_number: "B".to_string(),
                petrol: 300.0,
                toll: 0.0,
                maintenance: 0.0,
                tips: 0.0,
                total: 300.0,
            },
            VehicleExpenseSummary {
                vehicle_number: "A".to_string(),
                petrol: 50.0,
                toll: 10.0,
                maintenance: 0.0,
                tips: 5.0,
                total: 65.0,
            },
        ];
        let chart = vehicle_expense_chart(&summaries);
        assert!(chart.stacked);
        assert_eq!(chart.categories, vec!["B", "A"]);
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[1].values, vec![0.0, 10.0]);
    }

    #[test]
    fn test_daily_chart_one_bar_per_date() {
        let days = vec![
            DailyExpense {
                date: date(2024, 3, 5),
                total: 155.0,
            },
            DailyExpense {
                date: date(2024, 3, 7),
                total: 60.0,
            },
        ];
        let chart = daily_expense_chart(&days);
        assert!(!chart.stacked);
        assert_eq!(chart.categories, vec!["2024-03-05", "2024-03-07"]);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, vec![155.0, 60.0]);
    }

    #[test]
    fn test_insurance_threshold_is_inclusive() {
        let today = date(2024, 6, 1);
        let cutoff = insurance_cutoff(today, 10).unwrap();
        assert_eq!(cutoff, date(2024, 6, 11));

        let alerts = insurance_alerts(
            vec![
                vehicle("EXPIRED", Some(date(2024, 5, 20))),
                vehicle("BOUNDARY", Some(date(2024, 6, 11))),
                vehicle("LATER", Some(date(2024, 6, 12))),
                vehicle("UNKNOWN", None),
            ],
            today,
            cutoff,
        );

        let numbers: Vec<&str> = alerts.iter().map(|a| a.vehicle_number.as_str()).collect();
        assert_eq!(numbers, vec!["EXPIRED", "BOUNDARY"]);
        assert_eq!(alerts[0].days_remaining, -12);
        assert_eq!(alerts[1].days_remaining, 10);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert!(insurance_cutoff(date(2024, 6, 1), -1).is_err());
        assert_eq!(insurance_cutoff(date(2024, 6, 1), 0).unwrap(), date(2024, 6, 1));
    }

    #[test]
    fn test_placeholder_vehicle_numbers() {
        let numbers = placeholder_vehicle_numbers();
        assert_eq!(numbers.len(), 20);
        assert_eq!(numbers.first().map(String::as_str), Some("VEH-01"));
        assert_eq!(numbers.last().map(String::as_str), Some("VEH-20"));
    }
}
