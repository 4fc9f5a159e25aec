use serde_json::{json, Value};

/// Creates a profit report row.
///
/// # Arguments
/// - `name` - Item name
/// - `category` - Item category
/// - `enhance` - Enhancement level
///
/// # Returns
/// - `Value` - Row with fixed price 1234567.89, profit 98765.4, rate 0.12345
///   and stock 42
pub fn profit_row(name: &str, category: &str, enhance: i64) -> Value {
    json!({
        "name": name,
        "category": category,
        "enhance": enhance,
        "price": 1234567.89,
        "profit": 98765.4,
        "rate": 0.12345,
        "stock": 42,
    })
}

/// Creates a trends report row with volume change 2500 and 1.5 trades per day.
pub fn trends_row(name: &str, category: &str, enhance: i64) -> Value {
    json!({
        "name": name,
        "category": category,
        "enhance": enhance,
        "price": 5000,
        "stock": 7,
        "volume_change": 2500.75,
        "avg_trades_per_day": 1.5,
    })
}

/// Wraps rows in the API envelope.
///
/// # Arguments
/// - `report_time` - Snapshot time as sent by the API
/// - `rows` - Row objects in display order
pub fn report_payload(report_time: &str, rows: Vec<Value>) -> Value {
    json!({
        "report_time": report_time,
        "report": rows,
    })
}
