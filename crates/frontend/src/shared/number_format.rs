//! Number formatting for KPI cards and tables (Spanish conventions: comma
//! decimal separator). Thousands grouping lives in
//! `contracts::shared::number_format`.

/// `7.84` with 1 decimal -> `"7,8"`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals).replace('.', ",")
}

/// `70.81` with 1 decimal -> `"70,8%"`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", format_decimal(value, decimals))
}

/// Change against a previous period, always signed: `"+5,3%"`, `"-2,0%"`.
pub fn format_change(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{}{}", sign, format_percent(value.abs(), 1))
}
