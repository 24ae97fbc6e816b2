use chrono::NaiveDate;
use rust_decimal::Decimal;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn money(amount: Decimal, symbol: &str) -> String {
    format!("{:.2}{}", amount.round_dp(2), symbol)
}

pub fn percent(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

pub fn date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn active_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}
