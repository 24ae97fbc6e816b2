//! Prompt helpers. Date, amount, text and category prompts retry until the answer parses.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{Category, MAX_AMOUNT};

use super::{input::LineSource, output, shell_context::CommandError};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Accepts either `.` or `,` as the decimal separator.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Reads one raw line; running out of input ends the session.
pub fn read_line(input: &mut dyn LineSource, prompt: &str) -> Result<String, CommandError> {
    input.read_line(prompt)?.ok_or(CommandError::EndOfInput)
}

pub fn read_choice(input: &mut dyn LineSource, prompt: &str) -> Result<String, CommandError> {
    Ok(read_line(input, prompt)?.trim().to_string())
}

pub fn read_text(input: &mut dyn LineSource, prompt: &str) -> Result<String, CommandError> {
    loop {
        let line = read_line(input, prompt)?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

pub fn read_date(input: &mut dyn LineSource, prompt: &str) -> Result<NaiveDate, CommandError> {
    loop {
        if let Some(date) = parse_date(&read_line(input, prompt)?) {
            return Ok(date);
        }
        output::warning("Invalid date, try again (YYYY-MM-DD).");
    }
}

/// Reads a strictly positive amount.
pub fn read_amount(input: &mut dyn LineSource, prompt: &str) -> Result<Decimal, CommandError> {
    loop {
        match parse_amount(&read_line(input, prompt)?) {
            Some(amount) if amount > MAX_AMOUNT => {
                output::warning(format!("Enter a number no larger than {MAX_AMOUNT}."))
            }
            Some(amount) if amount > Decimal::ZERO => return Ok(amount),
            _ => output::warning("Enter a number greater than 0."),
        }
    }
}

pub fn category_legend() -> String {
    let options: Vec<String> = Category::ALL
        .iter()
        .map(|category| format!("{}={}", category.index(), category))
        .collect();
    format!("Category: {}", options.join(" "))
}

pub fn read_category(input: &mut dyn LineSource) -> Result<Category, CommandError> {
    output::info(category_legend());
    loop {
        let raw = read_choice(input, "Category: ")?;
        if let Some(category) = raw.parse::<usize>().ok().and_then(Category::from_index) {
            return Ok(category);
        }
        output::warning("Pick a category number from the list.");
    }
}

/// Reads a list index. Anything that is not a number yields `None`, which callers treat as a no-op.
pub fn read_index(input: &mut dyn LineSource) -> Result<Option<usize>, CommandError> {
    Ok(read_choice(input, "Index: ")?.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::ScriptSource;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn script(text: &str) -> ScriptSource<Cursor<String>> {
        ScriptSource::new(Cursor::new(text.to_string()))
    }

    #[test]
    fn parses_supported_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(parse_date("2024-05-02"), Some(expected));
        assert_eq!(parse_date(" 2024/05/02 "), Some(expected));
        assert_eq!(parse_date("02.05.2024"), Some(expected));
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn parses_amount_with_comma() {
        assert_eq!(parse_amount("12,50"), Some(dec!(12.50)));
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn amount_prompt_retries_until_positive() {
        let mut source = script("zero\n0\n-4\n7.25\n");
        assert_eq!(read_amount(&mut source, "Amount: ").unwrap(), dec!(7.25));
    }

    #[test]
    fn amount_prompt_retries_above_cap() {
        let mut source = script("79228162514264337593543950335\n1000000000000.01\n1000000000000\n");
        assert_eq!(read_amount(&mut source, "Amount: ").unwrap(), MAX_AMOUNT);
    }

    #[test]
    fn date_prompt_retries_until_valid() {
        let mut source = script("yesterday\n2024-13-01\n2024-01-31\n");
        let date = read_date(&mut source, "Date: ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn category_prompt_rejects_out_of_range() {
        let mut source = script("9\nfood\n2\n");
        assert_eq!(read_category(&mut source).unwrap(), Category::Fun);
    }

    #[test]
    fn exhausted_input_ends_prompt() {
        let mut source = script("   \n");
        assert!(matches!(
            read_text(&mut source, "Note: "),
            Err(CommandError::EndOfInput)
        ));
    }

    #[test]
    fn non_numeric_index_is_none() {
        let mut source = script("x\n3\n");
        assert_eq!(read_index(&mut source).unwrap(), None);
        assert_eq!(read_index(&mut source).unwrap(), Some(3));
    }
}
