use rust_decimal::Decimal;

use crate::errors::ValidationError;

/// Largest accepted amount or monthly price: one trillion.
///
/// Keeps any realistic number of entries far below `Decimal::MAX`, so report
/// and filter totals cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

pub(crate) fn require_positive(field: &'static str, amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { field });
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            field,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankText { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert!(require_positive("amount", dec!(0)).is_err());
        assert!(require_positive("amount", dec!(-0.01)).is_err());
        assert!(require_positive("amount", dec!(0.01)).is_ok());
    }

    #[test]
    fn cap_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, dec!(1_000_000_000_000));
        assert!(require_positive("amount", MAX_AMOUNT).is_ok());
        assert_eq!(
            require_positive("amount", dec!(1_000_000_000_000.01)),
            Err(ValidationError::AmountTooLarge {
                field: "amount",
                max: MAX_AMOUNT
            })
        );
        assert!(require_positive("amount", Decimal::MAX).is_err());
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        for blank in ["", " ", "\t", " \n "] {
            assert_eq!(
                require_text("note", blank),
                Err(ValidationError::BlankText { field: "note" })
            );
        }
        assert!(require_text("note", " x ").is_ok());
    }
}
