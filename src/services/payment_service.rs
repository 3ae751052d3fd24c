//! Servicio de pagos
//!
//! Ledger de pagos acumulados contra el precio fijo del curso. El saldo
//! nunca baja de cero: el sobrepago se absorbe sin registro de crédito.

use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Resultado de aplicar un pago
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub amount_paid: Decimal,
    pub balance: Decimal,
    pub payment_status: String,
}

/// Clasificación del estado de pago: función pura de lo pagado vs. precio
pub fn classify_payment(price: Decimal, amount_paid: Decimal) -> PaymentOutcome {
    let raw_balance = price - amount_paid;
    let balance = raw_balance.max(Decimal::ZERO);

    let payment_status = if raw_balance <= Decimal::ZERO {
        "paid"
    } else if amount_paid > Decimal::ZERO {
        "partial"
    } else {
        "pending"
    };

    PaymentOutcome {
        amount_paid,
        balance,
        payment_status: payment_status.to_string(),
    }
}

/// Aplica un pago al ledger. Un monto <= 0 se rechaza antes de cualquier
/// mutación.
pub fn apply_payment(
    price: Decimal,
    amount_paid: Decimal,
    amount: Decimal,
) -> Result<PaymentOutcome, AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Payment amount must be greater than zero".to_string(),
        ));
    }

    Ok(classify_payment(price, amount_paid + amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value * 100, 2)
    }

    #[test]
    fn test_exact_payment_settles_balance() {
        // Precio 5500, pagado 5000, pago de 500
        let outcome = apply_payment(dec(5500), dec(5000), dec(500)).unwrap();
        assert_eq!(outcome.amount_paid, dec(5500));
        assert_eq!(outcome.balance, Decimal::ZERO);
        assert_eq!(outcome.payment_status, "paid");
    }

    #[test]
    fn test_overpayment_clamps_balance_to_zero() {
        // Pago de 700 sobre un saldo de 500: sin saldo negativo ni crédito
        let outcome = apply_payment(dec(5500), dec(5000), dec(700)).unwrap();
        assert_eq!(outcome.amount_paid, dec(5700));
        assert_eq!(outcome.balance, Decimal::ZERO);
        assert_eq!(outcome.payment_status, "paid");
    }

    #[test]
    fn test_partial_payment() {
        let outcome = apply_payment(dec(5500), Decimal::ZERO, dec(1000)).unwrap();
        assert_eq!(outcome.amount_paid, dec(1000));
        assert_eq!(outcome.balance, dec(4500));
        assert_eq!(outcome.payment_status, "partial");
    }

    #[test]
    fn test_zero_and_negative_amounts_are_rejected() {
        assert!(apply_payment(dec(5500), dec(1000), Decimal::ZERO).is_err());
        assert!(apply_payment(dec(5500), dec(1000), dec(-50)).is_err());
    }

    #[test]
    fn test_classification_at_enrollment_creation() {
        assert_eq!(classify_payment(dec(5500), Decimal::ZERO).payment_status, "pending");
        assert_eq!(classify_payment(dec(5500), dec(2000)).payment_status, "partial");
        assert_eq!(classify_payment(dec(5500), dec(5500)).payment_status, "paid");
        assert_eq!(classify_payment(dec(5500), dec(6000)).payment_status, "paid");
    }
}
