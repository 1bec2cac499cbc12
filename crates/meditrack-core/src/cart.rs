//! Payment cart: assembling a payment from stocked medicines.

use thiserror::Error;

use crate::models::{Medicine, Payment, PaymentItem};

/// Cart errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    #[error("Invalid quantity {requested} for {medicine_id} (in stock: {in_stock})")]
    InvalidQuantity {
        medicine_id: String,
        requested: u32,
        in_stock: u32,
    },

    #[error("Cart is empty")]
    Empty,
}

pub type CartResult<T> = Result<T, CartError>;

/// A medicine line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub medicine_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl CartLine {
    pub fn total_price(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Medicines selected for one payment, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct PaymentCart {
    lines: Vec<CartLine>,
}

impl PaymentCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a medicine.
    ///
    /// Adding a medicine that is already in the cart merges the quantities.
    /// The resulting quantity must be between 1 and the stock on hand.
    pub fn add(&mut self, medicine: &Medicine, quantity: u32) -> CartResult<()> {
        let existing = self
            .lines
            .iter()
            .position(|line| line.medicine_id == medicine.medicine_id);
        let already = existing.map_or(0, |i| self.lines[i].quantity);
        let merged = already.saturating_add(quantity);

        if quantity < 1 || merged > medicine.quantity_in_stock {
            return Err(CartError::InvalidQuantity {
                medicine_id: medicine.medicine_id.clone(),
                requested: merged,
                in_stock: medicine.quantity_in_stock,
            });
        }

        match existing {
            Some(i) => self.lines[i].quantity = merged,
            None => self.lines.push(CartLine {
                medicine_id: medicine.medicine_id.clone(),
                name: medicine.name.clone(),
                quantity,
                unit_price: medicine.unit_price,
            }),
        }
        tracing::debug!(medicine_id = %medicine.medicine_id, quantity = merged, "cart updated");
        Ok(())
    }

    /// Remove a medicine. Returns whether it was in the cart.
    pub fn remove(&mut self, medicine_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.medicine_id != medicine_id);
        self.lines.len() != before
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Balance due.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::total_price).sum()
    }

    /// Turn the cart into a payment, numbering the lines from 1.
    pub fn into_payment(
        self,
        payment_id: String,
        payment_date: String,
        patient_id: String,
    ) -> CartResult<Payment> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }

        let items = self
            .lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| PaymentItem {
                payment_details_id: PaymentItem::details_id(&payment_id, i + 1),
                total_price: line.total_price(),
                medicine_id: line.medicine_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        Ok(Payment {
            payment_id,
            payment_date,
            patient_id,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paracetamol() -> Medicine {
        Medicine::new("M001".into(), "Paracetamol".into(), 5.0, 10)
    }

    fn amoxicillin() -> Medicine {
        Medicine::new("M002".into(), "Amoxicillin".into(), 20.0, 3)
    }

    #[test]
    fn test_add_and_total() {
        let mut cart = PaymentCart::new();
        cart.add(&paracetamol(), 4).unwrap();
        cart.add(&amoxicillin(), 2).unwrap();
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total(), 60.0);
    }

    #[test]
    fn test_add_merges_quantities() {
        let mut cart = PaymentCart::new();
        cart.add(&paracetamol(), 4).unwrap();
        cart.add(&paracetamol(), 3).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.total(), 35.0);
    }

    #[test]
    fn test_rejects_zero_and_overstock() {
        let mut cart = PaymentCart::new();
        assert!(matches!(
            cart.add(&amoxicillin(), 0),
            Err(CartError::InvalidQuantity { .. })
        ));
        assert!(cart.add(&amoxicillin(), 4).is_err());

        cart.add(&amoxicillin(), 2).unwrap();
        // Merged quantity would exceed stock
        let err = cart.add(&amoxicillin(), 2).unwrap_err();
        assert_eq!(
            err,
            CartError::InvalidQuantity {
                medicine_id: "M002".into(),
                requested: 4,
                in_stock: 3,
            }
        );
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_remove() {
        let mut cart = PaymentCart::new();
        cart.add(&paracetamol(), 1).unwrap();
        assert!(cart.remove("M001"));
        assert!(!cart.remove("M001"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_into_payment() {
        let mut cart = PaymentCart::new();
        cart.add(&paracetamol(), 2).unwrap();
        cart.add(&amoxicillin(), 1).unwrap();

        let payment = cart
            .into_payment("PI007".into(), "2025-04-01".into(), "P003".into())
            .unwrap();
        assert_eq!(payment.items.len(), 2);
        assert_eq!(payment.items[0].payment_details_id, "PD-PI007-1");
        assert_eq!(payment.items[1].payment_details_id, "PD-PI007-2");
        assert_eq!(payment.items[0].total_price, 10.0);
        assert_eq!(payment.total(), 30.0);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let cart = PaymentCart::new();
        assert_eq!(
            cart.into_payment("PI001".into(), "2025-04-01".into(), "P001".into()),
            Err(CartError::Empty)
        );
    }
}
