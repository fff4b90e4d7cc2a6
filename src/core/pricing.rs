use crate::core::store::CartStore;
use crate::domain::model::CartLine;
use crate::domain::money::Money;

/// Unit cost times quantity, formatted with two decimals.
pub fn line_subtotal(line: &CartLine) -> String {
    line.subtotal().to_string()
}

pub fn cart_total_amount(cart: &CartStore) -> Money {
    cart.items().iter().map(CartLine::subtotal).sum()
}

/// Sum of all line subtotals, formatted with two decimals. `"0.00"` for an
/// empty cart.
pub fn cart_total(cart: &CartStore) -> String {
    cart_total_amount(cart).to_string()
}
