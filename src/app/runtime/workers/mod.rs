/// Inventory poll worker and single refresh attempts.
pub mod inventory;
