pub mod account;
pub mod budgets;
pub mod goals;
pub mod recurring;
pub mod summary;
pub mod transactions;
