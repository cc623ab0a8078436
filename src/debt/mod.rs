//! Debt data, storage and import handling

mod data;
mod loader;
mod repository;
pub mod validation;

pub use data::{Debt, DebtBook, DebtKind, Strategy};
pub use loader::{
    load_book, load_book_from_reader, load_debt_file, load_debts, load_debts_from_reader,
    load_default_debts, save_book, write_book, DEFAULT_DEBTS_PATH,
};
pub use repository::{DebtRepository, InMemoryDebtRepository};
