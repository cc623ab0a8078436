//! Storage seam for debt lists
//!
//! The projection engine is storage-agnostic; callers fetch the list from a
//! repository and pass it in on every recalculation.

use super::Debt;

/// Debt storage operations
pub trait DebtRepository {
    /// All debts in insertion order
    fn list(&self) -> Vec<Debt>;

    /// Look up a debt by id
    fn get(&self, id: &str) -> Option<Debt>;

    /// Insert a new debt or replace the one with the same id
    fn save(&mut self, debt: Debt);

    /// Remove a debt, returning it if it existed
    fn delete(&mut self, id: &str) -> Option<Debt>;
}

/// Repository backed by a vector, preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryDebtRepository {
    debts: Vec<Debt>,
}

impl InMemoryDebtRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debts(debts: Vec<Debt>) -> Self {
        let mut repo = Self::new();
        for debt in debts {
            repo.save(debt);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}

impl DebtRepository for InMemoryDebtRepository {
    fn list(&self) -> Vec<Debt> {
        self.debts.clone()
    }

    fn get(&self, id: &str) -> Option<Debt> {
        self.debts.iter().find(|d| d.id == id).cloned()
    }

    fn save(&mut self, debt: Debt) {
        match self.debts.iter_mut().find(|d| d.id == debt.id) {
            Some(existing) => *existing = debt,
            None => self.debts.push(debt),
        }
    }

    fn delete(&mut self, id: &str) -> Option<Debt> {
        let index = self.debts.iter().position(|d| d.id == id)?;
        Some(self.debts.remove(index))
    }
}
