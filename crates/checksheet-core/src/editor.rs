//! Pattern Book
//!
//! In-memory store behind the check item settings page: 1..=max patterns,
//! each an ordered list of check items. All operations are synchronous and
//! run to completion; persistence happens only on explicit save/load.

use crate::config::EditorConfig;
use crate::domain::{CheckItem, DomainError, DomainResult, ItemId, Pattern};
use crate::repository::{PatternRepository, StorageResult};

/// What a successful `try_load` did to the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored (or an empty collection); current state kept
    Kept,
    /// State replaced; `dropped` patterns beyond the limit were discarded
    Replaced { dropped: usize },
}

impl LoadOutcome {
    pub fn replaced(&self) -> bool {
        matches!(self, LoadOutcome::Replaced { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternBook {
    patterns: Vec<Pattern>,
    config: EditorConfig,
}

impl Default for PatternBook {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl PatternBook {
    /// A single default pattern
    pub fn new(config: EditorConfig) -> Self {
        let first = Pattern::with_blank_items(0, config.initial_item_count);
        Self {
            patterns: vec![first],
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn item(&self, pattern_index: usize, item_id: &ItemId) -> Option<&CheckItem> {
        self.pattern(pattern_index).and_then(|p| p.item(item_id))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false: a book holds at least one pattern
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn can_add_pattern(&self) -> bool {
        self.patterns.len() < self.config.max_patterns
    }

    /// Append a default pattern; returns its index.
    /// At the cap nothing changes and `CapacityReached` is returned.
    pub fn add_pattern(&mut self) -> DomainResult<usize> {
        if !self.can_add_pattern() {
            return Err(DomainError::CapacityReached { max: self.config.max_patterns });
        }
        let index = self.patterns.len();
        self.patterns.push(Pattern::with_blank_items(index, self.config.initial_item_count));
        Ok(index)
    }

    /// Append one blank free text item; returns its id
    pub fn add_item(&mut self, pattern_index: usize) -> DomainResult<ItemId> {
        let pattern = self.pattern_mut(pattern_index)?;
        let item = CheckItem::blank();
        let id = item.id.clone();
        pattern.items.push(item);
        Ok(id)
    }

    /// Replace the item with `item_id`. The stored item keeps `item_id`
    /// even if `new_item` carries another id. Unknown ids are a no-op.
    pub fn update_item(
        &mut self,
        pattern_index: usize,
        item_id: &ItemId,
        mut new_item: CheckItem,
    ) -> DomainResult<()> {
        let pattern = self.pattern_mut(pattern_index)?;
        if let Some(slot) = pattern.item_mut(item_id) {
            new_item.id = item_id.clone();
            *slot = new_item;
        }
        Ok(())
    }

    /// Apply `f` to the current item and store the result
    pub fn modify_item<F>(&mut self, pattern_index: usize, item_id: &ItemId, f: F) -> DomainResult<()>
    where
        F: FnOnce(CheckItem) -> CheckItem,
    {
        let pattern = self.pattern_mut(pattern_index)?;
        if let Some(slot) = pattern.item_mut(item_id) {
            let mut updated = f(slot.clone());
            updated.id = item_id.clone();
            *slot = updated;
        }
        Ok(())
    }

    /// Remove the item with `item_id`; unknown ids are a no-op
    pub fn delete_item(&mut self, pattern_index: usize, item_id: &ItemId) -> DomainResult<()> {
        let pattern = self.pattern_mut(pattern_index)?;
        pattern.remove_item(item_id);
        Ok(())
    }

    /// Write the whole collection. Failure leaves the book untouched.
    pub fn save<R: PatternRepository + ?Sized>(&self, repo: &R) -> StorageResult<()> {
        repo.save(&self.patterns)
    }

    /// Replace the collection with the stored one if it loads and is
    /// non-empty. Returns whether anything was replaced; failures are logged
    /// and keep the current state.
    pub fn load<R: PatternRepository + ?Sized>(&mut self, repo: &R) -> bool {
        match self.try_load(repo) {
            Ok(LoadOutcome::Replaced { dropped }) => {
                if dropped > 0 {
                    log::warn!("stored collection over the limit, dropped {} pattern(s)", dropped);
                }
                true
            }
            Ok(LoadOutcome::Kept) => false,
            Err(e) => {
                log::warn!("failed to load saved patterns, keeping defaults: {}", e);
                false
            }
        }
    }

    /// Like `load`, but hands errors and truncation back to the caller
    pub fn try_load<R: PatternRepository + ?Sized>(&mut self, repo: &R) -> StorageResult<LoadOutcome> {
        match repo.load()? {
            Some(patterns) if !patterns.is_empty() => Ok(self.replace_patterns(patterns)),
            _ => Ok(LoadOutcome::Kept),
        }
    }

    fn replace_patterns(&mut self, mut patterns: Vec<Pattern>) -> LoadOutcome {
        let dropped = patterns.len().saturating_sub(self.config.max_patterns);
        patterns.truncate(self.config.max_patterns);
        self.patterns = patterns;
        LoadOutcome::Replaced { dropped }
    }

    fn pattern_mut(&mut self, index: usize) -> DomainResult<&mut Pattern> {
        self.patterns.get_mut(index).ok_or(DomainError::PatternNotFound(index))
    }
}
