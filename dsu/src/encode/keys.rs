use std::collections::HashMap;
use std::hash::Hash;

use crate::error::DsuError;
use crate::forest::{DisjointSets, UnionPolicy};

/// Dense index assignment for arbitrary keys, plus the reverse lookup.
///
/// Indices are handed out in first-seen order starting at 0.
#[derive(Debug, Clone)]
pub struct KeyTable<K> {
    lookup: HashMap<K, usize>,
    keys: Vec<K>,
}

impl<K> Default for KeyTable<K> {
    fn default() -> Self {
        Self {
            lookup: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> KeyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `key`, allocating the next free one on first sight.
    pub fn index_of(&mut self, key: &K) -> usize {
        if let Some(&index) = self.lookup.get(key) {
            return index;
        }
        let index = self.keys.len();
        self.keys.push(key.clone());
        self.lookup.insert(key.clone(), index);
        index
    }

    /// Index of `key` if it has been seen.
    #[inline]
    pub fn get(&self, key: &K) -> Option<usize> {
        self.lookup.get(key).copied()
    }

    /// The key stored at `index`.
    #[inline]
    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Equivalence classes over keys where the smallest key represents its class.
///
/// The forest has a fixed capacity; the table fills it in first-seen order.
#[derive(Debug, Clone)]
pub struct KeyedSets<K> {
    table: KeyTable<K>,
    forest: DisjointSets,
}

impl<K: Eq + Hash + Ord + Clone> KeyedSets<K> {
    /// Create an empty set of classes able to hold `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: KeyTable::new(),
            forest: DisjointSets::with_policy(capacity, UnionPolicy::ByKey),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.forest.len()
    }

    #[inline]
    pub fn table(&self) -> &KeyTable<K> {
        &self.table
    }

    /// Index of `key`, allocating one on first sight.
    pub fn index_of(&mut self, key: &K) -> Result<usize, DsuError> {
        if let Some(index) = self.table.get(key) {
            return Ok(index);
        }
        self.reserve(1)?;
        Ok(self.table.index_of(key))
    }

    /// Fail unless `fresh` more keys fit.
    fn reserve(&self, fresh: usize) -> Result<(), DsuError> {
        if self.table.len() + fresh > self.forest.len() {
            log::debug!("key table full at {} keys", self.forest.len());
            return Err(DsuError::CapacityExhausted {
                capacity: self.forest.len(),
            });
        }
        Ok(())
    }

    /// Merge the classes of `a` and `b`; the smaller root key survives.
    ///
    /// Nothing is allocated unless both keys fit.
    pub fn union(&mut self, a: &K, b: &K) -> Result<bool, DsuError> {
        let fresh = match (self.table.get(a), self.table.get(b)) {
            (Some(_), Some(_)) => 0,
            (None, None) if a != b => 2,
            _ => 1,
        };
        self.reserve(fresh)?;

        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let keys = &self.table.keys;
        self.forest
            .union_by(ia, ib, |ra, rb| keys[ra].cmp(&keys[rb]))
    }

    /// Whether `a` and `b` share a class. Unseen keys are only equivalent to
    /// themselves.
    pub fn connected(&mut self, a: &K, b: &K) -> Result<bool, DsuError> {
        match (self.table.get(a), self.table.get(b)) {
            (Some(ia), Some(ib)) => self.forest.connected(ia, ib),
            _ => Ok(a == b),
        }
    }

    /// Smallest key in the class of `key`. An unseen key represents itself.
    pub fn representative(&mut self, key: &K) -> Result<K, DsuError> {
        match self.table.get(key) {
            None => Ok(key.clone()),
            Some(index) => {
                let root = self.forest.find(index)?;
                Ok(self.table.keys[root].clone())
            }
        }
    }

    /// Number of classes among the keys seen so far.
    pub fn component_count(&self) -> usize {
        // unallocated slots are untouched singletons
        self.forest.component_count() - (self.forest.len() - self.table.len())
    }

    /// All classes, each sorted ascending, ordered by their smallest key.
    pub fn classes(&mut self) -> Vec<Vec<K>> {
        let allocated = self.table.len();
        let mut classes: Vec<Vec<K>> = self
            .forest
            .groups()
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .filter(|&i| i < allocated)
                    .map(|i| self.table.keys[i].clone())
                    .collect::<Vec<_>>()
            })
            .filter(|class| !class.is_empty())
            .collect();

        for class in &mut classes {
            class.sort();
        }
        classes.sort();
        classes
    }
}

/// Rewrite `base` with the smallest character equivalent to each of its
/// characters, where `s1[i]` and `s2[i]` are declared equivalent.
pub fn smallest_equivalent_string(s1: &str, s2: &str, base: &str) -> Result<String, DsuError> {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.len() != b.len() {
        return Err(DsuError::InvalidArgument(format!(
            "equivalence strings differ in length ({} vs {})",
            a.len(),
            b.len()
        )));
    }

    let mut sets = KeyedSets::with_capacity(a.len() + b.len());
    for (x, y) in a.iter().zip(&b) {
        sets.union(x, y)?;
    }

    base.chars().map(|c| sets.representative(&c)).collect()
}

/// Merge accounts sharing at least one email.
///
/// Each account is `[name, email, ...]`. The result holds one account per
/// merged group with its emails sorted and deduplicated; the name comes from
/// the first account that listed any of the group's emails.
pub fn merge_accounts(accounts: &[Vec<String>]) -> Result<Vec<Vec<String>>, DsuError> {
    let capacity = accounts
        .iter()
        .map(|a| a.len().saturating_sub(1))
        .sum();
    let mut sets: KeyedSets<String> = KeyedSets::with_capacity(capacity);
    // first account listing each email
    let mut owner: HashMap<String, usize> = HashMap::new();

    for (i, account) in accounts.iter().enumerate() {
        let Some((_, emails)) = account.split_first() else {
            return Err(DsuError::InvalidArgument(format!("account {i} has no name")));
        };
        let Some(first) = emails.first() else {
            continue;
        };
        for email in emails {
            owner.entry(email.clone()).or_insert(i);
            sets.union(first, email)?;
        }
    }

    let mut merged: Vec<Vec<String>> = sets
        .classes()
        .into_iter()
        .map(|emails| {
            let account = emails.iter().map(|e| owner[e]).min().unwrap_or_default();
            let name = accounts[account][0].clone();
            std::iter::once(name).chain(emails).collect()
        })
        .collect();
    merged.sort();
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_assigns_dense_indices() {
        let mut table = KeyTable::new();
        assert_eq!(table.index_of(&"x"), 0);
        assert_eq!(table.index_of(&"y"), 1);
        assert_eq!(table.index_of(&"x"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.key(1), Some(&"y"));
        assert_eq!(table.get(&"z"), None);
    }

    #[test]
    fn smallest_key_represents_class() {
        let mut sets = KeyedSets::with_capacity(26);
        for (a, b) in [('p', 'm'), ('a', 'o'), ('k', 'r'), ('r', 's')] {
            sets.union(&a, &b).unwrap();
        }
        assert_eq!(sets.representative(&'s').unwrap(), 'k');
        assert_eq!(sets.representative(&'p').unwrap(), 'm');
        assert_eq!(sets.representative(&'o').unwrap(), 'a');
        assert_eq!(sets.representative(&'z').unwrap(), 'z');
        assert_eq!(sets.component_count(), 3);
    }

    #[test]
    fn representative_ignores_arrival_order() {
        let mut sets = KeyedSets::with_capacity(8);
        sets.union(&"d", &"c").unwrap();
        sets.union(&"c", &"b").unwrap();
        sets.union(&"e", &"b").unwrap();
        sets.union(&"a", &"e").unwrap();
        for k in ["a", "b", "c", "d", "e"] {
            assert_eq!(sets.representative(&k).unwrap(), "a");
        }
    }

    #[test]
    fn self_union_is_noop() {
        let mut sets = KeyedSets::with_capacity(2);
        assert!(!sets.union(&'q', &'q').unwrap());
        assert_eq!(sets.table().len(), 1);
        assert_eq!(sets.component_count(), 1);
    }

    #[test]
    fn connected_handles_unseen_keys() {
        let mut sets = KeyedSets::with_capacity(4);
        sets.union(&1, &2).unwrap();
        assert!(sets.connected(&2, &1).unwrap());
        assert!(!sets.connected(&1, &3).unwrap());
        assert!(sets.connected(&7, &7).unwrap());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut sets = KeyedSets::with_capacity(2);
        sets.union(&'a', &'b').unwrap();
        assert_eq!(
            sets.union(&'a', &'c'),
            Err(DsuError::CapacityExhausted { capacity: 2 })
        );
        assert_eq!(sets.capacity(), 2);
    }

    #[test]
    fn classes_are_sorted() {
        let mut sets = KeyedSets::with_capacity(10);
        sets.union(&"pear", &"apple").unwrap();
        sets.union(&"fig", &"kiwi").unwrap();
        sets.union(&"kiwi", &"date").unwrap();
        sets.index_of(&"lime").unwrap();
        assert_eq!(
            sets.classes(),
            vec![
                vec!["apple", "pear"],
                vec!["date", "fig", "kiwi"],
                vec!["lime"],
            ]
        );
    }

    #[test]
    fn equivalent_string() {
        assert_eq!(
            smallest_equivalent_string("parker", "morris", "parser").unwrap(),
            "makkek"
        );
        assert_eq!(
            smallest_equivalent_string("hello", "world", "hold").unwrap(),
            "hdld"
        );
        assert_eq!(
            smallest_equivalent_string("leetcode", "programs", "sourcecode").unwrap(),
            "aauaaaaada"
        );
        assert!(smallest_equivalent_string("ab", "c", "x").is_err());
    }

    #[test]
    fn accounts_sharing_email_merge() {
        let accounts: Vec<Vec<String>> = [
            vec!["John", "johnsmith@mail.com", "john_newyork@mail.com"],
            vec!["John", "johnsmith@mail.com", "john00@mail.com"],
            vec!["Mary", "mary@mail.com"],
            vec!["John", "johnnybravo@mail.com"],
        ]
        .iter()
        .map(|a| a.iter().map(|s| s.to_string()).collect())
        .collect();

        let merged = merge_accounts(&accounts).unwrap();
        assert_eq!(
            merged,
            vec![
                vec![
                    "John",
                    "john00@mail.com",
                    "john_newyork@mail.com",
                    "johnsmith@mail.com"
                ],
                vec!["John", "johnnybravo@mail.com"],
                vec!["Mary", "mary@mail.com"],
            ]
        );
    }

    #[test]
    fn merged_name_comes_from_earliest_account() {
        let accounts = vec![
            vec!["A".to_string(), "z@x".to_string()],
            vec!["B".to_string(), "a@x".to_string(), "z@x".to_string()],
        ];
        assert_eq!(merge_accounts(&accounts).unwrap(), vec![vec!["A", "a@x", "z@x"]]);
    }

    #[test]
    fn failed_union_allocates_nothing() {
        let mut sets = KeyedSets::with_capacity(3);
        sets.union(&'a', &'b').unwrap();
        assert_eq!(
            sets.union(&'c', &'d'),
            Err(DsuError::CapacityExhausted { capacity: 3 })
        );
        assert_eq!(sets.table().len(), 2);
        assert_eq!(sets.table().get(&'c'), None);
        assert_eq!(sets.component_count(), 1);
        // one fresh key still fits
        assert!(sets.union(&'c', &'a').unwrap());
        assert_eq!(sets.representative(&'c').unwrap(), 'a');
    }

    #[test]
    fn account_without_name_is_rejected() {
        assert!(merge_accounts(&[vec![]]).is_err());
    }
}
