//! Detected byte patterns (crypto constants, malware signatures, ...).
//!
//! Patterns arrive from the matching engine in detection order. Before
//! rendering, each [`PatternSet`] is put into a deterministic order with
//! [`PatternSet::sort`], and the crypto set is reduced with
//! [`PatternSet::remove_redundant`]. Both operations are driven by a
//! [`PatternPolicy`].
//!
//! # Ordering
//!
//! Matches inside a pattern are ordered by offset (absent offsets last), then
//! data size, address, entry size and the integral flag. Patterns are then
//! stably ordered by the policy's primary key (rule name then first match
//! offset, or the reverse), with the remaining ties broken by the full
//! ordered match list, the description, the YARA rule text and the byte
//! order. The result only depends on the multiset of patterns, so sorting is
//! idempotent.
//!
//! # Redundancy
//!
//! Pattern `B` makes pattern `A` redundant when both belong to the same rule
//! family (name prefix before the first family separator), every match region
//! of `A` lies inside some match region of `B`, and one of the following
//! holds:
//!
//! 1. `B`'s regions are not all covered by `A` (B strictly covers A);
//! 2. the regions cover each other and `B`'s name has more components;
//! 3. `A` and `B` are duplicates (same name, same sorted match list) and `B`
//!    sorts before `A` by description, YARA rule and byte order. Exact
//!    copies keep the one that came first.
//!
//! Patterns with distinct names whose regions and specificity are equal
//! (`CRC32_le` and `CRC32_be` on the same table) are siblings and both stay.
//!
//! This relation is a strict partial order, so keeping the patterns no other
//! pattern dominates is idempotent, never grows the set and does not depend
//! on detection order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::{PatternOrder, PatternPolicy};
use crate::core::identity::Endianness;
use crate::core::numeric::{num_str, Radix};

/// One matched region of a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternMatch {
    /// File offset of the first matched byte
    pub offset: Option<u64>,
    /// Virtual address of the first matched byte
    pub address: Option<u64>,
    /// Length of the matched region in bytes
    pub data_size: Option<u64>,
    /// Size of one element of the matched data (e.g. 4 for a `u32` table)
    pub entry_size: Option<u64>,
    /// Elements are integers rather than floating point values
    pub integral: bool,
}

impl PatternMatch {
    pub fn new(offset: u64, data_size: u64) -> Self {
        Self {
            offset: Some(offset),
            data_size: Some(data_size),
            integral: true,
            ..Default::default()
        }
    }

    pub fn with_address(mut self, address: u64) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_entry_size(mut self, entry_size: u64) -> Self {
        self.entry_size = Some(entry_size);
        self
    }

    /// Half-open file region `[offset, offset + data_size)`.
    ///
    /// A match without an offset has no region. A missing size is treated as
    /// an empty region at the offset.
    pub fn region(&self) -> Option<(u64, u64)> {
        let start = self.offset?;
        Some((start, start.saturating_add(self.data_size.unwrap_or(0))))
    }

    pub fn offset_str(&self, radix: Radix) -> String {
        num_str(self.offset, radix)
    }

    pub fn address_str(&self, radix: Radix) -> String {
        num_str(self.address, radix)
    }

    pub fn data_size_str(&self, radix: Radix) -> String {
        num_str(self.data_size, radix)
    }

    pub fn entry_size_str(&self, radix: Radix) -> String {
        num_str(self.entry_size, radix)
    }

    fn order(&self, other: &Self) -> Ordering {
        absent_last(self.offset, other.offset)
            .then_with(|| absent_last(self.data_size, other.data_size))
            .then_with(|| absent_last(self.address, other.address))
            .then_with(|| absent_last(self.entry_size, other.entry_size))
            .then_with(|| self.integral.cmp(&other.integral))
    }
}

fn absent_last(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A rule hit together with all of its matched regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    /// Source text of the YARA rule that produced the hit, if any
    pub yara_rule: String,
    pub endianness: Option<Endianness>,
    matches: Vec<PatternMatch>,
}

impl Pattern {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_match(mut self, m: PatternMatch) -> Self {
        self.matches.push(m);
        self
    }

    pub fn add_match(&mut self, m: PatternMatch) {
        self.matches.push(m);
    }

    pub fn matches(&self) -> &[PatternMatch] {
        &self.matches
    }

    pub fn number_of_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn is_little(&self) -> bool {
        self.endianness == Some(Endianness::Little)
    }

    pub fn is_big(&self) -> bool {
        self.endianness == Some(Endianness::Big)
    }

    pub fn sort_matches(&mut self) {
        self.matches.sort_by(PatternMatch::order);
    }

    fn first_offset(&self) -> Option<u64> {
        self.matches.iter().filter_map(|m| m.offset).min()
    }

    fn sorted_matches(&self) -> Vec<PatternMatch> {
        let mut matches = self.matches.clone();
        matches.sort_by(PatternMatch::order);
        matches
    }

    /// Ordering on everything but the name and the matches.
    fn metadata_order(&self, other: &Self) -> Ordering {
        self.description
            .cmp(&other.description)
            .then_with(|| self.yara_rule.cmp(&other.yara_rule))
            .then_with(|| self.endianness.cmp(&other.endianness))
    }

    fn tie_break(&self, other: &Self) -> Ordering {
        let by_matches = self
            .matches
            .iter()
            .zip(other.matches.iter())
            .map(|(a, b)| a.order(b))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| self.matches.len().cmp(&other.matches.len()));
        by_matches.then_with(|| self.metadata_order(other))
    }

    /// Same rule name and the same matches regardless of their order.
    fn is_duplicate_of(&self, other: &Self) -> bool {
        self.name == other.name && self.sorted_matches() == other.sorted_matches()
    }

    fn order(&self, other: &Self, order: PatternOrder) -> Ordering {
        let by_name = || self.name.cmp(&other.name);
        let by_offset = || absent_last(self.first_offset(), other.first_offset());
        let primary = match order {
            PatternOrder::NameThenOffset => by_name().then_with(by_offset),
            PatternOrder::OffsetThenName => by_offset().then_with(by_name),
        };
        primary.then_with(|| self.tie_break(other))
    }

    /// Every match region of `other` lies inside some match region of `self`.
    ///
    /// A pattern without any located match is never covered.
    pub fn covers(&self, other: &Pattern) -> bool {
        if other.matches.is_empty() {
            return false;
        }
        other.matches.iter().all(|inner| match inner.region() {
            Some((start, end)) => self.matches.iter().any(|outer| {
                outer
                    .region()
                    .is_some_and(|(o_start, o_end)| o_start <= start && end <= o_end)
            }),
            None => false,
        })
    }
}

/// Ordered collection of patterns of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn add(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// # Panics
    /// `position` must be below [`Self::len`].
    pub fn get(&self, position: usize) -> &Pattern {
        &self.patterns[position]
    }

    /// Put the set into the deterministic order described in the module docs.
    pub fn sort(&mut self, policy: &PatternPolicy) {
        for pattern in &mut self.patterns {
            pattern.sort_matches();
        }
        let order = policy.order;
        self.patterns.sort_by(|a, b| a.order(b, order));
    }

    /// Drop every pattern dominated by another pattern of the same family.
    ///
    /// Survivors keep their relative order. Returns the number of patterns
    /// removed.
    pub fn remove_redundant(&mut self, policy: &PatternPolicy) -> usize {
        let before = self.patterns.len();
        let redundant: Vec<bool> = (0..before)
            .map(|i| (0..before).any(|j| self.dominates(policy, j, i)))
            .collect();

        let mut flags = redundant.into_iter();
        self.patterns.retain(|_| !flags.next().unwrap_or(false));
        before - self.patterns.len()
    }

    /// Whether the pattern at `j` makes the pattern at `i` redundant.
    fn dominates(&self, policy: &PatternPolicy, j: usize, i: usize) -> bool {
        if i == j {
            return false;
        }
        let (a, b) = (&self.patterns[i], &self.patterns[j]);
        if policy.family(&a.name) != policy.family(&b.name) || !b.covers(a) {
            return false;
        }
        if !a.covers(b) {
            return true;
        }
        match policy.specificity(&b.name).cmp(&policy.specificity(&a.name)) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal if b.is_duplicate_of(a) => match b.metadata_order(a) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => j < i,
            },
            Ordering::Equal => false,
        }
    }
}
