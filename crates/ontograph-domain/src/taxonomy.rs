//! Taxonomy module - the entry store behind every relation
//!
//! A taxonomy is a set of `(subject, predicate, object)` entries. Entries are
//! compared by value; provenance rides along so inferred entries can be purged.
//! Two ordered indexes (subject-first and object-first) make both traversal
//! directions a range scan.

use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use crate::{Fingerprint, Provenance};

/// Subject-first key
type Key = (Fingerprint, Fingerprint, Fingerprint);

/// Object-first key: (object, subject, predicate)
type ObjectKey = (Fingerprint, Fingerprint, Fingerprint);

/// A single taxonomy entry
///
/// Equality and hashing use subject, predicate and object only.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Subject resource
    pub subject: Fingerprint,

    /// Predicate (relation or property)
    pub predicate: Fingerprint,

    /// Object resource
    pub object: Fingerprint,

    /// Who produced the entry
    pub provenance: Provenance,
}

impl Entry {
    /// Create an entry with explicit provenance
    pub fn new(
        subject: Fingerprint,
        predicate: Fingerprint,
        object: Fingerprint,
        provenance: Provenance,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
            provenance,
        }
    }

    /// Create a caller-asserted entry
    pub fn asserted(subject: Fingerprint, predicate: Fingerprint, object: Fingerprint) -> Self {
        Self::new(subject, predicate, object, Provenance::Asserted)
    }

    /// Create a reasoner-inferred entry
    pub fn inferred(subject: Fingerprint, predicate: Fingerprint, object: Fingerprint) -> Self {
        Self::new(subject, predicate, object, Provenance::Inferred)
    }

    /// The mirrored entry used by symmetric relations (always inferred)
    pub fn mirrored(&self) -> Self {
        Self::inferred(self.object, self.predicate, self.subject)
    }

    fn key(&self) -> Key {
        (self.subject, self.predicate, self.object)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Set of entries for one relation, indexed by subject and by object
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    entries: BTreeMap<Key, Provenance>,
    by_object: BTreeSet<ObjectKey>,
}

impl Taxonomy {
    /// Create an empty taxonomy
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the taxonomy has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry unless an equal-value entry exists
    ///
    /// Returns `true` when the entry was inserted. A duplicate keeps the
    /// provenance it was first inserted with.
    pub fn add(&mut self, entry: Entry) -> bool {
        match self.entries.entry(entry.key()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry.provenance);
                self.by_object
                    .insert((entry.object, entry.subject, entry.predicate));
                true
            }
        }
    }

    /// Remove the equal-value entry, if present
    pub fn remove(&mut self, entry: &Entry) -> bool {
        if self.entries.remove(&entry.key()).is_some() {
            self.by_object
                .remove(&(entry.object, entry.subject, entry.predicate));
            true
        } else {
            false
        }
    }

    /// Whether an equal-value entry is present
    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries.contains_key(&entry.key())
    }

    /// Whether `subject predicate object` is present
    pub fn holds(&self, subject: Fingerprint, predicate: Fingerprint, object: Fingerprint) -> bool {
        self.entries.contains_key(&(subject, predicate, object))
    }

    /// Look up the stored entry (with its provenance)
    pub fn get(
        &self,
        subject: Fingerprint,
        predicate: Fingerprint,
        object: Fingerprint,
    ) -> Option<Entry> {
        self.entries
            .get(&(subject, predicate, object))
            .map(|provenance| Entry::new(subject, predicate, object, *provenance))
    }

    /// View over every entry
    pub fn iter(&self) -> EntryView<'_> {
        EntryView::new(Source::Entries(self.entries.range::<Key, _>(..)))
    }

    /// View over the entries with the given subject
    pub fn by_subject(&self, subject: Fingerprint) -> EntryView<'_> {
        let range = self.entries.range(
            (subject, Fingerprint::MIN, Fingerprint::MIN)
                ..=(subject, Fingerprint::MAX, Fingerprint::MAX),
        );
        EntryView::new(Source::Entries(range))
    }

    /// View over the entries with the given object
    pub fn by_object(&self, object: Fingerprint) -> EntryView<'_> {
        let range = self.by_object.range(
            (object, Fingerprint::MIN, Fingerprint::MIN)
                ..=(object, Fingerprint::MAX, Fingerprint::MAX),
        );
        EntryView::new(Source::Objects {
            range,
            entries: &self.entries,
        })
    }

    /// View over the entries with the given predicate
    pub fn by_predicate(&self, predicate: Fingerprint) -> EntryView<'_> {
        self.iter().with_predicate(predicate)
    }

    /// New taxonomy holding the entries of both operands
    ///
    /// On equal values the left operand's provenance wins.
    pub fn union(&self, other: &Taxonomy) -> Taxonomy {
        let mut result = self.clone();
        result.extend(other.iter());
        result
    }

    /// New taxonomy holding the left entries whose value is also on the right
    pub fn intersect(&self, other: &Taxonomy) -> Taxonomy {
        self.iter().filter(|entry| other.contains(entry)).collect()
    }

    /// New taxonomy holding the left entries whose value is not on the right
    pub fn difference(&self, other: &Taxonomy) -> Taxonomy {
        self.iter().filter(|entry| !other.contains(entry)).collect()
    }

    /// Remove every inferred entry, returning how many were removed
    pub fn clear_inferred(&mut self) -> usize {
        let inferred: Vec<Entry> = self
            .iter()
            .filter(|entry| entry.provenance.is_inferred())
            .collect();
        for entry in &inferred {
            self.remove(entry);
        }
        inferred.len()
    }

    /// Remove every entry whose subject or object is the resource
    pub fn remove_mentions(&mut self, resource: Fingerprint) -> usize {
        let mentions: Vec<Entry> = self
            .by_subject(resource)
            .chain(self.by_object(resource))
            .collect();
        mentions.iter().filter(|entry| self.remove(entry)).count()
    }

    /// Number of caller-asserted entries
    pub fn asserted_count(&self) -> usize {
        self.entries
            .values()
            .filter(|provenance| !provenance.is_inferred())
            .count()
    }

    /// Number of inferred entries
    pub fn inferred_count(&self) -> usize {
        self.len() - self.asserted_count()
    }
}

impl FromIterator<Entry> for Taxonomy {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut taxonomy = Taxonomy::new();
        taxonomy.extend(iter);
        taxonomy
    }
}

impl Extend<Entry> for Taxonomy {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<'a> IntoIterator for &'a Taxonomy {
    type Item = Entry;
    type IntoIter = EntryView<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
enum Source<'a> {
    Entries(btree_map::Range<'a, Key, Provenance>),
    Objects {
        range: btree_set::Range<'a, ObjectKey>,
        entries: &'a BTreeMap<Key, Provenance>,
    },
}

/// Lazy, restartable view over taxonomy entries
///
/// Clone the view to iterate it again. Filters compose:
/// `taxonomy.by_subject(a).with_predicate(p)`.
#[derive(Debug, Clone)]
pub struct EntryView<'a> {
    source: Source<'a>,
    subject: Option<Fingerprint>,
    predicate: Option<Fingerprint>,
    object: Option<Fingerprint>,
}

impl<'a> EntryView<'a> {
    fn new(source: Source<'a>) -> Self {
        Self {
            source,
            subject: None,
            predicate: None,
            object: None,
        }
    }

    /// Keep only entries with this subject
    pub fn with_subject(mut self, subject: Fingerprint) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Keep only entries with this predicate
    pub fn with_predicate(mut self, predicate: Fingerprint) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Keep only entries with this object
    pub fn with_object(mut self, object: Fingerprint) -> Self {
        self.object = Some(object);
        self
    }

    /// Subjects of the remaining entries
    pub fn subjects(self) -> impl Iterator<Item = Fingerprint> + 'a {
        self.map(|entry| entry.subject)
    }

    /// Objects of the remaining entries
    pub fn objects(self) -> impl Iterator<Item = Fingerprint> + 'a {
        self.map(|entry| entry.object)
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.subject.map_or(true, |s| entry.subject == s)
            && self.predicate.map_or(true, |p| entry.predicate == p)
            && self.object.map_or(true, |o| entry.object == o)
    }
}

impl<'a> Iterator for EntryView<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            let entry = match &mut self.source {
                Source::Entries(range) => {
                    let (&(subject, predicate, object), &provenance) = range.next()?;
                    Entry::new(subject, predicate, object, provenance)
                }
                Source::Objects { range, entries } => {
                    let &(object, subject, predicate) = range.next()?;
                    let provenance = entries
                        .get(&(subject, predicate, object))
                        .copied()
                        .unwrap_or_default();
                    Entry::new(subject, predicate, object, provenance)
                }
            };

            if self.matches(&entry) {
                return Some(entry);
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_entry() -> impl Strategy<Value = Entry> {
        (0u8..6, 0u8..2, 0u8..6, any::<bool>()).prop_map(|(s, p, o, inferred)| {
            let provenance = if inferred {
                Provenance::Inferred
            } else {
                Provenance::Asserted
            };
            Entry::new(
                Fingerprint::from_value(s as u128),
                Fingerprint::from_value(100 + p as u128),
                Fingerprint::from_value(o as u128),
                provenance,
            )
        })
    }

    fn arb_taxonomy() -> impl Strategy<Value = Taxonomy> {
        proptest::collection::vec(arb_entry(), 0..24).prop_map(|entries| entries.into_iter().collect())
    }

    fn values(t: &Taxonomy) -> BTreeSet<(Fingerprint, Fingerprint, Fingerprint)> {
        t.iter().map(|e| (e.subject, e.predicate, e.object)).collect()
    }

    proptest! {
        /// Property: union and intersection are commutative on entry values
        #[test]
        fn test_commutative_on_values(a in arb_taxonomy(), b in arb_taxonomy()) {
            prop_assert_eq!(values(&a.union(&b)), values(&b.union(&a)));
            prop_assert_eq!(values(&a.intersect(&b)), values(&b.intersect(&a)));
        }

        /// Property: intersecting a union with an operand gives the operand back
        #[test]
        fn test_union_then_intersect(a in arb_taxonomy(), b in arb_taxonomy()) {
            prop_assert_eq!(values(&a.union(&b).intersect(&a)), values(&a));
        }

        /// Property: a taxonomy minus itself is empty
        #[test]
        fn test_self_difference_is_empty(a in arb_taxonomy()) {
            prop_assert!(a.difference(&a).is_empty());
        }

        /// Property: difference and intersection partition the left operand
        #[test]
        fn test_difference_partitions(a in arb_taxonomy(), b in arb_taxonomy()) {
            let d = a.difference(&b);
            let i = a.intersect(&b);
            prop_assert_eq!(d.len() + i.len(), a.len());
            prop_assert!(d.intersect(&b).is_empty());
        }

        /// Property: both indexes always agree
        #[test]
        fn test_indexes_agree(a in arb_taxonomy()) {
            for entry in a.iter() {
                prop_assert!(a.by_object(entry.object).any(|e| e == entry));
                prop_assert!(a.by_subject(entry.subject).any(|e| e == entry));
            }
        }
    }
}
