use std::{fmt, io};

use log::{debug, trace};

use crate::error::SetError;

/// Default capacity of an [`IntSet`].
pub const MAX_SIZE: usize = 10;

/// A set of distinct `i32` values that holds at most `N` members.
///
/// Members live in a fixed array and keep the order in which they most
/// recently became members. Removing a value and adding it again moves it to
/// the end.
#[derive(Clone, Copy)]
pub struct IntSet<const N: usize = MAX_SIZE> {
    data: [i32; N],
    // `data[used..]` is never read.
    used: usize,
}

impl<const N: usize> IntSet<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            used: 0,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.used
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Members in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.data[..self.used]
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.as_slice().iter().copied()
    }

    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    /// Appends `value` unless it is already a member or the set is full.
    ///
    /// # Errors
    /// [`SetError::DuplicateValue`] or [`SetError::CapacityExceeded`]; the set
    /// is left untouched in both cases.
    pub fn try_add(&mut self, value: i32) -> Result<(), SetError> {
        if self.contains(value) {
            debug!("rejected duplicate member {value}");
            return Err(SetError::DuplicateValue(value));
        }
        if self.used == N {
            debug!("rejected {value}, set is full at {N} members");
            return Err(SetError::CapacityExceeded { capacity: N });
        }
        self.data[self.used] = value;
        self.used += 1;
        trace!("added {value}, size is now {}", self.used);
        Ok(())
    }

    /// Appends `value` as the newest member.
    ///
    /// Callers must know that `value` is absent and the set has room. Use
    /// [`IntSet::try_add`] when either might not hold.
    ///
    /// # Panics
    /// If `value` is already a member or the set is full.
    pub fn add(&mut self, value: i32) -> bool {
        if let Err(e) = self.try_add(value) {
            panic!("add({value}) precondition violated: {e}");
        }
        true
    }

    /// Removes `value`, shifting later members left. Returns `false` if it
    /// was not a member.
    pub fn remove(&mut self, value: i32) -> bool {
        let Some(position) = self.as_slice().iter().position(|&v| v == value) else {
            return false;
        };
        self.data.copy_within(position + 1..self.used, position);
        self.used -= 1;
        trace!("removed {value}, size is now {}", self.used);
        true
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }

    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.is_empty() || (self.used <= other.used && self.iter().all(|v| other.contains(v)))
    }

    /// Members of `self` followed by the members of `other` not in `self`.
    ///
    /// # Errors
    /// [`SetError::CapacityExceeded`] if the union has more than `N` members.
    pub fn try_union_with(&self, other: &Self) -> Result<Self, SetError> {
        let extra = other.subtract(self);
        if self.used + extra.used > N {
            debug!(
                "union of {} and {} new members exceeds capacity {N}",
                self.used, extra.used
            );
            return Err(SetError::CapacityExceeded { capacity: N });
        }
        let mut union = *self;
        for value in extra.iter() {
            union.add(value);
        }
        Ok(union)
    }

    /// # Panics
    /// If the union has more than `N` members.
    #[must_use]
    pub fn union_with(&self, other: &Self) -> Self {
        match self.try_union_with(other) {
            Ok(union) => union,
            Err(e) => panic!("union_with precondition violated: {e}"),
        }
    }

    /// Members present in both sets, in the order they have in `self`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut intersection = *self;
        for value in self.iter() {
            if !other.contains(value) {
                intersection.remove(value);
            }
        }
        intersection
    }

    /// Members of `self` that are not in `other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let mut difference = Self::new();
        for value in self.iter().filter(|&v| !other.contains(v)) {
            difference.add(value);
        }
        difference
    }

    /// Writes the members in order, separated by two spaces.
    ///
    /// # Errors
    /// Whatever the sink returns.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let mut members = self.iter();
        if let Some(first) = members.next() {
            write!(out, "{first}")?;
            for value in members {
                write!(out, "  {value}")?;
            }
        }
        Ok(())
    }

    /// [`IntSet::dump`] for byte sinks.
    ///
    /// # Errors
    /// Whatever the sink returns.
    pub fn dump_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

/// Set equality, ignoring order.
#[must_use]
pub fn equal<const N: usize>(a: &IntSet<N>, b: &IntSet<N>) -> bool {
    a.size() == b.size() && a.subtract(b).is_empty()
}

impl<const N: usize> Default for IntSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for IntSet<N> {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl<const N: usize> Eq for IntSet<N> {}

impl<const N: usize> fmt::Debug for IntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.as_slice()).finish()
    }
}

impl<const N: usize> fmt::Display for IntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f)
    }
}

impl<const N: usize> TryFrom<&[i32]> for IntSet<N> {
    type Error = SetError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for &value in values {
            set.try_add(value)?;
        }
        Ok(set)
    }
}

impl<'a, const N: usize> IntoIterator for &'a IntSet<N> {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[i32]) -> IntSet {
        IntSet::try_from(values).unwrap()
    }

    fn small<const N: usize>(values: &[i32]) -> IntSet<N> {
        IntSet::try_from(values).unwrap()
    }

    #[test]
    fn new_set_is_empty() {
        let s: IntSet = IntSet::new();
        assert!(s.is_empty());
        assert_eq!(s.size(), 0);
        assert_eq!(s.capacity(), MAX_SIZE);
        assert_eq!(s.to_string(), "");
    }

    #[test]
    fn dump_keeps_insertion_order() {
        let mut s: IntSet = IntSet::new();
        assert!(s.add(3));
        assert!(s.add(1));
        assert!(s.add(2));
        let mut out = String::new();
        s.dump(&mut out).unwrap();
        assert_eq!(out, "3  1  2");
    }

    #[test]
    fn dump_to_writes_bytes() {
        let mut out = Vec::new();
        set(&[-4, 0, 9]).dump_to(&mut out).unwrap();
        assert_eq!(out, b"-4  0  9");
    }

    #[test]
    fn readding_moves_value_to_end() {
        let mut s: IntSet = IntSet::new();
        s.add(1);
        s.add(2);
        assert!(s.remove(1));
        s.add(1);
        assert_eq!(s.to_string(), "2  1");
    }

    #[test]
    fn remove_shifts_survivors() {
        let mut s = set(&[5, 6, 7, 8]);
        assert!(s.remove(6));
        assert_eq!(s.as_slice(), &[5, 7, 8]);
        assert!(s.remove(8));
        assert_eq!(s.as_slice(), &[5, 7]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut s = set(&[1, 2]);
        assert!(!s.remove(3));
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn reset_empties() {
        let mut s = set(&[1, 2, 3]);
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.size(), 0);
        assert!(!s.contains(1));
    }

    #[test]
    fn concrete_algebra() {
        let s = set(&[1, 2, 3]);
        let t = set(&[3, 4, 5]);

        let union = s.union_with(&t);
        assert_eq!(union.size(), 5);
        assert_eq!(union.to_string(), "1  2  3  4  5");

        let intersection = s.intersect(&t);
        assert_eq!(intersection.size(), 1);
        assert_eq!(intersection.to_string(), "3");

        assert_eq!(s.subtract(&t).to_string(), "1  2");
        assert_eq!(t.subtract(&s).to_string(), "4  5");
    }

    #[test]
    fn intersect_keeps_receiver_order() {
        let s = set(&[9, 4, 7, 1]);
        let t = set(&[1, 7, 9]);
        assert_eq!(s.intersect(&t).as_slice(), &[9, 7, 1]);
        assert!(s.intersect(&IntSet::new()).is_empty());
    }

    #[test]
    fn subset_rules() {
        let empty: IntSet = IntSet::new();
        let s = set(&[1, 2]);
        let t = set(&[2, 1, 3]);
        assert!(empty.is_subset_of(&empty));
        assert!(empty.is_subset_of(&s));
        assert!(s.is_subset_of(&t));
        assert!(!t.is_subset_of(&s));
        assert!(!set(&[1, 4]).is_subset_of(&t));
    }

    #[test]
    fn equality_ignores_order() {
        assert!(equal(&set(&[1, 2, 3]), &set(&[3, 1, 2])));
        assert!(!equal(&set(&[1, 2]), &set(&[1, 2, 3])));
        assert!(!equal(&set(&[1, 2]), &set(&[1, 3])));
        assert_eq!(set(&[4, 5]), set(&[5, 4]));
    }

    #[test]
    fn try_add_at_capacity_leaves_set_alone() {
        let mut s: IntSet<3> = small(&[1, 2, 3]);
        assert_eq!(
            s.try_add(4),
            Err(SetError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(s.size(), 3);
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn try_add_duplicate_is_rejected() {
        let mut s = set(&[1]);
        assert_eq!(s.try_add(1), Err(SetError::DuplicateValue(1)));
        assert_eq!(s.size(), 1);
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn add_at_capacity_panics() {
        let mut s: IntSet<2> = IntSet::new();
        s.add(1);
        s.add(2);
        s.add(3);
    }

    #[test]
    #[should_panic(expected = "already a member")]
    fn add_duplicate_panics() {
        let mut s: IntSet = IntSet::new();
        s.add(1);
        s.add(1);
    }

    #[test]
    fn union_counts_only_new_members() {
        let s: IntSet<3> = small(&[1, 2, 3]);
        let t: IntSet<3> = small(&[3, 2]);
        assert_eq!(s.union_with(&t).as_slice(), &[1, 2, 3]);

        let u: IntSet<3> = small(&[4]);
        assert_eq!(
            s.try_union_with(&u),
            Err(SetError::CapacityExceeded { capacity: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "union_with precondition violated")]
    fn union_over_capacity_panics() {
        let s: IntSet<2> = small(&[1, 2]);
        let t: IntSet<2> = small(&[3]);
        let _ = s.union_with(&t);
    }

    #[test]
    fn borrowed_iteration_follows_order() {
        let s = set(&[8, -3, 5]);
        let mut seen = Vec::new();
        for &value in &s {
            seen.push(value);
        }
        assert_eq!(seen, s.iter().collect::<Vec<_>>());
    }

    #[test]
    fn debug_lists_members_only() {
        let mut s = set(&[1, 2, 3]);
        s.remove(3);
        assert_eq!(format!("{s:?}"), "{1, 2}");
    }
}
