use anyhow::{Result, bail};
use rand::Rng;
use rand_xoshiro::Xoshiro128Plus;

use crate::int_set::IntSet;

/// Draws `count` distinct members uniformly from `low..=high`, in draw order.
pub(crate) fn random_set<const N: usize>(
    count: usize,
    low: i32,
    high: i32,
    rng: &mut Xoshiro128Plus,
) -> Result<IntSet<N>> {
    if count > N {
        bail!("Requested {count} members, capacity is {N}");
    }
    if low > high {
        bail!("Empty range {low}..={high}");
    }
    let span = i64::from(high) - i64::from(low) + 1;
    if span < i64::try_from(count)? {
        bail!("Range {low}..={high} holds only {span} values, {count} requested");
    }

    let mut set = IntSet::new();
    while set.size() < count {
        let value = rng.random_range(low..=high);
        if !set.contains(value) {
            set.add(value);
        }
    }
    Ok(set)
}
