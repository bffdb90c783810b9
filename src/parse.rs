use std::str::FromStr;

use winnow::{
    Parser,
    ascii::{dec_int, multispace0, multispace1},
    combinator::{delimited, separated},
};

use crate::{error::SetError, int_set::IntSet};

/// Reads the text written by [`IntSet::dump`]. Any whitespace separates
/// members.
impl<const N: usize> FromStr for IntSet<N> {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = members
            .parse(s)
            .map_err(|e| SetError::Parse(e.to_string()))?;
        Self::try_from(values.as_slice())
    }
}

fn members(input: &mut &str) -> winnow::Result<Vec<i32>> {
    delimited(
        multispace0,
        separated(0.., dec_int::<_, i32, _>, multispace1),
        multispace0,
    )
    .parse_next(input)
}
