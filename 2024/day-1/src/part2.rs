use counter::Counter;
use miette::*;
use nom::{
    character::complete::{i64 as integer, multispace0, multispace1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

/// Parses the two location lists as one stream of whitespace-separated
/// integer pairs. Line boundaries carry no meaning; the stream just has to
/// hold a right value for every left value.
fn parse_lists(input: &str) -> IResult<&str, Vec<(i64, i64)>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, separated_pair(integer, multispace1, integer)),
        multispace0,
    ))(input)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (_, pairs) =
        parse_lists(input).map_err(|e| miette!("Parse failed with errors: {:?}", e))?;

    let (left, right): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();

    // How often each location id shows up in the right list.
    let counts: Counter<i64> = right.into_iter().collect();

    let similarity: i64 = left.iter().map(|id| id * counts[id] as i64).sum();

    Ok(similarity.to_string())
}
