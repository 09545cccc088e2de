use itertools::Itertools;
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

    let total_distance: i64 = left
        .iter()
        .sorted_unstable()
        .zip(right.iter().sorted_unstable())
        .map(|(left, right)| (left - right).abs())
        .sum();

    Ok(total_distance.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        assert_eq!("11", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("1 1", "0")]
    #[case("1 3\n2 1", "1")]
    #[case("-3 3", "6")]
    fn totals_small_streams(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn pairs_ignore_line_boundaries() -> Result<()> {
        assert_eq!("2", process("3 4 5\n6")?);
        Ok(())
    }

    #[test]
    fn rejects_a_dangling_value() {
        assert!(process("3   4\n2").is_err());
    }

    #[test]
    fn rejects_a_malformed_token() {
        assert!(process("three   4").is_err());
    }
}
