use itertools::Itertools;
use miette::*;
use nom::{
    character::complete::{i64 as integer, line_ending, multispace0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::terminated,
    IResult,
};

/// Parses one report per line, each a whitespace-separated run of levels.
fn parse_reports(input: &str) -> IResult<&str, Vec<Vec<i64>>> {
    all_consuming(terminated(
        separated_list1(line_ending, separated_list1(space1, integer)),
        multispace0,
    ))(input)
}

/// A report is safe when every step between adjacent levels moves in the
/// same direction as the first step, by at least one and at most three.
///
/// The scan walks left to right and stops at the first violating step.
/// Reports with fewer than two levels have no step to violate.
pub fn is_safe(report: &[i64]) -> bool {
    let mut steps = report.iter().tuple_windows().map(|(a, b)| b - a);
    let Some(first) = steps.next() else {
        return true;
    };
    if first == 0 || first.abs() > 3 {
        return false;
    }
    steps.all(|step| step.abs() <= 3 && step.signum() == first.signum())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (_, reports) =
        parse_reports(input).map_err(|e| miette!("Parse failed with errors: {:?}", e))?;

    let safe = reports.iter().filter(|report| is_safe(report)).count();
    tracing::info!(total = reports.len(), safe, "checked every report");

    Ok(safe.to_string())
}
