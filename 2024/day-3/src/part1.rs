use miette::*;
use regex::Regex;

/// Collects every intact multiplication instruction in the memory dump.
/// Anything the pattern does not match exactly is corruption and skipped.
fn scan_multiplications(input: &str) -> Result<Vec<(i64, i64)>> {
    let pattern = Regex::new(r"mul\(([0-9]+),([0-9]+)\)").into_diagnostic()?;
    pattern
        .captures_iter(input)
        .map(|captures| {
            let (_, [a, b]) = captures.extract();
            Ok((a.parse().into_diagnostic()?, b.parse().into_diagnostic()?))
        })
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let multiplications = scan_multiplications(input)?;
    tracing::info!(found = multiplications.len(), "scanned memory");

    let sum: i64 = multiplications.iter().map(|(a, b)| a * b).sum();

    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!("161", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("mul(2,4)", "8")]
    #[case("mul(2,4", "0")]
    #[case("mul ( 2 , 4 )", "0")]
    #[case("nothing to see here", "0")]
    fn only_exact_matches_count(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
