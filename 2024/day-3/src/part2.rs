use miette::*;
use regex::Regex;

#[derive(Debug, Clone, Copy)]
enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

/// Collects every intact instruction in the memory dump, in order of
/// appearance. Anything the pattern does not match exactly is corruption
/// and skipped.
fn scan_instructions(input: &str) -> Result<Vec<Instruction>> {
    let pattern = Regex::new(r"mul\(([0-9]+),([0-9]+)\)|do\(\)|don't\(\)").into_diagnostic()?;
    pattern
        .captures_iter(input)
        .map(|captures| match &captures[0] {
            "do()" => Ok(Instruction::Do),
            "don't()" => Ok(Instruction::Dont),
            _ => Ok(Instruction::Mul(
                captures[1].parse().into_diagnostic()?,
                captures[2].parse().into_diagnostic()?,
            )),
        })
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let instructions = scan_instructions(input)?;
    tracing::info!(found = instructions.len(), "scanned memory");

    // The scan starts with multiplications enabled.
    let (_, sum) = instructions.iter().fold(
        (true, 0_i64),
        |(enabled, sum), instruction| match instruction {
            Instruction::Mul(a, b) if enabled => (enabled, sum + a * b),
            Instruction::Mul(..) => (enabled, sum),
            Instruction::Do => (true, sum),
            Instruction::Dont => (false, sum),
        },
    );

    Ok(sum.to_string())
}
