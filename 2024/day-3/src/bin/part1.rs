use miette::*;

use aoc2024_day_3::{input, part1};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let input = input::read(std::env::args())?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
