use miette::*;

use aoc2024_day_1::{input, part2};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let input = input::read(std::env::args())?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
