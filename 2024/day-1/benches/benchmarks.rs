use divan::black_box;

use aoc2024_day_1::{part1, part2};

const INPUT: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() -> String {
    part1::process(black_box(INPUT)).unwrap()
}

#[divan::bench]
fn bench_part2() -> String {
    part2::process(black_box(INPUT)).unwrap()
}
