use std::collections::HashMap;

use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point3;
use thiserror::Error;

#[solution_runner(name = "Day 8: Junction Circuits", part_one = Day08, part_two = Day08)]
impl super::AdventOfCode2025<8> {}

#[derive(Error, Debug)]
enum Day08Error {
    #[error("junction box is not formatted as `x,y,z`: {0:?}")]
    MalformedPoint(String),
    #[error("fewer than three circuits after linking the closest pairs")]
    NotEnoughCircuits,
    #[error("junction boxes never formed a single circuit")]
    NeverCompleted,
}

/*
Input is a list of junction box positions like `162,817,812`, one per line. Boxes are linked pair
by pair in order of distance, closest first, growing circuits: linking two loose boxes starts a
circuit, linking into a circuit joins it, and linking boxes of two circuits merges them. Linking
two boxes already in the same circuit changes nothing.

Part 1 stops after linking the closest pairs (10 for the 20-box example, 1000 for the real input)
and multiplies the sizes of the three largest circuits.

Part 2 keeps linking until every box is in one circuit, and multiplies the x coordinates of the
last pair linked.
*/

/// The number of closest pairs to link for part one.
fn closest_pair_count(boxes: usize) -> usize {
    // the worked example uses 20 boxes and a shorter run
    if boxes == 20 { 10 } else { 1000 }
}

/// Junction box positions and the part one pair count for this input size.
struct JunctionBoxes {
    points: Vec<Point3<i64>>,
    closest_n: usize,
}

impl ParseData for JunctionBoxes {
    fn parse(input: &str) -> DynamicResult<Self> {
        let points = parse_input_lines(input, |_, line| {
            let mut nums = line.split(',');
            let mut next_num = || {
                nums.next()
                    .ok_or_else(|| Day08Error::MalformedPoint(line.to_string()))
            };
            let x = parse_with_context(next_num()?)?;
            let y = parse_with_context(next_num()?)?;
            let z = parse_with_context(next_num()?)?;
            Ok(Point3::new(x, y, z))
        })
        .collect::<Result<Vec<_>, _>>()?;

        let closest_n = closest_pair_count(points.len());
        Ok(Self { points, closest_n })
    }
}

fn dist_squared(a: Point3<i64>, b: Point3<i64>) -> i64 {
    let delta = a - b;
    delta.x * delta.x + delta.y * delta.y + delta.z * delta.z
}

/// The outcomes of linking junction boxes into circuits.
struct LinkOutcome {
    /// The product of the three largest circuit sizes after linking the closest pairs.
    largest_product: Option<u64>,
    /// The product of the x coordinates of the pair completing the single circuit.
    closing_product: Option<i64>,
}

/// The product of the three largest circuit sizes, or `None` with fewer than three circuits.
fn largest_three_product(circuits: &HashMap<usize, Vec<usize>>) -> Option<u64> {
    let mut sizes: Vec<usize> = circuits.values().map(Vec::len).collect();
    if sizes.len() < 3 {
        return None;
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Some(sizes.iter().take(3).map(|&size| size as u64).product())
}

/// Link boxes pair by pair, closest first, tracking both parts' outcomes in one pass.
fn link_circuits(points: &[Point3<i64>], closest_n: usize) -> LinkOutcome {
    let mut pairs = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for (i, &a) in points.iter().enumerate() {
        for (j, &b) in points.iter().enumerate().skip(i + 1) {
            pairs.push((dist_squared(a, b), i, j));
        }
    }
    pairs.sort_by_key(|&(dist, _, _)| dist);

    // which circuit each box belongs to, and the boxes in each circuit
    let mut membership: Vec<Option<usize>> = vec![None; points.len()];
    let mut circuits: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut next_circuit = 0;

    let mut largest_product = None;
    let mut closing_product = None;

    for (count, &(_, i, j)) in pairs.iter().enumerate() {
        if count == closest_n {
            largest_product = largest_three_product(&circuits);
        }

        match (membership[i], membership[j]) {
            (Some(a), Some(b)) if a == b => {}
            (Some(a), Some(b)) => {
                // merge circuit b into a
                if let Some(merged) = circuits.remove(&b) {
                    for &node in &merged {
                        membership[node] = Some(a);
                    }
                    circuits.entry(a).or_default().extend(merged);
                }
            }
            (Some(a), None) => {
                membership[j] = Some(a);
                circuits.entry(a).or_default().push(j);
            }
            (None, Some(b)) => {
                membership[i] = Some(b);
                circuits.entry(b).or_default().push(i);
            }
            (None, None) => {
                membership[i] = Some(next_circuit);
                membership[j] = Some(next_circuit);
                circuits.insert(next_circuit, vec![i, j]);
                next_circuit += 1;
            }
        }

        if circuits.len() == 1
            && circuits
                .values()
                .next()
                .is_some_and(|nodes| nodes.len() == points.len())
        {
            closing_product = Some(points[i].x * points[j].x);
            break;
        }
    }

    LinkOutcome {
        largest_product,
        closing_product,
    }
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = JunctionBoxes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let outcome = link_circuits(&input.points, input.closest_n);
        Ok(outcome
            .largest_product
            .ok_or(Day08Error::NotEnoughCircuits)?)
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = JunctionBoxes;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let outcome = link_circuits(&input.points, input.closest_n);
        Ok(outcome.closing_product.ok_or(Day08Error::NeverCompleted)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_points() -> Vec<Point3<i64>> {
        [0, 1, 10, 12, 30, 33, 100]
            .into_iter()
            .map(|x| Point3::new(x, 0, 0))
            .collect()
    }

    #[test]
    fn links_closest_pairs_into_circuits() {
        let outcome = link_circuits(&axis_points(), 3);

        // after three pairs: {0,1}, {10,12}, {30,33}
        assert_eq!(outcome.largest_product, Some(8));
        // the last link joins 33 and 100
        assert_eq!(outcome.closing_product, Some(3_300));
    }

    #[test]
    fn too_few_circuits_reports_no_product() {
        let points = vec![
            Point3::new(0, 0, 0),
            Point3::new(1, 0, 0),
            Point3::new(2, 0, 0),
        ];
        let outcome = link_circuits(&points, 1);
        assert_eq!(outcome.largest_product, None);
        assert!(outcome.closing_product.is_some());
    }

    #[test]
    fn parse_picks_pair_count_by_input_size() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse("1,2,3\n4,5,6\n")?;
        assert_eq!(parsed.points, vec![Point3::new(1, 2, 3), Point3::new(4, 5, 6)]);
        assert_eq!(parsed.closest_n, 1_000);

        let twenty: String = (0..20).map(|i| format!("{i},0,0\n")).collect();
        assert_eq!(JunctionBoxes::parse(&twenty)?.closest_n, 10);
        Ok(())
    }
}
