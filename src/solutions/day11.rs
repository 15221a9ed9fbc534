use std::collections::HashMap;

use advent_framework::parsing::parse_input_lines;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(name = "Day 11: Device Graph", part_one = Day11, part_two = Day11)]
impl super::AdventOfCode2025<11> {}

#[derive(Error, Debug)]
enum Day11Error {
    #[error("line is not formatted as `device: out out ...`: {0:?}")]
    MalformedLine(String),
    #[error("no {0} device found in data")]
    MissingDevice(&'static str),
}

/*
Input is a list of devices and their outputs, like `aaa: you hhh`. Data only flows along outputs,
and a device mentioned without its own line has no outputs.

Part 1 counts the distinct paths from `you` to `out`.

Part 2 counts the paths from `svr` to `out` that pass through both `dac` and `fft`. Every such
path visits them in one order or the other, so it is the path products of `svr -> dac -> fft ->
out` and `svr -> fft -> dac -> out` added together.
*/

/// Each device's outputs, keyed by device name.
struct DeviceGraph(HashMap<String, Vec<String>>);

impl DeviceGraph {
    /// Require a device to have its own line in the input.
    fn require(&self, key: &'static str) -> Result<(), Day11Error> {
        if self.0.contains_key(key) {
            Ok(())
        } else {
            Err(Day11Error::MissingDevice(key))
        }
    }

    /// Count the distinct paths from one device to another, memoized per starting device.
    fn count_paths(&self, from: &str, to: &str) -> u64 {
        let mut cache = HashMap::new();
        self.count_paths_cached(from, to, &mut cache)
    }

    fn count_paths_cached<'a>(
        &'a self,
        from: &'a str,
        to: &str,
        cache: &mut HashMap<&'a str, u64>,
    ) -> u64 {
        if from == to {
            return 1;
        }
        if let Some(&cached) = cache.get(from) {
            return cached;
        }

        let mut count = 0;
        if let Some(outputs) = self.0.get(from) {
            for output in outputs {
                count += self.count_paths_cached(output, to, cache);
            }
        }

        cache.insert(from, count);
        count
    }
}

impl ParseData for DeviceGraph {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut links = HashMap::new();

        parse_input_lines(input, |_, line| {
            if line.trim().is_empty() {
                return Ok(());
            }
            let (key, outputs) = line
                .split_once(": ")
                .ok_or_else(|| Day11Error::MalformedLine(line.to_string()))?;
            let outputs: Vec<String> = outputs
                .split_whitespace()
                .map(ToString::to_string)
                .collect();
            links.insert(key.trim().to_string(), outputs);
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        Ok(Self(links))
    }
}

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = DeviceGraph;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.require("you")?;
        Ok(input.count_paths("you", "out"))
    }
}

impl Solution<PartTwo> for Day11 {
    type Input = DeviceGraph;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.require("svr")?;
        input.require("dac")?;
        input.require("fft")?;

        let svr_to_dac = input.count_paths("svr", "dac");
        let dac_to_fft = input.count_paths("dac", "fft");
        let fft_to_out = input.count_paths("fft", "out");

        let svr_to_fft = input.count_paths("svr", "fft");
        let fft_to_dac = input.count_paths("fft", "dac");
        let dac_to_out = input.count_paths("dac", "out");

        Ok(svr_to_dac * dac_to_fft * fft_to_out + svr_to_fft * fft_to_dac * dac_to_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"you: aaa bbb
aaa: out
bbb: aaa ccc
ccc: out
svr: dac fft
dac: fft out
fft: out
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = DeviceGraph::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = DeviceGraph::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }

    #[test]
    fn missing_devices_are_an_error() -> DynamicResult<()> {
        let parsed = DeviceGraph::parse("aaa: out\n")?;
        assert!(<Day11 as Solution<PartOne>>::solve(&parsed).is_err());
        assert!(<Day11 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn undefined_devices_have_no_outputs() -> DynamicResult<()> {
        // bbb has no line of its own, so paths can't continue through it
        let parsed = DeviceGraph::parse("you: aaa bbb\naaa: out\n")?;
        assert_eq!(<Day11 as Solution<PartOne>>::solve(&parsed)?, 1);
        Ok(())
    }
}
