use std::fmt::Write;

use super::*;

impl List {
    pub fn run(self) -> CommandResult {
        for algorithm in Algorithm::ALL {
            print!("{}", describe(algorithm, self.pseudocode)?);
        }
        Ok(())
    }
}

/// Catalog entry of `algorithm`, with its pseudocode indented below when
/// `pseudocode` is set.
fn describe(algorithm: Algorithm, pseudocode: bool) -> Result<String, std::fmt::Error> {
    let info = algorithm.info();
    let mut out = String::new();
    writeln!(out, "{:<15} {}", algorithm.id(), info.name)?;
    writeln!(out, "{:<15} {}", "", info.description)?;
    writeln!(
        out,
        "{:<15} complete: {}, optimal: {}, time {}, space {}",
        "",
        yes_no(info.complete),
        yes_no(info.optimal),
        info.time_complexity,
        info.space_complexity
    )?;
    if pseudocode {
        writeln!(out)?;
        for line in info.pseudocode.lines() {
            writeln!(out, "{:<15} {line}", "")?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
