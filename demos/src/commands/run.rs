use std::thread;
use std::time::Duration;

use gridstep_core::{Grid, compute_frame};
use gridstep_search::{Engine, SearchConfig, StepResult};

use super::*;
use crate::{mapgen, render};

impl Run {
    fn load_grid(&self) -> Result<Grid, Box<dyn Error>> {
        if let Some(path) = &self.map {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            return Ok(Grid::from_ascii(&text)?);
        }
        let (width, height) = (self.width, self.height);
        if width < 2 || height < 1 {
            return Err(format!("grid {width}x{height} is too small").into());
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        if self.maze {
            log::info!("{width}x{height} maze, seed {seed}");
            return Ok(mapgen::recursive_division(width, height, seed));
        }
        if !(0.0..1.0).contains(&self.density) {
            return Err(format!("density {} not in [0, 1)", self.density).into());
        }
        log::info!("random {width}x{height} grid, seed {seed}");
        Ok(mapgen::scatter(width, height, self.density, seed))
    }

    fn config(&self) -> SearchConfig {
        SearchConfig::new(self.algorithm)
            .with_heuristic(self.heuristic)
            .with_diagonal(self.diagonal)
            .with_depth_limit(self.depth_limit)
            .with_weight(self.weight)
    }

    pub fn run(self) -> CommandResult {
        let grid = self.load_grid()?;
        let mut engine = Engine::new(grid).with_config(self.config());
        engine.initialize()?;
        let name = self.algorithm.info().name;
        log::info!("running {} ({name})", self.algorithm);

        let interval = Duration::from_millis(self.interval);
        let mut prev = engine.grid().clone();
        let mut status = engine.status();
        let result = loop {
            let Some(result) = engine.tick() else {
                break None;
            };
            if engine.status() != status {
                status = engine.status();
                log::info!("status: {status}");
            }
            if self.frames {
                let frame = compute_frame(&prev, engine.grid());
                log::debug!("{} cells changed", frame.cells.len());
                println!("{}", render::frame(engine.grid()));
                prev.clone_from(engine.grid());
            }
            if result.is_terminal() {
                break Some(result);
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        };

        let stats = engine.statistics();
        let grid = engine.into_grid();
        println!("{}", render::frame(&grid));
        match result {
            Some(StepResult::Found(_)) => println!(
                "path found: {} nodes, cost {:.2}",
                stats.path_length, stats.path_cost
            ),
            _ => println!("no path"),
        }
        println!(
            "visited {}, frontier {}, {} ms",
            stats.visited_count, stats.frontier_size, stats.elapsed_millis
        );
        Ok(())
    }
}
