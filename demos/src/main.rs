//! Walk a simulated avatar around a farm: clear the scattered debris, then
//! head for the bus stop.
//!
//! ```text
//! RUST_LOG=debug cargo run -p wayfarer-demos -- --target both --debris 8
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use wayfarer_core::{Location, LocationSnapshot, Point, places};
use wayfarer_sim::{SimWorld, run_until_idle, scatter_debris};
use wayfarer_walk::{NavConfig, NavError, Navigator, TickOutcome};

#[derive(Parser, Debug)]
#[command(name = "walkabout", version, about = "Walk a simulated avatar around a farm")]
struct Args {
    /// TOML file with navigator and farm settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// What to walk to
    #[arg(long, value_enum, default_value_t = Target::Both)]
    target: Target,

    /// Tick budget for each walk
    #[arg(long, value_name = "N", default_value_t = 2000)]
    max_ticks: u32,

    /// Number of debris to scatter, overriding the config file
    #[arg(long, value_name = "N")]
    debris: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Debris,
    Warp,
    Both,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    nav: NavConfig,
    farm: FarmConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FarmConfig {
    width: i32,
    height: i32,
    debris: usize,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            width: 24,
            height: 16,
            debris: 12,
        }
    }
}

const START: Point = Point::new(2, 2);

fn load_config(path: Option<&PathBuf>) -> Result<DemoConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let config = toml::from_str(&text)?;
    log::info!("loaded {}", path.display());
    Ok(config)
}

/// A farm with a house, a pond and an exit east to the bus stop.
fn build_farm(cfg: &FarmConfig) -> LocationSnapshot {
    let (w, h) = (cfg.width.max(8), cfg.height.max(8));
    let mut farm = LocationSnapshot::new(places::FARM, w, h);
    for x in w / 2..w / 2 + 4 {
        for y in 1..4 {
            farm.set_blocked(Point::new(x, y), true);
        }
    }
    for x in 2..5 {
        for y in h - 4..h - 2 {
            farm.set_water(Point::new(x, y), true);
        }
    }
    farm.add_warp(Point::new(w, h / 2), places::BUS_STOP, Point::new(0, 4));
    farm
}

fn build_bus_stop(farm_size: Point) -> LocationSnapshot {
    let mut bus = LocationSnapshot::new(places::BUS_STOP, 20, 8);
    bus.add_warp(
        Point::new(-1, 4),
        places::FARM,
        Point::new(farm_size.x - 1, farm_size.y / 2),
    );
    bus
}

fn clear_debris(world: &mut SimWorld, nav: &mut Navigator, max_ticks: u32) -> Result<usize, Box<dyn Error>> {
    let mut cleared = 0;
    loop {
        match nav.go_to_nearest_debris(world.location(), world.avatar()) {
            Ok(route) => {
                log::info!("heading for debris, {} tiles", route.len());
                let run = run_until_idle(world, nav, max_ticks);
                if run.outcome != TickOutcome::Arrived {
                    log::warn!("walk ended with {:?} after {} ticks", run.outcome, run.ticks);
                    return Ok(cleared);
                }
                match world.harvest_adjacent(&nav.config().debris) {
                    Some(content) => {
                        cleared += 1;
                        log::info!("cleared {content:?} from {}", world.avatar_tile());
                    }
                    None => return Ok(cleared),
                }
            }
            Err(NavError::NoDebris { .. }) => return Ok(cleared),
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut config = load_config(args.config.as_ref())?;
    if let Some(n) = args.debris {
        config.farm.debris = n;
    }

    let mut farm = build_farm(&config.farm);
    let exit_lane = Point::new(farm.size().x - 1, farm.size().y / 2);
    let placed = scatter_debris(&mut farm, config.farm.debris, &[START, exit_lane], &mut rand::rng());
    log::info!("{} debris on a {} farm", placed.len(), farm.size());

    let bus = build_bus_stop(farm.size());
    let mut world = SimWorld::new(farm, START);
    world.add_location(bus);
    let mut nav = Navigator::new(config.nav);

    if matches!(args.target, Target::Debris | Target::Both) {
        let cleared = clear_debris(&mut world, &mut nav, args.max_ticks)?;
        println!("cleared {cleared} of {} debris", placed.len());
    }

    if matches!(args.target, Target::Warp | Target::Both) {
        let route = nav.go_to_warp(world.location(), world.avatar(), places::BUS_STOP)?;
        log::info!("heading for {}, {} tiles", places::BUS_STOP, route.len());
        let run = run_until_idle(&mut world, &mut nav, args.max_ticks);
        println!(
            "now in {} at {} after {} ticks",
            world.location().name(),
            world.avatar_tile(),
            run.ticks
        );
    }

    nav.end_session();
    Ok(())
}
