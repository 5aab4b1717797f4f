use wayfarer_core::{Content, Location, LocationSnapshot, Point, Position, places};
use wayfarer_map::build_grid;
use wayfarer_paths::find_path;
use wayfarer_sim::{SimWorld, run_until_idle};
use wayfarer_walk::{NavError, Navigator, TickOutcome};

const MAX_TICKS: u32 = 500;

fn farm() -> LocationSnapshot {
    let mut farm = LocationSnapshot::parse(
        places::FARM,
        "
        ......
        ..T...
        ......
        ....s.
        ",
    )
    .unwrap();
    farm.add_warp(Point::new(-1, 2), places::BUS_STOP, Point::new(9, 1));
    farm
}

fn bus_stop() -> LocationSnapshot {
    let mut bus = LocationSnapshot::new(places::BUS_STOP, 12, 4);
    bus.add_warp(Point::new(12, 1), places::FARM, Point::new(0, 2));
    bus
}

fn world_at(tile: Point) -> SimWorld {
    let mut world = SimWorld::new(farm(), tile);
    world.add_location(bus_stop());
    world
}

#[test]
fn clears_every_debris_on_the_farm() {
    let mut world = world_at(Point::new(0, 0));
    let mut nav = Navigator::default();
    let mut cleared = Vec::new();

    loop {
        match nav.go_to_nearest_debris(world.location(), world.avatar()) {
            Ok(route) => {
                let run = run_until_idle(&mut world, &mut nav, MAX_TICKS);
                assert_eq!(run.outcome, TickOutcome::Arrived);
                assert_eq!(world.avatar_tile(), route.destination().unwrap().pos);
                let harvested = world.harvest_adjacent(&nav.config().debris);
                cleared.push(harvested.expect("debris next to the destination"));
            }
            Err(NavError::NoDebris { from }) => {
                assert_eq!(from, world.avatar_tile());
                break;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
        assert!(cleared.len() <= 2);
    }
    assert_eq!(cleared, vec![Content::Tree, Content::Stone]);
    assert!(nav.input().is_idle());
}

#[test]
fn walking_through_an_exit_ends_off_course() {
    let mut world = world_at(Point::new(3, 2));
    let mut nav = Navigator::default();
    let route = nav
        .go_to_warp(world.location(), world.avatar(), places::BUS_STOP)
        .unwrap();
    assert_eq!(route.destination().unwrap().pos, Point::new(-1, 2));

    let run = run_until_idle(&mut world, &mut nav, MAX_TICKS);
    assert_eq!(
        run.outcome,
        TickOutcome::OffCourse {
            expected: Point::new(-1, 2),
            actual: Point::new(9, 1)
        }
    );
    assert_eq!(run.warps, vec![places::BUS_STOP.to_owned()]);
    assert_eq!(world.location().name(), places::BUS_STOP);
    assert!(!nav.is_walking());
    assert!(nav.input().is_idle());

    let err = nav
        .go_to_warp(world.location(), world.avatar(), places::BUS_STOP)
        .unwrap_err();
    assert!(matches!(err, NavError::AlreadyAt { .. }));

    nav.go_to_warp(world.location(), world.avatar(), places::FARM)
        .unwrap();
    let run = run_until_idle(&mut world, &mut nav, MAX_TICKS);
    assert_eq!(run.warps, vec![places::FARM.to_owned()]);
    assert_eq!(world.avatar_tile(), Point::new(0, 2));
}

#[test]
fn walks_the_route_the_engine_plans() {
    let mut world = world_at(Point::new(0, 3));
    let grid = build_grid(world.location());
    let planned = find_path(&grid, Point::new(0, 3), Point::new(5, 0));

    let mut nav = Navigator::default();
    let route = nav
        .go_to(world.location(), world.avatar(), Point::new(5, 0))
        .unwrap();
    assert_eq!(route, planned);

    let mut visited = vec![world.avatar_tile()];
    let mut outcome = TickOutcome::Walking;
    for _ in 0..MAX_TICKS {
        outcome = nav.tick_outcome(world.avatar());
        if outcome != TickOutcome::Walking {
            break;
        }
        let input = nav.poll_input();
        world.step(&input);
        if visited.last() != Some(&world.avatar_tile()) {
            visited.push(world.avatar_tile());
        }
    }
    assert_eq!(outcome, TickOutcome::Arrived);
    assert_eq!(world.avatar_tile(), Point::new(5, 0));

    // Diagonal steps may pass through a corner tile, but every waypoint is
    // visited in order and nothing blocked is ever entered.
    let mut waypoints = route.points().peekable();
    for tile in &visited {
        assert!(!world.location().is_blocked(*tile), "entered blocked {tile}");
        if waypoints.peek() == Some(tile) {
            waypoints.next();
        }
    }
    assert_eq!(waypoints.next(), None);
}

#[test]
fn running_out_of_ticks_stops_the_walk() {
    let mut world = world_at(Point::new(0, 0));
    let mut nav = Navigator::default();
    nav.go_to(world.location(), world.avatar(), Point::new(5, 3))
        .unwrap();
    let run = run_until_idle(&mut world, &mut nav, 3);
    assert!(run.timed_out());
    assert_eq!(run.ticks, 3);
    assert!(!nav.is_walking());
    assert!(nav.input().is_idle());
}

#[test]
fn moving_the_avatar_behind_the_walker_is_detected() {
    let mut world = world_at(Point::new(0, 0));
    let mut nav = Navigator::default();
    nav.go_to(world.location(), world.avatar(), Point::new(5, 0))
        .unwrap();
    assert!(nav.tick(world.avatar()));
    assert_eq!(
        nav.tick_outcome(Position::new(0.0, 3.0)),
        TickOutcome::OffCourse {
            expected: Point::new(1, 0),
            actual: Point::new(0, 3)
        }
    );
    assert!(nav.input().is_idle());
}
