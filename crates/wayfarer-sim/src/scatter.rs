use rand::{Rng, RngExt};
use wayfarer_core::{Content, Location, LocationSnapshot, Point};

/// Drop up to `count` random debris on open tiles of `loc`, never on
/// `keep_clear`. Returns where debris landed.
///
/// Gives up early when random picks keep hitting occupied tiles.
pub fn scatter_debris(
    loc: &mut LocationSnapshot,
    count: usize,
    keep_clear: &[Point],
    rng: &mut impl Rng,
) -> Vec<Point> {
    let size = loc.size();
    let mut placed = Vec::with_capacity(count);
    if size.x <= 0 || size.y <= 0 {
        return placed;
    }

    let mut attempts = count * 20;
    while placed.len() < count && attempts > 0 {
        attempts -= 1;
        let p = Point::new(rng.random_range(0..size.x), rng.random_range(0..size.y));
        let taken = loc.is_blocked(p)
            || loc.is_water(p)
            || keep_clear.contains(&p)
            || loc.features().iter().any(|f| f.pos == p);
        if taken {
            continue;
        }
        let kind = Content::DEBRIS[rng.random_range(0..Content::DEBRIS.len())];
        let Some(name) = kind.feature_name() else {
            continue;
        };
        loc.set_blocked(p, true);
        loc.add_feature(p, name);
        placed.push(p);
    }
    log::debug!("scattered {} debris over {}", placed.len(), loc.name());
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::places;

    #[test]
    fn debris_lands_on_open_tiles_only() {
        let mut farm = LocationSnapshot::parse(places::FARM, "#....\n.~~..\n.....").unwrap();
        let keep = [Point::new(0, 2)];
        let mut rng = rand::rng();
        let placed = scatter_debris(&mut farm, 6, &keep, &mut rng);

        assert!(!placed.is_empty());
        assert!(placed.len() <= 6);
        for p in &placed {
            assert_ne!(*p, Point::new(0, 2));
            assert_ne!(*p, Point::new(0, 0));
            assert!(!farm.is_water(*p));
            assert!(farm.is_blocked(*p));
        }
        let debris = farm
            .features()
            .iter()
            .filter_map(|f| Content::from_feature_name(&f.name))
            .filter(|c| c.is_debris())
            .count();
        assert_eq!(debris, placed.len());
    }

    #[test]
    fn full_maps_get_nothing() {
        let mut farm = LocationSnapshot::parse(places::FARM, "##\n##").unwrap();
        let placed = scatter_debris(&mut farm, 3, &[], &mut rand::rng());
        assert!(placed.is_empty());
    }
}
