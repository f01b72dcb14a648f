use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use percolation::{Error, Percolation, PercolationStats};

#[test]
fn vertical_path_percolates() {
    let mut grid = Percolation::new(6).unwrap();

    grid.open(1, 6).unwrap();
    grid.open(2, 6).unwrap();
    grid.open(3, 6).unwrap();
    assert!(!grid.percolates());

    grid.open(4, 6).unwrap();
    grid.open(5, 6).unwrap();
    grid.open(6, 6).unwrap();
    assert!(grid.percolates());

    for row in 1..=6 {
        assert!(grid.is_full(row, 6).unwrap());
    }
    assert_eq!(grid.number_of_open_sites(), 6);
}

#[test]
fn winding_path_percolates() {
    let mut grid = Percolation::new(4).unwrap();

    let path = [(1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (4, 3)];

    for (row, col) in path {
        assert!(!grid.percolates());
        grid.open(row, col).unwrap();
    }

    assert!(grid.percolates());
    assert!(grid.is_full(4, 3).unwrap());
}

#[test]
fn full_bottom_row_alone_does_not_percolate() {
    let mut grid = Percolation::new(5).unwrap();

    for col in 1..=5 {
        grid.open(5, col).unwrap();
    }
    grid.open(1, 1).unwrap();
    grid.open(1, 3).unwrap();

    assert!(!grid.percolates());
    for col in 1..=5 {
        assert!(grid.is_open(5, col).unwrap());
        assert!(!grid.is_full(5, col).unwrap());
    }
}

#[test]
fn fullness_never_exceeds_openness() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut grid = Percolation::new(8).unwrap();

    while !grid.percolates() {
        let row = rng.gen_range(1..=8);
        let col = rng.gen_range(1..=8);

        grid.open(row, col).unwrap();
    }

    for row in 1..=8 {
        for col in 1..=8 {
            if grid.is_full(row, col).unwrap() {
                assert!(grid.is_open(row, col).unwrap());
            }
        }
    }
}

#[test]
fn estimated_threshold_is_near_the_known_value() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let stats = PercolationStats::run(20, 30, &mut rng).unwrap();

    // Known empirical site-percolation threshold is about 0.5927 for large
    // grids; small grids wander, hence the wide window.
    let mean = stats.mean();

    assert!((0.55..=0.65).contains(&mean), "mean = {mean}");
    assert!(stats.stddev() > 0.0);
    assert!(stats.confidence_lo() < mean);
    assert!(stats.confidence_hi() > mean);
}

#[test]
fn constructor_argument_validation() {
    assert_eq!(Percolation::new(0).err(), Some(Error::GridSize));
    assert_eq!(PercolationStats::new(0, 5).err(), Some(Error::GridSize));
    assert_eq!(PercolationStats::new(5, 0).err(), Some(Error::Trials));
}
