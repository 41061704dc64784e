use conway_torus::{Grid, Pattern, presets};

fn centred(rows: usize, cols: usize, pattern: &Pattern) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    grid.place_pattern(pattern);
    grid
}

fn live(grid: &Grid) -> Vec<(usize, usize)> {
    grid.live_cells().collect()
}

fn period_of(grid: &mut Grid, max: u32) -> Option<u32> {
    let start = grid.clone();
    (1..=max).find(|_| {
        grid.step();
        *grid == start
    })
}

#[test]
fn test_block_is_still() {
    let mut grid = centred(16, 16, presets::block());
    assert_eq!(period_of(&mut grid, 5), Some(1));
}

#[test]
fn test_oscillator_periods() {
    assert_eq!(period_of(&mut centred(16, 16, presets::blinker()), 6), Some(2));
    assert_eq!(period_of(&mut centred(16, 16, presets::beacon()), 6), Some(2));
    assert_eq!(period_of(&mut centred(16, 16, presets::toad()), 6), Some(2));
    assert_eq!(period_of(&mut centred(30, 30, presets::pulsar()), 6), Some(3));
}

#[test]
fn test_toad_changes_after_one_step() {
    let mut grid = centred(12, 12, presets::toad());
    let start = grid.clone();
    grid.step();
    assert_ne!(grid, start);
    assert_eq!(grid.population(), 6);
    grid.step();
    assert_eq!(grid, start);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn test_glider_translates_down_right() {
    let mut grid = centred(30, 30, presets::glider());
    let before = live(&grid);
    for _ in 0..4 {
        grid.step();
    }
    let expected: Vec<_> = before.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(live(&grid), expected);
}

#[test]
fn test_lwss_translates_right() {
    let mut grid = centred(30, 30, presets::lwss());
    let before = live(&grid);
    for _ in 0..4 {
        grid.step();
    }
    let expected: Vec<_> = before.iter().map(|&(r, c)| (r, c + 2)).collect();
    assert_eq!(live(&grid), expected);
}

#[test]
fn test_two_presets_compose() {
    let mut grid = Grid::new(40, 40).unwrap();
    grid.place_pattern_at(presets::block(), 2, 2).unwrap();
    grid.place_pattern(presets::pulsar());
    assert_eq!(grid.population(), 4 + 48);
}
