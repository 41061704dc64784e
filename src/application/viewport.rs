/// Viewport fits the fixed-size world into the drawable area.
///
/// The world is scaled uniformly to the largest size that fits and centred
/// in the remaining space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    cell_size: f32,
    rows: usize,
    cols: usize,
}

impl Viewport {
    /// Fit a `rows x cols` grid of `cell_size` pixel cells into an
    /// `area_width x area_height` region
    pub fn fit(area_width: f32, area_height: f32, rows: usize, cols: usize, cell_size: f32) -> Self {
        let world_width = cols as f32 * cell_size;
        let world_height = rows as f32 * cell_size;
        let scale = (area_width / world_width).min(area_height / world_height);
        Self {
            scale,
            offset_x: (area_width - world_width * scale) * 0.5,
            offset_y: (area_height - world_height * scale) * 0.5,
            cell_size,
            rows,
            cols,
        }
    }

    /// On-screen edge length of one cell
    pub fn cell_extent(&self) -> f32 {
        self.cell_size * self.scale
    }

    /// On-screen size of the whole world
    pub fn world_extent(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_extent(),
            self.rows as f32 * self.cell_extent(),
        )
    }

    /// Convert a screen position to (row, col).
    /// Returns `None` outside the world; results are clamped to the grid.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let (width, height) = self.world_extent();
        let x = screen_x - self.offset_x;
        let y = screen_y - self.offset_y;
        if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            return None;
        }
        let col = ((x / self.cell_extent()) as usize).min(self.cols - 1);
        let row = ((y / self.cell_extent()) as usize).min(self.rows - 1);
        Some((row, col))
    }

    /// Top-left screen position of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.offset_x + col as f32 * self.cell_extent(),
            self.offset_y + row as f32 * self.cell_extent(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_exact_size() {
        let vp = Viewport::fit(800.0, 600.0, 75, 100, 8.0);
        assert_eq!(vp.scale, 1.0);
        assert_eq!((vp.offset_x, vp.offset_y), (0.0, 0.0));
        assert_eq!(vp.world_extent(), (800.0, 600.0));
    }

    #[test]
    fn test_fit_letterboxes_wide_area() {
        let vp = Viewport::fit(1600.0, 600.0, 75, 100, 8.0);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset_x, 400.0);
        assert_eq!(vp.offset_y, 0.0);
    }

    #[test]
    fn test_fit_scales_down() {
        let vp = Viewport::fit(400.0, 600.0, 75, 100, 8.0);
        assert_eq!(vp.scale, 0.5);
        assert_eq!(vp.cell_extent(), 4.0);
        assert_eq!(vp.offset_y, 150.0);
    }

    #[test]
    fn test_screen_to_cell() {
        let vp = Viewport::fit(800.0, 600.0, 75, 100, 8.0);
        assert_eq!(vp.screen_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(vp.screen_to_cell(17.0, 9.0), Some((1, 2)));
        assert_eq!(vp.screen_to_cell(799.9, 599.9), Some((74, 99)));
        assert_eq!(vp.screen_to_cell(800.0, 10.0), None);
        assert_eq!(vp.screen_to_cell(-1.0, 10.0), None);
    }

    #[test]
    fn test_screen_cell_roundtrip_with_offset() {
        let vp = Viewport::fit(1000.0, 600.0, 75, 100, 8.0);
        let (x, y) = vp.cell_to_screen(10, 20);
        assert_eq!(vp.screen_to_cell(x + 1.0, y + 1.0), Some((10, 20)));
    }
}
