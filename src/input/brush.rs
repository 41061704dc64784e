use crate::application::Session;
use crate::error::Result;

/// Mouse painting state.
///
/// A press toggles the cell under the cursor (or forces it alive) and
/// remembers the value written. Dragging paints that value, but only once the
/// pointer has left the cell where the press started, so a plain click never
/// paints twice.
#[derive(Debug, Default)]
pub struct Brush {
    value: bool,
    start: Option<(usize, usize)>,
    drawing: bool,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button pressed over `cell`. With `force_alive` the cell is set alive
    /// instead of toggled.
    pub fn press(&mut self, session: &mut Session, cell: (usize, usize), force_alive: bool) -> Result<()> {
        let (row, col) = cell;
        self.value = force_alive || !session.cell_alive(row, col)?;
        session.set_cell(row, col, self.value)?;
        self.start = Some(cell);
        self.drawing = false;
        Ok(())
    }

    /// Button held while over `cell`
    pub fn drag(&mut self, session: &mut Session, cell: (usize, usize)) -> Result<()> {
        let Some(start) = self.start else {
            return Ok(());
        };
        if cell != start {
            self.drawing = true;
        }
        if self.drawing {
            session.set_cell(cell.0, cell.1, self.value)?;
        }
        Ok(())
    }

    /// Button released. Leaving the grid while held keeps the stroke alive.
    pub fn release(&mut self) {
        self.start = None;
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}
