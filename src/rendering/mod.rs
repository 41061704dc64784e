use macroquad::prelude::*;
use crate::application::{Session, Viewport};
use crate::domain::Grid;
use crate::ui::{
    self, Button, GENERATION_Y, LINE_HEIGHT, PRESETS_LABEL_Y, SIDEBAR_WIDTH, content_height,
    content_width, sidebar_x,
};

const BACKGROUND: Color = Color::new(0.102, 0.102, 0.125, 1.0);
const PANEL: Color = Color::new(0.145, 0.145, 0.188, 1.0);
const ALIVE: Color = Color::new(0.490, 0.827, 0.690, 1.0);
const BORDER: Color = Color::new(0.251, 0.251, 0.282, 1.0);
const TEXT: Color = Color::new(0.941, 0.941, 0.961, 1.0);

/// Draw the live cells of the current generation
pub fn draw_grid(grid: &Grid, viewport: &Viewport) {
    draw_rectangle(0.0, 0.0, content_width(), content_height(), BACKGROUND);

    let extent = viewport.cell_extent();
    // Leave a hairline between cells when they are large enough to show it
    let gap = if viewport.scale > 1.0 {
        1.0
    } else if viewport.scale < 1.0 {
        0.0
    } else {
        0.5
    };
    let size = (extent - gap).max(1.0);

    for (row, col) in grid.live_cells() {
        let (x, y) = viewport.cell_to_screen(row, col);
        draw_rectangle(x, y, size, size, ALIVE);
    }

    let (width, height) = viewport.world_extent();
    draw_rectangle_lines(viewport.offset_x, viewport.offset_y, width, height, 1.0, BORDER);
}

/// Draw the sidebar: generation, buttons, preset list and key help
pub fn draw_sidebar(session: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    let text = ui::strings(session.language());
    let x0 = content_width();
    let sx = sidebar_x();

    draw_rectangle(x0, 0.0, SIDEBAR_WIDTH, screen_height(), PANEL);
    draw_line(x0, 0.0, x0, screen_height(), 1.0, BORDER);

    draw_text(text.controls, sx, 18.0, 18.0, GRAY);
    let status = if session.is_running() { text.running } else { text.paused };
    draw_text(
        &format!("{}: {}   {}", text.generation, session.generation(), status),
        sx,
        GENERATION_Y + 6.0,
        18.0,
        TEXT,
    );
    draw_text(text.presets, sx, PRESETS_LABEL_Y, 18.0, GRAY);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let help = [text.rules, text.wrap, text.keys, text.mouse, text.mouse_force];
    help.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, sx, ui::help_y() + i as f32 * LINE_HEIGHT, 14.0, GRAY);
    });
}
