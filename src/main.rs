use macroquad::prelude::*;
use conway_torus::{
    Config, Session, Viewport,
    input::{self, Brush},
    rendering, ui,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_PATH: &str = "conway_torus.toml";

fn window_conf() -> Conf {
    let config = Config::load(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: ui::strings(config.resolve_language()).title.to_owned(),
        window_width: (config.world_width as f32 + ui::SIDEBAR_WIDTH) as i32,
        window_height: config.world_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "conway_torus=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load(CONFIG_PATH).unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default configuration");
        Config::default()
    });
    let mut session = match Session::from_config(&config) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(%err, "cannot start session");
            return;
        }
    };
    let (rows, cols) = session.dimensions();
    let mut brush = Brush::new();

    loop {
        let mouse_pos = mouse_position();
        let viewport = Viewport::fit(
            ui::content_width(),
            ui::content_height(),
            rows,
            cols,
            config.cell_size as f32,
        );

        // Advance the simulation before handling this frame's input
        session.tick(get_frame_time());

        let buttons = ui::create_buttons(&session);
        let actions = input::clicked_actions(&buttons, mouse_pos)
            .into_iter()
            .chain(input::pressed_actions());
        for action in actions {
            input::apply(&mut session, action);
        }
        input::handle_mouse_paint(&mut session, &mut brush, &viewport, mouse_pos);

        clear_background(BLACK);
        rendering::draw_grid(session.grid(), &viewport);
        rendering::draw_sidebar(&session, &ui::create_buttons(&session), mouse_pos);

        next_frame().await;
    }
}
