use log::{error, info, trace, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use softraster::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use softraster::snapshot;
use softraster::window::{FrameLimiter, Window, WindowEvent};
use softraster::Engine;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", e);
    }
}

fn handle_event(
    event: WindowEvent,
    engine: &mut Engine,
    window: &mut Window,
) -> Result<(), String> {
    match event {
        WindowEvent::Quit => engine.on_close_requested(),
        WindowEvent::Resize(width, height) => {
            engine
                .on_resize(width, height)
                .map_err(|e| e.to_string())?;
            window.resize(width, height)?;
        }
        WindowEvent::ToggleVertices => {
            let config = engine.config_mut();
            config.show_vertices = !config.show_vertices;
            info!("vertex markers {}", on_off(config.show_vertices));
        }
        WindowEvent::ToggleDepthShading => {
            let config = engine.config_mut();
            config.depth_shading = !config.depth_shading;
            info!("depth shading {}", on_off(config.depth_shading));
        }
        WindowEvent::Snapshot => {
            let path = format!("softraster-{}.png", engine.frame_index());
            match snapshot::save(engine.color_surface(), &path) {
                Ok(()) => info!("saved snapshot to {}", path),
                Err(e) => error!("failed to save snapshot {}: {}", path, e),
            }
        }
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn run() -> Result<(), String> {
    let mut window = Window::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut engine = Engine::new(window.width(), window.height()).map_err(|e| e.to_string())?;
    let mut limiter = FrameLimiter::new(&window);
    info!("started at {}x{}", window.width(), window.height());

    while engine.is_running() {
        if let Some(view) = engine.tick() {
            window.present(&view)?;
        }

        for event in window.poll_events() {
            handle_event(event, &mut engine, &mut window)?;
        }

        let delta = limiter.wait_and_get_delta(&window);
        trace!("frame time {} ms", delta);
    }

    Ok(())
}

fn main() -> Result<(), String> {
    init_logging();
    run().inspect_err(|e| error!("{}", e))
}
