// What you SEE:
// • Left: the control panel with a live mechanism preview.
// • Right: the canvas. Curves layer on top of each other until cleared.
// • ENTER draws with the current sliders, U / Ctrl+Z undoes, C clears,
//   S saves a PNG, SPACE toggles rainbow, P cycles presets. ESC quits.

use spirograph_studio::controls::{Action, Controls, action_for};
use spirograph_studio::draw::Drawer;
use spirograph_studio::panel::{Panel, render_canvas};
use spirograph_studio::preview::Preview;
use spirograph_studio::{Config, DrawingEngine, Error, FrameBuffer, init_logging, save, theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

fn main() -> Result<(), Error> {
    init_logging();

    /* --- Config ---
       Optional JSON file as the first argument; defaults otherwise. */
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => Config::default(),
    };

    /* --- Window + state ---
       Visual: window opens with a blank dotted canvas. */
    let mut drawer = Drawer::new(
        "Spirograph Studio",
        config.window_width,
        config.window_height,
        config.tick_rate,
    )?;
    let mut screen = FrameBuffer::new(config.window_width, config.window_height, theme::BG);
    let mut engine = DrawingEngine::new(&config);
    let mut preview = Preview::new(&config);
    let mut panel = Panel::new(&config);
    let mut controls = Controls::default();

    let mut tick: u64 = 0;
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    'running: while drawer.is_open() {
        tick += 1;

        /* 1) Inputs */
        let (ctrl, shift) = (drawer.ctrl_down(), drawer.shift_down());
        for key in drawer.keys_pressed() {
            let Some(action) = action_for(key, ctrl, shift) else { continue };
            match action {
                Action::Quit => break 'running,
                Action::Draw => match controls.resolve_params() {
                    Ok(params) => engine.start_with(params),
                    Err(e) => warn!(error = %e, "draw rejected"),
                },
                Action::Undo => {
                    engine.undo();
                }
                Action::Clear => engine.clear(),
                Action::Save => match save::save_canvas(engine.canvas(), &config.save_dir) {
                    Ok(path) => {
                        info!(path = %path.display(), "canvas saved");
                        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                        panel.notify_saved(&name);
                    }
                    Err(e) => {
                        warn!(error = %e, dir = %config.save_dir.display(), "save failed");
                        panel.notify_error("save failed");
                    }
                },
                other => controls.apply(other),
            }
        }

        /* 2) Advance the stroke animation by one tick.
           Visual: the curve grows by `speed` segments. */
        engine.step(controls.speed(), controls.thickness(), &controls.colors.source());

        /* 3) Compose canvas + panel */
        screen.fill(theme::BG);
        render_canvas(&mut screen, &config, &engine);
        preview.update(engine.is_drawing());
        let preview_surface = preview.render(
            controls.outer(),
            controls.inner(),
            controls.offset(),
            controls.colors.current_solid(),
        );
        panel.render(&mut screen, &engine, &controls, preview_surface, tick);

        /* 4) Present to the window */
        drawer.present(&screen)?;

        /* 5) FPS counter (debug log once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = frames_this_second as f32 / secs, "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!(layers = engine.layer_count(), "bye");
    Ok(())
}
