use spirograph_studio::background::make_background;
use spirograph_studio::spiro::{gcd, get_period};
use spirograph_studio::{ColorSource, Config, DrawingEngine, Error, Rgb};

const WHITE: ColorSource = ColorSource::Solid(Rgb::WHITE);

fn finish(engine: &mut DrawingEngine, speed: usize, thickness: u32, colors: &ColorSource) {
    while engine.is_drawing() {
        engine.step(speed, thickness, colors);
    }
}

#[test]
fn classic_curve_draws_one_layer() {
    assert_eq!(gcd(150, 80), 10);
    assert_eq!(get_period(150.0, 80.0), 8);

    let config = Config::default();
    let mut engine = DrawingEngine::new(&config);
    engine.start(150, 80, 100).unwrap();
    assert_eq!(engine.draw_total(), 6001);

    finish(&mut engine, 25, 2, &WHITE);
    assert_eq!(engine.layer_count(), 1);
    assert!(!engine.is_drawing());

    // every fitted point is under the stroke
    for p in engine.points().iter().step_by(97) {
        let (x, y) = (p.x as usize, p.y as usize);
        assert_eq!(engine.canvas().get(x, y), Some(Rgb::WHITE), "({x},{y})");
    }
    assert_ne!(engine.canvas(), engine.background());
}

#[test]
fn clear_on_fresh_engine() {
    let config = Config::default();
    let mut engine = DrawingEngine::new(&config);
    engine.clear();
    assert_eq!(engine.layer_count(), 0);
    assert_eq!(engine.undo_depth(), 1);
    assert_eq!(engine.canvas(), &make_background(config.canvas_size, &config.background));
}

#[test]
fn undo_right_after_start_restores_canvas() {
    let config = Config::default();
    let mut engine = DrawingEngine::new(&config);
    let before = engine.canvas().clone();

    engine.start(100, 30, 50).unwrap();
    assert!(engine.undo());
    assert_eq!(engine.canvas(), &before);
    assert!(!engine.is_drawing());
    assert_eq!(engine.layer_count(), 0);
    assert_eq!(engine.undo_depth(), 0);
}

#[test]
fn undo_walks_back_through_layers() {
    let config = Config { canvas_size: 240, curve_steps: 300, ..Config::default() };
    let mut engine = DrawingEngine::new(&config);
    let palette = [Rgb(255, 0, 0), Rgb(0, 255, 0), Rgb(0, 0, 255), Rgb(255, 255, 0)];

    let mut history = vec![engine.canvas().clone()];
    for (i, color) in palette.iter().enumerate() {
        engine.start(120 + i as i32 * 10, 35 + i as i32 * 7, 60).unwrap();
        finish(&mut engine, 40, 1, &ColorSource::Solid(*color));
        history.push(engine.canvas().clone());
    }
    assert_eq!(engine.layer_count(), 4);

    history.pop();
    while let Some(expected) = history.pop() {
        assert!(engine.undo());
        assert_eq!(engine.canvas(), &expected);
    }
    assert_eq!(engine.layer_count(), 0);
    assert!(!engine.undo());
}

#[test]
fn only_twenty_snapshots_survive() {
    let config = Config { canvas_size: 64, curve_steps: 50, ..Config::default() };
    let mut engine = DrawingEngine::new(&config);
    for _ in 0..25 {
        engine.start(90, 20, 40).unwrap();
        finish(&mut engine, 100, 1, &ColorSource::Rainbow);
    }
    assert_eq!(engine.undo_depth(), 20);
    let mut undone = 0;
    while engine.undo() {
        undone += 1;
    }
    assert_eq!(undone, 20);
    // the 5 oldest snapshots (including the blank canvas) are gone
    assert_ne!(engine.canvas(), engine.background());
}

#[test]
fn layer_count_round_trip() {
    let config = Config { canvas_size: 200, curve_steps: 500, ..Config::default() };
    let mut engine = DrawingEngine::new(&config);
    assert!(!engine.undo());
    assert_eq!(engine.layer_count(), 0);

    engine.start(150, 80, 100).unwrap();
    finish(&mut engine, 25, 1, &WHITE);
    assert_eq!(engine.layer_count(), 1);

    let done = engine.canvas().clone();
    engine.step(25, 1, &WHITE);
    assert_eq!(engine.canvas(), &done);
    assert_eq!(engine.layer_count(), 1);

    assert!(engine.undo());
    assert_eq!(engine.layer_count(), 0);
}

#[test]
fn rejected_params_do_not_snapshot() {
    let mut engine = DrawingEngine::new(&Config { canvas_size: 100, ..Config::default() });
    assert!(matches!(engine.start(80, 80, 10), Err(Error::InvalidParameter(_))));
    assert!(matches!(engine.start(80, 90, 10), Err(Error::InvalidParameter(_))));
    assert_eq!(engine.undo_depth(), 0);
    assert!(!engine.is_drawing());
}

#[test]
fn rainbow_hits_the_documented_hues() {
    assert_eq!(ColorSource::Rainbow.resolve(0, 1000), Rgb(255, 0, 0));
    assert_eq!(ColorSource::Rainbow.resolve(1000, 1000), Rgb(255, 0, 0));
    assert_eq!(ColorSource::Rainbow.resolve(500, 1000), Rgb(0, 255, 255));
}
