// tests/presets.rs
use rand::SeedableRng;
use rand::rngs::StdRng;
use symbios_fractal::presets::{self, DRAGON_CURVE, FRACTAL_PLANT, KOCH_SNOWFLAKE};
use symbios_fractal::{Drawing, NoEscape, Primitive, RenderConfig, Symbol, TurtleInterpreter};

fn draw(preset: &presets::Preset) -> (Drawing, usize, usize) {
    let config = preset.render_config(&RenderConfig::default());
    let interpreter = TurtleInterpreter::standard();
    let mut system = preset.lsystem();
    let mut drawing = Drawing::new();
    let processed = system
        .draw(
            preset.generations,
            &interpreter,
            &config,
            &mut StdRng::seed_from_u64(3),
            &mut drawing,
            &mut NoEscape,
        )
        .unwrap();
    let forward = system.state().count(Symbol('F')) + system.state().count(Symbol('G'));
    (drawing, processed, forward)
}

#[test]
fn test_every_preset_draws_one_segment_per_forward_symbol() {
    for preset in &presets::ALL {
        let (drawing, processed, forward) = draw(preset);
        assert!(processed > 0, "{} processed nothing", preset.name);
        assert_eq!(drawing.line_count(), forward, "{}", preset.name);
        assert!(drawing.bounds().is_some(), "{}", preset.name);
    }
}

#[test]
fn test_snowflake_closes_on_itself() {
    let (drawing, _, _) = draw(&KOCH_SNOWFLAKE);
    let last = drawing
        .primitives
        .iter()
        .rev()
        .find_map(|p| match p {
            Primitive::LineTo(v) => Some(*v),
            _ => None,
        })
        .unwrap();
    assert!(last.abs_diff_eq(glam::Vec2::ZERO, 0.5), "ended at {last}");
}

#[test]
fn test_plant_branches_are_balanced() {
    let system = {
        let mut s = FRACTAL_PLANT.lsystem();
        s.evaluate(FRACTAL_PLANT.generations);
        s
    };
    assert_eq!(
        system.state().count(Symbol('[')),
        system.state().count(Symbol(']'))
    );
}

#[test]
fn test_dragon_structural_symbols_never_draw() {
    let (_, processed, forward) = draw(&DRAGON_CURVE);
    // X and Y are processed but only F produces strokes.
    assert!(processed > forward);
}

#[test]
fn test_presets_are_found_by_name() {
    assert_eq!(presets::by_name("koch-curve").unwrap().seed, "F");
    assert!(presets::by_name("nope").is_none());
}
