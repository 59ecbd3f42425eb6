// tests/rewriting.rs
use rand::SeedableRng;
use rand::rngs::StdRng;
use symbios_fractal::{
    Drawing, LSystem, NoEscape, Primitive, RenderConfig, RuleTable, Symbol, SymbolSequence,
    TurtleInterpreter, expand,
};

fn koch_rules() -> RuleTable {
    RuleTable::from_pairs([('F', "F+F--F+F")])
}

#[test]
fn test_zero_generations_is_identity() {
    let seed = SymbolSequence::from("F-X[+F]Y");
    for rules in [RuleTable::new(), koch_rules(), RuleTable::from_pairs([('X', "")])] {
        assert_eq!(expand(&seed, &rules, 0), seed);
    }
}

#[test]
fn test_empty_rule_table_is_identity_for_any_generation_count() {
    let seed = SymbolSequence::from("F+F--F+F[X]");
    for generations in [1, 2, 10] {
        assert_eq!(expand(&seed, &RuleTable::new(), generations), seed);
    }
}

#[test]
fn test_koch_one_generation() {
    let out = expand(&SymbolSequence::from("F"), &koch_rules(), 1);
    assert_eq!(out.to_string(), "F+F--F+F");
}

#[test]
fn test_koch_two_generations_matches_direct_substitution() {
    let one = "F+F--F+F";
    let expected: String = one
        .chars()
        .map(|c| if c == 'F' { one.to_string() } else { c.to_string() })
        .collect();

    let out = expand(&SymbolSequence::from("F"), &koch_rules(), 2);
    assert_eq!(out.to_string(), expected);
    // Four `F`s expand to 8 symbols each; the four turn symbols pass through.
    assert_eq!(out.len(), 36);
    assert_eq!(out.count(Symbol('+')), 2 + 4 * 2);
}

#[test]
fn test_length_is_bounded_by_growth_factor() {
    let tables = [
        koch_rules(),
        RuleTable::from_pairs([('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")]),
        RuleTable::from_pairs([('A', "AB"), ('B', "A")]),
    ];
    let seed = SymbolSequence::from("FXA");

    for rules in &tables {
        let k = rules.max_growth_factor();
        for generations in 0..4u32 {
            let out = expand(&seed, rules, generations);
            assert!(out.len() <= seed.len() * k.pow(generations));
        }
    }
}

#[test]
fn test_deletion_rule_removes_symbol_for_good() {
    let rules = RuleTable::from_pairs([('X', ""), ('F', "FF")]);
    let seed = SymbolSequence::from("XFXF+X");

    let one = expand(&seed, &rules, 1);
    assert_eq!(one.count(Symbol('X')), 0);
    assert_eq!(one.to_string(), "FFFF+");

    let three = expand(&seed, &rules, 3);
    assert_eq!(three.count(Symbol('X')), 0);
}

#[test]
fn test_deleted_symbol_can_be_reintroduced_by_another_rule() {
    let rules = RuleTable::from_pairs([('X', ""), ('Y', "XY")]);
    let out = expand(&SymbolSequence::from("XY"), &rules, 1);
    assert_eq!(out.to_string(), "XY");
}

#[test]
fn test_expansion_is_deterministic() {
    let rules = RuleTable::from_pairs([('X', "X+YF+"), ('Y', "-FX-Y")]);
    let seed = SymbolSequence::from("FX");
    let a = expand(&seed, &rules, 10);
    let b = expand(&seed, &rules, 10);
    assert_eq!(a, b);
}

#[test]
fn test_deleting_everything_draws_nothing() {
    let config = RenderConfig::default();
    let interpreter = TurtleInterpreter::standard();
    let mut system = LSystem::new(
        RuleTable::from_pairs([('F', "")]),
        SymbolSequence::from("F"),
    );
    let mut drawing = Drawing::new();

    let processed = system
        .draw(
            1,
            &interpreter,
            &config,
            &mut StdRng::seed_from_u64(0),
            &mut drawing,
            &mut NoEscape,
        )
        .unwrap();

    assert!(system.state().is_empty());
    assert_eq!(processed, 0);
    assert!(drawing.is_empty());
}

#[test]
fn test_draw_resets_before_evaluating() {
    let config = RenderConfig::default();
    let interpreter = TurtleInterpreter::standard();
    let mut system = LSystem::new(koch_rules(), SymbolSequence::from("F"));
    let mut rng = StdRng::seed_from_u64(0);

    let mut first = Drawing::new();
    let a = system
        .draw(2, &interpreter, &config, &mut rng, &mut first, &mut NoEscape)
        .unwrap();
    let mut second = Drawing::new();
    let b = system
        .draw(2, &interpreter, &config, &mut rng, &mut second, &mut NoEscape)
        .unwrap();

    assert_eq!(a, 36);
    assert_eq!(a, b);
    assert_eq!(first.primitives, second.primitives);
}

#[test]
fn test_draw_rejects_invalid_config_without_touching_state() {
    let config = RenderConfig {
        step_length: -2.0,
        ..Default::default()
    };
    let interpreter = TurtleInterpreter::standard();
    let mut system = LSystem::new(koch_rules(), SymbolSequence::from("F"));
    system.evaluate(1);
    let before = system.state().clone();
    let mut drawing = Drawing::new();

    let result = system.draw(
        3,
        &interpreter,
        &config,
        &mut StdRng::seed_from_u64(0),
        &mut drawing,
        &mut NoEscape,
    );

    assert!(result.is_err());
    assert_eq!(system.state(), &before);
    assert!(drawing.is_empty());
}

#[test]
fn test_draw_takes_stack_depth_from_its_config() {
    let config = RenderConfig {
        max_stack_depth: 1,
        ..Default::default()
    };
    let interpreter = TurtleInterpreter::standard();
    let mut system = LSystem::new(RuleTable::new(), SymbolSequence::from("[F[F]F]F"));
    let mut drawing = Drawing::new();

    system
        .draw(
            0,
            &interpreter,
            &config,
            &mut StdRng::seed_from_u64(0),
            &mut drawing,
            &mut NoEscape,
        )
        .unwrap();

    // Only the outer push fits, so the final stroke starts from the origin.
    assert_eq!(
        drawing.primitives.last(),
        Some(&Primitive::LineTo(glam::Vec2::new(20.0, 0.0)))
    );
}
