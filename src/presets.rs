//! Classic L-Systems with the render parameters they are usually drawn with.

use crate::interpreter::RenderConfig;
use crate::lsystem::LSystem;
use crate::rules::RuleTable;
use crate::symbol::SymbolSequence;

/// A named system plus the turn angle and generation count that suit it.
#[derive(Clone, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub seed: &'static str,
    pub rules: &'static [(char, &'static str)],
    /// Degrees.
    pub turn_angle: f32,
    pub generations: u32,
}

impl Preset {
    pub fn rule_table(&self) -> RuleTable {
        RuleTable::from_pairs(self.rules.iter().copied())
    }

    pub fn lsystem(&self) -> LSystem {
        LSystem::new(self.rule_table(), SymbolSequence::from(self.seed))
    }

    /// `base` with this preset's turn angle.
    pub fn render_config(&self, base: &RenderConfig) -> RenderConfig {
        RenderConfig {
            turn_angle: self.turn_angle,
            ..base.clone()
        }
    }
}

pub const KOCH_CURVE: Preset = Preset {
    name: "koch-curve",
    seed: "F",
    rules: &[('F', "F+F--F+F")],
    turn_angle: 60.0,
    generations: 4,
};

pub const KOCH_SNOWFLAKE: Preset = Preset {
    name: "koch-snowflake",
    seed: "F--F--F",
    rules: &[('F', "F+F--F+F")],
    turn_angle: 60.0,
    generations: 4,
};

/// `X` and `Y` are structural: they only steer the rewriting.
pub const DRAGON_CURVE: Preset = Preset {
    name: "dragon-curve",
    seed: "FX",
    rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
    turn_angle: 90.0,
    generations: 12,
};

pub const SIERPINSKI_ARROWHEAD: Preset = Preset {
    name: "sierpinski-arrowhead",
    seed: "F",
    rules: &[('F', "G-F-G"), ('G', "F+G+F")],
    turn_angle: 60.0,
    generations: 7,
};

pub const FRACTAL_PLANT: Preset = Preset {
    name: "fractal-plant",
    seed: "X",
    rules: &[('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")],
    turn_angle: 25.0,
    generations: 5,
};

/// Hue drifts along the branches and every tip gets a circle.
pub const BLOSSOM: Preset = Preset {
    name: "blossom",
    seed: "X",
    rules: &[('X', "hF[+XO]h[-XO]FX"), ('F', "FF")],
    turn_angle: 22.5,
    generations: 4,
};

pub static ALL: [Preset; 6] = [
    KOCH_CURVE,
    KOCH_SNOWFLAKE,
    DRAGON_CURVE,
    SIERPINSKI_ARROWHEAD,
    FRACTAL_PLANT,
    BLOSSOM,
];

/// Looks a preset up by [`Preset::name`].
pub fn by_name(name: &str) -> Option<&'static Preset> {
    ALL.iter().find(|p| p.name == name)
}
