//! Character key bindings shared by the terminal front end and batch replay.

use crate::controllers::plot::command::Command;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_ITERATIONS_COARSE, DEFAULT_ITERATIONS_FINE,
};
use num::BigRational;
use num::bigint::BigInt;

/// Magnitudes bound to the zoom and iteration keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySteps {
    pub zoom_fine: BigRational,
    pub zoom_coarse: BigRational,
    pub iterations_fine: i64,
    pub iterations_coarse: i64,
}

impl Default for KeySteps {
    fn default() -> Self {
        Self {
            zoom_fine: BigRational::new(BigInt::from(6), BigInt::from(5)),
            zoom_coarse: BigRational::from_integer(BigInt::from(2)),
            iterations_fine: DEFAULT_ITERATIONS_FINE,
            iterations_coarse: DEFAULT_ITERATIONS_COARSE,
        }
    }
}

pub const KEY_HELP: &str =
    "hjkl move  ] [ zoom  } { zoom+  + - iter  * / iter+  e numbers  q quit";

#[must_use]
pub fn command_for_key(key: char, steps: &KeySteps) -> Option<Command> {
    let command = match key {
        'h' => Command::Pan { dx: -1, dy: 0 },
        'l' => Command::Pan { dx: 1, dy: 0 },
        'k' => Command::Pan { dx: 0, dy: -1 },
        'j' => Command::Pan { dx: 0, dy: 1 },
        ']' => Command::zoom_in(&steps.zoom_fine),
        '[' => Command::zoom_out(&steps.zoom_fine),
        '}' => Command::zoom_in(&steps.zoom_coarse),
        '{' => Command::zoom_out(&steps.zoom_coarse),
        '+' => Command::AdjustIterations(steps.iterations_fine),
        '-' => Command::AdjustIterations(-steps.iterations_fine),
        '*' => Command::AdjustIterations(steps.iterations_coarse),
        '/' => Command::AdjustIterations(-steps.iterations_coarse),
        'e' => Command::ToggleDisplay,
        'q' => Command::Quit,
        _ => return None,
    };

    Some(command)
}

/// Translates a key script, skipping whitespace and rejecting unknown keys.
pub fn parse_key_script(script: &str, steps: &KeySteps) -> Result<Vec<Command>, char> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|key| command_for_key(key, steps).ok_or(key))
        .collect()
}
