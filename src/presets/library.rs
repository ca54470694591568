//! Classic Life patterns, padded so they have room to evolve on a torus

use crate::presets::random::RandomGridSpec;
use crate::presets::registry::PresetRegistry;

// Still lifes
const BLOCK: &str = "
0000
0110
0110
0000
";

const BEEHIVE: &str = "
000000
001100
010010
001100
000000
";

const LOAF: &str = "
000000
001100
010010
001010
000100
000000
";

const BOAT: &str = "
00000
01100
01010
00100
00000
";

const TUB: &str = "
00000
00100
01010
00100
00000
";

// Oscillators
const BLINKER: &str = "
00000
00000
01110
00000
00000
";

const TOAD: &str = "
000000
000000
001110
011100
000000
000000
";

const BEACON: &str = "
000000
011000
011000
000110
000110
000000
";

const PULSAR: &str = "
00000000000000000
00000000000000000
00001110001110000
00000000000000000
00100001010000100
00100001010000100
00100001010000100
00001110001110000
00000000000000000
00001110001110000
00100001010000100
00100001010000100
00100001010000100
00000000000000000
00001110001110000
00000000000000000
00000000000000000
";

// Spaceships
const GLIDER: &str = "
00000000
00100000
00010000
01110000
00000000
00000000
00000000
00000000
";

const LWSS: &str = "
000000000000
000000000000
000100100000
001000000000
001000100000
001111000000
000000000000
000000000000
";

// Methuselahs
const R_PENTOMINO: &str = "
000000000000
000000000000
000000000000
000000000000
000000000000
000000110000
000001100000
000000100000
000000000000
000000000000
000000000000
000000000000
";

const DIEHARD: &str = "
0000000000000000
0000000000000000
0000000000000000
0000000000000000
0000000000100000
0000110000000000
0000010001110000
0000000000000000
0000000000000000
0000000000000000
0000000000000000
0000000000000000
";

const ACORN: &str = "
0000000000000000
0000000000000000
0000000000000000
0000000000000000
0000010000000000
0000000100000000
0000110011100000
0000000000000000
0000000000000000
0000000000000000
0000000000000000
0000000000000000
";

/// Every built-in pattern as (name, rows of `0`/`1`)
pub const PATTERNS: [(&str, &str); 14] = [
    ("block", BLOCK),
    ("beehive", BEEHIVE),
    ("loaf", LOAF),
    ("boat", BOAT),
    ("tub", TUB),
    ("blinker", BLINKER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("pulsar", PULSAR),
    ("glider", GLIDER),
    ("lwss", LWSS),
    ("r_pentomino", R_PENTOMINO),
    ("diehard", DIEHARD),
    ("acorn", ACORN),
];

/// Registry holding every built-in pattern
pub fn default_registry(random_spec: RandomGridSpec) -> PresetRegistry {
    let mut registry = PresetRegistry::new().with_random_spec(random_spec);
    for (name, pattern) in PATTERNS {
        registry.register_pattern(name, pattern);
    }
    registry
}
