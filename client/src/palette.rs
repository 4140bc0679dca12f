//! Selectable ball colours, cycled with LEFT/RIGHT on the start screen.

use macroquad::prelude::{Color, GOLD, GREEN, ORANGE, PURPLE, SKYBLUE};

pub struct ColourOption {
    pub colour: Color,
    pub name: &'static str,
}

pub const BALL_COLOURS: &[ColourOption] = &[
    ColourOption {
        colour: PURPLE,
        name: "Purple",
    },
    ColourOption {
        colour: GREEN,
        name: "Green",
    },
    ColourOption {
        colour: ORANGE,
        name: "Orange",
    },
    ColourOption {
        colour: SKYBLUE,
        name: "Sky Blue",
    },
    ColourOption {
        colour: GOLD,
        name: "Gold",
    },
];

/// Next colour index, wrapping at the end of the palette.
pub fn next_index(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (current + 1) % total
}

/// Previous colour index, wrapping at the start of the palette.
pub fn previous_index(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (current + total - 1) % total
}
