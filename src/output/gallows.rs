//! ASCII-art gallows, one frame per life lost

use crate::core::STARTING_LIVES;

/// Rows in every frame
pub const FRAME_HEIGHT: usize = 7;

static FRAMES: [[&str; FRAME_HEIGHT]; STARTING_LIVES as usize + 1] = [
    [
        "          ",
        "          ",
        "          ",
        "          ",
        "          ",
        "          ",
        "          ",
    ],
    [
        "|-------  ",
        "|         ",
        "|         ",
        "|         ",
        "|         ",
        "|         ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|         ",
        "|         ",
        "|         ",
        "|         ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|      o  ",
        "|         ",
        "|         ",
        "|         ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|      o  ",
        "|      |  ",
        "|         ",
        "|         ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|      o  ",
        "|     -|- ",
        "|      |  ",
        "|         ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|      o  ",
        "|     -|- ",
        "|    / | \\",
        "|         ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|      o  ",
        "|     -|- ",
        "|    / | \\",
        "|     / \\ ",
        "|         ",
    ],
    [
        "|-------  ",
        "|      |  ",
        "|      o  ",
        "|     -|- ",
        "|    / | \\",
        "|     / \\ ",
        "|    /   \\",
    ],
];

/// Frame for the given remaining lives
///
/// Returns `None` while no life has been lost, so nothing is drawn.
#[must_use]
pub fn frame(lives: u8) -> Option<&'static [&'static str; FRAME_HEIGHT]> {
    let lost = STARTING_LIVES.checked_sub(lives)?;
    if lost == 0 {
        return None;
    }
    FRAMES.get(usize::from(lost))
}
