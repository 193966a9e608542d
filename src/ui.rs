#![cfg(feature = "std")]
//! Text rendering and input parsing for terminal front ends.

use std::fmt::Write;

use crate::{
    board::{Grid, OwnerCell, PublicCell},
    config::BOARD_SIZE,
    game::{PlacementState, TurnEvent},
    player::Seat,
    ship::Orientation,
};

/// Letter for column `x`, if it has one.
fn column_letter(x: usize) -> Option<char> {
    u8::try_from(x)
        .ok()
        .filter(|&x| x < 26)
        .map(|x| (b'A' + x) as char)
}

/// Format (x, y) as a column letter and 1-based row, e.g. `(1, 6)` is `B7`.
///
/// Columns past `Z` have no letter and are printed as a raw `(x, y)` pair.
pub fn coord_to_string(x: usize, y: usize) -> String {
    match (column_letter(x), y.checked_add(1)) {
        (Some(col), Some(row)) => format!("{}{}", col, row),
        _ => format!("({}, {})", x, y),
    }
}

/// Parse `B7` style input into (x, y). Range checks are left to the board.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let x = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((x, row - 1))
}

pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

fn render_grid<T>(grid: &Grid<T>, glyph: impl Fn(&T) -> char) -> String {
    let mut out = String::from("   ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", column_letter(x).unwrap_or('?'));
    }
    out.push('\n');
    for (y, row) in grid.iter().enumerate() {
        let _ = write!(out, "{:2} ", y + 1);
        for cell in row {
            let _ = write!(out, " {}", glyph(cell));
        }
        out.push('\n');
    }
    out
}

/// Draw the owner's board: `S` ship, `X` hit, `#` sunk, `o` miss.
pub fn render_owner_view(grid: &Grid<OwnerCell>) -> String {
    render_grid(grid, |c: &OwnerCell| match (c.ship, c.attacked) {
        (true, true) if c.sunk => '#',
        (true, true) => 'X',
        (true, false) => 'S',
        (false, true) => 'o',
        (false, false) => '.',
    })
}

/// Draw the opponent's board as seen through the fog: `X` hit, `o` miss.
pub fn render_public_view(grid: &Grid<PublicCell>) -> String {
    render_grid(grid, |c: &PublicCell| match (c.ship, c.attacked) {
        (true, _) => 'X',
        (false, true) => 'o',
        (false, false) => '.',
    })
}

/// One line per shot, e.g. `You fire at B7: hit, ship sunk!`.
pub fn describe_event(event: &TurnEvent) -> String {
    let who = match event.by {
        Seat::Human => "You fire",
        Seat::Computer => "Computer fires",
    };
    let result = match (event.hit, event.sunk) {
        (true, true) => "hit, ship sunk!",
        (true, false) => "hit",
        (false, _) => "miss",
    };
    format!("{} at {}: {}", who, coord_to_string(event.x, event.y), result)
}

/// Summary of what is left to place, e.g. `length 4: 1, length 3: 2, ...`.
pub fn describe_placement(state: &PlacementState) -> String {
    if state.complete {
        return String::from("Fleet complete");
    }
    let parts: Vec<String> = state
        .remaining
        .iter()
        .map(|(length, count)| format!("length {}: {}", length, count))
        .collect();
    format!("Ships to place: {}", parts.join(", "))
}
