//! Plain-text rendering for terminals and logs.
//!
//! | Char | Meaning                     |
//! |------|-----------------------------|
//! | `?`  | not yet revealed            |
//! | `#`  | wall                        |
//! | `.`  | free                        |
//! | `S`  | start                       |
//! | `G`  | goal                        |
//! | `@`  | agent                       |
//! | `*`  | planned cell                |

use crate::core::{GridCoord, Tile};
use crate::grid::Grid;

/// Render what the agent knows, with its position and plan overlaid.
///
/// The first plan cell is the agent's own cell and is not drawn. Plan marks
/// never cover `S` or `G`.
pub fn render_masked(grid: &Grid, agent: Option<GridCoord>, plan: &[GridCoord]) -> String {
    render(grid, true, agent, plan)
}

/// Render the whole map, ignoring visibility
pub fn render_full(grid: &Grid) -> String {
    render(grid, false, None, &[])
}

fn render(grid: &Grid, masked: bool, agent: Option<GridCoord>, plan: &[GridCoord]) -> String {
    let mut canvas: Vec<Vec<char>> = (0..grid.height())
        .map(|r| {
            (0..grid.width())
                .map(|c| {
                    let coord = GridCoord::new(r as i32, c as i32);
                    if masked && !grid.is_visible(coord) {
                        '?'
                    } else {
                        grid.tile_at(coord).map(Tile::as_char).unwrap_or('?')
                    }
                })
                .collect()
        })
        .collect();

    for cell in plan.iter().skip(1) {
        if let Some(ch) = cell_mut(&mut canvas, *cell)
            && *ch != 'S'
            && *ch != 'G'
        {
            *ch = '*';
        }
    }
    if let Some(pos) = agent
        && let Some(ch) = cell_mut(&mut canvas, pos)
    {
        *ch = '@';
    }

    let mut out = String::with_capacity(grid.cell_count() + grid.height());
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn cell_mut(canvas: &mut [Vec<char>], coord: GridCoord) -> Option<&mut char> {
    if coord.row < 0 || coord.col < 0 {
        return None;
    }
    canvas
        .get_mut(coord.row as usize)
        .and_then(|row| row.get_mut(coord.col as usize))
}
