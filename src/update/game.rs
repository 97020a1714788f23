//! Puzzle message handlers (paint, clear, solve, generate)

use crate::commands::Cmd;
use crate::messages::GameMsg;
use crate::model::GameModel;

/// Handle puzzle messages
pub fn update_game(model: &mut GameModel, msg: GameMsg) -> Option<Cmd> {
    match msg {
        GameMsg::Paint { x, y } => paint(model, x, y),

        GameMsg::Clear => {
            model.grid.set_all_colored(false);
            tracing::debug!("cleared all cells");
            Some(Cmd::redraw_full())
        }

        GameMsg::Solve => {
            model.grid.set_all_colored(true);
            tracing::debug!("solved all cells");
            Some(Cmd::redraw_full())
        }

        GameMsg::Generate {
            rows,
            columns,
            palette_size,
        } => match model.regenerate(rows, columns, palette_size) {
            Ok(()) => {
                tracing::info!(rows, columns, palette_size, "generated new puzzle");
                Some(Cmd::Batch(vec![Cmd::PaletteChanged, Cmd::redraw_full()]))
            }
            Err(e) => {
                tracing::warn!("Failed to generate puzzle: {}", e);
                None
            }
        },
    }
}

/// Paint the cell under `(x, y)` if the selection allows it
///
/// Cells are never unpainted here; outside the grid or a selection mismatch
/// is a silent no-op.
fn paint(model: &mut GameModel, x: f64, y: f64) -> Option<Cmd> {
    let pos = model.view.screen_to_grid(x, y);
    let selection = model.toolbar.selected();
    let cell = model.grid.cell_at_mut(pos.row, pos.column)?;

    if !selection.matches(cell.color_index()) {
        return None;
    }

    let was_colored = cell.is_colored;
    cell.is_colored = true;
    tracing::trace!(row = pos.row, column = pos.column, "painted cell");

    if !was_colored && model.grid.all_colored() {
        tracing::info!("puzzle complete");
    }

    Some(Cmd::redraw_cell(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::commands::Damage;
    use crate::grid::{Cell, Grid};
    use crate::model::Selection;
    use crate::palette::Palette;
    use crate::viewport::GridPos;

    /// 2x2 grid, scale 20: indices [[0, 1], [1, 0]]
    fn model() -> GameModel {
        let grid = Grid::from_rows(vec![
            vec![Cell::new(0, false), Cell::new(1, false)],
            vec![Cell::new(1, false), Cell::new(0, false)],
        ])
        .unwrap();
        let palette = Palette::new(vec![
            Color::rgb(255.0, 0.0, 0.0),
            Color::rgb(0.0, 255.0, 0.0),
        ]);
        GameModel::new(grid, palette)
    }

    fn colored(model: &GameModel, row: i64, column: i64) -> bool {
        model.grid.cell_at(row, column).unwrap().is_colored
    }

    #[test]
    fn test_paint_matching_selection() {
        let mut model = model();
        // Selection starts at index 0
        let cmd = update_game(&mut model, GameMsg::Paint { x: 5.0, y: 5.0 });
        assert!(colored(&model, 0, 0));
        assert_eq!(
            cmd.unwrap().damage(),
            Damage::Cells(vec![GridPos::new(0, 0)])
        );
    }

    #[test]
    fn test_paint_mismatch_is_noop() {
        let mut model = model();
        let cmd = update_game(&mut model, GameMsg::Paint { x: 25.0, y: 5.0 });
        assert!(cmd.is_none());
        assert!(!colored(&model, 0, 1));
    }

    #[test]
    fn test_paint_any_paints_every_color() {
        let mut model = model();
        model.toolbar.select(Selection::Any).unwrap();
        update_game(&mut model, GameMsg::Paint { x: 25.0, y: 5.0 });
        update_game(&mut model, GameMsg::Paint { x: 5.0, y: 25.0 });
        assert!(colored(&model, 0, 1));
        assert!(colored(&model, 1, 0));
    }

    #[test]
    fn test_paint_outside_grid_is_noop() {
        let mut model = model();
        model.toolbar.select(Selection::Any).unwrap();
        assert!(update_game(&mut model, GameMsg::Paint { x: -1.0, y: 5.0 }).is_none());
        assert!(update_game(&mut model, GameMsg::Paint { x: 45.0, y: 5.0 }).is_none());
        assert!(model.grid.iter().all(|(_, _, cell)| !cell.is_colored));
    }

    #[test]
    fn test_paint_never_unpaints() {
        let mut model = model();
        update_game(&mut model, GameMsg::Paint { x: 5.0, y: 5.0 });
        let cmd = update_game(&mut model, GameMsg::Paint { x: 5.0, y: 5.0 });
        assert!(colored(&model, 0, 0));
        assert!(cmd.is_some());
    }

    #[test]
    fn test_repaint_on_solved_grid() {
        let mut model = model();
        update_game(&mut model, GameMsg::Solve);
        model.toolbar.select(Selection::Any).unwrap();

        let cmd = update_game(&mut model, GameMsg::Paint { x: 25.0, y: 5.0 });
        assert_eq!(cmd.unwrap().damage(), Damage::cell(GridPos::new(0, 1)));
        assert!(model.grid.all_colored());
    }

    #[test]
    fn test_clear_and_solve() {
        let mut model = model();
        let cmd = update_game(&mut model, GameMsg::Solve);
        assert!(model.grid.all_colored());
        assert!(cmd.unwrap().damage().is_full());

        update_game(&mut model, GameMsg::Clear);
        assert!(model.grid.iter().all(|(_, _, cell)| !cell.is_colored));
    }

    #[test]
    fn test_generate_replaces_puzzle() {
        let mut model = model();
        model.toolbar.select(Selection::Any).unwrap();
        model.grid.set_all_colored(true);

        let cmd = update_game(
            &mut model,
            GameMsg::Generate {
                rows: 3,
                columns: 6,
                palette_size: 5,
            },
        )
        .unwrap();

        assert!(cmd.changes_palette());
        assert!(cmd.damage().is_full());
        assert_eq!(model.grid.row_count(), 3);
        assert_eq!(model.grid.column_count(), 6);
        assert_eq!(model.palette.len(), 5);
        assert_eq!(model.toolbar.palette(), &model.palette);
        assert_eq!(model.toolbar.selected(), Selection::Index(0));
        assert!(model.grid.iter().all(|(_, _, cell)| !cell.is_colored));
    }

    #[test]
    fn test_generate_failure_is_noop() {
        let mut model = model();
        let cmd = update_game(
            &mut model,
            GameMsg::Generate {
                rows: 0,
                columns: 6,
                palette_size: 5,
            },
        );
        assert!(cmd.is_none());
        assert_eq!(model.grid.row_count(), 2);
    }
}
