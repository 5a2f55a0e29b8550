//! Text rendering of the viewed position and move list.

use strictly_timeline::{GameHistory, SortOrder};

/// Renders the board, status line, and move list.
///
/// The viewed step is marked with `>` in the move list.
pub fn render(history: &GameHistory, order: SortOrder) -> String {
    let view = history.current_view();
    let mut out = String::new();

    out.push_str(&view.board().display());
    out.push('\n');

    if let Some(result) = view.winner() {
        let cells: Vec<String> = result.cells().iter().map(|c| c.to_string()).collect();
        out.push_str(&format!(
            "Winning line: {} (cells {})\n",
            result.kind(),
            cells.join(", ")
        ));
    }

    out.push('\n');
    out.push_str(&view.status().to_string());
    out.push_str("\n\n");
    out.push_str(&format!("Move history (Sort Order: {order})\n"));

    for row in history.moves(order) {
        let marker = if *row.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {row}\n", row.step()));
    }

    out
}
