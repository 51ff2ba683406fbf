//! Script replay and board output.

use std::path::Path;

use anyhow::Context;
use fast_kanban_engine::{KanbanEngine, Step};
use fast_kanban_protocol::{Board, DragEvent};
use tracing::{debug, info};

/// Counts of what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub changed: usize,
    pub ignored: usize,
}

/// Parses a script: a JSON5 or JSON array of drag events.
pub fn parse_script(content: &str) -> Result<Vec<DragEvent>, serde_json5::Error> {
    serde_json5::from_str(content)
}

/// Reads and parses a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid script.
pub async fn read_script(path: &Path) -> anyhow::Result<Vec<DragEvent>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read script at {}", path.display()))?;
    parse_script(&content).with_context(|| format!("failed to parse script at {}", path.display()))
}

/// Feeds every event to the engine in order.
pub fn replay(engine: &mut KanbanEngine, events: &[DragEvent]) -> Summary {
    let mut summary = Summary::default();
    for (index, event) in events.iter().enumerate() {
        match engine.handle(event) {
            Step::Changed(sequence) => {
                debug!(index, ?sequence, "event applied");
                summary.changed += 1;
            }
            Step::Ignored(reason) => {
                debug!(index, reason = reason.label(), "event ignored");
                summary.ignored += 1;
            }
        }
    }
    info!(
        events = events.len(),
        changed = summary.changed,
        ignored = summary.ignored,
        revision = engine.revision(),
        "replay finished"
    );
    summary
}

/// Renders one `column: [card, ...]` line per column.
pub fn render_columns(board: &Board) -> String {
    board
        .render_with(", ", |column, cards, separator| {
            let ids: Vec<_> = cards.iter().map(|card| card.id.as_str()).collect();
            format!("{column}: [{}]", ids.join(separator))
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use fast_kanban_protocol::seed::default_board;
    use fast_kanban_protocol::{DragElement, Gesture};

    use super::*;

    #[test]
    fn parse_json5_script() {
        let events = parse_script(
            r#"
            [
                // preview, then drop
                { phase: "over", active: { kind: "task", id: "1", column_id: "backlog" },
                  over: { kind: "column", id: "done" } },
                { phase: "end", active: { kind: "task", id: "1", column_id: "backlog" },
                  over: { kind: "column", id: "done" } },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert!(!events[0].is_commit());
        assert!(events[1].is_commit());
    }

    #[test]
    fn parse_rejects_unknown_phase() {
        assert!(parse_script(r#"[{ phase: "hover" }]"#).is_err());
    }

    #[test]
    fn replay_counts_steps() {
        let mut engine = KanbanEngine::new(default_board());
        let card = DragElement::task("1", "backlog");
        let events = [
            DragEvent::Over(Gesture::new(card.clone(), DragElement::column("done"))),
            DragEvent::End(Gesture::new(card.clone(), DragElement::column("done"))),
            DragEvent::End(Gesture::over_nothing(card)),
        ];

        let summary = replay(&mut engine, &events);

        assert_eq!(summary, Summary { changed: 1, ignored: 2 });
        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn render_seeded_board() {
        assert_eq!(
            render_columns(&default_board()),
            "backlog: [1, 2]\nto do: [3]\nin progress: [4]\ndone: [5]"
        );
    }

    #[tokio::test]
    async fn read_script_reports_missing_file() {
        let err = read_script(Path::new("/nonexistent/script.json5"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read script"));
    }
}
