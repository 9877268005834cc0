//! Rendering the connectivity graph as an indented text tree.
//!
//! The traversal is depth-first from the root. Each rendered node is one
//! accumulated [`Run`]; children hang off the fittings at the run's far end.
//! Tee branches are ordered largest-first, with the largest treated as the
//! main continuation and drawn last. Work is kept on an explicit stack, and
//! branch lists are computed only when their turn comes, so the output
//! matches a recursive walk line for line without growing the call stack.

use pipe_core::{FittingId, SegmentId};
use pipe_graph::{Fitting, PipeGraph, Segment};

use crate::accumulate::{Run, accumulate};
use crate::diameter::size_label;
use crate::drawn::DrawnSet;
use crate::root::size_order;

const ROOT_CONNECTOR: &str = "• ";
const MID_CONNECTOR: &str = "├── ";
const LAST_CONNECTOR: &str = "└── ";
const MID_INDENT: &str = "│   ";
const LAST_INDENT: &str = "    ";
const ENDPOINT_MARK: &str = "  ►";

/// One rendered line of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    pub text: String,
    /// 0 for the root.
    pub depth: usize,
    pub run: Run,
    pub is_endpoint: bool,
}

/// Whether a node is the last child of its parent.
#[derive(Debug, Clone, Copy)]
enum Sibling {
    Last,
    NotLast,
    /// Last side branch of a tee: last only if the tee's main continuation
    /// was drawn by an earlier sibling's subtree.
    LastIfDrawn(SegmentId),
}

impl Sibling {
    fn resolve(self, drawn: &DrawnSet) -> bool {
        match self {
            Sibling::Last => true,
            Sibling::NotLast => false,
            Sibling::LastIfDrawn(main) => drawn.contains(main),
        }
    }
}

enum Task {
    Render {
        segment: SegmentId,
        indent: String,
        depth: usize,
        sibling: Sibling,
        came_from: Option<FittingId>,
    },
    /// Expand a tee into side branches and a main continuation.
    Tee {
        tee: FittingId,
        from: SegmentId,
        indent: String,
        depth: usize,
    },
    /// Expand any other multi-pipe fitting; every child renders as last.
    Junction {
        fitting: FittingId,
        from: SegmentId,
        indent: String,
        depth: usize,
    },
}

/// Render the tree reachable from `root`, marking every emitted segment in `drawn`.
///
/// Segments already in `drawn` are never rendered again, so each segment
/// appears in exactly one line.
pub fn render_tree(graph: &PipeGraph, root: SegmentId, drawn: &mut DrawnSet) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    let mut stack = vec![Task::Render {
        segment: root,
        indent: String::new(),
        depth: 0,
        sibling: Sibling::Last,
        came_from: None,
    }];

    while let Some(task) = stack.pop() {
        match task {
            Task::Render {
                segment,
                indent,
                depth,
                sibling,
                came_from,
            } => {
                let Some(segment) = graph.segment(segment) else {
                    continue;
                };
                let is_last = sibling.resolve(drawn);
                if let Some(line) = render_node(
                    graph, segment, &indent, depth, is_last, came_from, drawn, &mut stack,
                ) {
                    lines.push(line);
                }
            }
            Task::Tee {
                tee,
                from,
                indent,
                depth,
            } => expand_tee(graph, tee, from, indent, depth, drawn, &mut stack),
            Task::Junction {
                fitting,
                from,
                indent,
                depth,
            } => {
                let Some(fitting) = graph.fitting(fitting) else {
                    continue;
                };
                // Pushed in reverse so they pop in size order.
                for next in undrawn_branches(graph, fitting, from, drawn).into_iter().rev() {
                    stack.push(Task::Render {
                        segment: next.id,
                        indent: indent.clone(),
                        depth,
                        sibling: Sibling::Last,
                        came_from: Some(fitting.id),
                    });
                }
            }
        }
    }

    tracing::debug!(lines = lines.len(), drawn = drawn.len(), "rendered tree");
    lines
}

/// Emit one run and queue the fittings at its far end.
#[allow(clippy::too_many_arguments)]
fn render_node(
    graph: &PipeGraph,
    segment: &Segment,
    indent: &str,
    depth: usize,
    is_last: bool,
    came_from: Option<FittingId>,
    drawn: &mut DrawnSet,
    stack: &mut Vec<Task>,
) -> Option<TreeLine> {
    if !drawn.insert(segment.id) {
        return None;
    }

    let run = accumulate(graph, segment, came_from, drawn);
    let final_fittings: Vec<&Fitting> = graph
        .fittings_at(run.final_segment)
        .iter()
        .copied()
        .filter(|&id| Some(id) != run.last_fitting)
        .filter_map(|id| graph.fitting(id))
        .collect();
    let is_endpoint = final_fittings.is_empty();

    let connector = if depth == 0 {
        ROOT_CONNECTOR
    } else if is_last {
        LAST_CONNECTOR
    } else {
        MID_CONNECTOR
    };
    let text = format!(
        "{indent}{connector}{}{}{}",
        size_label(run.diameter, run.total_length),
        elbow_note(run.elbow_count),
        if is_endpoint { ENDPOINT_MARK } else { "" }
    );

    if !is_endpoint {
        let child_indent = format!("{indent}{}", if is_last { LAST_INDENT } else { MID_INDENT });
        let (tees, others): (Vec<&Fitting>, Vec<&Fitting>) =
            final_fittings.into_iter().partition(|f| f.is_tee());

        let tasks: Vec<Task> = tees
            .into_iter()
            .map(|tee| Task::Tee {
                tee: tee.id,
                from: run.final_segment,
                indent: child_indent.clone(),
                depth: depth + 1,
            })
            .chain(others.into_iter().map(|fitting| Task::Junction {
                fitting: fitting.id,
                from: run.final_segment,
                indent: child_indent.clone(),
                depth: depth + 1,
            }))
            .collect();
        stack.extend(tasks.into_iter().rev());
    }

    Some(TreeLine {
        text,
        depth,
        run,
        is_endpoint,
    })
}

fn expand_tee(
    graph: &PipeGraph,
    tee: FittingId,
    from: SegmentId,
    indent: String,
    depth: usize,
    drawn: &DrawnSet,
    stack: &mut Vec<Task>,
) {
    let Some(fitting) = graph.fitting(tee) else {
        return;
    };
    let branches = undrawn_branches(graph, fitting, from, drawn);
    let Some((main, sides)) = branches.split_first() else {
        return;
    };

    let mut tasks = Vec::with_capacity(branches.len());
    for (i, side) in sides.iter().enumerate() {
        let sibling = if i + 1 == sides.len() {
            Sibling::LastIfDrawn(main.id)
        } else {
            Sibling::NotLast
        };
        tasks.push(Task::Render {
            segment: side.id,
            indent: indent.clone(),
            depth,
            sibling,
            came_from: Some(tee),
        });
    }
    tasks.push(Task::Render {
        segment: main.id,
        indent,
        depth,
        sibling: Sibling::Last,
        came_from: Some(tee),
    });
    stack.extend(tasks.into_iter().rev());
}

/// Segments on `fitting` other than `from`, not yet drawn, largest first.
fn undrawn_branches<'g>(
    graph: &'g PipeGraph,
    fitting: &Fitting,
    from: SegmentId,
    drawn: &DrawnSet,
) -> Vec<&'g Segment> {
    let mut branches: Vec<&Segment> = fitting
        .connected_pipes
        .iter()
        .copied()
        .filter(|&id| id != from && !drawn.contains(id))
        .filter_map(|id| graph.segment(id))
        .collect();
    branches.sort_by(|a, b| size_order(a, b));
    branches
}

fn elbow_note(count: u32) -> String {
    match count {
        0 => String::new(),
        1 => "  (1 elbow)".to_string(),
        n => format!("  ({n} elbows)"),
    }
}
