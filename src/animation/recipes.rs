//! Step lists narrating each widget operation.
//!
//! These turn the information returned by the structure models (paths,
//! probes, swap traces) into sequences for the [`Sequencer`](super::Sequencer).

use egui::{Color32, Vec2};

use super::step::{Motion, Settle, Step};
use super::timing;
use crate::scene::builders::heap_slot_position;
use crate::scene::ElementId;
use crate::structures::btree;
use crate::structures::heap::HeapTrace;
use crate::structures::search::SearchOutcome;
use crate::structures::bst;
use crate::theme::VizPalette;

fn eid(index: usize) -> ElementId {
    index as ElementId
}

/// Lift the cell, hold it in red, then drop the highlight.
pub fn array_access(index: usize, palette: &VizPalette) -> Vec<Step> {
    vec![
        Step::new(eid(index))
            .highlight(palette.highlight)
            .settle(Settle::Keep)
            .motion(Motion::Lift { height: 1.0 }, timing::ACCESS_LIFT)
            .hold(timing::ACCESS_HOLD),
        Step::clear(eid(index)),
    ]
}

/// Hop along the chain head to tail.
pub fn list_traverse(nodes: &[usize], palette: &VizPalette) -> Vec<Step> {
    let last = nodes.len().saturating_sub(1);
    nodes
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let step = Step::new(eid(node))
                .highlight(palette.highlight)
                .motion(Motion::Bounce { height: 0.5 }, timing::LIST_BOUNCE);
            if i == last {
                step
            } else {
                step.hold(timing::LIST_HOLD)
            }
        })
        .collect()
}

/// Pulse each node on the search path; the match stays red.
pub fn tree_search(path: &bst::SearchPath, palette: &VizPalette) -> Vec<Step> {
    path.visited
        .iter()
        .map(|&node| {
            let settle = if path.found == Some(node) {
                Settle::Keep
            } else {
                Settle::Restore
            };
            Step::new(eid(node))
                .highlight(palette.highlight)
                .settle(settle)
                .motion(
                    Motion::Pulse {
                        amplitude: 0.3,
                        cycles: 4.0,
                    },
                    timing::TREE_SEARCH_PULSE,
                )
                .hold(timing::TREE_SEARCH_HOLD)
        })
        .collect()
}

/// Short green pulse on a freshly inserted node.
pub fn tree_insert(node: usize, palette: &VizPalette) -> Vec<Step> {
    vec![Step::new(eid(node))
        .highlight(palette.visited)
        .motion(
            Motion::Pulse {
                amplitude: 0.4,
                cycles: 2.0,
            },
            timing::TREE_INSERT_PULSE,
        )]
}

/// One arc swap per repair swap, replayed over the staging picture.
pub fn heap_swaps(trace: &HeapTrace, palette: &VizPalette) -> Vec<Step> {
    trace
        .swaps
        .iter()
        .map(|&(a, b)| {
            let delta: Vec2 = heap_slot_position(b) - heap_slot_position(a);
            Step::new(eid(a))
                .highlight(palette.highlight)
                .settle(Settle::Clear)
                .motion(
                    Motion::Swap {
                        partner: eid(b),
                        delta,
                        arc: 2.0,
                    },
                    timing::HEAP_SWAP,
                )
                .hold(timing::HEAP_SWAP_HOLD)
        })
        .collect()
}

/// Probe cells left to right; green on the match, gray otherwise.
pub fn linear_search(outcome: &SearchOutcome, palette: &VizPalette) -> Vec<Step> {
    outcome
        .probes
        .iter()
        .map(|probe| {
            let settle = settle_for(probe.matched, palette);
            Step::new(eid(probe.index))
                .highlight(palette.highlight)
                .settle(settle)
                .motion(Motion::Bounce { height: 0.8 }, timing::LINEAR_PROBE)
                .hold(timing::LINEAR_HOLD)
        })
        .collect()
}

/// For every probe: paint the live range amber, bounce the midpoint, then
/// gray out the half that was ruled out.
pub fn binary_search(
    outcome: &SearchOutcome,
    values: &[i64],
    target: i64,
    palette: &VizPalette,
) -> Vec<Step> {
    let mut steps = Vec::new();
    for probe in &outcome.probes {
        let mid = probe.index;
        steps.extend(
            (probe.low..=probe.high)
                .filter(|&i| i != mid)
                .map(|i| Step::recolor(eid(i), palette.range)),
        );
        steps.push(
            Step::new(eid(mid))
                .highlight(palette.highlight)
                .settle(settle_for(probe.matched, palette))
                .motion(Motion::Bounce { height: 1.2 }, timing::BINARY_PROBE)
                .hold(timing::BINARY_HOLD),
        );
        if probe.matched {
            continue;
        }
        let ruled_out = match values.get(mid) {
            Some(&v) if v < target => probe.low..=mid,
            _ => mid..=probe.high,
        };
        steps.extend(ruled_out.map(|i| Step::recolor(eid(i), palette.eliminated)));
    }
    steps
}

/// Pulse each node in visiting order and leave it green.
pub fn traversal(order: &[usize], palette: &VizPalette) -> Vec<Step> {
    order
        .iter()
        .map(|&node| {
            Step::new(eid(node))
                .highlight(palette.highlight)
                .settle(Settle::Recolor(palette.visited))
                .motion(
                    Motion::Pulse {
                        amplitude: 0.4,
                        cycles: 3.0,
                    },
                    timing::TRAVERSAL_PULSE,
                )
                .hold(timing::TRAVERSAL_HOLD)
        })
        .collect()
}

/// Highlight each B-tree node on the lookup path for a beat.
pub fn btree_search(path: &btree::SearchPath, palette: &VizPalette) -> Vec<Step> {
    let found = path.found.map(|(node, _)| node);
    path.visited
        .iter()
        .map(|&node| {
            let settle = if found == Some(node) {
                Settle::Recolor(palette.visited)
            } else {
                Settle::Restore
            };
            Step::new(eid(node))
                .highlight(palette.highlight)
                .settle(settle)
                .motion(
                    Motion::Pulse {
                        amplitude: 0.1,
                        cycles: 2.0,
                    },
                    timing::BTREE_HIGHLIGHT,
                )
        })
        .collect()
}

/// Flash the root after a key lands in it.
pub fn btree_insert(root: usize, palette: &VizPalette) -> Vec<Step> {
    vec![Step::new(eid(root))
        .highlight(palette.visited)
        .motion(Motion::Still, timing::BTREE_HIGHLIGHT)]
}

fn settle_for(matched: bool, palette: &VizPalette) -> Settle {
    let color: Color32 = if matched {
        palette.visited
    } else {
        palette.eliminated
    };
    Settle::Recolor(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{SequenceEvent, Sequencer};
    use crate::structures::search::{binary_search as run_binary, SEARCH_SEED};
    use crate::structures::Heap;
    use crate::theme::ThemeManager;
    use std::time::Duration;

    fn palette() -> VizPalette {
        ThemeManager::new().current_theme().palette.clone()
    }

    #[test]
    fn test_array_access_total_time() {
        let steps = array_access(2, &palette());
        let total: Duration = steps.iter().map(Step::total).sum();
        assert_eq!(total, Duration::from_millis(2000));
    }

    #[test]
    fn test_binary_search_marks_match_green() {
        let palette = palette();
        let outcome = run_binary(&SEARCH_SEED, 68);
        let steps = binary_search(&outcome, &SEARCH_SEED, 68, &palette);

        let mut seq = Sequencer::new();
        seq.start(steps).unwrap();
        let events = seq.run_to_end(Duration::from_millis(16));
        assert_eq!(events.last(), Some(&SequenceEvent::Finished));

        let found = outcome.index.unwrap() as ElementId;
        assert_eq!(seq.style(found).color, Some(palette.visited));
        // First probe is index 4 (52 < 68), so 0..=4 end up gray.
        assert_eq!(seq.style(0).color, Some(palette.eliminated));
        assert_eq!(seq.style(4).color, Some(palette.eliminated));
    }

    #[test]
    fn test_heap_swap_steps_follow_trace() {
        let mut heap = Heap::seeded();
        let trace = heap.insert(100);
        let steps = heap_swaps(&trace, &palette());
        assert_eq!(steps.len(), trace.swaps.len());
        let (a, b) = trace.swaps[0];
        assert_eq!(steps[0].target, a as ElementId);
        assert_eq!(steps[0].partner(), Some(b as ElementId));
    }

    #[test]
    fn test_list_traverse_last_step_has_no_hold() {
        let steps = list_traverse(&[3, 2, 1], &palette());
        assert_eq!(steps[0].hold, timing::LIST_HOLD);
        assert_eq!(steps[2].hold, Duration::ZERO);
    }
}
