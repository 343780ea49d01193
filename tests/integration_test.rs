use rdsviz::animation::recipes;
use rdsviz::judge::catalog;
use rdsviz::judge::{ExecutionBackend, Submission};
use rdsviz::structures::search::binary_search_bound;
use rdsviz::{
    ArrayModel, BTreeDemo, BinarySearchTree, Heap, HeapKind, HeuristicBackend, JudgeSession,
    Language, LinkedList, Motion, SequenceEvent, Sequencer, Step, ThemeManager, TraversalModel,
    TraversalOrder, Verdict, VizError, VizPalette, binary_search, linear_search,
};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn palette() -> VizPalette {
    ThemeManager::new().current_theme().palette.clone()
}

fn random_values(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-500..500)).collect()
}

fn assert_max_heap(values: &[i64]) {
    for i in 1..values.len() {
        let parent = (i - 1) / 2;
        assert!(
            values[parent] >= values[i],
            "heap property broken at {i}: {values:?}"
        );
    }
}

// ===== Structure properties =====

#[test]
fn test_bst_in_order_is_sorted() {
    for seed in 0..8 {
        let mut tree = BinarySearchTree::new();
        for value in random_values(seed, 40) {
            tree.insert(value);
        }
        let in_order = tree.traverse_values(TraversalOrder::InOrder);
        assert!(in_order.windows(2).all(|w| w[0] <= w[1]), "seed {seed}: {in_order:?}");
    }
}

#[test]
fn test_seed_tree_orders() {
    let tree = BinarySearchTree::seeded();
    assert_eq!(
        tree.traverse_values(TraversalOrder::InOrder),
        vec![20, 30, 40, 50, 60, 70, 80]
    );
    assert_eq!(
        tree.traverse_values(TraversalOrder::LevelOrder),
        vec![50, 30, 70, 20, 40, 60, 80]
    );
    assert_eq!(
        tree.traverse_values(TraversalOrder::PreOrder),
        vec![50, 30, 20, 40, 70, 60, 80]
    );
    assert_eq!(
        tree.traverse_values(TraversalOrder::PostOrder),
        vec![20, 40, 30, 60, 80, 70, 50]
    );
}

#[test]
fn test_heap_property_after_every_insert() {
    let mut heap = Heap::new(HeapKind::Max);
    for value in random_values(42, 50) {
        heap.insert(value);
        assert_max_heap(heap.as_slice());
    }
}

#[test]
fn test_extract_root_returns_maximum() -> Result<()> {
    let values = random_values(7, 30);
    let mut heap = Heap::new(HeapKind::Max);
    for &value in &values {
        heap.insert(value);
    }

    let expected = values.iter().copied().max().unwrap_or_default();
    let (root, _) = heap.extract_root()?;
    assert_eq!(root, expected);
    assert_eq!(heap.len(), values.len() - 1);
    assert_max_heap(heap.as_slice());
    Ok(())
}

#[test]
fn test_extract_from_empty_heap() {
    let mut heap = Heap::new(HeapKind::Max);
    assert_eq!(heap.extract_root().map(|(v, _)| v), Err(VizError::Empty));
}

#[test]
fn test_binary_search_index_and_bound() {
    for len in [1usize, 2, 5, 9, 16, 33, 100] {
        let values: Vec<i64> = (0..len as i64).map(|i| i * 3).collect();
        let bound = binary_search_bound(len);

        for (i, &target) in values.iter().enumerate() {
            let outcome = binary_search(&values, target);
            assert_eq!(outcome.signed_index(), i as i64);
            assert!(outcome.comparisons <= bound, "len {len} target {target}");
        }

        let missing = binary_search(&values, 1);
        assert_eq!(missing.signed_index(), -1);
        assert!(missing.comparisons <= bound);
    }
}

#[test]
fn test_linear_and_binary_agree() {
    let values = [10, 23, 35, 47, 52, 68, 74, 81, 95];
    for target in [10, 52, 95, 11, 100] {
        assert_eq!(
            linear_search(&values, target).index,
            binary_search(&values, target).index
        );
    }
}

#[test]
fn test_list_prepends_then_remove() -> Result<()> {
    let mut list = LinkedList::from_values(&[1, 2, 3]);
    list.prepend(10);
    let before_last = list.to_vec();
    list.prepend(20);

    assert_eq!(list.remove_head()?, 20);
    assert_eq!(list.to_vec(), before_last);
    Ok(())
}

#[test]
fn test_array_access_out_of_range() {
    let array = ArrayModel::seeded();
    assert_eq!(
        array.access(array.len()),
        Err(VizError::IndexOutOfRange {
            index: array.len(),
            len: array.len()
        })
    );
}

#[test]
fn test_btree_search_reaches_leaf() {
    let tree = BTreeDemo::seeded();
    let root = tree.root();
    let Some(key) = tree
        .levels()
        .last()
        .and_then(|leaves| leaves.first())
        .and_then(|&leaf| tree.node(leaf))
        .and_then(|node| node.keys.first().copied())
    else {
        panic!("seeded tree has no leaf keys");
    };

    let path = tree.search_path(key);
    assert_eq!(path.visited.first(), Some(&root));
    assert!(path.found.is_some());
}

// ===== Sequencer =====

#[test]
fn test_sequencer_refuses_while_busy() {
    let mut seq = Sequencer::new();
    let step = Step::new(0).motion(Motion::Bounce { height: 1.0 }, Duration::from_millis(200));
    assert!(seq.start(vec![step.clone()]).is_ok());
    assert_eq!(seq.start(vec![step]), Err(VizError::Busy));
}

#[test]
fn test_steps_complete_in_order() {
    let palette = palette();
    let mut seq = Sequencer::new();
    let mut events = seq.start(recipes::traversal(&[0, 1, 2, 3], &palette)).unwrap_or_default();
    events.extend(seq.run_to_end(FRAME));

    let completed: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            SequenceEvent::StepCompleted(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(completed, vec![0, 1, 2, 3]);
    assert_eq!(events.last(), Some(&SequenceEvent::Finished));
    assert!(!seq.is_busy());
}

#[test]
fn test_cancel_returns_to_idle_and_restores_colour() {
    let palette = palette();
    let mut seq = Sequencer::new();
    assert!(seq.start(recipes::array_access(2, &palette)).is_ok());
    seq.advance(Duration::from_millis(300));
    assert!(seq.is_busy());

    assert!(seq.cancel());
    let events = seq.advance(FRAME);
    assert!(events.contains(&SequenceEvent::Cancelled));
    assert!(!seq.is_busy());
    let style = seq.style(2);
    assert_eq!(style, style.at_rest());
    assert_eq!(style.color, None);

    // A new run starts from a clean overlay
    assert!(seq.start(recipes::array_access(1, &palette)).is_ok());
    assert!(seq.style(2).is_identity());
}

#[test]
fn test_heap_swap_replay_matches_heap() {
    let palette = palette();
    let mut heap = Heap::seeded();
    let trace = heap.insert(99);

    let mut display = trace.staging.clone();
    let mut seq = Sequencer::new();
    let mut events = seq.start(recipes::heap_swaps(&trace, &palette)).unwrap_or_default();
    events.extend(seq.run_to_end(FRAME));
    for event in events {
        if let SequenceEvent::StepCompleted(i) = event {
            let (a, b) = trace.swaps[i];
            display.swap(a, b);
        }
    }
    assert_eq!(display, heap.as_slice());
}

#[test]
fn test_traversal_model_marks_steps() {
    let mut model = TraversalModel::new();
    model.set_order(TraversalOrder::LevelOrder);
    let order = model.begin();
    for i in 0..order.len() {
        model.mark_step(i);
    }
    assert_eq!(model.result_values(), vec![50, 30, 70, 20, 40, 60, 80]);
}

// ===== Judge =====

#[test]
fn test_catalog_has_four_problems() -> Result<()> {
    let problems = catalog::problems()?;
    assert_eq!(problems.len(), 4);
    assert!(catalog::find("two-sum").is_ok());
    assert!(matches!(
        catalog::find("no-such-problem"),
        Err(VizError::UnknownProblem(_))
    ));
    Ok(())
}

#[test]
fn test_keyword_rule_passes_all_cases() -> Result<()> {
    let problem = catalog::find("two-sum")?;
    let submission = Submission {
        problem,
        language: Language::Java,
        code: "Map<Integer, Integer> seen = new HashMap<>();".to_string(),
    };
    let report = HeuristicBackend::seeded(1).judge(&submission);
    assert_eq!(report.verdict, Verdict::Accepted);
    assert_eq!(report.passed(), problem.test_cases.len());
    Ok(())
}

#[test]
fn test_session_rejects_stale_report() -> Result<()> {
    let mut session = JudgeSession::with("binary-search", Language::Python)?;
    let report = HeuristicBackend::seeded(3).judge(&session.submission());

    session.set_language(Language::Cpp);
    assert!(!session.accept_report(report));
    assert!(session.report().is_none());

    session.run(&mut HeuristicBackend::seeded(3));
    assert!(session.summary().is_some());
    Ok(())
}
