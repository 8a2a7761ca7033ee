//! Search algorithm integration tests on generated and hand-made mazes.

mod common;

use common::{at, grid, maze};
use kohra_map::Algorithm;

#[test]
fn test_optimal_algorithms_agree_on_length() {
    for seed in 0..8 {
        let g = maze(21, seed);
        let lengths: Vec<usize> = [Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar]
            .into_iter()
            .map(|a| a.search(g.start(), g.goal(), |c| g.passable_neighbors(c)).len())
            .collect();
        assert!(lengths[0] > 0, "seed {seed}");
        assert!(lengths.iter().all(|l| *l == lengths[0]), "seed {seed}: {lengths:?}");
    }
}

#[test]
fn test_every_path_is_valid() {
    for seed in 0..5 {
        let g = maze(15, seed);
        for algo in Algorithm::ALL {
            let result = algo.search_with_stats(g.start(), g.goal(), |c| g.passable_neighbors(c));
            assert!(g.is_valid_path(&result.path), "{algo} seed {seed}");
            assert_eq!(result.path.first(), Some(&g.start()));
            assert_eq!(result.path.last(), Some(&g.goal()));
            assert_eq!(result.cost, result.path.len() - 1);
            assert!(result.nodes_expanded > 0);
        }
    }
}

#[test]
fn test_dfs_never_beats_bfs() {
    let g = maze(21, 11);
    let neighbors = |c| g.passable_neighbors(c);
    let dfs = Algorithm::Dfs.search(g.start(), g.goal(), neighbors);
    let bfs = Algorithm::Bfs.search(g.start(), g.goal(), neighbors);
    assert!(dfs.len() >= bfs.len());
}

#[test]
fn test_start_equals_goal() {
    let g = maze(11, 0);
    for algo in Algorithm::ALL {
        let result = algo.search_with_stats(g.start(), g.start(), |c| g.passable_neighbors(c));
        assert_eq!(result.path, vec![g.start()], "{algo}");
        assert_eq!(result.nodes_expanded, 0, "{algo}");
        assert_eq!(result.cost, 0, "{algo}");
    }
}

#[test]
fn test_unreachable_goal() {
    let g = grid(&["S,0,1,0", "0,0,1,G"]);
    for algo in Algorithm::ALL {
        let result = algo.search_with_stats(g.start(), g.goal(), |c| g.passable_neighbors(c));
        assert!(result.path.is_empty(), "{algo}");
        assert_eq!(result.cost, 0, "{algo}");
        assert_eq!(result.nodes_expanded, 4, "{algo}");
    }
}

#[test]
fn test_astar_expands_no_more_than_ucs() {
    let g = grid(&[
        "S,0,0,0,0,0,0,0",
        "0,0,0,0,0,0,0,0",
        "0,0,0,0,0,0,0,0",
        "0,0,0,0,0,0,0,G",
    ]);
    let neighbors = |c| g.passable_neighbors(c);
    let astar = Algorithm::AStar.search_with_stats(g.start(), g.goal(), neighbors);
    let ucs = Algorithm::Ucs.search_with_stats(g.start(), g.goal(), neighbors);
    assert_eq!(astar.cost, 10);
    assert_eq!(ucs.cost, 10);
    assert!(astar.nodes_expanded <= ucs.nodes_expanded);
}

#[test]
fn test_search_respects_fog() {
    let mut g = grid(&["S,0,0,G"]);
    g.reveal_from(at(0, 0));
    let path = Algorithm::AStar.search(g.start(), g.goal(), |c| g.get_visible_neighbors(c));
    assert!(path.is_empty());

    g.reveal_all();
    let path = Algorithm::AStar.search(g.start(), g.goal(), |c| g.get_visible_neighbors(c));
    assert_eq!(path.len(), 4);
}
