//! Online agent scenario tests.

mod common;

use common::{
    at, boxed_start, corridor, hidden_goal, init_logging, maze, optimal_cost, walled_goal,
};
use kohra_map::{AgentConfig, AgentState, Algorithm, OnlineAgent, PlanTarget};

#[test]
fn test_corridor_reaches_goal_in_four_steps() {
    init_logging();
    let mut g = corridor(5);
    let mut agent = OnlineAgent::new(&mut g, AgentConfig::default());
    let m = agent.run(100);

    assert_eq!(agent.state(), AgentState::Done);
    assert!(m.reached_goal);
    assert_eq!(m.steps, 4);
    assert_eq!(m.cost, 4);
    assert_eq!(m.replans, 0);
    assert_eq!(m.path_taken, vec![at(0, 0), at(0, 1), at(0, 2), at(0, 3), at(0, 4)]);
}

#[test]
fn test_boxed_start_explores_until_route_is_seen() {
    init_logging();
    let mut g = boxed_start();
    let goal = g.goal();
    let mut agent = OnlineAgent::new(&mut g, AgentConfig::default());
    assert_eq!(agent.state(), AgentState::Exploring);
    assert!(matches!(agent.target(), Some(PlanTarget::Frontier(_))));
    assert_eq!(agent.plan()[1], at(1, 2));

    while agent.step() {
        if agent.grid().is_visible(goal) {
            assert_eq!(agent.state(), AgentState::PathFollowing);
        } else {
            assert_eq!(agent.state(), AgentState::Exploring);
        }
    }

    assert_eq!(agent.state(), AgentState::Done);
    assert_eq!(agent.current(), goal);
    assert_eq!(agent.metrics().steps, 6);
}

#[test]
fn test_goal_sighting_abandons_frontier_plan() {
    init_logging();
    for algo in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar] {
        let mut g = hidden_goal();
        let mut agent = OnlineAgent::new(&mut g, AgentConfig::with_algorithm(algo));

        // Up the right edge, along the top and down into the dead end
        for _ in 0..10 {
            assert!(agent.step(), "{algo}");
        }
        assert_eq!(agent.current(), at(3, 1));
        assert_eq!(agent.metrics().plans, 10);
        assert_eq!(agent.metrics().replans, 0);

        // Turn back toward the frontier beside the start
        assert!(agent.step());
        assert_eq!(agent.target(), Some(PlanTarget::Frontier(at(3, 4))));
        assert_eq!(agent.plan().len(), 9);
        assert_eq!(agent.metrics().plans, 11);

        for _ in 0..3 {
            assert!(agent.step());
        }
        assert_eq!(agent.current(), at(1, 3));
        assert_eq!(agent.plan().len(), 6);
        assert_eq!(agent.metrics().replans, 0);

        // The goal comes into view; the unfinished frontier plan is dropped
        assert!(!agent.step());
        let m = agent.metrics();
        assert_eq!(agent.state(), AgentState::Done);
        assert_eq!(agent.target(), Some(PlanTarget::Goal(at(2, 3))));
        assert_eq!(m.replans, 1, "{algo}");
        assert_eq!(m.plans, 12, "{algo}");
        assert_eq!(m.steps, 15);
        assert_eq!(m.cost, 15);
        assert_eq!(m.path_taken.last(), Some(&at(2, 3)));
    }
}

#[test]
fn test_walled_goal_ends_stuck() {
    init_logging();
    let budget = 200;
    let mut g = walled_goal();
    let goal = g.goal();
    let mut agent = OnlineAgent::new(&mut g, AgentConfig::default());
    let m = agent.run(budget);

    assert_eq!(agent.state(), AgentState::Stuck);
    assert!(agent.plan().is_empty());
    assert!(m.steps <= budget);
    assert!(!m.reached_goal);
    assert!(!m.budget_exhausted);
    // Every reachable cell on the start side has been seen
    assert!(agent.grid().is_visible(at(2, 2)));
    assert!(!agent.grid().is_visible(goal));
}

#[test]
fn test_walled_goal_full_map_is_stuck_immediately() {
    let mut g = walled_goal();
    let mut agent = OnlineAgent::new(&mut g, AgentConfig::default().fog(false));
    assert_eq!(agent.state(), AgentState::Stuck);
    let m = agent.run(10);
    assert_eq!(m.steps, 0);
    assert!(!m.budget_exhausted);
}

#[test]
fn test_full_map_walks_optimal_path() {
    for algo in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::AStar] {
        for seed in 0..4 {
            let mut g = maze(21, seed);
            let optimal = optimal_cost(&g).expect("generated mazes are solvable");
            let mut agent = OnlineAgent::new(&mut g, AgentConfig::with_algorithm(algo).fog(false));
            let m = agent.run(10_000);

            assert!(m.reached_goal, "{algo} seed {seed}");
            assert_eq!(m.cost, optimal, "{algo} seed {seed}");
            assert_eq!(m.plans, 1);
            assert_eq!(m.replans, 0);
        }
    }
}

#[test]
fn test_fog_missions_reach_goal() {
    init_logging();
    for algo in Algorithm::ALL {
        for seed in 0..4 {
            let mut g = maze(15, seed);
            let optimal = optimal_cost(&g).expect("generated mazes are solvable");
            let mut agent = OnlineAgent::new(&mut g, AgentConfig::with_algorithm(algo));
            let m = agent.run(10_000);

            assert!(m.reached_goal, "{algo} seed {seed}");
            assert!(m.cost >= optimal);
            assert_eq!(m.path_taken.len(), m.steps + 1);
            assert!(agent.grid().is_valid_path(&m.path_taken));
        }
    }
}

#[test]
fn test_budget_exhaustion_is_reported() {
    let mut g = maze(21, 6);
    let mut agent = OnlineAgent::new(&mut g, AgentConfig::default());
    let m = agent.run(3);

    assert_eq!(m.steps, 3);
    assert!(m.budget_exhausted);
    assert_eq!(agent.state(), AgentState::Stuck);
    assert!(!agent.step());
}

#[test]
fn test_metrics_accumulate_search_work() {
    let mut g = maze(15, 8);
    let mut agent = OnlineAgent::new(&mut g, AgentConfig::default());
    let m = agent.run(10_000);

    assert!(m.plans >= 1);
    assert!(m.replans <= m.plans);
    assert!(m.nodes_expanded >= m.plans);
    assert_eq!(&m, agent.metrics());
}
