use graphwalk::apply_overrides;
use graphwalk::cli::{parse_from, Command};
use graphwalk::commands::with_command_flags;
use graphwalk::config::Settings;
use graphwalk::types::{Objective, Relaxation};
use graphwalk_test_utils::builders::{weighted_chain, GraphInputBuilder};
use graphwalk_test_utils::{init_tracing, quiet_settings, run_to_string};

fn sample_undirected() -> String {
    GraphInputBuilder::new(5)
        .edges(&[(1, 2), (1, 3), (2, 4)])
        .build()
}

fn triangle() -> GraphInputBuilder {
    GraphInputBuilder::new(3).weighted_edges(&[(0, 1, 1), (1, 2, 1), (0, 2, 5)])
}

#[test]
fn bfs_prints_one_line() {
    init_tracing();
    let out = run_to_string(&Command::Bfs, &quiet_settings(), &sample_undirected()).unwrap();
    assert_eq!(out, "1 2 3 4 5\n");
}

#[test]
fn dfs_prints_vertices_then_adjacency() {
    init_tracing();
    let out = run_to_string(
        &Command::Dfs { no_edges: false },
        &quiet_settings(),
        &sample_undirected(),
    )
    .unwrap();
    assert_eq!(out, "1\n2\n4\n3\n5\n1->2 1->3\n2->1 2->4\n3->1\n4->2\n\n");
}

#[test]
fn dfs_without_edge_listing() {
    let out = run_to_string(
        &Command::Dfs { no_edges: true },
        &quiet_settings(),
        &sample_undirected(),
    )
    .unwrap();
    assert_eq!(out, "1\n2\n4\n3\n5\n");
}

#[test]
fn toposort_prints_order() {
    let input = GraphInputBuilder::new(4)
        .edges(&[(4, 2), (2, 1), (3, 1)])
        .build();
    let out = run_to_string(&Command::Toposort, &quiet_settings(), &input).unwrap();
    assert_eq!(out, "3 4 2 1\n");
}

#[test]
fn toposort_on_cycle_prints_partial_order_and_succeeds() {
    let input = GraphInputBuilder::new(3)
        .edges(&[(1, 2), (2, 1)])
        .build();
    let out = run_to_string(&Command::Toposort, &quiet_settings(), &input).unwrap();
    assert_eq!(out, "3\n");
}

#[test]
fn dag_shortest_path_chain() {
    let cmd = Command::DagShortestPath {
        source: None,
        relaxation: None,
        longest: false,
    };
    let input = weighted_chain(&[3, 4]).build();
    let out = run_to_string(&cmd, &quiet_settings(), &input).unwrap();
    assert_eq!(out, "0 3 7\n");
}

#[test]
fn dag_shortest_path_prints_infinity_label() {
    let cmd = Command::DagShortestPath {
        source: None,
        relaxation: None,
        longest: false,
    };
    let input = GraphInputBuilder::new(2).build();
    let out = run_to_string(&cmd, &quiet_settings(), &input).unwrap();
    assert_eq!(out, "0 INF\n");
}

#[test]
fn floyd_warshall_answers_query_after_prompts() {
    let cmd = Command::FloydWarshall { matrix: false };
    let out = run_to_string(&cmd, &Settings::default(), &triangle().query(0, 2).build()).unwrap();
    assert_eq!(
        out,
        "Enter the number of vertices and edges:\n\
         Enter the edges and their weights (u v w):\n\
         Enter the 2 nodes between which you want the shortest distance:\n\
         Answer: 2\n"
    );
}

#[test]
fn floyd_warshall_without_query_prints_matrix() {
    let cmd = Command::FloydWarshall { matrix: false };
    let out = run_to_string(&cmd, &quiet_settings(), &triangle().build()).unwrap();
    assert_eq!(out, "0 1 2\nINF 0 1\nINF INF 0\n");
}

#[test]
fn floyd_warshall_matrix_flag_prints_both() {
    let cmd = Command::FloydWarshall { matrix: true };
    let out = run_to_string(&cmd, &quiet_settings(), &triangle().query(2, 0).build()).unwrap();
    assert_eq!(out, "Answer: INF\n0 1 2\nINF 0 1\nINF INF 0\n");
}

#[test]
fn single_vertex_boundary_for_every_command() {
    let one = GraphInputBuilder::new(1).build();
    let settings = quiet_settings();

    assert_eq!(run_to_string(&Command::Bfs, &settings, &one).unwrap(), "1\n");
    assert_eq!(
        run_to_string(&Command::Dfs { no_edges: true }, &settings, &one).unwrap(),
        "1\n"
    );
    assert_eq!(run_to_string(&Command::Toposort, &settings, &one).unwrap(), "1\n");

    let dag = Command::DagShortestPath {
        source: None,
        relaxation: None,
        longest: false,
    };
    assert_eq!(run_to_string(&dag, &settings, &one).unwrap(), "0\n");

    let fw = Command::FloydWarshall { matrix: false };
    let query = GraphInputBuilder::new(1).query(0, 0).build();
    assert_eq!(run_to_string(&fw, &settings, &query).unwrap(), "Answer: 0\n");
}

#[test]
fn identical_input_gives_identical_output() {
    let input = GraphInputBuilder::new(6)
        .edges(&[(1, 4), (4, 6), (2, 5), (5, 3), (6, 2)])
        .build();
    let commands = [
        Command::Bfs,
        Command::Dfs { no_edges: false },
        Command::Toposort,
    ];
    for cmd in &commands {
        let first = run_to_string(cmd, &Settings::default(), &input).unwrap();
        let second = run_to_string(cmd, &Settings::default(), &input).unwrap();
        assert_eq!(first, second, "{}", cmd.name());
    }

    let dag_input = GraphInputBuilder::new(5)
        .weighted_edges(&[(1, 2, 10), (1, 3, 1), (3, 4, 1), (4, 2, 1), (2, 5, -2)])
        .build();
    let dag_commands = [
        Command::DagShortestPath {
            source: None,
            relaxation: None,
            longest: false,
        },
        Command::DagShortestPath {
            source: Some(3),
            relaxation: Some(Relaxation::Queue),
            longest: true,
        },
    ];
    for cmd in &dag_commands {
        let first = run_to_string(cmd, &Settings::default(), &dag_input).unwrap();
        let second = run_to_string(cmd, &Settings::default(), &dag_input).unwrap();
        assert_eq!(first, second, "{cmd:?}");
    }

    let fw = Command::FloydWarshall { matrix: true };
    for fw_input in [triangle().build(), triangle().query(0, 2).build()] {
        let first = run_to_string(&fw, &Settings::default(), &fw_input).unwrap();
        let second = run_to_string(&fw, &Settings::default(), &fw_input).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with("INF INF 0\n"));
    }
}

#[test]
fn custom_separator_and_infinity() {
    let settings = Settings {
        separator: ",".into(),
        infinity: "inf".into(),
        ..quiet_settings()
    };
    let cmd = Command::DagShortestPath {
        source: None,
        relaxation: None,
        longest: false,
    };
    let input = GraphInputBuilder::new(3).weighted_edge(1, 2, 3).build();
    assert_eq!(run_to_string(&cmd, &settings, &input).unwrap(), "0,3,inf\n");
}

#[test]
fn subcommand_flags_override_settings() {
    let args = parse_from([
        "graphwalk",
        "--no-prompts",
        "dag-shortest-path",
        "--source",
        "2",
        "--relaxation",
        "queue",
        "--longest",
    ]);
    let base = apply_overrides(Settings::default(), &args);
    assert!(!base.prompts);

    let settings = with_command_flags(&base, &args.command);
    assert_eq!(settings.source, 2);
    assert_eq!(settings.relaxation, Relaxation::Queue);
    assert_eq!(settings.objective, Objective::Longest);
}

#[test]
fn global_flags_are_accepted_after_the_subcommand() {
    let args = parse_from(["graphwalk", "dfs", "-q", "--no-edges"]);
    assert!(args.no_prompts);
    let settings = with_command_flags(&apply_overrides(Settings::default(), &args), &args.command);
    assert!(!settings.prompts);
    assert!(!settings.print_edges);
    assert_eq!(args.command.name(), "dfs");
}
