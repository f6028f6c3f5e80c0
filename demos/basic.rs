use grid_planner::{AlgorithmKind, Connectivity, Heuristic, Planner};

const MAP: [&str; 5] = ["00000", "01010", "00000", "01110", "00000"];

fn parse_map() -> (usize, usize, Vec<u8>) {
    let height = MAP.len();
    let width = MAP[0].len();
    let mut cells = Vec::with_capacity(width * height);
    for row in MAP {
        for ch in row.chars() {
            cells.push(if ch == '1' { 1 } else { 0 });
        }
    }
    (width, height, cells)
}

fn main() {
    let (width, height, cells) = parse_map();
    let mut planner = Planner::new(width, height, cells);

    // map:
    // 00000
    // 01010
    // 00000
    // 01110
    // 00000

    let start = (0, 0);
    let goal = (4, 4);

    for (label, algo, heuristic, weight) in [
        ("BFS", AlgorithmKind::Bfs, Heuristic::Manhattan, 1.0),
        ("Dijkstra", AlgorithmKind::Dijkstra, Heuristic::Zero, 0.0),
        ("A* (octile)", AlgorithmKind::AStar, Heuristic::Octile, 1.0),
        (
            "Weighted A* (w=2)",
            AlgorithmKind::WAStar,
            Heuristic::Octile,
            2.0,
        ),
    ] {
        let result = planner.find_path(
            start.0,
            start.1,
            goal.0,
            goal.1,
            algo,
            heuristic,
            weight,
            Connectivity::Eight,
        );
        println!(
            "{label}: found={} length={:.4} expanded={} path={:?}",
            result.found, result.path_length, result.expanded_nodes, result.path
        );
    }

    let window = planner.get_cost2go_window(2, 2, goal.0, goal.1, 2, Connectivity::Eight, true);
    println!("cost-to-go window around (2, 2) toward {goal:?}:");
    for row in &window {
        let formatted: Vec<String> = row.iter().map(|v| format!("{v:6.2}")).collect();
        println!("  {}", formatted.join(" "));
    }
}
