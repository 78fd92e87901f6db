use network_flow::maximum_flow::edmonds_karp::EdmondsKarp;
use network_flow::maximum_flow::residual_graph::ResidualGraph;

fn main() {
    env_logger::init();

    let vertices = 20 + 2;
    let source = 0;
    let sink = vertices - 1;

    let mut graph = ResidualGraph::new(vertices);

    graph.add_edge(source, 1, 25).unwrap();
    graph.add_edge(source, 2, 20).unwrap();
    graph.add_edge(source, 3, 15).unwrap();
    graph.add_edge(source, 4, 15).unwrap();
    graph.add_edge(source, 5, 30).unwrap();
    // replaces the capacity 20 entry above
    graph.add_edge(source, 2, 10).unwrap();

    graph.add_edge(1, 6, 15).unwrap();
    graph.add_edge(1, 7, 10).unwrap();
    graph.add_edge(1, 8, 20).unwrap();
    graph.add_edge(2, 9, 15).unwrap();
    graph.add_edge(2, 10, 10).unwrap();
    graph.add_edge(2, 11, 25).unwrap();
    graph.add_edge(3, 12, 20).unwrap();
    graph.add_edge(3, 13, 15).unwrap();
    graph.add_edge(3, 14, 10).unwrap();
    graph.add_edge(4, 15, 20).unwrap();
    graph.add_edge(4, 16, 10).unwrap();
    graph.add_edge(4, 17, 15).unwrap();
    graph.add_edge(4, 18, 5).unwrap();
    graph.add_edge(4, 19, 10).unwrap();

    graph.add_edge(6, sink, 15).unwrap();
    graph.add_edge(7, sink, 10).unwrap();
    graph.add_edge(8, sink, 20).unwrap();
    graph.add_edge(9, sink, 15).unwrap();
    graph.add_edge(10, sink, 10).unwrap();
    graph.add_edge(11, sink, 25).unwrap();
    graph.add_edge(12, sink, 20).unwrap();
    graph.add_edge(13, sink, 15).unwrap();
    graph.add_edge(14, sink, 10).unwrap();
    graph.add_edge(15, sink, 20).unwrap();
    graph.add_edge(16, sink, 10).unwrap();
    graph.add_edge(17, sink, 15).unwrap();
    graph.add_edge(18, sink, 5).unwrap();
    graph.add_edge(19, sink, 10).unwrap();

    let max_flow: i64 = EdmondsKarp::default().solve(source, sink, &mut graph).unwrap();
    println!("Maximum flow: {}", max_flow);

    println!();
    println!("Flow Table:");
    println!("Terminal\tStore\tActual Flow");
    let flows = graph.flows();
    for u in 0..vertices {
        for v in 0..vertices {
            if flows[u][v] <= 0 {
                continue;
            }
            let terminal = match u {
                1..=3 => "Terminal 1",
                4..=5 => "Terminal 2",
                _ => continue,
            };
            if (6..=19).contains(&v) {
                println!("{}\tStore {}\t{}", terminal, v - 5, flows[u][v]);
            }
        }
    }
}
