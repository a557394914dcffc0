/// Example: replaying an editing session without a window
///
/// This example demonstrates:
/// - Starting from the editor's initial graph
/// - Adding and connecting vertices through the controller
/// - Renaming and deleting vertices
/// - Reading back the mutation log

use anyhow::{Context, Result};
use graph_sketch::*;

fn print_graph(graph: &Graph) {
    for vertex in graph.vertices() {
        println!(
            "  vertex {:>3} at ({:.0}, {:.0}), degree {}",
            vertex.id,
            vertex.position.x,
            vertex.position.y,
            graph.degree(vertex.id)
        );
    }
    let edges: Vec<String> = graph
        .edges()
        .iter()
        .map(|e| {
            let (u, v) = e.endpoints();
            format!("({}, {})", u, v)
        })
        .collect();
    println!("  edges: {{{}}}", edges.join(", "));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config = EditorConfig::from_env().context("loading editor config")?;
    let (x, y) = config.center();
    let mut graph = Graph::with_initial_vertex(Point::new(x, y));
    let mut controller = Controller::new(config.hit_radius());

    println!("=== Graph Sketch: Scripted Session ===\n");

    println!("Step 1: add vertex 2 and connect it to vertex 1");
    let script = [
        InputEvent::left_click(Point::new(100.0, 100.0)),
        InputEvent::left_click(Point::new(x, y)),
        InputEvent::left_click(Point::new(100.0, 100.0)),
    ];
    for event in script {
        controller.handle(&mut graph, event);
    }
    print_graph(&graph);

    println!("\nStep 2: rename vertex 2 to 5");
    for event in [InputEvent::char('r'), InputEvent::char('5'), InputEvent::key(KeyCode::Enter)] {
        controller.handle(&mut graph, event);
    }
    print_graph(&graph);

    println!("\nStep 3: a rename to \"abc\" is ignored");
    controller.handle(&mut graph, InputEvent::char('r'));
    for c in "abc".chars() {
        controller.handle(&mut graph, InputEvent::char(c));
    }
    controller.handle(&mut graph, InputEvent::key(KeyCode::Enter));
    print_graph(&graph);

    println!("\nStep 4: select vertex 1 and delete it");
    controller.handle(&mut graph, InputEvent::left_click(Point::new(x, y)));
    controller.handle(&mut graph, InputEvent::key(KeyCode::Delete));
    print_graph(&graph);

    println!("\nMutation log:");
    for event in graph.events() {
        println!("  {} {}", event.timestamp.format("%H:%M:%S%.3f"), event.event.describe());
    }

    let result = graph.validate();
    println!("\nGraph valid: {}", result.is_valid());

    Ok(())
}
