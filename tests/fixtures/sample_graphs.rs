// Helper functions to build graphs and drive the controller in tests

#![allow(dead_code)]

use graph_sketch::{Controller, Edge, Graph, InputEvent, KeyCode, Point, VertexId};

pub const HIT_RADIUS: f32 = 20.0;

pub fn id(n: u32) -> VertexId {
    VertexId::new(n).unwrap()
}

pub fn edge(u: u32, v: u32) -> Edge {
    Edge::new(id(u), id(v)).unwrap()
}

/// The editor's starting state: vertex 1 at (400, 300)
pub fn startup() -> (Graph, Controller) {
    (
        Graph::with_initial_vertex(Point::new(400.0, 300.0)),
        Controller::new(HIT_RADIUS),
    )
}

/// A path 1 - 2 - 3 - 4 laid out on a row, 100 px apart
pub fn path_graph() -> Graph {
    let mut graph = Graph::new();
    for i in 0..4 {
        graph.add_vertex(Point::new(100.0 + 100.0 * i as f32, 100.0)).unwrap();
    }
    graph.add_edge(id(1), id(2));
    graph.add_edge(id(2), id(3));
    graph.add_edge(id(3), id(4));
    graph
}

/// A star with center 1 and leaves 2..=5
pub fn star_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex(Point::new(300.0, 300.0)).unwrap();
    for (x, y) in [(300.0, 100.0), (500.0, 300.0), (300.0, 500.0), (100.0, 300.0)] {
        let leaf = graph.add_vertex(Point::new(x, y)).unwrap();
        graph.add_edge(id(1), leaf);
    }
    graph
}

/// Scripted input driver
pub struct Session {
    pub graph: Graph,
    pub controller: Controller,
}

impl Session {
    pub fn start() -> Self {
        let (graph, controller) = startup();
        Self { graph, controller }
    }

    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph,
            controller: Controller::new(HIT_RADIUS),
        }
    }

    pub fn send(&mut self, event: InputEvent) -> &mut Self {
        self.controller.handle(&mut self.graph, event);
        self
    }

    pub fn click(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(InputEvent::left_click(Point::new(x, y)))
    }

    pub fn press(&mut self, key: KeyCode) -> &mut Self {
        self.send(InputEvent::key(key))
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.send(InputEvent::char(c));
        }
        self
    }

    /// 'R', the text, then Enter
    pub fn rename_to(&mut self, text: &str) -> &mut Self {
        self.send(InputEvent::char('r'));
        self.type_text(text);
        self.press(KeyCode::Enter)
    }
}
