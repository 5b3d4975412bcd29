use conllx::graph::{Node, Sentence};
use conllx::token::Token;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction, Graph};
use tracing::warn;

pub struct DependencyNode<'a> {
    pub token: &'a Token,
    pub offset: usize,
}

/// Dependency tree of a sentence. Edges point from heads to dependents
/// and carry the relation label.
pub type DependencyGraph<'a> = Graph<DependencyNode<'a>, Option<String>, Directed>;

pub fn sentence_to_graph(sentence: &Sentence, projective: bool) -> DependencyGraph<'_> {
    let mut g = Graph::new();

    // Node 0 of a sentence is the artificial root.
    let nodes: Vec<_> = sentence
        .iter()
        .filter_map(|node| match node {
            Node::Token(token) => Some(token),
            Node::Root => None,
        })
        .enumerate()
        .map(|(offset, token)| g.add_node(DependencyNode { token, offset }))
        .collect();

    let deps = if projective {
        sentence.proj_dep_graph()
    } else {
        sentence.dep_graph()
    };

    for (idx, &node) in nodes.iter().enumerate() {
        let triple = match deps.head(idx + 1) {
            Some(triple) => triple,
            None => continue,
        };

        let rel = triple.relation().map(|rel| rel.to_string());

        match triple.head() {
            0 => (),
            head if head <= nodes.len() => {
                g.add_edge(nodes[head - 1], node, rel);
            }
            head => warn!(
                "token {} is attached to head {}, sentence has {} tokens",
                idx + 1,
                head,
                nodes.len()
            ),
        }
    }

    g
}

/// Labeled edges of the graph in parser traversal order.
///
/// Starting from every unattached token, the edges to the dependents of a
/// token are visited in sentence order, each followed by the edges of the
/// dependent's own subtree.
pub fn traversal_edges<'g>(
    graph: &'g DependencyGraph<'_>,
) -> Vec<(&'g Token, &'g str, &'g Token)> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    let mut visited = vec![false; graph.node_count()];

    for node in graph.node_indices() {
        let attached = graph
            .edges_directed(node, Direction::Incoming)
            .next()
            .is_some();
        if !attached {
            visit(graph, node, &mut visited, &mut edges);
        }
    }

    edges
}

fn visit<'g>(
    graph: &'g DependencyGraph<'_>,
    root: NodeIndex,
    visited: &mut [bool],
    edges: &mut Vec<(&'g Token, &'g str, &'g Token)>,
) {
    visited[root.index()] = true;

    // Pending attachments, the next one to visit on top.
    let mut stack = dependents(graph, root);
    while let Some((head, dependent, rel)) = stack.pop() {
        if visited[dependent.index()] {
            continue;
        }
        visited[dependent.index()] = true;

        if let Some(rel) = rel {
            edges.push((graph[head].token, rel, graph[dependent].token));
        }

        stack.extend(dependents(graph, dependent));
    }
}

/// Attachments of the dependents of `head`, last dependent first.
fn dependents<'g>(
    graph: &'g DependencyGraph<'_>,
    head: NodeIndex,
) -> Vec<(NodeIndex, NodeIndex, Option<&'g str>)> {
    let mut dependents: Vec<_> = graph
        .edges_directed(head, Direction::Outgoing)
        .map(|edge| (head, edge.target(), edge.weight().as_deref()))
        .collect();
    dependents.sort_by_key(|&(_, dependent, _)| std::cmp::Reverse(graph[dependent].offset));
    dependents
}
