//! Descendant search over a syntax subtree.

use crate::ast::{Node, NodeTag};

/// Collect every node tagged `tag` in `subtree`, the root included.
///
/// Pre-order, document order. The search keeps descending below a match, so
/// a matching node nested inside another matching node is returned too.
pub fn scan(subtree: &Node, tag: NodeTag) -> Vec<&Node> {
    let mut found = Vec::new();
    let mut stack = vec![subtree];
    while let Some(node) = stack.pop() {
        if node.tag() == tag {
            found.push(node);
        }
        // reversed so the leftmost child is visited first
        stack.extend(node.children.iter().rev());
    }
    found
}

/// First node tagged `tag` in pre-order, if any.
pub fn first(subtree: &Node, tag: NodeTag) -> Option<&Node> {
    if subtree.tag() == tag {
        return Some(subtree);
    }
    subtree.children.iter().find_map(|c| first(c, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    fn task(name: &str, line: u32, children: Vec<Node>) -> Node {
        Node::new(
            NodeKind::Task {
                name: name.to_string(),
            },
            line,
            children,
        )
    }

    fn names(nodes: &[&Node]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| n.kind.ident().map(str::to_string))
            .collect()
    }

    #[test]
    fn scan_returns_matches_in_document_order() {
        let tree = Node::new(
            NodeKind::Activity {
                name: "dev".to_string(),
            },
            1,
            vec![
                task("a", 2, vec![]),
                Node::new(NodeKind::People, 3, vec![task("b", 4, vec![])]),
                task("c", 5, vec![]),
            ],
        );
        assert_eq!(names(&scan(&tree, NodeTag::Task)), vec!["a", "b", "c"]);
    }

    #[test]
    fn scan_does_not_prune_below_a_match() {
        let tree = task("outer", 1, vec![task("inner", 2, vec![])]);
        assert_eq!(names(&scan(&tree, NodeTag::Task)), vec!["outer", "inner"]);
    }

    #[test]
    fn scan_without_matches_is_empty() {
        let tree = Node::new(NodeKind::Rules, 1, vec![Node::leaf(NodeKind::People, 2)]);
        assert!(scan(&tree, NodeTag::ParticipantId).is_empty());
        assert!(first(&tree, NodeTag::ParticipantId).is_none());
    }

    #[test]
    fn first_finds_the_leftmost_deepest_match() {
        let tree = Node::new(
            NodeKind::RuleContent,
            1,
            vec![
                Node::new(NodeKind::People, 2, vec![task("x", 3, vec![])]),
                task("y", 4, vec![]),
            ],
        );
        let hit = first(&tree, NodeTag::Task).unwrap();
        assert_eq!(hit.line, 3);
    }
}
