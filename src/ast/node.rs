use std::fmt;

/// Handle to a node stored in a [`QueryTree`].
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One field in the query tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Field name (absent only for the root)
    name: Option<String>,

    /// Rendered as `alias:` before the name
    alias: Option<String>,

    /// Filter arguments in first-insertion order, keys unique
    filters: Vec<(String, String)>,

    /// Children in first-referenced order
    children: Vec<NodeId>,

    parent: Option<NodeId>,
}

impl Node {
    fn root() -> Self {
        Node {
            name: None,
            alias: None,
            filters: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    fn field(name: &str, parent: NodeId) -> Self {
        Node {
            name: Some(name.to_string()),
            parent: Some(parent),
            ..Node::root()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// True only for the synthetic root, which has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Ordered, append-only tree of query fields.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Lookups that may
/// create nodes go through [`QueryTree::resolve_path`]; nothing is ever removed.
///
/// # Example
///
/// ```
/// use igqloo::QueryTree;
///
/// let mut tree = QueryTree::new();
/// let root = tree.root();
/// let posts = tree.resolve_path(root, "user.posts");
/// tree.set_filter(posts, "first", "5");
///
/// assert_eq!(tree.to_string(), r#"query{user{posts(first:"5")}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTree {
    nodes: Vec<Node>,
}

impl Default for QueryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTree {
    pub fn new() -> Self {
        QueryTree {
            nodes: vec![Node::root()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Panics if `id` came from a different tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Direct child of `id` whose name is `name`.
    ///
    /// Aliases do not take part in lookup.
    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|&c| self.node(c).name() == Some(name))
    }

    /// Follows a dotted path from `from` without creating anything.
    pub fn lookup(&self, from: NodeId, path: &str) -> Option<NodeId> {
        path.split('.')
            .try_fold(from, |node, segment| self.child(node, segment))
    }

    /// Follows a dotted path from `from`, creating every missing segment.
    ///
    /// New nodes have no alias, no filters and no children, and are appended
    /// after their existing siblings.
    pub fn resolve_path(&mut self, from: NodeId, path: &str) -> NodeId {
        let mut node = from;
        for segment in path.split('.') {
            node = match self.child(node, segment) {
                Some(existing) => existing,
                None => self.push_child(node, segment),
            };
        }
        node
    }

    fn push_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::field(name, parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Inserts or overwrites a filter. An overwritten key keeps its slot.
    pub fn set_filter(&mut self, id: NodeId, key: &str, value: &str) {
        let filters = &mut self.nodes[id.0].filters;
        match filters.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => filters.push((key.to_string(), value.to_string())),
        }
    }

    pub fn set_alias(&mut self, id: NodeId, alias: &str) {
        self.nodes[id.0].alias = Some(alias.to_string());
    }
}

impl fmt::Display for QueryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::output::to_query(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_reuses_existing_nodes() {
        let mut tree = QueryTree::new();
        let root = tree.root();
        let first = tree.resolve_path(root, "a.b");
        let second = tree.resolve_path(root, "a.b");

        assert_eq!(first, second);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_set_filter_overwrites_in_place() {
        let mut tree = QueryTree::new();
        let root = tree.root();
        let posts = tree.resolve_path(root, "posts");
        tree.set_filter(posts, "first", "5");
        tree.set_filter(posts, "after", "x");
        tree.set_filter(posts, "first", "10");

        let filters: Vec<_> = tree.node(posts).filters().collect();
        assert_eq!(filters, vec![("first", "10"), ("after", "x")]);
    }

    #[test]
    fn test_root_has_no_name_or_alias() {
        let tree = QueryTree::new();
        let root = tree.node(tree.root());

        assert!(root.is_root());
        assert_eq!(root.name(), None);
        assert_eq!(root.alias(), None);
        assert!(tree.is_empty());
    }
}
