use id_arena::Arena;

pub type NodeId = id_arena::Id<Node>;

/// One node of the syntax tree. The set is closed: passes over the tree
/// (dumping, code generation, later semantic checks) pattern-match all
/// eight shapes exhaustively.
///
/// Children are `NodeId`s into the owning [`ParseSession`]; each child has
/// exactly one parent, so the ids form a strict tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable(String),
    Binary {
        op: char,
        lhs: NodeId,
        rhs: NodeId,
    },
    Call {
        callee: String,
        args: Vec<NodeId>,
    },
    If {
        cond: NodeId,
        then_branch: NodeId,
        /// Present iff an `else` keyword followed the then-branch.
        else_branch: Option<NodeId>,
    },
    Block {
        stmts: Vec<NodeId>,
    },
    Prototype {
        name: String,
        params: Vec<String>,
    },
    Function {
        prototype: NodeId,
        body: NodeId,
    },
}

/// Owns every node built during one parsing session.
///
/// Allocation is append-only; nodes are never freed individually. All ids a
/// session hands out stay valid until [`ParseSession::reset`], which drops
/// the whole tree at once. Ids from before a reset (or from a different
/// session) panic when resolved rather than aliasing a fresh node.
#[derive(Debug, Default)]
pub struct ParseSession {
    nodes: Arena<Node>,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.alloc(node)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Drop every node and start an independent session in place. Only for
    /// use between sessions, never mid-parse.
    pub fn reset(&mut self) {
        self.nodes = Arena::new();
    }
}

impl std::ops::Index<NodeId> for ParseSession {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}
