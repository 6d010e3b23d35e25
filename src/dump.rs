use crate::parser::ast::{Node, NodeId, ParseSession};

/// Render one parsed unit as an indented text tree, one node per line.
/// Diagnostic output only; nothing parses this back.
pub fn dump(session: &ParseSession, unit: NodeId) -> String {
    let mut printer = TreePrinter { buf: String::new(), indent: 0 };
    printer.emit(session, unit);
    printer.buf
}

struct TreePrinter {
    buf: String,
    indent: usize,
}

impl TreePrinter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn children<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    fn emit(&mut self, session: &ParseSession, id: NodeId) {
        match &session[id] {
            Node::Number(value) => self.line(&format!("Number {value}")),
            Node::Variable(name) => self.line(&format!("Variable {name}")),
            Node::Binary { op, lhs, rhs } => {
                self.line(&format!("Binary '{op}'"));
                self.children(|p| {
                    p.emit(session, *lhs);
                    p.emit(session, *rhs);
                });
            }
            Node::Call { callee, args } => {
                self.line(&format!("Call {callee}"));
                self.children(|p| {
                    for arg in args {
                        p.emit(session, *arg);
                    }
                });
            }
            Node::If { cond, then_branch, else_branch } => {
                self.line("If");
                self.children(|p| {
                    p.line("Cond");
                    p.children(|p| p.emit(session, *cond));
                    p.line("Then");
                    p.children(|p| p.emit(session, *then_branch));
                    if let Some(else_branch) = else_branch {
                        p.line("Else");
                        p.children(|p| p.emit(session, *else_branch));
                    }
                });
            }
            Node::Block { stmts } => {
                self.line("Block");
                self.children(|p| {
                    for stmt in stmts {
                        p.emit(session, *stmt);
                    }
                });
            }
            Node::Prototype { name, params } => {
                self.line(&format!("Prototype {name}({})", params.join(", ")));
            }
            Node::Function { prototype, body } => {
                self.line("Function");
                self.children(|p| {
                    p.emit(session, *prototype);
                    p.emit(session, *body);
                });
            }
        }
    }
}
