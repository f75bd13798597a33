//! A whole infrastructure program: the document-ordered declaration tree.

use crate::syntax::declaration::Declaration;

/// The top-level program handed to analysis by the external parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Iterate declarations in document order: each declaration before its
    /// nested children, siblings in source order.
    pub fn iter_document_order(&self) -> impl Iterator<Item = &Declaration> {
        DocumentOrderIter {
            stack: self.declarations.iter().rev().collect(),
        }
    }
}

struct DocumentOrderIter<'a> {
    stack: Vec<&'a Declaration>,
}

impl<'a> Iterator for DocumentOrderIter<'a> {
    type Item = &'a Declaration;

    fn next(&mut self) -> Option<Self::Item> {
        let decl = self.stack.pop()?;
        for child in decl.children.iter().rev() {
            self.stack.push(child);
        }
        Some(decl)
    }
}
