//! TypeScript rendering of type trees.
//!
//! Entity names pass through a [`NameMap`]; every replacement that carries an
//! import origin is collected so callers can emit the matching import lines.

mod names;

pub use names::{NameMap, NameMapping, Replacement};

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::ast::{FunctionParam, FunctionType, ObjectMember, TypeNode};

/// Output of a render call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Imported names grouped by origin, in first-use order
    pub imports: IndexMap<String, IndexSet<String>>,
}

impl Rendered {
    /// `import type { A, B } from "origin";` per origin
    pub fn import_lines(&self) -> Vec<String> {
        self.imports
            .iter()
            .map(|(origin, names)| {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                format!("import type {{ {} }} from \"{}\";", names.join(", "), origin)
            })
            .collect()
    }
}

/// Writes TypeScript type syntax for a [`TypeNode`]
pub struct Renderer<'a> {
    names: &'a NameMap,
    out: String,
    imports: IndexMap<String, IndexSet<String>>,
}

impl<'a> Renderer<'a> {
    pub fn new(names: &'a NameMap) -> Self {
        Self {
            names,
            out: String::new(),
            imports: IndexMap::new(),
        }
    }

    pub fn render(mut self, node: &TypeNode) -> Rendered {
        self.write_type(node);
        self.finish()
    }

    /// `export type Alias = <type>;`
    pub fn render_alias(mut self, alias: &str, node: &TypeNode) -> Rendered {
        self.out.push_str("export type ");
        self.out.push_str(alias);
        self.out.push_str(" = ");
        self.write_type(node);
        self.out.push(';');
        self.finish()
    }

    fn finish(self) -> Rendered {
        Rendered {
            text: self.out,
            imports: self.imports,
        }
    }

    fn write_type(&mut self, node: &TypeNode) {
        match node {
            TypeNode::Any => self.out.push_str("any"),
            TypeNode::Entity(name) => self.write_entity(name),
            TypeNode::Nullable(inner) => {
                self.write_member(inner);
                self.out.push_str(" | null");
            }
            TypeNode::Union(types) => match types.as_slice() {
                [] => self.out.push_str("never"),
                [single] => self.write_type(single),
                many => {
                    for (i, ty) in many.iter().enumerate() {
                        if i > 0 {
                            self.out.push_str(" | ");
                        }
                        self.write_member(ty);
                    }
                }
            },
            TypeNode::Function(func) => self.write_function(func),
            TypeNode::Array(element) => {
                if needs_parens(element) {
                    self.out.push('(');
                    self.write_type(element);
                    self.out.push(')');
                } else {
                    self.write_type(element);
                }
                self.out.push_str("[]");
            }
            TypeNode::Object(members) => self.write_object(members),
            TypeNode::StringLiteral(value) => {
                let quoted = serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value));
                self.out.push_str(&quoted);
            }
            TypeNode::NumberLiteral(value) => self.out.push_str(value),
        }
    }

    /// A union or nullable member; only signatures need wrapping there
    fn write_member(&mut self, node: &TypeNode) {
        if matches!(node, TypeNode::Function(_)) {
            self.out.push('(');
            self.write_type(node);
            self.out.push(')');
        } else {
            self.write_type(node);
        }
    }

    fn write_entity(&mut self, raw: &str) {
        let Some(replacement) = self.names.resolve(raw) else {
            self.out.push_str(raw);
            return;
        };

        if let Some(origin) = replacement.from {
            let inserted = self
                .imports
                .entry(origin.to_string())
                .or_default()
                .insert(replacement.name.to_string());
            if inserted {
                debug!("importing {} from {} for {}", replacement.name, origin, raw);
            }
        }
        self.out.push_str(replacement.name);
    }

    fn write_function(&mut self, func: &FunctionType) {
        self.out.push('(');
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_param(i, param);
        }
        self.out.push_str(") => ");
        match &func.return_type {
            Some(ret) => self.write_type(ret),
            None => self.out.push_str("void"),
        }
    }

    fn write_param(&mut self, index: usize, param: &FunctionParam) {
        if param.rest {
            self.out.push_str("...");
        }
        match &param.name {
            Some(name) => self.out.push_str(name),
            None => self.out.push_str(&format!("arg{}", index)),
        }
        self.out.push_str(": ");
        if param.rest {
            // The annotation names the element type of a variadic parameter
            self.write_type(&TypeNode::array(param.ty.clone()));
        } else {
            self.write_type(&param.ty);
        }
    }

    fn write_object(&mut self, members: &[ObjectMember]) {
        if members.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{ ");
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                self.out.push_str("; ");
            }
            self.out.push_str(&member.name);
            self.out.push_str(": ");
            self.write_type(&member.ty);
        }
        self.out.push_str(" }");
    }
}

fn needs_parens(node: &TypeNode) -> bool {
    match node {
        TypeNode::Nullable(_) | TypeNode::Function(_) => true,
        TypeNode::Union(types) => types.len() > 1,
        _ => false,
    }
}

/// Render `node` with the given name map
pub fn render_type(names: &NameMap, node: &TypeNode) -> Rendered {
    Renderer::new(names).render(node)
}
