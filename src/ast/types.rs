//! Type tree nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed type annotation.
///
/// Every composite variant owns its children; the tree is built bottom-up by
/// the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeNode {
    /// `*` or `any`
    Any,
    /// A possibly dotted name such as `dom.Node`
    Entity(String),
    /// `?T`
    Nullable(Box<TypeNode>),
    /// `union<A, B>`
    Union(Vec<TypeNode>),
    /// `(params) → R`
    Function(FunctionType),
    /// `[T]`
    Array(Box<TypeNode>),
    /// `{name: T}`
    Object(Vec<ObjectMember>),
    StringLiteral(String),
    /// Raw numeric text, kept exactly as written
    NumberLiteral(String),
}

/// Call signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub params: Vec<FunctionParam>,
    /// `None` when no arrow followed the parameter list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<TypeNode>>,
}

/// A single parameter of a call signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParam {
    pub ty: TypeNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub rest: bool,
}

/// A named member of an object shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMember {
    pub name: String,
    pub ty: TypeNode,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TypeNode {
    pub fn entity(name: impl Into<String>) -> Self {
        TypeNode::Entity(name.into())
    }

    pub fn nullable(inner: TypeNode) -> Self {
        TypeNode::Nullable(Box::new(inner))
    }

    pub fn array(element: TypeNode) -> Self {
        TypeNode::Array(Box::new(element))
    }

    pub fn string(value: impl Into<String>) -> Self {
        TypeNode::StringLiteral(value.into())
    }

    pub fn number(value: impl Into<String>) -> Self {
        TypeNode::NumberLiteral(value.into())
    }

    pub fn function(params: Vec<FunctionParam>, return_type: Option<TypeNode>) -> Self {
        TypeNode::Function(FunctionType::new(params, return_type))
    }

    /// Kind name used in diagnostics and dumps
    pub fn kind(&self) -> &'static str {
        match self {
            TypeNode::Any => "any",
            TypeNode::Entity(_) => "entity",
            TypeNode::Nullable(_) => "nullable",
            TypeNode::Union(_) => "union",
            TypeNode::Function(_) => "function",
            TypeNode::Array(_) => "array",
            TypeNode::Object(_) => "object",
            TypeNode::StringLiteral(_) => "string literal",
            TypeNode::NumberLiteral(_) => "number literal",
        }
    }
}

impl FunctionType {
    pub fn new(params: Vec<FunctionParam>, return_type: Option<TypeNode>) -> Self {
        Self {
            params,
            return_type: return_type.map(Box::new),
        }
    }
}

impl FunctionParam {
    pub fn unnamed(ty: TypeNode) -> Self {
        Self {
            ty,
            name: None,
            rest: false,
        }
    }

    pub fn named(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            ty,
            name: Some(name.into()),
            rest: false,
        }
    }

    /// Variadic parameter; always named
    pub fn rest(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            ty,
            name: Some(name.into()),
            rest: true,
        }
    }
}

impl ObjectMember {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Writes the tree back in annotation notation.
impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Any => write!(f, "*"),
            TypeNode::Entity(name) => write!(f, "{}", name),
            TypeNode::Nullable(inner) => write!(f, "?{}", inner),
            TypeNode::Union(types) => {
                write!(f, "union<")?;
                write_separated(f, types)?;
                write!(f, ">")
            }
            TypeNode::Function(func) => write!(f, "{}", func),
            TypeNode::Array(element) => write!(f, "[{}]", element),
            TypeNode::Object(members) => {
                write!(f, "{{")?;
                write_separated(f, members)?;
                write!(f, "}}")
            }
            TypeNode::StringLiteral(value) => {
                write!(f, "\"")?;
                for ch in value.chars() {
                    match ch {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\r' => write!(f, "\\r")?,
                        '\t' => write!(f, "\\t")?,
                        '\0' => write!(f, "\\0")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            TypeNode::NumberLiteral(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_separated(f, &self.params)?;
        write!(f, ")")?;
        if let Some(ret) = &self.return_type {
            write!(f, " → {}", ret)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rest {
            write!(f, "...")?;
        }
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }
        write!(f, "{}", self.ty)
    }
}

impl fmt::Display for ObjectMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
