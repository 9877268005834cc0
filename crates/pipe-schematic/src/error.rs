//! Error types for schematic rendering.

pub type SchematicResult<T> = Result<T, SchematicError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchematicError {
    #[error("Nothing to render: no pipe segments in the graph")]
    EmptyGraph,
}
