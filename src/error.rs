use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	#[error("Graph has no vertices")]
	NoVertices,
	#[error("Graph has no edges")]
	NoEdges,
	#[error("Malformed edge list at line {0}")]
	MalformedLine(usize),
	#[error("Vertex {0} is out of range")]
	VertexOutOfRange(usize),
	#[error("The number of vertices must be smaller than 2^15")]
	TooManyVertices,
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
