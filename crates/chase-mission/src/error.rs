use chase_belief::BeliefError;
use chase_graph::GraphError;
use chase_nav::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("mission configuration error: {0}")]
    Config(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("belief error: {0}")]
    Belief(#[from] BeliefError),

    #[error("navigation error: {0}")]
    Nav(#[from] NavError),

    #[error("trace output error: {0}")]
    Trace(#[from] csv::Error),
}

pub type MissionResult<T> = Result<T, MissionError>;
