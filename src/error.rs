#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't parse job id: {0}")]
    InvalidJobId(#[from] std::num::ParseIntError),
}
