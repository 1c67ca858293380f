#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepaintFailure {
    pub generation: u64,
    pub message: String,
}
