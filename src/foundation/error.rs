pub type LaneResult<T> = Result<T, LaneError>;

#[derive(thiserror::Error, Debug)]
pub enum LaneError {
    #[error("account not found: {game_name}#{tag_line}")]
    AccountNotFound { game_name: String, tag_line: String },

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("asset load error: {0}")]
    AssetLoad(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaneError {
    pub fn account_not_found(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        Self::AccountNotFound {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
