use derive_more::Display;

/// Failures of the roulette core. Re-entrant spin requests are not errors,
/// see `StartOutcome::AlreadyRunning`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RouletteError {
    #[display(fmt = "no pending candidates to pick from")]
    EmptyPool,
    #[display(fmt = "invalid roulette config: {}", _0)]
    InvalidConfig(String),
}

impl std::error::Error for RouletteError {}

/// Failures while decoding or validating list items.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ItemError {
    #[display(fmt = "unknown item status '{}'", _0)]
    UnknownStatus(String),
    #[display(fmt = "unknown class tier '{}'", _0)]
    UnknownClassTier(String),
    #[display(fmt = "unknown list kind '{}'", _0)]
    UnknownListKind(String),
    #[display(fmt = "item '{}' has no name", _0)]
    MissingName(String),
    #[display(fmt = "API rejected request: {}", _0)]
    Rejected(String),
    #[display(fmt = "malformed payload: {}", _0)]
    Malformed(String),
}

impl std::error::Error for ItemError {}

impl From<serde_json::Error> for ItemError {
    fn from(err: serde_json::Error) -> Self {
        ItemError::Malformed(err.to_string())
    }
}

/// Umbrella error for the wasm-facing API.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Roulette Error: {}", _0)]
    Roulette(RouletteError),
    #[display(fmt = "Item Error: {}", _0)]
    Items(ItemError),
    #[display(fmt = "Browser Error: {}", _0)]
    Browser(String),
}

impl std::error::Error for AppError {}

impl From<RouletteError> for AppError {
    fn from(err: RouletteError) -> Self {
        AppError::Roulette(err)
    }
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        AppError::Items(err)
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type RouletteResult<T> = Result<T, RouletteError>;
pub type ItemResult<T> = Result<T, ItemError>;
pub type AppResult<T> = Result<T, AppError>;
