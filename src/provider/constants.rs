pub mod github_models {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;
    pub const API_BASE: &str = "https://models.inference.ai.azure.com";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_VAR: &str = "GITHUB_TOKEN";
}
