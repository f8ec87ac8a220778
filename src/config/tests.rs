use super::*;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output_path, PathBuf::from("./output"));
    assert!(config.logs_path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(!config.verbose);
}

#[test]
fn test_llm_config_default() {
    let config = LLMConfig::default();

    assert_eq!(config.provider, LLMProvider::OpenAI);
    // api_key may be empty if env var is not set
    assert_eq!(config.model, "gpt-4-turbo-preview");
    assert_eq!(config.max_tokens, 4000);
    assert_eq!(config.temperature, 0.7);
    assert_eq!(config.retry_attempts, 1);
    assert_eq!(config.max_iterations, 5);
    assert_eq!(config.max_execution_secs, 300);
    assert!(config.return_partial_on_max_depth);
}

#[test]
fn test_search_config_default() {
    let config = SearchConfig::default();

    assert_eq!(config.endpoint, "https://google.serper.dev/search");
    assert_eq!(config.results_limit, 10);
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_llm_provider_from_str() {
    assert_eq!(
        "openai".parse::<LLMProvider>().unwrap(),
        LLMProvider::OpenAI
    );
    assert_eq!(
        "Anthropic".parse::<LLMProvider>().unwrap(),
        LLMProvider::Anthropic
    );
    assert_eq!(
        "deepseek".parse::<LLMProvider>().unwrap(),
        LLMProvider::DeepSeek
    );
    assert_eq!(
        "openrouter".parse::<LLMProvider>().unwrap(),
        LLMProvider::OpenRouter
    );

    assert!("invalid".parse::<LLMProvider>().is_err());
}

#[test]
fn test_llm_provider_display() {
    assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
    assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
    assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
    assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
}

#[test]
fn test_from_file_with_partial_tables() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"output_path = "reports"

[llm]
provider = "anthropic"
api_key = "sk-test"
model = "claude-sonnet"
max_iterations = 8

[search]
results_limit = 3
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.output_path, PathBuf::from("reports"));
    assert_eq!(config.llm.provider, LLMProvider::Anthropic);
    assert_eq!(config.llm.api_key, "sk-test");
    assert_eq!(config.llm.model, "claude-sonnet");
    assert_eq!(config.llm.max_iterations, 8);
    assert_eq!(config.llm.temperature, 0.7);
    assert_eq!(config.search.results_limit, 3);
    assert_eq!(config.search.timeout_secs, 30);
}

#[test]
fn test_from_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");
    let err = Config::from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to open config file"));

    let broken = temp_dir.path().join("broken.toml");
    std::fs::write(&broken, "output_path = [").unwrap();
    let err = Config::from_file(&broken).unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse config file");
}

#[test]
fn test_load_lookup_order() {
    let temp_dir = TempDir::new().unwrap();

    // 没有任何配置文件时使用默认值
    let config = Config::load(None, temp_dir.path()).unwrap();
    assert_eq!(config.output_path, PathBuf::from("./output"));

    std::fs::write(
        temp_dir.path().join(DEFAULT_CONFIG_FILE),
        "output_path = \"from-working-dir\"\n",
    )
    .unwrap();
    let config = Config::load(None, temp_dir.path()).unwrap();
    assert_eq!(config.output_path, PathBuf::from("from-working-dir"));

    let explicit = temp_dir.path().join("explicit.toml");
    std::fs::write(&explicit, "output_path = \"from-explicit\"\n").unwrap();
    let config = Config::load(Some(&explicit), temp_dir.path()).unwrap();
    assert_eq!(config.output_path, PathBuf::from("from-explicit"));
}

#[test]
fn test_validate() {
    let mut config = Config::default();
    config.llm.api_key = "   ".to_string();
    assert!(config.validate().is_err());

    config.llm.api_key = "sk-test".to_string();
    config.search.api_key = String::new();
    assert!(config.validate().is_ok());

    config.llm.max_iterations = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_create_directories() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.output_path = temp_dir.path().join("out/nested");
    config.logs_path = Some(temp_dir.path().join("logs"));

    config.create_directories().unwrap();
    assert!(config.output_path.is_dir());
    assert!(temp_dir.path().join("logs").is_dir());
}
