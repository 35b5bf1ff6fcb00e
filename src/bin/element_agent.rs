//! element-agent — 用本地 Ollama 模型回答化学元素问题的命令行工具
//!
//! Usage:
//!   element-agent <question...>      Ask one question and print the answer
//!   element-agent --help             Show help
//!   element-agent --version          Show version

use std::sync::Arc;

use anyhow::Context;
use element_agent::{AdapterConfig, Agent, OllamaLlm};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("help" | "--help" | "-h") => {
            print_usage();
            if args.is_empty() {
                std::process::exit(1);
            }
            return;
        }
        Some("version" | "--version" | "-V") => {
            println!("element-agent {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(_) => {}
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let question = args.join(" ");
    match ask(&question).await {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn ask(question: &str) -> anyhow::Result<String> {
    let config = AdapterConfig::from_env();
    let llm = OllamaLlm::new(config.clone())
        .with_context(|| format!("cannot create Ollama adapter for {}", config.base_url))?;
    let agent = Agent::periodic_table(Arc::new(llm));
    agent
        .run(question)
        .await
        .with_context(|| format!("model '{}' failed to answer", config.model))
}

fn print_usage() {
    println!(
        r#"element-agent — 化学元素问答智能体

USAGE:
    element-agent <QUESTION...>

EXAMPLES:
    element-agent "What is the atomic weight of Au?"
    element-agent 铁的原子序数是多少？

ENVIRONMENT:
    OLLAMA_MODEL           Model name (default: qwen2.5)
    OLLAMA_API_BASE        Ollama server URL (default: http://localhost:11434)
    OLLAMA_TIMEOUT_SECS    Optional request timeout in seconds
    RUST_LOG               Log filter (default: info)"#
    );
}
