use clap::Parser;

mod cli;
mod config;
mod error;
mod llm;
mod workflow;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // 凭证作为显式参数传入核心逻辑，而不是在内部读取环境变量
    let api_key = std::env::var("GOOGLE_API_KEY").ok();
    let config = args.into_config(api_key);

    match workflow::launch(&config).await {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
