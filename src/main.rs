use dotenv::dotenv;
use sqltutor::{TutorGateway, TutorSettings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let question = args
        .next()
        .unwrap_or_else(|| "How do I count rows per category?".to_string());
    let context = args.next();

    let gateway = TutorGateway::new(TutorSettings::default())?;
    let reply = gateway.send_message(&[], &question, context.as_deref()).await;

    println!("{reply}");

    Ok(())
}
