use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use solace::catalog::InMemoryCatalog;
use solace::clock::{Clock, SystemClock};
use solace::composer::ResponseComposer;
use solace::config::Config;
use solace::memory::MemoryStore;
use solace::repl;
use solace::retrieval::MemoryRetriever;
use solace::session::ConversationSession;
use solace::types::UserProfile;

/// A grief-support companion you can talk to in the terminal
#[derive(Parser)]
#[command(name = "solace", version, about)]
struct Args {
    /// Your name, as the companion should use it
    #[arg(long)]
    name: Option<String>,

    /// The companion's name
    #[arg(long)]
    companion: Option<String>,

    /// Fixed RNG seed for reproducible replies
    #[arg(long)]
    seed: Option<u64>,

    /// Alternate config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let profile = UserProfile {
        user_name: args.name.unwrap_or(config.profile.user_name.clone()),
        companion_name: args
            .companion
            .unwrap_or(config.profile.companion_name.clone()),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = MemoryStore::with_window(Arc::clone(&clock), config.engine.history_window_days);
    let retriever = MemoryRetriever::new(Arc::new(InMemoryCatalog::default()));

    let mut composer = match args.seed {
        Some(seed) => ResponseComposer::with_seed(store, retriever, Arc::clone(&clock), seed),
        None => ResponseComposer::new(store, retriever, Arc::clone(&clock)),
    };
    composer.set_tuning(config.engine.tuning());

    let mut session = ConversationSession::new(composer, profile, clock);
    repl::run(&mut session)
}
