use clap::{Parser, Subcommand};
use fairgate::{
    catalog::{launchpad::{progress_percentage, time_remaining}, Catalog, LaunchFilter, Timeframe},
    client::{FairScaleClient, ProxyScoreClient, ScoreSource},
    config::Settings,
    models::{LaunchStatus, ReputationRecord, Tier},
    scoring::{allocation, classify, evaluate_gate, TIER_TABLE},
    server::{self, ProxyState},
    session::ScoreSession,
    utils::{describe_feature, format_currency, format_number, shorten_address},
};
use chrono::Utc;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "fairgate")]
#[clap(about = "Reputation-gated launches and rewards backed by FairScale", long_about = None)]
struct Cli {
    /// Settings file to use instead of config/default and config/local
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Fetch scores through a running FairGate proxy instead of FairScale directly
    #[clap(long, global = true)]
    via_proxy: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and show the reputation record for a wallet
    Score {
        #[clap(short, long)]
        wallet: String,
    },

    /// Show the tier table
    Tiers,

    /// Check whether a wallet meets a tier requirement
    Gate {
        /// Wallet to check; omit to see the not-connected result
        #[clap(short, long)]
        wallet: Option<String>,

        /// Minimum tier (bronze, silver, gold, platinum)
        #[clap(short, long)]
        required: Tier,
    },

    /// Compute a launch allocation from a score
    Allocation {
        #[clap(short, long)]
        score: f64,

        /// Tier to apply; derived from the score when omitted
        #[clap(short, long)]
        tier: Option<Tier>,

        /// Base allocation; defaults to launchpad.base_allocation
        #[clap(short, long)]
        base: Option<f64>,
    },

    /// List token launches and what the wallet can access
    Launches {
        #[clap(short, long)]
        wallet: Option<String>,

        /// upcoming, active, completed or cancelled
        #[clap(long)]
        status: Option<String>,

        /// Only launches whose minimum tier is exactly this one
        #[clap(long)]
        tier: Option<Tier>,
    },

    /// List rewards and which ones the wallet can claim
    Rewards {
        #[clap(short, long)]
        wallet: Option<String>,
    },

    /// Show the leaderboard
    Leaderboard {
        /// all, monthly or weekly
        #[clap(short, long, default_value = "all")]
        timeframe: Timeframe,

        /// Place this wallet on the board
        #[clap(short, long)]
        wallet: Option<String>,
    },

    /// Run the score proxy
    Serve {
        #[clap(long)]
        host: Option<String>,

        #[clap(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, load_error) = match &cli.config {
        Some(path) => (Settings::from_file(path)?, None),
        None => match Settings::new() {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::fallback(), Some(e)),
        },
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = load_error {
        warn!("Falling back to default settings: {}", e);
    }

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    if let Err(e) = TIER_TABLE.validate() {
        error!("Tier table is inconsistent: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Score { wallet } => {
            let session = build_session(&settings, cli.via_proxy)?;
            if let Some(record) = load_record(&session, Some(wallet)).await {
                print_record(&record);
            }
        }

        Commands::Tiers => {
            println!("\n=== FairGate Tiers ===");
            for def in TIER_TABLE.iter() {
                let range = match def.max_score {
                    Some(max) => format!("{:>3} - <{}", def.min_score, max),
                    None => format!("{:>3}+", def.min_score),
                };
                println!("\n{} (rank {}) score {}  multiplier {}x", def.name, def.rank, range, def.multiplier);
                for benefit in def.benefits {
                    println!("  - {}", benefit);
                }
            }
        }

        Commands::Gate { wallet, required } => {
            let session = build_session(&settings, cli.via_proxy)?;
            let record = load_record(&session, wallet).await;
            let decision = evaluate_gate(record.map(|r| r.tier), required);

            let icon = if decision.has_access { "✅" } else { "🔒" };
            println!("\n{} {}", icon, decision.message);
        }

        Commands::Allocation { score, tier, base } => {
            let tier = tier.unwrap_or_else(|| classify(score));
            let base = base.unwrap_or(settings.launchpad.base_allocation);
            let amount = allocation(score, tier, base);

            println!("\nScore: {:.2}", score);
            println!("Tier: {} ({}x)", tier.display_name(), tier.multiplier());
            println!("Base allocation: {}", base);
            println!("Allocation: {}", amount);
        }

        Commands::Launches { wallet, status, tier } => {
            let status = match status {
                Some(s) => Some(
                    LaunchStatus::from_str(&s)
                        .ok_or_else(|| anyhow::anyhow!("Invalid launch status: {}", s))?,
                ),
                None => None,
            };

            let catalog = Catalog::load(settings.launchpad.catalog_path.as_deref())?;
            let record = if wallet.is_some() {
                let session = build_session(&settings, cli.via_proxy)?;
                load_record(&session, wallet).await
            } else {
                None
            };

            let filter = LaunchFilter { status, tier };
            let views = catalog.launch_views(&filter, record.as_deref(), settings.launchpad.base_allocation);
            if views.is_empty() {
                println!("\nNo launches match your current filters.");
            }

            let now = Utc::now();
            for view in views {
                let p = view.project;
                println!("\n{} ({}) [{}] min tier: {}", p.name, p.symbol, p.status, p.min_tier.display_name());
                println!("  {}", p.description);
                println!(
                    "  Raise {} at ${} | {} participants",
                    format_currency(p.total_raise),
                    p.token_price,
                    format_number(p.participants as f64)
                );
                if p.status == LaunchStatus::Active {
                    println!(
                        "  Raised {} / {} ({:.0}%) | {} left",
                        format_currency(p.raised),
                        format_currency(p.total_raise),
                        progress_percentage(p.raised, p.total_raise),
                        time_remaining(p.end_date, now)
                    );
                }
                println!("  {}", view.gate.message);
                if let Some(amount) = view.allocation {
                    println!("  Your allocation: {}", amount);
                }
                if view.can_participate() {
                    println!("  -> open for participation");
                }
            }
        }

        Commands::Rewards { wallet } => {
            let catalog = Catalog::load(settings.launchpad.catalog_path.as_deref())?;
            let record = if wallet.is_some() {
                let session = build_session(&settings, cli.via_proxy)?;
                load_record(&session, wallet).await
            } else {
                None
            };

            if let Some(r) = &record {
                println!("\nFairScore {:.1} | {} tier | {}x multiplier", r.combined_score, r.tier.display_name(), r.tier.multiplier());
            }

            for view in catalog.reward_views(record.as_deref()) {
                let r = view.reward;
                let state = if view.eligibility.claimed {
                    "claimed"
                } else if view.eligibility.can_claim() {
                    "claimable"
                } else {
                    "locked"
                };
                println!("\n[{}] {} - {} ({})", r.kind.label(), r.title, r.value, state);
                println!("  {}", r.description);
                println!(
                    "  Requires {} tier and score >= {} | expires {}",
                    r.min_tier.display_name(),
                    r.min_score,
                    r.expires_at.format("%b %-d, %Y")
                );
            }
        }

        Commands::Leaderboard { timeframe, wallet } => {
            let catalog = Catalog::load(settings.launchpad.catalog_path.as_deref())?;
            let stats = catalog.leaderboard_stats(timeframe);

            println!("\n=== FairGate Leaderboard ({}) ===", timeframe);
            println!("Top score: {:.1} | Active wallets: {}", stats.top_score, stats.active_wallets);
            if let Some(best) = stats.most_improved {
                println!("Most improved: {} (+{})", shorten_address(&best.wallet, 4), best.change);
            }

            println!();
            for entry in catalog.leaderboard(timeframe) {
                let streak = entry.streak.map(|s| format!(" streak {}", s)).unwrap_or_default();
                println!(
                    "#{:<3} {:<12} {:>5.1} {:<9} badges {:<3} {:+}{}",
                    entry.rank,
                    shorten_address(&entry.wallet, 4),
                    entry.fairscore,
                    entry.tier.as_str(),
                    entry.badges,
                    entry.change,
                    streak
                );
            }

            if wallet.is_some() {
                let session = build_session(&settings, cli.via_proxy)?;
                if let Some(record) = load_record(&session, wallet).await {
                    let rank = catalog.rank_for_score(timeframe, record.combined_score);
                    println!("\nYour position: #{} with {:.1}", rank, record.combined_score);
                }
            }
        }

        Commands::Serve { host, port } => {
            let mut settings = settings;
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            let addr: SocketAddr = settings.bind_address().parse()?;
            let upstream = FairScaleClient::from_settings(&settings.upstream)?;
            info!("Starting score proxy on {}", addr);
            server::serve(ProxyState::new(upstream), addr).await?;
        }
    }

    Ok(())
}

fn build_session(settings: &Settings, via_proxy: bool) -> anyhow::Result<ScoreSession> {
    let source: Arc<dyn ScoreSource> = if via_proxy {
        Arc::new(ProxyScoreClient::from_settings(&settings.proxy)?)
    } else {
        Arc::new(FairScaleClient::from_settings(&settings.upstream)?)
    };
    Ok(ScoreSession::new(source, settings.fetch_timeout()))
}

/// Fetch through the session; failures are reported here and come back as `None`.
async fn load_record(session: &ScoreSession, wallet: Option<String>) -> Option<Arc<ReputationRecord>> {
    let wallet = wallet?;
    let state = session.fetch(&wallet).await;

    if let Some(message) = &state.error {
        error!("Score fetch failed for {}: {}", wallet, message);
        println!("\n❌ {}", message);
        println!("Run the command again to retry.");
    }
    state.record
}

fn print_record(record: &ReputationRecord) {
    println!("\n=== FairScore Results ===");
    println!("Wallet: {}", shorten_address(&record.wallet, 4));
    println!("FairScore: {:.2}/100", record.combined_score);
    println!("  Wallet score: {:.2}", record.wallet_score);
    println!("  Social score: {:.2}", record.social_score);
    println!("Tier: {} ({}x multiplier)", record.tier.display_name(), record.tier.multiplier());

    if !record.tier_is_consistent() {
        warn!(
            "Upstream tier {} disagrees with local classification {}",
            record.tier,
            record.derived_tier()
        );
        println!("  (score classifies as {})", record.derived_tier().display_name());
    }

    println!("\nBenefits:");
    for benefit in record.tier.definition().benefits {
        println!("  - {}", benefit);
    }

    if !record.badges.is_empty() {
        println!("\nBadges:");
        for badge in &record.badges {
            println!("  [{}] {} - {}", badge.tier, badge.label, badge.description);
        }
    }

    if !record.features.is_empty() {
        println!("\nFeatures:");
        for (key, value) in record.features.iter() {
            let (label, formatted) = describe_feature(key, value);
            println!("  {:<14} {}", label, formatted);
        }
    }

    if let Some(ts) = &record.timestamp {
        println!("\nScored at: {}", ts);
    }
    println!("Fetched at: {}", record.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"));
}
