// Copyright 2025 Newsgraph Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Newsgraph CLI
//!
//! Command-line front end for the exploration engine: point it at a
//! running extraction backend and walk an article's knowledge graph,
//! node details, summary, chat, and image check from the terminal.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use newsgraph_client::{BackendConfig, HttpBackend, NodeRelationship};
use newsgraph_core::{radial_layout, render, ArticleRef, GraphModel, LayoutOptions};
use newsgraph_engine::{
    ArticleExplorer, DetailState, GraphState, ImageCheckState, SendOutcome, SummaryState,
};

#[derive(Parser)]
#[command(
    name = "newsgraph",
    about = "Explore news articles as interactive knowledge graphs",
    version
)]
struct Cli {
    /// Base URL of the extraction backend
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    backend: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ArticleArgs {
    /// Article headline, used as the graph topic
    title: String,

    /// Short description fed to extraction and the summary
    #[arg(long, default_value = "")]
    description: String,

    /// Article body text used by the trusted summary
    #[arg(long, default_value = "")]
    content: String,

    /// Canonical article URL
    #[arg(long, default_value = "")]
    url: String,

    /// Lead image URL; required for the image check
    #[arg(long)]
    image: Option<String>,

    /// Publisher name
    #[arg(long, default_value = "")]
    source: String,
}

impl ArticleArgs {
    fn to_article(&self) -> ArticleRef {
        let mut article = ArticleRef::new("cli", &self.title)
            .with_description(&self.description)
            .with_content(&self.content)
            .with_url(&self.url)
            .with_source(&self.source);
        if let Some(image) = &self.image {
            article = article.with_image(image);
        }
        article
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an article's knowledge graph and trusted summary
    Explore {
        #[command(flatten)]
        article: ArticleArgs,

        /// Canvas width for the layout
        #[arg(long, default_value_t = 700.0)]
        width: f64,

        /// Canvas height for the layout
        #[arg(long, default_value_t = 700.0)]
        height: f64,

        /// Vary satellite display radii (deterministic per node)
        #[arg(long)]
        jitter: bool,

        /// Print the frame's draw commands as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the enriched detail panel for one entity
    Inspect {
        #[command(flatten)]
        article: ArticleArgs,

        /// Entity label to inspect
        label: String,
    },

    /// Ask the article-grounded assistant a question
    Ask {
        #[command(flatten)]
        article: ArticleArgs,

        /// The question to ask
        question: String,
    },

    /// Run image forensics on the article's lead image
    Check {
        #[command(flatten)]
        article: ArticleArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = BackendConfig::new(&cli.backend).with_timeout(cli.timeout);
    let backend = Arc::new(HttpBackend::new(config)?);
    let explorer = Arc::new(ArticleExplorer::new(backend));

    match cli.command {
        Commands::Explore {
            article,
            width,
            height,
            jitter,
            json,
        } => explore(&explorer, article.to_article(), width, height, jitter, json).await,
        Commands::Inspect { article, label } => {
            inspect(&explorer, article.to_article(), &label).await
        }
        Commands::Ask { article, question } => {
            ask(&explorer, article.to_article(), &question).await
        }
        Commands::Check { article } => check(&explorer, article.to_article()).await,
    }
}

/// Select the article and wait for the graph to settle, degraded or not.
async fn settle_graph(
    explorer: &Arc<ArticleExplorer>,
    article: ArticleRef,
) -> Result<Arc<GraphModel>> {
    explorer.select_article(article).await?;
    match explorer.graph_state() {
        GraphState::Ready(model) => Ok(model),
        GraphState::Degraded { model, reason } => {
            println!("⚠ Extraction degraded: {reason}");
            Ok(model)
        }
        other => bail!("graph did not settle: {other:?}"),
    }
}

async fn explore(
    explorer: &Arc<ArticleExplorer>,
    article: ArticleRef,
    width: f64,
    height: f64,
    jitter: bool,
    json: bool,
) -> Result<()> {
    let model = settle_graph(explorer, article).await?;

    let options = if jitter {
        LayoutOptions::jittered()
    } else {
        LayoutOptions::default()
    };
    let layout = radial_layout(&model, width, height, options);

    if json {
        let commands = render(&model, &layout, None);
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    println!(
        "✓ Knowledge graph: {} entities, {} relations",
        model.entities.len(),
        model.relations.len()
    );
    for placement in layout.iter() {
        let Some(entity) = model.entity(&placement.id) else {
            continue;
        };
        println!(
            "  {:<8} {:<25} {:<13} ({:>6.1}, {:>6.1})",
            entity.id,
            entity.label,
            entity.kind.as_str(),
            placement.x,
            placement.y
        );
    }

    match explorer.summary_state() {
        SummaryState::Ready(summary) => {
            println!("\n✓ Trusted summary");
            println!("  {}", summary.summary);
            for citation in &summary.citations {
                println!("  [{}] {} <{}>", citation.source_name, citation.title, citation.url);
            }
        }
        SummaryState::Failed(reason) => println!("\n⚠ Summary unavailable: {reason}"),
        _ => {}
    }
    Ok(())
}

async fn inspect(explorer: &Arc<ArticleExplorer>, article: ArticleRef, label: &str) -> Result<()> {
    settle_graph(explorer, article).await?;
    let Some(detail) = explorer.detail() else {
        bail!("detail panel unavailable");
    };

    detail.select(label).await??;
    match detail.state_of(label) {
        Some(DetailState::Loaded(panel)) => {
            println!("✓ {} ({})", panel.name, panel.kind);
            if !panel.description.is_empty() {
                println!("  {}", panel.description);
            }
            if panel.has_wikipedia() {
                println!("\n  Wikipedia: {}", panel.wikipedia_summary);
                println!("  {}", panel.wikipedia_url);
            }
            if !panel.relationships.is_empty() {
                println!("\n  Relationships ({}):", panel.relationship_count);
                for relation in &panel.relationships {
                    match relation {
                        NodeRelationship::Outgoing {
                            relationship,
                            target,
                            ..
                        } => println!("    {} -> {} {}", panel.name, relationship, target),
                        NodeRelationship::Incoming {
                            relationship,
                            source,
                            ..
                        } => println!("    {} {} -> {}", source, relationship, panel.name),
                    }
                }
            }
            if !panel.related_news.is_empty() {
                println!("\n  Related news:");
                for related in &panel.related_news {
                    println!("    {} <{}>", related.title, related.link);
                }
            }
        }
        Some(DetailState::Failed(reason)) => println!("⚠ Failed to load node details: {reason}"),
        _ => {}
    }
    Ok(())
}

async fn ask(explorer: &Arc<ArticleExplorer>, article: ArticleRef, question: &str) -> Result<()> {
    settle_graph(explorer, article).await?;
    let Some(chat) = explorer.chat() else {
        bail!("chat unavailable");
    };

    match chat.send(question).await {
        SendOutcome::Sent => {
            for message in chat.messages() {
                println!("{:>9}: {}", message.role, message.content);
            }
            Ok(())
        }
        SendOutcome::EmptyInput => bail!("question is empty"),
        SendOutcome::Busy => bail!("a reply is still pending"),
    }
}

async fn check(explorer: &Arc<ArticleExplorer>, article: ArticleRef) -> Result<()> {
    settle_graph(explorer, article).await?;

    if let Some(handle) = explorer.run_image_check() {
        handle.await?;
    }
    match explorer.image_check_state() {
        ImageCheckState::Done(analysis) => {
            println!(
                "✓ Image verdict: {} (confidence {:.1}%)",
                analysis.prediction,
                analysis.confidence * 100.0
            );
            println!(
                "  real {:.1}% / fake {:.1}%",
                analysis.real_probability * 100.0,
                analysis.fake_probability * 100.0
            );
            if let Some(text) = &analysis.analysis {
                println!("  {text}");
            }
        }
        ImageCheckState::Failed(reason) => println!("⚠ {reason}"),
        _ => {}
    }
    Ok(())
}
