//! Portfolio CLI - exercises the dispatch shim from a terminal

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use portfolio_client::{connect, ClientConfig, DispatchError, PortfolioApi};
use portfolio_shared::{ContactRequest, PredictionInput};
use serde::Serialize;

/// Portfolio CLI - calls the portfolio API in live or static mode
///
/// The mode is resolved from STATIC_DEPLOY, PORTFOLIO_HOSTNAME and
/// PORTFOLIO_API_URL.
#[derive(Debug, Parser)]
#[command(name = "portfolio-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Commands {
    /// List showcased models
    Models,

    /// Run a simulated prediction
    ///
    /// Examples:
    ///   portfolio-cli predict model_bert_sentiment "Great battery life"
    ///   portfolio-cli predict model_random_forest --features "1, 2.5, 3"
    Predict {
        #[arg(value_name = "MODEL")]
        model: String,

        /// Text to classify, or comma-separated numbers with --features
        #[arg(value_name = "INPUT")]
        input: String,

        /// Send INPUT as a numerical feature vector
        #[arg(short, long)]
        features: bool,
    },

    /// Generate a technical report for a model
    Report {
        #[arg(value_name = "MODEL")]
        model: String,
    },

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(short, long)]
        message: String,
    },

    /// Generate an image from a prompt
    Image {
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },

    /// Draft a video concept from a prompt
    Video {
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },

    /// Suggest improvements for a creative prompt
    Analyze {
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let api = match connect(&ClientConfig::from_env()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match run(api.as_ref(), cli.command).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("error: {}", e.user_message());
            if e.is_retryable() {
                eprintln!("(you can retry this command)");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &dyn PortfolioApi, command: Commands) -> Result<String, DispatchError> {
    let output = match command {
        Commands::Models => pretty(&api.list_models().await?),
        Commands::Predict { model, input, features } => {
            let input = prediction_input(&input, features)?;
            pretty(&api.predict(&model, input).await?)
        }
        Commands::Report { model } => api.report(&model).await?,
        Commands::Contact { name, email, subject, message } => {
            api.submit_contact(&ContactRequest::new(name, email, subject, message))
                .await?
        }
        Commands::Image { prompt } => pretty(&api.generate_image(&prompt).await?),
        Commands::Video { prompt } => pretty(&api.generate_video_concept(&prompt).await?),
        Commands::Analyze { prompt } => pretty(&api.analyze_prompt(&prompt).await?),
    };

    Ok(output)
}

fn prediction_input(input: &str, features: bool) -> Result<PredictionInput, DispatchError> {
    if features {
        Ok(PredictionInput::parse_features(input)?)
    } else {
        Ok(PredictionInput::from(input))
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_client::StaticApi;
    use portfolio_shared::fixtures;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("portfolio-cli").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_subcommands() {
        assert_eq!(parse(&["models"]), Commands::Models);
        assert_eq!(
            parse(&["predict", "model_bert_sentiment", "5"]),
            Commands::Predict {
                model: "model_bert_sentiment".to_string(),
                input: "5".to_string(),
                features: false,
            }
        );
        assert_eq!(
            parse(&["predict", "--features", "model_random_forest", "1, 2"]),
            Commands::Predict {
                model: "model_random_forest".to_string(),
                input: "1, 2".to_string(),
                features: true,
            }
        );
        assert_eq!(
            parse(&["report", "model_random_forest"]),
            Commands::Report { model: "model_random_forest".to_string() }
        );
        assert_eq!(
            parse(&["contact", "--name", "A", "--email", "a@b.com", "--subject", "S", "-m", "M"]),
            Commands::Contact {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                subject: "S".to_string(),
                message: "M".to_string(),
            }
        );
        assert_eq!(parse(&["image", "a fox"]), Commands::Image { prompt: "a fox".to_string() });
        assert_eq!(parse(&["video", "a fox"]), Commands::Video { prompt: "a fox".to_string() });
        assert_eq!(parse(&["analyze", "a fox"]), Commands::Analyze { prompt: "a fox".to_string() });
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(Cli::try_parse_from(["portfolio-cli"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-cli", "deploy"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-cli", "predict", "model_random_forest"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-cli", "contact", "--name", "A"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-cli", "models", "extra"]).is_err());
    }

    #[test]
    fn test_prediction_input() {
        assert_eq!(prediction_input("5", false).unwrap(), PredictionInput::from("5"));
        assert_eq!(
            prediction_input("1, 2.5", true).unwrap(),
            PredictionInput::Features(vec![1.0, 2.5])
        );
        assert!(matches!(
            prediction_input("1, two", true).unwrap_err(),
            DispatchError::InvalidInput(_)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_against_static_api() {
        let api = StaticApi::new();

        let models = run(&api, parse(&["models"])).await.unwrap();
        for model in fixtures::models() {
            assert!(models.contains(&model.id));
        }

        // Numeric-looking text still goes to the transformer as text.
        let out = run(&api, parse(&["predict", fixtures::TRANSFORMER_MODEL_ID, "5"]))
            .await
            .unwrap();
        assert!(out.contains("transformerResult"));

        let out = run(&api, parse(&["predict", "-f", fixtures::TABULAR_MODEL_ID, "1, 2, 3"]))
            .await
            .unwrap();
        assert!(out.contains("tabularResult"));

        let out = run(
            &api,
            parse(&["contact", "--name", "A", "--email", "a@b.com", "--subject", "S", "-m", "M"]),
        )
        .await
        .unwrap();
        assert_eq!(out, fixtures::STATIC_CONTACT_MESSAGE);

        let out = run(&api, parse(&["image", "a lighthouse"])).await.unwrap();
        assert!(out.contains("data:image/svg+xml;base64,"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_surfaces_dispatch_errors() {
        let api = StaticApi::new();

        let err = run(&api, parse(&["report", "model_missing"])).await.unwrap_err();
        assert!(matches!(err, DispatchError::NotFound(_)));

        let err = run(&api, parse(&["predict", "-f", fixtures::TABULAR_MODEL_ID, "oops"]))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput(_)));

        let err = run(&api, parse(&["analyze", "  "])).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput(_)));
    }
}
