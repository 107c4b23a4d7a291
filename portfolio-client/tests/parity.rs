//! Live and static dispatch against a real in-process backend

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use portfolio_client::{ClientConfig, DispatchError, LatencyProfile, LiveApi, PortfolioApi, StaticApi};
use portfolio_server::genai::{GenAiError, GeneratedImage, GenerativeClient};
use portfolio_server::{create_router, AppState, Config, MemoryContactStore};
use portfolio_shared::{fixtures, ContactRequest, ModelKind, PredictionInput};

struct EchoAi;

#[async_trait]
impl GenerativeClient for EchoAi {
    async fn generate_text(&self, _model: &str, prompt: &str) -> Result<String, GenAiError> {
        Ok(prompt.to_string())
    }

    async fn generate_image(&self, _prompt: &str) -> Result<GeneratedImage, GenAiError> {
        Ok(GeneratedImage {
            mime_type: "image/png".to_string(),
            data: "AAAA".to_string(),
        })
    }
}

async fn spawn_backend() -> (LiveApi, Arc<MemoryContactStore>) {
    let contacts = Arc::new(MemoryContactStore::new());
    let state = AppState::new(Config::default(), contacts.clone(), Arc::new(EchoAi));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.expect("serve");
    });

    let api = LiveApi::new(&ClientConfig::live(format!("http://{}", addr))).expect("client");
    (api, contacts)
}

fn fast_static() -> StaticApi {
    StaticApi::with_latency(LatencyProfile {
        min: std::time::Duration::ZERO,
        max: std::time::Duration::from_millis(5),
    })
}

fn ids(models: &[portfolio_shared::ModelDescriptor]) -> BTreeSet<String> {
    models.iter().map(|m| m.id.clone()).collect()
}

#[tokio::test]
async fn test_list_models_parity() {
    let (live, _) = spawn_backend().await;
    let static_api = fast_static();

    let live_models = live.list_models().await.unwrap();
    let static_models = static_api.list_models().await.unwrap();

    assert_eq!(ids(&live_models), ids(&static_models));
    assert_eq!(live_models, static_models);
}

#[tokio::test]
async fn test_predict_shapes_agree() {
    let (live, _) = spawn_backend().await;
    let static_api = fast_static();

    for model in fixtures::models() {
        let input = match model.kind {
            ModelKind::Tabular => PredictionInput::Features(vec![0.5, 1.5, 2.5]),
            _ => PredictionInput::from("a cat on a sofa"),
        };

        let a = live.predict(&model.id, input.clone()).await.unwrap();
        let b = static_api.predict(&model.id, input).await.unwrap();
        assert_eq!(a.kind(), model.kind);
        assert_eq!(b.kind(), model.kind);
    }
}

#[tokio::test]
async fn test_not_found_in_both_modes() {
    let (live, _) = spawn_backend().await;
    let static_api = fast_static();

    let apis: [&dyn PortfolioApi; 2] = [&live, &static_api];
    for api in apis {
        let err = api.predict("model_missing", PredictionInput::from("x")).await.unwrap_err();
        assert!(matches!(err, DispatchError::NotFound(_)), "{:?}: {:?}", api.mode(), err);

        let err = api.report("model_missing").await.unwrap_err();
        assert!(matches!(err, DispatchError::NotFound(_)), "{:?}: {:?}", api.mode(), err);
    }
}

#[tokio::test]
async fn test_near_miss_ids_are_not_found_in_both_modes() {
    let (live, _) = spawn_backend().await;
    let static_api = fast_static();

    let near_misses = [
        "model_random_forest!",
        "model_random_forest/",
        "../contact",
        "model random forest",
        "..",
    ];

    let apis: [&dyn PortfolioApi; 2] = [&live, &static_api];
    for api in apis {
        for id in near_misses {
            let err = api
                .predict(id, PredictionInput::Features(vec![1.0]))
                .await
                .unwrap_err();
            assert!(matches!(err, DispatchError::NotFound(_)), "{:?} {:?}: {:?}", api.mode(), id, err);

            let err = api.report(id).await.unwrap_err();
            assert!(matches!(err, DispatchError::NotFound(_)), "{:?} {:?}: {:?}", api.mode(), id, err);
        }
    }
}

#[tokio::test]
async fn test_invalid_features_in_both_modes() {
    let (live, _) = spawn_backend().await;
    let static_api = fast_static();

    let apis: [&dyn PortfolioApi; 2] = [&live, &static_api];
    for api in apis {
        let err = api
            .predict(fixtures::TABULAR_MODEL_ID, PredictionInput::from("1, two"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::InvalidInput("Please enter comma-separated numerical features".to_string())
        );
    }
}

#[tokio::test]
async fn test_live_contact_persists_one_row() {
    let (live, contacts) = spawn_backend().await;

    let err = live
        .submit_contact(&ContactRequest::new("A", "not-an-email", "S", "M"))
        .await
        .unwrap_err();
    assert_eq!(err, DispatchError::InvalidInput("Invalid email format".to_string()));
    assert!(contacts.all().await.is_empty());

    live.submit_contact(&ContactRequest::new("A", "a@b.com", "S", "M"))
        .await
        .unwrap();
    assert_eq!(contacts.all().await.len(), 1);
}

#[tokio::test]
async fn test_live_ai_operations() {
    let (live, _) = spawn_backend().await;

    let image = live.generate_image("a fox").await.unwrap();
    assert_eq!(image.image, "data:image/png;base64,AAAA");

    let concept = live.generate_video_concept("a fox").await.unwrap();
    assert!(concept.concept.contains("a fox"));

    let analysis = live.analyze_prompt("a fox").await.unwrap();
    assert!(analysis.analysis.contains("a fox"));

    let report = live.report(fixtures::VISION_MODEL_ID).await.unwrap();
    assert!(report.contains("ResNet50 Image Classifier"));
}
