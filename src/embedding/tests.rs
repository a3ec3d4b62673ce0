use super::*;
use std::path::PathBuf;
use std::time::Duration;

fn dot(a: &Embedding, b: &Embedding) -> f32 {
    a.as_slice().iter().zip(b.as_slice()).map(|(x, y)| x * y).sum()
}

fn offline_missing_config(cache_dir: PathBuf) -> EmbedderConfig {
    EmbedderConfig {
        cache_dir,
        offline: true,
        ..Default::default()
    }
}

mod config_tests {
    use super::*;
    use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_NAME};

    #[test]
    fn test_embedder_config_default() {
        let config = EmbedderConfig::default();
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, DEFAULT_MAX_SEQ_LEN);
        assert!(config.model_dir.is_none());
        assert!(!config.offline);
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_embedder_config_new_is_offline() {
        let config = EmbedderConfig::new("/models/minilm");
        assert_eq!(config.model_dir, Some(PathBuf::from("/models/minilm")));
        assert!(config.offline);
    }

    #[test]
    fn test_embedder_config_stub() {
        let config = EmbedderConfig::stub();
        assert!(config.testing_stub);
        assert!(config.encode_timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_model_dir() {
        let config = EmbedderConfig::new("/nonexistent/path/minilm");
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_validation_zero_dimension() {
        let config = EmbedderConfig {
            embedding_dim: 0,
            ..EmbedderConfig::stub()
        };
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_device_preference_parse() {
        assert_eq!("CPU".parse::<DevicePreference>().unwrap(), DevicePreference::Cpu);
        assert_eq!("auto".parse::<DevicePreference>().unwrap(), DevicePreference::Auto);
        assert!("tpu".parse::<DevicePreference>().is_err());
    }

    #[test]
    fn test_cpu_preference_selects_cpu() {
        let device = device::select_device(DevicePreference::Cpu).unwrap();
        assert!(device.is_cpu());
    }
}

mod hub_tests {
    use super::*;
    use crate::constants::MODEL_FILES;
    use hub::{ModelFiles, cache_dir_for, resolve_model_files};
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::path::Path;
    use std::thread;

    #[test]
    fn test_cache_dir_for_replaces_slashes() {
        let dir = cache_dir_for(
            std::path::Path::new("/cache"),
            "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2",
        );
        assert_eq!(
            dir,
            PathBuf::from("/cache/sentence-transformers--paraphrase-multilingual-MiniLM-L12-v2")
        );
    }

    #[test]
    fn test_model_files_completeness() {
        let dir = tempfile::tempdir().unwrap();
        let files = ModelFiles::new(dir.path());
        assert!(!files.is_complete());
        assert_eq!(files.first_missing(), Some(files.config()));

        for name in MODEL_FILES {
            std::fs::write(dir.path().join(name), b"{}").unwrap();
        }
        assert!(files.is_complete());
    }

    #[test]
    fn test_offline_cache_miss_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = offline_missing_config(dir.path().to_path_buf());

        let err = resolve_model_files(&config).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_explicit_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), b"{}").unwrap();

        let err = resolve_model_files(&EmbedderConfig::new(dir.path())).unwrap_err();
        match err {
            EmbeddingError::ModelNotFound { path } => {
                assert_eq!(path, dir.path().join("tokenizer.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// Answers `requests` hub requests with `contents of <file>`, or 404 for `missing`.
    fn serve_hub(
        requests: usize,
        missing: Option<&'static str>,
    ) -> (String, thread::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut paths = Vec::new();
            for stream in listener.incoming().take(requests) {
                let mut stream = stream.unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                loop {
                    let mut header = String::new();
                    reader.read_line(&mut header).unwrap();
                    if header == "\r\n" || header.is_empty() {
                        break;
                    }
                }

                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                let file = path.rsplit('/').next().unwrap_or_default();
                let (status, body) = if Some(file) == missing {
                    ("404 Not Found", Vec::new())
                } else {
                    ("200 OK", format!("contents of {file}").into_bytes())
                };

                write!(
                    stream,
                    "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                )
                .unwrap();
                stream.write_all(&body).unwrap();
                paths.push(path);
            }
            paths
        });

        (endpoint, handle)
    }

    fn hub_config(cache_dir: &Path, endpoint: String) -> EmbedderConfig {
        EmbedderConfig {
            model_name: "org/name".to_string(),
            cache_dir: cache_dir.to_path_buf(),
            hub_endpoint: endpoint,
            offline: false,
            ..Default::default()
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_download_then_reuse_offline() {
        let cache = tempfile::tempdir().unwrap();
        let (endpoint, server) = serve_hub(MODEL_FILES.len(), None);

        let files = resolve_model_files(&hub_config(cache.path(), endpoint)).unwrap();
        assert_eq!(files.dir(), cache.path().join("org--name"));
        assert!(files.is_complete());
        assert_eq!(
            std::fs::read_to_string(files.weights()).unwrap(),
            "contents of model.safetensors"
        );

        let mut expected: Vec<String> = MODEL_FILES.iter().map(|n| n.to_string()).collect();
        expected.sort();
        assert_eq!(file_names(files.dir()), expected);

        let requested = server.join().unwrap();
        assert_eq!(
            requested,
            MODEL_FILES
                .iter()
                .map(|n| format!("/org/name/resolve/main/{n}"))
                .collect::<Vec<_>>()
        );

        let offline = EmbedderConfig {
            offline: true,
            hub_endpoint: "http://127.0.0.1:9".to_string(),
            ..hub_config(cache.path(), String::new())
        };
        assert_eq!(resolve_model_files(&offline).unwrap(), files);
    }

    #[test]
    fn test_http_error_leaves_no_partial_file() {
        let cache = tempfile::tempdir().unwrap();
        let (endpoint, server) = serve_hub(MODEL_FILES.len(), Some("model.safetensors"));

        let err = resolve_model_files(&hub_config(cache.path(), endpoint)).unwrap_err();
        match err {
            EmbeddingError::DownloadFailed { url, reason } => {
                assert!(url.ends_with("/org/name/resolve/main/model.safetensors"));
                assert!(reason.contains("404"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
        server.join().unwrap();

        let dir = cache.path().join("org--name");
        assert!(!dir.join("model.safetensors").exists());
        assert_eq!(file_names(&dir), vec!["config.json", "tokenizer.json"]);
    }
}

mod tokenizer_tests {
    use super::*;
    use utils::load_tokenizer;

    const WORD_LEVEL_TOKENIZER: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": { "[UNK]": 0, "python": 1, "docker": 2 },
            "unk_token": "[UNK]"
        }
    }"#;

    #[test]
    fn test_truncates_to_max_len() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, WORD_LEVEL_TOKENIZER).unwrap();

        let tokenizer = load_tokenizer(&path, 2).unwrap();
        let encoding = tokenizer.encode("python docker python docker", false).unwrap();
        assert_eq!(encoding.get_ids(), &[1, 2]);
    }

    #[test]
    fn test_missing_file_is_tokenization_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tokenizer(&dir.path().join("tokenizer.json"), 16).unwrap_err();
        assert!(matches!(err, EmbeddingError::TokenizationFailed { .. }));
    }
}

mod embedder_tests {
    use super::*;

    #[test]
    fn test_load_stub() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        assert!(embedder.is_stub());
        assert!(!embedder.has_model());
        assert_eq!(embedder.embedding_dim(), crate::constants::DEFAULT_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_determinism_and_dimension() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        let a = embedder.embed("Разработка микросервисов на Python").unwrap();
        let b = embedder.embed("Разработка микросервисов на Python").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dim(), embedder.embedding_dim());
    }

    #[test]
    fn test_stub_normalized() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        let e = embedder.embed("maintain CI pipelines").unwrap();
        assert!((e.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_shared_words_are_closer() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        let a = embedder.embed("develop python backend services").unwrap();
        let b = embedder.embed("Backend services: develop Python!").unwrap();
        let c = embedder.embed("кулинария и садоводство").unwrap();

        assert!((dot(&a, &b) - 1.0).abs() < 1e-5);
        assert!(dot(&a, &b) > dot(&a, &c));
    }

    #[test]
    fn test_stub_empty_input() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        assert!(matches!(embedder.embed(""), Err(EmbeddingError::EmptyInput)));
        assert!(matches!(embedder.embed(" \n\t"), Err(EmbeddingError::EmptyInput)));
    }

    #[test]
    fn test_stub_punctuation_only() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        let e = embedder.embed("—").unwrap();
        assert!((e.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_load_missing_model_dir() {
        let result = SentenceEmbedder::load(EmbedderConfig::new("/nonexistent/minilm"));
        assert!(matches!(result, Err(EmbeddingError::ModelNotFound { .. })));
    }
}

mod provider_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_provider_is_lazy() {
        let provider = EmbeddingProvider::stub();
        assert_eq!(provider.status(), ProviderStatus::Uninitialized);

        provider.encode("python").unwrap();
        assert_eq!(provider.status(), ProviderStatus::Ready);
    }

    #[test]
    fn test_provider_memoizes() {
        let provider = EmbeddingProvider::stub();
        let first = provider.encode("build data pipelines").unwrap();
        assert!(provider.cache().is_some_and(|c| c.contains("build data pipelines")));

        let second = provider.encode("build data pipelines").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_provider_cache_disabled() {
        let provider = EmbeddingProvider::new(EmbedderConfig {
            cache_capacity: 0,
            ..EmbedderConfig::stub()
        });
        assert!(provider.cache().is_none());
        assert!(provider.encode("text").is_ok());
    }

    #[test]
    fn test_provider_rejects_empty_before_loading() {
        let provider = EmbeddingProvider::stub();
        assert!(matches!(provider.encode("   "), Err(EmbeddingError::EmptyInput)));
        assert_eq!(provider.status(), ProviderStatus::Uninitialized);
    }

    #[test]
    fn test_failed_load_is_sticky() {
        let dir = tempfile::tempdir().unwrap();
        let provider = EmbeddingProvider::new(offline_missing_config(dir.path().to_path_buf()));

        let first = provider.encode("python").unwrap_err();
        assert!(first.is_model_unavailable());
        assert!(!provider.is_available());
        assert!(!provider.ready());
        assert!(matches!(provider.status(), ProviderStatus::Unavailable { .. }));

        let second = provider.encode("docker").unwrap_err();
        assert!(second.is_model_unavailable());
    }

    #[test]
    fn test_from_embedder_is_ready() {
        let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).unwrap();
        let provider = EmbeddingProvider::from_embedder(embedder);
        assert_eq!(provider.status(), ProviderStatus::Ready);
        assert!(provider.ready());
    }

    #[test]
    fn test_shared_across_threads() {
        let provider = Arc::new(EmbeddingProvider::stub());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || provider.encode(&format!("task number {i}")).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().dim(), provider.embedding_dim());
        }
        assert_eq!(provider.status(), ProviderStatus::Ready);
    }

    #[test]
    fn test_status_serializes_with_reason() {
        let status = ProviderStatus::Unavailable {
            reason: "offline".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!({"state": "unavailable", "reason": "offline"})
        );
    }
}

mod timeout_tests {
    use super::*;
    use crate::embedding::provider::run_with_timeout;

    #[test]
    fn test_run_with_timeout_returns_result() {
        let value = run_with_timeout(Duration::from_secs(5), "encode", || Ok(42)).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_run_with_timeout_expires() {
        let result: Result<(), _> = run_with_timeout(Duration::from_millis(20), "encode", || {
            std::thread::sleep(Duration::from_millis(500));
            Ok(())
        });
        assert!(matches!(
            result,
            Err(EmbeddingError::Timeout { operation: "encode", .. })
        ));
    }

    #[test]
    fn test_run_with_timeout_propagates_error() {
        let result: Result<(), _> =
            run_with_timeout(Duration::from_secs(5), "model load", || {
                Err(EmbeddingError::EmptyInput)
            });
        assert!(matches!(result, Err(EmbeddingError::EmptyInput)));
    }
}
