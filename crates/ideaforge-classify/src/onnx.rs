//! ONNX-based sequence classifiers for sentiment and topics.
//!
//! Loads fine-tuned DistilBERT-style classification heads exported to ONNX.
//! Requires the `onnx` feature; with the load-dynamic build, ORT_DYLIB_PATH
//! must point to libonnxruntime.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;
    use std::sync::Arc;

    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::{info, warn};

    use crate::sentiment::{Sentiment, SentimentBackend};
    use crate::topics::{select_labels, TopicBackend};

    /// Maximum sequence length, matching the fine-tuning setup.
    const MAX_SEQ_LEN: usize = 256;

    /// Shared tokenize-and-run plumbing for a single-input classifier head.
    struct ClassifierSession {
        session: Arc<Mutex<Session>>,
        tokenizer: Tokenizer,
    }

    impl ClassifierSession {
        fn load(model_path: &Path, tokenizer_path: &Path) -> Result<Self, String> {
            if !model_path.exists() {
                return Err(format!("Model not found: {}", model_path.display()));
            }
            if !tokenizer_path.exists() {
                return Err(format!("Tokenizer not found: {}", tokenizer_path.display()));
            }

            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| format!("Failed to create session builder: {}", e))?
                .with_intra_threads(2)
                .map_err(|e| format!("Failed to set threads: {}", e))?
                .commit_from_file(model_path)
                .map_err(|e| format!("Failed to load ONNX model: {}", e))?;

            let tokenizer = Tokenizer::from_file(tokenizer_path)
                .map_err(|e| format!("Failed to load tokenizer: {}", e))?;

            Ok(Self {
                session: Arc::new(Mutex::new(session)),
                tokenizer,
            })
        }

        /// Tokenize, run the model, and return the raw logits row.
        /// Any failure returns None; callers map that to their fallback value.
        fn logits(&self, text: &str) -> Option<Vec<f32>> {
            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| {
                    warn!("Tokenization failed: {}", e);
                    e
                })
                .ok()?;

            let input_ids = encoding.get_ids();
            let attention_mask = encoding.get_attention_mask();

            let seq_len = input_ids.len().min(MAX_SEQ_LEN);
            if seq_len == 0 {
                return None;
            }
            let ids_data: Vec<i64> = input_ids[..seq_len].iter().map(|&id| id as i64).collect();
            let mask_data: Vec<i64> = attention_mask[..seq_len].iter().map(|&m| m as i64).collect();

            let ids_tensor = Tensor::from_array(([1usize, seq_len], ids_data))
                .map_err(|e| warn!("Failed to create ids tensor: {}", e))
                .ok()?;
            let mask_tensor = Tensor::from_array(([1usize, seq_len], mask_data))
                .map_err(|e| warn!("Failed to create mask tensor: {}", e))
                .ok()?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor])
                .map_err(|e| {
                    warn!("ONNX inference failed: {}", e);
                    e
                })
                .ok()?;

            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| {
                    warn!("Failed to extract logits: {}", e);
                    e
                })
                .ok()?;

            // Classification heads output [1, num_labels]
            let shape_dims: Vec<i64> = shape.iter().copied().collect();
            if shape_dims.len() != 2 {
                warn!("Unexpected output shape: {:?}", shape_dims);
                return None;
            }
            let num_labels = shape_dims[1] as usize;
            Some(data[..num_labels].to_vec())
        }
    }

    /// 3-way sentiment classifier (negative / neutral / positive).
    pub struct OnnxSentiment {
        inner: ClassifierSession,
    }

    impl OnnxSentiment {
        /// Load from `model_dir/sentiment.onnx` + `model_dir/tokenizer.json`.
        pub fn load(model_dir: &Path) -> Result<Self, String> {
            let inner = ClassifierSession::load(
                &model_dir.join("sentiment.onnx"),
                &model_dir.join("tokenizer.json"),
            )?;
            info!("ONNX sentiment classifier loaded from {}", model_dir.display());
            Ok(Self { inner })
        }
    }

    impl SentimentBackend for OnnxSentiment {
        fn classify(&self, text: &str) -> Sentiment {
            let Some(logits) = self.inner.logits(text) else {
                return Sentiment::Neutral;
            };
            let argmax = logits
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(i, _)| i)
                .unwrap_or(1);
            Sentiment::from_class_index(argmax)
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    /// Multi-label topic classifier over the fixed topic set.
    pub struct OnnxTopics {
        inner: ClassifierSession,
    }

    impl OnnxTopics {
        /// Load from `model_dir/topics.onnx` + `model_dir/tokenizer.json`.
        pub fn load(model_dir: &Path) -> Result<Self, String> {
            let inner = ClassifierSession::load(
                &model_dir.join("topics.onnx"),
                &model_dir.join("tokenizer.json"),
            )?;
            info!("ONNX topic classifier loaded from {}", model_dir.display());
            Ok(Self { inner })
        }
    }

    impl TopicBackend for OnnxTopics {
        fn classify(&self, text: &str, threshold: f32) -> Vec<String> {
            let Some(logits) = self.inner.logits(text) else {
                return Vec::new();
            };
            let probs: Vec<f32> = logits.iter().map(|&l| sigmoid(l)).collect();
            select_labels(&probs, threshold)
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    fn sigmoid(x: f32) -> f32 {
        1.0 / (1.0 + (-x).exp())
    }
}

#[cfg(feature = "onnx")]
pub use inner::{OnnxSentiment, OnnxTopics};
