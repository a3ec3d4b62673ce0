use candle::{D, DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// BERT-family encoder with attention-masked mean pooling.
///
/// Sentence-transformers checkpoints store the encoder either at the root of
/// the safetensors file or under a `bert.`/`roberta.` prefix; all three load.
pub struct SentenceBert {
    bert: BertModel,
    hidden_size: usize,
}

impl SentenceBert {
    fn from_var_builder(vb: VarBuilder, config: &Config) -> Result<Self> {
        let bert = if vb.contains_tensor("embeddings.word_embeddings.weight") {
            BertModel::load(vb, config)?
        } else if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("roberta"), config)?
        } else {
            return Err(candle::Error::Msg(
                "safetensors file contains no BERT embeddings".to_string(),
            ));
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    pub fn load(config_path: &Path, weights_path: &Path, device: &Device) -> Result<Self> {
        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path.to_path_buf()], DType::F32, device)?
        };

        Self::from_var_builder(vb, &config)
    }

    /// Returns pooled sentence vectors, shape `[batch, hidden_size]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;

        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(D::Minus1)?;
        let summed = output.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.maximum(1e-9f64)?;
        summed.broadcast_div(&counts)
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }
}
