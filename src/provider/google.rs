//! Google Gemini API adapter.
//!
//! Three stateless operations against `generateContent`: the conversational
//! turn and the fast insight absorb failures into fixed Portuguese
//! fallbacks; the image edit propagates failures because there is no
//! meaningful placeholder image.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AssistConfig;
use crate::error::{AssistError, Result};
use crate::types::ChatMessage;
use crate::util::timeout::with_timeout;

use super::http::{shared_client, status_to_error};
use super::AssistantBackend;

/// Model serving the conversational assistant.
const CHAT_MODEL: &str = "gemini-3-pro-preview";
/// Model serving the single-shot insight sentence.
const INSIGHT_MODEL: &str = "gemini-flash-lite-latest";
/// Model serving image edits.
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Persona attached to every conversational turn.
pub const SYSTEM_INSTRUCTION: &str = "Você é o assistente virtual da Onzy. Você é profissional, prestativo e fala português. Seu objetivo é ajudar clientes a entenderem os serviços da Onzy (sites, automação, design, sistemas). Seja breve e direto.";

/// Substituted when a chat turn succeeds but carries no text.
pub const CHAT_EMPTY_FALLBACK: &str = "Desculpe, não consegui processar sua resposta.";
/// Substituted when a chat turn fails outright.
pub const CHAT_ERROR_FALLBACK: &str = "Ocorreu um erro ao conectar com a IA.";
/// Substituted when an insight succeeds but carries no text.
pub const INSIGHT_EMPTY_FALLBACK: &str = "Inovação ao seu alcance.";
/// Substituted when an insight fails outright.
pub const INSIGHT_ERROR_FALLBACK: &str = "Transformando o futuro digital.";

/// An image ready for upload: base64 data plus its MIME type.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

/// Encode raw image bytes as base64 for an [`ImagePayload`].
pub fn image_to_base64(bytes: &[u8]) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Client for the Generative Language API.
pub struct GeminiClient {
    config: AssistConfig,
}

impl GeminiClient {
    pub fn new(config: AssistConfig) -> Self {
        Self { config }
    }

    /// Raw `generateContent` call shared by the three operations.
    async fn generate_content(
        &self,
        model: &str,
        body: serde_json::Value,
    ) -> Result<GeminiResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url(),
            model,
            self.config.api_key()
        );

        debug!(model, "Gemini generateContent");

        let request = async {
            let resp = shared_client().post(&url).json(&body).send().await?;
            let status = resp.status().as_u16();
            if status != 200 {
                let body_text = resp.text().await.unwrap_or_default();
                return Err(status_to_error(status, &body_text));
            }
            Ok(resp.json::<GeminiResponse>().await?)
        };

        with_timeout(self.config.request_timeout(), request).await
    }

    /// First candidate's concatenated text, if any came back.
    fn first_text(response: GeminiResponse) -> Option<String> {
        let candidate = response.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    async fn try_chat(&self, history: &[ChatMessage], message: &str) -> Result<Option<String>> {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "parts": [{"text": m.text}],
                })
            })
            .collect();
        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{"text": message}],
        }));

        let body = serde_json::json!({
            "contents": contents,
            "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
        });

        let response = self.generate_content(CHAT_MODEL, body).await?;
        Ok(Self::first_text(response))
    }

    async fn try_insight(&self, topic: &str) -> Result<Option<String>> {
        let prompt = format!(
            "Gere uma frase curta, impactante e vendedora sobre: {topic} para uma agência digital chamada Onzy. Max 20 palavras."
        );
        let body = serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
        });

        let response = self.generate_content(INSIGHT_MODEL, body).await?;
        Ok(Self::first_text(response))
    }

    /// Edit an image, returning the result as a data URI.
    ///
    /// Errors surface to the caller: [`AssistError::NoImage`] when the
    /// response carries no inline-data part, transport and API errors
    /// otherwise.
    pub async fn edit_image(&self, image: &ImagePayload, instruction: &str) -> Result<String> {
        let body = serde_json::json!({
            "contents": {
                "parts": [
                    {"inlineData": {"data": image.data, "mimeType": image.mime_type}},
                    {"text": format!("Edit this image: {instruction}. Return ONLY the image.")},
                ],
            },
        });

        let response = self.generate_content(IMAGE_MODEL, body).await?;
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or(AssistError::NoImage)?;
        for part in candidate.content.parts {
            if let Some(inline) = part.inline_data {
                return Ok(format!("data:{};base64,{}", inline.mime_type, inline.data));
            }
        }
        Err(AssistError::NoImage)
    }
}

#[async_trait]
impl AssistantBackend for GeminiClient {
    async fn chat_turn(&self, history: &[ChatMessage], message: &str) -> String {
        match self.try_chat(history, message).await {
            Ok(Some(text)) => text,
            Ok(None) => CHAT_EMPTY_FALLBACK.to_string(),
            Err(e) => {
                warn!(error = %e, "chat turn failed, substituting fallback");
                CHAT_ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn fast_insight(&self, topic: &str) -> String {
        match self.try_insight(topic).await {
            Ok(Some(text)) => text,
            Ok(None) => INSIGHT_EMPTY_FALLBACK.to_string(),
            Err(e) => {
                warn!(error = %e, "fast insight failed, substituting fallback");
                INSIGHT_ERROR_FALLBACK.to_string()
            }
        }
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    text: Option<String>,
    inline_data: Option<GeminiInlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}
