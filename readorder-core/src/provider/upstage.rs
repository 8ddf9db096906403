use glam::Vec2;
use serde::Deserialize;
use snafu::ResultExt;

use crate::{
    error::{DecodeSnafu, ReadorderError},
    layout::element::Fragment,
};

/// Word-level response shape of the Upstage document OCR endpoint.
///
/// Upstage leaves most envelope fields nullable, so everything outside the
/// word list is optional here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstageOcrResponse {
    pub api_version: Option<String>,
    pub confidence: Option<f32>,
    pub metadata: Option<Metadata>,
    pub mime_type: Option<String>,
    pub model_version: Option<String>,
    pub num_billed_pages: Option<i32>,
    #[serde(default)]
    pub pages: Vec<Page>,
    pub stored: Option<bool>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub pages: Vec<MetaPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPage {
    pub height: Option<i32>,
    pub page: Option<i32>,
    pub width: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub confidence: Option<f32>,
    pub height: Option<i32>,
    pub id: Option<i32>,
    pub text: Option<String>,
    pub width: Option<i32>,
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub bounding_box: BoundingBox,
    pub confidence: Option<f32>,
    pub id: Option<i32>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl UpstageOcrResponse {
    /// Flattens the first page's recognized words into fragments. A word
    /// without a confidence value maps to 0.0 and falls to the confidence
    /// filter downstream.
    pub fn fragments(&self) -> Vec<Fragment> {
        let Some(page) = self.pages.first() else {
            return Vec::new();
        };

        page.words
            .iter()
            .map(|word| {
                let vertices: Vec<Vec2> = word
                    .bounding_box
                    .vertices
                    .iter()
                    .map(|v| Vec2::new(v.x, v.y))
                    .collect();

                Fragment::new(word.text.clone(), word.confidence.unwrap_or(0.0), &vertices)
            })
            .collect()
    }
}

pub fn parse(json: &str) -> Result<Vec<Fragment>, ReadorderError> {
    let response: UpstageOcrResponse =
        serde_json::from_str(json).context(DecodeSnafu { provider: "upstage" })?;

    Ok(response.fragments())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "apiVersion": "1.1",
        "confidence": 0.97,
        "metadata": { "pages": [ { "height": 1080, "page": 1, "width": 764 } ] },
        "mimeType": "image/png",
        "modelVersion": "ocr-2.2.1",
        "numBilledPages": 1,
        "pages": [
            {
                "confidence": 0.97,
                "height": 1080,
                "id": 0,
                "text": "Store Name",
                "width": 764,
                "words": [
                    {
                        "boundingBox": {
                            "vertices": [
                                { "x": 10.0, "y": 40.0 },
                                { "x": 55.0, "y": 40.0 },
                                { "x": 55.0, "y": 60.0 },
                                { "x": 10.0, "y": 60.0 }
                            ]
                        },
                        "confidence": 0.99,
                        "id": 0,
                        "text": "Store"
                    },
                    {
                        "boundingBox": {
                            "vertices": [
                                { "x": 62.0, "y": 41.0 },
                                { "x": 98.0, "y": 41.0 },
                                { "x": 98.0, "y": 61.0 },
                                { "x": 62.0, "y": 61.0 }
                            ]
                        },
                        "id": 1,
                        "text": "Name"
                    }
                ]
            }
        ],
        "stored": false,
        "text": "Store Name"
    }"#;

    #[test]
    fn test_parse_words_to_fragments() {
        let fragments = parse(SAMPLE).unwrap();

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "Store");
        assert!((fragments[0].confidence - 0.99).abs() < 1e-6);
        assert_eq!(fragments[0].bbox.min.x, 10.0);
        assert_eq!(fragments[0].bbox.center().y, 50.0);

        // Missing confidence degrades to 0.0 instead of failing to decode.
        assert_eq!(fragments[1].text, "Name");
        assert_eq!(fragments[1].confidence, 0.0);
    }

    #[test]
    fn test_parse_no_pages_is_empty() {
        let json = r#"{ "apiVersion": "1.1", "pages": [] }"#;
        assert!(parse(json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_json_is_decode_error() {
        let result = parse("[1, 2");
        assert!(matches!(result, Err(ReadorderError::Decode { .. })));
    }
}
