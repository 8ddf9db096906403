use glam::Vec2;
use serde::Deserialize;
use snafu::ResultExt;

use crate::{
    error::{DecodeSnafu, ReadorderError},
    layout::element::Fragment,
};

/// Field-level response shape of the Clova general OCR endpoint.
///
/// Only the geometry, text, and confidence of each field feed the pipeline;
/// the rest of the payload is carried so a saved response round-trips without
/// decode errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClovaOcrResponse {
    pub version: String,
    pub request_id: String,
    pub timestamp: i64,
    #[serde(default)]
    pub images: Vec<ImageResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub infer_result: Option<String>,
    pub message: Option<String>,
    pub validation_result: Option<ValidationResult>,
    pub converted_image_info: Option<ConvertedImageInfo>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub result: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedImageInfo {
    pub width: i32,
    pub height: i32,
    pub page_index: i32,
    pub long_image: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub value_type: Option<String>,
    pub infer_text: String,
    pub infer_confidence: f32,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub line_break: bool,
    pub bounding_poly: BoundingPoly,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl ClovaOcrResponse {
    /// Flattens the first image's recognized fields into fragments. A
    /// response with no images degrades to an empty collection.
    pub fn fragments(&self) -> Vec<Fragment> {
        let Some(image) = self.images.first() else {
            return Vec::new();
        };

        image
            .fields
            .iter()
            .map(|field| {
                let vertices: Vec<Vec2> = field
                    .bounding_poly
                    .vertices
                    .iter()
                    .map(|v| Vec2::new(v.x, v.y))
                    .collect();

                Fragment::new(field.infer_text.clone(), field.infer_confidence, &vertices)
            })
            .collect()
    }
}

pub fn parse(json: &str) -> Result<Vec<Fragment>, ReadorderError> {
    let response: ClovaOcrResponse =
        serde_json::from_str(json).context(DecodeSnafu { provider: "clova" })?;

    Ok(response.fragments())
}
