use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Serialize, Serializer};

/// Which prompt family a search uses for its illustration and narrative.
///
/// - `Factual`: the name matched a real animal; realistic habitat image, factual summary
/// - `Fanciful`: the name is unknown; invented-creature cartoon, humorous description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
    Factual,
    Fanciful,
}

impl PromptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Fanciful => "fanciful",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "factual" => Some(Self::Factual),
            "fanciful" => Some(Self::Fanciful),
            _ => None,
        }
    }

    /// Maps the `isRealAnimal` query parameter: only the literal `"false"` selects
    /// the fanciful prompt.
    pub fn from_is_real_animal(param: Option<&str>) -> Self {
        match param {
            Some("false") => Self::Fanciful,
            _ => Self::Factual,
        }
    }

    pub fn is_real_animal(&self) -> bool {
        matches!(self, Self::Factual)
    }
}

/// A generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IllustrationAsset {
    #[serde(serialize_with = "serialize_base64")]
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// True when produced by the realistic-habitat prompt.
    pub realistic: bool,
}

pub const DEFAULT_IMAGE_MIME: &str = "image/png";

impl IllustrationAsset {
    pub fn new(bytes: Vec<u8>, mode: PromptMode) -> Self {
        Self {
            bytes,
            mime_type: DEFAULT_IMAGE_MIME.to_string(),
            realistic: mode.is_real_animal(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Render as a `data:` URI for inline HTML embedding.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, encode_image(&self.bytes))
    }
}

/// Encode image bytes into the transport-safe text form used by the image model.
pub fn encode_image(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode image bytes from the image model's transport encoding.
pub fn decode_image(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(data.trim())
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode_image(bytes))
}
