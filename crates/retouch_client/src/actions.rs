use serde::Serialize;

/// Action kinds accepted by `/edit`. The deprecated `shorten` and
/// `change_tone` aliases from earlier backend iterations are intentionally
/// not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAction {
    Rephrase,
    Simplify,
    Lengthen,
    ToneFormal,
    ToneFunny,
    ToneSerious,
    ToneSad,
}

impl TextAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAction::Rephrase => "rephrase",
            TextAction::Simplify => "simplify",
            TextAction::Lengthen => "lengthen",
            TextAction::ToneFormal => "tone_formal",
            TextAction::ToneFunny => "tone_funny",
            TextAction::ToneSerious => "tone_serious",
            TextAction::ToneSad => "tone_sad",
        }
    }
}

/// Action kinds accepted by `/process-image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAction {
    Resize,
    Compress,
    EnhanceBrightness,
    EnhanceContrast,
    Blur,
    Sharpen,
    Grayscale,
    Sepia,
}

impl ImageAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageAction::Resize => "resize",
            ImageAction::Compress => "compress",
            ImageAction::EnhanceBrightness => "enhance_brightness",
            ImageAction::EnhanceContrast => "enhance_contrast",
            ImageAction::Blur => "blur",
            ImageAction::Sharpen => "sharpen",
            ImageAction::Grayscale => "grayscale",
            ImageAction::Sepia => "sepia",
        }
    }
}

/// Default request parameters, derived deterministically from the action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageParams {
    /// Sent only for resize.
    pub width: Option<u32>,
    /// Sent only for resize.
    pub height: Option<u32>,
    pub quality: u32,
    pub factor: f64,
}

impl ImageParams {
    pub fn for_action(action: ImageAction) -> Self {
        let (width, height) = match action {
            ImageAction::Resize => (Some(400), Some(300)),
            _ => (None, None),
        };
        let quality = match action {
            ImageAction::Compress => 70,
            _ => 85,
        };
        let factor = match action {
            ImageAction::EnhanceBrightness => 1.3,
            ImageAction::EnhanceContrast => 1.2,
            ImageAction::Blur => 2.0,
            ImageAction::Sharpen => 1.5,
            _ => 1.0,
        };
        Self {
            width,
            height,
            quality,
            factor,
        }
    }
}
