/// Text edit actions offered by the selection menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    pub const ALL: [TextAction; 7] = [
        TextAction::Rephrase,
        TextAction::Simplify,
        TextAction::Lengthen,
        TextAction::ToneFormal,
        TextAction::ToneFunny,
        TextAction::ToneSerious,
        TextAction::ToneSad,
    ];

    /// Canonical action kind, as the backend spells it.
    pub fn name(self) -> &'static str {
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

    /// Button caption in the selection menu.
    pub fn label(self) -> &'static str {
        match self {
            TextAction::Rephrase => "Rephrase",
            TextAction::Simplify => "Simplify",
            TextAction::Lengthen => "Expand",
            TextAction::ToneFormal => "Formal",
            TextAction::ToneFunny => "Funny",
            TextAction::ToneSerious => "Serious",
            TextAction::ToneSad => "Sad",
        }
    }
}

/// Image transforms offered by the image menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    pub const ALL: [ImageAction; 8] = [
        ImageAction::Resize,
        ImageAction::Compress,
        ImageAction::EnhanceBrightness,
        ImageAction::EnhanceContrast,
        ImageAction::Blur,
        ImageAction::Sharpen,
        ImageAction::Grayscale,
        ImageAction::Sepia,
    ];

    /// Canonical action kind, as the backend spells it.
    pub fn name(self) -> &'static str {
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

    /// Button caption in the image menu.
    pub fn label(self) -> &'static str {
        match self {
            ImageAction::Resize => "Resize",
            ImageAction::Compress => "Compress",
            ImageAction::EnhanceBrightness => "Brightness",
            ImageAction::EnhanceContrast => "Contrast",
            ImageAction::Blur => "Blur",
            ImageAction::Sharpen => "Sharpen",
            ImageAction::Grayscale => "Grayscale",
            ImageAction::Sepia => "Sepia",
        }
    }
}
