use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default: trim + NFC, keeps umlauts composed so answers compare byte-equal
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfc().collect();

        text.replace(['\n', '\r'], " ").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
