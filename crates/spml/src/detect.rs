//! Format detection gate for file-import dispatch.

/// File extension SPML documents conventionally use.
pub const EXTENSION: &str = ".xml";

/// Magic substring expected near the start of the document.
const MAGIC: &[u8] = b"<SPML";

/// Score how likely a candidate file is SPML.
///
/// The name contributes 50 for a `.xml` suffix (case-insensitive); the head
/// bytes (callers typically pass the first few hundred) contribute 100 when
/// they contain `<SPML`. The contributions add, so a candidate matching both
/// scores 150; callers with thresholds tuned to scorers that report only one
/// of the two signals should compare against the per-signal values instead.
pub fn detect(filename: &str, head: &[u8]) -> u32 {
    let mut score = 0;
    if filename.to_ascii_lowercase().ends_with(EXTENSION) {
        score += 50;
    }
    if head.windows(MAGIC.len()).any(|w| w == MAGIC) {
        score += 100;
    }
    score
}
