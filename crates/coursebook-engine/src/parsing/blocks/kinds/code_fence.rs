/// Fenced code block type with owned delimiter constants.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    /// Language reported when the opening fence names none.
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    /// Returns the language of an opening fence line, or `None` if the line
    /// does not open a fence.
    pub fn open(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::FENCE)?;
        let language = rest.trim();
        if language.is_empty() {
            Some(Self::DEFAULT_LANGUAGE)
        } else {
            Some(language)
        }
    }

    /// A closing fence is a line that is exactly the fence, ignoring
    /// trailing whitespace. ```` ```js ```` inside an open block is content.
    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::FENCE
    }
}
