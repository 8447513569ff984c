use std::borrow::Cow;
use std::fmt;

/// A paint color in CSS color syntax.
///
/// The value is passed through unchanged to render adapters and to
/// serialized output, so anything the consumer understands (`"red"`,
/// `"#ff0000"`, `"rgb(255 0 0)"`) is acceptable.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(Cow<'static, str>);

impl Color {
    /// The default fill color of a path.
    pub const BLACK: Color = Color::from_static("black");
    pub const BLUE: Color = Color::from_static("blue");
    pub const GREEN: Color = Color::from_static("green");
    pub const RED: Color = Color::from_static("red");

    /// Creates a color from a string known at compile time.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Creates a color from any string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// The color as written in CSS syntax.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<&'static str> for Color {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_and_borrowed_compare_equal() {
        assert_eq!(Color::new(String::from("black")), Color::BLACK);
        assert_eq!(Color::from("#ff0000").to_string(), "#ff0000");
        assert_eq!(Color::default(), Color::BLACK);
    }
}
